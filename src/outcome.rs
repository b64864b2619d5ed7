//! Test outcomes and the combinators that compose assertion results

use std::fmt;

/// Details of a failed assertion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Failure {
    /// Human readable description of what went wrong
    pub message: String,
    /// Rendering of the expected value, when the predicate had one
    pub expected: Option<String>,
    /// Rendering of the actual value, when the predicate had one
    pub actual: Option<String>,
}

impl Failure {
    /// Create a failure carrying only a message
    pub fn new(message: impl Into<String>) -> Self {
        Failure {
            message: message.into(),
            expected: None,
            actual: None,
        }
    }

    /// Create a failure with an expected/actual breakdown
    pub fn mismatch(
        message: impl Into<String>,
        expected: impl fmt::Debug,
        actual: impl fmt::Debug,
    ) -> Self {
        Failure {
            message: message.into(),
            expected: Some(format!("{:?}", expected)),
            actual: Some(format!("{:?}", actual)),
        }
    }

    /// Create a failure from already rendered expected/actual descriptions
    pub fn described(
        message: impl Into<String>,
        expected: impl Into<String>,
        actual: impl Into<String>,
    ) -> Self {
        Failure {
            message: message.into(),
            expected: Some(expected.into()),
            actual: Some(actual.into()),
        }
    }
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl From<String> for Failure {
    fn from(message: String) -> Self {
        Failure::new(message)
    }
}

impl From<&str> for Failure {
    fn from(message: &str) -> Self {
        Failure::new(message)
    }
}

/// Result of a single assertion or of a chain of assertions
pub type Check = std::result::Result<(), Failure>;

/// Conversion from a test body's return value into a [`Check`]
///
/// A body returning `()` never observed a failure and is scored as a pass.
pub trait IntoCheck {
    fn into_check(self) -> Check;
}

impl IntoCheck for () {
    fn into_check(self) -> Check {
        Ok(())
    }
}

impl IntoCheck for Check {
    fn into_check(self) -> Check {
        self
    }
}

/// Why a registered test was not executed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SkipReason {
    /// Registered with `skip` or `xit`
    Explicit,
    /// Another test was registered with `only` or `fit`
    NotOnly,
    /// Qualified name did not contain the run filter
    Filtered,
}

impl SkipReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            SkipReason::Explicit => "skip modifier",
            SkipReason::NotOnly => "excluded by only",
            SkipReason::Filtered => "excluded by filter",
        }
    }
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The per-test result
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Pass,
    Fail(Failure),
    Skip(SkipReason),
}

impl Outcome {
    pub fn is_pass(&self) -> bool {
        matches!(self, Outcome::Pass)
    }

    pub fn is_fail(&self) -> bool {
        matches!(self, Outcome::Fail(_))
    }

    pub fn is_skip(&self) -> bool {
        matches!(self, Outcome::Skip(_))
    }
}

impl From<Check> for Outcome {
    fn from(check: Check) -> Self {
        match check {
            Ok(()) => Outcome::Pass,
            Err(failure) => Outcome::Fail(failure),
        }
    }
}

/// Combine several checks, yielding the first failure if any
///
/// ```
/// use testrun_rs::{all, Failure};
///
/// assert!(all([Ok(()), Ok(())]).is_ok());
/// let combined = all([Ok(()), Err(Failure::new("x")), Err(Failure::new("y"))]);
/// assert_eq!(combined.unwrap_err().message, "x");
/// ```
pub fn all<I>(checks: I) -> Check
where
    I: IntoIterator<Item = Check>,
{
    checks.into_iter().collect()
}

/// Run `next` only if `check` passed
pub fn and_then<F>(check: Check, next: F) -> Check
where
    F: FnOnce() -> Check,
{
    check.and_then(|()| next())
}
