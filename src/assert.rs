//! Assertion predicates
//!
//! Each predicate is a plain comparison returning a [`Check`]. Compose them
//! with [`crate::all`] and [`crate::and_then`] so a test body returns a single
//! value the executor can score.

use crate::outcome::{Check, Failure};
use std::fmt::Debug;

/// Check that two values are equal
pub fn expect_eq<T>(actual: T, expected: T) -> Check
where
    T: PartialEq + Debug,
{
    if actual == expected {
        Ok(())
    } else {
        Err(Failure::mismatch("values are not equal", expected, actual))
    }
}

/// Check that two values differ
pub fn expect_ne<T>(actual: T, unexpected: T) -> Check
where
    T: PartialEq + Debug,
{
    if actual != unexpected {
        Ok(())
    } else {
        Err(Failure::described(
            "values are equal",
            format!("anything but {:?}", unexpected),
            format!("{:?}", actual),
        ))
    }
}

/// Check that a condition holds
pub fn expect_true(condition: bool, message: &str) -> Check {
    if condition {
        Ok(())
    } else {
        Err(Failure::new(message))
    }
}

/// Check that a condition does not hold
pub fn expect_false(condition: bool, message: &str) -> Check {
    expect_true(!condition, message)
}

/// Check that `haystack` contains `needle`
pub fn expect_contains(haystack: &str, needle: &str) -> Check {
    if haystack.contains(needle) {
        Ok(())
    } else {
        Err(Failure::described(
            format!("string does not contain {:?}", needle),
            format!("contains {:?}", needle),
            format!("{:?}", haystack),
        ))
    }
}

/// Check that `actual < bound`
pub fn expect_lt<T>(actual: T, bound: T) -> Check
where
    T: PartialOrd + Debug,
{
    if actual < bound {
        Ok(())
    } else {
        Err(Failure::described(
            "value is not less than bound",
            format!("< {:?}", bound),
            format!("{:?}", actual),
        ))
    }
}

/// Check that `actual > bound`
pub fn expect_gt<T>(actual: T, bound: T) -> Check
where
    T: PartialOrd + Debug,
{
    if actual > bound {
        Ok(())
    } else {
        Err(Failure::described(
            "value is not greater than bound",
            format!("> {:?}", bound),
            format!("{:?}", actual),
        ))
    }
}

/// Check that a result is `Ok`
pub fn expect_ok<T, E: Debug>(result: &Result<T, E>) -> Check {
    match result {
        Ok(_) => Ok(()),
        Err(e) => Err(Failure::new(format!("expected Ok, got Err({:?})", e))),
    }
}

/// Check that a result is `Err`
pub fn expect_err<T: Debug, E>(result: &Result<T, E>) -> Check {
    match result {
        Ok(v) => Err(Failure::new(format!("expected Err, got Ok({:?})", v))),
        Err(_) => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eq_reports_both_sides() {
        let failure = expect_eq(1 + 1, 3).unwrap_err();
        assert_eq!(failure.expected.as_deref(), Some("3"));
        assert_eq!(failure.actual.as_deref(), Some("2"));
        assert!(expect_eq("a", "a").is_ok());
    }

    #[test]
    fn ordering_and_substring() {
        assert!(expect_lt(1, 2).is_ok());
        assert!(expect_lt(2, 2).is_err());
        assert!(expect_gt(3.5, 1.0).is_ok());
        assert!(expect_contains("hello world", "lo w").is_ok());
        assert!(expect_contains("hello", "Hello").is_err());
    }

    #[test]
    fn boolean_and_result_predicates() {
        assert_eq!(
            expect_true(false, "flag unset").unwrap_err().message,
            "flag unset"
        );
        assert!(expect_false(false, "never").is_ok());
        assert!(expect_ne("x", "y").is_ok());
        let ok: Result<u8, String> = Ok(1);
        let err: Result<u8, String> = Err("boom".to_string());
        assert!(expect_ok(&ok).is_ok());
        assert!(expect_ok(&err).unwrap_err().message.contains("boom"));
        assert!(expect_err(&err).is_ok());
    }
}
