//! Aggregation of per-test outcomes into a run summary

use crate::outcome::Outcome;

/// Pass/fail/skip counts for a run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub passed: usize,
    pub failed: usize,
    pub skipped: usize,
}

impl Summary {
    /// Fold a sequence of outcomes into counts
    pub fn from_outcomes<'a, I>(outcomes: I) -> Self
    where
        I: IntoIterator<Item = &'a Outcome>,
    {
        outcomes
            .into_iter()
            .fold(Summary::default(), |mut summary, outcome| {
                match outcome {
                    Outcome::Pass => summary.passed += 1,
                    Outcome::Fail(_) => summary.failed += 1,
                    Outcome::Skip(_) => summary.skipped += 1,
                }
                summary
            })
    }

    pub fn total(&self) -> usize {
        self.passed + self.failed + self.skipped
    }

    /// True when no test failed
    pub fn success(&self) -> bool {
        self.failed == 0
    }
}

/// The outcome of one registered test
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestResult {
    pub name: String,
    pub qualified_name: String,
    pub outcome: Outcome,
}

/// Everything a run produced, in registration order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TestReport {
    /// One entry per reported test
    pub results: Vec<TestResult>,
    /// Counts over `results`
    pub summary: Summary,
    /// Runnable tests left unexecuted after a fail-fast stop.
    ///
    /// These have no entry in `results` and are not part of `summary`.
    pub not_run: usize,
}

impl TestReport {
    pub(crate) fn new(results: Vec<TestResult>, not_run: usize) -> Self {
        let summary = Summary::from_outcomes(results.iter().map(|r| &r.outcome));
        TestReport {
            results,
            summary,
            not_run,
        }
    }

    pub fn success(&self) -> bool {
        self.summary.success()
    }

    /// Results that failed
    pub fn failures(&self) -> impl Iterator<Item = &TestResult> {
        self.results.iter().filter(|r| r.outcome.is_fail())
    }
}
