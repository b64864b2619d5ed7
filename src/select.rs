//! Selection of the runnable subset from modifiers and the name filter

use crate::outcome::SkipReason;
use crate::registry::{Modifier, TestCase};
use tracing::debug;

/// The runnable tests and the exclusions, both as registration indices
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    /// Indices of tests to execute, in registration order
    pub runnable: Vec<usize>,
    /// Indices of excluded tests with the reason, in registration order
    pub skipped: Vec<(usize, SkipReason)>,
}

/// Partition `tests` into runnable and skipped
///
/// A test runs iff it is not marked skip, it is marked only whenever any
/// test is, and its qualified name contains `filter` (case-sensitive). When
/// several exclusions apply, the reason reported is the first of: skip
/// modifier, only, filter.
pub fn select(tests: &[TestCase], filter: Option<&str>) -> Selection {
    let any_only = tests.iter().any(|t| t.modifier == Modifier::Only);
    let mut selection = Selection::default();

    for (index, test) in tests.iter().enumerate() {
        match exclusion(test, any_only, filter) {
            Some(reason) => selection.skipped.push((index, reason)),
            None => selection.runnable.push(index),
        }
    }

    debug!(
        target: "testrun::select",
        total = tests.len(),
        runnable = selection.runnable.len(),
        skipped = selection.skipped.len(),
        any_only,
        filter = filter.unwrap_or(""),
        "selected tests"
    );
    selection
}

fn exclusion(test: &TestCase, any_only: bool, filter: Option<&str>) -> Option<SkipReason> {
    if test.modifier == Modifier::Skip {
        return Some(SkipReason::Explicit);
    }
    if any_only && test.modifier != Modifier::Only {
        return Some(SkipReason::NotOnly);
    }
    match filter {
        Some(f) if !test.qualified_name.contains(f) => Some(SkipReason::Filtered),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn case(name: &str, modifier: Modifier) -> TestCase {
        TestCase::new(name, modifier, Box::new(|| Ok(())))
    }

    #[test]
    fn everything_runs_without_modifiers() {
        let tests = vec![case("a", Modifier::Normal), case("b", Modifier::Normal)];
        let selection = select(&tests, None);
        assert_eq!(selection.runnable, [0, 1]);
        assert!(selection.skipped.is_empty());
    }

    #[test]
    fn only_excludes_normal_tests_regardless_of_filter() {
        let tests = vec![
            case("alpha", Modifier::Normal),
            case("beta", Modifier::Only),
            case("alphabet", Modifier::Skip),
        ];
        let selection = select(&tests, Some("alpha"));
        assert!(selection.runnable.is_empty());
        assert_eq!(
            selection.skipped,
            [
                (0, SkipReason::NotOnly),
                (1, SkipReason::Filtered),
                (2, SkipReason::Explicit),
            ]
        );
    }

    #[test]
    fn filter_is_case_sensitive_substring() {
        let tests = vec![
            case("Parser handles input", Modifier::Normal),
            case("parser rejects garbage", Modifier::Normal),
        ];
        let selection = select(&tests, Some("parser"));
        assert_eq!(selection.runnable, [1]);
        assert_eq!(selection.skipped, [(0, SkipReason::Filtered)]);
    }

    #[test]
    fn empty_filter_matches_everything() {
        let tests = vec![case("x", Modifier::Normal)];
        assert_eq!(select(&tests, Some("")).runnable, [0]);
    }
}
