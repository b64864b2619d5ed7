//! Configuration parameters for test runs

use crate::error::Result;
use crate::report::{ColorMode, ReporterKind};

/// Configuration parameters for running tests
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOptions {
    /// Only run tests whose qualified name contains this substring
    pub filter: Option<String>,
    /// Stop executing after the first failing test
    pub fail_fast: bool,
    /// Reporter used when results are printed
    pub reporter: ReporterKind,
    /// Whether printed results are colored
    pub color: ColorMode,
}

impl RunOptions {
    /// Create options that run everything with the pretty reporter
    pub fn new() -> Self {
        RunOptions {
            filter: None,
            fail_fast: false,
            reporter: ReporterKind::Pretty,
            color: ColorMode::Auto,
        }
    }

    /// Create options from the environment
    ///
    /// Reads `TESTRUN_FILTER`, `TESTRUN_FAIL_FAST`, `TESTRUN_REPORTER` and
    /// `NO_COLOR` on top of the defaults.
    pub fn from_env() -> Result<Self> {
        Self::new().with_env(|key| std::env::var(key).ok())
    }

    /// Set the name filter; an empty filter matches every test
    pub fn filter(mut self, filter: impl Into<String>) -> Self {
        let filter = filter.into();
        self.filter = if filter.is_empty() { None } else { Some(filter) };
        self
    }

    /// Enable or disable stopping after the first failure
    pub fn fail_fast(mut self, fail_fast: bool) -> Self {
        self.fail_fast = fail_fast;
        self
    }

    /// Select the reporter used for printing
    pub fn reporter(mut self, reporter: ReporterKind) -> Self {
        self.reporter = reporter;
        self
    }

    pub fn color(mut self, color: ColorMode) -> Self {
        self.color = color;
        self
    }

    fn with_env<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(filter) = lookup("TESTRUN_FILTER") {
            self = self.filter(filter);
        }
        if let Some(value) = lookup("TESTRUN_FAIL_FAST") {
            self.fail_fast = value == "1" || value.to_lowercase() == "true";
        }
        if let Some(name) = lookup("TESTRUN_REPORTER") {
            self.reporter = name.parse()?;
        }
        if lookup("NO_COLOR").is_some() {
            self.color = ColorMode::Never;
        }
        Ok(self)
    }
}

impl Default for RunOptions {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use std::collections::HashMap;

    fn from_vars(vars: &[(&str, &str)]) -> Result<RunOptions> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        RunOptions::new().with_env(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_without_environment() {
        let options = from_vars(&[]).unwrap();
        assert_eq!(options, RunOptions::new());
        assert_eq!(options.reporter, ReporterKind::Pretty);
        assert!(options.filter.is_none());
    }

    #[test]
    fn environment_overrides() {
        let options = from_vars(&[
            ("TESTRUN_FILTER", "parser"),
            ("TESTRUN_FAIL_FAST", "TRUE"),
            ("TESTRUN_REPORTER", "dot"),
            ("NO_COLOR", ""),
        ])
        .unwrap();
        assert_eq!(options.filter.as_deref(), Some("parser"));
        assert!(options.fail_fast);
        assert_eq!(options.reporter, ReporterKind::Dot);
        assert_eq!(options.color, ColorMode::Never);
    }

    #[test]
    fn empty_filter_means_none() {
        assert!(from_vars(&[("TESTRUN_FILTER", "")]).unwrap().filter.is_none());
        assert!(RunOptions::new().filter("").filter.is_none());
    }

    #[test]
    fn unknown_reporter_is_an_error() {
        let err = from_vars(&[("TESTRUN_REPORTER", "tap")]).unwrap_err();
        assert!(matches!(err, Error::UnknownReporter { ref name } if name == "tap"));
    }
}
