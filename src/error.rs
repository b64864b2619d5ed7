//! Error types for testrun-rs

use crate::registry::HookKind;
use thiserror::Error;

/// Result type alias for testrun operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for testrun operations
///
/// Assertion failures are not errors: they travel as [`crate::Failure`]
/// values inside [`crate::Outcome::Fail`]. Only problems that must stop the
/// whole run end up here.
#[derive(Error, Debug)]
pub enum Error {
    /// Regex error
    #[error("Regex error: {0}")]
    Regex(#[from] regex::Error),
    /// IO error occurred
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// WalkDir error
    #[error("Directory walk error: {0}")]
    WalkDir(#[from] walkdir::Error),

    /// Registration attempted after the context started running
    #[error("Cannot register '{name}': registration must precede any run call")]
    RegistrationMisuse { name: String },

    /// A run was requested while a suite builder was still executing
    #[error("Cannot run while suite '{name}' is still being described")]
    OpenSuite { name: String },

    /// A run was requested on a context that is already running
    #[error("A run is already in progress on this context")]
    RunInProgress,

    /// A lifecycle hook failed; the run is aborted
    #[error("{kind} hook failed: {source}")]
    Hook {
        kind: HookKind,
        #[source]
        source: Box<Error>,
    },

    /// Unknown reporter name in configuration
    #[error("Unknown reporter: {name} (expected pretty, dot or compact)")]
    UnknownReporter { name: String },

    /// Generic error with message
    #[error("{0}")]
    Generic(String),
}

impl Error {
    /// Create a registration misuse error
    pub fn registration_misuse(name: impl Into<String>) -> Self {
        Error::RegistrationMisuse { name: name.into() }
    }

    /// Wrap an error returned by a hook
    pub fn hook_error(kind: HookKind, source: Error) -> Self {
        Error::Hook {
            kind,
            source: Box::new(source),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hook_error_names_the_hook() {
        let err = Error::hook_error(HookKind::BeforeEach, Error::Generic("db down".to_string()));
        assert_eq!(err.to_string(), "beforeEach hook failed: db down");
    }

    #[test]
    fn misuse_message_mentions_test() {
        let err = Error::registration_misuse("late test");
        assert!(err.to_string().contains("'late test'"));
    }
}
