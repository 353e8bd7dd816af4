//! Error types for the mcmod dispatcher.
//!
//! Uses thiserror for derive macros and provides user-actionable error messages.
//! A subcommand that runs and exits non-zero is not an error here: its exit
//! code is propagated as-is by the dispatcher.

use crate::exit_codes;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for mcmod operations.
#[derive(Error, Debug)]
pub enum McmodError {
    /// A required token was absent from the invocation.
    #[error("missing argument: expected {0}")]
    MissingArgument(String),

    /// No script implementation exists for the canonical subcommand name.
    #[error(
        "unknown subcommand '{name}' (no script at {path})\nRun `mcmod help` to list available subcommands."
    )]
    UnknownSubcommand { name: String, path: PathBuf },

    /// The interpreter process could not be created.
    #[error("failed to launch '{program}': {source}")]
    LaunchFailure {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// Configuration file or install root could not be used.
    #[error("{0}")]
    ConfigError(String),
}

impl McmodError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            McmodError::MissingArgument(_) => exit_codes::USER_ERROR,
            McmodError::UnknownSubcommand { .. } => exit_codes::USER_ERROR,
            McmodError::LaunchFailure { .. } => exit_codes::LAUNCH_FAILURE,
            McmodError::ConfigError(_) => exit_codes::USER_ERROR,
        }
    }
}

/// Result type alias for mcmod operations.
pub type Result<T> = std::result::Result<T, McmodError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn missing_argument_has_correct_exit_code() {
        let err = McmodError::MissingArgument("subcommand after --verbose".to_string());
        assert_eq!(err.exit_code(), exit_codes::USER_ERROR);
    }

    #[test]
    fn unknown_subcommand_has_correct_exit_code() {
        let err = McmodError::UnknownSubcommand {
            name: "nope".to_string(),
            path: PathBuf::from("scripts/nope.py"),
        };
        assert_eq!(err.exit_code(), exit_codes::USER_ERROR);
    }

    #[test]
    fn launch_failure_has_correct_exit_code() {
        let err = McmodError::LaunchFailure {
            program: "python3".to_string(),
            source: io::Error::new(io::ErrorKind::NotFound, "not found"),
        };
        assert_eq!(err.exit_code(), exit_codes::LAUNCH_FAILURE);
    }

    #[test]
    fn config_error_has_correct_exit_code() {
        let err = McmodError::ConfigError("bad yaml".to_string());
        assert_eq!(err.exit_code(), exit_codes::USER_ERROR);
    }

    #[test]
    fn error_messages_are_descriptive() {
        let err = McmodError::MissingArgument("subcommand after --verbose".to_string());
        assert_eq!(
            err.to_string(),
            "missing argument: expected subcommand after --verbose"
        );

        let err = McmodError::UnknownSubcommand {
            name: "bulid".to_string(),
            path: PathBuf::from("scripts/bulid.py"),
        };
        let msg = err.to_string();
        assert!(msg.contains("'bulid'"));
        assert!(msg.contains("mcmod help"));
    }
}
