//! Error types for tool-enforcer operations.
//!
//! This module defines [`EnforcerError`], the primary error type used
//! throughout the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Version and requirement parsing report [`VersionError`], which callers
//!   wrap with the requirement text when it came from configuration
//! - Use `EnforcerError` for domain-specific errors that need distinct handling
//! - Use `anyhow::Error` (via `EnforcerError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

use crate::version::VersionError;

/// Core error type for tool-enforcer operations.
#[derive(Debug, Error)]
pub enum EnforcerError {
    /// Configuration file not found at expected location.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// Invalid configuration structure or values.
    #[error("Invalid configuration: {message}")]
    ConfigValidationError { message: String },

    /// Binary name is not one we know how to identify.
    #[error("Unsupported program: {name}")]
    UnknownProgram { name: String },

    /// Requirement text could not be parsed.
    #[error("Invalid requirement '{requirement}': {source}")]
    InvalidRequirement {
        requirement: String,
        #[source]
        source: VersionError,
    },

    /// Version command could not be run or exited non-zero.
    #[error("Command failed with exit code {code:?}: {command}")]
    CommandFailed { command: String, code: Option<i32> },

    /// Version command ran but its output held no version.
    #[error("No version found in output of {program}")]
    VersionNotFound { program: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for tool-enforcer operations.
pub type Result<T> = std::result::Result<T, EnforcerError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn config_not_found_displays_path() {
        let err = EnforcerError::ConfigNotFound {
            path: PathBuf::from("/foo/tool-enforcer.yml"),
        };
        assert!(err.to_string().contains("/foo/tool-enforcer.yml"));
    }

    #[test]
    fn config_parse_error_displays_path_and_message() {
        let err = EnforcerError::ConfigParseError {
            path: PathBuf::from("/config.yml"),
            message: "invalid syntax".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("/config.yml"));
        assert!(msg.contains("invalid syntax"));
    }

    #[test]
    fn config_validation_error_displays_message() {
        let err = EnforcerError::ConfigValidationError {
            message: "unknown program 'cmake'".into(),
        };
        assert!(err.to_string().contains("unknown program 'cmake'"));
    }

    #[test]
    fn unknown_program_displays_name() {
        let err = EnforcerError::UnknownProgram {
            name: "cmake".into(),
        };
        assert!(err.to_string().contains("cmake"));
    }

    #[test]
    fn invalid_requirement_keeps_source() {
        let err = EnforcerError::InvalidRequirement {
            requirement: "~1.x".into(),
            source: VersionError::InvalidInteger {
                segment: "x".into(),
            },
        };
        assert!(err.to_string().contains("~1.x"));
        assert!(err.source().is_some());
    }

    #[test]
    fn command_failed_displays_command_and_code() {
        let err = EnforcerError::CommandFailed {
            command: "git --version".into(),
            code: Some(127),
        };
        let msg = err.to_string();
        assert!(msg.contains("git --version"));
        assert!(msg.contains("127"));
    }

    #[test]
    fn version_not_found_displays_program() {
        let err = EnforcerError::VersionNotFound {
            program: "make".into(),
        };
        assert!(err.to_string().contains("make"));
    }

    #[test]
    fn io_error_converts_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: EnforcerError = io_err.into();
        assert!(matches!(err, EnforcerError::Io(_)));
    }

    #[test]
    fn result_type_alias_works() {
        fn returns_error() -> Result<()> {
            Err(EnforcerError::ConfigValidationError {
                message: "test".into(),
            })
        }
        assert!(returns_error().is_err());
    }
}
