//! Configuration validation rules.
//!
//! - Every binary must name a supported program
//! - Every requirement must parse
//! - A binary may only be listed once

use crate::config::schema::EnforcerConfig;
use crate::error::{EnforcerError, Result};
use std::collections::HashSet;

/// Validation error with context.
#[derive(Debug, Clone)]
pub struct ValidationError {
    /// Rule identifier
    pub rule: String,
    /// Human-readable error message
    pub message: String,
    /// Binary name the error refers to
    pub binary: String,
}

/// Validate a configuration and return all errors.
///
/// Collects every problem rather than stopping at the first one, so users
/// can fix them all at once.
pub fn validate_config(config: &EnforcerConfig) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    let mut seen = HashSet::new();

    for binary in &config.binaries {
        if binary.program().is_err() {
            errors.push(ValidationError {
                rule: "unknown-program".to_string(),
                message: format!("Binary '{}' is not a supported program", binary.name),
                binary: binary.name.clone(),
            });
        }

        if let Err(e) = binary.requirement() {
            errors.push(ValidationError {
                rule: "invalid-requirement".to_string(),
                message: format!("Binary '{}': {}", binary.name, e),
                binary: binary.name.clone(),
            });
        }

        if !seen.insert(binary.name.as_str()) {
            errors.push(ValidationError {
                rule: "duplicate-binary".to_string(),
                message: format!("Binary '{}' is listed more than once", binary.name),
                binary: binary.name.clone(),
            });
        }
    }

    errors
}

/// Validate and return Result (for convenience).
///
/// # Errors
///
/// Returns `ConfigValidationError` if any validation rules fail.
pub fn validate(config: &EnforcerConfig) -> Result<()> {
    let errors = validate_config(config);

    if errors.is_empty() {
        Ok(())
    } else {
        for e in &errors {
            tracing::debug!("Validation failed [{}]: {}", e.rule, e.message);
        }
        let messages: Vec<_> = errors.iter().map(|e| e.message.clone()).collect();
        Err(EnforcerError::ConfigValidationError {
            message: messages.join("; "),
        })
    }
}
