//! Enforcement of configured version requirements.
//!
//! The `Enforcer` identifies each configured binary and evaluates its
//! requirement, collecting one result per binary.

use crate::config::{BinaryConfig, EnforcerConfig};
use crate::enforce::status::{CheckOutcome, CheckResult, EnforcementReport};
use crate::error::Result;
use crate::identify::{identify, Program};
use crate::version::parse_version;

/// Checks configured binaries against their requirements.
///
/// The identifier is a closure so tests can supply versions without
/// running any commands.
pub struct Enforcer<F>
where
    F: Fn(Program) -> Result<String>,
{
    identifier: F,
}

impl Enforcer<fn(Program) -> Result<String>> {
    /// Create an enforcer that runs each program's version command.
    pub fn new() -> Self {
        Self {
            identifier: identify,
        }
    }
}

impl Default for Enforcer<fn(Program) -> Result<String>> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F> Enforcer<F>
where
    F: Fn(Program) -> Result<String>,
{
    /// Create an enforcer with a custom version identifier.
    pub fn with_identifier(identifier: F) -> Self {
        Self { identifier }
    }

    /// Check every binary in configuration order.
    pub fn check(&self, config: &EnforcerConfig) -> EnforcementReport {
        let results = config
            .binaries
            .iter()
            .map(|binary| self.check_one(binary))
            .collect();
        EnforcementReport { results }
    }

    /// Check a single binary.
    pub fn check_one(&self, binary: &BinaryConfig) -> CheckResult {
        let outcome = self.evaluate(binary);
        match &outcome {
            CheckOutcome::Satisfied { version } => tracing::debug!(
                binary = %binary.name,
                requirement = %binary.version,
                version = %version,
                "version satisfies requirement"
            ),
            CheckOutcome::Unsatisfied { version } => tracing::debug!(
                binary = %binary.name,
                requirement = %binary.version,
                version = %version,
                "version does not satisfy requirement"
            ),
            CheckOutcome::Unidentified { message } => tracing::debug!(
                binary = %binary.name,
                error = %message,
                "failed to identify program"
            ),
        }
        CheckResult {
            name: binary.name.clone(),
            requirement: binary.version.clone(),
            outcome,
        }
    }

    fn evaluate(&self, binary: &BinaryConfig) -> CheckOutcome {
        let identified = binary
            .program()
            .and_then(|program| (self.identifier)(program));
        let version = match identified {
            Ok(v) => v,
            Err(e) => {
                return CheckOutcome::Unidentified {
                    message: e.to_string(),
                }
            }
        };

        let requirement = match binary.requirement() {
            Ok(r) => r,
            Err(e) => {
                tracing::warn!("{}", e);
                return CheckOutcome::Unsatisfied { version };
            }
        };

        // A tool that reports something we cannot parse never satisfies.
        let satisfied = match parse_version(&version) {
            Ok(parsed) => requirement.matches(&parsed),
            Err(e) => {
                tracing::debug!("Reported version '{}' is not parseable: {}", version, e);
                false
            }
        };

        if satisfied {
            CheckOutcome::Satisfied { version }
        } else {
            CheckOutcome::Unsatisfied { version }
        }
    }
}
