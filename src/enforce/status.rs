//! Check outcome types.
//!
//! Each configured binary produces a `CheckResult` describing whether the
//! installed version meets its requirement.

use serde::Serialize;

/// The outcome of checking a single binary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum CheckOutcome {
    /// Installed version satisfies the requirement.
    Satisfied {
        /// Version text as reported by the tool
        version: String,
    },

    /// Installed version does not satisfy the requirement, or could not be
    /// parsed as a version.
    Unsatisfied {
        /// Version text as reported by the tool
        version: String,
    },

    /// The version could not be determined at all (binary missing, command
    /// failed, no output).
    Unidentified {
        /// Why identification failed
        message: String,
    },
}

impl CheckOutcome {
    /// Whether the requirement is met.
    pub fn is_satisfied(&self) -> bool {
        matches!(self, CheckOutcome::Satisfied { .. })
    }

    /// The identified version text, if any.
    pub fn version(&self) -> Option<&str> {
        match self {
            CheckOutcome::Satisfied { version } | CheckOutcome::Unsatisfied { version } => {
                Some(version)
            }
            CheckOutcome::Unidentified { .. } => None,
        }
    }
}

/// The result of checking one configured binary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckResult {
    /// Binary name from config
    pub name: String,
    /// Requirement text from config
    pub requirement: String,
    /// What the check found
    #[serde(flatten)]
    pub outcome: CheckOutcome,
}

impl CheckResult {
    /// One-line human summary, as printed by `check`.
    pub fn describe(&self) -> String {
        match &self.outcome {
            CheckOutcome::Satisfied { version } => format!(
                "{} version {} satisfies requirement {}",
                self.name, version, self.requirement
            ),
            CheckOutcome::Unsatisfied { version } => format!(
                "{} version {} does not satisfy requirement {}",
                self.name, version, self.requirement
            ),
            CheckOutcome::Unidentified { message } => {
                format!("{} could not be identified: {}", self.name, message)
            }
        }
    }
}

/// All results from one enforcement run.
#[derive(Debug, Clone, Default, Serialize)]
pub struct EnforcementReport {
    /// Results in configuration order
    pub results: Vec<CheckResult>,
}

impl EnforcementReport {
    /// Whether every binary satisfied its requirement.
    pub fn all_satisfied(&self) -> bool {
        self.results.iter().all(|r| r.outcome.is_satisfied())
    }

    /// Results that did not satisfy their requirement.
    pub fn failures(&self) -> impl Iterator<Item = &CheckResult> {
        self.results.iter().filter(|r| !r.outcome.is_satisfied())
    }
}
