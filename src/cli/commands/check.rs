//! Check command implementation.
//!
//! The `tool-enforcer check` command identifies every configured binary and
//! reports which ones do not satisfy their requirement.

use std::path::{Path, PathBuf};

use crate::cli::args::CheckArgs;
use crate::config::load_and_validate;
use crate::enforce::{EnforcementReport, Enforcer};
use crate::error::{EnforcerError, Result};
use crate::identify::Program;
use crate::ui::UserInterface;
use crate::version::parse_version;

use super::dispatcher::{Command, CommandResult};

/// The check command implementation.
pub struct CheckCommand<F = fn(Program) -> Result<String>>
where
    F: Fn(Program) -> Result<String>,
{
    config_path: PathBuf,
    args: CheckArgs,
    enforcer: Enforcer<F>,
}

impl CheckCommand {
    /// Create a new check command that runs real version commands.
    pub fn new(config_path: &Path, args: CheckArgs) -> Self {
        Self {
            config_path: config_path.to_path_buf(),
            args,
            enforcer: Enforcer::new(),
        }
    }
}

impl<F> CheckCommand<F>
where
    F: Fn(Program) -> Result<String>,
{
    /// Create a check command with a custom enforcer.
    pub fn with_enforcer(config_path: &Path, args: CheckArgs, enforcer: Enforcer<F>) -> Self {
        Self {
            config_path: config_path.to_path_buf(),
            args,
            enforcer,
        }
    }

    fn report_human(&self, report: &EnforcementReport, ui: &mut dyn UserInterface) {
        let verbose = ui.output_mode().shows_successes();
        for result in &report.results {
            if result.outcome.is_satisfied() {
                if verbose {
                    ui.success(&result.describe());
                }
                continue;
            }

            if let Some(version) = result.outcome.version() {
                if parse_version(version).is_err() {
                    ui.warning(&format!(
                        "{} reported '{}', which is not a recognised version",
                        result.name, version
                    ));
                }
            }
            ui.error(&result.describe());
        }

        if report.all_satisfied() && !report.results.is_empty() {
            ui.message(&format!(
                "All {} configured binaries satisfy their requirements",
                report.results.len()
            ));
        }
    }

    fn report_json(&self, report: &EnforcementReport, ui: &mut dyn UserInterface) -> Result<()> {
        let json =
            serde_json::to_string_pretty(report).map_err(|e| EnforcerError::Other(e.into()))?;
        ui.output(&json);
        Ok(())
    }
}

impl<F> Command for CheckCommand<F>
where
    F: Fn(Program) -> Result<String>,
{
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let config = match load_and_validate(&self.config_path) {
            Ok(c) => c,
            Err(EnforcerError::ConfigNotFound { path }) => {
                ui.error(&format!("No configuration found at {}", path.display()));
                return Ok(CommandResult::failure(2));
            }
            Err(e) => return Err(e),
        };

        tracing::debug!("Checking {} binaries", config.binaries.len());
        let report = self.enforcer.check(&config);

        if self.args.json {
            self.report_json(&report, ui)?;
        } else {
            self.report_human(&report, ui);
        }

        if report.all_satisfied() {
            Ok(CommandResult::success())
        } else {
            let failed = report.failures().count();
            tracing::debug!("{} of {} binaries failed", failed, report.results.len());
            Ok(CommandResult::failure(1))
        }
    }
}
