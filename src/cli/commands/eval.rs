//! Eval command implementation.
//!
//! The `tool-enforcer eval` command tests a single version against a single
//! requirement, reporting parse errors instead of folding them into "no".

use crate::cli::args::EvalArgs;
use crate::error::Result;
use crate::ui::UserInterface;
use crate::version::{parse_requirement, parse_version};

use super::dispatcher::{Command, CommandResult};

/// The eval command implementation.
pub struct EvalCommand {
    args: EvalArgs,
}

impl EvalCommand {
    /// Create a new eval command.
    pub fn new(args: EvalArgs) -> Self {
        Self { args }
    }
}

impl Command for EvalCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let version = match parse_version(&self.args.version) {
            Ok(v) => v,
            Err(e) => {
                ui.error(&format!("Invalid version '{}': {}", self.args.version, e));
                return Ok(CommandResult::failure(1));
            }
        };

        let requirement = match parse_requirement(&self.args.requirement) {
            Ok(r) => r,
            Err(e) => {
                ui.error(&format!(
                    "Invalid requirement '{}': {}",
                    self.args.requirement, e
                ));
                return Ok(CommandResult::failure(1));
            }
        };

        tracing::debug!(
            version = %version,
            target = %requirement.target(),
            "Evaluating requirement {}",
            requirement
        );

        if requirement.matches(&version) {
            ui.success(&format!("{} satisfies {}", version, requirement));
            Ok(CommandResult::success())
        } else {
            ui.error(&format!("{} does not satisfy {}", version, requirement));
            Ok(CommandResult::failure(1))
        }
    }
}
