//! Programs command implementation.
//!
//! The `tool-enforcer programs` command lists the binaries that can be named
//! in configuration.

use crate::error::Result;
use crate::identify::Program;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The programs command implementation.
pub struct ProgramsCommand;

impl Command for ProgramsCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        for program in Program::all() {
            ui.output(&format!("{}  ({})", program.name(), program.version_command()));
        }
        Ok(CommandResult::success())
    }
}
