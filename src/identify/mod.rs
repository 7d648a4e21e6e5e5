//! Program identification.
//!
//! Finds out which version of a tool is installed by running its version
//! command and reading the banner it prints.
//!
//! # Modules
//!
//! - [`program`] - Supported programs and their version commands
//! - [`command`] - Running the version command
//! - [`extract`] - Pulling the version token out of the banner
//!
//! # Example
//!
//! ```
//! use tool_enforcer::identify::{identify_with, Program};
//!
//! let version = identify_with(Program::Git, |_| Ok("git version 2.39.1\n".to_string())).unwrap();
//! assert_eq!(version, "2.39.1");
//! ```

pub mod command;
pub mod extract;
pub mod program;

pub use command::run_version_command;
pub use extract::extract_version;
pub use program::Program;

use crate::error::Result;

/// Identify the installed version of `program` by running it.
pub fn identify(program: Program) -> Result<String> {
    identify_with(program, run_version_command)
}

/// Identify the version of `program` using a custom command runner.
///
/// This allows testing without the tool being installed.
pub fn identify_with<F>(program: Program, run: F) -> Result<String>
where
    F: Fn(Program) -> Result<String>,
{
    let output = run(program)?;
    let version = extract_version(program, &output)?;
    tracing::debug!("Identified {} version {}", program, version);
    Ok(version)
}
