//! Running a program's version command.

use std::process::{Command, Stdio};
use std::time::Instant;

use crate::error::{EnforcerError, Result};

use super::program::Program;

/// Run `<program> --version` and return stdout followed by stderr.
///
/// Some tools print their banner on stderr, so both streams are kept.
///
/// # Errors
///
/// Returns `CommandFailed` if the binary cannot be spawned or exits non-zero.
pub fn run_version_command(program: Program) -> Result<String> {
    let start = Instant::now();
    let command = program.version_command();

    let output = Command::new(program.name())
        .args(program.version_args())
        .stdin(Stdio::null())
        .output()
        .map_err(|e| {
            tracing::debug!("Failed to spawn '{}': {}", command, e);
            EnforcerError::CommandFailed {
                command: command.clone(),
                code: None,
            }
        })?;

    let mut combined = String::from_utf8_lossy(&output.stdout).to_string();
    combined.push_str(&String::from_utf8_lossy(&output.stderr));

    tracing::debug!(
        "'{}' exited with {:?} in {:?}",
        command,
        output.status.code(),
        start.elapsed()
    );

    if !output.status.success() {
        tracing::debug!("Output of failed '{}': {}", command, combined.trim());
        return Err(EnforcerError::CommandFailed {
            command,
            code: output.status.code(),
        });
    }

    Ok(combined)
}
