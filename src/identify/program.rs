//! Programs whose versions can be identified.

use std::fmt;
use std::str::FromStr;

use crate::error::EnforcerError;

/// A tool binary tool-enforcer knows how to query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Program {
    Make,
    Git,
}

impl Program {
    /// Every supported program, in display order.
    pub fn all() -> &'static [Program] {
        &[Program::Make, Program::Git]
    }

    /// Binary name as invoked on PATH and written in config.
    pub fn name(&self) -> &'static str {
        match self {
            Program::Make => "make",
            Program::Git => "git",
        }
    }

    /// Arguments that make the binary print its version banner.
    pub fn version_args(&self) -> &'static [&'static str] {
        &["--version"]
    }

    /// The full version command, for messages.
    pub fn version_command(&self) -> String {
        let mut parts = vec![self.name()];
        parts.extend(self.version_args());
        parts.join(" ")
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Program {
    type Err = EnforcerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Program::all()
            .iter()
            .copied()
            .find(|p| p.name() == s)
            .ok_or_else(|| EnforcerError::UnknownProgram {
                name: s.to_string(),
            })
    }
}
