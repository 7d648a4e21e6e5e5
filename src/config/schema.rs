//! Configuration schema definitions.
//!
//! These structs map to the YAML configuration file format.

use serde::{Deserialize, Serialize};

use crate::error::{EnforcerError, Result};
use crate::identify::Program;
use crate::version::{parse_requirement, Requirement};

/// Root configuration structure for tool-enforcer.yml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EnforcerConfig {
    /// Binaries to check, in the order they are reported
    pub binaries: Vec<BinaryConfig>,
}

/// A single binary and the version it must satisfy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BinaryConfig {
    /// Program name (e.g., "make", "git")
    pub name: String,

    /// Requirement text (e.g., "~2", ">= 4.0")
    pub version: String,
}

impl BinaryConfig {
    /// Create a binary entry.
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
        }
    }

    /// Resolve the program this entry refers to.
    pub fn program(&self) -> Result<Program> {
        self.name.parse()
    }

    /// Parse the requirement text.
    pub fn requirement(&self) -> Result<Requirement> {
        parse_requirement(&self.version).map_err(|source| EnforcerError::InvalidRequirement {
            requirement: self.version.clone(),
            source,
        })
    }
}
