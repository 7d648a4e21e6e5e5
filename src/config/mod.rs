//! Configuration loading, parsing, and validation.
//!
//! - Schema definitions in [`schema`]
//! - File discovery and loading in [`loader`]
//! - Validation in [`validator`]
//!
//! # Example
//!
//! ```
//! use tool_enforcer::config::{load_and_validate, DEFAULT_CONFIG_FILE};
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! let path = temp.path().join(DEFAULT_CONFIG_FILE);
//! fs::write(&path, "binaries:\n  - name: git\n    version: \"~2\"\n").unwrap();
//!
//! let config = load_and_validate(&path).unwrap();
//! assert_eq!(config.binaries[0].name, "git");
//! ```

pub mod loader;
pub mod schema;
pub mod validator;

pub use loader::{
    load_and_validate, load_config, parse_config, resolve_config_path, DEFAULT_CONFIG_FILE,
};
pub use schema::{BinaryConfig, EnforcerConfig};
pub use validator::{validate, validate_config, ValidationError};
