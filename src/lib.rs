//! tool-enforcer - Check installed tool versions against declared requirements.
//!
//! A project lists the tool binaries it needs and the versions it accepts in
//! `tool-enforcer.yml`. tool-enforcer runs each tool's version command,
//! extracts the version it reports, and checks it against the requirement.
//!
//! # Modules
//!
//! - [`version`] - Version and requirement parsing and matching
//! - [`identify`] - Running version commands and reading their banners
//! - [`config`] - Configuration loading, parsing, and validation
//! - [`enforce`] - Checking configured binaries
//! - [`cli`] - Command-line interface and argument parsing
//! - [`ui`] - Terminal output
//! - [`error`] - Error types and result aliases
//!
//! # Example
//!
//! ```
//! use tool_enforcer::version::satisfies;
//!
//! assert!(satisfies("1.2.4", "~1.2.3"));
//! assert!(!satisfies("1.3", "~1.2.3"));
//! assert!(satisfies("1.2.3", "> 1.2"));
//! ```

pub mod cli;
pub mod config;
pub mod enforce;
pub mod error;
pub mod identify;
pub mod ui;
pub mod version;

pub use error::{EnforcerError, Result};
