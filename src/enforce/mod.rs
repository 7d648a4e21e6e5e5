//! Requirement enforcement.
//!
//! # Modules
//!
//! - [`checker`] - Identifies configured binaries and evaluates requirements
//! - [`status`] - Outcome and report types

pub mod checker;
pub mod status;

pub use checker::Enforcer;
pub use status::{CheckOutcome, CheckResult, EnforcementReport};
