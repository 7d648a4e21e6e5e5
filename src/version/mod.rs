//! Version parsing and requirement matching.
//!
//! This module is the pure core of the enforcer:
//! - [`parse_version`] turns text such as `v1.2.3` or `4` into a [`Version`]
//! - [`parse_requirement`] turns constraints such as `~1.2` or `>= 4.0` into a
//!   [`Requirement`]
//! - [`satisfies`] evaluates one against the other
//!
//! Nothing here performs I/O.
//!
//! # Example
//!
//! ```
//! use tool_enforcer::version::{parse_requirement, parse_version, satisfies};
//!
//! let version = parse_version("2.39.1").unwrap();
//! let requirement = parse_requirement("~2.39").unwrap();
//! assert!(requirement.matches(&version));
//!
//! assert!(satisfies("4.4", ">= 4.0"));
//! assert!(!satisfies("1.2.3", "1.2"));
//! ```

pub mod parse;
pub mod requirement;

pub use parse::{compare_versions, parse_version, Version, VersionError};
pub use requirement::{parse_requirement, satisfies, Operator, Requirement};
