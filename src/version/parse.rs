//! Structured versions with optional minor and patch components.
//!
//! A version written as `1` and one written as `1.0` are different values:
//! the second carries a minor component and the first does not. Ordering is
//! presence-aware, so a component that is present always outranks one that
//! is absent, whatever its numeric value.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Maximum number of dot-separated segments in a version.
const MAX_PARTS: usize = 3;

/// Errors produced while parsing a version or requirement.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VersionError {
    /// The text had more than three dot-separated segments.
    #[error("invalid version, too many parts ({count}, at most 3 allowed)")]
    TooManyParts { count: usize },

    /// A segment was not a non-negative integer.
    #[error("invalid version component '{segment}', expected a non-negative integer")]
    InvalidInteger { segment: String },
}

/// A `major[.minor[.patch]]` version.
///
/// The constructors guarantee that a patch component is only ever present
/// alongside a minor component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Version {
    major: u64,
    minor: Option<u64>,
    patch: Option<u64>,
}

impl Version {
    /// A version with only a major component (`1`).
    pub fn new(major: u64) -> Self {
        Self {
            major,
            minor: None,
            patch: None,
        }
    }

    /// A version with major and minor components (`1.2`).
    pub fn with_minor(major: u64, minor: u64) -> Self {
        Self {
            major,
            minor: Some(minor),
            patch: None,
        }
    }

    /// A fully specified version (`1.2.3`).
    pub fn full(major: u64, minor: u64, patch: u64) -> Self {
        Self {
            major,
            minor: Some(minor),
            patch: Some(patch),
        }
    }

    pub fn major(&self) -> u64 {
        self.major
    }

    pub fn minor(&self) -> Option<u64> {
        self.minor
    }

    pub fn patch(&self) -> Option<u64> {
        self.patch
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        // Option orders None below Some(_), which is exactly the presence rule.
        self.major
            .cmp(&other.major)
            .then_with(|| self.minor.cmp(&other.minor))
            .then_with(|| self.patch.cmp(&other.patch))
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.major)?;
        if let Some(minor) = self.minor {
            write!(f, ".{}", minor)?;
        }
        if let Some(patch) = self.patch {
            write!(f, ".{}", patch)?;
        }
        Ok(())
    }
}

impl FromStr for Version {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_version(s)
    }
}

/// Compare two versions component by component.
///
/// Majors decide first. For minor and patch, when both sides have the
/// component the numbers are compared; when only one side has it, that side
/// is greater. So `1 < 1.0` and `1.2 < 1.2.0`.
pub fn compare_versions(a: &Version, b: &Version) -> Ordering {
    a.cmp(b)
}

/// Parse a version string such as `1`, `1.2`, `1.2.3` or `v1.2.3`.
///
/// Surrounding whitespace and a single leading `v` are ignored.
///
/// # Errors
///
/// Returns [`VersionError::TooManyParts`] for four or more segments and
/// [`VersionError::InvalidInteger`] when a segment is not made of digits.
pub fn parse_version(text: &str) -> Result<Version, VersionError> {
    let text = text.trim();
    let text = text.strip_prefix('v').unwrap_or(text);

    let parts: Vec<&str> = text.split('.').collect();
    if parts.len() > MAX_PARTS {
        return Err(VersionError::TooManyParts { count: parts.len() });
    }

    let major = parse_component(parts[0])?;
    let minor = parts.get(1).map(|s| parse_component(s)).transpose()?;
    let patch = parts.get(2).map(|s| parse_component(s)).transpose()?;

    Ok(Version {
        major,
        minor,
        patch,
    })
}

fn parse_component(segment: &str) -> Result<u64, VersionError> {
    let invalid = || VersionError::InvalidInteger {
        segment: segment.to_string(),
    };

    // u64::from_str would accept a leading '+'.
    if segment.is_empty() || !segment.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    segment.parse().map_err(|_| invalid())
}
