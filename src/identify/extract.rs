//! Extracting the version token from a program's banner.
//!
//! Only the first line of output is considered. Each program has a pattern
//! for its usual banner; if that misses, the last word of the line is used.

use regex::Regex;
use std::sync::LazyLock;

use crate::error::{EnforcerError, Result};

use super::program::Program;

macro_rules! lazy_regex {
    ($name:ident, $pattern:expr) => {
        static $name: LazyLock<Regex> = LazyLock::new(|| Regex::new($pattern).unwrap());
    };
}

// GNU Make 4.4
lazy_regex!(RE_MAKE, r"^GNU Make\s+(\d+(?:\.\d+){0,2})");
// git version 2.39.1 (Apple Git-143)
lazy_regex!(RE_GIT, r"^git version\s+(\d+(?:\.\d+){0,2})");

fn banner_pattern(program: Program) -> &'static Regex {
    match program {
        Program::Make => &*RE_MAKE,
        Program::Git => &*RE_GIT,
    }
}

/// Pull the version text out of `output` for `program`.
///
/// # Errors
///
/// Returns `VersionNotFound` when the first line is blank.
pub fn extract_version(program: Program, output: &str) -> Result<String> {
    let first_line = output.lines().next().unwrap_or("").trim();

    if let Some(caps) = banner_pattern(program).captures(first_line) {
        return Ok(caps[1].to_string());
    }

    tracing::debug!(
        "Banner pattern for {} did not match '{}', using last word",
        program,
        first_line
    );

    first_line
        .split_whitespace()
        .last()
        .map(str::to_string)
        .ok_or_else(|| EnforcerError::VersionNotFound {
            program: program.name().to_string(),
        })
}
