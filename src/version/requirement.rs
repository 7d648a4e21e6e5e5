//! Version requirements and their evaluation.
//!
//! A requirement is one of:
//! - an exact version (`1.2.3`)
//! - a caret requirement (`^1.2.3`), which currently behaves like an exact one
//! - a tilde requirement (`~1.2`), pinning the leading components
//! - a single comparison (`==`, `>`, `<`, `>=`, `<=`) against a version

use regex::Regex;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use super::parse::{parse_version, Version, VersionError};

// Two-character operators come first so `>=1.2` is never read as `>` + `=1.2`.
static OPERATOR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(==|>=|<=|>|<)\s*(.*)$").unwrap());

/// Relational operator of a single-condition requirement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Equal,
    GreaterThan,
    LessThan,
    GreaterThanOrEqual,
    LessThanOrEqual,
}

impl Operator {
    /// The operator as written in a requirement.
    pub fn symbol(&self) -> &'static str {
        match self {
            Operator::Equal => "==",
            Operator::GreaterThan => ">",
            Operator::LessThan => "<",
            Operator::GreaterThanOrEqual => ">=",
            Operator::LessThanOrEqual => "<=",
        }
    }

    fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "==" => Some(Operator::Equal),
            ">" => Some(Operator::GreaterThan),
            "<" => Some(Operator::LessThan),
            ">=" => Some(Operator::GreaterThanOrEqual),
            "<=" => Some(Operator::LessThanOrEqual),
            _ => None,
        }
    }

    /// Whether `ordering` (version compared to target) satisfies the operator.
    pub fn accepts(&self, ordering: Ordering) -> bool {
        match self {
            Operator::Equal => ordering == Ordering::Equal,
            Operator::GreaterThan => ordering == Ordering::Greater,
            Operator::LessThan => ordering == Ordering::Less,
            Operator::GreaterThanOrEqual => ordering != Ordering::Less,
            Operator::LessThanOrEqual => ordering != Ordering::Greater,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// A parsed version requirement with its target version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Requirement {
    /// `1.2.3`: the version must compare equal to the target.
    Exact(Version),

    /// `^1.2.3`: evaluated as exact equality.
    ///
    /// This is narrower than the usual "compatible with" caret range; it is
    /// kept that way so existing configurations keep their meaning.
    Caret(Version),

    /// `~1`, `~1.2`, `~1.2.3`: leading components must match the target.
    Tilde(Version),

    /// `>=1.2`, `< 2` and friends.
    Condition { op: Operator, version: Version },
}

impl Requirement {
    /// The version this requirement is anchored at.
    pub fn target(&self) -> &Version {
        match self {
            Requirement::Exact(v) | Requirement::Caret(v) | Requirement::Tilde(v) => v,
            Requirement::Condition { version, .. } => version,
        }
    }

    /// Check whether `version` satisfies this requirement.
    pub fn matches(&self, version: &Version) -> bool {
        match self {
            Requirement::Exact(target) | Requirement::Caret(target) => version == target,
            Requirement::Tilde(target) => tilde_matches(version, target),
            Requirement::Condition { op, version: target } => {
                op.accepts(version.cmp(target))
            }
        }
    }
}

/// Tilde matching by how specific the target is.
///
/// A bare-major candidate `M` is read as `M.0.0` here (and only here), so
/// `1` satisfies `~1.0` and `~1.0.0`. A candidate that has a minor keeps the
/// presence rule for the patch step, so `1.2` does not satisfy `~1.2.0`.
fn tilde_matches(version: &Version, target: &Version) -> bool {
    if version.major() != target.major() {
        return false;
    }

    let Some(target_minor) = target.minor() else {
        return true;
    };
    let Some(minor) = version.minor() else {
        return target_minor == 0 && target.patch().unwrap_or(0) == 0;
    };
    if minor != target_minor {
        return false;
    }

    match target.patch() {
        Some(_) => version.cmp(target) != Ordering::Less,
        None => true,
    }
}

impl fmt::Display for Requirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Requirement::Exact(v) => write!(f, "{}", v),
            Requirement::Caret(v) => write!(f, "^{}", v),
            Requirement::Tilde(v) => write!(f, "~{}", v),
            Requirement::Condition { op, version } => write!(f, "{}{}", op, version),
        }
    }
}

impl FromStr for Requirement {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_requirement(s)
    }
}

/// Parse a requirement such as `1.2`, `^1.2.3`, `~1` or `>= 4.0`.
///
/// # Errors
///
/// Any failure parsing the embedded version is returned unchanged.
pub fn parse_requirement(text: &str) -> Result<Requirement, VersionError> {
    let text = text.trim();

    if let Some(rest) = text.strip_prefix('^') {
        return Ok(Requirement::Caret(parse_version(rest)?));
    }

    if let Some(rest) = text.strip_prefix('~') {
        return Ok(Requirement::Tilde(parse_version(rest)?));
    }

    if let Some(caps) = OPERATOR_RE.captures(text) {
        if let Some(op) = Operator::from_symbol(&caps[1]) {
            let version = parse_version(&caps[2])?;
            return Ok(Requirement::Condition { op, version });
        }
    }

    Ok(Requirement::Exact(parse_version(text)?))
}

/// Check whether the version text satisfies the requirement text.
///
/// Unparseable input on either side yields `false`. Use [`parse_version`]
/// and [`parse_requirement`] directly when the reason matters.
pub fn satisfies(version: &str, requirement: &str) -> bool {
    let Ok(requirement) = parse_requirement(requirement) else {
        return false;
    };
    let Ok(version) = parse_version(version) else {
        return false;
    };
    requirement.matches(&version)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_exact() {
        assert_eq!(
            parse_requirement("1.2.3").unwrap(),
            Requirement::Exact(Version::full(1, 2, 3))
        );
    }

    #[test]
    fn parses_caret() {
        assert_eq!(
            parse_requirement("^1.2").unwrap(),
            Requirement::Caret(Version::with_minor(1, 2))
        );
    }

    #[test]
    fn parses_tilde() {
        assert_eq!(
            parse_requirement("~1").unwrap(),
            Requirement::Tilde(Version::new(1))
        );
    }

    #[test]
    fn parses_each_operator() {
        let cases = [
            ("==1", Operator::Equal),
            (">1", Operator::GreaterThan),
            ("<1", Operator::LessThan),
            (">=1", Operator::GreaterThanOrEqual),
            ("<=1", Operator::LessThanOrEqual),
        ];
        for (input, expected) in cases {
            match parse_requirement(input).unwrap() {
                Requirement::Condition { op, version } => {
                    assert_eq!(op, expected, "operator of {}", input);
                    assert_eq!(version, Version::new(1));
                }
                other => panic!("Expected Condition for {}, got {:?}", input, other),
            }
        }
    }

    #[test]
    fn two_char_operators_win_over_prefixes() {
        let req = parse_requirement(">=1.2").unwrap();
        assert_eq!(
            req,
            Requirement::Condition {
                op: Operator::GreaterThanOrEqual,
                version: Version::with_minor(1, 2),
            }
        );
    }

    #[test]
    fn whitespace_after_operator_is_ignored() {
        assert_eq!(
            parse_requirement(">=   4.0").unwrap(),
            parse_requirement(">=4.0").unwrap()
        );
        assert_eq!(
            parse_requirement("^ 1.2").unwrap(),
            Requirement::Caret(Version::with_minor(1, 2))
        );
    }

    #[test]
    fn surrounding_whitespace_is_ignored() {
        assert_eq!(
            parse_requirement("  ~2\t").unwrap(),
            Requirement::Tilde(Version::new(2))
        );
    }

    #[test]
    fn single_equals_is_not_an_operator() {
        assert!(matches!(
            parse_requirement("=1.2"),
            Err(VersionError::InvalidInteger { .. })
        ));
    }

    #[test]
    fn inner_version_errors_propagate() {
        assert_eq!(
            parse_requirement("~1.2.3.4"),
            Err(VersionError::TooManyParts { count: 4 })
        );
        assert!(matches!(
            parse_requirement(">= x"),
            Err(VersionError::InvalidInteger { .. })
        ));
        assert!(matches!(
            parse_requirement("^"),
            Err(VersionError::InvalidInteger { .. })
        ));
    }

    #[test]
    fn display_is_canonical() {
        for (input, rendered) in [
            ("1.2.3", "1.2.3"),
            ("v1.2", "1.2"),
            ("^1", "^1"),
            ("~ 1.2", "~1.2"),
            ("> 2", ">2"),
            ("<=3.1.4", "<=3.1.4"),
        ] {
            let req = parse_requirement(input).unwrap();
            assert_eq!(req.to_string(), rendered);
            assert_eq!(parse_requirement(rendered).unwrap(), req);
        }
    }

    #[test]
    fn target_returns_embedded_version() {
        let req = parse_requirement("<2.0").unwrap();
        assert_eq!(req.target(), &Version::with_minor(2, 0));
    }

    #[test]
    fn exact_and_caret_requirements() {
        assert!(satisfies("1.2.3", "1.2.3"));
        assert!(satisfies("1.2.3", "^1.2.3"));
        assert!(!satisfies("1.2.3", "1.2"));
        assert!(!satisfies("1.2", "1.2.3"));
        assert!(!satisfies("1.2.4", "^1.2.3"));
    }

    #[test]
    fn tilde_with_full_target() {
        assert!(satisfies("1.2.3", "~1.2.3"));
        assert!(satisfies("1.2.4", "~1.2.3"));
        assert!(!satisfies("1.2.2", "~1.2.3"));
        assert!(!satisfies("1.3", "~1.2.3"));
        assert!(!satisfies("1.2", "~1.2.3"));
    }

    #[test]
    fn tilde_with_major_minor_target() {
        assert!(satisfies("1.2.3", "~1.2"));
        assert!(satisfies("1.2.4", "~1.2"));
        assert!(!satisfies("1.3", "~1.2"));
        assert!(!satisfies("2.0", "~1.2"));
    }

    #[test]
    fn tilde_with_major_target() {
        assert!(satisfies("1.2.3", "~1"));
        assert!(satisfies("1.2.4", "~1"));
        assert!(satisfies("1.3", "~1"));
        assert!(!satisfies("2.0", "~1"));
        assert!(!satisfies("1.2.3", "~2"));
    }

    #[test]
    fn tilde_treats_missing_minor_as_zero() {
        assert!(satisfies("1", "~1.0"));
        assert!(satisfies("1", "~1.0.0"));
        assert!(!satisfies("1", "~1.1"));
        assert!(!satisfies("1", "~1.0.1"));
    }

    #[test]
    fn tilde_keeps_presence_rule_for_missing_patch() {
        assert!(!satisfies("1.2", "~1.2.0"));
        assert!(!satisfies("1.0", "~1.0.0"));
        assert!(satisfies("1.2.0", "~1.2.0"));
        assert!(satisfies("1.2", "~1.2"));
    }

    #[test]
    fn comparison_requirements() {
        assert!(satisfies("1.2.3", ">=1.2"));
        assert!(satisfies("1.2.3", "> 1.2"));
        assert!(!satisfies("1.1", ">= 1.2"));
        assert!(satisfies("1.1", "<1.2"));
        assert!(satisfies("1.2", "<=1.2"));
        assert!(!satisfies("1.2.3", "<=1.2"));
        assert!(satisfies("4.4", "==4.4"));
        assert!(!satisfies("4.4.0", "==4.4"));
    }

    #[test]
    fn comparison_uses_presence_rule() {
        // 1 sorts below 1.0
        assert!(satisfies("1", "<1.0"));
        assert!(!satisfies("1", ">=1.0"));
    }

    #[test]
    fn unparseable_input_never_satisfies() {
        assert!(!satisfies("1.x", "1"));
        assert!(!satisfies("1", "~1.x"));
        assert!(!satisfies("", ""));
        assert!(!satisfies("1.2.3.4", ">=1"));
    }

    #[test]
    fn version_prefix_on_either_side() {
        assert!(satisfies("v2.39.1", ">= v2.30"));
    }

    #[test]
    fn operator_accepts_orderings() {
        assert!(Operator::GreaterThanOrEqual.accepts(Ordering::Equal));
        assert!(Operator::GreaterThanOrEqual.accepts(Ordering::Greater));
        assert!(!Operator::GreaterThanOrEqual.accepts(Ordering::Less));
        assert!(Operator::LessThanOrEqual.accepts(Ordering::Less));
        assert!(!Operator::LessThan.accepts(Ordering::Equal));
        assert!(!Operator::GreaterThan.accepts(Ordering::Equal));
    }
}
