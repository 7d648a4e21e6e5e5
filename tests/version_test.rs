//! Requirement matching behaviour through the public API.

use proptest::prelude::*;
use std::cmp::Ordering;
use tool_enforcer::version::{compare_versions, parse_version, satisfies, VersionError};

#[test]
fn satisfies_table() {
    let cases = [
        // exact / caret requirements
        ("1.2.3", "1.2.3", true),
        ("1.2.3", "^1.2.3", true),
        ("1.2.3", "1.2", false),
        // tilde requirements
        ("1.2.3", "~1.2.3", true),
        ("1.2.4", "~1.2.3", true),
        ("1.3", "~1.2.3", false),
        ("1.2.3", "~1.2", true),
        ("1.2.4", "~1.2", true),
        ("1.3", "~1.2", false),
        ("2.0", "~1.2", false),
        ("1.2.3", "~1", true),
        ("1.2.4", "~1", true),
        ("1.3", "~1", true),
        ("2.0", "~1", false),
        ("1.2.3", "~2", false),
        // single comparisons
        ("1.2.3", ">=1.2", true),
        ("1.2.3", "> 1.2", true),
        ("1.1", ">= 1.2", false),
    ];

    for (version, requirement, expected) in cases {
        assert_eq!(
            satisfies(version, requirement),
            expected,
            "satisfies({}, {})",
            version,
            requirement
        );
    }
}

#[test]
fn tilde_missing_minor_regressions() {
    assert!(satisfies("1", "~1.0"));
    assert!(satisfies("1", "~1.0.0"));
    assert!(!satisfies("1.2", "~1.2.0"));
}

#[test]
fn parse_errors() {
    assert!(matches!(
        parse_version("1.2.3.4"),
        Err(VersionError::TooManyParts { .. })
    ));
    assert!(matches!(
        parse_version("1.x.3"),
        Err(VersionError::InvalidInteger { .. })
    ));
}

fn version_text() -> impl Strategy<Value = String> {
    prop_oneof![
        (0u64..1000).prop_map(|a| a.to_string()),
        (0u64..1000, 0u64..1000).prop_map(|(a, b)| format!("{}.{}", a, b)),
        (0u64..1000, 0u64..1000, 0u64..1000).prop_map(|(a, b, c)| format!("{}.{}.{}", a, b, c)),
    ]
}

proptest! {
    #[test]
    fn presence_pattern_round_trips(text in version_text()) {
        let v = parse_version(&text).unwrap();
        let segments = text.split('.').count();
        prop_assert_eq!(v.minor().is_some(), segments >= 2);
        prop_assert_eq!(v.patch().is_some(), segments == 3);
        prop_assert_eq!(v.to_string(), text);
    }

    #[test]
    fn compare_is_reflexive(text in version_text()) {
        let v = parse_version(&text).unwrap();
        prop_assert_eq!(compare_versions(&v, &v), Ordering::Equal);
    }

    #[test]
    fn compare_is_antisymmetric(a in version_text(), b in version_text()) {
        let a = parse_version(&a).unwrap();
        let b = parse_version(&b).unwrap();
        prop_assert_eq!(compare_versions(&a, &b), compare_versions(&b, &a).reverse());
    }

    #[test]
    fn exact_requirement_matches_itself(text in version_text()) {
        prop_assert!(satisfies(&text, &text));
        let ge = format!(">={}", text);
        let le = format!("<={}", text);
        prop_assert!(satisfies(&text, &ge));
        prop_assert!(satisfies(&text, &le));
    }

    #[test]
    fn four_segments_are_rejected(a in 0u64..100, b in 0u64..100, c in 0u64..100, d in 0u64..100) {
        let text = format!("{}.{}.{}.{}", a, b, c, d);
        prop_assert_eq!(parse_version(&text), Err(VersionError::TooManyParts { count: 4 }));
    }

    #[test]
    fn satisfies_never_panics(input in any::<Vec<u8>>()) {
        let text = String::from_utf8_lossy(&input);
        let parts: Vec<&str> = text.split(' ').collect();
        if parts.len() == 2 {
            let _ = satisfies(parts[0], parts[1]);
        }
    }

    #[test]
    fn satisfies_never_panics_on_requirement_like_text(s in "[v~^<>= 0-9.x]{0,12} [v~^<>= 0-9.x]{0,12}") {
        let (version, requirement) = s.split_once(' ').unwrap();
        let _ = satisfies(version, requirement);
    }
}
