//! Tests for [`MatcherConfig`] and [`ConfigOverrides`].

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use rstest::rstest;

use crate::{ConfigOverrides, MatcherConfig, MatcherError, NestedPattern, PatternFlags};

fn hash_of(config: &MatcherConfig) -> u64 {
    let mut hasher = DefaultHasher::new();
    config.hash(&mut hasher);
    hasher.finish()
}

#[test]
fn equal_configs_hash_equally() {
    let a = MatcherConfig::new("<", ">").with_global(true);
    let b = MatcherConfig::new("<", ">").with_global(true);
    assert_eq!(a, b);
    assert_eq!(hash_of(&a), hash_of(&b));
    assert_ne!(a, MatcherConfig::new("<", ">"));
}

#[rstest]
#[case(MatcherConfig::new("", ">"), MatcherError::empty_pattern("start marker"))]
#[case(MatcherConfig::new("<", ""), MatcherError::empty_pattern("end marker"))]
#[case(MatcherConfig::new("<", "<"), MatcherError::identical_markers("<"))]
#[case(
    MatcherConfig::new("<", ">").with_capture_name("x"),
    MatcherError::capture_name_too_short("x")
)]
#[case(
    MatcherConfig::new("<", ">").with_capture_name("9lives"),
    MatcherError::invalid_capture_name("9lives")
)]
#[case(
    MatcherConfig::new("<", ">").with_prepended(""),
    MatcherError::empty_pattern("prepended")
)]
fn invalid_configs_are_rejected(#[case] config: MatcherConfig, #[case] expected: MatcherError) {
    assert_eq!(NestedPattern::new(config).expect_err("invalid"), expected);
}

#[test]
fn uncompilable_marker_is_rejected() {
    let error = NestedPattern::new(MatcherConfig::new("(", ">")).expect_err("invalid");
    assert!(matches!(error, MatcherError::Pattern(_)));
}

#[test]
fn overrides_keep_unset_fields() {
    let base = MatcherConfig::new("<", ">")
        .with_capture_name("body")
        .with_prepended("x");
    let derived = base.apply(ConfigOverrides::new().with_end_marker("/>"));
    assert_eq!(derived.end_marker(), "/>");
    assert_eq!(derived.capture_name(), Some("body"));
    assert_eq!(derived.prepended(), Some("x"));
}

#[test]
fn clearing_overrides_drop_unset_optionals_only() {
    let base = MatcherConfig::new("<", ">")
        .with_capture_name("body")
        .with_appended(";")
        .with_global(true);
    let derived = base.apply(ConfigOverrides::clearing_optionals().with_appended("!"));
    assert_eq!(derived.capture_name(), None);
    assert_eq!(derived.appended(), Some("!"));
    assert!(derived.global());
    assert_eq!(derived.start_marker(), "<");
}

#[test]
fn config_round_trips_through_json() {
    let config = MatcherConfig::new("<", ">")
        .with_capture_name("body")
        .with_flags(PatternFlags::default().with_dot_all(true));
    let json = serde_json::to_string(&config).expect("serialize");
    let back: MatcherConfig = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(back, config);
}

#[test]
fn minimal_json_uses_defaults() {
    let config: MatcherConfig =
        serde_json::from_str(r#"{"start_marker": "<", "end_marker": ">"}"#).expect("parse");
    assert_eq!(config, MatcherConfig::new("<", ">"));
}
