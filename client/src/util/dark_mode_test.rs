#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn read_preference_is_false_in_non_hydrate_tests() {
    assert!(!read_preference());
}

#[test]
fn toggle_flips_boolean_value() {
    assert!(toggle(false));
    assert!(!toggle(true));
}

#[test]
fn parse_stored_accepts_theme_names() {
    assert_eq!(parse_stored("dark"), Some(true));
    assert_eq!(parse_stored(" light "), Some(false));
    assert_eq!(parse_stored("true"), None);
    assert_eq!(parse_stored(""), None);
}

#[test]
fn theme_name_matches_parse_stored() {
    for dark in [true, false] {
        assert_eq!(parse_stored(theme_name(dark)), Some(dark));
    }
}
