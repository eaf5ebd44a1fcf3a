//! Tests for color and length normalization.

use super::*;

#[test]
fn format_color_adds_hash() {
    assert_eq!(format_color("1a1a1a"), "#1a1a1a");
    assert_eq!(format_color("#1a1a1a"), "#1a1a1a");
    assert_eq!(format_color("  ff0000 "), "#ff0000");
}

#[test]
fn format_color_empty_is_black() {
    assert_eq!(format_color(""), "#000000");
    assert_eq!(format_color("   "), "#000000");
}

#[test]
fn validate_color_accepts_hex_forms() {
    assert!(validate_color("#f00"));
    assert!(validate_color("#00d4ff"));
    assert!(validate_color("#00D4FF80"));
}

#[test]
fn validate_color_rejects_invalid() {
    assert!(!validate_color(""));
    assert!(!validate_color("00d4ff")); // no hash
    assert!(!validate_color("#12345")); // 5 digits
    assert!(!validate_color("#gggggg"));
    assert!(!validate_color("rgba(0,0,0,1.0)"));
}

#[test]
fn to_px_appends_unit_to_numbers() {
    assert_eq!(to_px("12"), "12px");
    assert_eq!(to_px("1.5"), "1.5px");
    assert_eq!(to_px(" 8 "), "8px");
}

#[test]
fn to_px_keeps_css_lengths() {
    assert_eq!(to_px("12px"), "12px");
    assert_eq!(to_px("0.5rem"), "0.5rem");
    assert_eq!(to_px(""), "0px");
}

#[test]
fn validate_length_accepts_units() {
    for ok in ["10px", "0px", "1.5rem", "2em", "50%", ".5vh", "-4px"] {
        assert!(validate_length(ok), "rejected {ok}");
    }
}

#[test]
fn validate_length_rejects_garbage() {
    for bad in ["", "px", "12", "12 px", "wide", "1.2.3px"] {
        assert!(!validate_length(bad), "accepted {bad}");
    }
}

#[test]
fn normalize_color_rejects_blank_and_non_hex() {
    assert_eq!(normalize_color("00ff00").as_deref(), Some("#00ff00"));
    assert_eq!(normalize_color(" #ABC ").as_deref(), Some("#ABC"));
    assert_eq!(normalize_color(""), None);
    assert_eq!(normalize_color("red"), None);
}
