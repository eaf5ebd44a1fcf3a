//! Shared helpers used by the domain validators.

use crate::colors::{validate_color, validate_length};

/// Push an error if `value` is outside `[min, max]`.
pub(crate) fn validate_range_f64(
    errors: &mut Vec<String>,
    name: &str,
    value: f64,
    min: f64,
    max: f64,
) {
    if !(min..=max).contains(&value) {
        errors.push(format!("{name} = {value} is out of range [{min}, {max}]"));
    }
}

/// Push an error if `value` is not a hex color.
pub(crate) fn check_color(errors: &mut Vec<String>, name: &str, value: &str) {
    if !validate_color(value) {
        errors.push(format!("{name} = {value:?} is not a hex color"));
    }
}

/// Push an error if `value` is not a CSS length.
pub(crate) fn check_length(errors: &mut Vec<String>, name: &str, value: &str) {
    if !validate_length(value) {
        errors.push(format!("{name} = {value:?} is not a CSS length"));
    }
}
