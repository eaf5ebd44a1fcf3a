//! Color and length normalization.
//!
//! Theme colors are hex strings with a leading `#`; palette files may omit
//! it. Lengths are CSS length strings, and a bare number means pixels.

mod parse;

#[cfg(test)]
mod tests;

use parse::{HEX_RE, LENGTH_RE, NUMBER_RE};

/// Ensure a leading `#`. An empty value becomes black.
pub fn format_color(s: &str) -> String {
    let s = s.trim();
    if s.is_empty() {
        return "#000000".into();
    }
    if s.starts_with('#') {
        s.to_string()
    } else {
        format!("#{s}")
    }
}

/// Validate that a string is a `#`-prefixed hex color.
pub fn validate_color(s: &str) -> bool {
    HEX_RE.is_match(s.trim())
}

/// Canonical `#`-prefixed form of a color, or `None` if it is blank or
/// not hex.
pub fn normalize_color(s: &str) -> Option<String> {
    if s.trim().is_empty() {
        return None;
    }
    let color = format_color(s);
    validate_color(&color).then_some(color)
}

/// Normalize a length: bare numbers gain `px`, empty becomes `0px`,
/// anything else is kept as written.
pub fn to_px(s: &str) -> String {
    let s = s.trim();
    if s.is_empty() {
        return "0px".into();
    }
    if NUMBER_RE.is_match(s) {
        format!("{s}px")
    } else {
        s.to_string()
    }
}

/// Validate a length after [`to_px`] normalization.
pub fn validate_length(s: &str) -> bool {
    LENGTH_RE.is_match(s.trim())
}
