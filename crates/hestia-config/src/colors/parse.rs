//! Internal patterns for color and length values.

use regex::Regex;
use std::sync::LazyLock;

/// Hex color: #RGB, #RRGGBB, or #RRGGBBAA.
pub(crate) static HEX_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#([0-9a-fA-F]{3}|[0-9a-fA-F]{6}|[0-9a-fA-F]{8})$").unwrap());

/// A bare non-negative number such as `12` or `1.5`.
pub(crate) static NUMBER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9.]+$").unwrap());

/// A CSS length with a unit, e.g. `12px`, `0.5rem`, `2%`.
pub(crate) static LENGTH_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^-?([0-9]+\.?[0-9]*|\.[0-9]+)(px|em|rem|%|vh|vw|vmin|vmax|pt|ch)$").unwrap()
});
