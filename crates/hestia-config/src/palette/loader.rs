//! Base16 scheme parsing.
//!
//! Accepts the classic flat layout (`scheme`, `author`, `base00`...) and
//! the newer one with a nested `palette:` table and a `name` field. Slot
//! values may omit the leading `#`.

use std::collections::BTreeMap;
use std::path::Path;

use hestia_common::ConfigError;
use serde::Deserialize;
use serde_yaml::Value;
use tracing::{info, warn};

use super::{Palette, PaletteSlot};
use crate::colors::{format_color, validate_color};

#[derive(Debug, Deserialize)]
struct RawScheme {
    #[serde(alias = "name")]
    scheme: Option<String>,
    author: Option<String>,
    slug: Option<String>,
    #[serde(default)]
    palette: BTreeMap<String, Value>,
    #[serde(flatten)]
    rest: BTreeMap<String, Value>,
}

/// Parse a base16 scheme. `default_slug` is used when the file carries no
/// `slug` of its own (usually the file stem).
pub fn parse_palette(default_slug: &str, yaml: &str) -> Result<Palette, ConfigError> {
    let raw: RawScheme = serde_yaml::from_str(yaml).map_err(|e| {
        ConfigError::ParseError(format!("failed to parse palette '{default_slug}': {e}"))
    })?;

    let slug = raw.slug.unwrap_or_else(|| default_slug.to_string());
    let mut palette = Palette::new(&slug, raw.scheme.unwrap_or_else(|| slug.clone()));
    palette.author = raw.author;

    for (name, value) in raw.rest.iter().chain(raw.palette.iter()) {
        let Some(slot) = PaletteSlot::from_name(name) else {
            continue;
        };
        let Some(color) = slot_value(value) else {
            warn!(palette = %slug, %slot, "ignoring non-scalar slot value");
            continue;
        };
        if !validate_color(&format_color(&color)) {
            warn!(palette = %slug, %slot, color, "ignoring invalid slot color");
            continue;
        }
        palette.slots.insert(slot, color);
    }

    if palette.slots.is_empty() {
        return Err(ConfigError::ValidationError(format!(
            "palette '{slug}' defines no base00..base0F colors"
        )));
    }
    Ok(palette)
}

/// Load a scheme file, taking the slug from the file stem.
pub fn load_palette_from_path(path: &Path) -> Result<Palette, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::FileNotFound(path.to_path_buf()));
    }
    let content = std::fs::read_to_string(path).map_err(|e| {
        ConfigError::ParseError(format!("failed to read palette {}: {e}", path.display()))
    })?;
    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("palette");

    let palette = parse_palette(stem, &content)?;
    info!(slug = %palette.slug, "loaded palette from {}", path.display());
    Ok(palette)
}

fn slot_value(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.trim().to_string()),
        // Unquoted all-digit hex like 282828 parses as an integer.
        Value::Number(n) if n.is_u64() => n.as_u64().map(|n| format!("{n:06}")),
        _ => None,
    }
}
