//! Per-key edits, reset tracking and materialization.

use hestia_common::ThemeError;
use tracing::debug;

use super::types::{ResolvedTheme, ThemeCascade};
use crate::colors::{format_color, to_px, validate_color, validate_length};
use crate::schema::{KeyKind, ThemeKey, ThemeSettings};

const FALLBACK_FONT: &str = "Courier New";
const FALLBACK_ICON: &str = "fa-server";

impl ThemeCascade {
    /// Live value of `key` as stored (toggles as `true`/`false`).
    pub fn value(&self, key: ThemeKey) -> String {
        let s = &self.settings;
        match key {
            ThemeKey::Color(c) => s.color(c).to_string(),
            ThemeKey::GapSize => s.gap_size.clone(),
            ThemeKey::BorderRadius => s.border_radius.clone(),
            ThemeKey::GridPadding => s.grid_padding.clone(),
            ThemeKey::FontFamily => s.font_family.clone(),
            ThemeKey::TitleBarIcon => s.title_bar_icon.clone(),
            ThemeKey::TitleBarText => s.title_bar_text.clone(),
            ThemeKey::Shadow => s.shadow.to_string(),
            ThemeKey::Outlines => s.outlines.to_string(),
        }
    }

    /// Overlay a single key.
    ///
    /// The value is validated for the key's kind: colors gain a leading `#`
    /// and must be hex, bare-number lengths gain `px`, toggles accept
    /// `true/false/on/off/1/0`. Returns whether the key now differs from
    /// its resolved default.
    pub fn set_field(&mut self, key: ThemeKey, value: &str) -> Result<bool, ThemeError> {
        let value = normalize(key, value)?;
        write_field(&mut self.settings, key, value);
        let modified = self.is_modified(key);
        debug!(%key, modified, "theme field set");
        Ok(modified)
    }

    /// Restore `key` to its resolved default. Returns `false` (and changes
    /// nothing) when no default is recorded.
    pub fn reset_field(&mut self, key: ThemeKey) -> bool {
        let Some(default) = key.as_color().and_then(|c| self.defaults.get(&c)).cloned() else {
            return false;
        };
        write_field(&mut self.settings, key, default);
        debug!(%key, "theme field reset");
        true
    }

    /// Whether `key` has a resolved default that its live value differs
    /// from. Comparison ignores ASCII case.
    pub fn is_modified(&self, key: ThemeKey) -> bool {
        let Some(color) = key.as_color() else {
            return false;
        };
        self.defaults
            .get(&color)
            .is_some_and(|d| !d.eq_ignore_ascii_case(self.settings.color(color)))
    }

    /// Every key a reset would change.
    pub fn modified_keys(&self) -> Vec<ThemeKey> {
        ThemeKey::all().filter(|k| self.is_modified(*k)).collect()
    }

    /// The full render-ready mapping: every key, lengths in `px` form,
    /// toggles as `true`/`false`, and fallbacks for an empty font or icon.
    pub fn materialize(&self) -> ResolvedTheme {
        ThemeKey::all()
            .map(|key| {
                let raw = self.value(key);
                let value = match key.kind() {
                    KeyKind::Length => to_px(&raw),
                    _ if key == ThemeKey::FontFamily && raw.trim().is_empty() => FALLBACK_FONT.into(),
                    _ if key == ThemeKey::TitleBarIcon && raw.trim().is_empty() => FALLBACK_ICON.into(),
                    _ => raw,
                };
                (key, value)
            })
            .collect()
    }
}

fn invalid(key: ThemeKey, reason: impl Into<String>) -> ThemeError {
    ThemeError::InvalidValue {
        key: key.to_string(),
        reason: reason.into(),
    }
}

/// Validate and canonicalize `value` for `key`.
fn normalize(key: ThemeKey, value: &str) -> Result<String, ThemeError> {
    let trimmed = value.trim();
    match key.kind() {
        KeyKind::Color => {
            if trimmed.is_empty() {
                return Err(invalid(key, "color must not be empty"));
            }
            let color = format_color(trimmed);
            if !validate_color(&color) {
                return Err(invalid(key, format!("'{trimmed}' is not a hex color")));
            }
            Ok(color)
        }
        KeyKind::Length => {
            let length = to_px(trimmed);
            if !validate_length(&length) {
                return Err(invalid(key, format!("'{trimmed}' is not a CSS length")));
            }
            Ok(length)
        }
        KeyKind::Text => Ok(trimmed.to_string()),
        KeyKind::Toggle => parse_toggle(trimmed)
            .map(|b| b.to_string())
            .ok_or_else(|| invalid(key, format!("'{trimmed}' is not a boolean"))),
    }
}

fn parse_toggle(s: &str) -> Option<bool> {
    match s.to_ascii_lowercase().as_str() {
        "true" | "on" | "yes" | "1" => Some(true),
        "false" | "off" | "no" | "0" => Some(false),
        _ => None,
    }
}

/// Store an already-normalized value.
fn write_field(settings: &mut ThemeSettings, key: ThemeKey, value: String) {
    match key {
        ThemeKey::Color(c) => *settings.color_mut(c) = value,
        ThemeKey::GapSize => settings.gap_size = value,
        ThemeKey::BorderRadius => settings.border_radius = value,
        ThemeKey::GridPadding => settings.grid_padding = value,
        ThemeKey::FontFamily => settings.font_family = value,
        ThemeKey::TitleBarIcon => settings.title_bar_icon = value,
        ThemeKey::TitleBarText => settings.title_bar_text = value,
        ThemeKey::Shadow => settings.shadow = value == "true",
        ThemeKey::Outlines => settings.outlines = value == "true",
    }
}
