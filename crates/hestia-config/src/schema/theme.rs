//! Theme settings and custom preset types.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};

use super::keys::ColorKey;
use crate::colors::to_px;

/// A named partial color mapping saved by the user.
pub type CustomPreset = BTreeMap<ColorKey, String>;

/// All saved presets, keyed by name.
pub type CustomPresets = BTreeMap<String, CustomPreset>;

/// Live theme values.
///
/// Field names are the camelCase semantic keys, matching the persisted
/// `theme` object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ThemeSettings {
    pub bg_canvas: String,
    pub bg_surface: String,
    pub bg_highlight: String,
    pub border_dim: String,
    pub border_bright: String,
    pub text_main: String,
    pub text_muted: String,
    pub text_faint: String,
    pub text_inverse: String,
    pub brand_primary: String,
    pub brand_secondary: String,
    pub brand_tertiary: String,
    pub status_error: String,
    pub status_warning: String,
    pub status_success: String,

    #[serde(deserialize_with = "length")]
    pub gap_size: String,
    #[serde(deserialize_with = "length")]
    pub border_radius: String,
    #[serde(deserialize_with = "length")]
    pub grid_padding: String,

    pub font_family: String,
    pub title_bar_icon: String,
    pub title_bar_text: String,

    pub shadow: bool,
    pub outlines: bool,

    /// Slug of the base16 palette last applied, cleared by custom presets.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active_palette: Option<String>,
}

impl Default for ThemeSettings {
    fn default() -> Self {
        Self {
            bg_canvas: "#0f1115".into(),
            bg_surface: "#181b21".into(),
            bg_highlight: "#242832".into(),
            border_dim: "#2a2e38".into(),
            border_bright: "#3d4352".into(),
            text_main: "#e6e6e6".into(),
            text_muted: "#9aa0ab".into(),
            text_faint: "#5c6370".into(),
            text_inverse: "#0f1115".into(),
            brand_primary: "#98c379".into(),
            brand_secondary: "#61afef".into(),
            brand_tertiary: "#c678dd".into(),
            status_error: "#e06c75".into(),
            status_warning: "#d19a66".into(),
            status_success: "#98c379".into(),
            gap_size: "10px".into(),
            border_radius: "6px".into(),
            grid_padding: "20px".into(),
            font_family: "Courier New".into(),
            title_bar_icon: "fa-server".into(),
            title_bar_text: "HestiaHUD".into(),
            shadow: true,
            outlines: false,
            active_palette: None,
        }
    }
}

impl ThemeSettings {
    pub fn color(&self, key: ColorKey) -> &str {
        match key {
            ColorKey::BgCanvas => &self.bg_canvas,
            ColorKey::BgSurface => &self.bg_surface,
            ColorKey::BgHighlight => &self.bg_highlight,
            ColorKey::BorderDim => &self.border_dim,
            ColorKey::BorderBright => &self.border_bright,
            ColorKey::TextMain => &self.text_main,
            ColorKey::TextMuted => &self.text_muted,
            ColorKey::TextFaint => &self.text_faint,
            ColorKey::TextInverse => &self.text_inverse,
            ColorKey::BrandPrimary => &self.brand_primary,
            ColorKey::BrandSecondary => &self.brand_secondary,
            ColorKey::BrandTertiary => &self.brand_tertiary,
            ColorKey::StatusError => &self.status_error,
            ColorKey::StatusWarning => &self.status_warning,
            ColorKey::StatusSuccess => &self.status_success,
        }
    }

    pub fn color_mut(&mut self, key: ColorKey) -> &mut String {
        match key {
            ColorKey::BgCanvas => &mut self.bg_canvas,
            ColorKey::BgSurface => &mut self.bg_surface,
            ColorKey::BgHighlight => &mut self.bg_highlight,
            ColorKey::BorderDim => &mut self.border_dim,
            ColorKey::BorderBright => &mut self.border_bright,
            ColorKey::TextMain => &mut self.text_main,
            ColorKey::TextMuted => &mut self.text_muted,
            ColorKey::TextFaint => &mut self.text_faint,
            ColorKey::TextInverse => &mut self.text_inverse,
            ColorKey::BrandPrimary => &mut self.brand_primary,
            ColorKey::BrandSecondary => &mut self.brand_secondary,
            ColorKey::BrandTertiary => &mut self.brand_tertiary,
            ColorKey::StatusError => &mut self.status_error,
            ColorKey::StatusWarning => &mut self.status_warning,
            ColorKey::StatusSuccess => &mut self.status_success,
        }
    }

    /// Snapshot of all fifteen colors.
    pub fn colors(&self) -> CustomPreset {
        ColorKey::ALL
            .into_iter()
            .map(|k| (k, self.color(k).to_string()))
            .collect()
    }
}

/// Accept a length as a string or a bare number (`gapSize = 12`).
fn length<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Int(i64),
        Float(f64),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Text(s) => to_px(&s),
        Raw::Int(n) => format!("{n}px"),
        Raw::Float(n) => format!("{n}px"),
    })
}
