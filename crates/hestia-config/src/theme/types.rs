//! Theme cascade state and the preset selector types.

use std::collections::BTreeMap;

use hestia_common::ThemeError;

use crate::schema::{ColorKey, CustomPresets, ThemeDocument, ThemeKey, ThemeSettings};

/// Every theme key with its render-ready value.
pub type ResolvedTheme = BTreeMap<ThemeKey, String>;

/// Live theme state: palette → preset → per-key overrides.
///
/// `defaults` records, per color key, the value a reset restores. Only
/// [`apply_palette`](ThemeCascade::apply_palette) writes it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ThemeCascade {
    pub(super) settings: ThemeSettings,
    pub(super) defaults: BTreeMap<ColorKey, String>,
    pub(super) presets: CustomPresets,
}

impl ThemeCascade {
    /// Cascade seeded from a document, with no resolved defaults.
    pub fn new(document: ThemeDocument) -> Self {
        Self {
            settings: document.theme,
            defaults: BTreeMap::new(),
            presets: document.custom_presets,
        }
    }

    pub fn settings(&self) -> &ThemeSettings {
        &self.settings
    }

    pub fn presets(&self) -> &CustomPresets {
        &self.presets
    }

    /// Slug of the base16 palette the current colors came from.
    pub fn active_palette(&self) -> Option<&str> {
        self.settings.active_palette.as_deref()
    }

    /// The value a reset of `key` would restore.
    pub fn default_for(&self, key: ColorKey) -> Option<&str> {
        self.defaults.get(&key).map(String::as_str)
    }

    /// `{theme, custom_presets}` as persisted.
    pub fn document(&self) -> ThemeDocument {
        ThemeDocument {
            theme: self.settings.clone(),
            custom_presets: self.presets.clone(),
        }
    }
}

/// An entry in the preset selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PresetEntry {
    Base16 { slug: String, name: String },
    Custom { name: String },
}

impl PresetEntry {
    /// Selector value, e.g. `base16:nord` or `custom:Evening`.
    pub fn selection(&self) -> String {
        match self {
            PresetEntry::Base16 { slug, .. } => format!("base16:{slug}"),
            PresetEntry::Custom { name } => format!("custom:{name}"),
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &str {
        match self {
            PresetEntry::Base16 { name, .. } => name,
            PresetEntry::Custom { name } => name,
        }
    }
}

/// A parsed selector value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection<'a> {
    Base16(&'a str),
    Custom(&'a str),
}

impl<'a> Selection<'a> {
    /// Parse `base16:<slug>` or `custom:<name>`. Everything after the first
    /// colon is the name, so preset names may contain colons.
    pub fn parse(value: &'a str) -> Result<Self, ThemeError> {
        let invalid = || ThemeError::InvalidSelection(value.to_string());
        let (kind, name) = value.split_once(':').ok_or_else(invalid)?;
        if name.is_empty() {
            return Err(invalid());
        }
        match kind {
            "base16" => Ok(Selection::Base16(name)),
            "custom" => Ok(Selection::Custom(name)),
            _ => Err(invalid()),
        }
    }
}
