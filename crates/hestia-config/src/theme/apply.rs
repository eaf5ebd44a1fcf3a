//! Palette and preset application.
//!
//! A palette overwrites every mapped color and becomes the reset target.
//! A custom preset overlays only the keys it names and leaves the reset
//! targets alone.

use hestia_common::ThemeError;
use tracing::{debug, info, warn};

use super::types::{PresetEntry, Selection, ThemeCascade};
use crate::colors::normalize_color;
use crate::palette::{Palette, PaletteCatalog};
use crate::schema::CustomPreset;

impl ThemeCascade {
    /// Apply a base16 palette: set both the resolved default and the live
    /// value of every mapped key whose slot the palette defines.
    ///
    /// Non-color settings are never touched.
    pub fn apply_palette(&mut self, palette: &Palette) {
        for (key, color) in palette.semantic_colors() {
            self.defaults.insert(key, color.clone());
            *self.settings.color_mut(key) = color;
        }
        self.settings.active_palette = Some(palette.slug.clone());
        info!(palette = %palette.slug, "applied palette");
    }

    /// Overlay a preset's colors. Keys it does not name keep their value.
    ///
    /// Values gain a leading `#`; a value that is not hex is skipped.
    pub fn apply_custom_preset(&mut self, preset: &CustomPreset) {
        for (key, color) in preset {
            match normalize_color(color) {
                Some(color) => *self.settings.color_mut(*key) = color,
                None => warn!(%key, color = %color, "preset color is not hex, skipped"),
            }
        }
        self.settings.active_palette = None;
        debug!(keys = preset.len(), "applied custom preset");
    }

    /// Apply a saved preset by name.
    pub fn apply_named_preset(&mut self, name: &str) -> Result<(), ThemeError> {
        let preset = self
            .presets
            .get(name)
            .cloned()
            .ok_or_else(|| ThemeError::UnknownPreset(name.to_string()))?;
        self.apply_custom_preset(&preset);
        info!(preset = name, "applied custom preset");
        Ok(())
    }

    /// Apply a selector value (`base16:<slug>` or `custom:<name>`).
    pub fn apply_selection(
        &mut self,
        selection: &str,
        catalog: &PaletteCatalog,
    ) -> Result<(), ThemeError> {
        match Selection::parse(selection)? {
            Selection::Base16(slug) => {
                let palette = catalog
                    .get(slug)
                    .ok_or_else(|| ThemeError::UnknownPalette(slug.to_string()))?;
                self.apply_palette(palette);
            }
            Selection::Custom(name) => self.apply_named_preset(name)?,
        }
        Ok(())
    }

    /// Save the current fifteen colors under `name` (trimmed), replacing
    /// any preset with that name. Returns the stored name.
    pub fn save_preset(&mut self, name: &str) -> Result<String, ThemeError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ThemeError::EmptyPresetName);
        }
        let replaced = self
            .presets
            .insert(name.to_string(), self.settings.colors())
            .is_some();
        info!(preset = name, replaced, "saved custom preset");
        Ok(name.to_string())
    }

    /// Selector entries: base16 palettes by slug, then custom presets by name.
    pub fn preset_entries(&self, catalog: &PaletteCatalog) -> Vec<PresetEntry> {
        let palettes = catalog.iter().map(|p| PresetEntry::Base16 {
            slug: p.slug.clone(),
            name: p.name.clone(),
        });
        let custom = self
            .presets
            .keys()
            .map(|name| PresetEntry::Custom { name: name.clone() });
        palettes.chain(custom).collect()
    }

    /// The active palette's slot colors for quick picking. Empty when the
    /// colors did not come from a known palette.
    pub fn swatches(&self, catalog: &PaletteCatalog) -> Vec<String> {
        self.active_palette()
            .and_then(|slug| catalog.get(slug))
            .map(Palette::swatches)
            .unwrap_or_default()
    }

    /// Re-derive resolved defaults from `palette` without changing any
    /// live value.
    pub(super) fn derive_defaults(&mut self, palette: &Palette) {
        self.defaults = palette.semantic_colors().collect();
    }
}
