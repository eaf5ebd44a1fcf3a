//! Loading and saving the theme namespace.

use hestia_common::store::{load_json, save_json, PersistenceGateway, THEME_NAMESPACE};
use hestia_common::StoreError;
use serde::Deserialize;
use tracing::{info, warn};

use super::types::ThemeCascade;
use crate::palette::PaletteCatalog;
use crate::schema::{CustomPresets, ThemeDocument, ThemeSettings};

/// Stored payload; either half may be missing from older saves.
#[derive(Debug, Deserialize)]
struct StoredTheme {
    theme: Option<ThemeSettings>,
    custom_presets: Option<CustomPresets>,
}

impl ThemeCascade {
    /// Rebuild a cascade from a persisted document.
    ///
    /// When the document names a palette the catalog knows, its resolved
    /// defaults are re-derived; live values are kept exactly as stored.
    pub fn restore(document: ThemeDocument, catalog: &PaletteCatalog) -> Self {
        let mut cascade = Self::new(document);
        if let Some(slug) = cascade.settings.active_palette.clone() {
            match catalog.get(&slug) {
                Some(palette) => cascade.derive_defaults(palette),
                None => warn!(palette = %slug, "active palette not in catalog, reset disabled"),
            }
        }
        cascade
    }

    /// Load the saved theme, filling whatever is missing from `fallback`.
    /// A namespace that was never written (or no longer parses) yields the
    /// fallback itself.
    pub fn load(
        store: &dyn PersistenceGateway,
        fallback: &ThemeDocument,
        catalog: &PaletteCatalog,
    ) -> Result<Self, StoreError> {
        let document = match load_json::<StoredTheme, _>(store, THEME_NAMESPACE)? {
            Some(stored) => {
                info!("restored saved theme");
                ThemeDocument {
                    theme: stored.theme.unwrap_or_else(|| fallback.theme.clone()),
                    custom_presets: stored
                        .custom_presets
                        .unwrap_or_else(|| fallback.custom_presets.clone()),
                }
            }
            None => fallback.clone(),
        };
        Ok(Self::restore(document, catalog))
    }

    /// Persist `{theme, custom_presets}`.
    pub fn save(&self, store: &mut dyn PersistenceGateway) -> Result<(), StoreError> {
        save_json(store, THEME_NAMESPACE, &self.document())?;
        info!(presets = self.presets.len(), "theme saved");
        Ok(())
    }
}
