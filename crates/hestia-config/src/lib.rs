//! Hestia configuration and theming.
//!
//! Provides the TOML config file, the base16 palette catalog, the theme
//! cascade, and the JSON file store. All config sections use defaults so
//! partial configs work out of the box.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use hestia_config::{load_config, PaletteCatalog, ThemeCascade};
//!
//! let config = load_config().expect("failed to load config");
//! let catalog = PaletteCatalog::builtin();
//! let theme = ThemeCascade::restore(config.theme_document(), &catalog);
//! println!("{:?}", theme.materialize());
//! ```

pub mod colors;
pub mod palette;
pub mod schema;
pub mod store;
pub mod theme;
pub mod toml_loader;
pub mod validation;

// Re-export core types for convenience
pub use palette::{Palette, PaletteCatalog, PaletteSlot, SLOT_MAPPING};
pub use schema::{
    ColorKey, CustomPreset, HestiaConfig, ThemeDocument, ThemeKey, ThemeSettings,
    CONFIG_SCHEMA_VERSION,
};
pub use store::JsonFileStore;
pub use theme::{PresetEntry, ResolvedTheme, ThemeCascade};

use hestia_common::ConfigError;

/// Load config from the platform default path and validate it.
///
/// Creates a commented default `config.toml` if none exists.
pub fn load_config() -> Result<HestiaConfig, ConfigError> {
    let config = toml_loader::load_default()?;
    validation::validate(&config)?;
    Ok(config)
}

/// Palette catalog: the built-ins plus any schemes in the configured (or
/// default) palettes directory.
pub fn load_catalog(config: &HestiaConfig) -> Result<PaletteCatalog, ConfigError> {
    let mut catalog = PaletteCatalog::builtin();
    let dir = match &config.storage.palettes_dir {
        Some(dir) => dir.clone(),
        None => toml_loader::default_palettes_dir()?,
    };
    let extra = catalog.load_dir(&dir)?;
    if extra > 0 {
        tracing::info!(extra, "loaded user palettes from {}", dir.display());
    }
    Ok(catalog)
}

/// Serialize a config to a pretty-printed JSON string.
pub fn config_to_json(config: &HestiaConfig) -> String {
    serde_json::to_string_pretty(config)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize config: {e}\"}}"))
}
