//! Configuration schema types for Hestia.
//!
//! All structs use `serde(default)` so partial configs work correctly.
//! Missing fields are filled with the built-in dark theme and an empty
//! dashboard.

mod keys;
mod surface;
mod system;
mod theme;

pub use keys::*;
pub use surface::*;
pub use system::*;
pub use theme::*;

use hestia_common::types::Tile;
use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration for Hestia.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct HestiaConfig {
    /// Theme used until one has been saved.
    pub theme: ThemeSettings,
    /// Presets offered until any have been saved.
    pub custom_presets: CustomPresets,
    /// Tiles shown until a layout has been saved.
    pub apps: Vec<Tile>,
    pub storage: StorageConfig,
    pub surface: SurfaceConfig,
    pub logging: LoggingConfig,
}

impl HestiaConfig {
    /// The `{theme, custom_presets}` pair this config seeds the cascade with.
    pub fn theme_document(&self) -> ThemeDocument {
        ThemeDocument {
            theme: self.theme.clone(),
            custom_presets: self.custom_presets.clone(),
        }
    }
}

/// Payload of the theme namespace.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeDocument {
    pub theme: ThemeSettings,
    pub custom_presets: CustomPresets,
}
