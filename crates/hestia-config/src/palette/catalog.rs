//! The slug → palette lookup table.

use std::collections::BTreeMap;
use std::path::Path;

use hestia_common::ConfigError;
use tracing::{debug, warn};

use super::loader::{load_palette_from_path, parse_palette};
use super::Palette;

/// Schemes compiled into the binary.
const BUILT_IN_PALETTES: &[(&str, &str)] = &[
    ("default-dark", include_str!("../../resources/palettes/default-dark.yaml")),
    ("dracula", include_str!("../../resources/palettes/dracula.yaml")),
    (
        "gruvbox-dark-medium",
        include_str!("../../resources/palettes/gruvbox-dark-medium.yaml"),
    ),
    ("monokai", include_str!("../../resources/palettes/monokai.yaml")),
    ("nord", include_str!("../../resources/palettes/nord.yaml")),
    ("solarized-dark", include_str!("../../resources/palettes/solarized-dark.yaml")),
];

/// Read-only collection of base16 palettes, iterated in slug order.
#[derive(Debug, Clone, Default)]
pub struct PaletteCatalog {
    palettes: BTreeMap<String, Palette>,
}

impl PaletteCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Catalog holding the embedded schemes.
    pub fn builtin() -> Self {
        let mut catalog = Self::new();
        for (slug, yaml) in BUILT_IN_PALETTES {
            match parse_palette(slug, yaml) {
                Ok(palette) => {
                    catalog.insert(palette);
                }
                Err(e) => warn!("built-in palette {slug} is broken: {e}"),
            }
        }
        catalog
    }

    /// Add or replace a palette. Returns the one it replaced.
    pub fn insert(&mut self, palette: Palette) -> Option<Palette> {
        self.palettes.insert(palette.slug.clone(), palette)
    }

    /// Load every `.yaml`/`.yml` scheme in `dir`, replacing built-ins with
    /// the same slug. A missing directory loads nothing; unreadable files
    /// are skipped with a warning. Returns how many palettes were loaded.
    pub fn load_dir(&mut self, dir: &Path) -> Result<usize, ConfigError> {
        if !dir.is_dir() {
            debug!("no palette directory at {}", dir.display());
            return Ok(0);
        }
        let entries = std::fs::read_dir(dir).map_err(|e| {
            ConfigError::ParseError(format!("failed to read {}: {e}", dir.display()))
        })?;

        let mut paths: Vec<_> = entries
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|p| {
                p.extension()
                    .and_then(|ext| ext.to_str())
                    .is_some_and(|ext| ext == "yaml" || ext == "yml")
            })
            .collect();
        paths.sort();

        let mut loaded = 0;
        for path in paths {
            match load_palette_from_path(&path) {
                Ok(palette) => {
                    self.insert(palette);
                    loaded += 1;
                }
                Err(e) => warn!("skipping palette {}: {e}", path.display()),
            }
        }
        Ok(loaded)
    }

    pub fn get(&self, slug: &str) -> Option<&Palette> {
        self.palettes.get(slug)
    }

    pub fn contains(&self, slug: &str) -> bool {
        self.palettes.contains_key(slug)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Palette> {
        self.palettes.values()
    }

    pub fn len(&self) -> usize {
        self.palettes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.palettes.is_empty()
    }
}

impl FromIterator<Palette> for PaletteCatalog {
    fn from_iter<I: IntoIterator<Item = Palette>>(iter: I) -> Self {
        let mut catalog = Self::new();
        for palette in iter {
            catalog.insert(palette);
        }
        catalog
    }
}
