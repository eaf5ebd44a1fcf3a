//! Base16 palettes and the catalog they are looked up in.
//!
//! A palette is sixteen slots `base00..base0F`. A fixed table maps slots
//! onto the semantic color keys; see [`SLOT_MAPPING`].

mod catalog;
mod loader;


pub use catalog::PaletteCatalog;
pub use loader::{load_palette_from_path, parse_palette};

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::colors::format_color;
use crate::schema::ColorKey;

/// One of the sixteen base16 color slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PaletteSlot {
    #[serde(rename = "base00")]
    Base00,
    #[serde(rename = "base01")]
    Base01,
    #[serde(rename = "base02")]
    Base02,
    #[serde(rename = "base03")]
    Base03,
    #[serde(rename = "base04")]
    Base04,
    #[serde(rename = "base05")]
    Base05,
    #[serde(rename = "base06")]
    Base06,
    #[serde(rename = "base07")]
    Base07,
    #[serde(rename = "base08")]
    Base08,
    #[serde(rename = "base09")]
    Base09,
    #[serde(rename = "base0A")]
    Base0A,
    #[serde(rename = "base0B")]
    Base0B,
    #[serde(rename = "base0C")]
    Base0C,
    #[serde(rename = "base0D")]
    Base0D,
    #[serde(rename = "base0E")]
    Base0E,
    #[serde(rename = "base0F")]
    Base0F,
}

impl PaletteSlot {
    pub const ALL: [PaletteSlot; 16] = [
        PaletteSlot::Base00,
        PaletteSlot::Base01,
        PaletteSlot::Base02,
        PaletteSlot::Base03,
        PaletteSlot::Base04,
        PaletteSlot::Base05,
        PaletteSlot::Base06,
        PaletteSlot::Base07,
        PaletteSlot::Base08,
        PaletteSlot::Base09,
        PaletteSlot::Base0A,
        PaletteSlot::Base0B,
        PaletteSlot::Base0C,
        PaletteSlot::Base0D,
        PaletteSlot::Base0E,
        PaletteSlot::Base0F,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            PaletteSlot::Base00 => "base00",
            PaletteSlot::Base01 => "base01",
            PaletteSlot::Base02 => "base02",
            PaletteSlot::Base03 => "base03",
            PaletteSlot::Base04 => "base04",
            PaletteSlot::Base05 => "base05",
            PaletteSlot::Base06 => "base06",
            PaletteSlot::Base07 => "base07",
            PaletteSlot::Base08 => "base08",
            PaletteSlot::Base09 => "base09",
            PaletteSlot::Base0A => "base0A",
            PaletteSlot::Base0B => "base0B",
            PaletteSlot::Base0C => "base0C",
            PaletteSlot::Base0D => "base0D",
            PaletteSlot::Base0E => "base0E",
            PaletteSlot::Base0F => "base0F",
        }
    }

    /// Look up a slot by name, case-insensitively (`base0a` == `base0A`).
    pub fn from_name(s: &str) -> Option<Self> {
        PaletteSlot::ALL
            .into_iter()
            .find(|slot| slot.as_str().eq_ignore_ascii_case(s))
    }
}

impl fmt::Display for PaletteSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Semantic key ← palette slot.
pub const SLOT_MAPPING: [(ColorKey, PaletteSlot); 15] = [
    (ColorKey::BgCanvas, PaletteSlot::Base00),
    (ColorKey::BgSurface, PaletteSlot::Base01),
    (ColorKey::BgHighlight, PaletteSlot::Base02),
    (ColorKey::BorderDim, PaletteSlot::Base02),
    (ColorKey::BorderBright, PaletteSlot::Base03),
    (ColorKey::TextMain, PaletteSlot::Base05),
    (ColorKey::TextMuted, PaletteSlot::Base04),
    (ColorKey::TextFaint, PaletteSlot::Base03),
    (ColorKey::TextInverse, PaletteSlot::Base00),
    (ColorKey::BrandPrimary, PaletteSlot::Base0B),
    (ColorKey::BrandSecondary, PaletteSlot::Base0D),
    (ColorKey::BrandTertiary, PaletteSlot::Base0E),
    (ColorKey::StatusError, PaletteSlot::Base08),
    (ColorKey::StatusWarning, PaletteSlot::Base09),
    (ColorKey::StatusSuccess, PaletteSlot::Base0B),
];

/// A read-only base16 scheme.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    pub slug: String,
    pub name: String,
    pub author: Option<String>,
    /// Slot colors as written in the source, with or without `#`.
    pub slots: BTreeMap<PaletteSlot, String>,
}

impl Palette {
    pub fn new(slug: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            slug: slug.into(),
            name: name.into(),
            author: None,
            slots: BTreeMap::new(),
        }
    }

    pub fn with_slot(mut self, slot: PaletteSlot, color: impl Into<String>) -> Self {
        self.slots.insert(slot, color.into());
        self
    }

    /// Raw slot value, if the palette defines it.
    pub fn slot(&self, slot: PaletteSlot) -> Option<&str> {
        self.slots
            .get(&slot)
            .map(String::as_str)
            .filter(|v| !v.trim().is_empty())
    }

    /// The color each mapped key receives from this palette, `#`-prefixed.
    /// Keys whose slot is missing are skipped.
    pub fn semantic_colors(&self) -> impl Iterator<Item = (ColorKey, String)> + '_ {
        SLOT_MAPPING
            .iter()
            .filter_map(|&(key, slot)| self.slot(slot).map(|c| (key, format_color(c))))
    }

    /// All defined slot colors in slot order, `#`-prefixed.
    pub fn swatches(&self) -> Vec<String> {
        PaletteSlot::ALL
            .into_iter()
            .filter_map(|slot| self.slot(slot).map(format_color))
            .collect()
    }
}
