//! Semantic theme keys.
//!
//! Key names are camelCase everywhere they appear as text: in persisted
//! JSON, in `config.toml`, and on the command line.

use std::fmt;
use std::str::FromStr;

use hestia_common::ThemeError;
use serde::{Deserialize, Serialize, Serializer};

/// The fifteen semantic color roles a palette or preset can set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ColorKey {
    BgCanvas,
    BgSurface,
    BgHighlight,
    BorderDim,
    BorderBright,
    TextMain,
    TextMuted,
    TextFaint,
    TextInverse,
    BrandPrimary,
    BrandSecondary,
    BrandTertiary,
    StatusError,
    StatusWarning,
    StatusSuccess,
}

impl ColorKey {
    pub const ALL: [ColorKey; 15] = [
        ColorKey::BgCanvas,
        ColorKey::BgSurface,
        ColorKey::BgHighlight,
        ColorKey::BorderDim,
        ColorKey::BorderBright,
        ColorKey::TextMain,
        ColorKey::TextMuted,
        ColorKey::TextFaint,
        ColorKey::TextInverse,
        ColorKey::BrandPrimary,
        ColorKey::BrandSecondary,
        ColorKey::BrandTertiary,
        ColorKey::StatusError,
        ColorKey::StatusWarning,
        ColorKey::StatusSuccess,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ColorKey::BgCanvas => "bgCanvas",
            ColorKey::BgSurface => "bgSurface",
            ColorKey::BgHighlight => "bgHighlight",
            ColorKey::BorderDim => "borderDim",
            ColorKey::BorderBright => "borderBright",
            ColorKey::TextMain => "textMain",
            ColorKey::TextMuted => "textMuted",
            ColorKey::TextFaint => "textFaint",
            ColorKey::TextInverse => "textInverse",
            ColorKey::BrandPrimary => "brandPrimary",
            ColorKey::BrandSecondary => "brandSecondary",
            ColorKey::BrandTertiary => "brandTertiary",
            ColorKey::StatusError => "statusError",
            ColorKey::StatusWarning => "statusWarning",
            ColorKey::StatusSuccess => "statusSuccess",
        }
    }
}

impl fmt::Display for ColorKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ColorKey {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ColorKey::ALL
            .into_iter()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| ThemeError::UnknownKey(s.to_string()))
    }
}

/// How a key's value is validated and rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyKind {
    /// Hex color with a leading `#`.
    Color,
    /// CSS length; bare numbers become `<n>px`.
    Length,
    /// Free text.
    Text,
    /// Boolean switch.
    Toggle,
}

/// Every setting the theme cascade manages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ThemeKey {
    Color(ColorKey),
    GapSize,
    BorderRadius,
    GridPadding,
    FontFamily,
    TitleBarIcon,
    TitleBarText,
    Shadow,
    Outlines,
}

impl ThemeKey {
    /// Keys outside the color set, in panel order.
    pub const NON_COLOR: [ThemeKey; 8] = [
        ThemeKey::GapSize,
        ThemeKey::BorderRadius,
        ThemeKey::GridPadding,
        ThemeKey::FontFamily,
        ThemeKey::TitleBarIcon,
        ThemeKey::TitleBarText,
        ThemeKey::Shadow,
        ThemeKey::Outlines,
    ];

    /// All keys: colors first, then the rest.
    pub fn all() -> impl Iterator<Item = ThemeKey> {
        ColorKey::ALL
            .into_iter()
            .map(ThemeKey::Color)
            .chain(Self::NON_COLOR)
    }

    pub fn kind(self) -> KeyKind {
        match self {
            ThemeKey::Color(_) => KeyKind::Color,
            ThemeKey::GapSize | ThemeKey::BorderRadius | ThemeKey::GridPadding => KeyKind::Length,
            ThemeKey::FontFamily | ThemeKey::TitleBarIcon | ThemeKey::TitleBarText => KeyKind::Text,
            ThemeKey::Shadow | ThemeKey::Outlines => KeyKind::Toggle,
        }
    }

    pub fn as_color(self) -> Option<ColorKey> {
        match self {
            ThemeKey::Color(c) => Some(c),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ThemeKey::Color(c) => c.as_str(),
            ThemeKey::GapSize => "gapSize",
            ThemeKey::BorderRadius => "borderRadius",
            ThemeKey::GridPadding => "gridPadding",
            ThemeKey::FontFamily => "fontFamily",
            ThemeKey::TitleBarIcon => "titleBarIcon",
            ThemeKey::TitleBarText => "titleBarText",
            ThemeKey::Shadow => "shadow",
            ThemeKey::Outlines => "outlines",
        }
    }
}

impl From<ColorKey> for ThemeKey {
    fn from(key: ColorKey) -> Self {
        ThemeKey::Color(key)
    }
}

impl fmt::Display for ThemeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeKey {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Ok(color) = s.parse::<ColorKey>() {
            return Ok(ThemeKey::Color(color));
        }
        Self::NON_COLOR
            .into_iter()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| ThemeError::UnknownKey(s.to_string()))
    }
}

impl Serialize for ThemeKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}
