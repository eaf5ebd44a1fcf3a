//! The theme cascade.
//!
//! Live theme values are built up in layers: a base16 palette sets every
//! mapped color and records it as the reset target, a custom preset
//! overlays the colors it names, and single-key edits overlay one value.
//! [`ThemeCascade::materialize`] flattens the result for a render surface.

mod apply;
mod fields;
mod loader;
mod types;

#[cfg(test)]
mod tests;

pub use types::{PresetEntry, ResolvedTheme, Selection, ThemeCascade};
