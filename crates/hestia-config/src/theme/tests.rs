//! Tests for the theme cascade.

use super::*;
use crate::palette::{Palette, PaletteCatalog, PaletteSlot, SLOT_MAPPING};
use crate::schema::{ColorKey, CustomPreset, ThemeDocument, ThemeKey};
use hestia_common::store::THEME_NAMESPACE;
use hestia_common::{MemoryStore, PersistenceGateway, StoreError, ThemeError};

fn sample_palette() -> Palette {
    Palette::new("sample", "Sample")
        .with_slot(PaletteSlot::Base00, "1a1a1a")
        .with_slot(PaletteSlot::Base08, "ff0000")
        .with_slot(PaletteSlot::Base0B, "00ff00")
}

fn full_palette(slug: &str) -> Palette {
    PaletteSlot::ALL
        .into_iter()
        .enumerate()
        .fold(Palette::new(slug, slug.to_uppercase()), |p, (i, slot)| {
            p.with_slot(slot, format!("{:02x}{:02x}{:02x}", i * 16, i, 255 - i))
        })
}

fn cascade() -> ThemeCascade {
    ThemeCascade::new(ThemeDocument::default())
}

const ERROR: ThemeKey = ThemeKey::Color(ColorKey::StatusError);
const CANVAS: ThemeKey = ThemeKey::Color(ColorKey::BgCanvas);

// -- palettes --

#[test]
fn apply_palette_round_trips_every_mapped_key() {
    let palette = full_palette("full");
    let mut theme = cascade();
    theme.apply_palette(&palette);

    for (key, slot) in SLOT_MAPPING {
        let expected = format!("#{}", palette.slot(slot).unwrap());
        assert_eq!(theme.value(key.into()), expected, "{key}");
        assert_eq!(theme.default_for(key), Some(expected.as_str()));
    }
    assert_eq!(theme.active_palette(), Some("full"));
    assert!(theme.modified_keys().is_empty());
}

#[test]
fn apply_palette_leaves_unmapped_and_missing_slots() {
    let mut theme = cascade();
    let before_surface = theme.value(ThemeKey::Color(ColorKey::BgSurface));
    theme.set_field(ThemeKey::GapSize, "14").unwrap();
    theme.set_field(ThemeKey::Shadow, "off").unwrap();

    theme.apply_palette(&sample_palette());

    // base01 absent: bgSurface untouched and has no default.
    assert_eq!(theme.value(ThemeKey::Color(ColorKey::BgSurface)), before_surface);
    assert_eq!(theme.default_for(ColorKey::BgSurface), None);
    assert_eq!(theme.value(ThemeKey::GapSize), "14px");
    assert_eq!(theme.value(ThemeKey::Shadow), "false");
}

#[test]
fn palette_then_preset_overlays_only_preset_keys() {
    let mut theme = cascade();
    theme.apply_palette(&sample_palette());
    let gap = theme.value(ThemeKey::GapSize);

    let preset: CustomPreset = [(ColorKey::StatusError, "00ff00".to_string())].into();
    theme.apply_custom_preset(&preset);

    assert_eq!(theme.value(CANVAS), "#1a1a1a");
    assert_eq!(theme.value(ERROR), "#00ff00");
    assert_eq!(theme.value(ThemeKey::GapSize), gap);
    assert_eq!(theme.active_palette(), None);
    // The palette's default still stands.
    assert_eq!(theme.default_for(ColorKey::StatusError), Some("#ff0000"));
    assert_eq!(theme.modified_keys(), vec![ERROR]);
}

#[test]
fn preset_skips_values_that_are_not_hex() {
    let mut theme = cascade();
    let before = theme.value(CANVAS);
    let preset: CustomPreset = [
        (ColorKey::BgCanvas, "red".to_string()),
        (ColorKey::StatusError, " #ABC ".to_string()),
        (ColorKey::TextMain, "".to_string()),
    ]
    .into();
    let text_main = theme.value(ThemeKey::Color(ColorKey::TextMain));
    theme.apply_custom_preset(&preset);

    assert_eq!(theme.value(CANVAS), before);
    assert_eq!(theme.value(ERROR), "#ABC");
    assert_eq!(theme.value(ThemeKey::Color(ColorKey::TextMain)), text_main);
}

// -- fields --

#[test]
fn reset_after_set_restores_palette_value() {
    let mut theme = cascade();
    theme.apply_palette(&sample_palette());

    assert!(theme.set_field(ERROR, "#123456").unwrap());
    assert!(theme.is_modified(ERROR));
    assert!(theme.reset_field(ERROR));
    assert_eq!(theme.value(ERROR), "#ff0000");
    assert!(!theme.is_modified(ERROR));
}

#[test]
fn reset_uses_most_recent_palette() {
    let mut theme = cascade();
    theme.apply_palette(&sample_palette());
    theme.apply_palette(&Palette::new("other", "Other").with_slot(PaletteSlot::Base08, "aa0000"));
    theme.set_field(ERROR, "#000000").unwrap();
    theme.reset_field(ERROR);
    assert_eq!(theme.value(ERROR), "#aa0000");
}

#[test]
fn reset_without_palette_is_noop() {
    let mut theme = cascade();
    let preset: CustomPreset = [(ColorKey::StatusError, "00ff00".to_string())].into();
    theme.apply_custom_preset(&preset);
    assert!(!theme.set_field(ERROR, "#abcdef").unwrap());
    assert!(!theme.reset_field(ERROR));
    assert_eq!(theme.value(ERROR), "#abcdef");
    assert!(theme.modified_keys().is_empty());
}

#[test]
fn reset_non_color_key_is_noop() {
    let mut theme = cascade();
    theme.apply_palette(&sample_palette());
    theme.set_field(ThemeKey::GapSize, "30px").unwrap();
    assert!(!theme.reset_field(ThemeKey::GapSize));
    assert_eq!(theme.value(ThemeKey::GapSize), "30px");
}

#[test]
fn modified_comparison_ignores_case() {
    let mut theme = cascade();
    theme.apply_palette(&sample_palette());
    assert!(!theme.set_field(CANVAS, "#1A1A1A").unwrap());
}

#[test]
fn set_field_normalizes_values() {
    let mut theme = cascade();
    theme.set_field(CANVAS, "abcdef").unwrap();
    assert_eq!(theme.value(CANVAS), "#abcdef");
    theme.set_field(ThemeKey::BorderRadius, " 8 ").unwrap();
    assert_eq!(theme.value(ThemeKey::BorderRadius), "8px");
    theme.set_field(ThemeKey::GridPadding, "1.5rem").unwrap();
    assert_eq!(theme.value(ThemeKey::GridPadding), "1.5rem");
    theme.set_field(ThemeKey::Outlines, "ON").unwrap();
    assert_eq!(theme.value(ThemeKey::Outlines), "true");
    theme.set_field(ThemeKey::TitleBarText, "  Home Lab ").unwrap();
    assert_eq!(theme.value(ThemeKey::TitleBarText), "Home Lab");
}

#[test]
fn set_field_rejects_invalid_values() {
    let mut theme = cascade();
    let before = theme.clone();
    for (key, value) in [
        (CANVAS, "not-a-color"),
        (CANVAS, ""),
        (ThemeKey::GapSize, "wide"),
        (ThemeKey::Shadow, "maybe"),
    ] {
        let err = theme.set_field(key, value).unwrap_err();
        assert!(matches!(err, ThemeError::InvalidValue { .. }), "{key}={value}");
    }
    assert_eq!(theme, before);
}

#[test]
fn materialize_covers_every_key() {
    let mut theme = cascade();
    theme.set_field(ThemeKey::FontFamily, "").unwrap();
    theme.set_field(ThemeKey::TitleBarIcon, "").unwrap();

    let resolved = theme.materialize();
    assert_eq!(resolved.len(), ThemeKey::all().count());
    assert_eq!(resolved[&ThemeKey::FontFamily], "Courier New");
    assert_eq!(resolved[&ThemeKey::TitleBarIcon], "fa-server");
    assert_eq!(resolved[&ThemeKey::GapSize], "10px");
    assert_eq!(resolved[&ThemeKey::Shadow], "true");
    // Materializing does not change state.
    assert_eq!(theme.materialize(), resolved);
    assert_eq!(theme.value(ThemeKey::FontFamily), "");
}

// -- presets --

#[test]
fn save_preset_captures_all_colors_only() {
    let mut theme = cascade();
    theme.set_field(ThemeKey::GapSize, "22").unwrap();
    let name = theme.save_preset("  Evening ").unwrap();
    assert_eq!(name, "Evening");

    let preset = &theme.presets()["Evening"];
    assert_eq!(preset.len(), 15);
    assert_eq!(preset[&ColorKey::BgCanvas], theme.value(CANVAS));
}

#[test]
fn save_preset_overwrites_by_name() {
    let mut theme = cascade();
    theme.save_preset("Mine").unwrap();
    theme.set_field(CANVAS, "#010101").unwrap();
    theme.save_preset("Mine").unwrap();
    assert_eq!(theme.presets().len(), 1);
    assert_eq!(theme.presets()["Mine"][&ColorKey::BgCanvas], "#010101");
}

#[test]
fn save_preset_rejects_blank_name() {
    let mut theme = cascade();
    assert!(matches!(theme.save_preset("   "), Err(ThemeError::EmptyPresetName)));
    assert!(theme.presets().is_empty());
}

#[test]
fn selection_parsing() {
    assert_eq!(Selection::parse("base16:nord").unwrap(), Selection::Base16("nord"));
    assert_eq!(Selection::parse("custom:a:b").unwrap(), Selection::Custom("a:b"));
    for bad in ["nord", "base16:", "other:x", ""] {
        assert!(matches!(Selection::parse(bad), Err(ThemeError::InvalidSelection(_))), "{bad}");
    }
}

#[test]
fn apply_selection_resolves_palettes_and_presets() {
    let catalog: PaletteCatalog = [sample_palette()].into_iter().collect();
    let mut theme = cascade();

    theme.apply_selection("base16:sample", &catalog).unwrap();
    assert_eq!(theme.active_palette(), Some("sample"));

    theme.set_field(ERROR, "#0000ff").unwrap();
    theme.save_preset("Blue").unwrap();
    theme.apply_selection("base16:sample", &catalog).unwrap();
    assert_eq!(theme.value(ERROR), "#ff0000");

    theme.apply_selection("custom:Blue", &catalog).unwrap();
    assert_eq!(theme.value(ERROR), "#0000ff");
    assert_eq!(theme.active_palette(), None);

    assert!(matches!(
        theme.apply_selection("base16:missing", &catalog),
        Err(ThemeError::UnknownPalette(s)) if s == "missing"
    ));
    assert!(matches!(
        theme.apply_selection("custom:Missing", &catalog),
        Err(ThemeError::UnknownPreset(_))
    ));
}

#[test]
fn preset_entries_list_palettes_then_presets() {
    let catalog: PaletteCatalog = [full_palette("zeta"), full_palette("alpha")]
        .into_iter()
        .collect();
    let mut theme = cascade();
    theme.save_preset("b-custom").unwrap();
    theme.save_preset("a-custom").unwrap();

    let selections: Vec<String> = theme
        .preset_entries(&catalog)
        .iter()
        .map(PresetEntry::selection)
        .collect();
    assert_eq!(
        selections,
        ["base16:alpha", "base16:zeta", "custom:a-custom", "custom:b-custom"]
    );
}

#[test]
fn swatches_follow_active_palette() {
    let catalog: PaletteCatalog = [sample_palette()].into_iter().collect();
    let mut theme = cascade();
    assert!(theme.swatches(&catalog).is_empty());

    theme.apply_selection("base16:sample", &catalog).unwrap();
    assert_eq!(theme.swatches(&catalog), vec!["#1a1a1a", "#ff0000", "#00ff00"]);

    theme.apply_custom_preset(&CustomPreset::new());
    assert!(theme.swatches(&catalog).is_empty());
}

// -- persistence --

#[test]
fn restore_rederives_defaults_without_touching_values() {
    let catalog: PaletteCatalog = [sample_palette()].into_iter().collect();
    let mut theme = cascade();
    theme.apply_palette(&sample_palette());
    theme.set_field(ERROR, "#222222").unwrap();

    let restored = ThemeCascade::restore(theme.document(), &catalog);
    assert_eq!(restored.value(ERROR), "#222222");
    assert_eq!(restored.default_for(ColorKey::StatusError), Some("#ff0000"));
    assert_eq!(restored.modified_keys(), vec![ERROR]);
}

#[test]
fn restore_without_active_palette_has_no_defaults() {
    let catalog = PaletteCatalog::builtin();
    let mut theme = cascade();
    theme.apply_palette(catalog.get("nord").unwrap());
    theme.apply_custom_preset(&CustomPreset::new());

    let mut restored = ThemeCascade::restore(theme.document(), &catalog);
    assert_eq!(restored.default_for(ColorKey::BgCanvas), None);
    assert!(!restored.reset_field(CANVAS));
}

#[test]
fn save_and_load_through_store() {
    let catalog = PaletteCatalog::builtin();
    let mut store = MemoryStore::new();
    let mut theme = cascade();
    theme.apply_selection("base16:monokai", &catalog).unwrap();
    theme.set_field(ThemeKey::TitleBarText, "Den").unwrap();
    theme.save_preset("Saved").unwrap();
    theme.save(&mut store).unwrap();

    let loaded = ThemeCascade::load(&store, &ThemeDocument::default(), &catalog).unwrap();
    assert_eq!(loaded, theme);
}

#[test]
fn load_falls_back_when_missing_or_corrupt() {
    let catalog = PaletteCatalog::builtin();
    let mut fallback = ThemeDocument::default();
    fallback.theme.title_bar_text = "Fallback".into();

    let mut store = MemoryStore::new();
    let loaded = ThemeCascade::load(&store, &fallback, &catalog).unwrap();
    assert_eq!(loaded.value(ThemeKey::TitleBarText), "Fallback");

    store.save_raw(THEME_NAMESPACE, "{not json").unwrap();
    let loaded = ThemeCascade::load(&store, &fallback, &catalog).unwrap();
    assert_eq!(loaded.value(ThemeKey::TitleBarText), "Fallback");
}

#[test]
fn load_fills_missing_half_from_fallback() {
    let catalog = PaletteCatalog::builtin();
    let mut fallback = ThemeDocument::default();
    fallback.theme.title_bar_text = "Fallback".into();

    let mut store = MemoryStore::new();
    store
        .save_raw(
            THEME_NAMESPACE,
            r##"{"custom_presets": {"Red": {"statusError": "#ff0000"}}}"##,
        )
        .unwrap();
    let loaded = ThemeCascade::load(&store, &fallback, &catalog).unwrap();
    assert_eq!(loaded.value(ThemeKey::TitleBarText), "Fallback");
    assert_eq!(loaded.presets()["Red"][&ColorKey::StatusError], "#ff0000");
}

#[test]
fn save_reports_quota_errors() {
    let mut store = MemoryStore::with_quota(16);
    let err = cascade().save(&mut store).unwrap_err();
    assert!(matches!(err, StoreError::QuotaExceeded { .. }));
}
