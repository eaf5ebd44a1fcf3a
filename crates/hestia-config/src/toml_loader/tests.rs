//! Tests for TOML config loading, creation, and path resolution.

use super::*;
use crate::schema::{ColorKey, LogLevel};
use hestia_common::ConfigError;
use std::path::Path;

#[test]
fn load_from_nonexistent_returns_file_not_found() {
    let result = load_from_path(Path::new("/tmp/nonexistent_hestia_config.toml"));
    assert!(matches!(result, Err(ConfigError::FileNotFound(_))));
}

#[test]
fn load_valid_partial_toml() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r##"
[theme]
bgCanvas = "#101010"
gapSize = 14
titleBarText = "Den"

[logging]
level = "debug"
"##,
    )
    .unwrap();

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.theme.bg_canvas, "#101010");
    assert_eq!(config.theme.gap_size, "14px");
    assert_eq!(config.theme.title_bar_text, "Den");
    assert_eq!(config.logging.level, LogLevel::Debug);
    // Defaults preserved
    assert_eq!(config.theme.font_family, "Courier New");
    assert!(config.apps.is_empty());
    assert_eq!(config.surface.grid_width, 1200.0);
}

#[test]
fn load_apps_and_presets() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r##"
[custom_presets.Evening]
bgCanvas = "#101018"

[[apps]]
id = 1
name = "Plex"
x = 1
y = 1
cols = 2
rows = 1

[[apps]]
id = 2
name = "Sonarr"
type = "static"
x = 3
y = 1
cols = 1
rows = 1
"##,
    )
    .unwrap();

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.apps.len(), 2);
    assert_eq!(config.apps[0].name, "Plex");
    assert_eq!(config.apps[1].label(), "1x1");
    assert_eq!(
        config.custom_presets["Evening"][&ColorKey::BgCanvas],
        "#101018"
    );
}

#[test]
fn load_invalid_toml_returns_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "this is not valid toml {{{").unwrap();

    let result = load_from_path(&path);
    assert!(matches!(result, Err(ConfigError::ParseError(_))));
}

#[test]
fn invalid_theme_values_fall_back_to_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r##"
[theme]
bgCanvas = "red"
textMain = "1d2021"
gapSize = "wide"
titleBarText = "Den"

[custom_presets.Mixed]
statusError = "ff0000"
statusWarning = "orange"
"##,
    )
    .unwrap();

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.theme.bg_canvas, "#0f1115");
    assert_eq!(config.theme.text_main, "#1d2021");
    assert_eq!(config.theme.gap_size, "10px");
    assert_eq!(config.theme.title_bar_text, "Den");
    let mixed = &config.custom_presets["Mixed"];
    assert_eq!(mixed.len(), 1);
    assert_eq!(mixed[&ColorKey::StatusError], "#ff0000");
    assert!(crate::validation::validate(&config).is_ok());
}

#[test]
fn create_and_load_default_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("hestia").join("config.toml");

    create_default_config(&path).unwrap();
    assert!(path.exists());

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.theme.title_bar_text, "HestiaHUD");
    assert!(config.custom_presets.is_empty());
    assert!(crate::validation::validate(&config).is_ok());
}

#[test]
fn load_or_create_writes_template_once() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");

    let config = load_or_create(&path).unwrap();
    assert!(path.exists());
    assert_eq!(config.theme.gap_size, "10px");

    std::fs::write(&path, "[theme]\ntitleBarText = \"Edited\"\n").unwrap();
    let config = load_or_create(&path).unwrap();
    assert_eq!(config.theme.title_bar_text, "Edited");
}

#[test]
fn default_paths_end_in_hestia() {
    if let Ok(path) = default_config_path() {
        assert!(path.ends_with("hestia/config.toml"));
    }
    if let Ok(dir) = default_data_dir() {
        assert!(dir.ends_with("hestia"));
    }
    if let Ok(dir) = default_palettes_dir() {
        assert!(dir.ends_with("hestia/palettes"));
    }
}
