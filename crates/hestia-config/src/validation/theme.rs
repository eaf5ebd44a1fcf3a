//! Theme and preset validation.

use tracing::warn;

use crate::colors::{normalize_color, validate_length};
use crate::schema::{ColorKey, HestiaConfig, ThemeSettings};

use super::helpers::{check_color, check_length};

/// Every theme color is hex and every length is a CSS length.
pub(crate) fn validate_theme(errors: &mut Vec<String>, config: &HestiaConfig) {
    let theme = &config.theme;
    for key in ColorKey::ALL {
        check_color(errors, &format!("theme.{key}"), theme.color(key));
    }
    check_length(errors, "theme.gapSize", &theme.gap_size);
    check_length(errors, "theme.borderRadius", &theme.border_radius);
    check_length(errors, "theme.gridPadding", &theme.grid_padding);

    if let Some(slug) = &theme.active_palette {
        if slug.trim().is_empty() {
            errors.push("theme.activePalette must not be empty".into());
        }
    }
}

/// Preset names are non-blank and every color is hex.
pub(crate) fn validate_presets(errors: &mut Vec<String>, config: &HestiaConfig) {
    for (name, preset) in &config.custom_presets {
        if name.trim().is_empty() {
            errors.push("custom_presets: preset name must not be empty".into());
        }
        for (key, color) in preset {
            check_color(errors, &format!("custom_presets.{name}.{key}"), color);
        }
    }
}

/// Put every theme field back into a renderable form. Bare hex colors gain
/// their `#`; anything else that fails validation takes the default value.
/// Preset colors that are not hex are dropped from their preset.
pub(crate) fn repair_theme(config: &mut HestiaConfig) -> usize {
    let defaults = ThemeSettings::default();
    let theme = &mut config.theme;
    let mut repaired = 0;

    for key in ColorKey::ALL {
        let current = theme.color(key);
        let fixed = normalize_color(current).unwrap_or_else(|| {
            warn!("theme.{key} = {current:?} is not a hex color, using the default");
            defaults.color(key).to_string()
        });
        if fixed != current {
            *theme.color_mut(key) = fixed;
            repaired += 1;
        }
    }

    let lengths = [
        ("gapSize", &mut theme.gap_size, &defaults.gap_size),
        ("borderRadius", &mut theme.border_radius, &defaults.border_radius),
        ("gridPadding", &mut theme.grid_padding, &defaults.grid_padding),
    ];
    for (name, value, default) in lengths {
        if !validate_length(value.as_str()) {
            warn!("theme.{name} = {value:?} is not a CSS length, using the default");
            value.clone_from(default);
            repaired += 1;
        }
    }

    for (name, preset) in &mut config.custom_presets {
        preset.retain(|key, color| match normalize_color(color) {
            Some(fixed) => {
                *color = fixed;
                true
            }
            None => {
                warn!("custom_presets.{name}.{key} = {color:?} is not a hex color, dropped");
                repaired += 1;
                false
            }
        });
    }
    repaired
}
