//! Full configuration validation.
//!
//! Each domain has its own submodule; this orchestrator calls them all
//! and collects errors into a single `ConfigError`.

mod helpers;
mod layout;
mod misc;
mod theme;


use crate::schema::HestiaConfig;
use hestia_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &HestiaConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    theme::validate_theme(&mut errors, config);
    theme::validate_presets(&mut errors, config);
    layout::validate_apps(&mut errors, config);
    misc::validate_surface(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}

/// Repair the theme in place so the first frame only sees valid values.
/// Returns how many fields were changed or dropped.
pub fn repair(config: &mut HestiaConfig) -> usize {
    theme::repair_theme(config)
}
