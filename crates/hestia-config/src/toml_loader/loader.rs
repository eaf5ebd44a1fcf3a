//! Core TOML config loading: read from path or platform default.

use crate::schema::HestiaConfig;
use crate::validation;
use hestia_common::ConfigError;
use std::path::Path;
use tracing::{info, warn};

use super::paths::{create_default_config, default_config_path};

/// Load config from a specific TOML file path.
///
/// Missing fields take their defaults. Validation problems are logged;
/// theme values that fail it are repaired (see [`validation::repair`])
/// and the rest of the config is returned as written.
pub fn load_from_path(path: &Path) -> Result<HestiaConfig, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::FileNotFound(path.to_path_buf()));
    }
    let content = std::fs::read_to_string(path)
        .map_err(|e| ConfigError::ParseError(format!("failed to read {}: {e}", path.display())))?;

    let mut config: HestiaConfig = toml::from_str(&content)
        .map_err(|e| ConfigError::ParseError(format!("failed to parse TOML: {e}")))?;

    if let Err(e) = validation::validate(&config) {
        warn!("config validation warning: {e}");
        let repaired = validation::repair(&mut config);
        if repaired > 0 {
            info!(repaired, "theme values repaired");
        }
    }

    info!("loaded config from {}", path.display());
    Ok(config)
}

/// Load `path`, writing the documented template there first if it does
/// not exist yet.
pub fn load_or_create(path: &Path) -> Result<HestiaConfig, ConfigError> {
    match load_from_path(path) {
        Err(ConfigError::FileNotFound(_)) => {
            info!("no config found at {}, creating default", path.display());
            create_default_config(path)?;
            Ok(HestiaConfig::default())
        }
        other => other,
    }
}

/// Load config from the platform-specific default path.
///
/// On macOS: `~/Library/Application Support/hestia/config.toml`
/// On Linux: `~/.config/hestia/config.toml`
pub fn load_default() -> Result<HestiaConfig, ConfigError> {
    load_or_create(&default_config_path()?)
}
