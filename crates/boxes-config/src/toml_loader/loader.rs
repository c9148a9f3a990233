//! Read a config from a path or the platform default location.

use crate::schema::BoxesConfig;
use crate::validation;
use boxes_common::ConfigError;
use std::path::Path;
use tracing::{info, warn};

use super::paths::{create_default_config, default_config_path};

/// Load config from a specific TOML file path.
///
/// Missing fields take serde defaults. Validation failures are logged
/// and the parsed config is returned as-is.
pub fn load_from_path(path: &Path) -> Result<BoxesConfig, ConfigError> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| ConfigError::ParseError(format!("failed to read {}: {e}", path.display())))?;

    let config: BoxesConfig = toml::from_str(&content)
        .map_err(|e| ConfigError::ParseError(format!("failed to parse TOML: {e}")))?;

    if let Err(e) = validation::validate(&config) {
        warn!("config validation warning: {e}; using parsed values");
    }

    info!("loaded config from {}", path.display());
    Ok(config)
}

/// Load config from the platform default path.
///
/// On Linux: `~/.config/boxes/config.toml`
/// On macOS: `~/Library/Application Support/boxes/config.toml`
///
/// A missing file is created from the commented template and defaults are returned.
pub fn load_default() -> Result<BoxesConfig, ConfigError> {
    let path = default_config_path()?;

    if !path.exists() {
        info!("no config found at {}, creating default", path.display());
        create_default_config(&path)?;
        return Ok(BoxesConfig::default());
    }

    load_from_path(&path)
}
