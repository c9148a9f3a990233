//! Boxes configuration system.
//!
//! TOML-based configuration with range validation. Every section uses
//! serde defaults, so a partial file (or no file at all) works.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use boxes_config::{load_config, config_to_json};
//!
//! let config = load_config().expect("failed to load config");
//! println!("{}", config_to_json(&config));
//! ```

pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use schema::{BoxesConfig, OrbitMode, CONFIG_SCHEMA_VERSION, ZOOM_MAX, ZOOM_MIN};

use std::path::Path;

use boxes_common::ConfigError;

/// Load config from the platform default path.
///
/// Creates a commented default file when none exists. Validation
/// problems are logged by the loader and the parsed values are kept.
pub fn load_config() -> Result<BoxesConfig, ConfigError> {
    toml_loader::load_default()
}

/// Load config from an explicit path (the `--config` override).
///
/// Unlike [`load_config`], a missing file is an error rather than a
/// trigger to write defaults.
pub fn load_config_from(path: &Path) -> Result<BoxesConfig, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::FileNotFound(path.to_path_buf()));
    }
    toml_loader::load_from_path(path)
}

/// Serialize a config to a pretty-printed JSON string.
pub fn config_to_json(config: &BoxesConfig) -> String {
    serde_json::to_string_pretty(config)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize config: {e}\"}}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_to_json_contains_all_sections() {
        let config = BoxesConfig::default();
        let json = config_to_json(&config);
        assert!(json.contains("\"scene\""));
        assert!(json.contains("\"orbit\""));
        assert!(json.contains("\"reflections\""));
        assert!(json.contains("\"assets\""));
        assert!(json.contains("\"materials\""));
        assert!(json.contains("\"logging\""));
    }

    #[test]
    fn config_schema_version_is_1() {
        assert_eq!(CONFIG_SCHEMA_VERSION, 1);
    }

    #[test]
    fn default_config_round_trips_through_json() {
        let config = BoxesConfig::default();
        let json = config_to_json(&config);
        let parsed: BoxesConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.scene.initial_zoom, 600);
        assert_eq!(parsed.orbit.camera.mode, OrbitMode::Plane);
        assert_eq!(parsed.reflections.stagger, 3);
    }

    #[test]
    fn load_config_from_missing_path_is_not_found() {
        let err = load_config_from(Path::new("/tmp/boxes_missing_config.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::FileNotFound(_)));
    }
}
