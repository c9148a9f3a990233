//! Full configuration validation.
//!
//! Each domain has its own submodule; this orchestrator calls them all
//! and collects errors into a single `ConfigError`.

mod helpers;
mod materials;
mod misc;
mod orbit;
mod scene;


use crate::schema::BoxesConfig;
use boxes_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &BoxesConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    scene::validate_scene(&mut errors, config);
    orbit::validate_orbits(&mut errors, config);
    misc::validate_reflections(&mut errors, config);
    misc::validate_assets(&mut errors, config);
    misc::validate_logging(&mut errors, config);
    materials::validate_materials(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
