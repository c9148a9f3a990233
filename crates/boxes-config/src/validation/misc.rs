//! Validation for reflections, assets and logging.

use crate::schema::BoxesConfig;

use super::helpers::validate_range;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

pub(crate) fn validate_reflections(errors: &mut Vec<String>, config: &BoxesConfig) {
    let r = &config.reflections;
    validate_range(errors, "reflections.main_resolution", r.main_resolution, 16, 4096);
    validate_range(errors, "reflections.ring_resolution", r.ring_resolution, 16, 4096);
    validate_range(errors, "reflections.stagger", r.stagger, 1, 16);
}

pub(crate) fn validate_assets(errors: &mut Vec<String>, config: &BoxesConfig) {
    let a = &config.assets;
    validate_range(errors, "assets.texture_size", a.texture_size, 16, 4096);
    validate_range(errors, "assets.environment_size", a.environment_size, 16, 4096);
    if a.directory.trim().is_empty() {
        errors.push("assets.directory must not be empty".into());
    }
    if !a.base_shader.ends_with(".wgsl") {
        errors.push(format!(
            "assets.base_shader = {:?} must name a .wgsl file",
            a.base_shader
        ));
    }
    if a.reflection_uniform.trim().is_empty() {
        errors.push("assets.reflection_uniform must not be empty".into());
    }
}

pub(crate) fn validate_logging(errors: &mut Vec<String>, config: &BoxesConfig) {
    let level = config.logging.level.to_ascii_lowercase();
    if !LOG_LEVELS.contains(&level.as_str()) {
        errors.push(format!(
            "logging.level = {:?} must be one of {}",
            config.logging.level,
            LOG_LEVELS.join(", ")
        ));
    }
}
