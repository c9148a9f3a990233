//! Validation for the `[scene]` section.

use crate::schema::{BoxesConfig, ZOOM_MAX, ZOOM_MIN};

use super::helpers::{validate_range_f32, validate_range_i32};

pub(crate) fn validate_scene(errors: &mut Vec<String>, config: &BoxesConfig) {
    let scene = &config.scene;
    validate_range_f32(errors, "scene.ring_radius", scene.ring_radius, 0.5, 10.0);
    validate_range_f32(
        errors,
        "scene.background_scale",
        scene.background_scale,
        1.0,
        50.0,
    );
    validate_range_f32(errors, "scene.field_of_view", scene.field_of_view, 10.0, 120.0);
    validate_range_i32(errors, "scene.initial_zoom", scene.initial_zoom, ZOOM_MIN, ZOOM_MAX);

    for (axis, value) in ["x", "y", "z"].iter().zip(scene.box_scale) {
        validate_range_f32(errors, &format!("scene.box_scale.{axis}"), value, 0.01, 5.0);
    }
}
