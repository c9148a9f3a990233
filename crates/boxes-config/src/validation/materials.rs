//! Validation for `[materials]`: color strings must parse.

use boxes_common::Color;

use crate::schema::BoxesConfig;

pub(crate) fn validate_materials(errors: &mut Vec<String>, config: &BoxesConfig) {
    for (name, value) in &config.materials.colors {
        if Color::from_hex(value).is_none() {
            errors.push(format!("materials.colors.{name} = {value:?} is not a hex color"));
        }
    }
    for (name, value) in &config.materials.floats {
        if !value.is_finite() {
            errors.push(format!("materials.floats.{name} must be finite"));
        }
    }
}
