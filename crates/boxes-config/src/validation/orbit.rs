//! Validation for the three `[orbit.*]` blocks.

use crate::schema::{BoxesConfig, OrbitAxisConfig};

use super::helpers::validate_range_f32;

pub(crate) fn validate_orbits(errors: &mut Vec<String>, config: &BoxesConfig) {
    validate_orbit(errors, "orbit.central", &config.orbit.central);
    validate_orbit(errors, "orbit.ring", &config.orbit.ring);
    validate_orbit(errors, "orbit.camera", &config.orbit.camera);
}

fn validate_orbit(errors: &mut Vec<String>, prefix: &str, orbit: &OrbitAxisConfig) {
    validate_range_f32(errors, &format!("{prefix}.speed"), orbit.speed, -1.0, 1.0);

    let [x, y, z] = orbit.axis;
    let length = (x * x + y * y + z * z).sqrt();
    if !length.is_finite() || (orbit.speed != 0.0 && length < 1e-6) {
        errors.push(format!("{prefix}.axis must be a non-zero vector when speed is set"));
    }
}
