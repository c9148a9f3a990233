//! Orbit controller configuration: one block per controller.

use serde::{Deserialize, Serialize};

/// How pointer motion maps to rotation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum OrbitMode {
    /// Virtual trackball: points are projected onto a hemisphere.
    #[default]
    Sphere,
    /// Flat drag: rotation axis is perpendicular to the drag in the view plane.
    Plane,
}

/// Initial motion for a single orbit controller.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct OrbitAxisConfig {
    pub axis: [f32; 3],
    /// Idle spin in degrees per millisecond.
    pub speed: f32,
    pub mode: OrbitMode,
}

impl Default for OrbitAxisConfig {
    fn default() -> Self {
        Self {
            axis: [0.0, 1.0, 0.0],
            speed: 0.0,
            mode: OrbitMode::Sphere,
        }
    }
}

/// The three controllers: central box, ring, camera.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OrbitConfig {
    pub central: OrbitAxisConfig,
    pub ring: OrbitAxisConfig,
    pub camera: OrbitAxisConfig,
}

impl Default for OrbitConfig {
    fn default() -> Self {
        Self {
            central: OrbitAxisConfig {
                axis: [0.0, 1.0, 0.0],
                speed: 0.05,
                mode: OrbitMode::Sphere,
            },
            ring: OrbitAxisConfig {
                axis: [0.0, 0.0, 1.0],
                speed: 0.005,
                mode: OrbitMode::Sphere,
            },
            camera: OrbitAxisConfig {
                axis: [0.0, 1.0, 0.0],
                speed: 0.0,
                mode: OrbitMode::Plane,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn orbit_mode_parses_lowercase() {
        #[derive(Deserialize)]
        struct Wrapper {
            mode: OrbitMode,
        }
        let w: Wrapper = toml::from_str("mode = \"plane\"").unwrap();
        assert_eq!(w.mode, OrbitMode::Plane);
    }

    #[test]
    fn camera_defaults_to_plane_without_spin() {
        let config = OrbitConfig::default();
        assert_eq!(config.camera.mode, OrbitMode::Plane);
        assert_eq!(config.camera.speed, 0.0);
        assert_eq!(config.ring.axis, [0.0, 0.0, 1.0]);
    }
}
