//! Scene layout and camera settings.

use serde::{Deserialize, Serialize};

/// Lowest zoom exponent (closest camera).
pub const ZOOM_MIN: i32 = -960;
/// Highest zoom exponent (farthest camera).
pub const ZOOM_MAX: i32 = 1200;

/// Placement of the ring and main camera parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    /// Distance of each ring box from the ring axis.
    pub ring_radius: f32,
    /// Non-uniform scale applied to every ring box.
    pub box_scale: [f32; 3],
    /// Uniform scale of the environment box drawn behind everything.
    pub background_scale: f32,
    /// Vertical field of view in degrees.
    pub field_of_view: f32,
    /// Zoom exponent; the camera sits at `2 * exp(zoom / 1200)`.
    pub initial_zoom: i32,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            ring_radius: 2.0,
            box_scale: [0.3, 0.6, 0.6],
            background_scale: 20.0,
            field_of_view: 60.0,
            initial_zoom: 600,
        }
    }
}
