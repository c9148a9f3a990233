use boxes_config::{ZOOM_MAX, ZOOM_MIN};
use glam::{Mat4, Quat, Vec3};

use crate::math::{perspective, VIEW_FAR, VIEW_NEAR};

/// Zoom exponent units per distance e-fold.
const ZOOM_SCALE: f32 = 1200.0;

/// Integer zoom exponent. The camera sits at `2 * exp(zoom / 1200)` from
/// the origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Zoom(i32);

impl Zoom {
    pub fn new(exponent: i32) -> Self {
        Self(exponent.clamp(ZOOM_MIN, ZOOM_MAX))
    }

    pub fn exponent(self) -> i32 {
        self.0
    }

    /// Apply a wheel delta, clamped to the zoom range.
    pub fn by(self, delta: i32) -> Self {
        Self::new(self.0.saturating_add(delta))
    }

    pub fn distance(self) -> f32 {
        2.0 * (self.0 as f32 / ZOOM_SCALE).exp()
    }
}

impl Default for Zoom {
    fn default() -> Self {
        Self(600)
    }
}

/// Window camera: orbit rotation seen from `distance` along +z.
pub fn main_view(camera_rotation: Quat, zoom: Zoom) -> Mat4 {
    Mat4::from_translation(Vec3::new(0.0, 0.0, -zoom.distance())) * Mat4::from_quat(camera_rotation)
}

pub fn main_projection(field_of_view: f32, aspect: f32) -> Mat4 {
    perspective(field_of_view, aspect, VIEW_NEAR, VIEW_FAR)
}
