use glam::{Mat4, Quat, Vec3};
use std::f32::consts::TAU;

/// Placement of the boxes that orbit the central one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RingLayout {
    pub radius: f32,
    pub count: usize,
    pub box_scale: Vec3,
}

impl RingLayout {
    pub fn new(radius: f32, count: usize, box_scale: Vec3) -> Self {
        Self { radius, count, box_scale }
    }

    /// Angle of slot `index` around the ring, in radians.
    pub fn angle(&self, index: usize) -> f32 {
        if self.count == 0 {
            return 0.0;
        }
        TAU * index as f32 / self.count as f32
    }

    /// World-space centre of ring box `index` under the ring spin.
    pub fn center(&self, index: usize, ring_rotation: Quat) -> Vec3 {
        let a = self.angle(index);
        ring_rotation * Vec3::new(self.radius * a.cos(), self.radius * a.sin(), 0.0)
    }

    /// Model matrix of ring box `index`.
    pub fn model(&self, index: usize, ring_rotation: Quat) -> Mat4 {
        Mat4::from_quat(ring_rotation)
            * Mat4::from_rotation_z(self.angle(index))
            * Mat4::from_translation(Vec3::new(self.radius, 0.0, 0.0))
            * Mat4::from_scale(self.box_scale)
    }
}
