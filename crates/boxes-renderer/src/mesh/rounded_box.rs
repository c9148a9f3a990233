//! Rounded box generation.
//!
//! Each face of a cube is subdivided into a grid. Every grid point is
//! clamped into the inner (un-rounded) box and pushed back out along the
//! direction it was clamped from by the corner radius, which rounds edges
//! and corners while leaving face centres flat.

use glam::{Vec2, Vec3};

use super::types::{BoxShape, BoxVertex};

/// Outward normal, then two tangents with `u × v = normal`.
const FACES: [(Vec3, Vec3, Vec3); 6] = [
    (Vec3::X, Vec3::Y, Vec3::Z),
    (Vec3::NEG_X, Vec3::Z, Vec3::Y),
    (Vec3::Y, Vec3::Z, Vec3::X),
    (Vec3::NEG_Y, Vec3::X, Vec3::Z),
    (Vec3::Z, Vec3::X, Vec3::Y),
    (Vec3::NEG_Z, Vec3::Y, Vec3::X),
];

/// Generate a rounded box centred at the origin.
///
/// Produces `6 * n * n * 6` vertices as a plain triangle list with
/// counter-clockwise front faces seen from outside.
pub fn generate_rounded_box(shape: BoxShape) -> Vec<BoxVertex> {
    let n = shape.subdivisions.max(1);
    let half = shape.size * 0.5;
    let radius = shape.corner_radius.clamp(0.0, half);
    let inner = half - radius;

    let mut vertices = Vec::with_capacity((6 * n * n * 6) as usize);

    for (normal, u, v) in FACES {
        let point = |i: u32, j: u32| -> BoxVertex {
            let s = i as f32 / n as f32;
            let t = j as f32 / n as f32;
            let on_cube = normal * half + u * ((s - 0.5) * shape.size) + v * ((t - 0.5) * shape.size);
            let core = on_cube.clamp(Vec3::splat(-inner), Vec3::splat(inner));
            let dir = (on_cube - core).try_normalize().unwrap_or(normal);
            BoxVertex {
                position: (core + dir * radius).to_array(),
                normal: dir.to_array(),
                texcoord: Vec2::new(s, 1.0 - t).to_array(),
            }
        };

        for j in 0..n {
            for i in 0..n {
                let p00 = point(i, j);
                let p10 = point(i + 1, j);
                let p01 = point(i, j + 1);
                let p11 = point(i + 1, j + 1);

                vertices.extend_from_slice(&[p00, p10, p11, p00, p11, p01]);
            }
        }
    }

    vertices
}

// =============================================================================
// Tests
// =============================================================================
