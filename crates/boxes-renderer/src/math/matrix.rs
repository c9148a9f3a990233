use glam::{Mat4, Quat, Vec3};

/// Near and far planes of the window camera.
pub const VIEW_NEAR: f32 = 0.01;
pub const VIEW_FAR: f32 = 15.0;

/// Near and far planes of a cube-face camera.
pub const CUBE_NEAR: f32 = 0.1;
pub const CUBE_FAR: f32 = 100.0;

/// Perspective projection with a vertical field of view in degrees.
pub fn perspective(fov_y_degrees: f32, aspect: f32, near: f32, far: f32) -> Mat4 {
    let aspect = if aspect.is_finite() && aspect > 0.0 {
        aspect
    } else {
        1.0
    };
    Mat4::perspective_rh(fov_y_degrees.to_radians(), aspect, near, far)
}

/// Projection for rendering one cube face.
///
/// 90 degrees, square, with y flipped so face images land with row 0 at
/// the top as cube sampling expects. The flip mirrors winding, so cube
/// pipelines treat clockwise triangles as front facing.
pub fn cube_projection() -> Mat4 {
    Mat4::from_scale(Vec3::new(1.0, -1.0, 1.0)) * perspective(90.0, 1.0, CUBE_NEAR, CUBE_FAR)
}

/// Drop the translation of a view matrix, keeping its rotation.
pub fn rotation_only(view: Mat4) -> Mat4 {
    let mut m = view;
    m.w_axis = glam::Vec4::W;
    m
}

/// Rotation of `degrees` about `axis`.
///
/// A zero-length or non-finite axis gives the identity instead of NaN.
pub fn axis_angle(axis: Vec3, degrees: f32) -> Quat {
    let length = axis.length();
    if !length.is_finite() || length < 1e-12 || !degrees.is_finite() {
        return Quat::IDENTITY;
    }
    Quat::from_axis_angle(axis / length, degrees.to_radians())
}

// =============================================================================
// Tests
// =============================================================================
