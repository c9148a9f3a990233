//! Projection and rotation helpers on top of `glam`.
//!
//! Column-major, right-handed, depth in [0, 1] as wgpu expects.

mod matrix;

pub use matrix::*;
