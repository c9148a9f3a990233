//! Shader programs: one shared vertex stage combined with many fragment
//! variants.
//!
//! [`ShaderProgramSet`] holds the build rules (skip broken variants, never
//! end up empty) and is generic over a [`ShaderBackend`] so those rules run
//! without a GPU. [`WgpuShaderBackend`] is the real backend: WGSL is checked
//! and reflected with `naga`, then turned into render pipelines.

mod backend;
mod builtin;
mod params;
mod program_set;
mod reflect;
mod wgpu_backend;

pub use backend::*;
pub use builtin::*;
pub use params::*;
pub use program_set::*;
pub use reflect::*;
pub use wgpu_backend::*;

/// Bind group holding [`DrawUniforms`](crate::gpu::DrawUniforms).
pub const DRAW_GROUP: u32 = 0;
/// Bind group holding a program's `Params` block.
pub const PARAMS_GROUP: u32 = 1;
/// Bind group holding `tex`, `noise` and their sampler.
pub const MATERIAL_GROUP: u32 = 2;
/// Bind group holding the cube input `env` and its sampler.
pub const CUBE_GROUP: u32 = 3;

#[cfg(test)]
mod tests;
