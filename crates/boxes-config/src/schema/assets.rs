//! Asset locations and sizes.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetConfig {
    /// Root directory holding `shaders/`, `textures/` and the cubemap faces.
    /// Relative paths resolve against the executable, then the working directory.
    pub directory: String,
    /// Edge length that 2D textures are resized to.
    pub texture_size: u32,
    /// Edge length that cubemap faces are resized to.
    pub environment_size: u32,
    /// File name of the shared vertex stage inside `shaders/`.
    pub base_shader: String,
    /// Name of the cube sampler that marks a program as reflective.
    pub reflection_uniform: String,
    /// Seed for the 3D noise volume.
    pub noise_seed: u64,
}

impl Default for AssetConfig {
    fn default() -> Self {
        Self {
            directory: "assets".into(),
            texture_size: 256,
            environment_size: 1024,
            base_shader: "basic.wgsl".into(),
            reflection_uniform: "env".into(),
            noise_seed: 0,
        }
    }
}
