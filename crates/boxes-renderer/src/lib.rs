//! Rendering core of the boxes viewer: orbit controllers, the shader
//! program set, the reflection schedule and the scene renderer, on wgpu.

pub mod gpu;
pub mod math;
pub mod mesh;
pub mod orbit;
pub mod reflection;
pub mod render_state;
pub mod scene;
pub mod shader;

pub use gpu::{GpuContext, PhysicalSize, RendererError};
pub use orbit::{OrbitController, OrbitMode};
pub use reflection::{CubeFace, Occupant, ReflectionPipeline};
pub use render_state::RenderState;
pub use scene::{CubeFaces, NoiseVolume, SceneAssets, SceneRenderer, SceneState, ShaderSource, TextureData};
pub use shader::{ShaderBackend, ShaderProgramSet};
