//! Configuration schema types for Boxes.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod assets;
mod logging;
mod materials;
mod orbit;
mod reflections;
mod scene;

pub use assets::*;
pub use logging::*;
pub use materials::*;
pub use orbit::*;
pub use reflections::*;
pub use scene::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration for Boxes.
///
/// Only override what you want to change.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BoxesConfig {
    pub scene: SceneConfig,
    pub orbit: OrbitConfig,
    pub reflections: ReflectionConfig,
    pub assets: AssetConfig,
    pub materials: MaterialConfig,
    pub logging: LoggingConfig,
}
