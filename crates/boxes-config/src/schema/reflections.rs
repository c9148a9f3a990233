//! Dynamic cube-map reflection settings.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReflectionConfig {
    /// Start with live reflections on.
    pub enabled: bool,
    /// Face size of the main box's cube target.
    pub main_resolution: u32,
    /// Face size of each ring box's cube target.
    pub ring_resolution: u32,
    /// Ring targets are spread over this many frames.
    pub stagger: u32,
}

impl Default for ReflectionConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            main_resolution: 512,
            ring_resolution: 256,
            stagger: 3,
        }
    }
}
