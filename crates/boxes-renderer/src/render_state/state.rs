use std::sync::Arc;
use winit::window::Window;

use boxes_config::BoxesConfig;

use crate::gpu::{GpuContext, RendererError};
use crate::scene::{SceneAssets, SceneRenderer};

/// GPU context plus the scene drawn into it.
pub struct RenderState {
    pub gpu: GpuContext,
    pub scene: SceneRenderer,
}

impl RenderState {
    /// Create the device for `window` and build the scene on it.
    pub async fn new(window: Arc<Window>, assets: &SceneAssets, config: &BoxesConfig) -> Result<Self, RendererError> {
        let gpu = GpuContext::new(window).await?;
        let scene = SceneRenderer::create(&gpu, assets, config)?;
        Ok(Self { gpu, scene })
    }

    /// Handle a window resize by reconfiguring the surface and depth buffer.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.gpu.resize(width, height);
        self.scene.resize(&self.gpu.device, width, height);
    }

    /// Tear down the scene before the device goes away.
    pub fn destroy(self) {
        let Self { gpu, scene } = self;
        scene.destroy();
        drop(gpu);
    }
}
