//! Window creation, asset loading and renderer initialization.

use std::sync::Arc;

use winit::event_loop::ActiveEventLoop;
use winit::window::WindowAttributes;

use boxes_renderer::RenderState;

use crate::assets::load_scene_assets;

use super::core::BoxesApp;

impl BoxesApp {
    /// Create the window and initialize the GPU renderer.
    /// Returns `false` if initialization failed and the event loop should exit.
    pub(super) fn initialize_window(&mut self, event_loop: &ActiveEventLoop) -> bool {
        let attrs = WindowAttributes::default()
            .with_title("Boxes")
            .with_inner_size(winit::dpi::LogicalSize::new(1024.0, 768.0));

        let window = match event_loop.create_window(attrs) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                tracing::error!("Failed to create window: {e}");
                return false;
            }
        };

        let assets = match load_scene_assets(&self.asset_paths, &self.config) {
            Ok(assets) => assets,
            Err(e) => {
                tracing::error!("Failed to load assets: {e}");
                return false;
            }
        };

        match pollster::block_on(RenderState::new(window.clone(), &assets, &self.config)) {
            Ok(rs) => {
                let names: Vec<&str> = rs.scene.program_names().collect();
                tracing::info!("Renderer ready with programs {names:?}");
                self.render_state = Some(rs);
            }
            Err(e) => {
                tracing::error!("Failed to initialize renderer: {e}");
                return false;
            }
        }

        self.window = Some(window);
        true
    }
}
