use crate::gpu::RendererError;

use super::helpers::log_first_frame;
use super::state::RenderState;

impl RenderState {
    /// Render a complete frame: reflection faces, then the window.
    pub fn render_frame(&mut self) -> Result<(), RendererError> {
        let output = match self.gpu.current_texture() {
            Ok(t) => t,
            Err(e) => {
                tracing::error!("Failed to get surface texture: {e}");
                return Err(RendererError::SurfaceError(e.to_string()));
            }
        };

        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .gpu
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("boxes frame encoder"),
            });

        self.scene
            .encode(&self.gpu.device, &self.gpu.queue, &mut encoder, &view);

        self.gpu.queue.submit(std::iter::once(encoder.finish()));
        output.present();
        self.scene.finish_frame();

        log_first_frame(self.gpu.size.width, self.gpu.size.height, self.gpu.format());

        Ok(())
    }
}
