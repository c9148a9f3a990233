//! Frame rendering logic.

use super::core::BoxesApp;

impl BoxesApp {
    /// Render a single frame.
    pub(super) fn render_frame(&mut self) {
        if let Some(ref mut rs) = self.render_state {
            if let Err(e) = rs.render_frame() {
                tracing::error!("Render error: {e}");
            }
        }
    }
}
