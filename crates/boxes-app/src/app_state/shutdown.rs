//! Graceful shutdown: release the renderer before the window.

use super::core::BoxesApp;

impl BoxesApp {
    /// Release GPU resources in dependency order. Safe to call twice.
    pub(super) fn shutdown(&mut self) {
        tracing::info!("Initiating graceful shutdown");

        if let Some(rs) = self.render_state.take() {
            rs.destroy();
        }
        self.window = None;
        self.should_exit = true;

        tracing::info!("Graceful shutdown complete");
    }
}

#[cfg(test)]
mod tests {
    use boxes_config::BoxesConfig;
    use boxes_platform::AssetPaths;

    use crate::app_state::core::BoxesApp;

    fn app() -> BoxesApp {
        BoxesApp::new(BoxesConfig::default(), AssetPaths::new("/tmp/boxes-assets"))
    }

    #[test]
    fn shutdown_on_fresh_app_does_not_panic() {
        let mut app = app();
        app.shutdown();

        assert!(app.render_state.is_none());
        assert!(app.window.is_none());
        assert!(app.should_exit);
    }

    #[test]
    fn shutdown_is_idempotent() {
        let mut app = app();
        app.shutdown();
        app.shutdown();
        assert!(app.render_state.is_none());
    }

    #[test]
    fn actions_wait_for_a_renderer() {
        let mut app = app();
        let queued = app.actions.len();
        app.dispatch_actions();
        assert_eq!(app.actions.len(), queued);
    }
}
