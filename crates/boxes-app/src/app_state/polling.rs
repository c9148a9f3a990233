//! Tick scheduling and action dispatch.

use std::time::Instant;

use winit::event_loop::{ActiveEventLoop, ControlFlow};

use super::core::{BoxesApp, TICK};

impl BoxesApp {
    /// Drain queued actions and schedule the next tick.
    pub(super) fn poll_and_schedule(&mut self, event_loop: &ActiveEventLoop) {
        self.dispatch_actions();

        let now = Instant::now();
        if now.duration_since(self.last_tick) >= TICK {
            self.last_tick = now;
            self.request_redraw();
        }

        event_loop.set_control_flow(ControlFlow::WaitUntil(self.last_tick + TICK));
    }

    /// Hand every pending action to the renderer. Actions stay queued
    /// until a renderer exists.
    pub(super) fn dispatch_actions(&mut self) {
        let Some(ref mut rs) = self.render_state else {
            return;
        };
        for action in self.actions.drain() {
            if !rs.scene.apply(&action) {
                tracing::debug!("{} ignored: {action:?}", action.label());
            }
        }
    }
}
