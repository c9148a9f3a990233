//! `ApplicationHandler` implementation for the winit event loop.

use winit::application::ApplicationHandler;
use winit::event::{ElementState, KeyEvent, MouseButton, MouseScrollDelta, WindowEvent};
use winit::event_loop::ActiveEventLoop;
use winit::keyboard::Key;
use winit::window::WindowId;

use boxes_common::{Action, PointerButtons};
use boxes_platform::{
    key_binding, normalize_winit_key, pixel_to_view, wheel_lines_to_delta, wheel_pixels_to_delta,
    KeyBinding,
};

use super::core::BoxesApp;

impl ApplicationHandler for BoxesApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        if !self.initialize_window(event_loop) {
            event_loop.exit();
            return;
        }

        self.dispatch_actions();
        self.request_redraw();
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                tracing::info!("Window close requested");
                self.shutdown();
                event_loop.exit();
            }

            WindowEvent::Resized(size) => {
                if size.width > 0 && size.height > 0 {
                    if let Some(ref mut rs) = self.render_state {
                        rs.resize(size.width, size.height);
                    }
                }
            }

            WindowEvent::CursorMoved { position, .. } => {
                self.handle_cursor_moved(position.x, position.y);
            }

            WindowEvent::MouseInput { state, button, .. } => {
                self.handle_mouse_input(state, button);
            }

            WindowEvent::MouseWheel { delta, .. } => {
                let delta = match delta {
                    MouseScrollDelta::LineDelta(_, y) => wheel_lines_to_delta(y),
                    MouseScrollDelta::PixelDelta(p) => wheel_pixels_to_delta(p.y),
                };
                if let Some(ref mut rs) = self.render_state {
                    rs.scene.state_mut().zoom_by(delta);
                }
            }

            WindowEvent::KeyboardInput { event, .. } => {
                self.handle_keyboard_input(event, event_loop);
            }

            WindowEvent::RedrawRequested => {
                if self.should_exit {
                    event_loop.exit();
                    return;
                }
                self.render_frame();
            }

            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.should_exit {
            event_loop.exit();
            return;
        }
        self.poll_and_schedule(event_loop);
    }
}

/// Mask holding only `button`, or `None` for buttons the viewer ignores.
fn button_mask(button: MouseButton) -> Option<PointerButtons> {
    match button {
        MouseButton::Left => Some(PointerButtons::LEFT),
        MouseButton::Right => Some(PointerButtons::RIGHT),
        MouseButton::Middle => Some(PointerButtons::MIDDLE),
        _ => None,
    }
}

/// `held` without the buttons in `released`.
fn without(held: PointerButtons, released: PointerButtons) -> PointerButtons {
    PointerButtons {
        left: held.left && !released.left,
        right: held.right && !released.right,
        middle: held.middle && !released.middle,
    }
}

impl BoxesApp {
    fn handle_cursor_moved(&mut self, x: f64, y: f64) {
        let Some(ref window) = self.window else {
            return;
        };
        let size = window.inner_size();
        self.cursor = pixel_to_view(x, y, size.width, size.height);

        if let Some(ref mut rs) = self.render_state {
            rs.scene.state_mut().pointer_move(self.cursor, self.buttons);
        }
    }

    fn handle_mouse_input(&mut self, state: ElementState, button: MouseButton) {
        let Some(mask) = button_mask(button) else {
            return;
        };

        match state {
            ElementState::Pressed => {
                self.buttons = self.buttons.union(mask);
                if let Some(ref mut rs) = self.render_state {
                    rs.scene.state_mut().pointer_press(self.cursor, self.buttons);
                }
            }
            ElementState::Released => {
                self.buttons = without(self.buttons, mask);
                if let Some(ref mut rs) = self.render_state {
                    rs.scene.state_mut().pointer_release(self.cursor, mask);
                }
            }
        }
    }

    fn handle_keyboard_input(&mut self, event: KeyEvent, event_loop: &ActiveEventLoop) {
        let KeyEvent {
            logical_key, state, ..
        } = event;
        if state != ElementState::Pressed {
            return;
        }

        let key_name = match &logical_key {
            Key::Named(named) => format!("{named:?}"),
            Key::Character(c) => c.to_string(),
            _ => return,
        };
        let normalized = normalize_winit_key(&key_name);

        match key_binding(&normalized) {
            Some(KeyBinding::Nudge(direction)) => {
                if let Some(ref mut rs) = self.render_state {
                    rs.scene.state_mut().nudge(direction);
                }
            }
            Some(KeyBinding::Action(action)) => self.actions.push(action),
            Some(KeyBinding::ToggleReflections) => {
                let enabled = self
                    .render_state
                    .as_ref()
                    .is_some_and(|rs| rs.scene.state().reflections_enabled());
                self.actions.push(Action::ToggleReflections(!enabled));
            }
            Some(KeyBinding::Quit) => {
                self.shutdown();
                event_loop.exit();
            }
            None => tracing::trace!("unbound key {normalized}"),
        }
    }
}
