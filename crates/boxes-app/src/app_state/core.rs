//! BoxesApp struct definition and constructor.

use std::sync::Arc;
use std::time::{Duration, Instant};

use winit::window::Window;

use boxes_common::{Action, ActionQueue, Color, PointerButtons, ViewPos};
use boxes_config::BoxesConfig;
use boxes_platform::AssetPaths;
use boxes_renderer::RenderState;

/// Interval between animation ticks.
pub(super) const TICK: Duration = Duration::from_millis(20);

/// Top-level application state.
pub struct BoxesApp {
    pub(super) config: BoxesConfig,
    pub(super) asset_paths: AssetPaths,
    pub(super) actions: ActionQueue,

    // Windowing
    pub(super) window: Option<Arc<Window>>,
    pub(super) render_state: Option<RenderState>,

    // Pointer tracking (winit reports position and buttons separately)
    pub(super) cursor: ViewPos,
    pub(super) buttons: PointerButtons,

    pub(super) should_exit: bool,
    pub(super) last_tick: Instant,
}

impl BoxesApp {
    pub fn new(config: BoxesConfig, asset_paths: AssetPaths) -> Self {
        let mut actions = ActionQueue::default();
        for action in initial_material_actions(&config) {
            actions.push(action);
        }

        Self {
            config,
            asset_paths,
            actions,
            window: None,
            render_state: None,
            cursor: ViewPos::ORIGIN,
            buttons: PointerButtons::NONE,
            should_exit: false,
            last_tick: Instant::now(),
        }
    }

    pub(super) fn request_redraw(&self) {
        if let Some(ref w) = self.window {
            w.request_redraw();
        }
    }
}

/// Parameter notifications for the configured starting material.
fn initial_material_actions(config: &BoxesConfig) -> Vec<Action> {
    let mut actions = Vec::new();
    for (name, hex) in &config.materials.colors {
        match Color::from_hex(hex) {
            Some(color) => actions.push(Action::SetColorParameter {
                name: name.clone(),
                color,
            }),
            None => tracing::warn!("materials.colors.{name}: invalid color {hex:?}"),
        }
    }
    for (name, value) in &config.materials.floats {
        actions.push(Action::SetFloatParameter {
            name: name.clone(),
            value: *value,
        });
    }
    actions
}
