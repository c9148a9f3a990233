//! Everything the input side mutates and the draw side reads: the three
//! orbit controllers, zoom, selection and the reflection schedule.

use std::time::Instant;

use boxes_common::{Action, NudgeDirection, PointerButtons, ViewPos};
use boxes_config::BoxesConfig;
use glam::{Quat, Vec3};
use tracing::debug;

use super::camera::Zoom;
use super::layout::RingLayout;
use crate::orbit::OrbitController;
use crate::reflection::ReflectionPipeline;

#[derive(Debug, Clone)]
pub struct SceneState {
    pub central: OrbitController,
    pub ring: OrbitController,
    pub camera: OrbitController,
    pub reflections: ReflectionPipeline,
    zoom: Zoom,
    current_shader: usize,
    current_texture: usize,
    shader_count: usize,
    texture_count: usize,
    ring_radius: f32,
    box_scale: Vec3,
    background_scale: f32,
    field_of_view: f32,
    frame: u64,
}

impl SceneState {
    /// Scene state for `shader_count` programs and `texture_count`
    /// textures. Both counts are at least one once assets are loaded.
    pub fn new(config: &BoxesConfig, shader_count: usize, texture_count: usize) -> Self {
        Self {
            central: OrbitController::from_config(&config.orbit.central),
            ring: OrbitController::from_config(&config.orbit.ring),
            camera: OrbitController::from_config(&config.orbit.camera),
            reflections: ReflectionPipeline::new(config.reflections.enabled, config.reflections.stagger),
            zoom: Zoom::new(config.scene.initial_zoom),
            current_shader: 0,
            current_texture: 0,
            shader_count,
            texture_count,
            ring_radius: config.scene.ring_radius,
            box_scale: Vec3::from_array(config.scene.box_scale),
            background_scale: config.scene.background_scale,
            field_of_view: config.scene.field_of_view,
            frame: 0,
        }
    }

    // -- selection ----------------------------------------------------------

    /// Select the program drawn on the main box. Rejects out-of-range
    /// indices without changing anything.
    pub fn set_shader(&mut self, index: i32) -> bool {
        match checked_index(index, self.shader_count) {
            Some(i) => {
                self.current_shader = i;
                true
            }
            None => {
                debug!(index, count = self.shader_count, "shader index rejected");
                false
            }
        }
    }

    pub fn set_texture(&mut self, index: i32) -> bool {
        match checked_index(index, self.texture_count) {
            Some(i) => {
                self.current_texture = i;
                true
            }
            None => {
                debug!(index, count = self.texture_count, "texture index rejected");
                false
            }
        }
    }

    pub fn cycle_shader(&mut self) {
        if self.shader_count > 0 {
            self.current_shader = (self.current_shader + 1) % self.shader_count;
        }
    }

    pub fn cycle_texture(&mut self) {
        if self.texture_count > 0 {
            self.current_texture = (self.current_texture + 1) % self.texture_count;
        }
    }

    pub fn current_shader(&self) -> usize {
        self.current_shader
    }

    pub fn current_texture(&self) -> usize {
        self.current_texture
    }

    pub fn toggle_reflections(&mut self, on: bool) {
        self.reflections.set_enabled(on);
    }

    pub fn reflections_enabled(&self) -> bool {
        self.reflections.is_enabled()
    }

    /// Route a selection or reflection notification. Parameter writes
    /// belong to the program set and are not handled here.
    pub fn apply(&mut self, action: &Action) -> bool {
        match action {
            Action::SetShader(i) => self.set_shader(*i),
            Action::SetTexture(i) => self.set_texture(*i),
            Action::CycleShader => {
                self.cycle_shader();
                true
            }
            Action::CycleTexture => {
                self.cycle_texture();
                true
            }
            Action::ToggleReflections(on) => {
                self.toggle_reflections(*on);
                true
            }
            Action::SetColorParameter { .. } | Action::SetFloatParameter { .. } => false,
        }
    }

    // -- pointer ------------------------------------------------------------

    pub fn pointer_press(&mut self, pos: ViewPos, buttons: PointerButtons) {
        self.pointer_press_at(pos, buttons, Instant::now());
    }

    pub fn pointer_press_at(&mut self, pos: ViewPos, buttons: PointerButtons, now: Instant) {
        let object_frame = self.object_frame(now);
        if buttons.left {
            self.central.push_at(pos, object_frame, now);
        }
        if buttons.right {
            self.ring.push_at(pos, object_frame, now);
        }
        if buttons.middle {
            self.camera.push_at(pos, Quat::IDENTITY, now);
        }
    }

    /// Held buttons drag their controller; the rest are let go.
    pub fn pointer_move(&mut self, pos: ViewPos, buttons: PointerButtons) {
        self.pointer_move_at(pos, buttons, Instant::now());
    }

    pub fn pointer_move_at(&mut self, pos: ViewPos, buttons: PointerButtons, now: Instant) {
        let object_frame = self.object_frame(now);
        drag_or_release(&mut self.central, buttons.left, pos, object_frame, now);
        drag_or_release(&mut self.ring, buttons.right, pos, object_frame, now);
        drag_or_release(&mut self.camera, buttons.middle, pos, Quat::IDENTITY, now);
    }

    /// `released` names the buttons that went up.
    pub fn pointer_release(&mut self, pos: ViewPos, released: PointerButtons) {
        self.pointer_release_at(pos, released, Instant::now());
    }

    pub fn pointer_release_at(&mut self, pos: ViewPos, released: PointerButtons, now: Instant) {
        let object_frame = self.object_frame(now);
        if released.left {
            self.central.release_at(pos, object_frame, now);
        }
        if released.right {
            self.ring.release_at(pos, object_frame, now);
        }
        if released.middle {
            self.camera.release_at(pos, Quat::IDENTITY, now);
        }
    }

    /// Arrow keys spin the central box.
    pub fn nudge(&mut self, direction: NudgeDirection) {
        self.nudge_at(direction, Instant::now());
    }

    pub fn nudge_at(&mut self, direction: NudgeDirection, now: Instant) {
        let object_frame = self.object_frame(now);
        self.central.nudge_at(direction, object_frame, now);
    }

    /// Object drags are expressed in the camera's frame.
    fn object_frame(&self, now: Instant) -> Quat {
        self.camera.rotation_at(now).conjugate()
    }

    // -- camera -------------------------------------------------------------

    pub fn zoom_by(&mut self, delta: i32) {
        self.zoom = self.zoom.by(delta);
    }

    pub fn zoom(&self) -> Zoom {
        self.zoom
    }

    pub fn field_of_view(&self) -> f32 {
        self.field_of_view
    }

    pub fn background_scale(&self) -> f32 {
        self.background_scale
    }

    /// Ring placement for the current program count.
    pub fn ring_layout(&self) -> RingLayout {
        RingLayout::new(self.ring_radius, self.shader_count, self.box_scale)
    }

    // -- frames -------------------------------------------------------------

    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn advance_frame(&mut self) {
        self.frame = self.frame.wrapping_add(1);
    }
}

fn checked_index(index: i32, count: usize) -> Option<usize> {
    usize::try_from(index).ok().filter(|&i| i < count)
}

fn drag_or_release(orbit: &mut OrbitController, held: bool, pos: ViewPos, frame: Quat, now: Instant) {
    if held {
        orbit.move_to_at(pos, frame, now);
    } else {
        orbit.release_at(pos, frame, now);
    }
}
