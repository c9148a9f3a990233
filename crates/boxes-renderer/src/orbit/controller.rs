use std::time::Instant;

use boxes_common::{NudgeDirection, ViewPos};
use boxes_config::schema::OrbitAxisConfig;
use glam::{Quat, Vec3};

use super::OrbitMode;
use crate::math::axis_angle;

/// Samples closer together than this are ignored.
pub const MIN_SAMPLE_MS: u64 = 20;

/// Elapsed time assumed for a synthetic (keyboard) drag.
pub const SYNTHETIC_SAMPLE_MS: u64 = MIN_SAMPLE_MS + 1;

/// View-space distance the keyboard offset moves per key press.
pub const NUDGE_STEP: f32 = 0.001;

/// Rotation state driven by pointer drags.
#[derive(Debug, Clone)]
pub struct OrbitController {
    rotation: Quat,
    axis: Vec3,
    /// Degrees per millisecond.
    angular_velocity: f32,
    last_pos: ViewPos,
    last_time: Instant,
    pressed: bool,
    paused: bool,
    synthetic_drag: bool,
    mode: OrbitMode,
    nudge_offset: ViewPos,
}

impl OrbitController {
    /// A still controller spinning about +Y once it gets a velocity.
    pub fn new(mode: OrbitMode) -> Self {
        Self::with_motion(0.0, Vec3::Y, mode)
    }

    /// A controller that starts with an idle spin.
    pub fn with_motion(angular_velocity: f32, axis: Vec3, mode: OrbitMode) -> Self {
        Self::with_motion_at(angular_velocity, axis, mode, Instant::now())
    }

    pub fn with_motion_at(angular_velocity: f32, axis: Vec3, mode: OrbitMode, now: Instant) -> Self {
        Self {
            rotation: Quat::IDENTITY,
            axis,
            angular_velocity,
            last_pos: ViewPos::ORIGIN,
            last_time: now,
            pressed: false,
            paused: false,
            synthetic_drag: false,
            mode,
            nudge_offset: ViewPos::ORIGIN,
        }
    }

    pub fn from_config(config: &OrbitAxisConfig) -> Self {
        Self::with_motion(config.speed, Vec3::from_array(config.axis), config.mode)
    }

    // -- queries ------------------------------------------------------------

    /// Current orientation, extrapolated along the spin unless paused or held.
    pub fn rotation(&self) -> Quat {
        self.rotation_at(Instant::now())
    }

    pub fn rotation_at(&self, now: Instant) -> Quat {
        if self.paused || self.pressed {
            return self.rotation;
        }
        let angle = self.angular_velocity * elapsed_ms(self.last_time, now);
        (axis_angle(self.axis, angle) * self.rotation).normalize()
    }

    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn axis(&self) -> Vec3 {
        self.axis
    }

    /// Degrees per millisecond.
    pub fn angular_velocity(&self) -> f32 {
        self.angular_velocity
    }

    pub fn mode(&self) -> OrbitMode {
        self.mode
    }

    /// Accumulated keyboard offset.
    pub fn nudge_offset(&self) -> ViewPos {
        self.nudge_offset
    }

    // -- pointer ------------------------------------------------------------

    /// Begin a drag at `pos`: freeze the current spin and stop.
    pub fn push(&mut self, pos: ViewPos, transform: Quat) {
        self.push_at(pos, transform, Instant::now());
    }

    pub fn push_at(&mut self, pos: ViewPos, _transform: Quat, now: Instant) {
        self.rotation = self.rotation_at(now);
        self.pressed = true;
        self.last_time = now;
        self.last_pos = pos;
        self.angular_velocity = 0.0;
    }

    /// Feed a drag sample. `transform` maps view-space axes into the
    /// controller's frame.
    pub fn move_to(&mut self, pos: ViewPos, transform: Quat) {
        self.move_to_at(pos, transform, Instant::now());
    }

    pub fn move_to_at(&mut self, pos: ViewPos, transform: Quat, now: Instant) {
        if !self.pressed {
            return;
        }

        let msecs = if self.synthetic_drag {
            SYNTHETIC_SAMPLE_MS
        } else {
            now.saturating_duration_since(self.last_time).as_millis() as u64
        };
        if msecs <= MIN_SAMPLE_MS {
            return;
        }
        let msecs = msecs as f32;

        match self.mode {
            OrbitMode::Plane => {
                let delta = glam::Vec2::new(pos.x - self.last_pos.x, pos.y - self.last_pos.y);
                let length = delta.length();
                self.angular_velocity = 180.0 * length / (std::f32::consts::PI * msecs);
                let axis = Vec3::new(-delta.y, delta.x, 0.0).normalize_or_zero();
                self.axis = transform * axis;
                self.rotation =
                    (axis_angle(self.axis, length.to_degrees()) * self.rotation).normalize();
            }
            OrbitMode::Sphere => {
                let last = project_to_hemisphere(self.last_pos);
                let current = project_to_hemisphere(pos);
                let cross = last.cross(current);
                let angle = cross.length().min(1.0).asin().to_degrees();

                self.angular_velocity = angle / msecs;
                self.axis = transform * cross.normalize_or_zero();
                self.rotation = (axis_angle(self.axis, angle) * self.rotation).normalize();
            }
        }

        self.last_pos = pos;
        self.last_time = now;
    }

    /// End a drag: one last sample, then let go so the spin continues.
    pub fn release(&mut self, pos: ViewPos, transform: Quat) {
        self.release_at(pos, transform, Instant::now());
    }

    pub fn release_at(&mut self, pos: ViewPos, transform: Quat, now: Instant) {
        self.move_to_at(pos, transform, now);
        self.pressed = false;
    }

    // -- animation ----------------------------------------------------------

    /// Resume extrapolation from now.
    pub fn start(&mut self) {
        self.start_at(Instant::now());
    }

    pub fn start_at(&mut self, now: Instant) {
        self.last_time = now;
        self.paused = false;
    }

    /// Freeze at the current orientation.
    pub fn stop(&mut self) {
        self.stop_at(Instant::now());
    }

    pub fn stop_at(&mut self, now: Instant) {
        self.rotation = self.rotation_at(now);
        self.paused = true;
    }

    // -- keyboard -----------------------------------------------------------

    /// Keyboard spin: a synthetic drag from the origin to the accumulated
    /// offset, which grows by [`NUDGE_STEP`] per press.
    pub fn nudge(&mut self, direction: NudgeDirection, transform: Quat) {
        self.nudge_at(direction, transform, Instant::now());
    }

    pub fn nudge_at(&mut self, direction: NudgeDirection, transform: Quat, now: Instant) {
        self.push_at(ViewPos::ORIGIN, transform, now);
        self.synthetic_drag = true;

        let (dx, dy) = direction.unit();
        self.nudge_offset.x += dx * NUDGE_STEP;
        self.nudge_offset.y += dy * NUDGE_STEP;

        self.release_at(self.nudge_offset, transform, now);
        self.synthetic_drag = false;
    }
}

/// Lift a view-space point onto the unit hemisphere facing the viewer.
/// Points outside the unit circle are pulled onto its rim.
pub(crate) fn project_to_hemisphere(p: ViewPos) -> Vec3 {
    let v = Vec3::new(p.x, p.y, 0.0);
    let sqr_z = 1.0 - v.dot(v);
    if sqr_z > 0.0 {
        Vec3::new(v.x, v.y, sqr_z.sqrt())
    } else {
        v.normalize_or_zero()
    }
}

fn elapsed_ms(since: Instant, now: Instant) -> f32 {
    now.saturating_duration_since(since).as_secs_f32() * 1000.0
}
