use glam::{Mat4, Quat, Vec3};
use tracing::trace;

use super::CubeFace;
use crate::scene::RingLayout;

/// Default number of frames a ring reflection is spread over.
pub const DEFAULT_STAGGER: u32 = 3;

/// Which object a reflection target belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Occupant {
    Ring(usize),
    Main,
}

/// One face render requested by the schedule. The scene is drawn with
/// `occupant` left out.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FacePass {
    pub occupant: Occupant,
    pub face: CubeFace,
    pub view: Mat4,
}

/// Decides which reflection targets are refreshed on a given frame.
#[derive(Debug, Clone)]
pub struct ReflectionPipeline {
    enabled: bool,
    refresh_all: bool,
    stagger: u32,
}

impl ReflectionPipeline {
    pub fn new(enabled: bool, stagger: u32) -> Self {
        Self {
            enabled,
            refresh_all: true,
            stagger: stagger.max(1),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Turning reflections on schedules every target for the next run,
    /// since their contents went stale while disabled.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
        if enabled {
            self.request_full_refresh();
        }
    }

    pub fn request_full_refresh(&mut self) {
        self.refresh_all = true;
    }

    pub fn refresh_all_pending(&self) -> bool {
        self.refresh_all
    }

    /// Frames between two refreshes of the same ring target.
    pub fn stagger_period(&self) -> u64 {
        if self.refresh_all { 1 } else { u64::from(self.stagger) }
    }

    pub fn is_due(&self, frame: u64, ring_index: usize) -> bool {
        let n = self.stagger_period();
        frame % n == ring_index as u64 % n
    }

    /// Emits the face passes for `frame`: due ring targets first, then the
    /// main target. `ring_targets[i]` tells whether ring box `i` has a
    /// target at all. Returns the number of targets regenerated.
    pub fn run(
        &mut self,
        frame: u64,
        ring_targets: &[bool],
        ring: &RingLayout,
        ring_rotation: Quat,
        mut emit: impl FnMut(FacePass),
    ) -> usize {
        let mut regenerated = 0;

        for (index, _) in ring_targets.iter().enumerate().filter(|(_, has)| **has) {
            if !self.is_due(frame, index) {
                continue;
            }
            let center = ring.center(index, ring_rotation);
            emit_faces(Occupant::Ring(index), center, &mut emit);
            regenerated += 1;
        }

        emit_faces(Occupant::Main, Vec3::ZERO, &mut emit);
        regenerated += 1;

        trace!(frame, regenerated, refresh_all = self.refresh_all, "reflection targets scheduled");
        self.refresh_all = false;
        regenerated
    }
}

impl Default for ReflectionPipeline {
    fn default() -> Self {
        Self::new(false, DEFAULT_STAGGER)
    }
}

fn emit_faces(occupant: Occupant, center: Vec3, emit: &mut impl FnMut(FacePass)) {
    for face in CubeFace::ALL {
        emit(FacePass { occupant, face, view: face.view(center) });
    }
}
