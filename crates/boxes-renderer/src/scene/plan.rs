use glam::Mat4;

use super::compose::{CubeInput, DrawItem, DrawProgram, ScenePose};
use super::matrices::Matrices;
use crate::math::cube_projection;
use crate::reflection::{CubeFace, Occupant, ReflectionPipeline};

/// Where a planned pass renders to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PassTarget {
    Face(Occupant, CubeFace),
    Window,
}

/// One draw call: a uniform slot plus what to bind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlannedDraw {
    pub slot: u32,
    pub program: DrawProgram,
    pub cube: CubeInput,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlannedPass {
    pub target: PassTarget,
    pub draws: Vec<PlannedDraw>,
}

/// Lay out every pass of a frame: due cube faces first, then the window.
///
/// `slot` stores the per-draw uniforms for an item under the given
/// projection and returns the slot they landed in. `matrices` is left as
/// it was found.
pub fn plan_frame(
    pose: &ScenePose,
    reflections: &mut ReflectionPipeline,
    frame: u64,
    matrices: &mut Matrices,
    main: Matrices,
    mut slot: impl FnMut(&DrawItem, Mat4) -> u32,
) -> Vec<PlannedPass> {
    let mut passes = Vec::new();
    let mut scope = matrices.scope();

    if reflections.is_enabled() {
        let mut faces = Vec::with_capacity(6 * (pose.ring_targets.len() + 1));
        reflections.run(frame, &pose.ring_targets, &pose.ring, pose.ring_rotation, |pass| {
            faces.push(pass)
        });

        for face in faces {
            let mut face_scope = scope.scope();
            face_scope.projection = cube_projection();
            face_scope.view = face.view;
            passes.push(PlannedPass {
                target: PassTarget::Face(face.occupant, face.face),
                draws: plan_draws(pose, &face_scope, Some(face.occupant), &mut slot),
            });
        }
    }

    *scope = main;
    passes.push(PlannedPass {
        target: PassTarget::Window,
        draws: plan_draws(pose, &scope, None, &mut slot),
    });
    passes
}

fn plan_draws(
    pose: &ScenePose,
    matrices: &Matrices,
    exclude: Option<Occupant>,
    slot: &mut impl FnMut(&DrawItem, Mat4) -> u32,
) -> Vec<PlannedDraw> {
    pose.compose(matrices.view, exclude)
        .iter()
        .map(|item| PlannedDraw {
            slot: slot(item, matrices.projection),
            program: item.program,
            cube: item.cube,
        })
        .collect()
}
