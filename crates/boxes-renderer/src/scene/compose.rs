use glam::{Mat4, Quat};

use super::layout::RingLayout;
use crate::math::rotation_only;
use crate::reflection::Occupant;

/// Which program draws an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawProgram {
    Environment,
    Variant(usize),
}

/// Which cube map an item samples.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CubeInput {
    Environment,
    Target(Occupant),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawItem {
    pub model: Mat4,
    pub view: Mat4,
    pub program: DrawProgram,
    pub cube: CubeInput,
}

/// Orientation and selection sampled once per frame, so every pass of the
/// frame draws the same scene.
#[derive(Debug, Clone)]
pub struct ScenePose {
    pub central_rotation: Quat,
    pub ring_rotation: Quat,
    pub ring: RingLayout,
    pub background_scale: f32,
    pub current_shader: usize,
    pub reflections: bool,
    /// Whether ring box `i` owns a reflection target.
    pub ring_targets: Vec<bool>,
}

impl ScenePose {
    /// Draw list seen through `view`, leaving out `exclude`.
    pub fn compose(&self, view: Mat4, exclude: Option<Occupant>) -> Vec<DrawItem> {
        let mut items = Vec::with_capacity(self.ring.count + 2);

        items.push(DrawItem {
            model: Mat4::from_scale(glam::Vec3::splat(self.background_scale)),
            view: rotation_only(view),
            program: DrawProgram::Environment,
            cube: CubeInput::Environment,
        });

        for i in 0..self.ring.count {
            if exclude == Some(Occupant::Ring(i)) {
                continue;
            }
            let has_target = self.ring_targets.get(i).copied().unwrap_or(false);
            items.push(DrawItem {
                model: self.ring.model(i, self.ring_rotation),
                view,
                program: DrawProgram::Variant(i),
                cube: self.cube_input(Occupant::Ring(i), has_target),
            });
        }

        if exclude != Some(Occupant::Main) {
            items.push(DrawItem {
                model: Mat4::from_quat(self.central_rotation),
                view,
                program: DrawProgram::Variant(self.current_shader),
                cube: self.cube_input(Occupant::Main, true),
            });
        }

        items
    }

    fn cube_input(&self, occupant: Occupant, has_target: bool) -> CubeInput {
        if self.reflections && has_target {
            CubeInput::Target(occupant)
        } else {
            CubeInput::Environment
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    fn pose(reflections: bool) -> ScenePose {
        ScenePose {
            central_rotation: Quat::from_rotation_y(0.4),
            ring_rotation: Quat::from_rotation_z(0.2),
            ring: RingLayout::new(2.0, 3, Vec3::new(0.3, 0.6, 0.6)),
            background_scale: 20.0,
            current_shader: 1,
            reflections,
            ring_targets: vec![true, false, true],
        }
    }

    fn view() -> Mat4 {
        Mat4::from_translation(Vec3::new(0.0, 0.0, -4.0)) * Mat4::from_rotation_x(0.3)
    }

    #[test]
    fn full_scene_draws_background_ring_and_main() {
        let items = pose(false).compose(view(), None);
        assert_eq!(items.len(), 5);
        assert_eq!(items[0].program, DrawProgram::Environment);
        assert_eq!(items[1].program, DrawProgram::Variant(0));
        assert_eq!(items[3].program, DrawProgram::Variant(2));
        assert_eq!(items[4].program, DrawProgram::Variant(1));
        assert!(items.iter().all(|i| i.cube == CubeInput::Environment));
    }

    #[test]
    fn background_ignores_camera_translation() {
        let items = pose(false).compose(view(), None);
        let origin = items[0].view.transform_point3(Vec3::ZERO);
        assert!(origin.abs_diff_eq(Vec3::ZERO, 1e-6));
        assert_eq!(items[0].model, Mat4::from_scale(Vec3::splat(20.0)));
    }

    #[test]
    fn reflections_pick_existing_targets() {
        let items = pose(true).compose(view(), None);
        assert_eq!(items[1].cube, CubeInput::Target(Occupant::Ring(0)));
        assert_eq!(items[2].cube, CubeInput::Environment);
        assert_eq!(items[3].cube, CubeInput::Target(Occupant::Ring(2)));
        assert_eq!(items[4].cube, CubeInput::Target(Occupant::Main));
    }

    #[test]
    fn excluded_ring_box_is_left_out() {
        let items = pose(true).compose(view(), Some(Occupant::Ring(2)));
        assert_eq!(items.len(), 4);
        assert!(!items.iter().any(|i| i.program == DrawProgram::Variant(2)));
        assert!(items.iter().all(|i| i.cube != CubeInput::Target(Occupant::Ring(2))));
    }

    #[test]
    fn main_pass_keeps_the_whole_ring() {
        let items = pose(true).compose(view(), Some(Occupant::Main));
        assert_eq!(items.len(), 4);
        assert!(items.iter().all(|i| i.cube != CubeInput::Target(Occupant::Main)));
    }

    #[test]
    fn main_box_uses_central_rotation() {
        let p = pose(false);
        let items = p.compose(view(), None);
        assert_eq!(items[4].model, Mat4::from_quat(p.central_rotation));
    }
}
