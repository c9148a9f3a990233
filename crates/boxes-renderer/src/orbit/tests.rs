use std::time::{Duration, Instant};

use boxes_common::{NudgeDirection, ViewPos};
use glam::{Quat, Vec3};

use super::*;
use crate::math::axis_angle;

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

fn assert_unit(q: Quat) {
    assert!((q.length() - 1.0).abs() < 1e-4, "not unit: {q:?} (|q| = {})", q.length());
}

#[test]
fn idle_spin_extrapolates_from_velocity() {
    let t0 = Instant::now();
    let orbit = OrbitController::with_motion_at(0.05, Vec3::Y, OrbitMode::Sphere, t0);
    let q = orbit.rotation_at(t0 + ms(1000));
    let expected = axis_angle(Vec3::Y, 50.0);
    assert!(q.abs_diff_eq(expected, 1e-4));
}

#[test]
fn extrapolation_composes_over_time() {
    let t0 = Instant::now();
    let orbit = OrbitController::with_motion_at(0.02, Vec3::Z, OrbitMode::Sphere, t0);
    let t1 = t0 + ms(300);
    let t2 = t0 + ms(750);
    let step = axis_angle(orbit.axis(), orbit.angular_velocity() * 450.0);
    let expected = step * orbit.rotation_at(t1);
    assert!(orbit.rotation_at(t2).abs_diff_eq(expected, 1e-4));
}

#[test]
fn pressed_rotation_does_not_drift() {
    let t0 = Instant::now();
    let mut orbit = OrbitController::with_motion_at(0.05, Vec3::Y, OrbitMode::Sphere, t0);
    orbit.push_at(ViewPos::new(0.1, 0.1), Quat::IDENTITY, t0 + ms(100));
    let a = orbit.rotation_at(t0 + ms(200));
    let b = orbit.rotation_at(t0 + ms(5000));
    assert_eq!(a, b);
    assert_eq!(orbit.angular_velocity(), 0.0);
}

#[test]
fn paused_rotation_does_not_drift() {
    let t0 = Instant::now();
    let mut orbit = OrbitController::with_motion_at(0.05, Vec3::Y, OrbitMode::Sphere, t0);
    orbit.stop_at(t0 + ms(100));
    assert!(orbit.is_paused());
    let a = orbit.rotation_at(t0 + ms(200));
    let b = orbit.rotation_at(t0 + ms(10_000));
    assert_eq!(a, b);
}

#[test]
fn start_resumes_from_frozen_orientation() {
    let t0 = Instant::now();
    let mut orbit = OrbitController::with_motion_at(0.05, Vec3::Y, OrbitMode::Sphere, t0);
    orbit.stop_at(t0 + ms(100));
    let frozen = orbit.rotation_at(t0 + ms(100));
    orbit.start_at(t0 + ms(5000));
    assert!(orbit.rotation_at(t0 + ms(5000)).abs_diff_eq(frozen, 1e-5));
}

#[test]
fn fast_move_is_ignored() {
    let t0 = Instant::now();
    let mut orbit = OrbitController::new(OrbitMode::Sphere);
    orbit.push_at(ViewPos::new(0.0, 0.0), Quat::IDENTITY, t0);
    let axis = orbit.axis();
    let rotation = orbit.rotation_at(t0);

    orbit.move_to_at(ViewPos::new(0.3, 0.0), Quat::IDENTITY, t0 + ms(20));
    assert_eq!(orbit.axis(), axis);
    assert_eq!(orbit.angular_velocity(), 0.0);
    assert_eq!(orbit.rotation_at(t0 + ms(20)), rotation);

    // The sample clock did not advance: 15 ms later is 35 ms after the push.
    orbit.move_to_at(ViewPos::new(0.3, 0.0), Quat::IDENTITY, t0 + ms(35));
    assert!(orbit.angular_velocity() > 0.0);
}

#[test]
fn move_without_press_is_noop() {
    let t0 = Instant::now();
    let mut orbit = OrbitController::new(OrbitMode::Plane);
    orbit.move_to_at(ViewPos::new(0.5, 0.5), Quat::IDENTITY, t0 + ms(100));
    assert_eq!(orbit.angular_velocity(), 0.0);
    assert_eq!(orbit.rotation_at(t0 + ms(100)), Quat::IDENTITY);
}

#[test]
fn sphere_drag_right_spins_about_y() {
    let t0 = Instant::now();
    let mut orbit = OrbitController::new(OrbitMode::Sphere);
    orbit.push_at(ViewPos::new(0.0, 0.0), Quat::IDENTITY, t0);
    orbit.release_at(ViewPos::new(0.5, 0.0), Quat::IDENTITY, t0 + ms(50));

    assert!(!orbit.is_pressed());
    assert!(orbit.axis().abs_diff_eq(Vec3::Y, 1e-5));
    // asin(0.5) = 30 degrees over 50 ms
    assert!((orbit.angular_velocity() - 30.0 / 50.0).abs() < 1e-4);
    let expected = axis_angle(Vec3::Y, 30.0);
    assert!(orbit.rotation_at(t0 + ms(50)).abs_diff_eq(expected, 1e-4));
}

#[test]
fn sphere_points_outside_unit_circle_stay_finite() {
    let t0 = Instant::now();
    let mut orbit = OrbitController::new(OrbitMode::Sphere);
    orbit.push_at(ViewPos::new(-3.0, 2.0), Quat::IDENTITY, t0);
    orbit.move_to_at(ViewPos::new(4.0, -1.0), Quat::IDENTITY, t0 + ms(40));
    let q = orbit.rotation_at(t0 + ms(40));
    assert!(q.is_finite());
    assert_unit(q);
}

#[test]
fn plane_drag_uses_perpendicular_axis() {
    let t0 = Instant::now();
    let mut orbit = OrbitController::new(OrbitMode::Plane);
    orbit.push_at(ViewPos::new(0.0, 0.0), Quat::IDENTITY, t0);
    orbit.move_to_at(ViewPos::new(0.0, 0.2), Quat::IDENTITY, t0 + ms(40));

    assert!(orbit.axis().abs_diff_eq(Vec3::new(-1.0, 0.0, 0.0), 1e-5));
    let expected_velocity = 180.0 * 0.2 / (std::f32::consts::PI * 40.0);
    assert!((orbit.angular_velocity() - expected_velocity).abs() < 1e-5);
}

#[test]
fn transform_rotates_the_axis() {
    let t0 = Instant::now();
    let transform = Quat::from_rotation_z(std::f32::consts::FRAC_PI_2);
    let mut orbit = OrbitController::new(OrbitMode::Sphere);
    orbit.push_at(ViewPos::new(0.0, 0.0), transform, t0);
    orbit.move_to_at(ViewPos::new(0.5, 0.0), transform, t0 + ms(40));
    // +Y rotated 90 degrees about Z
    assert!(orbit.axis().abs_diff_eq(Vec3::new(-1.0, 0.0, 0.0), 1e-5));
}

#[test]
fn zero_motion_sample_keeps_rotation() {
    let t0 = Instant::now();
    let mut orbit = OrbitController::new(OrbitMode::Plane);
    orbit.push_at(ViewPos::new(0.2, 0.2), Quat::IDENTITY, t0);
    orbit.move_to_at(ViewPos::new(0.2, 0.2), Quat::IDENTITY, t0 + ms(40));
    let q = orbit.rotation_at(t0 + ms(40));
    assert!(q.is_finite());
    assert!(q.abs_diff_eq(Quat::IDENTITY, 1e-6));
    assert_eq!(orbit.angular_velocity(), 0.0);
}

#[test]
fn rotation_stays_unit_over_random_drags() {
    let t0 = Instant::now();
    let mut orbit = OrbitController::with_motion_at(0.05, Vec3::Y, OrbitMode::Sphere, t0);
    let mut t = t0;
    let mut seed = 17u32;
    let mut next = || {
        seed = seed.wrapping_mul(1_103_515_245).wrapping_add(12_345);
        (seed >> 8) as f32 / (1u32 << 24) as f32 * 2.4 - 1.2
    };

    for drag in 0..20 {
        t += ms(7 + drag);
        orbit.push_at(ViewPos::new(next(), next()), Quat::IDENTITY, t);
        assert_unit(orbit.rotation_at(t));
        for _ in 0..10 {
            t += ms(13 + drag % 17);
            orbit.move_to_at(ViewPos::new(next(), next()), Quat::IDENTITY, t);
            assert_unit(orbit.rotation_at(t));
        }
        t += ms(25);
        orbit.release_at(ViewPos::new(next(), next()), Quat::IDENTITY, t);
        assert_unit(orbit.rotation_at(t + ms(333)));
    }
}

#[test]
fn nudge_produces_a_sample_immediately() {
    let t0 = Instant::now();
    let mut orbit = OrbitController::new(OrbitMode::Sphere);
    orbit.nudge_at(NudgeDirection::Right, Quat::IDENTITY, t0);

    assert!(!orbit.is_pressed());
    assert!(orbit.angular_velocity() > 0.0);
    assert!(orbit.axis().abs_diff_eq(Vec3::Y, 1e-4));
    assert_eq!(orbit.nudge_offset(), ViewPos::new(NUDGE_STEP, 0.0));
}

#[test]
fn nudge_offset_accumulates() {
    let t0 = Instant::now();
    let mut orbit = OrbitController::new(OrbitMode::Sphere);
    orbit.nudge_at(NudgeDirection::Up, Quat::IDENTITY, t0);
    let first = orbit.angular_velocity();
    orbit.nudge_at(NudgeDirection::Up, Quat::IDENTITY, t0);
    orbit.nudge_at(NudgeDirection::Left, Quat::IDENTITY, t0);

    let offset = orbit.nudge_offset();
    assert!((offset.x + NUDGE_STEP).abs() < 1e-7);
    assert!((offset.y - 2.0 * NUDGE_STEP).abs() < 1e-7);
    assert!(orbit.angular_velocity() > first);
}

#[test]
fn from_config_uses_speed_and_axis() {
    let config = boxes_config::schema::OrbitAxisConfig {
        axis: [0.0, 0.0, 1.0],
        speed: 0.005,
        mode: OrbitMode::Sphere,
    };
    let orbit = OrbitController::from_config(&config);
    assert_eq!(orbit.axis(), Vec3::Z);
    assert_eq!(orbit.angular_velocity(), 0.005);
    assert_eq!(orbit.mode(), OrbitMode::Sphere);
}

#[test]
fn hemisphere_projection() {
    let centre = project_to_hemisphere(ViewPos::ORIGIN);
    assert!(centre.abs_diff_eq(Vec3::Z, 1e-6));
    let rim = project_to_hemisphere(ViewPos::new(2.0, 0.0));
    assert!(rim.abs_diff_eq(Vec3::X, 1e-6));
}
