use glam::{Vec2, Vec3};
use hero_core::*;
use std::f32::consts::FRAC_PI_2;

#[test]
fn starts_deep_and_sliding() {
    let logo = LogoMotion::new();
    assert_eq!(logo.phase(), LogoPhase::SlidingIn);
    assert_eq!(logo.z, -10.0);
}

#[test]
fn intro_finishes_after_135_frames() {
    let mut logo = LogoMotion::new();
    for _ in 0..134 {
        logo.update(Vec2::ZERO);
    }
    assert_eq!(logo.phase(), LogoPhase::SlidingIn);
    logo.update(Vec2::ZERO);
    assert_eq!(logo.phase(), LogoPhase::Tracking);
    assert!(logo.z > -0.01 && logo.z < 0.0);
}

#[test]
fn depth_approaches_rest_monotonically() {
    let mut logo = LogoMotion::new();
    let mut last = logo.z;
    for _ in 0..300 {
        logo.update(Vec2::new(0.3, -0.7));
        assert!(logo.z >= last);
        assert!(logo.z <= 0.0);
        last = logo.z;
    }
}

#[test]
fn pointer_is_ignored_while_sliding_in() {
    let mut logo = LogoMotion::new();
    for _ in 0..50 {
        logo.update(Vec2::new(1.0, 1.0));
    }
    assert_eq!(logo.phase(), LogoPhase::SlidingIn);
    assert_eq!(logo.yaw, 0.0);
    assert_eq!(logo.pitch, 0.0);
}

#[test]
fn tracking_follows_the_pointer_and_never_reverts() {
    let mut logo = LogoMotion::new();
    while logo.phase() == LogoPhase::SlidingIn {
        logo.update(Vec2::ZERO);
    }
    let pointer = Vec2::new(0.8, 0.5);
    logo.update(pointer);
    assert!((logo.yaw - 0.8 * 0.05).abs() < 1e-6);
    assert!((logo.pitch + 0.5 * 0.05).abs() < 1e-6);
    for _ in 0..400 {
        logo.update(pointer);
        assert_eq!(logo.phase(), LogoPhase::Tracking);
    }
    assert!((logo.yaw - 0.8).abs() < 1e-3);
    assert!((logo.pitch + 0.5).abs() < 1e-3);
}

#[test]
fn lerp_moves_a_fraction_of_the_gap() {
    assert_eq!(lerp(0.0, 10.0, 0.05), 0.5);
    assert_eq!(lerp(-10.0, 0.0, 0.05), -9.5);
}

#[test]
fn bob_swings_two_units() {
    assert_eq!(bob_offset(0.0), 0.0);
    assert!((bob_offset(FRAC_PI_2) - 2.0).abs() < 1e-6);
    assert!((bob_offset(3.0 * FRAC_PI_2) + 2.0).abs() < 1e-5);
}

#[test]
fn outer_scale_depends_on_breakpoint() {
    assert_eq!(logo_scale(Breakpoint::Narrow), 0.075);
    assert_eq!(logo_scale(Breakpoint::Wide), 0.13);
}

#[test]
fn model_matrix_places_the_logo_on_its_group() {
    let logo = LogoMotion::new();
    let m = logo_model_matrix(&logo, Breakpoint::Wide, 0.0);
    let origin = m.transform_point3(Vec3::ZERO);
    assert!((origin - Vec3::new(0.0, 0.0, -10.0)).length() < 1e-5);
    let unit = m.transform_vector3(Vec3::X);
    assert!((unit.length() - 0.13 * 3.2).abs() < 1e-5);

    let bobbed = logo_model_matrix(&logo, Breakpoint::Wide, FRAC_PI_2).transform_point3(Vec3::ZERO);
    assert!((bobbed.y - 2.0 * 0.13).abs() < 1e-5);
}
