use glam::{Vec2, Vec3};
use hero_core::*;

#[test]
fn client_points_map_to_unit_square() {
    let center = normalize_client_point(150.0, 100.0, 50.0, 50.0, 200.0, 100.0);
    assert_eq!(center, Vec2::ZERO);

    let top_left = normalize_client_point(50.0, 50.0, 50.0, 50.0, 200.0, 100.0);
    assert_eq!(top_left, Vec2::new(-1.0, 1.0));

    let bottom_right = normalize_client_point(250.0, 150.0, 50.0, 50.0, 200.0, 100.0);
    assert_eq!(bottom_right, Vec2::new(1.0, -1.0));
}

#[test]
fn empty_rect_maps_to_center() {
    assert_eq!(normalize_client_point(10.0, 10.0, 0.0, 0.0, 0.0, 0.0), Vec2::ZERO);
}

#[test]
fn world_target_spans_half_the_viewport() {
    let viewport = Viewport::new(8.0, 6.0);
    assert_eq!(pointer_to_world(Vec2::ZERO, viewport), Vec3::ZERO);
    assert_eq!(
        pointer_to_world(Vec2::new(1.0, -1.0), viewport),
        Vec3::new(4.0, -3.0, 0.0)
    );
    assert_eq!(
        pointer_to_world(Vec2::new(0.5, 0.5), viewport),
        Vec3::new(2.0, 1.5, 0.0)
    );
}

#[test]
fn pointer_radius_by_breakpoint() {
    assert_eq!(pointer_radius(Breakpoint::Narrow), 1.0);
    assert_eq!(pointer_radius(Breakpoint::Wide), 2.0);
}

#[test]
fn light_sits_in_front_and_aims_at_target() {
    let mut light = PointerLight::default();
    assert_eq!(light.position, Vec3::new(0.0, 0.0, 10.0));
    assert_eq!(light.intensity, 10.0);
    assert_eq!(light.direction(), Vec3::NEG_Z);

    light.aim(Vec3::new(10.0, 0.0, 0.0));
    let d = light.direction();
    assert!((d - Vec3::new(1.0, 0.0, -1.0).normalize()).length() < 1e-6);
}

#[test]
fn breakpoint_matches_media_query() {
    assert_eq!(Breakpoint::from_css_width(500.0), Breakpoint::Narrow);
    assert_eq!(Breakpoint::from_css_width(769.0), Breakpoint::Narrow);
    assert_eq!(Breakpoint::from_css_width(770.0), Breakpoint::Wide);
    assert_eq!(Breakpoint::from_css_width(1024.0), Breakpoint::Wide);
    assert_eq!(Breakpoint::from_media_match(true), Breakpoint::Narrow);
}

#[test]
fn viewport_matches_camera_frustum() {
    let camera = Camera::hero(2.0);
    let v = camera.viewport();
    let expected_h = 2.0 * (75f32.to_radians() / 2.0).tan() * 5.0;
    assert!((v.height - expected_h).abs() < 1e-4);
    assert!((v.width - expected_h * 2.0).abs() < 1e-4);
}

#[test]
fn light_is_brand_blue() {
    let light = PointerLight::default();
    assert_eq!(light.color, hex_to_linear(0x105eff));
    assert!(light.color.z > light.color.y && light.color.y > light.color.x);
}
