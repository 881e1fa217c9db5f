use glam::Vec3;
use hero_core::*;

fn sphere_at(id: u32, position: Vec3) -> BodyDescriptor {
    let kind = BodyKind::Sphere;
    BodyDescriptor {
        id: BodyId(id),
        kind,
        scale: kind.scale(),
        gravity_effect: kind.gravity_effect(),
        position,
        rotation: Vec3::ZERO,
    }
}

#[test]
fn impulse_points_back_at_the_origin() {
    let p = Vec3::new(3.0, -4.0, 12.0);
    let impulse = attraction_impulse(p, 0.2);
    assert!(impulse.dot(p) < 0.0);
    assert!((impulse.length() - p.length() * 0.2).abs() < 1e-5);
    assert_eq!(attraction_impulse(Vec3::ZERO, 0.2), Vec3::ZERO);
}

#[test]
fn pending_impulse_matches_body_position() {
    let mut world = PhysicsWorld::new(Breakpoint::Wide);
    world.spawn(&sphere_at(0, Vec3::new(6.0, 0.0, 0.0)));
    let impulse = world.pending_impulse(BodyId(0)).unwrap();
    assert!((impulse - Vec3::new(-6.0 * 0.004, 0.0, 0.0)).length() < 1e-6);
    assert!(world.pending_impulse(BodyId(9)).is_none());
}

#[test]
fn paused_world_does_not_move() {
    let mut world = PhysicsWorld::new(Breakpoint::Wide);
    world.spawn(&sphere_at(0, Vec3::new(8.0, 3.0, -2.0)));
    world.set_pointer_target(Vec3::new(1.0, 1.0, 0.0));
    let before = world.body_pose(BodyId(0)).unwrap();
    for _ in 0..120 {
        world.step(1.0 / 60.0, true);
    }
    assert_eq!(world.body_pose(BodyId(0)).unwrap(), before);
    assert_eq!(world.pointer_translation(), Vec3::ZERO);
}

#[test]
fn zero_delta_is_a_no_op() {
    let mut world = PhysicsWorld::new(Breakpoint::Wide);
    world.spawn(&sphere_at(0, Vec3::new(8.0, 0.0, 0.0)));
    let before = world.body_translation(BodyId(0)).unwrap();
    world.step(0.0, false);
    world.step(-1.0, false);
    assert_eq!(world.body_translation(BodyId(0)).unwrap(), before);
}

#[test]
fn bodies_drift_toward_the_center() {
    let mut world = PhysicsWorld::new(Breakpoint::Wide);
    world.spawn(&sphere_at(0, Vec3::new(10.0, 0.0, 0.0)));
    for _ in 0..60 {
        world.step(1.0 / 60.0, false);
    }
    let p = world.body_translation(BodyId(0)).unwrap();
    assert!(p.x < 10.0, "no drift: {p:?}");
    assert!(p.x > 0.0, "passed through the colliders: {p:?}");
}

#[test]
fn pointer_teleports_to_its_target() {
    let mut world = PhysicsWorld::new(Breakpoint::Narrow);
    world.set_pointer_target(Vec3::new(1.5, -2.0, 0.0));
    world.step(1.0 / 60.0, false);
    let p = world.pointer_translation();
    assert!((p - Vec3::new(1.5, -2.0, 0.0)).length() < 1e-5);
    assert_eq!(world.logo_translation(), Vec3::ZERO);
}

#[test]
fn collider_sizes_follow_the_breakpoint() {
    let mut world = PhysicsWorld::new(Breakpoint::Wide);
    assert_eq!(world.pointer_collider_radius(), Some(2.0));
    assert_eq!(world.logo_collider_radius(), Some(2.0));

    world.set_breakpoint(Breakpoint::Narrow);
    assert_eq!(world.breakpoint(), Breakpoint::Narrow);
    assert_eq!(world.pointer_collider_radius(), Some(1.0));
    assert_eq!(world.logo_collider_radius(), Some(1.1));
}

#[test]
fn duplicate_ids_are_ignored() {
    let mut world = PhysicsWorld::new(Breakpoint::Wide);
    world.spawn(&sphere_at(3, Vec3::new(5.0, 0.0, 0.0)));
    world.spawn(&sphere_at(3, Vec3::new(-5.0, 0.0, 0.0)));
    assert_eq!(world.body_ids(), &[BodyId(3)]);
    assert_eq!(
        world.body_translation(BodyId(3)),
        Some(Vec3::new(5.0, 0.0, 0.0))
    );
}

#[test]
fn spawn_rotation_is_applied() {
    let mut world = PhysicsWorld::new(Breakpoint::Wide);
    let mut desc = sphere_at(0, Vec3::new(5.0, 5.0, 5.0));
    desc.rotation = Vec3::new(0.0, std::f32::consts::FRAC_PI_2, 0.0);
    world.spawn(&desc);
    let (_, q) = world.body_pose(BodyId(0)).unwrap();
    let forward = q * Vec3::Z;
    assert!((forward - Vec3::X).length() < 1e-4, "{forward:?}");
}

#[test]
fn zero_delta_still_places_the_pointer() {
    let mut world = PhysicsWorld::new(Breakpoint::Wide);
    world.spawn(&sphere_at(0, Vec3::new(8.0, 0.0, 0.0)));
    let before = world.body_translation(BodyId(0)).unwrap();
    world.set_pointer_target(Vec3::new(-2.0, 0.5, 0.0));
    world.step(0.0, false);
    assert!((world.pointer_translation() - Vec3::new(-2.0, 0.5, 0.0)).length() < 1e-6);
    assert_eq!(world.body_translation(BodyId(0)).unwrap(), before);
}
