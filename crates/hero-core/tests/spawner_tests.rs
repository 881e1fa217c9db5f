use hero_core::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::f32::consts::PI;

fn square_viewport() -> Viewport {
    Camera::hero(1.0).viewport()
}

#[test]
fn spawns_every_body_once_in_order() {
    let mut rng = StdRng::seed_from_u64(7);
    let bodies = spawn_bodies(&mut rng, square_viewport());
    assert_eq!(bodies.len(), 34);

    let kinds: Vec<BodyKind> = bodies.iter().map(|b| b.kind).collect();
    assert!(kinds[..15].iter().all(|k| *k == BodyKind::Sphere));
    assert!(kinds[15..25].iter().all(|k| *k == BodyKind::Box));
    assert!(kinds[25..30].iter().all(|k| *k == BodyKind::Cone));
    assert_eq!(
        &kinds[30..],
        &[
            BodyKind::Prop(PropKind::Token),
            BodyKind::Prop(PropKind::Phone),
            BodyKind::Prop(PropKind::Headphones),
            BodyKind::Prop(PropKind::Coin),
        ]
    );
    for (i, body) in bodies.iter().enumerate() {
        assert_eq!(body.id, BodyId(i as u32));
    }
}

#[test]
fn scale_and_pull_follow_the_category() {
    let mut rng = StdRng::seed_from_u64(1);
    for body in spawn_bodies(&mut rng, square_viewport()) {
        let (scale, pull) = match body.kind {
            BodyKind::Sphere => (0.25, 0.004),
            BodyKind::Box => (0.5, 0.03),
            BodyKind::Cone => (0.4, 0.03),
            BodyKind::Prop(_) => (1.0, 0.2),
        };
        assert_eq!(body.scale, scale);
        assert_eq!(body.gravity_effect, pull);
        assert!((body.collider_radius() - scale).abs() < 1e-6);
    }
}

#[test]
fn positions_stay_within_viewport_derived_bounds() {
    let viewport = square_viewport();
    let mut rng = StdRng::seed_from_u64(99);
    for body in spawn_bodies(&mut rng, viewport) {
        let p = body.position;
        let lo_x = (viewport.width * 0.5).min(14.0);
        let lo_y = (viewport.height * 0.5).min(14.0);
        for (v, lo) in [(p.x, lo_x), (p.y, lo_y), (p.z, lo_x)] {
            assert!(v.abs() >= lo - 1e-4, "{v} below {lo}");
            assert!(v.abs() <= 14.0 + 1e-4, "{v} above cap");
        }
    }
}

#[test]
fn magnitude_is_capped_for_wide_viewports() {
    let mut rng = StdRng::seed_from_u64(3);
    for _ in 0..200 {
        let v = random_signed_between(&mut rng, 20.0, 80.0);
        assert_eq!(v.abs(), 14.0);
    }
}

#[test]
fn both_signs_show_up() {
    let mut rng = StdRng::seed_from_u64(5);
    let values: Vec<f32> = (0..100)
        .map(|_| random_signed_between(&mut rng, 1.0, 2.0))
        .collect();
    assert!(values.iter().any(|v| *v > 0.0));
    assert!(values.iter().any(|v| *v < 0.0));
}

#[test]
fn rotations_cover_a_full_turn_range() {
    let mut rng = StdRng::seed_from_u64(11);
    for body in spawn_bodies(&mut rng, square_viewport()) {
        for a in body.rotation.to_array() {
            assert!((-PI..=PI).contains(&a));
        }
    }
}

#[test]
fn same_seed_same_layout() {
    let a = spawn_bodies(&mut StdRng::seed_from_u64(42), square_viewport());
    let b = spawn_bodies(&mut StdRng::seed_from_u64(42), square_viewport());
    for (x, y) in a.iter().zip(b.iter()) {
        assert_eq!(x.position, y.position);
        assert_eq!(x.rotation, y.rotation);
    }
}
