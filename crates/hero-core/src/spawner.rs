//! One-time generation of the decorative bodies.
//!
//! The spawner runs once at mount and returns an immutable list of
//! descriptors. Ids are assigned in spawn order and stay stable for the life
//! of the scene; the physics world and the renderer look bodies up by id.

use crate::camera::Viewport;
use crate::constants::*;
use glam::Vec3;
use rand::Rng;
use std::f32::consts::PI;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BodyId(pub u32);

/// Externally modeled props, one instance each.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PropKind {
    Token,
    Phone,
    Headphones,
    Coin,
}

impl PropKind {
    pub const ALL: [PropKind; 4] = [
        PropKind::Token,
        PropKind::Phone,
        PropKind::Headphones,
        PropKind::Coin,
    ];
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BodyKind {
    Sphere,
    Box,
    Cone,
    Prop(PropKind),
}

impl BodyKind {
    pub fn scale(self) -> f32 {
        match self {
            BodyKind::Sphere => SPHERE_SCALE,
            BodyKind::Box => BOX_SCALE,
            BodyKind::Cone => CONE_SCALE,
            BodyKind::Prop(_) => PROP_SCALE,
        }
    }

    /// Strength of the pull toward the origin. Tuned per category, not
    /// derived from mass.
    pub fn gravity_effect(self) -> f32 {
        match self {
            BodyKind::Sphere => SPHERE_GRAVITY_EFFECT,
            BodyKind::Box => BOX_GRAVITY_EFFECT,
            BodyKind::Cone => CONE_GRAVITY_EFFECT,
            BodyKind::Prop(_) => PROP_GRAVITY_EFFECT,
        }
    }
}

#[derive(Clone, Debug)]
pub struct BodyDescriptor {
    pub id: BodyId,
    pub kind: BodyKind,
    pub scale: f32,
    pub gravity_effect: f32,
    pub position: Vec3,
    /// XYZ Euler angles in radians.
    pub rotation: Vec3,
}

impl BodyDescriptor {
    #[inline]
    pub fn collider_radius(&self) -> f32 {
        BODY_COLLIDER_RADIUS * self.scale
    }
}

/// Random magnitude in `[min, max)` capped at the spawn limit, with a random sign.
pub fn random_signed_between<R: Rng + ?Sized>(rng: &mut R, min: f32, max: f32) -> f32 {
    let sign = if rng.gen::<f32>() > 0.5 { 1.0 } else { -1.0 };
    let magnitude = (rng.gen::<f32>() * (max - min) + min).min(SPAWN_MAX_MAGNITUDE);
    sign * magnitude
}

pub fn spawn_position<R: Rng + ?Sized>(rng: &mut R, viewport: Viewport) -> Vec3 {
    let w = viewport.width;
    let h = viewport.height;
    Vec3::new(
        random_signed_between(rng, w * SPAWN_MIN_EXTENT, w * SPAWN_MAX_EXTENT),
        random_signed_between(rng, h * SPAWN_MIN_EXTENT, h * SPAWN_MAX_EXTENT),
        random_signed_between(rng, w * SPAWN_MIN_EXTENT, w * SPAWN_MAX_EXTENT),
    )
}

pub fn spawn_rotation<R: Rng + ?Sized>(rng: &mut R) -> Vec3 {
    Vec3::new(
        rng.gen_range(-PI..=PI),
        rng.gen_range(-PI..=PI),
        rng.gen_range(-PI..=PI),
    )
}

/// Spawn order: spheres, boxes, cones, then one of each prop.
pub fn spawn_order() -> Vec<BodyKind> {
    let mut kinds = Vec::with_capacity(SPHERE_COUNT + BOX_COUNT + CONE_COUNT + PropKind::ALL.len());
    kinds.extend(std::iter::repeat(BodyKind::Sphere).take(SPHERE_COUNT));
    kinds.extend(std::iter::repeat(BodyKind::Box).take(BOX_COUNT));
    kinds.extend(std::iter::repeat(BodyKind::Cone).take(CONE_COUNT));
    kinds.extend(PropKind::ALL.iter().map(|p| BodyKind::Prop(*p)));
    kinds
}

pub fn spawn_bodies<R: Rng + ?Sized>(rng: &mut R, viewport: Viewport) -> Vec<BodyDescriptor> {
    spawn_order()
        .into_iter()
        .enumerate()
        .map(|(i, kind)| BodyDescriptor {
            id: BodyId(i as u32),
            kind,
            scale: kind.scale(),
            gravity_effect: kind.gravity_effect(),
            position: spawn_position(rng, viewport),
            rotation: spawn_rotation(rng),
        })
        .collect()
}
