//! Zero-gravity rapier world behind the hero.
//!
//! Holds one kinematic pointer ball, one kinematic logo cylinder and the
//! decorative bodies. Every active step pulls each decorative body toward the
//! origin with an impulse proportional to its distance; damping settles the
//! motion so bodies drift in and jostle without escaping.

use crate::camera::Breakpoint;
use crate::constants::*;
use crate::spawner::{BodyDescriptor, BodyId};
use fnv::FnvHashMap;
use glam::{EulerRot, Quat, Vec3};
use rapier3d::prelude::*;
use std::f32::consts::FRAC_PI_2;

/// Impulse that pulls a body at `position` back toward the origin.
#[inline]
pub fn attraction_impulse(position: Vec3, gravity_effect: f32) -> Vec3 {
    -position * gravity_effect
}

#[inline]
fn to_na(v: Vec3) -> Vector<Real> {
    vector![v.x, v.y, v.z]
}

#[inline]
fn from_na(v: &Vector<Real>) -> Vec3 {
    Vec3::new(v.x, v.y, v.z)
}

#[derive(Clone, Copy, Debug)]
struct Attracted {
    handle: RigidBodyHandle,
    gravity_effect: f32,
}

pub struct PhysicsWorld {
    pipeline: PhysicsPipeline,
    gravity: Vector<Real>,
    integration_parameters: IntegrationParameters,
    island_manager: IslandManager,
    broad_phase: BroadPhase,
    narrow_phase: NarrowPhase,
    impulse_joint_set: ImpulseJointSet,
    multibody_joint_set: MultibodyJointSet,
    ccd_solver: CCDSolver,

    bodies: RigidBodySet,
    colliders: ColliderSet,

    pointer_body: RigidBodyHandle,
    pointer_collider: ColliderHandle,
    logo_body: RigidBodyHandle,
    logo_collider: ColliderHandle,
    pointer_target: Vec3,

    /// Arena of decorative bodies keyed by spawn id.
    decorative: FnvHashMap<BodyId, Attracted>,
    order: Vec<BodyId>,
    breakpoint: Breakpoint,
}

impl PhysicsWorld {
    pub fn new(breakpoint: Breakpoint) -> Self {
        let mut bodies = RigidBodySet::new();
        let mut colliders = ColliderSet::new();

        let pointer_body = bodies.insert(
            RigidBodyBuilder::kinematic_position_based()
                .translation(vector![0.0, 0.0, 0.0])
                .build(),
        );
        let pointer_collider = colliders.insert_with_parent(
            ColliderBuilder::ball(breakpoint.pick(POINTER_RADIUS_NARROW, POINTER_RADIUS_WIDE))
                .build(),
            pointer_body,
            &mut bodies,
        );

        // The logo body never moves; its collider lies along Z behind the logo.
        let logo_body = bodies.insert(RigidBodyBuilder::kinematic_position_based().build());
        let logo_collider = colliders.insert_with_parent(
            ColliderBuilder::cylinder(
                LOGO_COLLIDER_HALF_HEIGHT,
                breakpoint.pick(LOGO_COLLIDER_RADIUS_NARROW, LOGO_COLLIDER_RADIUS_WIDE),
            )
            .rotation(vector![FRAC_PI_2, 0.0, 0.0])
            .build(),
            logo_body,
            &mut bodies,
        );

        Self {
            pipeline: PhysicsPipeline::new(),
            gravity: vector![GRAVITY[0], GRAVITY[1], GRAVITY[2]],
            integration_parameters: IntegrationParameters::default(),
            island_manager: IslandManager::new(),
            broad_phase: BroadPhase::new(),
            narrow_phase: NarrowPhase::new(),
            impulse_joint_set: ImpulseJointSet::new(),
            multibody_joint_set: MultibodyJointSet::new(),
            ccd_solver: CCDSolver::new(),
            bodies,
            colliders,
            pointer_body,
            pointer_collider,
            logo_body,
            logo_collider,
            pointer_target: Vec3::ZERO,
            decorative: FnvHashMap::default(),
            order: Vec::new(),
            breakpoint,
        }
    }

    /// Insert a dynamic body for `desc`. Spawning the same id twice is ignored.
    pub fn spawn(&mut self, desc: &BodyDescriptor) {
        if self.decorative.contains_key(&desc.id) {
            log::warn!("[physics] body {:?} already spawned", desc.id);
            return;
        }
        let rotation = Quat::from_euler(
            EulerRot::XYZ,
            desc.rotation.x,
            desc.rotation.y,
            desc.rotation.z,
        );
        let handle = self.bodies.insert(
            RigidBodyBuilder::dynamic()
                .translation(to_na(desc.position))
                .rotation(to_na(rotation.to_scaled_axis()))
                .linear_damping(LINEAR_DAMPING)
                .angular_damping(ANGULAR_DAMPING)
                .build(),
        );
        self.colliders.insert_with_parent(
            ColliderBuilder::ball(desc.collider_radius())
                .friction(BODY_FRICTION)
                .build(),
            handle,
            &mut self.bodies,
        );
        self.decorative.insert(
            desc.id,
            Attracted {
                handle,
                gravity_effect: desc.gravity_effect,
            },
        );
        self.order.push(desc.id);
    }

    pub fn spawn_all(&mut self, descriptors: &[BodyDescriptor]) {
        for desc in descriptors {
            self.spawn(desc);
        }
        log::debug!("[physics] {} decorative bodies", self.order.len());
    }

    /// Resize the breakpoint-dependent colliders in place.
    pub fn set_breakpoint(&mut self, breakpoint: Breakpoint) {
        if breakpoint == self.breakpoint {
            return;
        }
        self.breakpoint = breakpoint;
        if let Some(c) = self.colliders.get_mut(self.pointer_collider) {
            c.set_shape(SharedShape::ball(
                breakpoint.pick(POINTER_RADIUS_NARROW, POINTER_RADIUS_WIDE),
            ));
        }
        if let Some(c) = self.colliders.get_mut(self.logo_collider) {
            c.set_shape(SharedShape::cylinder(
                LOGO_COLLIDER_HALF_HEIGHT,
                breakpoint.pick(LOGO_COLLIDER_RADIUS_NARROW, LOGO_COLLIDER_RADIUS_WIDE),
            ));
        }
        log::info!("[physics] breakpoint -> {:?}", breakpoint);
    }

    /// Teleport target for the pointer ball, applied on the next step. A
    /// zero-length step places the ball directly.
    pub fn set_pointer_target(&mut self, target: Vec3) {
        self.pointer_target = target;
        if let Some(body) = self.bodies.get_mut(self.pointer_body) {
            body.set_next_kinematic_translation(to_na(target));
        }
    }

    /// Advance the world by `dt` seconds. A paused world is left untouched.
    pub fn step(&mut self, dt: f32, paused: bool) {
        if paused {
            return;
        }
        let dt = dt.clamp(0.0, MAX_STEP_DT);
        if dt <= 0.0 {
            self.place_pointer();
            return;
        }
        self.apply_attraction();
        self.integration_parameters.dt = dt;
        self.pipeline.step(
            &self.gravity,
            &self.integration_parameters,
            &mut self.island_manager,
            &mut self.broad_phase,
            &mut self.narrow_phase,
            &mut self.bodies,
            &mut self.colliders,
            &mut self.impulse_joint_set,
            &mut self.multibody_joint_set,
            &mut self.ccd_solver,
            None,
            &(),
            &(),
        );
    }

    // Moves only the kinematic ball; dynamic bodies are not integrated.
    fn place_pointer(&mut self) {
        if let Some(body) = self.bodies.get_mut(self.pointer_body) {
            body.set_translation(to_na(self.pointer_target), true);
        }
    }

    fn apply_attraction(&mut self) {
        for id in &self.order {
            let Some(a) = self.decorative.get(id) else {
                continue;
            };
            if let Some(body) = self.bodies.get_mut(a.handle) {
                let impulse = attraction_impulse(from_na(body.translation()), a.gravity_effect);
                body.apply_impulse(to_na(impulse), true);
            }
        }
    }

    /// The impulse the next active step will apply to `id`.
    pub fn pending_impulse(&self, id: BodyId) -> Option<Vec3> {
        let a = self.decorative.get(&id)?;
        let body = self.bodies.get(a.handle)?;
        Some(attraction_impulse(from_na(body.translation()), a.gravity_effect))
    }

    pub fn body_translation(&self, id: BodyId) -> Option<Vec3> {
        let a = self.decorative.get(&id)?;
        self.bodies.get(a.handle).map(|b| from_na(b.translation()))
    }

    pub fn body_pose(&self, id: BodyId) -> Option<(Vec3, Quat)> {
        let a = self.decorative.get(&id)?;
        let body = self.bodies.get(a.handle)?;
        let q = body.rotation().quaternion();
        Some((
            from_na(body.translation()),
            Quat::from_xyzw(q.i, q.j, q.k, q.w),
        ))
    }

    pub fn body_ids(&self) -> &[BodyId] {
        &self.order
    }

    pub fn pointer_translation(&self) -> Vec3 {
        self.bodies
            .get(self.pointer_body)
            .map(|b| from_na(b.translation()))
            .unwrap_or(Vec3::ZERO)
    }

    pub fn logo_translation(&self) -> Vec3 {
        self.bodies
            .get(self.logo_body)
            .map(|b| from_na(b.translation()))
            .unwrap_or(Vec3::ZERO)
    }

    pub fn pointer_collider_radius(&self) -> Option<f32> {
        self.colliders
            .get(self.pointer_collider)
            .and_then(|c| c.shape().as_ball())
            .map(|b| b.radius)
    }

    pub fn logo_collider_radius(&self) -> Option<f32> {
        self.colliders
            .get(self.logo_collider)
            .and_then(|c| c.shape().as_cylinder())
            .map(|c| c.radius)
    }

    pub fn breakpoint(&self) -> Breakpoint {
        self.breakpoint
    }
}
