//! The hero scene as a whole: camera, physics world, logo and pointer rigs.
//!
//! `HeroScene` is platform-free. The web frontend feeds it one `FrameInput`
//! per animation frame and turns the resulting draw list into GPU draws.

use crate::assets::ModelAsset;
use crate::camera::{Breakpoint, Camera, Viewport};
use crate::constants::*;
use crate::geometry::{self, MeshData};
use crate::logo::{logo_model_matrix, LogoMotion, LogoPhase};
use crate::materials::Material;
use crate::physics::PhysicsWorld;
use crate::pointer::{pointer_to_world, PointerLight};
use crate::spawner::{spawn_bodies, BodyDescriptor, BodyKind, PropKind};
use glam::{Mat4, Quat, Vec2, Vec3};
use rand::Rng;
use smallvec::{smallvec, SmallVec};
use std::f32::consts::FRAC_PI_2;

/// Every distinct mesh the renderer may be asked to draw.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MeshKey {
    Backdrop,
    Box,
    Sphere,
    Cone,
    PhoneScreen,
    Model(ModelAsset),
}

impl MeshKey {
    /// Procedural geometry for the built-in keys; `None` for model meshes.
    pub fn procedural(self) -> Option<MeshData> {
        match self {
            MeshKey::Backdrop => Some(geometry::uv_sphere(
                BACKDROP_RADIUS,
                BACKDROP_SEGMENTS,
                BACKDROP_SEGMENTS,
            )),
            MeshKey::Box => Some(geometry::cuboid(BOX_SIZE, BOX_SIZE, BOX_SIZE)),
            MeshKey::Sphere => Some(geometry::uv_sphere(
                SPHERE_RADIUS,
                SPHERE_SEGMENTS,
                SPHERE_SEGMENTS,
            )),
            MeshKey::Cone => Some(geometry::cone(CONE_RADIUS, CONE_HEIGHT, CONE_SEGMENTS)),
            MeshKey::PhoneScreen => Some(geometry::plane(
                PHONE_SCREEN_SIZE[0],
                PHONE_SCREEN_SIZE[1],
            )),
            MeshKey::Model(_) => None,
        }
    }
}

/// Prepare a model's named mesh for upload. The logo is re-centered on its
/// bounding box; props keep their authored origin.
pub fn prepare_model_mesh(asset: ModelAsset, mesh: &MeshData) -> MeshData {
    match asset {
        ModelAsset::Logo => mesh.clone().centered(),
        _ => mesh.clone(),
    }
}

/// One mesh attached to a body, relative to the body's scaled frame.
#[derive(Clone, Copy, Debug)]
pub struct VisualPart {
    pub mesh: MeshKey,
    pub local: Mat4,
    pub material: Material,
}

pub fn visual_parts(kind: BodyKind) -> SmallVec<[VisualPart; 2]> {
    let part = |mesh, local, material| VisualPart {
        mesh,
        local,
        material,
    };
    match kind {
        BodyKind::Box => smallvec![part(MeshKey::Box, Mat4::IDENTITY, Material::black())],
        BodyKind::Sphere => smallvec![part(MeshKey::Sphere, Mat4::IDENTITY, Material::blue())],
        BodyKind::Cone => smallvec![part(MeshKey::Cone, Mat4::IDENTITY, Material::black())],
        BodyKind::Prop(PropKind::Token) => smallvec![part(
            MeshKey::Model(ModelAsset::Token),
            Mat4::from_scale(Vec3::splat(TOKEN_MESH_SCALE)),
            Material::metal(),
        )],
        BodyKind::Prop(PropKind::Coin) => smallvec![part(
            MeshKey::Model(ModelAsset::Coin),
            Mat4::from_scale(Vec3::splat(COIN_MESH_SCALE)),
            Material::metal(),
        )],
        BodyKind::Prop(PropKind::Headphones) => smallvec![part(
            MeshKey::Model(ModelAsset::Headphones),
            Mat4::from_scale(Vec3::splat(HEADPHONES_MESH_SCALE)),
            Material::black(),
        )],
        BodyKind::Prop(PropKind::Phone) => smallvec![
            part(
                MeshKey::Model(ModelAsset::Phone),
                Mat4::from_rotation_x(FRAC_PI_2),
                Material::black(),
            ),
            part(
                MeshKey::PhoneScreen,
                Mat4::from_translation(PHONE_SCREEN_OFFSET),
                Material::metal(),
            ),
        ],
    }
}

#[derive(Clone, Copy, Debug)]
pub struct DrawItem {
    pub mesh: MeshKey,
    pub model: Mat4,
    pub material: Material,
}

#[derive(Clone, Copy, Debug, Default)]
pub struct FrameInput {
    /// Seconds since the previous frame; zero on the first frame after a resume.
    pub dt: f32,
    /// Normalized pointer in [-1, 1], +Y up.
    pub pointer: Vec2,
    pub paused: bool,
}

pub struct HeroScene {
    camera: Camera,
    viewport: Viewport,
    breakpoint: Breakpoint,
    world: PhysicsWorld,
    logo: LogoMotion,
    light: PointerLight,
    bodies: Vec<BodyDescriptor>,
    elapsed: f32,
}

impl HeroScene {
    /// Build the scene and spawn every decorative body once.
    pub fn new<R: Rng + ?Sized>(aspect: f32, breakpoint: Breakpoint, rng: &mut R) -> Self {
        let camera = Camera::hero(aspect);
        let viewport = camera.viewport();
        let bodies = spawn_bodies(rng, viewport);
        let mut world = PhysicsWorld::new(breakpoint);
        world.spawn_all(&bodies);
        log::info!(
            "[scene] spawned {} bodies, viewport {:.2}x{:.2}, {:?}",
            bodies.len(),
            viewport.width,
            viewport.height,
            breakpoint
        );
        Self {
            camera,
            viewport,
            breakpoint,
            world,
            logo: LogoMotion::new(),
            light: PointerLight::default(),
            bodies,
            elapsed: 0.0,
        }
    }

    /// Follow a canvas resize. Bodies are never respawned.
    pub fn resize(&mut self, aspect: f32, breakpoint: Breakpoint) {
        if aspect.is_finite() && aspect > 0.0 {
            self.camera.aspect = aspect;
            self.viewport = self.camera.viewport();
        }
        self.breakpoint = breakpoint;
        self.world.set_breakpoint(breakpoint);
    }

    /// Advance one animation frame. A paused frame changes nothing.
    pub fn frame(&mut self, input: FrameInput) {
        if input.paused {
            self.world.step(input.dt, true);
            return;
        }
        let dt = input.dt.clamp(0.0, MAX_STEP_DT);
        self.elapsed += dt;

        let target = pointer_to_world(input.pointer, self.viewport);
        self.world.set_pointer_target(target);
        self.light.aim(target);
        self.logo.update(input.pointer);
        self.world.step(dt, false);
    }

    /// Fill `out` with this frame's draws, backdrop first.
    pub fn draw_list(&self, out: &mut Vec<DrawItem>) {
        out.clear();
        out.push(DrawItem {
            mesh: MeshKey::Backdrop,
            model: Mat4::IDENTITY,
            material: Material::backdrop(),
        });
        out.push(DrawItem {
            mesh: MeshKey::Model(ModelAsset::Logo),
            model: logo_model_matrix(&self.logo, self.breakpoint, self.elapsed),
            material: Material::logo(),
        });
        for desc in &self.bodies {
            let Some((position, rotation)) = self.world.body_pose(desc.id) else {
                continue;
            };
            let body = body_matrix(position, rotation, desc.scale);
            for part in visual_parts(desc.kind) {
                out.push(DrawItem {
                    mesh: part.mesh,
                    model: body * part.local,
                    material: part.material,
                });
            }
        }
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn breakpoint(&self) -> Breakpoint {
        self.breakpoint
    }

    pub fn world(&self) -> &PhysicsWorld {
        &self.world
    }

    pub fn logo(&self) -> &LogoMotion {
        &self.logo
    }

    pub fn logo_phase(&self) -> LogoPhase {
        self.logo.phase()
    }

    pub fn pointer_light(&self) -> &PointerLight {
        &self.light
    }

    pub fn bodies(&self) -> &[BodyDescriptor] {
        &self.bodies
    }

    /// Seconds of active time; drives the logo bob.
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }
}

#[inline]
fn body_matrix(position: Vec3, rotation: Quat, scale: f32) -> Mat4 {
    Mat4::from_scale_rotation_translation(Vec3::splat(scale), rotation, position)
}
