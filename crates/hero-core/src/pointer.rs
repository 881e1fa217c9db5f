use crate::camera::{Breakpoint, Viewport};
use crate::constants::*;
use crate::materials::hex_to_linear;
use glam::{Vec2, Vec3};

/// Map client (css px) coordinates to [-1, 1] against a bounding rect, +Y up.
#[inline]
pub fn normalize_client_point(
    client_x: f32,
    client_y: f32,
    left: f32,
    top: f32,
    width: f32,
    height: f32,
) -> Vec2 {
    if width <= 0.0 || height <= 0.0 {
        return Vec2::ZERO;
    }
    Vec2::new(
        (client_x - left) / width * 2.0 - 1.0,
        -((client_y - top) / height * 2.0 - 1.0),
    )
}

/// Linear mapping of the normalized pointer onto the origin plane.
#[inline]
pub fn pointer_to_world(pointer: Vec2, viewport: Viewport) -> Vec3 {
    Vec3::new(
        pointer.x * viewport.width / 2.0,
        pointer.y * viewport.height / 2.0,
        0.0,
    )
}

#[inline]
pub fn pointer_radius(breakpoint: Breakpoint) -> f32 {
    breakpoint.pick(POINTER_RADIUS_NARROW, POINTER_RADIUS_WIDE)
}

/// Directional light fixed in front of the scene and aimed at the cursor.
#[derive(Clone, Copy, Debug)]
pub struct PointerLight {
    pub position: Vec3,
    pub target: Vec3,
    /// Linear color.
    pub color: Vec3,
    pub intensity: f32,
}

impl Default for PointerLight {
    fn default() -> Self {
        Self {
            position: POINTER_LIGHT_POSITION,
            target: Vec3::ZERO,
            color: hex_to_linear(BLUE_HEX),
            intensity: POINTER_LIGHT_INTENSITY,
        }
    }
}

impl PointerLight {
    pub fn aim(&mut self, target: Vec3) {
        self.target = target;
    }

    /// Direction the light travels, from its position toward the target.
    pub fn direction(&self) -> Vec3 {
        (self.target - self.position).normalize_or_zero()
    }
}
