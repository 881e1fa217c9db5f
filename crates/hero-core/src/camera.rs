//! Camera and viewport math shared with the web frontend.
//!
//! The scene looks down -Z from a fixed eye. The world-space extent visible at
//! the origin plane drives spawn bounds and pointer mapping.

use crate::constants::{
    CAMERA_FAR, CAMERA_FOV_DEG, CAMERA_NEAR, CAMERA_Z, NARROW_MAX_WIDTH_PX,
};
use glam::{Mat4, Vec3};

/// Simple right-handed camera description with perspective projection.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    pub fn hero(aspect: f32) -> Self {
        Self {
            eye: Vec3::new(0.0, 0.0, CAMERA_Z),
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect,
            fovy_radians: CAMERA_FOV_DEG.to_radians(),
            znear: CAMERA_NEAR,
            zfar: CAMERA_FAR,
        }
    }

    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }
    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// World-space size of the frustum slice through `target`.
    pub fn viewport(&self) -> Viewport {
        let distance = self.eye.distance(self.target);
        let height = 2.0 * (self.fovy_radians * 0.5).tan() * distance;
        Viewport {
            width: height * self.aspect,
            height,
        }
    }
}

/// Visible world extent at the origin plane, in world units.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Breakpoint {
    Narrow,
    Wide,
}

impl Breakpoint {
    /// Mirror of the `(max-width: 769px)` media query.
    pub fn from_css_width(width_px: f64) -> Self {
        if width_px <= NARROW_MAX_WIDTH_PX {
            Breakpoint::Narrow
        } else {
            Breakpoint::Wide
        }
    }

    pub fn from_media_match(matches_narrow: bool) -> Self {
        if matches_narrow {
            Breakpoint::Narrow
        } else {
            Breakpoint::Wide
        }
    }

    #[inline]
    pub fn pick<T>(self, narrow: T, wide: T) -> T {
        match self {
            Breakpoint::Narrow => narrow,
            Breakpoint::Wide => wide,
        }
    }
}
