//! Logo intro and pointer tracking.
//!
//! The logo slides in from depth, then follows the pointer. The transition
//! happens once; nothing resets it for the life of the scene.

use crate::camera::Breakpoint;
use crate::constants::*;
use glam::{EulerRot, Mat4, Quat, Vec2, Vec3};

#[inline]
pub fn lerp(from: f32, to: f32, t: f32) -> f32 {
    from + (to - from) * t
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogoPhase {
    SlidingIn,
    Tracking,
}

#[derive(Clone, Debug)]
pub struct LogoMotion {
    phase: LogoPhase,
    /// Depth of the logo group.
    pub z: f32,
    /// Rotation about X, eased toward -pointer.y while tracking.
    pub pitch: f32,
    /// Rotation about Y.
    pub yaw: f32,
}

impl Default for LogoMotion {
    fn default() -> Self {
        Self::new()
    }
}

impl LogoMotion {
    pub fn new() -> Self {
        Self {
            phase: LogoPhase::SlidingIn,
            z: LOGO_START_Z,
            pitch: 0.0,
            yaw: 0.0,
        }
    }

    pub fn phase(&self) -> LogoPhase {
        self.phase
    }

    /// One frame of easing. Factors are per frame, not per second.
    pub fn update(&mut self, pointer: Vec2) {
        match self.phase {
            LogoPhase::Tracking => {
                self.yaw = lerp(self.yaw, pointer.x, LOGO_LERP);
                self.pitch = lerp(self.pitch, -pointer.y, LOGO_LERP);
            }
            LogoPhase::SlidingIn => {
                self.yaw = lerp(self.yaw, 0.0, LOGO_LERP);
            }
        }
        self.z = lerp(self.z, 0.0, LOGO_LERP);

        if self.phase == LogoPhase::SlidingIn && self.z > LOGO_ARRIVED_Z {
            self.phase = LogoPhase::Tracking;
            log::info!("[logo] intro done, tracking pointer");
        }
    }

    /// Group transform: translation along Z and the eased rotation.
    pub fn group_matrix(&self) -> Mat4 {
        Mat4::from_rotation_translation(
            Quat::from_euler(EulerRot::XYZ, self.pitch, self.yaw, 0.0),
            Vec3::new(0.0, 0.0, self.z),
        )
    }
}

/// Vertical offset of the inner logo mesh; period 2π seconds.
#[inline]
pub fn bob_offset(elapsed_sec: f32) -> f32 {
    elapsed_sec.sin() * LOGO_BOB_AMPLITUDE
}

pub fn logo_scale(breakpoint: Breakpoint) -> f32 {
    breakpoint.pick(LOGO_SCALE_NARROW, LOGO_SCALE_WIDE)
}

/// Full model matrix for a mesh already centered on its bounds.
pub fn logo_model_matrix(motion: &LogoMotion, breakpoint: Breakpoint, elapsed_sec: f32) -> Mat4 {
    motion.group_matrix()
        * Mat4::from_scale(Vec3::splat(logo_scale(breakpoint)))
        * Mat4::from_translation(Vec3::new(0.0, bob_offset(elapsed_sec), 0.0))
        * Mat4::from_scale(Vec3::splat(LOGO_MESH_SCALE))
}
