use crate::constants::{BACKDROP_HEX, BLACK_LINEAR, BLUE_HEX};
use glam::Vec3;

/// Convert one sRGB channel to linear.
#[inline]
pub fn srgb_to_linear(c: f32) -> f32 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// `0xRRGGBB` in sRGB to a linear color.
pub fn hex_to_linear(hex: u32) -> Vec3 {
    let r = ((hex >> 16) & 0xff) as f32 / 255.0;
    let g = ((hex >> 8) & 0xff) as f32 / 255.0;
    let b = (hex & 0xff) as f32 / 255.0;
    Vec3::new(srgb_to_linear(r), srgb_to_linear(g), srgb_to_linear(b))
}

/// Physically based surface parameters, linear color.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Material {
    pub color: Vec3,
    pub metalness: f32,
    pub roughness: f32,
}

impl Material {
    pub fn black() -> Self {
        Self {
            color: Vec3::splat(BLACK_LINEAR),
            metalness: 0.8,
            roughness: 0.5,
        }
    }

    pub fn metal() -> Self {
        Self {
            color: Vec3::ONE,
            metalness: 0.8,
            roughness: 0.3,
        }
    }

    pub fn blue() -> Self {
        Self {
            color: hex_to_linear(BLUE_HEX),
            metalness: 0.0,
            roughness: 1.0,
        }
    }

    pub fn logo() -> Self {
        Self {
            color: hex_to_linear(BLUE_HEX),
            metalness: 0.1,
            roughness: 0.3,
        }
    }

    pub fn backdrop() -> Self {
        Self {
            color: hex_to_linear(BACKDROP_HEX),
            metalness: 0.0,
            roughness: 1.0,
        }
    }
}
