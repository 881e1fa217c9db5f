//! Indexed triangle meshes: procedural primitives and the shared vertex layout.
//!
//! Winding is counter-clockwise for front faces. Primitive layouts follow the
//! usual three.js geometry conventions so models and primitives line up.

use glam::Vec3;
use std::f32::consts::PI;

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

impl Vertex {
    #[inline]
    pub fn new(position: Vec3, normal: Vec3) -> Self {
        Self {
            position: position.to_array(),
            normal: normal.to_array(),
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct MeshData {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
}

impl MeshData {
    /// Build from raw attributes; smooth normals are generated when absent.
    pub fn from_attributes(
        positions: Vec<[f32; 3]>,
        normals: Option<Vec<[f32; 3]>>,
        indices: Option<Vec<u32>>,
    ) -> Self {
        let indices = indices.unwrap_or_else(|| (0..positions.len() as u32).collect());
        let normals = match normals {
            Some(n) if n.len() == positions.len() => n,
            _ => smooth_normals(&positions, &indices),
        };
        let vertices = positions
            .iter()
            .zip(normals.iter())
            .map(|(p, n)| Vertex {
                position: *p,
                normal: *n,
            })
            .collect();
        Self { vertices, indices }
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Merge another mesh into this one, rebasing its indices.
    pub fn append(&mut self, other: &MeshData) {
        let base = self.vertices.len() as u32;
        self.vertices.extend_from_slice(&other.vertices);
        self.indices.extend(other.indices.iter().map(|i| i + base));
    }

    pub fn bounds(&self) -> Option<(Vec3, Vec3)> {
        let mut it = self.vertices.iter().map(|v| Vec3::from(v.position));
        let first = it.next()?;
        Some(it.fold((first, first), |(lo, hi), p| (lo.min(p), hi.max(p))))
    }

    pub fn center(&self) -> Vec3 {
        self.bounds()
            .map(|(lo, hi)| (lo + hi) * 0.5)
            .unwrap_or(Vec3::ZERO)
    }

    /// Translate so the bounding box is centered on the origin.
    pub fn centered(mut self) -> Self {
        let c = self.center();
        for v in &mut self.vertices {
            v.position = (Vec3::from(v.position) - c).to_array();
        }
        self
    }
}

fn smooth_normals(positions: &[[f32; 3]], indices: &[u32]) -> Vec<[f32; 3]> {
    let mut acc = vec![Vec3::ZERO; positions.len()];
    for tri in indices.chunks_exact(3) {
        let (a, b, c) = (tri[0] as usize, tri[1] as usize, tri[2] as usize);
        if a >= positions.len() || b >= positions.len() || c >= positions.len() {
            continue;
        }
        let pa = Vec3::from(positions[a]);
        let pb = Vec3::from(positions[b]);
        let pc = Vec3::from(positions[c]);
        let n = (pb - pa).cross(pc - pa);
        acc[a] += n;
        acc[b] += n;
        acc[c] += n;
    }
    acc.into_iter()
        .map(|n| n.try_normalize().unwrap_or(Vec3::Y).to_array())
        .collect()
}

/// Axis-aligned box centered on the origin; four vertices per face.
pub fn cuboid(width: f32, height: f32, depth: f32) -> MeshData {
    let half = Vec3::new(width, height, depth) * 0.5;
    // (normal, u, v) with u x v == normal
    let faces = [
        (Vec3::X, Vec3::NEG_Z, Vec3::Y),
        (Vec3::NEG_X, Vec3::Z, Vec3::Y),
        (Vec3::Y, Vec3::X, Vec3::NEG_Z),
        (Vec3::NEG_Y, Vec3::X, Vec3::Z),
        (Vec3::Z, Vec3::X, Vec3::Y),
        (Vec3::NEG_Z, Vec3::NEG_X, Vec3::Y),
    ];
    let mut mesh = MeshData::default();
    for (n, u, v) in faces {
        let base = mesh.vertices.len() as u32;
        for (su, sv) in [(-1.0, -1.0), (1.0, -1.0), (1.0, 1.0), (-1.0, 1.0)] {
            mesh.vertices.push(Vertex::new((n + u * su + v * sv) * half, n));
        }
        mesh.indices
            .extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }
    mesh
}

/// UV sphere with poles on the Y axis.
pub fn uv_sphere(radius: f32, width_segments: u32, height_segments: u32) -> MeshData {
    let ws = width_segments.max(3);
    let hs = height_segments.max(2);
    let mut mesh = MeshData::default();
    for iy in 0..=hs {
        let v = iy as f32 / hs as f32;
        for ix in 0..=ws {
            let u = ix as f32 / ws as f32;
            let dir = Vec3::new(
                -(u * 2.0 * PI).cos() * (v * PI).sin(),
                (v * PI).cos(),
                (u * 2.0 * PI).sin() * (v * PI).sin(),
            );
            mesh.vertices.push(Vertex::new(dir * radius, dir));
        }
    }
    let row = ws + 1;
    for iy in 0..hs {
        for ix in 0..ws {
            let a = iy * row + ix + 1;
            let b = iy * row + ix;
            let c = (iy + 1) * row + ix;
            let d = (iy + 1) * row + ix + 1;
            if iy != 0 {
                mesh.indices.extend_from_slice(&[a, b, d]);
            }
            if iy != hs - 1 {
                mesh.indices.extend_from_slice(&[b, c, d]);
            }
        }
    }
    mesh
}

/// Closed cone, apex at +height/2, base cap at -height/2.
pub fn cone(radius: f32, height: f32, radial_segments: u32) -> MeshData {
    let segments = radial_segments.max(3);
    let half_h = height * 0.5;
    let slope = radius / height;
    let mut mesh = MeshData::default();

    // Torso: apex ring (radius 0) then base ring.
    for y in 0..=1u32 {
        let ring_r = y as f32 * radius;
        for x in 0..=segments {
            let theta = x as f32 / segments as f32 * 2.0 * PI;
            let (s, c) = theta.sin_cos();
            let position = Vec3::new(ring_r * s, half_h - y as f32 * height, ring_r * c);
            let normal = Vec3::new(s, slope, c).normalize();
            mesh.vertices.push(Vertex::new(position, normal));
        }
    }
    let row = segments + 1;
    for x in 0..segments {
        let b = row + x;
        let c = row + x + 1;
        let d = x + 1;
        mesh.indices.extend_from_slice(&[b, c, d]);
    }

    // Base cap.
    let center_start = mesh.vertices.len() as u32;
    for _ in 0..segments {
        mesh.vertices
            .push(Vertex::new(Vec3::new(0.0, -half_h, 0.0), Vec3::NEG_Y));
    }
    let ring_start = mesh.vertices.len() as u32;
    for x in 0..=segments {
        let theta = x as f32 / segments as f32 * 2.0 * PI;
        let (s, c) = theta.sin_cos();
        mesh.vertices
            .push(Vertex::new(Vec3::new(radius * s, -half_h, radius * c), Vec3::NEG_Y));
    }
    for x in 0..segments {
        let center = center_start + x;
        let i = ring_start + x;
        mesh.indices.extend_from_slice(&[i + 1, i, center]);
    }
    mesh
}

/// Single quad in the XY plane facing +Z.
pub fn plane(width: f32, height: f32) -> MeshData {
    let (hw, hh) = (width * 0.5, height * 0.5);
    MeshData {
        vertices: vec![
            Vertex::new(Vec3::new(-hw, hh, 0.0), Vec3::Z),
            Vertex::new(Vec3::new(hw, hh, 0.0), Vec3::Z),
            Vertex::new(Vec3::new(-hw, -hh, 0.0), Vec3::Z),
            Vertex::new(Vec3::new(hw, -hh, 0.0), Vec3::Z),
        ],
        indices: vec![0, 2, 1, 2, 3, 1],
    }
}
