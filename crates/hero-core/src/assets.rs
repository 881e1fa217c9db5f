//! Binary glTF models and named sub-mesh lookup.
//!
//! Node names are sanitized the way three.js' GLTFLoader does it, so the names
//! exported by the modeling tool are the ones the scene asks for. Primitives of
//! one node are merged into a single mesh in the node's local space.

use crate::geometry::MeshData;
use crate::spawner::PropKind;
use fnv::FnvHashMap;
use gltf::mesh::Mode;
use gltf::Gltf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AssetError {
    #[error("glTF parse failed: {0}")]
    Parse(#[from] gltf::Error),
    #[error("model has no meshes")]
    Empty,
}

/// The model files the hero scene loads.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ModelAsset {
    Logo,
    Token,
    Coin,
    Headphones,
    Phone,
}

impl ModelAsset {
    pub const ALL: [ModelAsset; 5] = [
        ModelAsset::Logo,
        ModelAsset::Token,
        ModelAsset::Coin,
        ModelAsset::Headphones,
        ModelAsset::Phone,
    ];

    pub fn file(self) -> &'static str {
        match self {
            ModelAsset::Logo => "logo.glb",
            ModelAsset::Token => "eth.glb",
            ModelAsset::Coin => "bitcoin.glb",
            ModelAsset::Headphones => "headphones.glb",
            ModelAsset::Phone => "phone.glb",
        }
    }

    /// Name of the node whose geometry is drawn.
    pub fn node(self) -> &'static str {
        match self {
            ModelAsset::Logo => "Base_Logo",
            ModelAsset::Token => "ETH",
            ModelAsset::Coin => "Plane_Material003_0",
            ModelAsset::Headphones => "Headphones",
            ModelAsset::Phone => "Cylinder",
        }
    }

    pub fn for_prop(prop: PropKind) -> Self {
        match prop {
            PropKind::Token => ModelAsset::Token,
            PropKind::Phone => ModelAsset::Phone,
            PropKind::Headphones => ModelAsset::Headphones,
            PropKind::Coin => ModelAsset::Coin,
        }
    }
}

/// Whitespace becomes `_`; `[ ] . : /` are dropped.
pub fn sanitize_node_name(name: &str) -> String {
    name.chars()
        .filter(|c| !matches!(c, '[' | ']' | '.' | ':' | '/'))
        .map(|c| if c.is_whitespace() { '_' } else { c })
        .collect()
}

#[derive(Debug)]
pub enum MeshLookup<'a> {
    Found(&'a MeshData),
    Missing,
}

impl<'a> MeshLookup<'a> {
    pub fn found(self) -> Option<&'a MeshData> {
        match self {
            MeshLookup::Found(mesh) => Some(mesh),
            MeshLookup::Missing => None,
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, MeshLookup::Missing)
    }
}

/// Meshes of one model keyed by sanitized node name.
#[derive(Debug, Default)]
pub struct ModelNodes {
    meshes: FnvHashMap<String, MeshData>,
}

impl ModelNodes {
    /// Parse a `.glb` (or self-contained `.gltf`) byte slice.
    pub fn from_glb(bytes: &[u8]) -> Result<Self, AssetError> {
        let gltf = Gltf::from_slice(bytes)?;
        let blob = gltf.blob.as_deref();
        let mut meshes: FnvHashMap<String, MeshData> = FnvHashMap::default();

        for node in gltf.nodes() {
            let Some(mesh) = node.mesh() else {
                continue;
            };
            let base = sanitize_node_name(node.name().unwrap_or(""));
            let name = unique_name(&meshes, base);

            let mut merged = MeshData::default();
            for primitive in mesh.primitives() {
                if primitive.mode() != Mode::Triangles {
                    log::debug!("[assets] {name}: skipping {:?} primitive", primitive.mode());
                    continue;
                }
                let reader = primitive.reader(|buffer| match buffer.source() {
                    gltf::buffer::Source::Bin => blob,
                    gltf::buffer::Source::Uri(_) => None,
                });
                let Some(positions) = reader.read_positions() else {
                    log::warn!("[assets] {name}: primitive without positions");
                    continue;
                };
                let positions: Vec<[f32; 3]> = positions.collect();
                let normals = reader.read_normals().map(|n| n.collect());
                let indices = reader.read_indices().map(|i| i.into_u32().collect());
                merged.append(&MeshData::from_attributes(positions, normals, indices));
            }
            if !merged.is_empty() {
                meshes.insert(name, merged);
            }
        }

        if meshes.is_empty() {
            return Err(AssetError::Empty);
        }
        log::debug!("[assets] parsed {} mesh nodes", meshes.len());
        Ok(Self { meshes })
    }

    pub fn mesh(&self, name: &str) -> MeshLookup<'_> {
        match self.meshes.get(name) {
            Some(mesh) => MeshLookup::Found(mesh),
            None => MeshLookup::Missing,
        }
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.meshes.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.meshes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.meshes.is_empty()
    }
}

// Repeated names get `_1`, `_2`, ... like the three.js loader.
fn unique_name(existing: &FnvHashMap<String, MeshData>, base: String) -> String {
    if !existing.contains_key(&base) {
        return base;
    }
    let mut i = 1;
    loop {
        let candidate = format!("{base}_{i}");
        if !existing.contains_key(&candidate) {
            return candidate;
        }
        i += 1;
    }
}
