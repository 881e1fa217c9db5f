use fnv::FnvHashMap;
use hero_core::{MeshData, MeshKey};
use wgpu::util::DeviceExt;

pub(crate) struct GpuMesh {
    pub(crate) vertex_buffer: wgpu::Buffer,
    pub(crate) index_buffer: wgpu::Buffer,
    pub(crate) index_count: u32,
}

impl GpuMesh {
    pub(crate) fn upload(device: &wgpu::Device, label: &str, mesh: &MeshData) -> Self {
        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(label),
            contents: bytemuck::cast_slice(&mesh.vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(label),
            contents: bytemuck::cast_slice(&mesh.indices),
            usage: wgpu::BufferUsages::INDEX,
        });
        Self {
            vertex_buffer,
            index_buffer,
            index_count: mesh.indices.len() as u32,
        }
    }
}

/// Uploaded meshes. A key with no entry draws nothing.
#[derive(Default)]
pub(crate) struct MeshRegistry {
    meshes: FnvHashMap<MeshKey, GpuMesh>,
}

impl MeshRegistry {
    pub(crate) fn insert(&mut self, device: &wgpu::Device, key: MeshKey, mesh: &MeshData) {
        if mesh.is_empty() {
            log::warn!("[render] {key:?}: empty mesh not uploaded");
            return;
        }
        let label = format!("{key:?}");
        self.meshes.insert(key, GpuMesh::upload(device, &label, mesh));
    }

    pub(crate) fn get(&self, key: MeshKey) -> Option<&GpuMesh> {
        self.meshes.get(&key)
    }

    pub(crate) fn len(&self) -> usize {
        self.meshes.len()
    }
}
