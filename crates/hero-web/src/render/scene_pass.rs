use super::helpers::{self, DEPTH_FORMAT, HDR_FORMAT};
use super::meshes::MeshRegistry;
use super::targets::RenderTargets;
use fnv::FnvHashMap;
use glam::Vec4;
use hero_core::{
    hex_to_linear, DrawItem, HeroScene, MeshKey, Vertex, FOG_FAR, FOG_HEX, FOG_NEAR,
    LIGHTFORMER_INTENSITY, LIGHTFORMER_POSITIONS,
};
use std::ops::Range;

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct SceneUniforms {
    view_proj: [[f32; 4]; 4],
    camera_pos: [f32; 4],
    camera_dir: [f32; 4],
    fog_color: [f32; 4],
    fog_params: [f32; 4],
    key_dir: [f32; 4],
    key_color: [f32; 4],
    panels: [[f32; 4]; 4],
}

impl SceneUniforms {
    pub(crate) fn from_scene(scene: &HeroScene) -> Self {
        let camera = scene.camera();
        let light = scene.pointer_light();
        let dir = (camera.target - camera.eye).normalize_or_zero();
        let mut panels = [[0.0; 4]; 4];
        for (slot, p) in panels.iter_mut().zip(LIGHTFORMER_POSITIONS) {
            *slot = [p[0], p[1], p[2], LIGHTFORMER_INTENSITY];
        }
        Self {
            view_proj: camera.view_projection().to_cols_array_2d(),
            camera_pos: camera.eye.extend(1.0).to_array(),
            camera_dir: dir.extend(0.0).to_array(),
            fog_color: fog_color().extend(1.0).to_array(),
            fog_params: [FOG_NEAR, FOG_FAR, 0.0, 0.0],
            key_dir: light.direction().extend(light.intensity).to_array(),
            key_color: light.color.extend(1.0).to_array(),
            panels,
        }
    }
}

pub(crate) fn fog_color() -> glam::Vec3 {
    hex_to_linear(FOG_HEX)
}

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct InstanceRaw {
    model: [[f32; 4]; 4],
    color: [f32; 4],
    material: [f32; 4],
}

impl InstanceRaw {
    const ATTRIBS: [wgpu::VertexAttribute; 6] = wgpu::vertex_attr_array![
        2 => Float32x4,
        3 => Float32x4,
        4 => Float32x4,
        5 => Float32x4,
        6 => Float32x4,
        7 => Float32x4,
    ];

    fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<InstanceRaw>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &Self::ATTRIBS,
        }
    }

    fn from_draw(item: &DrawItem) -> Self {
        Self {
            model: item.model.to_cols_array_2d(),
            color: item.material.color.extend(1.0).to_array(),
            material: Vec4::new(item.material.metalness, item.material.roughness, 0.0, 0.0)
                .to_array(),
        }
    }
}

const VERTEX_ATTRIBS: [wgpu::VertexAttribute; 2] =
    wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x3];

fn vertex_layout() -> wgpu::VertexBufferLayout<'static> {
    wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes: &VERTEX_ATTRIBS,
    }
}

/// Group draws by mesh, keeping first-seen order so the backdrop stays first.
pub(crate) fn batch_draws(
    draws: &[DrawItem],
    instances: &mut Vec<InstanceRaw>,
    batches: &mut Vec<(MeshKey, Range<u32>)>,
) {
    let mut order: Vec<MeshKey> = Vec::new();
    let mut grouped: FnvHashMap<MeshKey, Vec<InstanceRaw>> = FnvHashMap::default();
    for item in draws {
        grouped
            .entry(item.mesh)
            .or_insert_with(|| {
                order.push(item.mesh);
                Vec::new()
            })
            .push(InstanceRaw::from_draw(item));
    }
    instances.clear();
    batches.clear();
    for key in order {
        let Some(group) = grouped.remove(&key) else {
            continue;
        };
        let start = instances.len() as u32;
        instances.extend(group);
        batches.push((key, start..instances.len() as u32));
    }
}

pub(crate) struct ScenePass {
    uniform_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
    mesh_pipeline: wgpu::RenderPipeline,
    backdrop_pipeline: wgpu::RenderPipeline,
    instance_buffer: wgpu::Buffer,
    instance_capacity: usize,
    instances: Vec<InstanceRaw>,
    batches: Vec<(MeshKey, Range<u32>)>,
}

impl ScenePass {
    pub(crate) fn new(device: &wgpu::Device) -> Self {
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("scene_shader"),
            source: wgpu::ShaderSource::Wgsl(hero_core::SCENE_WGSL.into()),
        });
        let bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("scene_bgl"),
            entries: &[helpers::uniform_entry(
                0,
                wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
            )],
        });
        let uniform_buffer =
            helpers::uniform_buffer(device, "scene_uniforms", std::mem::size_of::<SceneUniforms>());
        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("scene_bg"),
            layout: &bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
        });
        let layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("scene_pl"),
            bind_group_layouts: &[&bgl],
            push_constant_ranges: &[],
        });
        let mesh_pipeline = make_scene_pipeline(
            device,
            "mesh_pipeline",
            &layout,
            &shader,
            wgpu::Face::Back,
            wgpu::CompareFunction::Less,
            true,
        );
        // Camera sits inside the backdrop sphere: draw its inner faces behind everything.
        let backdrop_pipeline = make_scene_pipeline(
            device,
            "backdrop_pipeline",
            &layout,
            &shader,
            wgpu::Face::Front,
            wgpu::CompareFunction::Always,
            false,
        );
        let instance_capacity = 64;
        let instance_buffer = create_instance_buffer(device, instance_capacity);
        Self {
            uniform_buffer,
            bind_group,
            mesh_pipeline,
            backdrop_pipeline,
            instance_buffer,
            instance_capacity,
            instances: Vec::new(),
            batches: Vec::new(),
        }
    }

    pub(crate) fn prepare(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        scene: &HeroScene,
        draws: &[DrawItem],
    ) {
        let uniforms = SceneUniforms::from_scene(scene);
        queue.write_buffer(&self.uniform_buffer, 0, bytemuck::bytes_of(&uniforms));

        batch_draws(draws, &mut self.instances, &mut self.batches);
        if self.instances.len() > self.instance_capacity {
            self.instance_capacity = self.instances.len().next_power_of_two();
            self.instance_buffer = create_instance_buffer(device, self.instance_capacity);
            log::debug!("[render] instance buffer grown to {}", self.instance_capacity);
        }
        if !self.instances.is_empty() {
            queue.write_buffer(&self.instance_buffer, 0, bytemuck::cast_slice(&self.instances));
        }
    }

    pub(crate) fn draw(
        &self,
        encoder: &mut wgpu::CommandEncoder,
        targets: &RenderTargets,
        meshes: &MeshRegistry,
    ) {
        let fog = fog_color();
        let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("scene_pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: &targets.hdr_view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(wgpu::Color {
                        r: fog.x as f64,
                        g: fog.y as f64,
                        b: fog.z as f64,
                        a: 1.0,
                    }),
                    store: wgpu::StoreOp::Store,
                },
            })],
            depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                view: &targets.depth_view,
                depth_ops: Some(wgpu::Operations {
                    load: wgpu::LoadOp::Clear(1.0),
                    store: wgpu::StoreOp::Store,
                }),
                stencil_ops: None,
            }),
            timestamp_writes: None,
            occlusion_query_set: None,
        });
        rpass.set_bind_group(0, &self.bind_group, &[]);
        rpass.set_vertex_buffer(1, self.instance_buffer.slice(..));
        for (key, range) in &self.batches {
            let Some(mesh) = meshes.get(*key) else {
                continue;
            };
            let pipeline = match key {
                MeshKey::Backdrop => &self.backdrop_pipeline,
                _ => &self.mesh_pipeline,
            };
            rpass.set_pipeline(pipeline);
            rpass.set_vertex_buffer(0, mesh.vertex_buffer.slice(..));
            rpass.set_index_buffer(mesh.index_buffer.slice(..), wgpu::IndexFormat::Uint32);
            rpass.draw_indexed(0..mesh.index_count, 0, range.clone());
        }
    }
}

fn create_instance_buffer(device: &wgpu::Device, capacity: usize) -> wgpu::Buffer {
    device.create_buffer(&wgpu::BufferDescriptor {
        label: Some("instance_buffer"),
        size: (capacity * std::mem::size_of::<InstanceRaw>()) as u64,
        usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    })
}

fn make_scene_pipeline(
    device: &wgpu::Device,
    label: &str,
    layout: &wgpu::PipelineLayout,
    shader: &wgpu::ShaderModule,
    cull: wgpu::Face,
    depth_compare: wgpu::CompareFunction,
    depth_write: bool,
) -> wgpu::RenderPipeline {
    device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some(label),
        layout: Some(layout),
        vertex: wgpu::VertexState {
            module: shader,
            entry_point: Some("vs_main"),
            buffers: &[vertex_layout(), InstanceRaw::layout()],
            compilation_options: wgpu::PipelineCompilationOptions::default(),
        },
        primitive: wgpu::PrimitiveState {
            topology: wgpu::PrimitiveTopology::TriangleList,
            front_face: wgpu::FrontFace::Ccw,
            cull_mode: Some(cull),
            ..Default::default()
        },
        depth_stencil: Some(wgpu::DepthStencilState {
            format: DEPTH_FORMAT,
            depth_write_enabled: depth_write,
            depth_compare,
            stencil: wgpu::StencilState::default(),
            bias: wgpu::DepthBiasState::default(),
        }),
        multisample: wgpu::MultisampleState::default(),
        fragment: Some(wgpu::FragmentState {
            module: shader,
            entry_point: Some("fs_main"),
            targets: &[Some(wgpu::ColorTargetState {
                format: HDR_FORMAT,
                blend: Some(wgpu::BlendState::REPLACE),
                write_mask: wgpu::ColorWrites::ALL,
            })],
            compilation_options: wgpu::PipelineCompilationOptions::default(),
        }),
        cache: None,
        multiview: None,
    })
}
