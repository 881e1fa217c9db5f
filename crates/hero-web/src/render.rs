//! WebGPU renderer for the hero scene: a lit instanced scene pass into an HDR
//! target followed by bloom and a tonemapping composite onto the canvas.

mod helpers;
mod meshes;
mod post;
mod scene_pass;
mod targets;

use hero_core::{DrawItem, HeroScene, MeshData, MeshKey};
use meshes::MeshRegistry;
use post::PostResources;
use scene_pass::ScenePass;
use targets::RenderTargets;
use web_sys as web;

pub struct GpuState {
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    targets: RenderTargets,
    scene_pass: ScenePass,
    post: PostResources,
    meshes: MeshRegistry,
    width: u32,
    height: u32,
}

impl GpuState {
    pub async fn new(canvas: &web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let width = canvas.width().max(1);
        let height = canvas.height().max(1);

        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No WebGPU adapter"))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await
            .map_err(|e| anyhow::anyhow!(format!("request_device error: {:?}", e)))?;

        let caps = surface.get_capabilities(&adapter);
        let format = caps
            .formats
            .iter()
            .copied()
            .find(|f| {
                matches!(
                    f,
                    wgpu::TextureFormat::Bgra8UnormSrgb | wgpu::TextureFormat::Rgba8UnormSrgb
                )
            })
            .or_else(|| caps.formats.first().copied())
            .ok_or_else(|| anyhow::anyhow!("surface reports no formats"))?;
        let alpha_mode = caps
            .alpha_modes
            .first()
            .copied()
            .unwrap_or(wgpu::CompositeAlphaMode::Auto);
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let targets = RenderTargets::new(&device, width, height);
        let scene_pass = ScenePass::new(&device);
        let post = PostResources::new(&device, format, &targets);

        let mut meshes = MeshRegistry::default();
        for key in [
            MeshKey::Backdrop,
            MeshKey::Box,
            MeshKey::Sphere,
            MeshKey::Cone,
            MeshKey::PhoneScreen,
        ] {
            if let Some(mesh) = key.procedural() {
                meshes.insert(&device, key, &mesh);
            }
        }
        log::info!("[render] webgpu ready {}x{} {:?}", width, height, format);

        Ok(Self {
            surface,
            device,
            queue,
            config,
            targets,
            scene_pass,
            post,
            meshes,
            width,
            height,
        })
    }

    /// Upload a loaded model mesh under its key.
    pub fn upload_mesh(&mut self, key: MeshKey, mesh: &MeshData) {
        self.meshes.insert(&self.device, key, mesh);
        log::debug!("[render] {} meshes resident", self.meshes.len());
    }

    pub fn resize_if_needed(&mut self, width: u32, height: u32) {
        let width = width.max(1);
        let height = height.max(1);
        if width == self.width && height == self.height {
            return;
        }
        self.width = width;
        self.height = height;
        self.config.width = width;
        self.config.height = height;
        self.surface.configure(&self.device, &self.config);
        self.targets.recreate(&self.device, width, height);
        self.post.rebuild_bind_groups(&self.device, &self.targets);
        log::debug!("[render] resized to {}x{}", width, height);
    }

    pub fn render(&mut self, scene: &HeroScene, draws: &[DrawItem]) -> Result<(), wgpu::SurfaceError> {
        let frame = match self.surface.get_current_texture() {
            Ok(frame) => frame,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                self.surface.configure(&self.device, &self.config);
                self.surface.get_current_texture()?
            }
            Err(e) => return Err(e),
        };
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });

        self.scene_pass
            .prepare(&self.device, &self.queue, scene, draws);
        self.scene_pass
            .draw(&mut encoder, &self.targets, &self.meshes);

        self.post.write_uniforms(&self.queue, self.width, self.height);
        self.post.run(&mut encoder, &self.targets, &view);

        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}
