//! WebGPU render pipeline setup
//!
//! Static geometry (field and posts) is uploaded once. The two footballs are
//! re-posed from the match state every frame.

use bytemuck::{Pod, Zeroable};
use glam::Mat4;
use wgpu::util::DeviceExt;

use super::shapes;
use super::vertex::Vertex;
use crate::camera::OrbitCamera;
use crate::error::RenderError;
use crate::scene::Scene;
use crate::settings::Settings;
use crate::sim::{MatchState, Side};

const DEPTH_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth32Float;

// Must match the shader's Globals
#[repr(C)]
#[derive(Copy, Clone, Pod, Zeroable)]
struct Globals {
    view_proj: [[f32; 4]; 4],
    light_dir: [f32; 4],
    light_color: [f32; 4],
}

/// Main render state
pub struct RenderState {
    pub surface: wgpu::Surface<'static>,
    pub device: wgpu::Device,
    pub queue: wgpu::Queue,
    pub config: wgpu::SurfaceConfiguration,
    pub pipeline: wgpu::RenderPipeline,
    globals: Globals,
    globals_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
    depth_view: wgpu::TextureView,
    static_buffer: wgpu::Buffer,
    static_count: u32,
    /// Football mesh in local space, shared by both balls
    football_mesh: Vec<Vertex>,
    football_colors: [[f32; 4]; 2],
    balls_buffer: wgpu::Buffer,
    clear_color: wgpu::Color,
    /// Viewport size in pixels
    pub size: (u32, u32),
}

fn create_depth_view(device: &wgpu::Device, width: u32, height: u32) -> wgpu::TextureView {
    let texture = device.create_texture(&wgpu::TextureDescriptor {
        label: Some("depth_texture"),
        size: wgpu::Extent3d {
            width: width.max(1),
            height: height.max(1),
            depth_or_array_layers: 1,
        },
        mip_level_count: 1,
        sample_count: 1,
        dimension: wgpu::TextureDimension::D2,
        format: DEPTH_FORMAT,
        usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
        view_formats: &[],
    });
    texture.create_view(&wgpu::TextureViewDescriptor::default())
}

impl RenderState {
    pub async fn new(
        surface: wgpu::Surface<'static>,
        adapter: &wgpu::Adapter,
        width: u32,
        height: u32,
        scene: &Scene,
        settings: &Settings,
    ) -> Result<Self, RenderError> {
        let (device, queue) = adapter
            .request_device(&wgpu::DeviceDescriptor {
                label: Some("goal-kick-device"),
                required_features: wgpu::Features::empty(),
                required_limits: wgpu::Limits::downlevel_webgl2_defaults(),
                memory_hints: Default::default(),
                trace: Default::default(),
                experimental_features: Default::default(),
            })
            .await?;

        let surface_caps = surface.get_capabilities(adapter);
        let surface_format = surface_caps
            .formats
            .iter()
            .find(|f| f.is_srgb())
            .or_else(|| surface_caps.formats.first())
            .copied()
            .ok_or(RenderError::NoSurfaceFormat)?;
        log::info!("Using surface format: {:?}", surface_format);

        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: surface_format,
            width,
            height,
            present_mode: wgpu::PresentMode::AutoVsync,
            alpha_mode: surface_caps
                .alpha_modes
                .first()
                .copied()
                .unwrap_or(wgpu::CompositeAlphaMode::Auto),
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("shader.wgsl").into()),
        });

        let light_dir = scene.light.direction();
        let light_color = scene.light.color;
        let globals = Globals {
            view_proj: Mat4::IDENTITY.to_cols_array_2d(),
            light_dir: [light_dir.x, light_dir.y, light_dir.z, scene.light.ambient],
            light_color: [
                light_color[0],
                light_color[1],
                light_color[2],
                scene.light.intensity,
            ],
        };
        let globals_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("globals"),
            contents: bytemuck::bytes_of(&globals),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });

        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("globals_bind_group_layout"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            }],
        });

        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("globals_bind_group"),
            layout: &bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: globals_buffer.as_entire_binding(),
            }],
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("pipeline_layout"),
            bind_group_layouts: &[&bind_group_layout],
            immediate_size: 0,
        });

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("render_pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                buffers: &[Vertex::desc()],
                compilation_options: Default::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                targets: &[Some(wgpu::ColorTargetState {
                    format: config.format,
                    blend: Some(wgpu::BlendState::REPLACE),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: Default::default(),
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: None,
                polygon_mode: wgpu::PolygonMode::Fill,
                unclipped_depth: false,
                conservative: false,
            },
            depth_stencil: Some(wgpu::DepthStencilState {
                format: DEPTH_FORMAT,
                depth_write_enabled: true,
                depth_compare: wgpu::CompareFunction::Less,
                stencil: wgpu::StencilState::default(),
                bias: wgpu::DepthBiasState::default(),
            }),
            multisample: wgpu::MultisampleState::default(),
            multiview_mask: None,
            cache: None,
        });

        // Field and posts never move
        let segments = settings.quality.radial_segments();
        let mut static_vertices = shapes::field(&scene.field, segments * 2);
        for post in &scene.posts {
            static_vertices.extend(shapes::cylinder(post, segments));
        }
        let static_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("static_vertices"),
            contents: bytemuck::cast_slice(&static_vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });

        let football_mesh = shapes::capsule(
            scene.football.radius,
            scene.football.length,
            settings.quality.cap_segments(),
            segments,
            [1.0; 4],
        );
        let balls_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("ball_vertices"),
            size: (std::mem::size_of::<Vertex>() * football_mesh.len() * Side::ALL.len()) as u64,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let [r, g, b, a] = scene.background;
        log::info!(
            "Scene uploaded: {} static vertices, {} per football",
            static_vertices.len(),
            football_mesh.len()
        );

        Ok(Self {
            depth_view: create_depth_view(&device, width, height),
            surface,
            device,
            queue,
            config,
            pipeline,
            globals,
            globals_buffer,
            bind_group,
            static_buffer,
            static_count: static_vertices.len() as u32,
            football_colors: [
                scene.football.color(Side::Player),
                scene.football.color(Side::Computer),
            ],
            football_mesh,
            balls_buffer,
            clear_color: wgpu::Color {
                r: r as f64,
                g: g as f64,
                b: b as f64,
                a: a as f64,
            },
            size: (width, height),
        })
    }

    pub fn resize(&mut self, new_width: u32, new_height: u32) {
        if new_width > 0 && new_height > 0 {
            self.size = (new_width, new_height);
            self.config.width = new_width;
            self.config.height = new_height;
            self.surface.configure(&self.device, &self.config);
            self.depth_view = create_depth_view(&self.device, new_width, new_height);
        }
    }

    /// Pose both footballs from the match state
    fn football_vertices(&self, state: &MatchState) -> Vec<Vertex> {
        let mut vertices = Vec::with_capacity(self.football_mesh.len() * Side::ALL.len());
        for (side, color) in Side::ALL.into_iter().zip(self.football_colors) {
            let flight = state.flight(side);
            let matrix =
                Mat4::from_translation(flight.position) * Mat4::from_rotation_z(flight.spin);
            vertices.extend(
                shapes::transform(&self.football_mesh, matrix).map(|v| Vertex { color, ..v }),
            );
        }
        vertices
    }

    /// Upload per-frame data and render
    pub fn render(
        &mut self,
        state: &MatchState,
        camera: &OrbitCamera,
    ) -> Result<(), wgpu::SurfaceError> {
        self.globals.view_proj = camera.view_proj().to_cols_array_2d();
        self.queue
            .write_buffer(&self.globals_buffer, 0, bytemuck::bytes_of(&self.globals));

        let balls = self.football_vertices(state);
        self.queue
            .write_buffer(&self.balls_buffer, 0, bytemuck::cast_slice(&balls));

        let output = self.surface.get_current_texture()?;
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("render_encoder"),
            });

        {
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("render_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
                        store: wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.depth_view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
                multiview_mask: None,
            });

            render_pass.set_pipeline(&self.pipeline);
            render_pass.set_bind_group(0, &self.bind_group, &[]);
            render_pass.set_vertex_buffer(0, self.static_buffer.slice(..));
            render_pass.draw(0..self.static_count, 0..1);
            render_pass.set_vertex_buffer(0, self.balls_buffer.slice(..));
            render_pass.draw(0..balls.len() as u32, 0..1);
        }

        self.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        Ok(())
    }
}
