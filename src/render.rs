use crate::constants::{
    BACKGROUND_COLOR, MIRROR_STRENGTH, MODEL_POSITION, MODEL_ROTATION_Y, TEXT_HEIGHT,
    TEXT_POSITION, Z_FAR, Z_NEAR,
};
use glam::{Mat4, Vec3};
use web_sys as web;

mod helpers;
mod scene;
mod targets;
mod video;

use targets::{RenderTargets, MIRROR_FORMAT};

// Shaders bundled as string constants
pub static SCENE_WGSL: &str = include_str!("../shaders/scene.wgsl");
pub static MIRROR_WGSL: &str = include_str!("../shaders/mirror.wgsl");

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct Globals {
    view_proj: [[f32; 4]; 4],
    mirror_view_proj: [[f32; 4]; 4],
    camera_pos: [f32; 4],
    misc: [f32; 4], // x = mirror strength
}

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct ObjectUniforms {
    model: [[f32; 4]; 4],
    tint: [f32; 4],
    params: [f32; 4],
}

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct BlurUniforms {
    resolution: [f32; 2],
    dir: [f32; 2],
}

/// Preset-derived scene parameters the frame loop hands in every frame.
pub struct SceneParams {
    pub group_y: f32,
    pub model_scale: f32,
    pub fov_deg: f32,
}

// Linear-space tints (#a0a0a0 floor, dark paint for the stand-in car)
const GROUND_TINT: [f32; 4] = [0.3712, 0.3712, 0.3712, 1.0];
const CAR_TINT: [f32; 4] = [0.12, 0.13, 0.16, 1.0];

struct BlurResources {
    pipeline: wgpu::RenderPipeline,
    bgl: wgpu::BindGroupLayout,
    h_buf: wgpu::Buffer,
    v_buf: wgpu::Buffer,
    bg_h: wgpu::BindGroup,
    bg_v: wgpu::BindGroup,
    sampler: wgpu::Sampler,
}

pub struct GpuState<'a> {
    surface: wgpu::Surface<'a>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    scene: scene::SceneResources,
    targets: RenderTargets,
    blur: BlurResources,

    globals_main: wgpu::Buffer,
    globals_mirror: wgpu::Buffer,
    bg_globals_main: wgpu::BindGroup,
    bg_globals_mirror: wgpu::BindGroup,

    width: u32,
    height: u32,
    clear_color: wgpu::Color,
    cam_eye: Vec3,
    cam_look_at: Vec3,
}

impl<'a> GpuState<'a> {
    pub async fn new(
        canvas: &'a web::HtmlCanvasElement,
        document: &web::Document,
        initial_eye: Vec3,
        look_at: Vec3,
    ) -> anyhow::Result<Self> {
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
            .ok_or_else(|| anyhow::anyhow!("no suitable GPU adapter"))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    label: Some("device"),
                    required_features: wgpu::Features::empty(),
                    required_limits: wgpu::Limits::downlevel_webgl2_defaults()
                        .using_resolution(adapter.limits()),
                    memory_hints: wgpu::MemoryHints::Performance,
                },
                None,
            )
            .await
            .map_err(|e| anyhow::anyhow!("request_device failed: {e:?}"))?;

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
            .unwrap_or(caps.formats[0]);
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: caps.alpha_modes[0],
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let targets = RenderTargets::new(&device, width, height);
        let scene = scene::create_scene_resources(
            &device,
            &queue,
            document,
            format,
            &targets.mirror_color_view,
        )?;
        let blur = create_blur_resources(&device, &targets);
        write_blur_uniforms(&queue, &blur, &targets);

        let globals_main = globals_buffer(&device, "globals_main");
        let globals_mirror = globals_buffer(&device, "globals_mirror");
        let bg_globals_main = globals_bind_group(&device, &scene.bgl_globals, &globals_main);
        let bg_globals_mirror = globals_bind_group(&device, &scene.bgl_globals, &globals_mirror);

        Ok(Self {
            surface,
            device,
            queue,
            config,
            scene,
            targets,
            blur,
            globals_main,
            globals_mirror,
            bg_globals_main,
            bg_globals_mirror,
            width,
            height,
            clear_color: wgpu::Color {
                r: BACKGROUND_COLOR[0],
                g: BACKGROUND_COLOR[1],
                b: BACKGROUND_COLOR[2],
                a: 1.0,
            },
            cam_eye: initial_eye,
            cam_look_at: look_at,
        })
    }

    pub fn set_camera(&mut self, eye: Vec3, look_at: Vec3) {
        self.cam_eye = eye;
        self.cam_look_at = look_at;
    }

    pub fn resize_if_needed(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        if width != self.width || height != self.height {
            self.width = width;
            self.height = height;
            self.config.width = width;
            self.config.height = height;
            self.surface.configure(&self.device, &self.config);

            self.targets.recreate(&self.device, width, height);
            self.scene
                .rebuild_ground_bind_group(&self.device, &self.targets.mirror_color_view);
            rebuild_blur_bind_groups(&self.device, &mut self.blur, &self.targets);
            write_blur_uniforms(&self.queue, &self.blur, &self.targets);
        }
    }

    pub fn render(
        &mut self,
        params: &SceneParams,
        video_el: Option<&web::HtmlVideoElement>,
    ) -> Result<(), wgpu::SurfaceError> {
        if let Some(v) = video_el {
            if self.scene.video.update(&self.device, &self.queue, v) {
                self.scene.rebuild_text_bind_group(&self.device);
            }
        }

        let frame = self.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        self.write_frame_uniforms(params);

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });

        // Pass 1: scene through the mirrored camera, into the half-res target
        {
            let mut rpass = scene_pass(
                &mut encoder,
                "mirror_pass",
                &self.targets.mirror_color_view,
                &self.targets.mirror_depth_view,
                self.clear_color,
            );
            rpass.set_bind_group(0, &self.bg_globals_mirror, &[]);
            rpass.set_pipeline(&self.scene.model_mirror_pipeline);
            rpass.set_bind_group(1, &self.scene.bg_car_obj, &[]);
            rpass.set_vertex_buffer(0, self.scene.car.vb.slice(..));
            rpass.draw(0..self.scene.car.count, 0..1);
            rpass.set_pipeline(&self.scene.text_mirror_pipeline);
            rpass.set_bind_group(1, &self.scene.bg_text_obj, &[]);
            rpass.set_bind_group(2, &self.scene.bg_text_tex, &[]);
            rpass.set_vertex_buffer(0, self.scene.text.vb.slice(..));
            rpass.draw(0..self.scene.text.count, 0..1);
        }

        // Passes 2+3: separable blur, ping to the scratch target and back
        blit_blur(
            &mut encoder,
            "mirror_blur_h",
            &self.targets.mirror_blur_view,
            &self.blur.pipeline,
            &self.blur.bg_h,
        );
        blit_blur(
            &mut encoder,
            "mirror_blur_v",
            &self.targets.mirror_color_view,
            &self.blur.pipeline,
            &self.blur.bg_v,
        );

        // Pass 4: main scene to the swapchain
        {
            let mut rpass = scene_pass(
                &mut encoder,
                "scene_pass",
                &view,
                &self.targets.depth_view,
                self.clear_color,
            );
            rpass.set_bind_group(0, &self.bg_globals_main, &[]);
            rpass.set_pipeline(&self.scene.ground_pipeline);
            rpass.set_bind_group(1, &self.scene.bg_ground_obj, &[]);
            rpass.set_bind_group(2, &self.scene.bg_ground_tex, &[]);
            rpass.set_vertex_buffer(0, self.scene.ground.vb.slice(..));
            rpass.draw(0..self.scene.ground.count, 0..1);
            rpass.set_pipeline(&self.scene.model_pipeline);
            rpass.set_bind_group(1, &self.scene.bg_car_obj, &[]);
            rpass.set_vertex_buffer(0, self.scene.car.vb.slice(..));
            rpass.draw(0..self.scene.car.count, 0..1);
            rpass.set_pipeline(&self.scene.text_pipeline);
            rpass.set_bind_group(1, &self.scene.bg_text_obj, &[]);
            rpass.set_bind_group(2, &self.scene.bg_text_tex, &[]);
            rpass.set_vertex_buffer(0, self.scene.text.vb.slice(..));
            rpass.draw(0..self.scene.text.count, 0..1);
        }

        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }

    /// Globals for both passes plus the per-object model matrices.
    fn write_frame_uniforms(&mut self, params: &SceneParams) {
        let aspect = self.width as f32 / self.height.max(1) as f32;
        let proj = Mat4::perspective_rh(params.fov_deg.to_radians(), aspect, Z_NEAR, Z_FAR);
        let view = Mat4::look_at_rh(self.cam_eye, self.cam_look_at, Vec3::Y);

        // The floor sits at the group's height; reflect eye and aim across it.
        let gy = params.group_y;
        let reflect = |p: Vec3| Vec3::new(p.x, 2.0 * gy - p.y, p.z);
        let mirror_view =
            Mat4::look_at_rh(reflect(self.cam_eye), reflect(self.cam_look_at), Vec3::Y);
        let view_proj = proj * view;
        let mirror_view_proj = proj * mirror_view;

        let misc = [MIRROR_STRENGTH, 0.0, 0.0, 0.0];
        let main = Globals {
            view_proj: view_proj.to_cols_array_2d(),
            mirror_view_proj: mirror_view_proj.to_cols_array_2d(),
            camera_pos: [self.cam_eye.x, self.cam_eye.y, self.cam_eye.z, 1.0],
            misc,
        };
        let mirror = Globals {
            view_proj: mirror_view_proj.to_cols_array_2d(),
            mirror_view_proj: mirror_view_proj.to_cols_array_2d(),
            camera_pos: [self.cam_eye.x, 2.0 * gy - self.cam_eye.y, self.cam_eye.z, 1.0],
            misc,
        };
        self.queue
            .write_buffer(&self.globals_main, 0, bytemuck::bytes_of(&main));
        self.queue
            .write_buffer(&self.globals_mirror, 0, bytemuck::bytes_of(&mirror));

        let group = Mat4::from_translation(Vec3::new(0.0, gy, 0.0));
        let car_model = group
            * Mat4::from_translation(MODEL_POSITION)
            * Mat4::from_rotation_y(MODEL_ROTATION_Y)
            * Mat4::from_scale(Vec3::splat(params.model_scale));
        let text_model = group
            * Mat4::from_translation(TEXT_POSITION)
            * Mat4::from_scale(Vec3::new(
                TEXT_HEIGHT * self.scene.mask_aspect,
                TEXT_HEIGHT,
                1.0,
            ));

        let object = |model: Mat4, tint: [f32; 4]| ObjectUniforms {
            model: model.to_cols_array_2d(),
            tint,
            params: [0.0; 4],
        };
        self.queue.write_buffer(
            &self.scene.ground_obj,
            0,
            bytemuck::bytes_of(&object(group, GROUND_TINT)),
        );
        self.queue.write_buffer(
            &self.scene.car_obj,
            0,
            bytemuck::bytes_of(&object(car_model, CAR_TINT)),
        );
        self.queue.write_buffer(
            &self.scene.text_obj,
            0,
            bytemuck::bytes_of(&object(text_model, [1.0; 4])),
        );
    }
}

fn globals_buffer(device: &wgpu::Device, label: &str) -> wgpu::Buffer {
    device.create_buffer(&wgpu::BufferDescriptor {
        label: Some(label),
        size: std::mem::size_of::<Globals>() as u64,
        usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    })
}

fn globals_bind_group(
    device: &wgpu::Device,
    layout: &wgpu::BindGroupLayout,
    buf: &wgpu::Buffer,
) -> wgpu::BindGroup {
    device.create_bind_group(&wgpu::BindGroupDescriptor {
        label: Some("bg_globals"),
        layout,
        entries: &[wgpu::BindGroupEntry {
            binding: 0,
            resource: buf.as_entire_binding(),
        }],
    })
}

fn scene_pass<'e>(
    encoder: &'e mut wgpu::CommandEncoder,
    label: &str,
    color: &wgpu::TextureView,
    depth: &wgpu::TextureView,
    clear: wgpu::Color,
) -> wgpu::RenderPass<'e> {
    encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
        label: Some(label),
        color_attachments: &[Some(wgpu::RenderPassColorAttachment {
            view: color,
            resolve_target: None,
            ops: wgpu::Operations {
                load: wgpu::LoadOp::Clear(clear),
                store: wgpu::StoreOp::Store,
            },
        })],
        depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
            view: depth,
            depth_ops: Some(wgpu::Operations {
                load: wgpu::LoadOp::Clear(1.0),
                store: wgpu::StoreOp::Store,
            }),
            stencil_ops: None,
        }),
        timestamp_writes: None,
        occlusion_query_set: None,
    })
}

fn blit_blur(
    encoder: &mut wgpu::CommandEncoder,
    label: &str,
    target: &wgpu::TextureView,
    pipeline: &wgpu::RenderPipeline,
    bg: &wgpu::BindGroup,
) {
    let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
        label: Some(label),
        color_attachments: &[Some(wgpu::RenderPassColorAttachment {
            view: target,
            resolve_target: None,
            ops: wgpu::Operations {
                load: wgpu::LoadOp::Clear(wgpu::Color::BLACK),
                store: wgpu::StoreOp::Store,
            },
        })],
        depth_stencil_attachment: None,
        timestamp_writes: None,
        occlusion_query_set: None,
    });
    rpass.set_pipeline(pipeline);
    rpass.set_bind_group(0, bg, &[]);
    rpass.draw(0..3, 0..1);
}

fn create_blur_resources(device: &wgpu::Device, targets: &RenderTargets) -> BlurResources {
    let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("mirror_shader"),
        source: wgpu::ShaderSource::Wgsl(MIRROR_WGSL.into()),
    });
    let bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some("blur_bgl"),
        entries: &[
            wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Texture {
                    multisampled: false,
                    view_dimension: wgpu::TextureViewDimension::D2,
                    sample_type: wgpu::TextureSampleType::Float { filterable: true },
                },
                count: None,
            },
            wgpu::BindGroupLayoutEntry {
                binding: 1,
                visibility: wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                count: None,
            },
            wgpu::BindGroupLayoutEntry {
                binding: 2,
                visibility: wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            },
        ],
    });
    let layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("pl_blur"),
        bind_group_layouts: &[&bgl],
        push_constant_ranges: &[],
    });
    let pipeline =
        helpers::make_blit_pipeline(device, "blur_pipeline", &layout, &shader, MIRROR_FORMAT);
    let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
        label: Some("blur_sampler"),
        address_mode_u: wgpu::AddressMode::ClampToEdge,
        address_mode_v: wgpu::AddressMode::ClampToEdge,
        mag_filter: wgpu::FilterMode::Linear,
        min_filter: wgpu::FilterMode::Linear,
        ..Default::default()
    });
    let uniform = |label: &str| {
        device.create_buffer(&wgpu::BufferDescriptor {
            label: Some(label),
            size: std::mem::size_of::<BlurUniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        })
    };
    let h_buf = uniform("blur_h_uniforms");
    let v_buf = uniform("blur_v_uniforms");
    let (bg_h, bg_v) = make_blur_bind_groups(device, &bgl, &sampler, &h_buf, &v_buf, targets);
    BlurResources {
        pipeline,
        bgl,
        h_buf,
        v_buf,
        bg_h,
        bg_v,
        sampler,
    }
}

fn make_blur_bind_groups(
    device: &wgpu::Device,
    bgl: &wgpu::BindGroupLayout,
    sampler: &wgpu::Sampler,
    h_buf: &wgpu::Buffer,
    v_buf: &wgpu::Buffer,
    targets: &RenderTargets,
) -> (wgpu::BindGroup, wgpu::BindGroup) {
    let make = |label: &str, src: &wgpu::TextureView, buf: &wgpu::Buffer| {
        device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some(label),
            layout: bgl,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: wgpu::BindingResource::TextureView(src),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::Sampler(sampler),
                },
                wgpu::BindGroupEntry {
                    binding: 2,
                    resource: buf.as_entire_binding(),
                },
            ],
        })
    };
    (
        make("bg_blur_h", &targets.mirror_color_view, h_buf),
        make("bg_blur_v", &targets.mirror_blur_view, v_buf),
    )
}

fn rebuild_blur_bind_groups(
    device: &wgpu::Device,
    blur: &mut BlurResources,
    targets: &RenderTargets,
) {
    let (bg_h, bg_v) = make_blur_bind_groups(
        device,
        &blur.bgl,
        &blur.sampler,
        &blur.h_buf,
        &blur.v_buf,
        targets,
    );
    blur.bg_h = bg_h;
    blur.bg_v = bg_v;
}

fn write_blur_uniforms(queue: &wgpu::Queue, blur: &BlurResources, targets: &RenderTargets) {
    let resolution = [targets.mirror_width as f32, targets.mirror_height as f32];
    queue.write_buffer(
        &blur.h_buf,
        0,
        bytemuck::bytes_of(&BlurUniforms {
            resolution,
            dir: [1.0, 0.0],
        }),
    );
    queue.write_buffer(
        &blur.v_buf,
        0,
        bytemuck::bytes_of(&BlurUniforms {
            resolution,
            dir: [0.0, 1.0],
        }),
    );
}
