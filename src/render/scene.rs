use super::helpers;
use super::targets::MIRROR_FORMAT;
use super::video::{self, VideoTexture};
use super::{ObjectUniforms, SCENE_WGSL};
use crate::constants::GROUND_EXTENT;
use web_sys as web;
use wgpu::util::DeviceExt;

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct Vertex {
    pos: [f32; 3],
    normal: [f32; 3],
    uv: [f32; 2],
}

pub(crate) struct Mesh {
    pub(crate) vb: wgpu::Buffer,
    pub(crate) count: u32,
}

fn upload_mesh(device: &wgpu::Device, label: &str, vertices: &[Vertex]) -> Mesh {
    let vb = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some(label),
        contents: bytemuck::cast_slice(vertices),
        usage: wgpu::BufferUsages::VERTEX,
    });
    Mesh {
        vb,
        count: vertices.len() as u32,
    }
}

// 20x20 plane in XZ at y = 0, facing up.
fn build_ground() -> Vec<Vertex> {
    let h = GROUND_EXTENT / 2.0;
    let n = [0.0, 1.0, 0.0];
    let corners = [
        ([-h, 0.0, -h], [0.0, 0.0]),
        ([h, 0.0, -h], [1.0, 0.0]),
        ([h, 0.0, h], [1.0, 1.0]),
        ([-h, 0.0, h], [0.0, 1.0]),
    ];
    let idx = [0usize, 2, 1, 0, 3, 2];
    idx.iter()
        .map(|&i| Vertex {
            pos: corners[i].0,
            normal: n,
            uv: corners[i].1,
        })
        .collect()
}

fn push_box(out: &mut Vec<Vertex>, center: [f32; 3], half: [f32; 3]) {
    let [cx, cy, cz] = center;
    let [hx, hy, hz] = half;
    // (normal, two in-plane axes) per face
    let faces: [([f32; 3], [f32; 3], [f32; 3]); 6] = [
        ([1.0, 0.0, 0.0], [0.0, 0.0, -1.0], [0.0, 1.0, 0.0]),
        ([-1.0, 0.0, 0.0], [0.0, 0.0, 1.0], [0.0, 1.0, 0.0]),
        ([0.0, 1.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, -1.0]),
        ([0.0, -1.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, 1.0]),
        ([0.0, 0.0, 1.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]),
        ([0.0, 0.0, -1.0], [-1.0, 0.0, 0.0], [0.0, 1.0, 0.0]),
    ];
    for (n, u, v) in faces {
        let fc = [cx + n[0] * hx, cy + n[1] * hy, cz + n[2] * hz];
        let ue = [u[0] * hx, u[1] * hy, u[2] * hz];
        let ve = [v[0] * hx, v[1] * hy, v[2] * hz];
        let corner = |su: f32, sv: f32| Vertex {
            pos: [
                fc[0] + su * ue[0] + sv * ve[0],
                fc[1] + su * ue[1] + sv * ve[1],
                fc[2] + su * ue[2] + sv * ve[2],
            ],
            normal: n,
            uv: [su * 0.5 + 0.5, sv * 0.5 + 0.5],
        };
        let quad = [
            corner(-1.0, -1.0),
            corner(1.0, -1.0),
            corner(1.0, 1.0),
            corner(-1.0, -1.0),
            corner(1.0, 1.0),
            corner(-1.0, 1.0),
        ];
        out.extend_from_slice(&quad);
    }
}

// Blocked-out stand-in for the car asset, in asset units (about eight long);
// the per-preset model scale brings it to world size.
// TODO: replace with the decoded glb mesh once asset decoding lands.
fn build_car() -> Vec<Vertex> {
    let mut v = Vec::new();
    // body
    push_box(&mut v, [0.0, 1.0, 0.0], [1.7, 0.55, 4.0]);
    // cabin
    push_box(&mut v, [0.0, 1.95, -0.3], [1.45, 0.45, 1.9]);
    // wheels
    for (x, z) in [(-1.45, 2.6), (1.45, 2.6), (-1.45, -2.6), (1.45, -2.6)] {
        push_box(&mut v, [x, 0.45, z], [0.25, 0.45, 0.45]);
    }
    v
}

// Unit quad in XY facing +Z; scaled to the headline size by its model matrix.
fn build_text_quad() -> Vec<Vertex> {
    let n = [0.0, 0.0, 1.0];
    let corners = [
        ([-0.5, -0.5, 0.0], [0.0, 1.0]),
        ([0.5, -0.5, 0.0], [1.0, 1.0]),
        ([0.5, 0.5, 0.0], [1.0, 0.0]),
        ([-0.5, 0.5, 0.0], [0.0, 0.0]),
    ];
    let idx = [0usize, 1, 2, 0, 2, 3];
    idx.iter()
        .map(|&i| Vertex {
            pos: corners[i].0,
            normal: n,
            uv: corners[i].1,
        })
        .collect()
}

/// Everything the two scene passes draw: meshes, per-object uniforms, the
/// material bind groups and the pipelines for both output formats.
pub(crate) struct SceneResources {
    pub(crate) ground: Mesh,
    pub(crate) car: Mesh,
    pub(crate) text: Mesh,

    pub(crate) ground_obj: wgpu::Buffer,
    pub(crate) car_obj: wgpu::Buffer,
    pub(crate) text_obj: wgpu::Buffer,
    pub(crate) bg_ground_obj: wgpu::BindGroup,
    pub(crate) bg_car_obj: wgpu::BindGroup,
    pub(crate) bg_text_obj: wgpu::BindGroup,

    pub(crate) bgl_globals: wgpu::BindGroupLayout,
    bgl_ground_tex: wgpu::BindGroupLayout,
    bgl_text_tex: wgpu::BindGroupLayout,
    pub(crate) bg_ground_tex: wgpu::BindGroup,
    pub(crate) bg_text_tex: wgpu::BindGroup,

    pub(crate) ground_pipeline: wgpu::RenderPipeline,
    pub(crate) model_pipeline: wgpu::RenderPipeline,
    pub(crate) text_pipeline: wgpu::RenderPipeline,
    pub(crate) model_mirror_pipeline: wgpu::RenderPipeline,
    pub(crate) text_mirror_pipeline: wgpu::RenderPipeline,

    pub(crate) video: VideoTexture,
    mask_view: wgpu::TextureView,
    pub(crate) mask_aspect: f32,
    sampler: wgpu::Sampler,
}

fn uniform_entry(binding: u32) -> wgpu::BindGroupLayoutEntry {
    wgpu::BindGroupLayoutEntry {
        binding,
        visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
        ty: wgpu::BindingType::Buffer {
            ty: wgpu::BufferBindingType::Uniform,
            has_dynamic_offset: false,
            min_binding_size: None,
        },
        count: None,
    }
}

fn texture_entry(binding: u32) -> wgpu::BindGroupLayoutEntry {
    wgpu::BindGroupLayoutEntry {
        binding,
        visibility: wgpu::ShaderStages::FRAGMENT,
        ty: wgpu::BindingType::Texture {
            multisampled: false,
            view_dimension: wgpu::TextureViewDimension::D2,
            sample_type: wgpu::TextureSampleType::Float { filterable: true },
        },
        count: None,
    }
}

fn sampler_entry(binding: u32) -> wgpu::BindGroupLayoutEntry {
    wgpu::BindGroupLayoutEntry {
        binding,
        visibility: wgpu::ShaderStages::FRAGMENT,
        ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
        count: None,
    }
}

fn object_buffer(device: &wgpu::Device, label: &str) -> wgpu::Buffer {
    device.create_buffer(&wgpu::BufferDescriptor {
        label: Some(label),
        size: std::mem::size_of::<ObjectUniforms>() as u64,
        usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    })
}

pub(crate) fn create_scene_resources(
    device: &wgpu::Device,
    queue: &wgpu::Queue,
    document: &web::Document,
    surface_format: wgpu::TextureFormat,
    mirror_view: &wgpu::TextureView,
) -> anyhow::Result<SceneResources> {
    let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("scene_shader"),
        source: wgpu::ShaderSource::Wgsl(SCENE_WGSL.into()),
    });

    let bgl_globals = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some("bgl_globals"),
        entries: &[uniform_entry(0)],
    });
    let bgl_object = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some("bgl_object"),
        entries: &[uniform_entry(0)],
    });
    let bgl_ground_tex = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some("bgl_ground_tex"),
        entries: &[texture_entry(0), sampler_entry(1)],
    });
    let bgl_text_tex = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some("bgl_text_tex"),
        entries: &[texture_entry(3), sampler_entry(4), texture_entry(5)],
    });

    let pl_model = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("pl_model"),
        bind_group_layouts: &[&bgl_globals, &bgl_object],
        push_constant_ranges: &[],
    });
    let pl_ground = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("pl_ground"),
        bind_group_layouts: &[&bgl_globals, &bgl_object, &bgl_ground_tex],
        push_constant_ranges: &[],
    });
    let pl_text = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("pl_text"),
        bind_group_layouts: &[&bgl_globals, &bgl_object, &bgl_text_tex],
        push_constant_ranges: &[],
    });

    let ground_pipeline = helpers::make_scene_pipeline(
        device,
        "ground_pipeline",
        &pl_ground,
        &shader,
        "fs_ground",
        surface_format,
        None,
        true,
    );
    let model_pipeline = helpers::make_scene_pipeline(
        device,
        "model_pipeline",
        &pl_model,
        &shader,
        "fs_model",
        surface_format,
        None,
        true,
    );
    // Text blends over the scene and leaves depth alone.
    let text_pipeline = helpers::make_scene_pipeline(
        device,
        "text_pipeline",
        &pl_text,
        &shader,
        "fs_text",
        surface_format,
        Some(wgpu::BlendState::ALPHA_BLENDING),
        false,
    );
    let model_mirror_pipeline = helpers::make_scene_pipeline(
        device,
        "model_mirror_pipeline",
        &pl_model,
        &shader,
        "fs_model",
        MIRROR_FORMAT,
        None,
        true,
    );
    let text_mirror_pipeline = helpers::make_scene_pipeline(
        device,
        "text_mirror_pipeline",
        &pl_text,
        &shader,
        "fs_text",
        MIRROR_FORMAT,
        Some(wgpu::BlendState::ALPHA_BLENDING),
        false,
    );

    let ground = upload_mesh(device, "ground_vb", &build_ground());
    let car = upload_mesh(device, "car_vb", &build_car());
    let text = upload_mesh(device, "text_vb", &build_text_quad());

    let ground_obj = object_buffer(device, "ground_obj");
    let car_obj = object_buffer(device, "car_obj");
    let text_obj = object_buffer(device, "text_obj");
    let object_bg = |buf: &wgpu::Buffer, label: &str| {
        device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some(label),
            layout: &bgl_object,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: buf.as_entire_binding(),
            }],
        })
    };
    let bg_ground_obj = object_bg(&ground_obj, "bg_ground_obj");
    let bg_car_obj = object_bg(&car_obj, "bg_car_obj");
    let bg_text_obj = object_bg(&text_obj, "bg_text_obj");

    let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
        label: Some("linear_sampler"),
        address_mode_u: wgpu::AddressMode::ClampToEdge,
        address_mode_v: wgpu::AddressMode::ClampToEdge,
        address_mode_w: wgpu::AddressMode::ClampToEdge,
        mag_filter: wgpu::FilterMode::Linear,
        min_filter: wgpu::FilterMode::Linear,
        mipmap_filter: wgpu::FilterMode::Linear,
        ..Default::default()
    });

    let video = VideoTexture::new(device);
    let (mask_view, mask_aspect) = video::rasterize_text_mask(device, queue, document, "Coming Soon")?;

    let bg_ground_tex = make_ground_tex_bg(device, &bgl_ground_tex, mirror_view, &sampler);
    let bg_text_tex = make_text_tex_bg(device, &bgl_text_tex, &video.view, &mask_view, &sampler);

    Ok(SceneResources {
        ground,
        car,
        text,
        ground_obj,
        car_obj,
        text_obj,
        bg_ground_obj,
        bg_car_obj,
        bg_text_obj,
        bgl_globals,
        bgl_ground_tex,
        bgl_text_tex,
        bg_ground_tex,
        bg_text_tex,
        ground_pipeline,
        model_pipeline,
        text_pipeline,
        model_mirror_pipeline,
        text_mirror_pipeline,
        video,
        mask_view,
        mask_aspect,
        sampler,
    })
}

fn make_ground_tex_bg(
    device: &wgpu::Device,
    layout: &wgpu::BindGroupLayout,
    mirror_view: &wgpu::TextureView,
    sampler: &wgpu::Sampler,
) -> wgpu::BindGroup {
    device.create_bind_group(&wgpu::BindGroupDescriptor {
        label: Some("bg_ground_tex"),
        layout,
        entries: &[
            wgpu::BindGroupEntry {
                binding: 0,
                resource: wgpu::BindingResource::TextureView(mirror_view),
            },
            wgpu::BindGroupEntry {
                binding: 1,
                resource: wgpu::BindingResource::Sampler(sampler),
            },
        ],
    })
}

fn make_text_tex_bg(
    device: &wgpu::Device,
    layout: &wgpu::BindGroupLayout,
    video_view: &wgpu::TextureView,
    mask_view: &wgpu::TextureView,
    sampler: &wgpu::Sampler,
) -> wgpu::BindGroup {
    device.create_bind_group(&wgpu::BindGroupDescriptor {
        label: Some("bg_text_tex"),
        layout,
        entries: &[
            wgpu::BindGroupEntry {
                binding: 3,
                resource: wgpu::BindingResource::TextureView(video_view),
            },
            wgpu::BindGroupEntry {
                binding: 4,
                resource: wgpu::BindingResource::Sampler(sampler),
            },
            wgpu::BindGroupEntry {
                binding: 5,
                resource: wgpu::BindingResource::TextureView(mask_view),
            },
        ],
    })
}

impl SceneResources {
    pub(crate) fn rebuild_ground_bind_group(
        &mut self,
        device: &wgpu::Device,
        mirror_view: &wgpu::TextureView,
    ) {
        self.bg_ground_tex =
            make_ground_tex_bg(device, &self.bgl_ground_tex, mirror_view, &self.sampler);
    }

    pub(crate) fn rebuild_text_bind_group(&mut self, device: &wgpu::Device) {
        self.bg_text_tex = make_text_tex_bg(
            device,
            &self.bgl_text_tex,
            &self.video.view,
            &self.mask_view,
            &self.sampler,
        );
    }
}
