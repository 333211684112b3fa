use super::helpers;

/// Offscreen targets for the reflection path plus the main depth buffer.
///
/// - `depth_*`: full-resolution depth for the main scene pass.
/// - `mirror_color`: half-resolution mirrored-scene color; after the two blur
///   passes it holds the final blurred reflection the floor samples.
/// - `mirror_blur`: half-resolution ping buffer between the blur passes.
/// - `mirror_depth`: depth for the mirrored scene pass.
pub(crate) struct RenderTargets {
    pub(crate) depth_view: wgpu::TextureView,
    pub(crate) mirror_color_view: wgpu::TextureView,
    pub(crate) mirror_blur_view: wgpu::TextureView,
    pub(crate) mirror_depth_view: wgpu::TextureView,
    pub(crate) mirror_width: u32,
    pub(crate) mirror_height: u32,
}

pub(crate) const MIRROR_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Rgba8UnormSrgb;

impl RenderTargets {
    pub(crate) fn new(device: &wgpu::Device, width: u32, height: u32) -> Self {
        let (_, depth_view) = helpers::create_depth_texture(device, "scene_depth", width, height);
        let mw = (width.max(1) / 2).max(1);
        let mh = (height.max(1) / 2).max(1);
        let usage = wgpu::TextureUsages::RENDER_ATTACHMENT | wgpu::TextureUsages::TEXTURE_BINDING;
        let (_, mirror_color_view) =
            helpers::create_color_texture(device, "mirror_color", mw, mh, MIRROR_FORMAT, usage);
        let (_, mirror_blur_view) =
            helpers::create_color_texture(device, "mirror_blur", mw, mh, MIRROR_FORMAT, usage);
        let (_, mirror_depth_view) = helpers::create_depth_texture(device, "mirror_depth", mw, mh);
        Self {
            depth_view,
            mirror_color_view,
            mirror_blur_view,
            mirror_depth_view,
            mirror_width: mw,
            mirror_height: mh,
        }
    }

    pub(crate) fn recreate(&mut self, device: &wgpu::Device, width: u32, height: u32) {
        *self = Self::new(device, width, height);
    }
}
