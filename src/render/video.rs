use wasm_bindgen::JsCast;
use web_sys as web;

// HTMLMediaElement.readyState at which the current frame can be copied
const HAVE_CURRENT_DATA: u16 = 2;

/// GPU texture refreshed from an `HtmlVideoElement` each frame. Starts as a
/// 1x1 dark placeholder until the video reports a decodable frame, then is
/// recreated at the footage's native size.
pub(crate) struct VideoTexture {
    pub(crate) texture: wgpu::Texture,
    pub(crate) view: wgpu::TextureView,
    width: u32,
    height: u32,
}

const VIDEO_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Rgba8UnormSrgb;

fn create(device: &wgpu::Device, width: u32, height: u32) -> (wgpu::Texture, wgpu::TextureView) {
    let tex = device.create_texture(&wgpu::TextureDescriptor {
        label: Some("video_tex"),
        size: wgpu::Extent3d {
            width,
            height,
            depth_or_array_layers: 1,
        },
        mip_level_count: 1,
        sample_count: 1,
        dimension: wgpu::TextureDimension::D2,
        format: VIDEO_FORMAT,
        // copyExternalImageToTexture requires both COPY_DST and
        // RENDER_ATTACHMENT on the destination
        usage: wgpu::TextureUsages::TEXTURE_BINDING
            | wgpu::TextureUsages::COPY_DST
            | wgpu::TextureUsages::RENDER_ATTACHMENT,
        view_formats: &[],
    });
    let view = tex.create_view(&wgpu::TextureViewDescriptor::default());
    (tex, view)
}

impl VideoTexture {
    pub(crate) fn new(device: &wgpu::Device) -> Self {
        let (texture, view) = create(device, 1, 1);
        Self {
            texture,
            view,
            width: 1,
            height: 1,
        }
    }

    /// Copy the current video frame in. Returns `true` when the underlying
    /// texture was recreated (the caller must rebuild bind groups).
    pub(crate) fn update(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        video: &web::HtmlVideoElement,
    ) -> bool {
        if video.ready_state() < HAVE_CURRENT_DATA {
            return false;
        }
        let (vw, vh) = (video.video_width().max(1), video.video_height().max(1));
        let recreated = vw != self.width || vh != self.height;
        if recreated {
            let (texture, view) = create(device, vw, vh);
            self.texture = texture;
            self.view = view;
            self.width = vw;
            self.height = vh;
        }
        queue.copy_external_image_to_texture(
            &wgpu::CopyExternalImageSourceInfo {
                source: wgpu::ExternalImageSource::HTMLVideoElement(video.clone()),
                origin: wgpu::Origin2d::ZERO,
                flip_y: false,
            },
            wgpu::CopyExternalImageDestInfo {
                texture: &self.texture,
                mip_level: 0,
                origin: wgpu::Origin3d::ZERO,
                aspect: wgpu::TextureAspect::All,
                color_space: wgpu::PredefinedColorSpace::Srgb,
                premultiplied_alpha: false,
            },
            wgpu::Extent3d {
                width: vw,
                height: vh,
                depth_or_array_layers: 1,
            },
        );
        recreated
    }
}

/// Rasterize the headline on an offscreen 2D canvas and upload it as an
/// alpha mask. Returns the view and the mask's width/height aspect so the
/// text quad can be sized to match.
pub(crate) fn rasterize_text_mask(
    device: &wgpu::Device,
    queue: &wgpu::Queue,
    document: &web::Document,
    text: &str,
) -> anyhow::Result<(wgpu::TextureView, f32)> {
    let canvas: web::HtmlCanvasElement = document
        .create_element("canvas")
        .map_err(|e| anyhow::anyhow!("mask canvas: {:?}", e))?
        .dyn_into()
        .map_err(|e| anyhow::anyhow!("mask canvas cast: {:?}", e))?;
    let ctx: web::CanvasRenderingContext2d = canvas
        .get_context("2d")
        .map_err(|e| anyhow::anyhow!("2d context: {:?}", e))?
        .ok_or_else(|| anyhow::anyhow!("no 2d context"))?
        .dyn_into()
        .map_err(|e| anyhow::anyhow!("2d context cast: {:?}", e))?;

    let font = "bold 160px 'Lemon Milk', 'Arial Black', sans-serif";
    ctx.set_font(font);
    let metrics = ctx
        .measure_text(text)
        .map_err(|e| anyhow::anyhow!("measure text: {:?}", e))?;
    let text_w = metrics.width().max(1.0);
    let pad = 24.0;
    let width = (text_w + pad * 2.0).ceil() as u32;
    let height = 224u32;
    canvas.set_width(width);
    canvas.set_height(height);

    // Resizing resets the context state; set the font again before drawing.
    ctx.set_font(font);
    ctx.set_text_baseline("middle");
    ctx.set_fill_style_str("#ffffff");
    ctx.fill_text(text, pad, f64::from(height) / 2.0)
        .map_err(|e| anyhow::anyhow!("fill text: {:?}", e))?;

    let image = ctx
        .get_image_data(0.0, 0.0, f64::from(width), f64::from(height))
        .map_err(|e| anyhow::anyhow!("image data: {:?}", e))?;
    let pixels = image.data();

    let tex = device.create_texture(&wgpu::TextureDescriptor {
        label: Some("text_mask"),
        size: wgpu::Extent3d {
            width,
            height,
            depth_or_array_layers: 1,
        },
        mip_level_count: 1,
        sample_count: 1,
        dimension: wgpu::TextureDimension::D2,
        format: wgpu::TextureFormat::Rgba8Unorm,
        usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
        view_formats: &[],
    });
    queue.write_texture(
        wgpu::TexelCopyTextureInfo {
            texture: &tex,
            mip_level: 0,
            origin: wgpu::Origin3d::ZERO,
            aspect: wgpu::TextureAspect::All,
        },
        &pixels,
        wgpu::TexelCopyBufferLayout {
            offset: 0,
            bytes_per_row: Some(width * 4),
            rows_per_image: Some(height),
        },
        wgpu::Extent3d {
            width,
            height,
            depth_or_array_layers: 1,
        },
    );
    let view = tex.create_view(&wgpu::TextureViewDescriptor::default());
    Ok((view, width as f32 / height as f32))
}
