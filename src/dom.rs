use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Match the canvas backing store to its CSS size times the device pixel
/// ratio, capped by the active preset (mobile renders at 1x, desktop up to
/// 1.5x). Applied at mount and on every resize.
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement, pixel_ratio_max: f32) {
    if let Some(w) = web::window() {
        let dpr = w.device_pixel_ratio().min(f64::from(pixel_ratio_max));
        let rect = canvas.get_bounding_client_rect();
        let w_px = (rect.width() * dpr) as u32;
        let h_px = (rect.height() * dpr) as u32;
        canvas.set_width(w_px.max(1));
        canvas.set_height(h_px.max(1));
    }
}

/// Viewport size in CSS pixels, for normalizing input coordinates.
pub fn viewport_size() -> (f32, f32) {
    match web::window() {
        Some(w) => {
            let vw = w.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(1.0);
            let vh = w.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(1.0);
            (vw as f32, vh as f32)
        }
        None => (1.0, 1.0),
    }
}

/// Create the hidden, muted, looping video element that feeds the text
/// texture. Muted video is allowed to autoplay, so it starts immediately.
pub fn create_video_element(document: &web::Document, src: &str) -> anyhow::Result<web::HtmlVideoElement> {
    use wasm_bindgen::JsCast;
    let video: web::HtmlVideoElement = document
        .create_element("video")
        .map_err(|e| anyhow::anyhow!("create video: {:?}", e))?
        .dyn_into()
        .map_err(|e| anyhow::anyhow!("video element cast: {:?}", e))?;
    video.set_src(src);
    video.set_cross_origin(Some("anonymous"));
    video.set_loop(true);
    video.set_muted(true);
    video.set_autoplay(true);
    Ok(video)
}
