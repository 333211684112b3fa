#![cfg(target_arch = "wasm32")]
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod audio;
mod camera;
mod constants;
mod dom;
mod events;
mod frame;
mod input;
mod overlay;
mod platform;
mod render;

const VIDEO_SRC: &str = "/Techxetra.mp4";
const MUSIC_SRC: &str = "/music.mp3";

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("landing-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas: web::HtmlCanvasElement = document
        .get_element_by_id("app-canvas")
        .ok_or_else(|| anyhow::anyhow!("missing #app-canvas"))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    let platform = Rc::new(RefCell::new(platform::Platform::detect()));
    let preset = camera::CameraPreset::for_class(platform.borrow().class);
    dom::sync_canvas_backing_size(&canvas, preset.pixel_ratio_max);

    // Headline video texture; the element may autoplay because it is muted.
    let video = dom::create_video_element(&document, VIDEO_SRC)?;
    audio::play_logging_rejection(&video, "headline video");

    // Background music waits for the first user gesture.
    let track = audio::BackgroundTrack::new(MUSIC_SRC)?;
    {
        let track_gesture = track.clone();
        events::attach_once(window.as_ref(), "click", move || track_gesture.start());
    }

    let pointer = Rc::new(RefCell::new(input::PointerState::default()));
    let pan = Rc::new(RefCell::new(input::TouchPan::default()));

    let mut listeners = events::wire_input_handlers(events::InputWiring {
        canvas: canvas.clone(),
        pointer: pointer.clone(),
        pan: pan.clone(),
        platform: platform.clone(),
    });
    if let Some(handle) = overlay::wire_sound_toggle(&document, track.clone()) {
        listeners.push(handle);
    }

    let gpu = frame::init_gpu(&canvas, &document, preset.eye).await;

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        platform,
        pointer,
        pan,
        rig: camera::CameraRig::new(&preset),
        canvas,
        video,
        gpu,
        listeners,
    }));
    frame::start_loop(frame_ctx);

    Ok(())
}
