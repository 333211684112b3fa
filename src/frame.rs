use crate::camera::{camera_target, CameraPreset, CameraRig};
use crate::constants::LOOK_AT_POINT;
use crate::events::ListenerSet;
use crate::input::{PointerState, TouchPan};
use crate::platform::Platform;
use crate::render;
use glam::Vec3;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Everything the per-frame tick reads and advances. The input handlers own
/// the write side of the shared cells; this owns the camera and the GPU.
pub struct FrameContext<'a> {
    pub platform: Rc<RefCell<Platform>>,
    pub pointer: Rc<RefCell<PointerState>>,
    pub pan: Rc<RefCell<TouchPan>>,
    pub rig: CameraRig,

    pub canvas: web::HtmlCanvasElement,
    pub video: web::HtmlVideoElement,
    pub gpu: Option<render::GpuState<'a>>,

    // Keeps the input listeners registered for the lifetime of the loop;
    // dropping the context detaches them all.
    pub listeners: ListenerSet,
}

impl<'a> FrameContext<'a> {
    pub fn frame(&mut self) {
        let (touch_controls, preset) = {
            let p = self.platform.borrow();
            (p.touch_controls, CameraPreset::for_class(p.class))
        };

        let target = camera_target(&self.pointer.borrow(), &self.pan.borrow(), touch_controls);
        self.rig.step(target);

        if let Some(g) = self.gpu.as_mut() {
            g.set_camera(self.rig.position, LOOK_AT_POINT);
            g.resize_if_needed(self.canvas.width(), self.canvas.height());
            let params = render::SceneParams {
                group_y: preset.group_y,
                model_scale: preset.model_scale,
                fov_deg: preset.fov_deg,
            };
            if let Err(e) = g.render(&params, Some(&self.video)) {
                log::error!("render error: {:?}", e);
            }
        }
    }
}

pub async fn init_gpu(
    canvas: &web::HtmlCanvasElement,
    document: &web::Document,
    initial_eye: Vec3,
) -> Option<render::GpuState<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    match render::GpuState::new(leaked_canvas, document, initial_eye, LOOK_AT_POINT).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

fn schedule(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    let Some(window) = web::window() else {
        return;
    };
    if let Some(closure) = tick.borrow().as_ref() {
        _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
    }
}

/// Drive `FrameContext::frame` from `requestAnimationFrame`. The tick closure
/// holds a handle to itself so it can re-arm after every frame.
pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext<'static>>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_rearm = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx.borrow_mut().frame();
        schedule(&tick_rearm);
    }) as Box<dyn FnMut()>));
    schedule(&tick);
}
