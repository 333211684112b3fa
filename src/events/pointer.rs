use crate::camera::CameraPreset;
use crate::dom;
use crate::input;
use crate::platform::Platform;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

use super::{ListenerHandle, ListenerSet};

/// Shared state the input handlers write into; the frame loop reads it.
#[derive(Clone)]
pub struct InputWiring {
    pub canvas: web::HtmlCanvasElement,
    pub pointer: Rc<RefCell<input::PointerState>>,
    pub pan: Rc<RefCell<input::TouchPan>>,
    pub platform: Rc<RefCell<Platform>>,
}

/// Register mouse, touch and resize handlers on the window. Returns the set
/// owning every registered listener; dropping it detaches them all.
pub fn wire_input_handlers(w: InputWiring) -> ListenerSet {
    let mut set = ListenerSet::default();
    let Some(window) = web::window() else {
        return set;
    };
    let target: &web::EventTarget = window.as_ref();

    set.push(wire_mousemove(target, &w));
    set.push(wire_touchstart(target, &w));
    set.push(wire_touchmove(target, &w));
    set.push(wire_touchend(target, &w));
    set.push(wire_resize(target, &w));
    set
}

fn wire_mousemove(target: &web::EventTarget, w: &InputWiring) -> ListenerHandle {
    let pointer = w.pointer.clone();
    ListenerHandle::attach(target, "mousemove", move |ev: web::Event| {
        let ev: &web::MouseEvent = ev.unchecked_ref();
        let (vw, vh) = dom::viewport_size();
        pointer
            .borrow_mut()
            .set_from_client(ev.client_x() as f32, ev.client_y() as f32, vw, vh);
    })
}

fn first_touch_normalized(ev: &web::TouchEvent) -> Option<(f32, f32)> {
    let touch = ev.touches().item(0)?;
    let (vw, vh) = dom::viewport_size();
    Some((
        input::normalized_x(touch.client_x() as f32, vw),
        input::normalized_y(touch.client_y() as f32, vh),
    ))
}

fn wire_touchstart(target: &web::EventTarget, w: &InputWiring) -> ListenerHandle {
    let pan = w.pan.clone();
    ListenerHandle::attach(target, "touchstart", move |ev: web::Event| {
        let ev: &web::TouchEvent = ev.unchecked_ref();
        if let Some((nx, ny)) = first_touch_normalized(ev) {
            pan.borrow_mut().begin(nx, ny);
        }
    })
}

fn wire_touchmove(target: &web::EventTarget, w: &InputWiring) -> ListenerHandle {
    let pointer = w.pointer.clone();
    let pan = w.pan.clone();
    ListenerHandle::attach(target, "touchmove", move |ev: web::Event| {
        let ev: &web::TouchEvent = ev.unchecked_ref();
        if let Some((nx, ny)) = first_touch_normalized(ev) {
            {
                let mut p = pointer.borrow_mut();
                p.x = nx;
                p.y = ny;
            }
            pan.borrow_mut().push(nx, ny);
        }
    })
}

fn wire_touchend(target: &web::EventTarget, w: &InputWiring) -> ListenerHandle {
    let pan = w.pan.clone();
    ListenerHandle::attach(target, "touchend", move |_ev: web::Event| {
        pan.borrow_mut().end();
    })
}

/// Resize re-detects the platform (the breakpoint may flip) and re-syncs the
/// canvas backing size under the new preset's pixel-ratio cap.
fn wire_resize(target: &web::EventTarget, w: &InputWiring) -> ListenerHandle {
    let platform = w.platform.clone();
    let canvas = w.canvas.clone();
    ListenerHandle::attach(target, "resize", move |_ev: web::Event| {
        let detected = Platform::detect();
        *platform.borrow_mut() = detected;
        let preset = CameraPreset::for_class(detected.class);
        dom::sync_canvas_backing_size(&canvas, preset.pixel_ratio_max);
    })
}
