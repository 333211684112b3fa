mod pointer;

pub use pointer::{wire_input_handlers, InputWiring};

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// A DOM listener that unregisters itself when dropped. The teardown
/// invariant for this page is that every handler it registered is removed,
/// so persistent listeners are never `forget`-leaked; they are owned here
/// and live exactly as long as the frame context.
pub struct ListenerHandle {
    target: web::EventTarget,
    event: &'static str,
    closure: Closure<dyn FnMut(web::Event)>,
}

impl ListenerHandle {
    pub fn attach(
        target: &web::EventTarget,
        event: &'static str,
        handler: impl FnMut(web::Event) + 'static,
    ) -> Self {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
        if let Err(e) =
            target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
        {
            log::error!("add {} listener: {:?}", event, e);
        }
        Self {
            target: target.clone(),
            event,
            closure,
        }
    }
}

impl Drop for ListenerHandle {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.closure.as_ref().unchecked_ref());
    }
}

/// Every persistent handler wired by this page, detached together on drop.
#[derive(Default)]
pub struct ListenerSet {
    handles: Vec<ListenerHandle>,
}

impl ListenerSet {
    pub fn push(&mut self, handle: ListenerHandle) {
        self.handles.push(handle);
    }
}

/// One-shot listener for the first qualifying user gesture. The browser
/// removes it after the first delivery (`once`), so the closure may be
/// forgotten without leaving a live handler behind.
pub fn attach_once(target: &web::EventTarget, event: &str, handler: impl FnMut() + 'static) {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut()>);
    let options = web::AddEventListenerOptions::new();
    options.set_once(true);
    if let Err(e) = target.add_event_listener_with_callback_and_add_event_listener_options(
        event,
        closure.as_ref().unchecked_ref(),
        &options,
    ) {
        log::error!("add once {} listener: {:?}", event, e);
    }
    closure.forget();
}
