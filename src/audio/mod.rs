mod state;

pub use state::PlaybackState;

use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

/// Looping background track. Playback may only begin in response to a user
/// gesture (autoplay policy); a rejected play promise is logged and ignored,
/// with no retry and no user-visible error surface.
#[derive(Clone)]
pub struct BackgroundTrack {
    element: web::HtmlAudioElement,
    state: Rc<RefCell<PlaybackState>>,
}

impl BackgroundTrack {
    pub fn new(src: &str) -> anyhow::Result<Self> {
        let element = web::HtmlAudioElement::new_with_src(src)
            .map_err(|e| anyhow::anyhow!("audio element: {:?}", e))?;
        element.set_loop(true);
        Ok(Self {
            element,
            state: Rc::new(RefCell::new(PlaybackState::default())),
        })
    }

    /// Start playback once. Safe to call from every candidate gesture; only
    /// the first call reaches the media element.
    pub fn start(&self) {
        if !self.state.borrow_mut().mark_started() {
            return;
        }
        play_logging_rejection(self.element.unchecked_ref(), "background track");
    }

    /// Flip the muted flag on the element and in the stored state; returns
    /// the new muted value.
    pub fn toggle_mute(&self) -> bool {
        let muted = self.state.borrow_mut().toggle_mute();
        self.element.set_muted(muted);
        muted
    }

    pub fn is_muted(&self) -> bool {
        self.state.borrow().is_muted()
    }
}

/// Call `play()` and swallow an autoplay-policy rejection with a log line.
pub fn play_logging_rejection(media: &web::HtmlMediaElement, what: &'static str) {
    match media.play() {
        Ok(promise) => {
            spawn_local(async move {
                if let Err(e) = JsFuture::from(promise).await {
                    log::warn!("{} playback rejected: {:?}", what, e);
                }
            });
        }
        Err(e) => log::warn!("{} play() failed: {:?}", what, e),
    }
}
