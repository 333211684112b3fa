use crate::audio::BackgroundTrack;
use crate::events::ListenerHandle;
use web_sys as web;

/// Reflect the mute state on the toggle button so CSS can swap its icon.
pub fn set_muted_attr(document: &web::Document, muted: bool) {
    if let Some(el) = document.get_element_by_id("sound-toggle") {
        let cl = el.class_list();
        if muted {
            _ = cl.add_1("muted");
        } else {
            _ = cl.remove_1("muted");
        }
        // fallback for environments without the stylesheet
        _ = el.set_attribute("data-muted", if muted { "true" } else { "false" });
    }
}

/// Wire the sound-toggle button to the background track. Returns the handle
/// owning the click listener, or None when the button is absent.
pub fn wire_sound_toggle(
    document: &web::Document,
    track: BackgroundTrack,
) -> Option<ListenerHandle> {
    let el = document.get_element_by_id("sound-toggle")?;
    set_muted_attr(document, track.is_muted());
    let doc = document.clone();
    let target: &web::EventTarget = el.as_ref();
    Some(ListenerHandle::attach(target, "click", move |_ev| {
        let muted = track.toggle_mute();
        set_muted_attr(&doc, muted);
    }))
}
