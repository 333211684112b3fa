use crate::camera::ViewportClass;
use crate::constants::{MOBILE_UA_MARKERS, VIEWPORT_BREAKPOINT_PX};
use web_sys as web;

#[inline]
pub fn is_mobile_user_agent(ua: &str) -> bool {
    MOBILE_UA_MARKERS.iter().any(|m| ua.contains(m))
}

/// Input branch and viewport class for the current session. `touch_controls`
/// picks relative pan over absolute pointer mapping; `class` picks the
/// camera/surface preset. Both are recomputed on resize (the user agent is
/// fixed, the viewport width is not).
#[derive(Clone, Copy)]
pub struct Platform {
    pub touch_controls: bool,
    pub class: ViewportClass,
}

impl Platform {
    pub fn from_parts(user_agent: &str, viewport_w: f32) -> Self {
        let class = ViewportClass::classify(viewport_w);
        // Narrow viewports get the touch branch even without a UA match, so
        // breakpoint and input branch never disagree.
        let touch_controls =
            is_mobile_user_agent(user_agent) || viewport_w <= VIEWPORT_BREAKPOINT_PX;
        Self {
            touch_controls,
            class,
        }
    }

    /// Read `navigator.userAgent` and the window inner width.
    pub fn detect() -> Self {
        let (ua, width) = match web::window() {
            Some(w) => {
                let ua = w.navigator().user_agent().unwrap_or_default();
                let width = w
                    .inner_width()
                    .ok()
                    .and_then(|v| v.as_f64())
                    .unwrap_or(f64::from(VIEWPORT_BREAKPOINT_PX) + 1.0);
                (ua, width as f32)
            }
            None => (String::new(), VIEWPORT_BREAKPOINT_PX + 1.0),
        };
        Self::from_parts(&ua, width)
    }
}
