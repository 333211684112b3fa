// Host-side tests for user-agent sniffing and the input-branch decision.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod input {
    include!("../src/input.rs");
}
mod camera {
    include!("../src/camera.rs");
}
mod platform {
    include!("../src/platform.rs");
}

use camera::ViewportClass;
use constants::VIEWPORT_BREAKPOINT_PX;
use platform::*;

const IPHONE_UA: &str = "Mozilla/5.0 (iPhone; CPU iPhone OS 16_0 like Mac OS X) \
    AppleWebKit/605.1.15 (KHTML, like Gecko) Version/16.0 Mobile/15E148 Safari/604.1";
const ANDROID_UA: &str = "Mozilla/5.0 (Linux; Android 13; Pixel 7) AppleWebKit/537.36 \
    (KHTML, like Gecko) Chrome/114.0.0.0 Mobile Safari/537.36";
const DESKTOP_UA: &str = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 \
    (KHTML, like Gecko) Chrome/114.0.0.0 Safari/537.36";

#[test]
fn recognizes_mobile_user_agents() {
    assert!(is_mobile_user_agent(IPHONE_UA));
    assert!(is_mobile_user_agent(ANDROID_UA));
    assert!(is_mobile_user_agent("Opera/9.80 (Opera Mini/7.5)"));
    assert!(is_mobile_user_agent("something BlackBerry something"));
}

#[test]
fn desktop_user_agents_do_not_match() {
    assert!(!is_mobile_user_agent(DESKTOP_UA));
    assert!(!is_mobile_user_agent(""));
    // Matching is case-sensitive, like the marker list
    assert!(!is_mobile_user_agent("android in lowercase"));
}

#[test]
fn wide_desktop_gets_absolute_pointer_mapping() {
    let p = Platform::from_parts(DESKTOP_UA, 1280.0);
    assert!(!p.touch_controls);
    assert_eq!(p.class, ViewportClass::Desktop);
}

#[test]
fn mobile_user_agent_forces_the_touch_branch() {
    // A phone in landscape can exceed the breakpoint and still needs touch
    let p = Platform::from_parts(IPHONE_UA, 900.0);
    assert!(p.touch_controls);
    assert_eq!(p.class, ViewportClass::Desktop);
}

#[test]
fn narrow_viewport_forces_the_touch_branch() {
    // Narrow desktop windows follow the mobile preset, so the input branch
    // agrees with the breakpoint
    let p = Platform::from_parts(DESKTOP_UA, VIEWPORT_BREAKPOINT_PX);
    assert!(p.touch_controls);
    assert_eq!(p.class, ViewportClass::Mobile);
}

#[test]
fn resize_across_the_breakpoint_flips_the_class() {
    let narrow = Platform::from_parts(DESKTOP_UA, 600.0);
    let wide = Platform::from_parts(DESKTOP_UA, 1200.0);
    assert_eq!(narrow.class, ViewportClass::Mobile);
    assert_eq!(wide.class, ViewportClass::Desktop);
    assert!(narrow.touch_controls);
    assert!(!wide.touch_controls);
}
