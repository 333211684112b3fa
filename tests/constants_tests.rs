// Host-side sanity checks for tuning constants.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn constants_are_within_reasonable_bounds() {
    assert!(VIEWPORT_BREAKPOINT_PX > 0.0);
    assert!(POINTER_GAIN_X > 0.0);
    assert!(POINTER_GAIN_Y > 0.0);
    assert!(TOUCH_PAN_GAIN > 0.0);

    // Lerp factor must contract toward the target without overshooting
    assert!(CAMERA_LERP_FACTOR > 0.0 && CAMERA_LERP_FACTOR < 1.0);

    // Mirror mix stays inside [0, 1]
    assert!(MIRROR_STRENGTH >= 0.0 && MIRROR_STRENGTH <= 1.0);

    assert!(Z_NEAR > 0.0);
    assert!(Z_FAR > Z_NEAR);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn presets_keep_targets_in_view() {
    // Both eyes sit in front of the target depth and above the floor
    assert!(DESKTOP_EYE.z > CAMERA_TARGET_Z);
    assert!(MOBILE_EYE.z > CAMERA_TARGET_Z);
    assert!(DESKTOP_EYE.y > 0.0 && MOBILE_EYE.y > 0.0);

    // The far eye dollys in within the clip range
    assert!(DESKTOP_EYE.z < Z_FAR);

    assert!(DESKTOP_FOV_DEG > 0.0 && DESKTOP_FOV_DEG < 90.0);
    assert!(MOBILE_FOV_DEG > 0.0 && MOBILE_FOV_DEG < 90.0);

    assert!(DESKTOP_PIXEL_RATIO_MAX >= 1.0);
    assert!(MOBILE_PIXEL_RATIO_MAX >= 1.0);
    assert!(DESKTOP_MODEL_SCALE > 0.0 && MOBILE_MODEL_SCALE > 0.0);
}

#[test]
fn ua_markers_are_unique_and_nonempty() {
    for (i, m) in MOBILE_UA_MARKERS.iter().enumerate() {
        assert!(!m.is_empty());
        for other in &MOBILE_UA_MARKERS[i + 1..] {
            assert_ne!(m, other);
        }
    }
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn scene_layout_fits_the_ground() {
    let h = GROUND_EXTENT / 2.0;
    assert!(MODEL_POSITION.x.abs() < h && MODEL_POSITION.z.abs() < h);
    assert!(TEXT_POSITION.x.abs() < h && TEXT_POSITION.z.abs() < h);
    assert!(TEXT_HEIGHT > 0.0);
    assert!(BACKGROUND_COLOR.iter().all(|&c| (0.0..=1.0).contains(&c)));
}
