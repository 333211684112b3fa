// Host-side tests for presets, target mapping and the camera rig.
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

use camera::*;
use constants::*;
use glam::Vec3;
use input::{PointerState, TouchPan};

#[test]
fn viewport_classifies_at_the_breakpoint() {
    assert_eq!(ViewportClass::classify(360.0), ViewportClass::Mobile);
    assert_eq!(
        ViewportClass::classify(VIEWPORT_BREAKPOINT_PX),
        ViewportClass::Mobile
    );
    assert_eq!(
        ViewportClass::classify(VIEWPORT_BREAKPOINT_PX + 1.0),
        ViewportClass::Desktop
    );
    assert_eq!(ViewportClass::classify(1920.0), ViewportClass::Desktop);
}

#[test]
fn presets_match_their_class() {
    let d = CameraPreset::for_viewport(1280.0);
    assert_eq!(d.eye, DESKTOP_EYE);
    assert_eq!(d.fov_deg, DESKTOP_FOV_DEG);
    assert_eq!(d.pixel_ratio_max, DESKTOP_PIXEL_RATIO_MAX);
    assert_eq!(d.group_y, DESKTOP_GROUP_Y);
    assert_eq!(d.model_scale, DESKTOP_MODEL_SCALE);

    let m = CameraPreset::for_viewport(390.0);
    assert_eq!(m.eye, MOBILE_EYE);
    assert_eq!(m.fov_deg, MOBILE_FOV_DEG);
    assert_eq!(m.pixel_ratio_max, MOBILE_PIXEL_RATIO_MAX);
    assert_eq!(m.group_y, MOBILE_GROUP_Y);
    assert_eq!(m.model_scale, MOBILE_MODEL_SCALE);
}

#[test]
fn pointer_maps_through_fixed_gains() {
    let pointer = PointerState { x: 1.0, y: 1.0 };
    let pan = TouchPan::default();
    let t = camera_target(&pointer, &pan, false);
    assert_eq!(t, Vec3::new(POINTER_GAIN_X, CAMERA_BASE_HEIGHT + POINTER_GAIN_Y, CAMERA_TARGET_Z));
}

#[test]
fn centered_pointer_gives_the_rest_target() {
    let t = camera_target(&PointerState::default(), &TouchPan::default(), false);
    assert_eq!(t, Vec3::new(0.0, CAMERA_BASE_HEIGHT, CAMERA_TARGET_Z));
}

#[test]
fn centered_client_coords_rest_at_the_base_target() {
    // 1920x1080 viewport, pointer dead center
    let mut pointer = PointerState::default();
    pointer.set_from_client(960.0, 540.0, 1920.0, 1080.0);
    let t = camera_target(&pointer, &TouchPan::default(), false);
    assert_eq!(t, Vec3::new(0.0, 3.0, 14.0));
}

#[test]
fn touch_branch_reads_the_pan_offset_not_the_pointer() {
    let pointer = PointerState { x: 1.0, y: -1.0 };
    let mut pan = TouchPan::default();
    pan.begin(0.0, 0.0);
    pan.push(0.1, 0.04);
    let t = camera_target(&pointer, &pan, true);
    assert!((t.x - pan.offset_x).abs() < 1e-6);
    assert!((t.y - (CAMERA_BASE_HEIGHT + pan.offset_y)).abs() < 1e-6);
    assert_eq!(t.z, CAMERA_TARGET_Z);
}

#[test]
fn rig_starts_at_the_preset_eye() {
    let rig = CameraRig::new(&CameraPreset::for_viewport(1280.0));
    assert_eq!(rig.position, DESKTOP_EYE);
}

#[test]
fn rig_step_closes_a_fixed_fraction_of_the_distance() {
    let mut rig = CameraRig::new(&CameraPreset::for_viewport(1280.0));
    let target = Vec3::new(0.0, CAMERA_BASE_HEIGHT, CAMERA_TARGET_Z);
    let before = (target - rig.position).length();
    rig.step(target);
    let after = (target - rig.position).length();
    assert!((after - before * (1.0 - CAMERA_LERP_FACTOR)).abs() < 1e-3);
}

#[test]
fn rig_converges_monotonically_without_overshoot() {
    let mut rig = CameraRig::new(&CameraPreset::for_viewport(1280.0));
    let target = Vec3::new(2.0, CAMERA_BASE_HEIGHT, CAMERA_TARGET_Z);
    let mut last = (target - rig.position).length();
    for _ in 0..500 {
        rig.step(target);
        let d = (target - rig.position).length();
        assert!(d <= last + 1e-6);
        last = d;
    }
    assert!(last < 1e-2);
}

#[test]
fn rig_at_target_stays_put() {
    let target = Vec3::new(1.0, 2.0, CAMERA_TARGET_Z);
    let mut rig = CameraRig::new(&CameraPreset::for_viewport(1280.0));
    rig.position = target;
    rig.step(target);
    assert_eq!(rig.position, target);
}
