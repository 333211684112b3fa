// Host-side tests for pointer normalization and touch panning.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod input {
    include!("../src/input.rs");
}

use constants::TOUCH_PAN_GAIN;
use input::*;

#[test]
fn normalized_x_spans_minus_one_to_one() {
    assert_eq!(normalized_x(0.0, 1000.0), -1.0);
    assert_eq!(normalized_x(500.0, 1000.0), 0.0);
    assert_eq!(normalized_x(1000.0, 1000.0), 1.0);
}

#[test]
fn normalized_y_is_inverted() {
    // Screen y grows downward, world y grows upward
    assert_eq!(normalized_y(0.0, 800.0), 1.0);
    assert_eq!(normalized_y(400.0, 800.0), 0.0);
    assert_eq!(normalized_y(800.0, 800.0), -1.0);
}

#[test]
fn normalized_coords_clamp_outside_viewport() {
    // Drags can report client coordinates past the viewport edge
    assert_eq!(normalized_x(1500.0, 1000.0), 1.0);
    assert_eq!(normalized_x(-200.0, 1000.0), -1.0);
    assert_eq!(normalized_y(-50.0, 800.0), 1.0);
    assert_eq!(normalized_y(900.0, 800.0), -1.0);
}

#[test]
fn normalization_survives_zero_viewport() {
    // Degenerate viewport must not divide by zero
    let x = normalized_x(10.0, 0.0);
    let y = normalized_y(10.0, 0.0);
    assert!(x.is_finite());
    assert!(y.is_finite());
}

#[test]
fn pointer_state_set_from_client() {
    let mut p = PointerState::default();
    p.set_from_client(750.0, 150.0, 1000.0, 600.0);
    assert!((p.x - 0.5).abs() < 1e-6);
    assert!((p.y - 0.5).abs() < 1e-6);
}

#[test]
fn touch_pan_accumulates_scaled_deltas() {
    let mut pan = TouchPan::default();
    pan.begin(0.0, 0.0);
    pan.push(0.1, 0.0);
    pan.push(0.2, -0.1);
    assert!((pan.offset_x - 0.2 * TOUCH_PAN_GAIN).abs() < 1e-5);
    assert!((pan.offset_y - (-0.1) * TOUCH_PAN_GAIN).abs() < 1e-5);
}

#[test]
fn touch_pan_first_sample_produces_no_delta() {
    // Without begin(), the first push only seeds the reference sample
    let mut pan = TouchPan::default();
    pan.push(0.8, 0.8);
    assert_eq!(pan.offset_x, 0.0);
    assert_eq!(pan.offset_y, 0.0);
    pan.push(0.9, 0.8);
    assert!(pan.offset_x > 0.0);
}

#[test]
fn touch_pan_gesture_boundary_inherits_no_delta() {
    let mut pan = TouchPan::default();
    pan.begin(0.0, 0.0);
    pan.push(0.5, 0.5);
    let (ox, oy) = (pan.offset_x, pan.offset_y);
    pan.end();
    assert!(!pan.is_tracking());

    // A new gesture starting far away must not jump the offset
    pan.begin(-0.9, -0.9);
    assert_eq!(pan.offset_x, ox);
    assert_eq!(pan.offset_y, oy);
    pan.push(-0.9, -0.9);
    assert_eq!(pan.offset_x, ox);
    assert_eq!(pan.offset_y, oy);
}

#[test]
fn touch_pan_offset_persists_across_gestures() {
    let mut pan = TouchPan::default();
    pan.begin(0.0, 0.0);
    pan.push(0.2, 0.0);
    pan.end();
    pan.begin(0.0, 0.0);
    pan.push(0.2, 0.0);
    pan.end();
    // Two equal drags pan twice as far
    assert!((pan.offset_x - 2.0 * 0.2 * TOUCH_PAN_GAIN).abs() < 1e-5);
}
