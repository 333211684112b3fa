// Host-side tests for the background-track playback state machine.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod state {
    include!("../src/audio/state.rs");
}

use state::PlaybackState;

#[test]
fn initial_state_is_unmuted_and_not_started() {
    let s = PlaybackState::default();
    assert!(!s.is_muted());
    assert!(!s.has_started());
}

#[test]
fn start_fires_exactly_once() {
    let mut s = PlaybackState::default();
    assert!(s.mark_started());
    assert!(s.has_started());
    // Every later gesture is a no-op
    assert!(!s.mark_started());
    assert!(!s.mark_started());
    assert!(s.has_started());
}

#[test]
fn toggle_returns_the_new_value() {
    let mut s = PlaybackState::default();
    assert!(s.toggle_mute());
    assert!(s.is_muted());
    assert!(!s.toggle_mute());
    assert!(!s.is_muted());
}

#[test]
fn double_toggle_restores_the_original_state() {
    let mut s = PlaybackState::default();
    let before = s;
    s.toggle_mute();
    s.toggle_mute();
    assert_eq!(s, before);
}

#[test]
fn mute_is_independent_of_start() {
    let mut s = PlaybackState::default();
    s.toggle_mute();
    assert!(!s.has_started());
    assert!(s.mark_started());
    assert!(s.is_muted());
}
