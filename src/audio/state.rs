/// Playback state for the background track.
///
/// Two independent flags: whether playback has been started (it may begin
/// only once, on the first user gesture) and whether output is muted. The
/// initial state is unmuted but not yet playing.
#[derive(Default, Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlaybackState {
    started: bool,
    muted: bool,
}

impl PlaybackState {
    /// Record the playback start. Returns `true` the first time only, so the
    /// caller knows whether to actually kick off the media element.
    pub fn mark_started(&mut self) -> bool {
        if self.started {
            return false;
        }
        self.started = true;
        true
    }

    /// Flip the mute flag; returns the new value. An even number of toggles
    /// always restores the original state.
    pub fn toggle_mute(&mut self) -> bool {
        self.muted = !self.muted;
        self.muted
    }

    pub fn is_muted(&self) -> bool {
        self.muted
    }

    pub fn has_started(&self) -> bool {
        self.started
    }
}
