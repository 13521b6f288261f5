/// Play/pause flag and signed playback rate.
///
/// The magnitude of `playback_rate` is the speed multiplier and its sign is the
/// direction. The rate is never zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaybackState {
    pub is_playing: bool,
    pub playback_rate: f64,
}

impl PlaybackState {
    pub fn new() -> Self {
        Self {
            is_playing: true,
            playback_rate: 1.0,
        }
    }

    /// Flips `is_playing` and returns the new value.
    pub fn toggle_playing(&mut self) -> bool {
        self.is_playing = !self.is_playing;
        self.is_playing
    }

    /// Rate with its magnitude halved, or `None` if that would underflow to zero.
    pub fn halved_rate(&self) -> Option<f64> {
        non_zero(self.playback_rate / 2.0)
    }

    /// Rate with its magnitude doubled, or `None` if that would leave the finite range.
    pub fn doubled_rate(&self) -> Option<f64> {
        let rate = self.playback_rate * 2.0;
        rate.is_finite().then_some(rate)
    }

    pub fn reversed_rate(&self) -> f64 {
        -self.playback_rate
    }
}

impl Default for PlaybackState {
    fn default() -> Self {
        Self::new()
    }
}

fn non_zero(rate: f64) -> Option<f64> {
    (rate != 0.0).then_some(rate)
}
