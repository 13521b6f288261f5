use crate::types::playback_state::PlaybackState;

/// Per-run playback state shared by the bus and keyboard dispatchers.
///
/// `S` is the engine's handle to the video sink. It is resolved the first time a
/// seek or step needs it and reused afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaybackSession<S> {
    pub state: PlaybackState,
    pub is_live: bool,
    pub video_sink: Option<S>,
}

impl<S: Clone> PlaybackSession<S> {
    pub fn new(is_live: bool) -> Self {
        PlaybackSession {
            state: PlaybackState::new(),
            is_live,
            video_sink: None,
        }
    }

    /// Returns the cached sink, calling `resolve` only while none is cached.
    pub fn resolve_video_sink<F>(&mut self, resolve: F) -> Option<S>
    where
        F: FnOnce() -> Option<S>,
    {
        if self.video_sink.is_none() {
            self.video_sink = resolve();
        }
        self.video_sink.clone()
    }
}
