pub mod events;
pub mod playback_state;
pub mod session;
