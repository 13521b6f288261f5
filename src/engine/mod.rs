pub mod gst_engine;
#[cfg(test)]
pub mod recording;

use crossbeam_channel::Sender;
use gstreamer as gst;

use crate::types::events::Event;

pub use gst_engine::GstEngine;

/// The pipeline operations the shell and the dispatchers rely on.
pub trait Engine {
    /// Handle to the element that seek and step events are sent to.
    type Sink: Clone;

    fn set_state(
        &self,
        state: gst::State,
    ) -> Result<gst::StateChangeSuccess, gst::StateChangeError>;

    /// Forwards every bus message to `sender` as an [`Event::Bus`].
    fn subscribe(&self, sender: Sender<Event>);

    fn query_position(&self) -> Option<gst::ClockTime>;

    fn video_sink(&self) -> Option<Self::Sink>;

    fn send_seek(&self, sink: &Self::Sink, seek: &SeekRequest) -> bool;

    fn send_step(&self, sink: &Self::Sink, step: &StepRequest) -> bool;
}

/// A flushing, accurate seek that changes rate and direction from `position`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeekRequest {
    pub rate: f64,
    pub flags: gst::SeekFlags,
    pub start_type: gst::SeekType,
    pub start: gst::ClockTime,
    pub stop_type: gst::SeekType,
    pub stop: gst::ClockTime,
}

impl SeekRequest {
    /// Forward rates play from `position` to the end of the stream, reverse
    /// rates play from `position` back to the start.
    pub fn for_rate(rate: f64, position: gst::ClockTime) -> Self {
        let flags = gst::SeekFlags::FLUSH | gst::SeekFlags::ACCURATE;
        if rate > 0.0 {
            SeekRequest {
                rate,
                flags,
                start_type: gst::SeekType::Set,
                start: position,
                stop_type: gst::SeekType::End,
                stop: gst::ClockTime::ZERO,
            }
        } else {
            SeekRequest {
                rate,
                flags,
                start_type: gst::SeekType::Set,
                start: gst::ClockTime::ZERO,
                stop_type: gst::SeekType::Set,
                stop: position,
            }
        }
    }
}

/// Advance by `amount` buffers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepRequest {
    pub amount: u64,
    pub rate: f64,
    pub flush: bool,
    pub intermediate: bool,
}

impl StepRequest {
    /// One buffer at the speed of `rate`, ignoring its direction.
    pub fn single_frame(rate: f64) -> Self {
        StepRequest {
            amount: 1,
            rate: rate.abs(),
            flush: true,
            intermediate: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forward_seek_runs_to_end() {
        let position = gst::ClockTime::from_seconds(12);
        let seek = SeekRequest::for_rate(2.0, position);
        assert_eq!(seek.rate, 2.0);
        assert_eq!(seek.flags, gst::SeekFlags::FLUSH | gst::SeekFlags::ACCURATE);
        assert_eq!(seek.start_type, gst::SeekType::Set);
        assert_eq!(seek.start, position);
        assert_eq!(seek.stop_type, gst::SeekType::End);
        assert_eq!(seek.stop, gst::ClockTime::ZERO);
    }

    #[test]
    fn test_reverse_seek_runs_back_to_start() {
        let position = gst::ClockTime::from_seconds(12);
        let seek = SeekRequest::for_rate(-0.5, position);
        assert_eq!(seek.rate, -0.5);
        assert_eq!(seek.start_type, gst::SeekType::Set);
        assert_eq!(seek.start, gst::ClockTime::ZERO);
        assert_eq!(seek.stop_type, gst::SeekType::Set);
        assert_eq!(seek.stop, position);
    }

    #[test]
    fn test_single_frame_step_uses_rate_magnitude() {
        let step = StepRequest::single_frame(-4.0);
        assert_eq!(step.amount, 1);
        assert_eq!(step.rate, 4.0);
        assert!(step.flush);
        assert!(!step.intermediate);
    }
}
