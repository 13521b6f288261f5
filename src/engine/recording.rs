//! Test double that records every engine call.

use std::cell::RefCell;
use std::rc::Rc;

use crossbeam_channel::Sender;
use gstreamer as gst;

use crate::engine::{Engine, SeekRequest, StepRequest};
use crate::types::events::Event;

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    SetState(gst::State),
    Subscribe,
    VideoSink,
    Seek(&'static str, SeekRequest),
    Step(&'static str, StepRequest),
    Released,
}

pub type CallLog = Rc<RefCell<Vec<Call>>>;

pub struct RecordingEngine {
    pub calls: CallLog,
    pub position: Option<gst::ClockTime>,
    pub sink: Option<&'static str>,
    pub fail_play: bool,
    pub no_preroll: bool,
    pub reject_seek: bool,
}

impl RecordingEngine {
    pub fn new() -> Self {
        RecordingEngine {
            calls: Rc::new(RefCell::new(Vec::new())),
            position: Some(gst::ClockTime::from_seconds(5)),
            sink: Some("videosink0"),
            fail_play: false,
            no_preroll: false,
            reject_seek: false,
        }
    }

    pub fn log(&self) -> CallLog {
        Rc::clone(&self.calls)
    }
}

/// Only the `SetState` entries of a call log.
pub fn states(log: &CallLog) -> Vec<gst::State> {
    log.borrow()
        .iter()
        .filter_map(|call| match call {
            Call::SetState(state) => Some(*state),
            _ => None,
        })
        .collect()
}

impl Engine for RecordingEngine {
    type Sink = &'static str;

    fn set_state(
        &self,
        state: gst::State,
    ) -> Result<gst::StateChangeSuccess, gst::StateChangeError> {
        self.calls.borrow_mut().push(Call::SetState(state));
        match state {
            gst::State::Playing if self.fail_play => Err(gst::StateChangeError),
            gst::State::Playing if self.no_preroll => Ok(gst::StateChangeSuccess::NoPreroll),
            _ => Ok(gst::StateChangeSuccess::Success),
        }
    }

    fn subscribe(&self, _sender: Sender<Event>) {
        self.calls.borrow_mut().push(Call::Subscribe);
    }

    fn query_position(&self) -> Option<gst::ClockTime> {
        self.position
    }

    fn video_sink(&self) -> Option<&'static str> {
        self.calls.borrow_mut().push(Call::VideoSink);
        self.sink
    }

    fn send_seek(&self, sink: &&'static str, seek: &SeekRequest) -> bool {
        self.calls.borrow_mut().push(Call::Seek(*sink, *seek));
        !self.reject_seek
    }

    fn send_step(&self, sink: &&'static str, step: &StepRequest) -> bool {
        self.calls.borrow_mut().push(Call::Step(*sink, *step));
        true
    }
}

impl Drop for RecordingEngine {
    fn drop(&mut self) {
        self.calls.borrow_mut().push(Call::Released);
    }
}
