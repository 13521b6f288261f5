use crossbeam_channel::Sender;
use gst::prelude::*;
use gstreamer as gst;
use tracing::{debug, warn};

use crate::engine::{Engine, SeekRequest, StepRequest};
use crate::error::EngineError;
use crate::types::events::{BusEvent, Event};

/// A pipeline built with `gst::parse::launch`, usually a single `playbin`.
#[derive(Debug)]
pub struct GstEngine {
    pipeline: gst::Element,
    bus: gst::Bus,
}

impl GstEngine {
    pub fn launch(description: &str) -> Result<Self, EngineError> {
        debug!("Launching pipeline: {}", description);
        let pipeline = gst::parse::launch(description)?;
        let bus = pipeline.bus().ok_or(EngineError::NoBus)?;
        Ok(Self { pipeline, bus })
    }
}

impl Engine for GstEngine {
    type Sink = gst::Element;

    fn set_state(
        &self,
        state: gst::State,
    ) -> Result<gst::StateChangeSuccess, gst::StateChangeError> {
        debug!("Setting pipeline state to {:?}", state);
        self.pipeline.set_state(state)
    }

    fn subscribe(&self, sender: Sender<Event>) {
        // Runs on streaming threads; only converts and enqueues.
        self.bus.set_sync_handler(move |_, msg| {
            let _ = sender.send(Event::Bus(BusEvent::from_message(msg)));
            gst::BusSyncReply::Drop
        });
    }

    fn query_position(&self) -> Option<gst::ClockTime> {
        self.pipeline.query_position::<gst::ClockTime>()
    }

    fn video_sink(&self) -> Option<gst::Element> {
        if self.pipeline.find_property("video-sink").is_none() {
            warn!("Pipeline has no video-sink property");
            return None;
        }
        self.pipeline.property::<Option<gst::Element>>("video-sink")
    }

    fn send_seek(&self, sink: &gst::Element, seek: &SeekRequest) -> bool {
        let event = gst::event::Seek::new(
            seek.rate,
            seek.flags,
            seek.start_type,
            seek.start,
            seek.stop_type,
            seek.stop,
        );
        sink.send_event(event)
    }

    fn send_step(&self, sink: &gst::Element, step: &StepRequest) -> bool {
        let event = gst::event::Step::new(
            gst::format::Buffers::from_u64(step.amount),
            step.rate,
            step.flush,
            step.intermediate,
        );
        sink.send_event(event)
    }
}

impl Drop for GstEngine {
    fn drop(&mut self) {
        self.bus.unset_sync_handler();
    }
}
