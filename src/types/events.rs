use gst::prelude::*;
use gstreamer as gst;

/// One item on the dispatch queue.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    Bus(BusEvent),
    Key(String),
    Signal(i32),
}

/// The parts of a GStreamer bus message the dispatcher reacts to.
#[derive(Debug, Clone, PartialEq)]
pub enum BusEvent {
    Error {
        message: String,
        debug: Option<String>,
    },
    Warning {
        message: String,
        debug: Option<String>,
    },
    Eos,
    Buffering(i32),
    ClockLost,
    /// State change of the top-level pipeline.
    StateChanged {
        old: gst::State,
        new: gst::State,
    },
    Other(String),
}

impl BusEvent {
    pub fn from_message(msg: &gst::Message) -> Self {
        use gst::MessageView;

        match msg.view() {
            MessageView::Error(err) => BusEvent::Error {
                message: err.error().to_string(),
                debug: err.debug().map(|d| d.to_string()),
            },
            MessageView::Warning(warning) => BusEvent::Warning {
                message: warning.error().to_string(),
                debug: warning.debug().map(|d| d.to_string()),
            },
            MessageView::Eos(_) => BusEvent::Eos,
            MessageView::Buffering(buffering) => BusEvent::Buffering(buffering.percent()),
            MessageView::ClockLost(_) => BusEvent::ClockLost,
            MessageView::StateChanged(changed)
                if msg.src().is_some_and(|src| src.is::<gst::Pipeline>()) =>
            {
                BusEvent::StateChanged {
                    old: changed.old(),
                    new: changed.current(),
                }
            }
            _ => BusEvent::Other(format!("{:?}", msg.type_())),
        }
    }
}

/// Why the run loop stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exit {
    EndOfStream,
    Failed,
    Quit,
    Signal(i32),
    /// Every event producer went away.
    SourcesClosed,
}

impl Exit {
    pub fn is_failure(self) -> bool {
        matches!(self, Exit::Failed)
    }
}

/// What a dispatcher wants the run loop to do next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Stop(Exit),
}
