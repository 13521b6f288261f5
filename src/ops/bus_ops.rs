use std::io::{self, Write};

use gstreamer as gst;
use tracing::{debug, trace, warn};

use crate::engine::Engine;
use crate::types::events::{BusEvent, Exit, Flow};
use crate::types::session::PlaybackSession;

/// Reacts to one bus message.
///
/// Errors and end-of-stream park the pipeline in READY and stop the loop.
/// Buffering pauses until the engine reports 100% (live sources are left
/// alone). A lost clock is recovered by cycling PAUSED -> PLAYING.
pub fn handle_bus_event<E: Engine>(
    engine: &E,
    session: &PlaybackSession<E::Sink>,
    event: &BusEvent,
) -> Flow {
    match event {
        BusEvent::Error { message, debug } => {
            eprintln!("Error: {}", message);
            if let Some(debug) = debug {
                eprintln!("Debugging information: {}", debug);
            }
            change_state(engine, gst::State::Ready);
            Flow::Stop(Exit::Failed)
        }
        BusEvent::Eos => {
            println!("End-Of-Stream reached.");
            change_state(engine, gst::State::Ready);
            Flow::Stop(Exit::EndOfStream)
        }
        BusEvent::Buffering(percent) => {
            if session.is_live {
                return Flow::Continue;
            }
            print!("Buffering ({:3}%)\r", percent);
            let _ = io::stdout().flush();
            if *percent < 100 {
                change_state(engine, gst::State::Paused);
            } else {
                change_state(engine, gst::State::Playing);
            }
            Flow::Continue
        }
        BusEvent::ClockLost => {
            debug!("Clock lost, selecting a new one");
            change_state(engine, gst::State::Paused);
            change_state(engine, gst::State::Playing);
            Flow::Continue
        }
        BusEvent::Warning { message, debug: details } => {
            warn!("GStreamer warning: {} ({:?})", message, details);
            Flow::Continue
        }
        BusEvent::StateChanged { old, new } => {
            debug!("Pipeline state changed from {:?} to {:?}", old, new);
            Flow::Continue
        }
        BusEvent::Other(kind) => {
            trace!("Unhandled bus message: {}", kind);
            Flow::Continue
        }
    }
}

fn change_state<E: Engine>(engine: &E, state: gst::State) {
    if let Err(err) = engine.set_state(state) {
        warn!("Failed to set pipeline state to {:?}: {}", state, err);
    }
}
