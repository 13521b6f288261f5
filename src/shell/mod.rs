pub mod sources;

use crossbeam_channel::{Receiver, Sender};
use gstreamer as gst;
use tracing::{debug, info, warn};

use crate::engine::Engine;
use crate::error::{EngineError, StartupError};
use crate::ops::bus_ops::handle_bus_event;
use crate::ops::key_ops::handle_key_line;
use crate::types::events::{Event, Exit, Flow};
use crate::types::session::PlaybackSession;

/// `gst-launch` description of a `playbin` that plays `uri`.
pub fn playbin_description(uri: &str) -> String {
    format!("playbin uri=\"{}\"", uri.replace('"', "\\\""))
}

/// Owns the pipeline for the whole run and routes queued events to the
/// dispatchers.
///
/// The engine is released exactly once, by [`Shell::teardown`] or on drop,
/// whichever comes first.
pub struct Shell<E: Engine> {
    engine: Option<E>,
    session: PlaybackSession<E::Sink>,
}

impl<E: Engine> Shell<E> {
    /// Builds the playbin for `uri`, attaches its bus to `events` and starts
    /// playback.
    pub fn start<F>(uri: &str, events: Sender<Event>, build: F) -> Result<Self, StartupError>
    where
        F: FnOnce(&str) -> Result<E, EngineError>,
    {
        let engine = build(&playbin_description(uri))?;
        engine.subscribe(events);

        let is_live = match engine.set_state(gst::State::Playing) {
            Ok(gst::StateChangeSuccess::NoPreroll) => {
                info!("Live source, buffering messages will be ignored");
                true
            }
            Ok(_) => false,
            Err(err) => {
                let _ = engine.set_state(gst::State::Null);
                return Err(err.into());
            }
        };

        Ok(Shell {
            engine: Some(engine),
            session: PlaybackSession::new(is_live),
        })
    }

    pub fn session(&self) -> &PlaybackSession<E::Sink> {
        &self.session
    }

    pub fn dispatch(&mut self, event: &Event) -> Flow {
        let Some(engine) = self.engine.as_ref() else {
            return Flow::Stop(Exit::SourcesClosed);
        };

        match event {
            Event::Bus(message) => handle_bus_event(engine, &self.session, message),
            Event::Key(line) => handle_key_line(engine, &mut self.session, line),
            Event::Signal(signum) => {
                info!("Exiting...");
                Flow::Stop(Exit::Signal(*signum))
            }
        }
    }

    /// Dispatches events until one of them ends the session.
    pub fn run(&mut self, events: &Receiver<Event>) -> Exit {
        for event in events.iter() {
            if let Flow::Stop(exit) = self.dispatch(&event) {
                debug!("Run loop stopped: {:?}", exit);
                return exit;
            }
        }
        Exit::SourcesClosed
    }

    /// Sets the pipeline to NULL and releases it. Returns `false` if that
    /// already happened.
    pub fn teardown(&mut self) -> bool {
        let Some(engine) = self.engine.take() else {
            return false;
        };
        if let Err(err) = engine.set_state(gst::State::Null) {
            warn!("Failed to set pipeline state to NULL: {}", err);
        }
        drop(engine);
        debug!("Pipeline released");
        true
    }
}

impl<E: Engine> Drop for Shell<E> {
    fn drop(&mut self) {
        self.teardown();
    }
}
