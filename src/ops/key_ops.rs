use gstreamer as gst;
use tracing::warn;

use crate::engine::{Engine, SeekRequest, StepRequest};
use crate::types::events::{Exit, Flow};
use crate::types::session::PlaybackSession;

/// Dispatches one line of terminal input on its first character.
///
/// `p` toggles play/pause, `s`/`S` halve/double the rate, `d` reverses
/// direction, `n` steps one frame and `q` quits. Apart from `s`/`S` keys are
/// case-insensitive. Anything else is ignored.
pub fn handle_key_line<E: Engine>(
    engine: &E,
    session: &mut PlaybackSession<E::Sink>,
    line: &str,
) -> Flow {
    let Some(key) = line.chars().next() else {
        return Flow::Continue;
    };

    match key {
        'p' | 'P' => {
            let playing = session.state.toggle_playing();
            let target = if playing {
                gst::State::Playing
            } else {
                gst::State::Paused
            };
            if let Err(err) = engine.set_state(target) {
                warn!("Failed to set pipeline state to {:?}: {}", target, err);
            }
            println!(
                "Setting state to {}",
                if playing { "PLAYING" } else { "PAUSE" }
            );
        }
        's' => match session.state.halved_rate() {
            Some(rate) => change_rate(engine, session, rate),
            None => warn!("Rate {} cannot be halved further", session.state.playback_rate),
        },
        'S' => match session.state.doubled_rate() {
            Some(rate) => change_rate(engine, session, rate),
            None => warn!("Rate {} cannot be doubled further", session.state.playback_rate),
        },
        'd' | 'D' => {
            let rate = session.state.reversed_rate();
            change_rate(engine, session, rate);
        }
        'n' | 'N' => step_frame(engine, session),
        'q' | 'Q' => return Flow::Stop(Exit::Quit),
        _ => {}
    }

    Flow::Continue
}

/// Seeks from the current position at `rate` and commits the rate once the
/// seek has been handed to the video sink.
fn change_rate<E: Engine>(engine: &E, session: &mut PlaybackSession<E::Sink>, rate: f64) {
    let Some(position) = engine.query_position() else {
        eprintln!("Unable to retrieve current position.");
        return;
    };
    let seek = SeekRequest::for_rate(rate, position);

    let Some(sink) = session.resolve_video_sink(|| engine.video_sink()) else {
        warn!("No video sink available, rate stays at {}", session.state.playback_rate);
        return;
    };
    if !engine.send_seek(&sink, &seek) {
        warn!("Video sink did not handle the seek to rate {}", rate);
        return;
    }

    session.state.playback_rate = rate;
    println!("Current rate: {}", rate);
}

fn step_frame<E: Engine>(engine: &E, session: &mut PlaybackSession<E::Sink>) {
    let Some(sink) = session.resolve_video_sink(|| engine.video_sink()) else {
        warn!("No video sink available, cannot step");
        return;
    };
    let step = StepRequest::single_frame(session.state.playback_rate);
    if !engine.send_step(&sink, &step) {
        warn!("Video sink did not handle the step");
    }
    println!("Stepping one frame");
}
