use std::io::{self, BufRead};
use std::thread::{self, JoinHandle};

use crossbeam_channel::Sender;
use tracing::{debug, warn};

use crate::types::events::Event;

#[cfg(unix)]
pub const SIGINT: i32 = 2;
#[cfg(unix)]
pub const SIGTERM: i32 = 15;

/// Queues every line typed on stdin until stdin closes or the queue is gone.
pub fn spawn_stdin_reader(events: Sender<Event>) -> io::Result<JoinHandle<()>> {
    thread::Builder::new()
        .name("stdin-reader".to_string())
        .spawn(move || forward_lines(io::stdin().lock(), &events))
}

fn forward_lines<R: BufRead>(input: R, events: &Sender<Event>) {
    for line in input.lines() {
        match line {
            Ok(line) => {
                if events.send(Event::Key(line)).is_err() {
                    return;
                }
            }
            Err(err) => {
                warn!("Failed to read from stdin: {}", err);
                return;
            }
        }
    }
    debug!("stdin closed");
}

/// Queues SIGINT and SIGTERM deliveries.
///
/// The handlers are installed before this returns; a GLib main context on its
/// own thread dispatches them.
#[cfg(unix)]
pub fn spawn_signal_watch(events: Sender<Event>) -> io::Result<JoinHandle<()>> {
    use gstreamer::glib;

    let context = glib::MainContext::new();
    for signum in [SIGINT, SIGTERM] {
        let events = events.clone();
        let source = glib::unix_signal_source_new(
            signum,
            None,
            glib::Priority::DEFAULT,
            move || {
                let _ = events.send(Event::Signal(signum));
                glib::ControlFlow::Continue
            },
        );
        source.attach(Some(&context));
    }

    let main_loop = glib::MainLoop::new(Some(&context), false);
    thread::Builder::new()
        .name("signal-watch".to_string())
        .spawn(move || main_loop.run())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_forward_lines_queues_each_line() {
        let (sender, receiver) = crossbeam_channel::unbounded();

        forward_lines(Cursor::new("p\nS\n\nq\n"), &sender);
        drop(sender);

        let events: Vec<Event> = receiver.iter().collect();
        assert_eq!(
            events,
            vec![
                Event::Key("p".to_string()),
                Event::Key("S".to_string()),
                Event::Key(String::new()),
                Event::Key("q".to_string()),
            ]
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_signal_watch_ready_on_return() {
        let (sender, receiver) = crossbeam_channel::unbounded();
        spawn_signal_watch(sender).unwrap();

        let pid = std::process::id().to_string();
        let status = std::process::Command::new("kill")
            .args(["-TERM", pid.as_str()])
            .status()
            .unwrap();
        assert!(status.success());

        let event = receiver
            .recv_timeout(std::time::Duration::from_secs(5))
            .unwrap();
        assert_eq!(event, Event::Signal(SIGTERM));
    }

    #[test]
    fn test_forward_lines_stops_when_queue_closed() {
        let (sender, receiver) = crossbeam_channel::unbounded();
        drop(receiver);

        forward_lines(Cursor::new("p\nq\n"), &sender);
    }
}
