mod cli;
mod engine;
mod error;
mod ops;
mod shell;
mod types;

use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use crossbeam_channel::Sender;
use gstreamer as gst;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::cli::{Args, Command};
use crate::engine::{Engine, GstEngine};
use crate::error::{EngineError, StartupError};
use crate::shell::{Shell, sources};
use crate::types::events::{Event, Exit};

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("gst_pipeline_editor=info")),
        )
        .init();

    let args = Args::parse();
    match play(&args) {
        Ok(exit) if !exit.is_failure() => ExitCode::SUCCESS,
        Ok(_) => ExitCode::FAILURE,
        Err(err) => {
            eprintln!("{:#}", err);
            ExitCode::FAILURE
        }
    }
}

enum Startup<E: Engine> {
    Version,
    Playing { uri: String, shell: Shell<E> },
}

/// Validates the command line and, when it names one URI, builds and starts
/// the pipeline with `build`.
fn startup<E, F>(args: &Args, events: Sender<Event>, build: F) -> Result<Startup<E>, StartupError>
where
    E: Engine,
    F: FnOnce(&str) -> Result<E, EngineError>,
{
    let uri = match args.command()? {
        Command::Version => return Ok(Startup::Version),
        Command::Play(uri) => uri,
    };
    let shell = Shell::start(&uri, events, build)?;
    Ok(Startup::Playing { uri, shell })
}

fn launch_gst(description: &str) -> Result<GstEngine, EngineError> {
    gst::init().map_err(EngineError::Init)?;
    GstEngine::launch(description)
}

fn play(args: &Args) -> anyhow::Result<Exit> {
    let (sender, receiver) = crossbeam_channel::unbounded();
    #[cfg(unix)]
    sources::spawn_signal_watch(sender.clone()).context("failed to watch for signals")?;

    let (uri, mut shell) = match startup(args, sender.clone(), launch_gst)? {
        Startup::Version => {
            println!("{}", cli::version_string());
            return Ok(Exit::Quit);
        }
        Startup::Playing { uri, shell } => (uri, shell),
    };

    sources::spawn_stdin_reader(sender).context("failed to start stdin reader")?;

    info!("Playing {} (live: {})", uri, shell.session().is_live);
    println!("Keys: p = play/pause, s/S = half/double speed, d = reverse, n = next frame, q = quit");

    let exit = shell.run(&receiver);
    shell.teardown();
    Ok(exit)
}
