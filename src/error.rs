use gstreamer as gst;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("missing URI argument, usage: {0} [OPTION...] URI")]
    MissingUri(String),
    #[error("expected exactly one URI argument, got {0}")]
    MultipleUris(usize),
    #[error("cannot turn '{path}' into a URI: {reason}")]
    InvalidPath { path: String, reason: String },
}

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("failed to initialize GStreamer: {0}")]
    Init(gst::glib::Error),
    #[error("failed to build pipeline: {0}")]
    Parse(#[from] gst::glib::Error),
    #[error("pipeline has no bus")]
    NoBus,
}

#[derive(Debug, Error)]
pub enum StartupError {
    #[error(transparent)]
    Cli(#[from] CliError),
    #[error(transparent)]
    Build(#[from] EngineError),
    #[error("Unable to set the pipeline to the playing state.")]
    Play(#[from] gst::StateChangeError),
}
