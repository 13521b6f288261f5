use clap::Parser;
use gstreamer as gst;

use crate::error::CliError;

#[derive(Parser, Debug)]
#[command(
    name = "gst-pipeline-editor",
    about = "Play a media URI with a playbin, controlled from the keyboard",
    disable_version_flag = true
)]
pub struct Args {
    /// Print version and exit
    #[arg(short = 'v', long)]
    pub version: bool,

    /// URI or local file to play
    #[arg(value_name = "URI")]
    pub uris: Vec<String>,
}

#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    Version,
    Play(String),
}

impl Args {
    pub fn command(&self) -> Result<Command, CliError> {
        if self.version {
            return Ok(Command::Version);
        }
        match self.uris.as_slice() {
            [] => Err(CliError::MissingUri(env!("CARGO_PKG_NAME").to_string())),
            [uri] => resolve_uri(uri).map(Command::Play),
            uris => Err(CliError::MultipleUris(uris.len())),
        }
    }
}

pub fn version_string() -> String {
    format!("{}: {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
}

/// Passes URIs through and turns anything else into a `file://` URI.
pub fn resolve_uri(arg: &str) -> Result<String, CliError> {
    if has_uri_scheme(arg) {
        return Ok(arg.to_string());
    }
    let invalid = |reason: String| CliError::InvalidPath {
        path: arg.to_string(),
        reason,
    };
    let path = std::path::absolute(arg).map_err(|err| invalid(err.to_string()))?;
    gst::glib::filename_to_uri(&path, None)
        .map(|uri| uri.to_string())
        .map_err(|err| invalid(err.to_string()))
}

// RFC 3986 scheme followed by "://".
fn has_uri_scheme(arg: &str) -> bool {
    let Some((scheme, _)) = arg.split_once("://") else {
        return false;
    };
    let mut chars = scheme.chars();
    chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}
