//! Tracing subscriber setup.

use std::fs::File;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Environment variable holding the log filter directives.
const FILTER_ENV: &str = "COLORSTRIP_LOG";

/// Install the global subscriber.
///
/// The terminal UI owns stdout and stderr while playing, so logs only go to
/// `log_file` unless `to_stderr` is set.
pub fn init(log_file: Option<&Path>, to_stderr: bool) -> color_eyre::Result<()> {
    let filter = || EnvFilter::try_from_env(FILTER_ENV).unwrap_or_else(|_| EnvFilter::new("info"));
    match log_file {
        Some(path) => {
            let file = File::create(path)?;
            tracing_subscriber::registry()
                .with(fmt::layer().with_writer(Mutex::new(file)).with_ansi(false))
                .with(filter())
                .try_init()?;
        }
        None if to_stderr => {
            tracing_subscriber::registry()
                .with(fmt::layer().with_writer(std::io::stderr))
                .with(filter())
                .try_init()?;
        }
        None => {}
    }
    Ok(())
}
