use std::fs::OpenOptions;
use std::io;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use crate::config::Config;

/// Install the file logger when `--debug` is set. Without it no subscriber
/// is installed and events are dropped; the terminal is never written to.
///
/// The returned guard must live until exit so buffered lines get flushed.
pub fn init(config: &Config) -> io::Result<Option<WorkerGuard>> {
    if !config.debug {
        return Ok(None);
    }

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&config.log_file)?;
    let (writer, guard) = tracing_appender::non_blocking(file);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("mcli=debug"));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(writer).with_ansi(false))
        .with(filter)
        .init();

    Ok(Some(guard))
}
