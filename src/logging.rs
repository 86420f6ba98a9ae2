use std::fs::{self, OpenOptions};
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;

/// Environment variable holding an `EnvFilter` directive.
pub const LOG_ENV_VAR: &str = "FELINE_LOG";

/// Installs the global tracing subscriber, writing to the configured log file.
///
/// The terminal is in raw mode with the alternate screen active, so nothing may
/// be written to stdout or stderr. Returns the path being written to.
pub fn init_tracing(config: &LoggingConfig) -> io::Result<PathBuf> {
    let path = config.file_path();
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(&path)?;

    let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
        .unwrap_or_else(|_| EnvFilter::new(config.level.as_str()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true)
        .with_ansi(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .with_writer(Mutex::new(file))
        .try_init()
        .map_err(io::Error::other)?;

    Ok(path)
}
