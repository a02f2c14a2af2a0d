//! Log subscriber setup for the binary

use anyhow::{Context, Result, anyhow};
use std::fs::File;
use std::path::Path;
use std::sync::Mutex;
use tracing::Level;

/// Map a `-v` count to a log level; zero disables logging
#[must_use]
pub const fn level_for(verbosity: u8) -> Option<Level> {
    match verbosity {
        0 => None,
        1 => Some(Level::INFO),
        2 => Some(Level::DEBUG),
        _ => Some(Level::TRACE),
    }
}

/// Install the global fmt subscriber
///
/// Logs go to `log_file` when given, otherwise to stderr. A full-screen
/// front-end owns the terminal, so without a log file nothing is installed
/// when `full_screen` is set.
///
/// # Errors
///
/// Returns an error if the log file cannot be created or a global subscriber
/// is already installed.
pub fn init(verbosity: u8, log_file: Option<&Path>, full_screen: bool) -> Result<()> {
    let Some(level) = level_for(verbosity) else {
        return Ok(());
    };

    match log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("cannot create log file {}", path.display()))?;
            tracing_subscriber::fmt()
                .with_max_level(level)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
                .map_err(|e| anyhow!(e))
        }
        None if full_screen => Ok(()),
        None => tracing_subscriber::fmt()
            .with_max_level(level)
            .with_writer(std::io::stderr)
            .try_init()
            .map_err(|e| anyhow!(e)),
    }
}
