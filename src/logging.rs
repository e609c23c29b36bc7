//! Tracing setup
//!
//! Logging is off unless `GLITCH_WORDLE_LOG` names a file; writing to the
//! terminal would corrupt the interactive screen.

use std::sync::Mutex;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable holding the log file path
pub const LOG_ENV: &str = "GLITCH_WORDLE_LOG";

/// Initialize tracing with optional file output.
///
/// The filter defaults to `info` and can be overridden with `RUST_LOG`.
pub fn init() {
    let Some(log_path) = std::env::var_os(LOG_ENV) else {
        return;
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let file = match std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
    {
        Ok(file) => file,
        Err(e) => {
            eprintln!(
                "Warning: Failed to open log file {}: {e}",
                std::path::Path::new(&log_path).display()
            );
            return;
        }
    };

    let file_layer = fmt::layer()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .with_level(true);

    // A second init (e.g. from tests) keeps the first subscriber
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .try_init();
}
