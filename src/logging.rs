//! Logging bootstrap.
//!
//! Diagnostics go to stderr so generated output and progress lines on
//! stdout stay clean. `RUST_LOG` takes precedence over the verbosity flag.

use anyhow::{Context, Result};
use flexi_logger::{Logger, LoggerHandle, WriteMode};

/// Maps `-v` count to a log specification.
pub fn level_for_verbosity(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    }
}

/// Starts the stderr logger.
///
/// The returned handle must be kept alive for the duration of the process.
///
/// # Errors
///
/// Returns error if the log specification is invalid or a logger is
/// already installed.
pub fn init_logging(verbosity: u8) -> Result<LoggerHandle> {
    Logger::try_with_env_or_str(level_for_verbosity(verbosity))
        .context("Invalid log specification")?
        .log_to_stderr()
        .write_mode(WriteMode::Direct)
        .start()
        .context("Failed to start logger")
}
