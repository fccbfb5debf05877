//! Log file setup.
//!
//! The TUI owns the screen, so events only go to a file given with
//! `--log-file`. Without one, no subscriber is installed and `tracing`
//! macros are no-ops.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

/// Environment variable holding filter directives.
pub const LOG_ENV: &str = "SCRIPNY_LOG";

/// Build the filter: `SCRIPNY_LOG` wins, then the debug flag default.
fn build_env_filter(debug: bool) -> EnvFilter {
    if let Ok(directives) = std::env::var(LOG_ENV) {
        if let Ok(filter) = EnvFilter::try_new(&directives) {
            return filter;
        }
    }

    EnvFilter::new(default_directive(debug))
}

fn default_directive(debug: bool) -> &'static str {
    if debug {
        "scripny=debug"
    } else {
        "scripny=info"
    }
}

/// Install a plain-text subscriber appending to `log_file`.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or a global subscriber is
/// already installed.
pub fn init_logging(log_file: Option<&Path>, debug: bool) -> Result<()> {
    let Some(path) = log_file else {
        return Ok(());
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open log file: {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(build_env_filter(debug))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to install logger: {e}"))?;

    tracing::debug!(path = %path.display(), "logging initialised");
    Ok(())
}
