//! Termination signal handling.

use anyhow::Result;

/// Exit code for a shutdown caused by `signal`.
pub fn signal_exit_code(signal: i32) -> i32 {
    crate::error::exit_code::SIGNAL_BASE + signal
}

/// Install a listener that restores the terminal and exits on SIGINT,
/// SIGTERM and SIGHUP.
///
/// SIGINT is ignored while a child script runs: the child is in the same
/// foreground process group and gets the interrupt itself.
///
/// # Errors
///
/// Returns an error if the handlers cannot be registered.
#[cfg(unix)]
pub fn install_signal_handlers() -> Result<()> {
    use anyhow::Context;
    use signal_hook::consts::{SIGHUP, SIGINT, SIGTERM};
    use signal_hook::iterator::Signals;

    use super::terminal;

    let mut signals =
        Signals::new([SIGINT, SIGTERM, SIGHUP]).context("Failed to register signal handlers")?;

    std::thread::Builder::new()
        .name("scripny-signals".to_string())
        .spawn(move || {
            for signal in signals.forever() {
                if signal == SIGINT && terminal::is_child_running() {
                    tracing::debug!("SIGINT delivered to running script");
                    continue;
                }
                tracing::info!(signal, "shutting down on signal");
                let _ = terminal::restore_terminal();
                std::process::exit(signal_exit_code(signal));
            }
        })
        .context("Failed to spawn signal listener")?;

    Ok(())
}

/// No-op outside Unix.
#[cfg(not(unix))]
pub fn install_signal_handlers() -> Result<()> {
    Ok(())
}
