//! Terminal state shared by the TUI, the child runner and signal handling.
//!
//! The flags let the panic hook and the signal thread restore exactly what
//! the session changed, from any thread.

use std::io::{self, Write};
use std::sync::atomic::{AtomicBool, Ordering};

use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{cursor, execute};

static RAW_MODE: AtomicBool = AtomicBool::new(false);
static ALTERNATE_SCREEN: AtomicBool = AtomicBool::new(false);
static CHILD_RUNNING: AtomicBool = AtomicBool::new(false);

/// Enable raw mode.
///
/// # Errors
///
/// Returns an error if raw mode cannot be enabled.
pub fn enable_raw_mode() -> io::Result<()> {
    terminal::enable_raw_mode()?;
    RAW_MODE.store(true, Ordering::SeqCst);
    Ok(())
}

/// Disable raw mode.
///
/// # Errors
///
/// Returns an error if raw mode cannot be disabled.
pub fn disable_raw_mode() -> io::Result<()> {
    terminal::disable_raw_mode()?;
    RAW_MODE.store(false, Ordering::SeqCst);
    Ok(())
}

/// Check if this process put the terminal in raw mode.
pub fn is_raw_mode_enabled() -> bool {
    RAW_MODE.load(Ordering::SeqCst)
}

/// Enter the alternate screen and hide the cursor.
///
/// # Errors
///
/// Returns an error if the escape sequences cannot be written.
pub fn enter_alternate_screen() -> io::Result<()> {
    execute!(io::stdout(), EnterAlternateScreen, cursor::Hide)?;
    ALTERNATE_SCREEN.store(true, Ordering::SeqCst);
    Ok(())
}

/// Leave the alternate screen and show the cursor.
///
/// # Errors
///
/// Returns an error if the escape sequences cannot be written.
pub fn leave_alternate_screen() -> io::Result<()> {
    execute!(io::stdout(), LeaveAlternateScreen, cursor::Show)?;
    ALTERNATE_SCREEN.store(false, Ordering::SeqCst);
    Ok(())
}

/// Mark whether a child script currently owns the terminal.
pub fn set_child_running(running: bool) {
    CHILD_RUNNING.store(running, Ordering::SeqCst);
}

/// Check if a child script currently owns the terminal.
pub fn is_child_running() -> bool {
    CHILD_RUNNING.load(Ordering::SeqCst)
}

/// Put the terminal back the way it was before the session.
///
/// Safe to call more than once and from any thread; only undoes what the
/// flags say is in effect.
pub fn restore_terminal() -> io::Result<()> {
    if is_raw_mode_enabled() {
        disable_raw_mode()?;
    }
    if ALTERNATE_SCREEN.load(Ordering::SeqCst) {
        leave_alternate_screen()?;
    }
    io::stdout().flush()
}

/// Raw mode released for a foreground child; restored on drop.
///
/// Leaving the alternate screen happens on creation. Re-entering it is left
/// to the caller, which first shows the result on the normal screen.
#[must_use = "raw mode is re-enabled when the guard is dropped"]
pub struct CookedModeGuard {
    _private: (),
}

impl CookedModeGuard {
    /// Leave the alternate screen and disable raw mode.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal cannot be switched.
    pub fn new() -> io::Result<Self> {
        leave_alternate_screen()?;
        disable_raw_mode()?;
        io::stdout().flush()?;
        Ok(Self { _private: () })
    }
}

impl Drop for CookedModeGuard {
    fn drop(&mut self) {
        set_child_running(false);
        if let Err(e) = enable_raw_mode() {
            tracing::warn!(error = %e, "failed to re-enable raw mode");
        }
    }
}
