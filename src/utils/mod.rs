//! Utility module for scripny.
//!
//! Common utilities for paths, terminal state, and signal handling.

mod paths;
mod signals;
mod terminal;

pub use paths::{config_dir, display_root, global_config_file, local_config_file, resolve_root};
pub use signals::{install_signal_handlers, signal_exit_code};
pub use terminal::{
    disable_raw_mode, enable_raw_mode, enter_alternate_screen, is_child_running,
    is_raw_mode_enabled, leave_alternate_screen, restore_terminal, set_child_running,
    CookedModeGuard,
};
