//! TUI module for scripny.
//!
//! Provides the terminal user interface for browsing, filtering and running
//! scripts.

mod app;
mod input;
mod layout;
pub mod pager;
mod theme;
mod ui;
pub mod widgets;

pub use app::{App, AppMode, LastRun, SessionState};
pub use input::{handle_event, handle_key, is_confirmation, Command};
pub use layout::{MainLayout, MIN_HEIGHT, MIN_WIDTH};
pub use pager::{page_window, PageWindow};
pub use theme::Theme;
pub use ui::{render, run_tui, TerminalGuard};
