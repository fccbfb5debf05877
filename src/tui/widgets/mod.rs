//! Custom widgets for the TUI.
//!
//! This module contains specialized widgets for rendering the scripny interface.

mod description;
mod filter;
mod footer;
mod header;
mod scripts;

pub use description::Description;
pub use filter::{Filter, FILTER_LABEL, SEARCH_PROMPT};
pub use footer::{confirm_prompt, Footer, BROWSE_HINTS, SEARCH_HINTS};
pub use header::{truncate_with_ellipsis, Header, TITLE};
pub use scripts::{EmptyScripts, ScriptList};
