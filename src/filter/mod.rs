//! Filter module for scripny.
//!
//! Derives the visible subset of the catalog from the current search term.

mod fuzzy;
mod view;

pub use fuzzy::fuzzy_matches;
pub use view::{filter, filter_with, FilterOptions, FilterView};
