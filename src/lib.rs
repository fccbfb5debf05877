//! scripny - script menu
//!
//! An interactive terminal menu for discovering, filtering and executing
//! shell scripts kept under a directory tree.
//!
//! # Features
//!
//! - **Discovery**: recursive scan of a root directory, depth-first ordering
//! - **Search**: substring (or optional fuzzy) filtering over relative paths
//! - **Descriptions**: a comment line of each script shown under the list
//! - **Execution**: confirm, run in the foreground, report the outcome
//!
//! # Modules
//!
//! - [`catalog`] - Script discovery, ordering and descriptions
//! - [`cli`] - Command-line interface argument parsing
//! - [`config`] - Configuration file loading and types
//! - [`error`] - Error types and result helpers
//! - [`filter`] - Search over the catalog
//! - [`logging`] - Log file setup
//! - [`runner`] - Script execution
//! - [`tui`] - Terminal user interface
//! - [`utils`] - Path, terminal and signal utilities
//!
//! # Example
//!
//! ```no_run
//! use scripny::catalog::{load_catalog, DiscoveryOptions};
//! use scripny::filter::filter;
//! use std::path::Path;
//!
//! let catalog = load_catalog(Path::new("scripts/"), &DiscoveryOptions::new(".sh"))
//!     .expect("Failed to scan scripts");
//!
//! for entry in filter(&catalog, "deploy").iter() {
//!     println!("{}", entry.relative());
//! }
//! ```

/// Script discovery, ordering and descriptions.
pub mod catalog;

/// CLI argument definitions.
pub mod cli;

/// Configuration system for loading and merging settings.
pub mod config;

/// Error types and result helpers.
pub mod error;

/// Search over the catalog.
pub mod filter;

/// Log file setup.
pub mod logging;

/// Script execution.
pub mod runner;

/// Terminal user interface.
pub mod tui;

/// Path, terminal and signal utilities.
pub mod utils;

// Re-export commonly used types
pub use catalog::{ScriptCatalog, ScriptEntry};
pub use cli::Cli;
pub use config::Config;
pub use error::{Result, ScripnyError};
pub use filter::FilterView;
pub use runner::{ExecOutcome, ExecutionResult};
