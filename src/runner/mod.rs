//! Runner module for scripny.
//!
//! Handles running the selected script as a child process.

mod executor;

pub use executor::{execute_script, format_command, run_script, ExecOutcome, ExecutionResult};
