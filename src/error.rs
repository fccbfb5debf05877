//! Custom error types for scripny.
//!
//! Uses thiserror for ergonomic error definitions.

use std::path::PathBuf;

use thiserror::Error;

/// Exit codes for scripny.
pub mod exit_code {
    /// Success.
    pub const SUCCESS: i32 = 0;
    /// General error.
    pub const GENERAL_ERROR: i32 = 1;
    /// Script root directory does not exist.
    pub const NO_SCRIPT_ROOT: i32 = 2;
    /// Invalid configuration.
    pub const INVALID_CONFIG: i32 = 3;
    /// Base value added to a signal number on signal shutdown.
    pub const SIGNAL_BASE: i32 = 128;
    /// Interrupted (SIGINT).
    pub const INTERRUPTED: i32 = 130;
}

/// Main error type for scripny.
#[derive(Error, Debug)]
pub enum ScripnyError {
    /// The script root does not exist or is not a directory.
    #[error("Script directory not found: {path}\n\nTip: Create the directory, pass another one as an argument, or set `root` in your config.")]
    NoScriptRoot { path: PathBuf },

    /// Invalid configuration file.
    #[error("Invalid config at {path}:\n  {message}\n\nTip: Check the config file syntax and ensure all values are valid.")]
    InvalidConfig { path: PathBuf, message: String },

    /// Configuration value out of range.
    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    /// Invalid exclude glob pattern.
    #[error("Invalid exclude pattern '{pattern}': {message}")]
    InvalidPattern { pattern: String, message: String },

    /// The catalog could not grow.
    #[error("Out of memory while {operation} ({requested} entries requested)")]
    OutOfMemory {
        operation: &'static str,
        requested: usize,
    },
}

impl ScripnyError {
    /// Get the exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            ScripnyError::NoScriptRoot { .. } => exit_code::NO_SCRIPT_ROOT,
            ScripnyError::InvalidConfig { .. } => exit_code::INVALID_CONFIG,
            ScripnyError::ConfigError { .. } => exit_code::INVALID_CONFIG,
            ScripnyError::InvalidPattern { .. } => exit_code::INVALID_CONFIG,
            ScripnyError::OutOfMemory { .. } => exit_code::GENERAL_ERROR,
        }
    }
}

/// Result type alias for scripny operations.
pub type Result<T> = std::result::Result<T, ScripnyError>;
