//! CLI argument definitions for scripny.
//!
//! Uses clap with derive macros for argument parsing.
//!
//! # Example
//!
//! ```no_run
//! use scripny::cli::Cli;
//!
//! let cli = Cli::parse_args();
//! println!("Script root: {:?}", cli.root);
//! ```

use std::path::PathBuf;

use clap::{CommandFactory, Parser, ValueEnum};
use clap_complete::{generate, Shell};

use crate::config::Config;

/// Interactive terminal menu for browsing and running shell scripts.
#[derive(Parser, Debug)]
#[command(name = "scripny")]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help = false)]
pub struct Cli {
    /// Directory to search for scripts (default: scripts/)
    #[arg(value_name = "ROOT")]
    pub root: Option<PathBuf>,

    /// Substring a file name must contain to be listed
    #[arg(short, long, value_name = "TEXT")]
    pub pattern: Option<String>,

    /// Number of scripts shown per page
    #[arg(long, value_name = "N")]
    pub page_size: Option<usize>,

    /// Exclude scripts matching glob pattern (can be repeated)
    #[arg(short, long, value_name = "PATTERN")]
    pub exclude: Vec<String>,

    /// List scripts non-interactively (no TUI)
    #[arg(short, long)]
    pub list: bool,

    /// Path to config file
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Ignore config files
    #[arg(long)]
    pub no_config: bool,

    /// Enable debug output
    #[arg(long)]
    pub debug: bool,

    /// Write logs to this file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Generate shell completions
    #[arg(long, value_name = "SHELL", value_enum)]
    pub completions: Option<CliShell>,

    /// Print a documented example config file and exit
    #[arg(long)]
    pub print_config: bool,
}

/// Shell type for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum CliShell {
    /// Bash shell
    Bash,
    /// Zsh shell
    Zsh,
    /// Fish shell
    Fish,
    /// PowerShell
    Powershell,
    /// Elvish shell
    Elvish,
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }

    /// Check if TUI should be shown.
    pub fn should_show_tui(&self) -> bool {
        !self.list
    }

    /// Apply flag overrides on top of a loaded configuration.
    pub fn apply_to(&self, config: &mut Config) {
        if let Some(root) = &self.root {
            config.general.root = root.clone();
        }
        if let Some(pattern) = &self.pattern {
            config.general.pattern = pattern.clone();
        }
        if let Some(page_size) = self.page_size {
            config.general.page_size = page_size;
        }
        config.exclude.patterns.extend(self.exclude.iter().cloned());
    }

    /// Generate shell completions and write to stdout.
    pub fn generate_completions(shell: CliShell) {
        let mut cmd = Cli::command();
        let shell = match shell {
            CliShell::Bash => Shell::Bash,
            CliShell::Zsh => Shell::Zsh,
            CliShell::Fish => Shell::Fish,
            CliShell::Powershell => Shell::PowerShell,
            CliShell::Elvish => Shell::Elvish,
        };
        generate(shell, &mut cmd, "scripny", &mut std::io::stdout());
    }
}
