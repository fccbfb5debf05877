//! Build script for scripny.
//!
//! Generates man pages using clap_mangen.

use std::env;
use std::fs;
use std::path::PathBuf;

use clap::{CommandFactory, Parser, ValueEnum};

/// Minimal CLI struct for man page generation.
///
/// Mirrors `src/cli.rs`; the build script cannot depend on the crate itself.
#[derive(Parser)]
#[command(name = "scripny")]
#[command(
    author,
    version,
    about = "Interactive terminal menu for browsing and running shell scripts"
)]
#[command(
    long_about = "scripny scans a directory tree (scripts/ by default) for shell scripts \
    and shows them in a paged menu with each script's description.\n\n\
    Use j/k to move, / to search, x to execute the selected script and q to quit. \
    Execution asks for confirmation and reports whether the script succeeded, \
    failed or was interrupted."
)]
struct Cli {
    /// Directory to search for scripts (default: scripts/)
    #[arg(value_name = "ROOT")]
    root: Option<PathBuf>,

    /// Substring a file name must contain to be listed
    #[arg(short, long, value_name = "TEXT")]
    pattern: Option<String>,

    /// Number of scripts shown per page
    #[arg(long, value_name = "N")]
    page_size: Option<usize>,

    /// Exclude scripts matching glob pattern (can be repeated)
    #[arg(short, long, value_name = "PATTERN")]
    exclude: Vec<String>,

    /// List scripts non-interactively (no TUI)
    #[arg(short, long)]
    list: bool,

    /// Path to config file
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Ignore config files
    #[arg(long)]
    no_config: bool,

    /// Enable debug output
    #[arg(long)]
    debug: bool,

    /// Write logs to this file
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Generate shell completions
    #[arg(long, value_name = "SHELL", value_enum)]
    completions: Option<Shell>,

    /// Print a documented example config file and exit
    #[arg(long)]
    print_config: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum Shell {
    Bash,
    Zsh,
    Fish,
    Powershell,
    Elvish,
}

fn main() {
    println!("cargo:rerun-if-changed=build.rs");

    // Only generate man pages for release builds or when explicitly requested
    let profile = env::var("PROFILE").unwrap_or_default();
    if profile != "release" && env::var("SCRIPNY_GEN_MANPAGE").is_err() {
        return;
    }

    let out_dir = match env::var_os("OUT_DIR") {
        Some(dir) => PathBuf::from(dir),
        None => return,
    };

    let man = clap_mangen::Man::new(Cli::command());

    let mut buffer = Vec::new();
    if let Err(e) = man.render(&mut buffer) {
        println!("cargo:warning=failed to render man page: {e}");
        return;
    }

    let man_path = out_dir.join("scripny.1");
    if let Err(e) = fs::write(&man_path, buffer) {
        println!("cargo:warning=failed to write man page: {e}");
        return;
    }

    // Also copy to docs directory for distribution
    if let Some(manifest_dir) = env::var_os("CARGO_MANIFEST_DIR") {
        let docs_dir = PathBuf::from(manifest_dir).join("docs");
        if docs_dir.exists() {
            let _ = fs::copy(&man_path, docs_dir.join("scripny.1"));
        }
    }
}
