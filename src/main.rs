//! scripny - script menu
//!
//! Entry point for the scripny CLI application.

use std::io::{self, IsTerminal};
use std::path::Path;
use std::process::ExitCode;

use anyhow::{Context, Result};

use scripny::catalog::{load_catalog, read_description, DiscoveryOptions, ScriptCatalog};
use scripny::cli::Cli;
use scripny::config::{generate_example_config, Config, LOCAL_CONFIG_FILE};
use scripny::error::{exit_code, ScripnyError};
use scripny::logging::init_logging;
use scripny::tui::{run_tui, App};
use scripny::utils::{
    display_root, global_config_file, install_signal_handlers, local_config_file, resolve_root,
};

fn main() -> ExitCode {
    match run() {
        Ok(code) => ExitCode::from(code as u8),
        Err(err) => {
            // Check if it's one of our custom errors with good formatting
            if let Some(scripny_err) = err.downcast_ref::<ScripnyError>() {
                eprintln!("Error: {scripny_err}");
                return ExitCode::from(scripny_err.exit_code() as u8);
            }
            eprintln!("Error: {err:#}");
            ExitCode::from(exit_code::GENERAL_ERROR as u8)
        }
    }
}

fn run() -> Result<i32> {
    let cli = Cli::parse_args();

    // Handle shell completions early
    if let Some(shell) = cli.completions {
        Cli::generate_completions(shell);
        return Ok(exit_code::SUCCESS);
    }

    if cli.print_config {
        print!("{}", generate_example_config());
        return Ok(exit_code::SUCCESS);
    }

    init_logging(cli.log_file.as_deref(), cli.debug)?;

    if cli.debug {
        print_debug_header();
        eprintln!("Debug: CLI arguments = {cli:#?}");
    }

    let working_dir = std::env::current_dir().context("Failed to read working directory")?;

    let mut config = if cli.no_config {
        Config::default()
    } else {
        scripny::config::load_config(cli.config.as_deref(), &working_dir)?
    };
    cli.apply_to(&mut config);
    config.validate()?;

    let root = resolve_root(cli.root.as_deref(), &config.general.root);
    let options = DiscoveryOptions::new(config.general.pattern.clone())
        .with_excludes(&config.exclude.patterns)?;

    if cli.debug {
        print_debug_paths(&working_dir, &root);
        eprintln!("Debug: Config = {config:#?}");
    }

    if !cli.should_show_tui() {
        if !root.is_dir() {
            return Err(ScripnyError::NoScriptRoot { path: root }.into());
        }
        let catalog = load_catalog(&root, &options)?;
        if cli.debug {
            print_debug_catalog(&catalog);
        }
        return list_scripts(&catalog, config.general.description_line);
    }

    // A missing root just shows an empty menu
    let catalog = load_catalog(&root, &options)?;
    tracing::info!(
        root = %root.display(),
        scripts = catalog.len(),
        "catalog loaded"
    );

    if cli.debug {
        print_debug_catalog(&catalog);
    }

    install_signal_handlers()?;

    let app = App::new(catalog, config);
    run_tui(app).context("TUI error")?;

    Ok(exit_code::SUCCESS)
}

/// List scripts in a nice format (non-TUI mode).
fn list_scripts(catalog: &ScriptCatalog, description_line: usize) -> Result<i32> {
    let use_colors = io::stdout().is_terminal();

    // Print header
    if use_colors {
        println!("\x1b[1;36mAvailable scripts ({}):\x1b[0m", catalog.len());
    } else {
        println!("Available scripts ({}):", catalog.len());
    }
    println!();

    // Find the longest path for alignment
    let width = catalog
        .iter()
        .map(|e| e.relative().chars().count())
        .max()
        .unwrap_or(0)
        .min(40);

    for entry in catalog {
        let description = read_description(entry.path(), description_line);
        let name = truncate_string(entry.relative(), 40);

        if use_colors {
            println!(
                "  \x1b[1;32m{name:width$}\x1b[0m  \x1b[33m{}\x1b[0m",
                truncate_string(&description, 60)
            );
        } else {
            println!("  {name:width$}  {}", truncate_string(&description, 60));
        }
    }

    // Print count
    println!();
    if use_colors {
        println!("\x1b[2m{} scripts found\x1b[0m", catalog.len());
    } else {
        println!("{} scripts found", catalog.len());
    }

    Ok(exit_code::SUCCESS)
}

/// Truncate a string to a maximum length, adding ellipsis if needed.
/// Handles Unicode characters properly.
fn truncate_string(s: &str, max_len: usize) -> String {
    if max_len < 4 {
        return s.chars().take(max_len).collect();
    }

    let char_count = s.chars().count();
    if char_count <= max_len {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max_len - 3).collect();
        format!("{truncated}...")
    }
}

// ==================== Debug Functions ====================

/// Print debug header with version info.
fn print_debug_header() {
    eprintln!("=== scripny debug mode ===");
    eprintln!("Version: {}", env!("CARGO_PKG_VERSION"));
    eprintln!();
}

/// Print debug information about file paths.
fn print_debug_paths(working_dir: &Path, root: &Path) {
    eprintln!("Debug: File locations:");

    if let Some(cfg) = global_config_file() {
        let exists = cfg.exists();
        eprintln!("  Global config: {} (exists: {})", cfg.display(), exists);
    } else {
        eprintln!("  Global config: <not available>");
    }

    if let Some(cfg) = local_config_file(working_dir) {
        eprintln!("  Local config: {} (exists: true)", cfg.display());
    } else {
        eprintln!(
            "  Local config: {}/{LOCAL_CONFIG_FILE} (exists: false)",
            working_dir.display()
        );
    }

    eprintln!(
        "  Script root: {} (exists: {})",
        display_root(root),
        root.is_dir()
    );
    eprintln!();
}

/// Print debug information about discovered scripts.
fn print_debug_catalog(catalog: &ScriptCatalog) {
    eprintln!("Debug: {} scripts found:", catalog.len());
    for entry in catalog.iter().take(10) {
        eprintln!("  {} = {}", entry.relative(), entry.path().display());
    }
    if catalog.len() > 10 {
        eprintln!("  ... and {} more", catalog.len() - 10);
    }
    eprintln!();
}
