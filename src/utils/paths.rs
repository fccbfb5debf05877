//! Path utilities.

use std::path::{Path, PathBuf};

use crate::config::LOCAL_CONFIG_FILE;

/// Get the config directory for scripny.
///
/// Returns `~/.config/scripny` on Unix-like systems.
pub fn config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("scripny"))
}

/// Get the global config file path.
///
/// Returns `~/.config/scripny/config.toml`.
pub fn global_config_file() -> Option<PathBuf> {
    config_dir().map(|p| p.join("config.toml"))
}

/// Find the local config file in a directory.
///
/// Looks for `.scripnyrc.toml` in the given directory.
pub fn local_config_file(dir: &Path) -> Option<PathBuf> {
    let config_file = dir.join(LOCAL_CONFIG_FILE);
    if config_file.exists() {
        Some(config_file)
    } else {
        None
    }
}

/// Pick the script root: the CLI argument wins over the configured one.
///
/// Relative roots stay relative, so displayed and executed paths match what
/// the user typed.
pub fn resolve_root(cli_root: Option<&Path>, configured: &Path) -> PathBuf {
    cli_root.unwrap_or(configured).to_path_buf()
}

/// Render a root for display, with a trailing separator.
pub fn display_root(root: &Path) -> String {
    let text = root.to_string_lossy();
    if text.ends_with('/') || text.ends_with(std::path::MAIN_SEPARATOR) {
        text.into_owned()
    } else {
        format!("{text}/")
    }
}
