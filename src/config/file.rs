//! Configuration file loading and parsing.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use super::types::{Config, ConfigLayer};
use crate::error::ScripnyError;

/// Name of the project-level config file, looked up in the working directory.
pub const LOCAL_CONFIG_FILE: &str = ".scripnyrc.toml";

/// Load one config file as a layer holding only the keys it sets.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
fn load_config_from_path(path: &Path) -> Result<ConfigLayer> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    let layer: ConfigLayer = toml::from_str(&content).map_err(|e| ScripnyError::InvalidConfig {
        path: path.to_path_buf(),
        message: e.message().to_string(),
    })?;

    Ok(layer)
}

/// Load configuration with proper priority and merging.
///
/// Searches for config files in order of priority (lowest to highest):
/// 1. `~/.config/scripny/config.toml` (user-level, lowest priority)
/// 2. `.scripnyrc.toml` in the working directory (project-level)
/// 3. CLI argument `--config <path>` (highest priority)
///
/// Missing config files are handled gracefully (defaults are used).
///
/// # Errors
///
/// Returns an error if a config file specified via CLI cannot be read or
/// parsed, or if the merged result fails validation.
pub fn load_config(cli_config_path: Option<&Path>, working_dir: &Path) -> Result<Config> {
    let mut config = Config::default();

    if let Some(user_config_path) = Config::user_config_path() {
        if user_config_path.exists() {
            match load_config_from_path(&user_config_path) {
                Ok(user_layer) => config.merge(user_layer),
                Err(e) => {
                    tracing::warn!(
                        path = %user_config_path.display(),
                        error = %e,
                        "ignoring user config"
                    );
                    eprintln!(
                        "Warning: Failed to load user config at {}: {}",
                        user_config_path.display(),
                        e
                    );
                }
            }
        }
    }

    let project_config_path = working_dir.join(LOCAL_CONFIG_FILE);
    if project_config_path.exists() {
        match load_config_from_path(&project_config_path) {
            Ok(project_layer) => config.merge(project_layer),
            Err(e) => {
                tracing::warn!(
                    path = %project_config_path.display(),
                    error = %e,
                    "ignoring project config"
                );
                eprintln!(
                    "Warning: Failed to load project config at {}: {}",
                    project_config_path.display(),
                    e
                );
            }
        }
    }

    if let Some(cli_path) = cli_config_path {
        let cli_layer = load_config_from_path(cli_path).with_context(|| {
            format!(
                "Failed to load config from CLI-specified path: {}",
                cli_path.display()
            )
        })?;
        config.merge(cli_layer);
    }

    config.validate()?;

    Ok(config)
}

/// Generate an example configuration file with all options documented.
pub fn generate_example_config() -> String {
    r#"# scripny Configuration File
# Place this file at ~/.config/scripny/config.toml for global settings
# or .scripnyrc.toml in the directory you launch scripny from

# General settings
[general]
# Directory searched (recursively) for scripts
root = "scripts/"

# A file counts as a script when its name contains this marker
pattern = ".sh"

# Scripts shown per page
page_size = 15

# Key that confirms execution at the prompt
confirm_key = "y"

# Shell used to launch the selected script
shell = "sh"

# Line of each script read as its description (1-based)
description_line = 3

# Filter settings
[filter]
# Case sensitive search
case_sensitive = true

# Fuzzy matching instead of plain substring matching
fuzzy = false

# Longest search term accepted, in characters
max_length = 255

# Exclude patterns
[exclude]
# Glob patterns matched against paths relative to the root
patterns = [
    # "legacy/*",
    # "*.disabled.sh",
]

# Appearance settings
[appearance]
# Color theme: "default", "minimal", "none"
theme = "default"

# Show key hints footer
show_footer = true

# Show the description of the selected script
show_description = true
"#
    .to_string()
}
