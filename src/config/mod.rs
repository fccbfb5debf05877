//! Configuration module for scripny.
//!
//! Handles loading and merging configuration from multiple sources:
//! - CLI arguments (highest priority)
//! - `.scripnyrc.toml` in the working directory
//! - User-level `~/.config/scripny/config.toml`

pub mod file;
mod types;

pub use file::{generate_example_config, load_config, LOCAL_CONFIG_FILE};
pub use types::{
    AppearanceConfig, AppearanceLayer, Config, ConfigLayer, ExcludeConfig, FilterConfig,
    FilterLayer, GeneralConfig, GeneralLayer, Theme, DEFAULT_PAGE_SIZE, DEFAULT_PATTERN,
    DEFAULT_ROOT, DEFAULT_SEARCH_LENGTH,
};
