//! Configuration type definitions.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Default script root, relative to the working directory.
pub const DEFAULT_ROOT: &str = "scripts/";

/// Default file name marker for scripts.
pub const DEFAULT_PATTERN: &str = ".sh";

/// Default number of scripts per page.
pub const DEFAULT_PAGE_SIZE: usize = 15;

/// Default maximum search term length, in characters.
pub const DEFAULT_SEARCH_LENGTH: usize = 255;

/// Default line holding a script's description (1-based).
pub const DEFAULT_DESCRIPTION_LINE: usize = 3;

/// Color theme for the TUI.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Full color theme.
    #[default]
    Default,
    /// Minimal colors.
    Minimal,
    /// No colors (monochrome).
    None,
}

/// General configuration settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Directory searched for scripts.
    #[serde(default = "default_root")]
    pub root: PathBuf,
    /// Substring a file name must contain to count as a script.
    #[serde(default = "default_pattern")]
    pub pattern: String,
    /// Scripts shown per page.
    #[serde(default = "default_page_size")]
    pub page_size: usize,
    /// Key that confirms execution.
    #[serde(default = "default_confirm_key")]
    pub confirm_key: char,
    /// Shell used to launch scripts.
    #[serde(default = "default_shell")]
    pub shell: String,
    /// Line of the script file read as its description (1-based).
    #[serde(default = "default_description_line")]
    pub description_line: usize,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            root: default_root(),
            pattern: default_pattern(),
            page_size: DEFAULT_PAGE_SIZE,
            confirm_key: default_confirm_key(),
            shell: default_shell(),
            description_line: DEFAULT_DESCRIPTION_LINE,
        }
    }
}

/// Filter configuration settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilterConfig {
    /// Case sensitive search.
    #[serde(default = "default_true")]
    pub case_sensitive: bool,
    /// Fuzzy instead of substring matching.
    #[serde(default)]
    pub fuzzy: bool,
    /// Maximum search term length, in characters.
    #[serde(default = "default_search_length")]
    pub max_length: usize,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            case_sensitive: true,
            fuzzy: false,
            max_length: DEFAULT_SEARCH_LENGTH,
        }
    }
}

/// Exclude patterns configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExcludeConfig {
    /// Glob patterns matched against root-relative script paths.
    #[serde(default)]
    pub patterns: Vec<String>,
}

/// Appearance configuration settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppearanceConfig {
    /// Color theme.
    #[serde(default)]
    pub theme: Theme,
    /// Show help footer.
    #[serde(default = "default_true")]
    pub show_footer: bool,
    /// Show the description panel.
    #[serde(default = "default_true")]
    pub show_description: bool,
}

impl Default for AppearanceConfig {
    fn default() -> Self {
        Self {
            theme: Theme::default(),
            show_footer: true,
            show_description: true,
        }
    }
}

/// Main configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// General settings.
    #[serde(default)]
    pub general: GeneralConfig,
    /// Filter settings.
    #[serde(default)]
    pub filter: FilterConfig,
    /// Exclude patterns.
    #[serde(default)]
    pub exclude: ExcludeConfig,
    /// Appearance settings.
    #[serde(default)]
    pub appearance: AppearanceConfig,
}

/// `[general]` keys as written in one config file.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GeneralLayer {
    pub root: Option<PathBuf>,
    pub pattern: Option<String>,
    pub page_size: Option<usize>,
    pub confirm_key: Option<char>,
    pub shell: Option<String>,
    pub description_line: Option<usize>,
}

/// `[filter]` keys as written in one config file.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FilterLayer {
    pub case_sensitive: Option<bool>,
    pub fuzzy: Option<bool>,
    pub max_length: Option<usize>,
}

/// `[appearance]` keys as written in one config file.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppearanceLayer {
    pub theme: Option<Theme>,
    pub show_footer: Option<bool>,
    pub show_description: Option<bool>,
}

/// One config file. Keys it leaves out are `None` and don't override
/// lower-priority files.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConfigLayer {
    #[serde(default)]
    pub general: GeneralLayer,
    #[serde(default)]
    pub filter: FilterLayer,
    #[serde(default)]
    pub exclude: ExcludeConfig,
    #[serde(default)]
    pub appearance: AppearanceLayer,
}

impl Config {
    /// Create a new configuration with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the config file path for the user's home directory.
    pub fn user_config_path() -> Option<PathBuf> {
        crate::utils::global_config_file()
    }

    /// Merge a config file layer into this one (keys set in the layer win).
    pub fn merge(&mut self, layer: ConfigLayer) {
        // General settings
        let general = layer.general;
        if let Some(root) = general.root {
            self.general.root = root;
        }
        if let Some(pattern) = general.pattern {
            self.general.pattern = pattern;
        }
        if let Some(page_size) = general.page_size {
            self.general.page_size = page_size;
        }
        if let Some(confirm_key) = general.confirm_key {
            self.general.confirm_key = confirm_key;
        }
        if let Some(shell) = general.shell {
            self.general.shell = shell;
        }
        if let Some(line) = general.description_line {
            self.general.description_line = line;
        }

        // Filter settings
        let filter = layer.filter;
        if let Some(case_sensitive) = filter.case_sensitive {
            self.filter.case_sensitive = case_sensitive;
        }
        if let Some(fuzzy) = filter.fuzzy {
            self.filter.fuzzy = fuzzy;
        }
        if let Some(max_length) = filter.max_length {
            self.filter.max_length = max_length;
        }

        // Exclude patterns - append rather than replace
        self.exclude.patterns.extend(layer.exclude.patterns);

        // Appearance settings
        let appearance = layer.appearance;
        if let Some(theme) = appearance.theme {
            self.appearance.theme = theme;
        }
        if let Some(show_footer) = appearance.show_footer {
            self.appearance.show_footer = show_footer;
        }
        if let Some(show_description) = appearance.show_description {
            self.appearance.show_description = show_description;
        }
    }

    /// Check values that would make the session unusable.
    pub fn validate(&self) -> crate::error::Result<()> {
        if self.general.page_size == 0 {
            return Err(crate::error::ScripnyError::ConfigError {
                message: "page_size must be at least 1".to_string(),
            });
        }
        if self.general.pattern.is_empty() {
            return Err(crate::error::ScripnyError::ConfigError {
                message: "pattern must not be empty".to_string(),
            });
        }
        if self.general.description_line == 0 {
            return Err(crate::error::ScripnyError::ConfigError {
                message: "description_line is 1-based and must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}

fn default_true() -> bool {
    true
}

fn default_root() -> PathBuf {
    PathBuf::from(DEFAULT_ROOT)
}

fn default_pattern() -> String {
    DEFAULT_PATTERN.to_string()
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

fn default_confirm_key() -> char {
    'y'
}

fn default_shell() -> String {
    "sh".to_string()
}

fn default_description_line() -> usize {
    DEFAULT_DESCRIPTION_LINE
}

fn default_search_length() -> usize {
    DEFAULT_SEARCH_LENGTH
}
