//! Integration tests for configuration loading and merging.

use std::path::PathBuf;

use scripny::config::{
    generate_example_config, load_config, AppearanceLayer, Config, ConfigLayer, ExcludeConfig,
    GeneralLayer, Theme,
};

use crate::integration::fixtures::{create_project, create_project_with_config, standard_scripts};

// ==================== Config Defaults ====================

#[test]
fn test_default_config() {
    let config = Config::default();

    assert_eq!(config.general.root, PathBuf::from("scripts/"));
    assert_eq!(config.general.page_size, 15);
    assert!(config.appearance.show_footer);
    assert!(config.exclude.patterns.is_empty());
}

#[test]
fn test_config_new() {
    let config = Config::new();

    // Should be same as default
    assert_eq!(config.general.pattern, ".sh");
    assert!(config.exclude.patterns.is_empty());
}

// ==================== Config Merging ====================

#[test]
fn test_config_merge() {
    let mut base = Config::default();
    base.exclude.patterns = vec!["base/*".to_string()];

    let overlay = ConfigLayer {
        appearance: AppearanceLayer {
            show_footer: Some(false),
            ..Default::default()
        },
        exclude: ExcludeConfig {
            patterns: vec!["overlay/*".to_string()],
        },
        ..Default::default()
    };

    base.merge(overlay);

    // Overlay value should win
    assert!(!base.appearance.show_footer);
    // Patterns should be merged
    assert_eq!(base.exclude.patterns, ["base/*", "overlay/*"]);
    // Keys the overlay leaves unset keep the base values
    assert!(base.appearance.show_description);
}

#[test]
fn test_layers_only_override_keys_they_set() {
    let mut config = Config::default();

    config.merge(ConfigLayer {
        general: GeneralLayer {
            root: Some(PathBuf::from("ops/")),
            confirm_key: Some('Y'),
            ..Default::default()
        },
        ..Default::default()
    });
    config.merge(ConfigLayer {
        general: GeneralLayer {
            page_size: Some(10),
            ..Default::default()
        },
        ..Default::default()
    });

    assert_eq!(config.general.root, PathBuf::from("ops/"));
    assert_eq!(config.general.confirm_key, 'Y');
    assert_eq!(config.general.page_size, 10);
}

// ==================== Parsing ====================

#[test]
fn test_partial_config_parsing() {
    let config: Config = toml::from_str("[general]\npage_size = 5\n").unwrap();

    assert_eq!(config.general.page_size, 5);
    // Unset values keep their defaults
    assert_eq!(config.general.root, PathBuf::from("scripts/"));
    assert_eq!(config.general.confirm_key, 'y');
    assert!(config.filter.case_sensitive);
}

#[test]
fn test_empty_config_parsing() {
    let config: Config = toml::from_str("").unwrap();
    assert_eq!(config.general.description_line, 3);
    assert_eq!(config.appearance.theme, Theme::Default);
}

#[test]
fn test_full_config_parsing() {
    let content = r#"
[general]
root = "ops/"
pattern = ".bash"
page_size = 20
confirm_key = "Y"
shell = "bash"
description_line = 2

[filter]
case_sensitive = false
fuzzy = true
max_length = 64

[exclude]
patterns = ["old/*"]

[appearance]
theme = "minimal"
show_footer = false
show_description = false
"#;
    let config: Config = toml::from_str(content).unwrap();

    assert_eq!(config.general.root, PathBuf::from("ops/"));
    assert_eq!(config.general.pattern, ".bash");
    assert_eq!(config.general.page_size, 20);
    assert_eq!(config.general.confirm_key, 'Y');
    assert_eq!(config.general.shell, "bash");
    assert_eq!(config.general.description_line, 2);
    assert!(!config.filter.case_sensitive);
    assert!(config.filter.fuzzy);
    assert_eq!(config.filter.max_length, 64);
    assert_eq!(config.exclude.patterns, ["old/*"]);
    assert_eq!(config.appearance.theme, Theme::Minimal);
    assert!(!config.appearance.show_description);
}

#[test]
fn test_example_config_parses() {
    let config: Config = toml::from_str(&generate_example_config()).unwrap();
    assert_eq!(config.general.page_size, 15);
    assert!(config.validate().is_ok());
}

// ==================== Loading From Disk ====================

#[test]
fn test_config_file_in_project() {
    let project = create_project_with_config(
        &standard_scripts(),
        "[general]\npage_size = 7\n\n[exclude]\npatterns = [\"db/*\"]\n",
    );

    let config = load_config(None, project.path()).unwrap();

    assert_eq!(config.general.page_size, 7);
    assert!(config.exclude.patterns.contains(&"db/*".to_string()));
}

#[test]
fn test_cli_config_overrides_project_config() {
    let project = create_project_with_config(&standard_scripts(), "[general]\npage_size = 7\n");
    let cli_config = project.path().join("cli.toml");
    std::fs::write(&cli_config, "[general]\npage_size = 3\n").unwrap();

    let config = load_config(Some(&cli_config), project.path()).unwrap();
    assert_eq!(config.general.page_size, 3);
}

#[test]
fn test_broken_project_config_is_ignored() {
    let project = create_project_with_config(&standard_scripts(), "[general\nnot toml");

    let config = load_config(None, project.path());
    assert!(config.is_ok());
}

#[test]
fn test_invalid_value_in_cli_config_fails_validation() {
    let project = create_project(&standard_scripts());
    let cli_config = project.path().join("cli.toml");
    std::fs::write(&cli_config, "[general]\npage_size = 0\n").unwrap();

    let err = load_config(Some(&cli_config), project.path()).unwrap_err();
    assert!(err.to_string().contains("page_size"));
}

#[test]
fn test_config_with_comments() {
    let content = "# comment\n[general]\n# another\nroot = \"tools\" # inline\n";
    let config: Config = toml::from_str(content).unwrap();
    assert_eq!(config.general.root, PathBuf::from("tools"));
}
