//! CLI integration tests for scripny.
//!
//! These tests verify the command-line interface behavior using assert_cmd.

use std::path::Path;

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;

use crate::integration::fixtures::{
    create_project, create_project_with_config, create_project_without_root, standard_scripts,
};

/// Get a Command for the scripny binary.
fn scripny() -> Command {
    cargo_bin_cmd!("scripny")
}

/// Run in `dir` with the user config directory pointed inside it.
fn scripny_in(dir: &Path) -> Command {
    let mut cmd = scripny();
    cmd.current_dir(dir)
        .env("HOME", dir)
        .env("XDG_CONFIG_HOME", dir.join(".config"))
        .env_remove("SCRIPNY_LOG");
    cmd
}

// ==================== Help and Version ====================

#[test]
fn test_help_output() {
    scripny()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Interactive terminal menu for browsing and running shell scripts",
        ))
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("[ROOT]"))
        .stdout(predicate::str::contains("--list"))
        .stdout(predicate::str::contains("--exclude"))
        .stdout(predicate::str::contains("--log-file"));
}

#[test]
fn test_version_output() {
    scripny()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("scripny"))
        .stdout(predicate::str::is_match(r"\d+\.\d+\.\d+").unwrap());
}

// ==================== List Mode ====================

#[test]
fn test_list_basic() {
    let project = create_project(&standard_scripts());

    scripny_in(project.path())
        .arg("--list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Available scripts (5):"))
        .stdout(predicate::str::contains("deploy.sh"))
        .stdout(predicate::str::contains("Back up the database"))
        .stdout(predicate::str::contains("ops/net/rotate-certs.sh"))
        .stdout(predicate::str::contains("notes.txt").not())
        .stdout(predicate::str::contains("5 scripts found"));
}

#[test]
fn test_list_is_depth_ordered() {
    let project = create_project(&standard_scripts());

    let output = scripny_in(project.path()).arg("-l").output().unwrap();
    let stdout = String::from_utf8_lossy(&output.stdout);

    let backup = stdout.find("backup.sh").unwrap();
    let deploy = stdout.find("deploy.sh").unwrap();
    let migrate = stdout.find("db/migrate.sh").unwrap();
    let rotate = stdout.find("ops/net/rotate-certs.sh").unwrap();
    assert!(backup < deploy);
    assert!(deploy < migrate);
    assert!(migrate < rotate);
}

#[test]
fn test_list_missing_description() {
    let project = create_project(&[("plain.sh", None)]);

    scripny_in(project.path())
        .arg("--list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No description available"));
}

#[test]
fn test_list_missing_root_exits_2() {
    let project = create_project_without_root();

    scripny_in(project.path())
        .arg("--list")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Script directory not found"));
}

#[test]
fn test_list_empty_root() {
    let project = create_project(&[]);

    scripny_in(project.path())
        .arg("--list")
        .assert()
        .success()
        .stdout(predicate::str::contains("0 scripts found"));
}

#[test]
fn test_list_custom_root_argument() {
    let project = create_project(&standard_scripts());

    scripny_in(project.path())
        .args(["scripts/db", "--list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("migrate.sh"))
        .stdout(predicate::str::contains("deploy.sh").not())
        .stdout(predicate::str::contains("2 scripts found"));
}

#[test]
fn test_list_with_pattern() {
    let project = create_project(&standard_scripts());

    scripny_in(project.path())
        .args(["--list", "--pattern", ".txt"])
        .assert()
        .success()
        .stdout(predicate::str::contains("notes.txt"))
        .stdout(predicate::str::contains("1 scripts found"));
}

// ==================== Exclude Patterns ====================

#[test]
fn test_exclude_pattern() {
    let project = create_project(&standard_scripts());

    scripny_in(project.path())
        .args(["--list", "--exclude", "db/*"])
        .assert()
        .success()
        .stdout(predicate::str::contains("db/migrate.sh").not())
        .stdout(predicate::str::contains("db/seed.sh").not())
        .stdout(predicate::str::contains("3 scripts found"));
}

#[test]
fn test_multiple_exclude_patterns() {
    let project = create_project(&standard_scripts());

    scripny_in(project.path())
        .args(["--list", "-e", "db/*", "-e", "deploy.sh"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2 scripts found"));
}

#[test]
fn test_invalid_exclude_pattern_exits_3() {
    let project = create_project(&standard_scripts());

    scripny_in(project.path())
        .args(["--list", "-e", "[unclosed"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Invalid exclude pattern"));
}

// ==================== Config Flags ====================

#[test]
fn test_zero_page_size_exits_3() {
    let project = create_project(&standard_scripts());

    scripny_in(project.path())
        .args(["--list", "--page-size", "0"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("page_size"));
}

#[test]
fn test_local_config_excludes() {
    let project = create_project_with_config(
        &standard_scripts(),
        "[exclude]\npatterns = [\"ops/**\"]\n",
    );

    scripny_in(project.path())
        .arg("--list")
        .assert()
        .success()
        .stdout(predicate::str::contains("rotate-certs.sh").not())
        .stdout(predicate::str::contains("4 scripts found"));
}

#[test]
fn test_no_config_ignores_local_config() {
    let project = create_project_with_config(
        &standard_scripts(),
        "[exclude]\npatterns = [\"ops/**\"]\n",
    );

    scripny_in(project.path())
        .args(["--list", "--no-config"])
        .assert()
        .success()
        .stdout(predicate::str::contains("rotate-certs.sh"));
}

#[test]
fn test_broken_cli_config_exits_3() {
    let project = create_project(&standard_scripts());
    let config = project.path().join("broken.toml");
    std::fs::write(&config, "[general\npage_size = ").unwrap();

    scripny_in(project.path())
        .arg("--list")
        .arg("--config")
        .arg(&config)
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Invalid config"));
}

#[test]
fn test_missing_cli_config_fails() {
    let project = create_project(&standard_scripts());

    scripny_in(project.path())
        .args(["--list", "--config", "does-not-exist.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("does-not-exist.toml"));
}

// ==================== Debug, Logging and Completions ====================

#[test]
fn test_debug_output() {
    let project = create_project(&standard_scripts());

    scripny_in(project.path())
        .args(["--list", "--debug"])
        .assert()
        .success()
        .stderr(predicate::str::contains("=== scripny debug mode ==="))
        .stderr(predicate::str::contains("Script root: scripts/ (exists: true)"))
        .stderr(predicate::str::contains("5 scripts found"));
}

#[test]
fn test_log_file_is_created() {
    let project = create_project(&standard_scripts());
    let log = project.path().join("scripny.log");

    scripny_in(project.path())
        .arg("--list")
        .arg("--log-file")
        .arg(&log)
        .assert()
        .success();

    assert!(log.exists());
}

#[test]
fn test_completions_bash() {
    scripny()
        .args(["--completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("scripny"));
}

#[test]
fn test_completions_invalid_shell() {
    scripny()
        .args(["--completions", "tcsh"])
        .assert()
        .failure();
}

#[test]
fn test_print_config_is_loadable() {
    let project = create_project(&standard_scripts());

    let output = scripny_in(project.path())
        .arg("--print-config")
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("[general]"));
    assert!(stdout.contains("confirm_key = \"y\""));

    // The printed file works as a project config
    std::fs::write(project.path().join(".scripnyrc.toml"), stdout.as_bytes()).unwrap();
    scripny_in(project.path())
        .arg("--list")
        .assert()
        .success()
        .stdout(predicate::str::contains("backup.sh"));
}
