//! Snapshot tests using insta.
//!
//! These tests capture and verify the output format of `--list`.

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;

use crate::integration::fixtures::{create_project, standard_scripts};

/// Get a Command for the scripny binary, isolated from user config.
fn scripny() -> Command {
    let mut cmd = cargo_bin_cmd!("scripny");
    cmd.arg("--no-config");
    cmd
}

// ==================== List Output Snapshots ====================

#[test]
fn test_snapshot_list_basic() {
    let project = create_project(&standard_scripts());

    let output = scripny()
        .arg("--list")
        .current_dir(project.path())
        .output()
        .expect("Failed to run scripny");

    let stdout = String::from_utf8_lossy(&output.stdout);

    insta::assert_snapshot!(stdout, @r"
    Available scripts (5):

      backup.sh                Back up the database
      deploy.sh                Deploy the current build
      db/migrate.sh            Run pending migrations
      db/seed.sh               No description available
      ops/net/rotate-certs.sh  Rotate TLS certificates

    5 scripts found
    ");
}

#[test]
fn test_snapshot_list_filtered_root() {
    let project = create_project(&standard_scripts());

    let output = scripny()
        .args(["scripts/db", "--list"])
        .current_dir(project.path())
        .output()
        .expect("Failed to run scripny");

    let stdout = String::from_utf8_lossy(&output.stdout);

    insta::assert_snapshot!(stdout, @r"
    Available scripts (2):

      migrate.sh  Run pending migrations
      seed.sh     No description available

    2 scripts found
    ");
}
