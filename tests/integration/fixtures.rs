//! Test fixtures for creating temporary script trees.

use std::fs;
use std::path::Path;

use tempfile::TempDir;

/// Write a script with a description comment on line 3.
pub fn write_script(dir: &Path, relative: &str, description: Option<&str>) {
    let path = dir.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("Failed to create script directory");
    }

    let comment = description.map(|d| format!("# {d}")).unwrap_or_default();
    let body = format!("#!/bin/sh\n\n{comment}\necho {relative}\n");
    fs::write(&path, body).expect("Failed to write script");

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755))
            .expect("Failed to make script executable");
    }
}

/// Create a working directory with a `scripts/` tree.
pub fn create_project(scripts: &[(&str, Option<&str>)]) -> TempDir {
    let temp = TempDir::new().expect("Failed to create temp dir");
    let root = temp.path().join("scripts");
    fs::create_dir_all(&root).expect("Failed to create scripts dir");

    for (relative, description) in scripts {
        write_script(&root, relative, *description);
    }

    temp
}

/// Create a working directory without a `scripts/` directory.
pub fn create_project_without_root() -> TempDir {
    TempDir::new().expect("Failed to create temp dir")
}

/// Create a project with a `.scripnyrc.toml` next to the scripts.
pub fn create_project_with_config(
    scripts: &[(&str, Option<&str>)],
    config_content: &str,
) -> TempDir {
    let temp = create_project(scripts);
    fs::write(temp.path().join(".scripnyrc.toml"), config_content)
        .expect("Failed to write config");
    temp
}

/// A small tree with nesting and mixed descriptions.
pub fn standard_scripts() -> Vec<(&'static str, Option<&'static str>)> {
    vec![
        ("deploy.sh", Some("Deploy the current build")),
        ("backup.sh", Some("Back up the database")),
        ("notes.txt", None),
        ("db/migrate.sh", Some("Run pending migrations")),
        ("db/seed.sh", None),
        ("ops/net/rotate-certs.sh", Some("Rotate TLS certificates")),
    ]
}
