//! End-to-end session tests: discover, search, select and run.

#![cfg(unix)]

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tempfile::TempDir;

use scripny::catalog::{load_catalog, DiscoveryOptions};
use scripny::config::Config;
use scripny::runner::run_script;
use scripny::tui::{handle_key, App, Command};
use scripny::ExecOutcome;

use crate::integration::fixtures::write_script;

fn press(app: &mut App, code: KeyCode) -> Command {
    handle_key(app, KeyEvent::new(code, KeyModifiers::NONE))
}

fn type_str(app: &mut App, text: &str) {
    for c in text.chars() {
        press(app, KeyCode::Char(c));
    }
}

#[test]
fn test_search_select_and_run() {
    let temp = TempDir::new().unwrap();
    let root = temp.path().join("scripts");
    write_script(&root, "a.sh", Some("First"));
    write_script(&root, "sub/b.sh", Some("Second"));

    let catalog = load_catalog(&root, &DiscoveryOptions::new(".sh")).unwrap();
    let relatives: Vec<&str> = catalog.iter().map(|e| e.relative()).collect();
    assert_eq!(relatives, ["a.sh", "sub/b.sh"]);

    let mut app = App::new(catalog, Config::default());
    press(&mut app, KeyCode::Char('j'));
    assert_eq!(app.cursor(), 1);

    press(&mut app, KeyCode::Char('/'));
    type_str(&mut app, "b");
    press(&mut app, KeyCode::Enter);

    assert_eq!(app.search_term(), "b");
    assert_eq!(app.cursor(), 0);
    let visible: Vec<&str> = app.view().iter().map(|e| e.relative()).collect();
    assert_eq!(visible, ["sub/b.sh"]);
    assert_eq!(app.selected_description().as_deref(), Some("Second"));

    let entry = match press(&mut app, KeyCode::Char('x')) {
        Command::Execute(entry) => entry,
        other => panic!("expected an execute command, got {other:?}"),
    };
    assert_eq!(entry.relative(), "sub/b.sh");
    assert_eq!(entry.path(), root.join("sub/b.sh"));

    let result = run_script("sh", entry.path());
    assert_eq!(result.outcome, ExecOutcome::Success);
    assert_eq!(result.code, Some(0));

    app.record_run(&entry, result);
    assert!(app.last_run().is_some());
    assert!(!app.should_quit());
}

#[test]
fn test_search_without_matches_runs_nothing() {
    let temp = TempDir::new().unwrap();
    let root = temp.path().join("scripts");
    write_script(&root, "a.sh", None);

    let catalog = load_catalog(&root, &DiscoveryOptions::new(".sh")).unwrap();
    let mut app = App::new(catalog, Config::default());

    press(&mut app, KeyCode::Char('/'));
    type_str(&mut app, "zzz");
    press(&mut app, KeyCode::Enter);

    assert_eq!(app.visible_count(), 0);
    assert!(matches!(
        press(&mut app, KeyCode::Char('x')),
        Command::Continue
    ));

    // Esc brings the full catalog back
    press(&mut app, KeyCode::Esc);
    assert_eq!(app.visible_count(), 1);
}
