//! Input handling for the TUI.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::app::{App, AppMode};
use crate::catalog::ScriptEntry;

/// What the main loop should do after an event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Redraw and wait for the next event.
    Continue,
    /// Leave the session.
    Quit,
    /// Confirm and run a script.
    Execute(ScriptEntry),
}

/// Handle a terminal event.
///
/// Only key presses change state; releases, repeats and other events just
/// trigger a redraw.
pub fn handle_event(app: &mut App, event: Event) -> Command {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => handle_key(app, key),
        _ => Command::Continue,
    }
}

/// Handle a key event.
pub fn handle_key(app: &mut App, key: KeyEvent) -> Command {
    // Raw mode turns Ctrl+C into a key, so honor it as quit in every mode
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.quit();
        return Command::Quit;
    }

    match app.mode() {
        AppMode::Browse => handle_browse_mode(app, key),
        AppMode::SearchEntry { .. } => {
            handle_search_entry_mode(app, key);
            Command::Continue
        }
    }
}

/// Handle keys in browse mode.
///
/// - j/↓: next script (wraps)
/// - k/↑: previous script (wraps)
/// - x: execute selected
/// - /: start a search
/// - Esc: clear the search
/// - q: quit
fn handle_browse_mode(app: &mut App, key: KeyEvent) -> Command {
    if key.modifiers.contains(KeyModifiers::CONTROL) || key.modifiers.contains(KeyModifiers::ALT)
    {
        return Command::Continue;
    }

    match key.code {
        KeyCode::Down | KeyCode::Char('j') => app.select_next(),
        KeyCode::Up | KeyCode::Char('k') => app.select_prev(),

        KeyCode::Char('x') => {
            if let Some(entry) = app.request_execution() {
                return Command::Execute(entry);
            }
        }

        KeyCode::Char('/') => app.enter_search_entry(),
        KeyCode::Esc => app.clear_search(),

        KeyCode::Char('q') => {
            app.quit();
            return Command::Quit;
        }

        _ => {}
    }
    Command::Continue
}

/// Handle keys in search entry mode.
///
/// - Printable characters: append to the scratch
/// - Backspace/Delete/Ctrl+H: remove last character
/// - Enter: commit the term
/// - Esc: discard and clear the term
fn handle_search_entry_mode(app: &mut App, key: KeyEvent) {
    let control = key.modifiers.contains(KeyModifiers::CONTROL);

    match key.code {
        KeyCode::Enter => app.commit_search(),
        KeyCode::Esc => app.clear_search(),
        KeyCode::Backspace | KeyCode::Delete => app.pop_search_char(),
        KeyCode::Char('h') if control => app.pop_search_char(),
        KeyCode::Char(c) if !control && !key.modifiers.contains(KeyModifiers::ALT) => {
            if !c.is_control() {
                app.push_search_char(c);
            }
        }
        _ => {}
    }
}

/// Check whether a key press answers the execution prompt with yes.
///
/// Only the bare key counts; Shift is allowed so an uppercase confirm key
/// can be typed, but Ctrl and Alt chords never confirm.
pub fn is_confirmation(key: &KeyEvent, confirm_key: char) -> bool {
    key.kind == KeyEventKind::Press
        && key.code == KeyCode::Char(confirm_key)
        && key.modifiers.difference(KeyModifiers::SHIFT).is_empty()
}
