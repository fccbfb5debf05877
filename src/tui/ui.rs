//! Main UI rendering and TUI loop.

use std::io::{self, stdout, Stdout, Write};
use std::panic;

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use crossterm::style::Stylize;
use ratatui::{backend::CrosstermBackend, layout::Rect, Frame, Terminal};

use super::app::App;
use super::input::{handle_event, is_confirmation, Command};
use super::layout::MainLayout;
use super::theme::Theme;
use super::widgets::{
    confirm_prompt, Description, EmptyScripts, Filter, Footer, Header, ScriptList,
};
use crate::catalog::ScriptEntry;
use crate::runner::{run_script, ExecOutcome, ExecutionResult};
use crate::utils::{self, CookedModeGuard};

/// Separator printed around a script's output.
const RUN_SEPARATOR: &str = "-----------------";

/// RAII guard for terminal state.
/// Ensures terminal is properly restored even on panic.
pub struct TerminalGuard {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TerminalGuard {
    /// Create a new terminal guard, setting up the terminal for TUI.
    pub fn new() -> Result<Self> {
        // Set up panic hook before entering raw mode
        setup_panic_hook();

        utils::enable_raw_mode().context("Failed to enable raw mode")?;
        utils::enter_alternate_screen().context("Failed to enter alternate screen")?;

        let backend = CrosstermBackend::new(stdout());
        let terminal = Terminal::new(backend).context("Failed to create terminal")?;
        tracing::debug!("terminal acquired");

        Ok(Self { terminal })
    }

    /// Get a mutable reference to the terminal.
    pub fn terminal(&mut self) -> &mut Terminal<CrosstermBackend<Stdout>> {
        &mut self.terminal
    }

    /// Hand the terminal to a foreground child.
    ///
    /// Raw mode comes back when the returned guard drops, even on error.
    fn suspend(&mut self) -> Result<CookedModeGuard> {
        CookedModeGuard::new().context("Failed to release the terminal")
    }

    /// Re-enter the alternate screen after a child ran.
    fn resume(&mut self) -> Result<()> {
        utils::enter_alternate_screen().context("Failed to enter alternate screen")?;
        // The previous frame is gone from the screen; force a full redraw
        self.terminal.clear().context("Failed to clear terminal")?;
        Ok(())
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = utils::restore_terminal();
        tracing::debug!("terminal restored");
    }
}

/// Set up a panic hook that restores the terminal.
fn setup_panic_hook() {
    let original_hook = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        let _ = utils::restore_terminal();
        original_hook(panic_info);
    }));
}

/// Run the interactive session until the user quits.
///
/// # Errors
///
/// Returns an error if the terminal cannot be set up or read.
pub fn run_tui(mut app: App) -> Result<()> {
    let mut guard = TerminalGuard::new()?;
    let theme = Theme::new(&app.config().appearance.theme);

    let result = run_loop(&mut guard, &mut app, &theme);

    // Guard restores the terminal on drop
    drop(guard);

    result
}

/// Main TUI loop.
fn run_loop(guard: &mut TerminalGuard, app: &mut App, theme: &Theme) -> Result<()> {
    loop {
        guard.terminal().draw(|frame| render(frame, app, theme))?;

        let event = event::read().context("Failed to read terminal event")?;
        match handle_event(app, event) {
            Command::Continue => {}
            Command::Quit => break,
            Command::Execute(entry) => execute(guard, app, theme, entry)?,
        }

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}

/// Confirm, run and report one script.
fn execute(
    guard: &mut TerminalGuard,
    app: &mut App,
    theme: &Theme,
    entry: ScriptEntry,
) -> Result<()> {
    app.set_pending(Some(entry.clone()));
    guard.terminal().draw(|frame| render(frame, app, theme))?;
    let key = next_key_press()?;
    app.set_pending(None);

    if !is_confirmation(&key, app.config().general.confirm_key) {
        tracing::debug!(script = %entry.relative(), "execution cancelled");
        return Ok(());
    }

    let result = {
        let _cooked = guard.suspend()?;
        run_foreground(&entry, &app.config().general.shell)
    };

    wait_for_enter()?;
    guard.resume()?;
    app.record_run(&entry, result);
    Ok(())
}

/// Run a script with the terminal in cooked mode, framed by separators.
fn run_foreground(entry: &ScriptEntry, shell: &str) -> ExecutionResult {
    let mut out = stdout();
    let _ = writeln!(out, "\nExecuting {}...\n{RUN_SEPARATOR}", entry.path().display());
    let _ = out.flush();

    utils::set_child_running(true);
    let result = run_script(shell, entry.path());
    utils::set_child_running(false);

    let label = match result.outcome {
        ExecOutcome::Success => result.outcome.label().green(),
        ExecOutcome::Failure => result.outcome.label().red(),
        ExecOutcome::Interrupted => result.outcome.label().yellow(),
    };
    let _ = writeln!(out, "\n{RUN_SEPARATOR}\n{label}");
    if let Some(err) = &result.launch_error {
        let _ = writeln!(out, "{err}");
    }
    let _ = out.flush();
    result
}

/// Prompt on the normal screen and block until Enter is pressed.
fn wait_for_enter() -> Result<()> {
    let mut out = stdout();
    // Raw mode is back on, so lines need an explicit carriage return
    write!(out, "Press Enter to go back...\r\n")?;
    out.flush()?;

    loop {
        if next_key_press()?.code == KeyCode::Enter {
            return Ok(());
        }
    }
}

/// Block until the next key press, skipping releases and other events.
fn next_key_press() -> io::Result<KeyEvent> {
    loop {
        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                return Ok(key);
            }
        }
    }
}

/// Render the complete UI.
pub fn render(frame: &mut Frame, app: &App, theme: &Theme) {
    let config = &app.config().appearance;
    let layout = MainLayout::with_config(frame.area(), config);

    render_header(frame, app, theme, layout.header);
    render_scripts(frame, app, theme, layout.scripts);

    if config.show_description {
        render_description(frame, app, theme, layout.description);
    }

    if config.show_footer {
        render_filter(frame, app, theme, layout.filter);
        render_footer(frame, app, theme, layout.footer);
    } else {
        // Without a footer the prompt takes over the filter row
        match app.pending() {
            Some(entry) => render_prompt(frame, entry, app, theme, layout.filter),
            None => render_filter(frame, app, theme, layout.filter),
        }
    }
}

/// Render the header.
fn render_header(frame: &mut Frame, app: &App, theme: &Theme, area: Rect) {
    let root = utils::display_root(app.catalog().root());
    let header = Header::new(
        &root,
        app.visible_count(),
        app.catalog().len(),
        app.page_position(),
        theme,
    );
    frame.render_widget(header, area);
}

/// Render the current page of scripts.
fn render_scripts(frame: &mut Frame, app: &App, theme: &Theme, area: Rect) {
    let view = app.view();

    if view.is_empty() {
        let empty = if app.catalog().is_empty() {
            EmptyScripts::no_scripts(&utils::display_root(app.catalog().root()), theme)
        } else {
            EmptyScripts::no_matches(app.search_term(), theme)
        };
        frame.render_widget(empty, area);
        return;
    }

    let list = ScriptList::new(view.as_slice(), app.page_window(), app.cursor(), theme);
    frame.render_widget(list, area);
}

/// Render the description panel.
fn render_description(frame: &mut Frame, app: &App, theme: &Theme, area: Rect) {
    let description = app.selected_description();
    frame.render_widget(Description::new(description.as_deref(), theme), area);
}

/// Render the search prompt or the active filter term.
fn render_filter(frame: &mut Frame, app: &App, theme: &Theme, area: Rect) {
    let filter = match app.search_scratch() {
        Some(scratch) => Filter::entry(scratch, theme),
        None => Filter::active(app.search_term(), app.is_search_active(), theme),
    };

    // Frames that don't place the cursor leave it hidden
    if let Some(position) = filter.cursor_position(area) {
        frame.set_cursor_position(position);
    }
    frame.render_widget(filter, area);
}

/// Render the execution confirmation prompt in place of the filter row.
fn render_prompt(frame: &mut Frame, entry: &ScriptEntry, app: &App, theme: &Theme, area: Rect) {
    let prompt = confirm_prompt(app.config().general.confirm_key, entry);
    frame.render_widget(Filter::confirm(prompt, theme), area);
}

/// Render the footer.
fn render_footer(frame: &mut Frame, app: &App, theme: &Theme, area: Rect) {
    let footer = Footer::new(app.mode(), theme)
        .pending(app.pending(), app.config().general.confirm_key)
        .last_run(app.last_run());
    frame.render_widget(footer, area);
}
