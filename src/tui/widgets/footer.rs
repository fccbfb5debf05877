//! Footer widget for the TUI.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::catalog::ScriptEntry;
use crate::tui::app::{AppMode, LastRun};
use crate::tui::theme::Theme;

/// Key hints in browse mode.
pub const BROWSE_HINTS: &str =
    "j = down, k = up, x = execute, q = quit, / = search, esc = clear search";

/// Key hints while typing a search term.
pub const SEARCH_HINTS: &str = "enter = apply search, esc = clear search, backspace = delete";

/// Footer widget showing key hints plus the prompt or last run.
pub struct Footer<'a> {
    mode: &'a AppMode,
    pending: Option<&'a ScriptEntry>,
    confirm_key: char,
    last_run: Option<&'a LastRun>,
    theme: &'a Theme,
}

impl<'a> Footer<'a> {
    /// Create a new footer widget.
    pub fn new(mode: &'a AppMode, theme: &'a Theme) -> Self {
        Self {
            mode,
            pending: None,
            confirm_key: 'y',
            last_run: None,
            theme,
        }
    }

    /// Show the confirmation prompt for a script.
    pub fn pending(mut self, entry: Option<&'a ScriptEntry>, confirm_key: char) -> Self {
        self.pending = entry;
        self.confirm_key = confirm_key;
        self
    }

    /// Show the last execution.
    pub fn last_run(mut self, last_run: Option<&'a LastRun>) -> Self {
        self.last_run = last_run;
        self
    }

    /// Build the hint line.
    fn hints_line(&self) -> Line<'a> {
        let hints = match self.mode {
            AppMode::Browse => BROWSE_HINTS,
            AppMode::SearchEntry { .. } => SEARCH_HINTS,
        };
        Line::from(Span::styled(hints, self.theme.footer()))
    }

    /// Build the status line: the confirmation prompt wins over the last run.
    fn status_line(&self) -> Line<'a> {
        if let Some(entry) = self.pending {
            return Line::from(Span::styled(
                confirm_prompt(self.confirm_key, entry),
                self.theme.prompt(),
            ));
        }

        match self.last_run {
            Some(run) => {
                let result = &run.result;
                Line::from(vec![
                    Span::styled(
                        format!("{} ", result.finished_at.format("%H:%M:%S")),
                        self.theme.dim(),
                    ),
                    Span::raw(format!("{} ", run.script)),
                    Span::styled(result.outcome.label(), self.theme.outcome(result.outcome)),
                    Span::styled(
                        format!(
                            " ({}, {:.1}s)",
                            result.detail(),
                            result.elapsed.as_secs_f64()
                        ),
                        self.theme.dim(),
                    ),
                ])
            }
            None => Line::raw(""),
        }
    }

    fn build_lines(&self) -> Vec<Line<'a>> {
        vec![Line::raw(""), self.hints_line(), self.status_line()]
    }
}

/// Text of the execution confirmation prompt.
pub fn confirm_prompt(confirm_key: char, entry: &ScriptEntry) -> String {
    format!(
        "Press {} to confirm execution of ({}): ",
        confirm_key,
        entry.path().display()
    )
}

impl Widget for Footer<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }

        // Drop the spacer first when the area is short
        let mut lines = self.build_lines();
        let skip = lines.len().saturating_sub(area.height as usize);
        lines.drain(..skip);
        Paragraph::new(lines).render(area, buf);
    }
}
