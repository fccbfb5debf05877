//! Search prompt and filter term widget for the TUI.

use ratatui::{
    buffer::Buffer,
    layout::{Position, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::tui::theme::Theme;

/// Prompt shown while typing a search term.
pub const SEARCH_PROMPT: &str = "Search:";

/// Label shown in front of a committed search term.
pub const FILTER_LABEL: &str = "Filter term:";

/// Filter bar widget.
pub enum Filter<'a> {
    /// Typing a term.
    Entry { scratch: &'a str, theme: &'a Theme },
    /// A committed, non-empty term.
    Active { term: &'a str, theme: &'a Theme },
    /// Execution confirmation prompt, when no footer shows it.
    Confirm { prompt: String, theme: &'a Theme },
    /// Nothing to show.
    Hidden,
}

impl<'a> Filter<'a> {
    /// Create the widget for the search entry prompt.
    pub fn entry(scratch: &'a str, theme: &'a Theme) -> Self {
        Filter::Entry { scratch, theme }
    }

    /// Create the widget for a committed term; empty or inactive terms hide it.
    pub fn active(term: &'a str, search_active: bool, theme: &'a Theme) -> Self {
        if search_active && !term.is_empty() {
            Filter::Active { term, theme }
        } else {
            Filter::Hidden
        }
    }

    /// Create the widget for the execution confirmation prompt.
    pub fn confirm(prompt: String, theme: &'a Theme) -> Self {
        Filter::Confirm { prompt, theme }
    }

    /// Terminal cursor position at the end of the typed text, while typing.
    ///
    /// Horizontal scrolling keeps the end of the text visible, so the cursor
    /// never leaves the area. Columns are display cells, not characters.
    pub fn cursor_position(&self, area: Rect) -> Option<Position> {
        match self {
            Filter::Entry { scratch, .. } if area.width > 0 && area.height > 0 => {
                let shown = visible_tail(scratch, entry_room(area.width));
                let text_width = SEARCH_PROMPT.width() + shown.width();
                let x = text_width.min(area.width as usize - 1) as u16;
                Some(Position::new(area.x + x, area.y))
            }
            _ => None,
        }
    }

    /// Build the filter line for the given width.
    fn build_line(&self, width: u16) -> Line<'a> {
        match self {
            Filter::Entry { scratch, theme } => {
                // Keep the tail visible when the term is wider than the row
                let shown = visible_tail(scratch, entry_room(width));
                Line::from(vec![
                    Span::styled(SEARCH_PROMPT, theme.search()),
                    Span::styled(shown, theme.search()),
                ])
            }
            Filter::Active { term, theme } => Line::from(Span::styled(
                format!("{FILTER_LABEL}{term}"),
                theme.filter_term(),
            )),
            Filter::Confirm { prompt, theme } => {
                Line::from(Span::styled(prompt.clone(), theme.prompt()))
            }
            Filter::Hidden => Line::raw(""),
        }
    }
}

/// Cells left for the typed text, keeping one for the cursor.
fn entry_room(width: u16) -> usize {
    (width as usize).saturating_sub(SEARCH_PROMPT.width() + 1)
}

/// Longest suffix of `text` that fits in `room` display cells.
fn visible_tail(text: &str, room: usize) -> &str {
    let mut used = 0;
    let mut start = text.len();
    for (idx, c) in text.char_indices().rev() {
        let w = c.width().unwrap_or(0);
        if used + w > room {
            break;
        }
        used += w;
        start = idx;
    }
    &text[start..]
}

impl Widget for Filter<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }

        let line = self.build_line(area.width);
        Paragraph::new(line).render(area, buf);
    }
}
