//! Description widget for the TUI.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use crate::tui::theme::Theme;

/// Widget showing the selected script's description.
pub struct Description<'a> {
    text: Option<&'a str>,
    theme: &'a Theme,
}

impl<'a> Description<'a> {
    /// Create a new description widget; `None` renders nothing.
    pub fn new(text: Option<&'a str>, theme: &'a Theme) -> Self {
        Self { text, theme }
    }

    fn build_lines(&self) -> Vec<Line<'a>> {
        match self.text {
            // Blank row separates the list from the description
            Some(text) => vec![
                Line::raw(""),
                Line::from(Span::styled(
                    format!("Description: {text}"),
                    self.theme.description(),
                )),
            ],
            None => Vec::new(),
        }
    }
}

impl Widget for Description<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }

        let lines = self.build_lines();
        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .render(area, buf);
    }
}
