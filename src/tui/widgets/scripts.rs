//! Script list widget for the TUI.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use super::header::truncate_with_ellipsis;
use crate::catalog::ScriptEntry;
use crate::tui::pager::PageWindow;
use crate::tui::theme::Theme;

/// One page of the filtered script list.
pub struct ScriptList<'a> {
    scripts: &'a [&'a ScriptEntry],
    window: PageWindow,
    cursor: usize,
    theme: &'a Theme,
}

impl<'a> ScriptList<'a> {
    /// Create a new script list widget.
    pub fn new(
        scripts: &'a [&'a ScriptEntry],
        window: PageWindow,
        cursor: usize,
        theme: &'a Theme,
    ) -> Self {
        Self {
            scripts,
            window,
            cursor,
            theme,
        }
    }

    /// Build the lines for the visible page.
    fn build_lines(&self, width: u16) -> Vec<Line<'a>> {
        let max_name = (width as usize).saturating_sub(2);
        let end = self.window.end.min(self.scripts.len());
        let start = self.window.start.min(end);

        self.scripts[start..end]
            .iter()
            .enumerate()
            .map(|(offset, script)| {
                let name = truncate_with_ellipsis(script.relative(), max_name);
                if start + offset == self.cursor {
                    Line::from(vec![
                        Span::styled(">", self.theme.marker()),
                        Span::raw(" "),
                        Span::styled(name, self.theme.selected()),
                    ])
                } else {
                    Line::from(vec![
                        Span::raw("  "),
                        Span::styled(name, self.theme.script()),
                    ])
                }
            })
            .collect()
    }
}

impl Widget for ScriptList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }

        let lines = self.build_lines(area.width);
        Paragraph::new(lines).render(area, buf);
    }
}

/// Widget for when there are no scripts to show.
pub struct EmptyScripts<'a> {
    message: String,
    theme: &'a Theme,
}

impl<'a> EmptyScripts<'a> {
    /// Create an empty-state widget for an empty catalog.
    pub fn no_scripts(root: &str, theme: &'a Theme) -> Self {
        Self {
            message: format!("No scripts found in {root}"),
            theme,
        }
    }

    /// Create an empty-state widget for a filter with no matches.
    pub fn no_matches(term: &str, theme: &'a Theme) -> Self {
        Self {
            message: format!("No scripts match '{term}'"),
            theme,
        }
    }
}

impl Widget for EmptyScripts<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }

        Paragraph::new(Line::from(Span::styled(
            format!("  {}", self.message),
            self.theme.dim(),
        )))
        .render(area, buf);
    }
}
