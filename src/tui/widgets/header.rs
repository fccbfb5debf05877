//! Header widget for the TUI.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::tui::theme::Theme;

/// Title shown on the first row.
pub const TITLE: &str = "[SCRIPNY]";

/// Header widget showing the title, root and counts.
pub struct Header<'a> {
    root: &'a str,
    visible: usize,
    total: usize,
    page: (usize, usize),
    theme: &'a Theme,
}

impl<'a> Header<'a> {
    /// Create a new header widget.
    ///
    /// `page` is the zero-based page index and the page count.
    pub fn new(
        root: &'a str,
        visible: usize,
        total: usize,
        page: (usize, usize),
        theme: &'a Theme,
    ) -> Self {
        Self {
            root,
            visible,
            total,
            page,
            theme,
        }
    }

    /// Build the header line.
    fn build_line(&self, width: u16) -> Line<'a> {
        let counts = if self.visible == self.total {
            format!("{} scripts", self.total)
        } else {
            format!("{}/{} scripts", self.visible, self.total)
        };
        let right = format!("{counts} · page {}/{} ", self.page.0 + 1, self.page.1);

        let mut spans = vec![Span::styled(TITLE, self.theme.header())];

        let fixed = TITLE.chars().count() + right.chars().count() + 3;
        let max_root = (width as usize).saturating_sub(fixed);
        let root = truncate_with_ellipsis(self.root, max_root);
        if !root.is_empty() {
            spans.push(Span::styled(format!(" {root}"), self.theme.header_info()));
        }

        let used: usize = spans.iter().map(|s| s.content.chars().count()).sum();
        let padding = (width as usize).saturating_sub(used + right.chars().count());
        if padding > 0 && used + right.chars().count() <= width as usize {
            spans.push(Span::raw(" ".repeat(padding)));
            spans.push(Span::styled(right, self.theme.header_info()));
        }

        Line::from(spans)
    }
}

impl Widget for Header<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }

        let line = self.build_line(area.width);
        Paragraph::new(line).render(area, buf);
    }
}

/// Truncate a string with ellipsis if it exceeds max length.
///
/// Counts characters, not bytes.
pub fn truncate_with_ellipsis(s: &str, max_len: usize) -> String {
    let char_count = s.chars().count();

    if char_count <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        s.chars().take(max_len).collect()
    } else {
        let truncated: String = s.chars().take(max_len - 1).collect();
        format!("{truncated}…")
    }
}
