//! Layout calculations for the TUI.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

use crate::config::AppearanceConfig;

/// Minimum terminal dimensions for the full layout.
pub const MIN_WIDTH: u16 = 30;
pub const MIN_HEIGHT: u16 = 8;

/// Main layout areas, top to bottom.
#[derive(Debug, Clone, Copy)]
pub struct MainLayout {
    /// `[SCRIPNY]` title row.
    pub header: Rect,
    /// Script list.
    pub scripts: Rect,
    /// Description of the selected script.
    pub description: Rect,
    /// Search prompt or active filter term.
    pub filter: Rect,
    /// Key hints and status line.
    pub footer: Rect,
}

impl MainLayout {
    /// Calculate the main layout for the given area with default settings.
    pub fn new(area: Rect) -> Self {
        Self::with_config(area, &AppearanceConfig::default())
    }

    /// Calculate the main layout with configuration options.
    pub fn with_config(area: Rect, config: &AppearanceConfig) -> Self {
        if area.width < MIN_WIDTH || area.height < MIN_HEIGHT {
            return Self::minimal_layout(area, config);
        }

        let desc_height = if config.show_description { 2 } else { 0 };
        let footer_height = if config.show_footer { 3 } else { 0 };

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2), // Title plus a blank row
                Constraint::Min(1),    // Scripts
                Constraint::Length(desc_height),
                Constraint::Length(1), // Search / filter term
                Constraint::Length(footer_height),
            ])
            .split(area);

        Self {
            header: chunks[0],
            scripts: chunks[1],
            description: chunks[2],
            filter: chunks[3],
            footer: chunks[4],
        }
    }

    /// Create a layout with no spacing for small terminals.
    fn minimal_layout(area: Rect, config: &AppearanceConfig) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Min(1),
                Constraint::Length(u16::from(config.show_description)),
                Constraint::Length(1),
                Constraint::Length(u16::from(config.show_footer)),
            ])
            .split(area);

        Self {
            header: chunks[0],
            scripts: chunks[1],
            description: chunks[2],
            filter: chunks[3],
            footer: chunks[4],
        }
    }

    /// Calculate available rows for scripts.
    pub fn script_rows(&self) -> usize {
        self.scripts.height as usize
    }
}
