//! Color theme for the TUI.

use ratatui::style::{Color, Modifier, Style};

use crate::config::Theme as ThemeConfig;
use crate::runner::ExecOutcome;

/// Color theme for the TUI.
#[derive(Debug, Clone)]
pub struct Theme {
    // Header
    header_fg: Color,
    header_info_fg: Color,

    // Scripts
    script_fg: Color,
    marker_fg: Color,
    selected_fg: Color,

    // Description
    description_fg: Color,

    // Search
    search_fg: Color,
    filter_term_fg: Color,

    // Footer
    footer_fg: Color,
    prompt_fg: Color,

    // Status
    success_fg: Color,
    failure_fg: Color,
    interrupted_fg: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::new(&ThemeConfig::Default)
    }
}

impl Theme {
    /// Create a theme from configuration.
    pub fn new(config: &ThemeConfig) -> Self {
        match config {
            ThemeConfig::Default => Self::default_theme(),
            ThemeConfig::Minimal => Self::minimal_theme(),
            ThemeConfig::None => Self::no_color_theme(),
        }
    }

    /// Default full-color theme.
    fn default_theme() -> Self {
        Self {
            header_fg: Color::Indexed(208),
            header_info_fg: Color::DarkGray,

            script_fg: Color::Reset,
            marker_fg: Color::LightMagenta,
            selected_fg: Color::LightCyan,

            description_fg: Color::Indexed(208),

            search_fg: Color::Reset,
            filter_term_fg: Color::LightMagenta,

            footer_fg: Color::LightYellow,
            prompt_fg: Color::LightYellow,

            success_fg: Color::LightGreen,
            failure_fg: Color::LightRed,
            interrupted_fg: Color::LightYellow,
        }
    }

    /// Minimal color theme (selection and status only).
    fn minimal_theme() -> Self {
        Self {
            header_fg: Color::Reset,
            header_info_fg: Color::DarkGray,

            script_fg: Color::Reset,
            marker_fg: Color::Reset,
            selected_fg: Color::Cyan,

            description_fg: Color::Gray,

            search_fg: Color::Reset,
            filter_term_fg: Color::Reset,

            footer_fg: Color::DarkGray,
            prompt_fg: Color::Reset,

            success_fg: Color::Green,
            failure_fg: Color::Red,
            interrupted_fg: Color::Yellow,
        }
    }

    /// No-color theme (monochrome).
    fn no_color_theme() -> Self {
        Self {
            header_fg: Color::Reset,
            header_info_fg: Color::Reset,

            script_fg: Color::Reset,
            marker_fg: Color::Reset,
            selected_fg: Color::Reset,

            description_fg: Color::Reset,

            search_fg: Color::Reset,
            filter_term_fg: Color::Reset,

            footer_fg: Color::Reset,
            prompt_fg: Color::Reset,

            success_fg: Color::Reset,
            failure_fg: Color::Reset,
            interrupted_fg: Color::Reset,
        }
    }

    // ==================== Header Styles ====================

    /// Get the `[SCRIPNY]` title style.
    pub fn header(&self) -> Style {
        Style::default()
            .fg(self.header_fg)
            .add_modifier(Modifier::BOLD)
    }

    /// Get the root/count info style.
    pub fn header_info(&self) -> Style {
        Style::default().fg(self.header_info_fg)
    }

    // ==================== Script Styles ====================

    /// Get the script name style.
    pub fn script(&self) -> Style {
        Style::default().fg(self.script_fg)
    }

    /// Get the `>` cursor marker style.
    pub fn marker(&self) -> Style {
        Style::default()
            .fg(self.marker_fg)
            .add_modifier(Modifier::BOLD)
    }

    /// Get the selected script style.
    pub fn selected(&self) -> Style {
        let style = Style::default()
            .fg(self.selected_fg)
            .add_modifier(Modifier::BOLD);
        if self.selected_fg == Color::Reset {
            style.add_modifier(Modifier::REVERSED)
        } else {
            style
        }
    }

    // ==================== Description Styles ====================

    /// Get the description style.
    pub fn description(&self) -> Style {
        Style::default()
            .fg(self.description_fg)
            .add_modifier(Modifier::ITALIC)
    }

    // ==================== Search Styles ====================

    /// Get the search prompt style.
    pub fn search(&self) -> Style {
        Style::default().fg(self.search_fg)
    }

    /// Get the committed filter term style.
    pub fn filter_term(&self) -> Style {
        Style::default()
            .fg(self.filter_term_fg)
            .add_modifier(Modifier::BOLD | Modifier::ITALIC)
    }

    // ==================== Footer Styles ====================

    /// Get the footer style.
    pub fn footer(&self) -> Style {
        Style::default().fg(self.footer_fg)
    }

    /// Get the confirmation prompt style.
    pub fn prompt(&self) -> Style {
        Style::default()
            .fg(self.prompt_fg)
            .add_modifier(Modifier::BOLD)
    }

    // ==================== Status Styles ====================

    /// Get the style for an execution outcome.
    pub fn outcome(&self, outcome: ExecOutcome) -> Style {
        let fg = match outcome {
            ExecOutcome::Success => self.success_fg,
            ExecOutcome::Failure => self.failure_fg,
            ExecOutcome::Interrupted => self.interrupted_fg,
        };
        Style::default().fg(fg).add_modifier(Modifier::BOLD)
    }

    // ==================== Utility Styles ====================

    /// Get style for dimmed/muted text.
    pub fn dim(&self) -> Style {
        Style::default().add_modifier(Modifier::DIM)
    }
}
