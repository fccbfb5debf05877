//! Application state for the TUI.

use crate::catalog::{read_description, ScriptCatalog, ScriptEntry};
use crate::config::Config;
use crate::filter::{filter_with, FilterOptions, FilterView};
use crate::runner::ExecutionResult;

use super::pager::{clamp_cursor, page_count, page_index, page_window, PageWindow};

/// Application mode/state.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AppMode {
    /// Navigating the list.
    #[default]
    Browse,
    /// Typing a search term; `scratch` holds the uncommitted text.
    SearchEntry { scratch: String },
}

/// Per-session interactive state.
#[derive(Debug, Clone, Default)]
pub struct SessionState {
    /// The committed search term.
    pub search_term: String,
    /// Whether a search has been committed since the last clear.
    pub search_active: bool,
    /// Position in the filtered view.
    pub cursor: usize,
    /// Current mode.
    pub mode: AppMode,
}

/// The most recent execution, shown in the footer.
#[derive(Debug, Clone)]
pub struct LastRun {
    /// Relative path of the script that ran.
    pub script: String,
    /// How it ended.
    pub result: ExecutionResult,
}

/// Main application state.
pub struct App {
    // Data
    /// All discovered scripts, in catalog order.
    catalog: ScriptCatalog,
    /// Current configuration.
    config: Config,
    /// Matching options derived from the config.
    filter_options: FilterOptions,

    // UI State
    state: SessionState,
    /// Script waiting for the confirmation key.
    pending: Option<ScriptEntry>,
    /// Last finished execution.
    last_run: Option<LastRun>,
    /// Should the app quit.
    should_quit: bool,
}

impl App {
    /// Create a new application.
    pub fn new(catalog: ScriptCatalog, config: Config) -> Self {
        let filter_options = FilterOptions::from(&config.filter);
        Self {
            catalog,
            config,
            filter_options,
            state: SessionState::default(),
            pending: None,
            last_run: None,
            should_quit: false,
        }
    }

    // ==================== Getters ====================

    /// Get the current mode.
    pub fn mode(&self) -> &AppMode {
        &self.state.mode
    }

    /// Get the session state.
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Check if the app should quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Get the catalog.
    pub fn catalog(&self) -> &ScriptCatalog {
        &self.catalog
    }

    /// Get the config.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Get the committed search term.
    pub fn search_term(&self) -> &str {
        &self.state.search_term
    }

    /// Check if a search is active.
    pub fn is_search_active(&self) -> bool {
        self.state.search_active
    }

    /// Get the text typed so far, when in search entry.
    pub fn search_scratch(&self) -> Option<&str> {
        match &self.state.mode {
            AppMode::SearchEntry { scratch } => Some(scratch),
            AppMode::Browse => None,
        }
    }

    /// Get the cursor, clamped to the current view.
    pub fn cursor(&self) -> usize {
        clamp_cursor(self.state.cursor, self.visible_count())
    }

    /// Get the script awaiting confirmation.
    pub fn pending(&self) -> Option<&ScriptEntry> {
        self.pending.as_ref()
    }

    /// Get the last execution.
    pub fn last_run(&self) -> Option<&LastRun> {
        self.last_run.as_ref()
    }

    // ==================== View ====================

    /// Compute the filtered view for the committed term.
    pub fn view(&self) -> FilterView<'_> {
        filter_with(&self.catalog, &self.state.search_term, self.filter_options)
    }

    /// Get the number of visible scripts.
    pub fn visible_count(&self) -> usize {
        self.view().len()
    }

    /// Get the script under the cursor.
    pub fn selected_script(&self) -> Option<&ScriptEntry> {
        let view = self.view();
        view.get(clamp_cursor(self.state.cursor, view.len()))
    }

    /// Read the description of the selected script.
    ///
    /// Returns `None` for an empty view, so no file is touched.
    pub fn selected_description(&self) -> Option<String> {
        self.selected_script()
            .map(|s| read_description(s.path(), self.config.general.description_line))
    }

    /// Get the visible page window.
    pub fn page_window(&self) -> PageWindow {
        page_window(
            self.visible_count(),
            self.state.cursor,
            self.config.general.page_size,
        )
    }

    /// Get the zero-based page index and page count.
    pub fn page_position(&self) -> (usize, usize) {
        let len = self.visible_count();
        let size = self.config.general.page_size;
        (page_index(self.state.cursor, len, size), page_count(len, size))
    }

    // ==================== Navigation ====================

    /// Move to the next script, wrapping at the end.
    pub fn select_next(&mut self) {
        let len = self.visible_count();
        if len == 0 {
            return;
        }
        self.state.cursor = (clamp_cursor(self.state.cursor, len) + 1) % len;
    }

    /// Move to the previous script, wrapping at the start.
    pub fn select_prev(&mut self) {
        let len = self.visible_count();
        if len == 0 {
            return;
        }
        self.state.cursor = (clamp_cursor(self.state.cursor, len) + len - 1) % len;
    }

    // ==================== Search ====================

    /// Start typing a new search term.
    pub fn enter_search_entry(&mut self) {
        self.state.mode = AppMode::SearchEntry {
            scratch: String::new(),
        };
    }

    /// Append a character to the search scratch, if there is room.
    pub fn push_search_char(&mut self, c: char) {
        let max = self.config.filter.max_length;
        if let AppMode::SearchEntry { scratch } = &mut self.state.mode {
            if scratch.chars().count() < max {
                scratch.push(c);
            }
        }
    }

    /// Remove the last character from the search scratch.
    pub fn pop_search_char(&mut self) {
        if let AppMode::SearchEntry { scratch } = &mut self.state.mode {
            scratch.pop();
        }
    }

    /// Commit the scratch as the search term.
    pub fn commit_search(&mut self) {
        if let AppMode::SearchEntry { scratch } = std::mem::take(&mut self.state.mode) {
            tracing::debug!(term = %scratch, "search committed");
            self.state.search_term = scratch;
            self.state.search_active = true;
            self.state.cursor = 0;
        }
    }

    /// Clear the search term and return to browsing.
    pub fn clear_search(&mut self) {
        self.state.mode = AppMode::Browse;
        self.state.search_term.clear();
        self.state.search_active = false;
        self.state.cursor = 0;
    }

    // ==================== Actions ====================

    /// Quit the application.
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Get the script to execute, if the view is non-empty.
    pub fn request_execution(&self) -> Option<ScriptEntry> {
        self.selected_script().cloned()
    }

    /// Show or hide the confirmation prompt.
    pub fn set_pending(&mut self, entry: Option<ScriptEntry>) {
        self.pending = entry;
    }

    /// Remember a finished execution.
    pub fn record_run(&mut self, entry: &ScriptEntry, result: ExecutionResult) {
        self.last_run = Some(LastRun {
            script: entry.relative().to_string(),
            result,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_catalog() -> ScriptCatalog {
        let paths = [
            "backup.sh",
            "cleanup.sh",
            "deploy.sh",
            "db/backup-full.sh",
            "db/restore.sh",
        ];
        ScriptCatalog::from_discovered(
            "scripts",
            paths
                .iter()
                .map(|p| ScriptEntry::new(format!("scripts/{p}"), *p))
                .collect(),
        )
    }

    fn create_test_app() -> App {
        App::new(create_test_catalog(), Config::default())
    }

    fn visible(app: &App) -> Vec<String> {
        app.view().iter().map(|e| e.relative().to_string()).collect()
    }

    // ==================== Basic Tests ====================

    #[test]
    fn test_app_new() {
        let app = create_test_app();
        assert_eq!(app.mode(), &AppMode::Browse);
        assert_eq!(app.cursor(), 0);
        assert!(!app.should_quit());
        assert!(!app.is_search_active());
        assert!(app.pending().is_none());
        assert!(app.last_run().is_none());
        assert_eq!(app.visible_count(), 5);
    }

    #[test]
    fn test_selected_script() {
        let app = create_test_app();
        assert_eq!(app.selected_script().unwrap().relative(), "backup.sh");
    }

    // ==================== Navigation ====================

    #[test]
    fn test_select_next_wraps() {
        let mut app = create_test_app();
        for _ in 0..4 {
            app.select_next();
        }
        assert_eq!(app.cursor(), 4);
        app.select_next();
        assert_eq!(app.cursor(), 0);
    }

    #[test]
    fn test_select_prev_wraps() {
        let mut app = create_test_app();
        app.select_prev();
        assert_eq!(app.cursor(), 4);
        assert_eq!(app.selected_script().unwrap().relative(), "db/restore.sh");
    }

    #[test]
    fn test_navigation_with_empty_view() {
        let mut app = App::new(ScriptCatalog::empty("scripts"), Config::default());
        app.select_next();
        app.select_prev();
        assert_eq!(app.cursor(), 0);
        assert!(app.selected_script().is_none());
        assert!(app.selected_description().is_none());
        assert!(app.request_execution().is_none());
        assert!(app.page_window().is_empty());
    }

    // ==================== Search ====================

    #[test]
    fn test_commit_search_filters_and_resets_cursor() {
        let mut app = create_test_app();
        app.select_next();
        app.select_next();

        app.enter_search_entry();
        for c in "backup".chars() {
            app.push_search_char(c);
        }
        app.commit_search();

        assert_eq!(app.mode(), &AppMode::Browse);
        assert!(app.is_search_active());
        assert_eq!(app.search_term(), "backup");
        assert_eq!(app.cursor(), 0);
        assert_eq!(visible(&app), vec!["backup.sh", "db/backup-full.sh"]);
    }

    #[test]
    fn test_scratch_does_not_filter_until_commit() {
        let mut app = create_test_app();
        app.enter_search_entry();
        app.push_search_char('d');
        app.push_search_char('b');
        assert_eq!(app.search_scratch(), Some("db"));
        assert_eq!(app.visible_count(), 5);
    }

    #[test]
    fn test_clear_search() {
        let mut app = create_test_app();
        app.enter_search_entry();
        app.push_search_char('x');
        app.commit_search();
        assert_eq!(app.visible_count(), 0);

        app.clear_search();
        assert_eq!(app.search_term(), "");
        assert!(!app.is_search_active());
        assert_eq!(app.cursor(), 0);
        assert_eq!(app.visible_count(), 5);
    }

    #[test]
    fn test_search_length_bounded() {
        let mut config = Config::default();
        config.filter.max_length = 3;
        let mut app = App::new(create_test_catalog(), config);

        app.enter_search_entry();
        for c in "abcdef".chars() {
            app.push_search_char(c);
        }
        assert_eq!(app.search_scratch(), Some("abc"));
    }

    #[test]
    fn test_pop_on_empty_scratch() {
        let mut app = create_test_app();
        app.enter_search_entry();
        app.pop_search_char();
        assert_eq!(app.search_scratch(), Some(""));
    }

    #[test]
    fn test_empty_commit_shows_everything() {
        let mut app = create_test_app();
        app.enter_search_entry();
        app.commit_search();
        assert!(app.is_search_active());
        assert_eq!(app.visible_count(), 5);
    }

    // ==================== Pages ====================

    #[test]
    fn test_page_window_follows_cursor() {
        let mut config = Config::default();
        config.general.page_size = 2;
        let mut app = App::new(create_test_catalog(), config);

        assert_eq!(app.page_window(), PageWindow { start: 0, end: 2 });
        app.select_next();
        app.select_next();
        assert_eq!(app.page_window(), PageWindow { start: 2, end: 4 });
        assert_eq!(app.page_position(), (1, 3));
        app.select_prev();
        app.select_prev();
        app.select_prev();
        assert_eq!(app.page_window(), PageWindow { start: 4, end: 5 });
    }

    #[test]
    fn test_quit() {
        let mut app = create_test_app();
        app.quit();
        assert!(app.should_quit());
    }
}
