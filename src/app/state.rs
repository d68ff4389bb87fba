use std::time::Duration;

use crate::catalog::{Catalog, Snippet};
use crate::notify::NotificationCenter;
use crate::tracker::CopyStateTracker;
use crate::ui::theme::Theme;

pub struct AppState {
    pub catalog: Catalog,
    pub cursor_position: usize,
    pub should_quit: bool,
    pub show_help: bool,
    pub theme: Theme,
    pub tracker: CopyStateTracker,
    pub notifications: NotificationCenter,
    pub toast_duration: Duration,
}

impl AppState {
    pub fn new(
        catalog: Catalog,
        theme: Theme,
        tracker: CopyStateTracker,
        notifications: NotificationCenter,
        toast_duration: Duration,
    ) -> Self {
        Self {
            catalog,
            cursor_position: 0,
            should_quit: false,
            show_help: false,
            theme,
            tracker,
            notifications,
            toast_duration,
        }
    }

    pub fn move_cursor_up(&mut self) {
        if self.cursor_position > 0 {
            self.cursor_position -= 1;
        }
    }

    pub fn move_cursor_down(&mut self) {
        if !self.catalog.is_empty() && self.cursor_position < self.catalog.len() - 1 {
            self.cursor_position += 1;
        }
    }

    pub fn selected_snippet(&self) -> Option<&Snippet> {
        self.catalog.get(self.cursor_position)
    }

    /// True when this snippet is the one currently flagged "copied".
    pub fn is_copied(&self, snippet: &Snippet) -> bool {
        self.tracker.copied().as_deref() == Some(snippet.id.as_str())
    }
}
