#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use crate::util::theme::Theme;

/// UI state for theme and navigation chrome.
#[derive(Clone, Debug, Default)]
pub struct UiState {
    pub theme: Theme,
    pub mobile_nav_open: bool,
    pub sidebar_filter: String,
}

impl UiState {
    /// Case-insensitive match of a catalog title against the sidebar filter.
    #[must_use]
    pub fn sidebar_matches(&self, title: &str) -> bool {
        let needle = self.sidebar_filter.trim();
        needle.is_empty() || title.to_ascii_lowercase().contains(&needle.to_ascii_lowercase())
    }
}
