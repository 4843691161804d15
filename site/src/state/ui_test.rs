use super::*;

// =============================================================
// UiState defaults
// =============================================================

#[test]
fn ui_state_default_theme_is_light() {
    let state = UiState::default();
    assert_eq!(state.theme, Theme::Light);
    assert!(!state.mobile_nav_open);
}

// =============================================================
// sidebar_matches
// =============================================================

#[test]
fn sidebar_matches_everything_when_filter_blank() {
    let state = UiState { sidebar_filter: "   ".to_owned(), ..UiState::default() };
    assert!(state.sidebar_matches("Button"));
}

#[test]
fn sidebar_matches_is_case_insensitive() {
    let state = UiState { sidebar_filter: "BUT".to_owned(), ..UiState::default() };
    assert!(state.sidebar_matches("Button"));
    assert!(!state.sidebar_matches("Card"));
}
