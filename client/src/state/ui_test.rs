use super::*;

// =============================================================
// UiState defaults
// =============================================================

#[test]
fn ui_state_default_dark_mode_off() {
    let state = UiState::default();
    assert!(!state.dark_mode);
}

#[test]
fn ui_state_default_about_tab_is_story() {
    let state = UiState::default();
    assert_eq!(state.about_tab, AboutTab::Story);
}

// =============================================================
// AboutTab
// =============================================================

#[test]
fn about_tab_ids_are_distinct() {
    let ids = AboutTab::ALL.map(AboutTab::id);
    assert_eq!(ids, ["story", "values", "unique"]);
}

#[test]
fn about_tab_labels() {
    assert_eq!(AboutTab::Story.label(), "My Story");
    assert_eq!(AboutTab::Values.label(), "Core Values");
    assert_eq!(AboutTab::Unique.label(), "What Sets Me Apart");
}
