//! Test keybinding mappings to actions
//!
//! Verifies that keyboard input is correctly mapped to state changes
//! through the reducer.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use libtally::{Filter, TodoAction};
use tally_tui::app::{reduce, Action, AppState, Mode};

fn key_event(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
    KeyEvent::new(code, modifiers)
}

fn key(state: AppState, code: KeyCode) -> AppState {
    reduce(state, Action::Key(key_event(code, KeyModifiers::NONE)))
}

/// State with three todos, cursor at the top
fn populated() -> AppState {
    let mut state = AppState::new();
    for text in ["first", "second", "third"] {
        state = reduce(state, Action::Todo(TodoAction::Add(text.to_string())));
    }
    state
}

#[test]
fn test_q_quits_application() {
    let state = key(AppState::new(), KeyCode::Char('q'));

    assert!(state.should_quit);
}

#[test]
fn test_q_does_not_quit_in_input_mode() {
    let state = reduce(AppState::new(), Action::StartInput);

    let state = key(state, KeyCode::Char('q'));

    assert!(!state.should_quit);
}

#[test]
fn test_f1_toggles_help() {
    let state = AppState::new();
    assert!(!state.help_visible);

    let state = key(state, KeyCode::F(1));
    assert!(state.help_visible);

    let state = key(state, KeyCode::F(1));
    assert!(!state.help_visible);
}

#[test]
fn test_help_overlay_swallows_list_keys() {
    let state = key(populated(), KeyCode::F(1));

    // 'd' would normally delete the selected item
    let state = key(state, KeyCode::Char('d'));

    assert_eq!(state.store.todos.len(), 3);
    assert!(state.help_visible);
}

#[test]
fn test_i_and_a_enter_input_mode() {
    let state = key(AppState::new(), KeyCode::Char('i'));
    assert_eq!(state.mode, Mode::Input);

    let state = key(AppState::new(), KeyCode::Char('a'));
    assert_eq!(state.mode, Mode::Input);
}

#[test]
fn test_esc_leaves_input_mode_and_keeps_draft() {
    let state = reduce(AppState::new(), Action::StartInput);
    let state = reduce(state, Action::InputChanged("half-typed".to_string()));

    let state = key(state, KeyCode::Esc);

    assert_eq!(state.mode, Mode::List);
    assert_eq!(state.input, "half-typed");
}

#[test]
fn test_j_and_k_move_cursor_with_clamping() {
    let state = populated();
    assert_eq!(state.selected, 0);

    // k at the top stays at the top
    let state = key(state, KeyCode::Char('k'));
    assert_eq!(state.selected, 0);

    let state = key(state, KeyCode::Char('j'));
    assert_eq!(state.selected, 1);

    let state = key(state, KeyCode::Char('j'));
    let state = key(state, KeyCode::Char('j'));
    // j at the bottom stays at the bottom
    assert_eq!(state.selected, 2);

    let state = key(state, KeyCode::Up);
    assert_eq!(state.selected, 1);
}

#[test]
fn test_space_toggles_selected_item() {
    let state = populated();
    assert!(!state.store.todos[0].completed);

    let state = key(state, KeyCode::Char(' '));
    assert!(state.store.todos[0].completed);

    // Toggle twice returns to the original value
    let state = key(state, KeyCode::Char(' '));
    assert!(!state.store.todos[0].completed);
}

#[test]
fn test_enter_toggles_in_list_mode() {
    let state = key(populated(), KeyCode::Enter);

    assert!(state.store.todos[0].completed);
}

#[test]
fn test_toggle_on_empty_list_is_noop() {
    let state = key(AppState::new(), KeyCode::Char(' '));

    assert!(state.store.todos.is_empty());
    assert!(!state.should_quit);
}

#[test]
fn test_d_deletes_selected_item() {
    let state = key(populated(), KeyCode::Char('j'));

    let state = key(state, KeyCode::Char('d'));

    let texts: Vec<&str> = state.store.todos.iter().map(|t| t.text.as_str()).collect();
    assert_eq!(texts, vec!["first", "third"]);
}

#[test]
fn test_e_enters_edit_mode_seeded_with_item_text() {
    let state = key(populated(), KeyCode::Char('j'));

    let state = key(state, KeyCode::Char('e'));

    assert_eq!(state.mode, Mode::Edit);
    assert_eq!(state.editing_id, Some(state.store.todos[1].id));
    assert_eq!(state.edit_draft, "second");
}

#[test]
fn test_e_on_empty_list_is_noop() {
    let state = key(AppState::new(), KeyCode::Char('e'));

    assert_eq!(state.mode, Mode::List);
    assert!(state.editing_id.is_none());
}

#[test]
fn test_enter_commits_edit() {
    let state = key(populated(), KeyCode::Char('e'));
    let state = reduce(state, Action::EditDraftChanged("rewritten".to_string()));

    let state = key(state, KeyCode::Enter);

    assert_eq!(state.mode, Mode::List);
    assert!(state.editing_id.is_none());
    assert_eq!(state.store.todos[0].text, "rewritten");
}

#[test]
fn test_esc_cancels_edit_without_dispatching() {
    let state = key(populated(), KeyCode::Char('e'));
    let state = reduce(state, Action::EditDraftChanged("discarded".to_string()));

    let state = key(state, KeyCode::Esc);

    assert_eq!(state.mode, Mode::List);
    assert!(state.editing_id.is_none());
    assert_eq!(state.store.todos[0].text, "first");
}

#[test]
fn test_number_keys_select_filters() {
    let state = key(AppState::new(), KeyCode::Char('2'));
    assert_eq!(state.store.filter, Filter::Active);

    let state = key(state, KeyCode::Char('3'));
    assert_eq!(state.store.filter, Filter::Completed);

    let state = key(state, KeyCode::Char('1'));
    assert_eq!(state.store.filter, Filter::All);
}

#[test]
fn test_reselecting_active_filter_is_noop() {
    let state = key(populated(), KeyCode::Char('2'));
    assert_eq!(state.store.filter, Filter::Active);

    let state = key(state, KeyCode::Char('2'));

    assert_eq!(state.store.filter, Filter::Active);
    assert_eq!(state.store.todos.len(), 3);
}

#[test]
fn test_tab_cycles_filter() {
    let state = key(AppState::new(), KeyCode::Tab);
    assert_eq!(state.store.filter, Filter::Active);

    let state = key(state, KeyCode::Tab);
    assert_eq!(state.store.filter, Filter::Completed);

    let state = key(state, KeyCode::Tab);
    assert_eq!(state.store.filter, Filter::All);
}
