//! Pure reducer function for state transitions
//!
//! `(State, Action) -> State` with no side effects. Domain actions are
//! forwarded to `libtally::reduce`; the cursor is re-clamped after any
//! transition that can shrink the visible list.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use libtally::{Filter, TodoAction};

use super::actions::{Action, Mode};
use super::state::AppState;

/// Pure reducer function
///
/// Takes current state and an action, returns new state. No I/O, no
/// side effects, deterministic.
pub fn reduce(state: AppState, action: Action) -> AppState {
    match action {
        // === UI Events ===
        Action::Key(key) => handle_key(state, key),
        Action::Tick => state,
        Action::Resize(_, _) => state, // Terminal auto-handles resize

        // === Navigation / overlays ===
        Action::Quit => AppState {
            should_quit: true,
            ..state
        },

        Action::ShowHelp => AppState {
            help_visible: true,
            ..state
        },

        Action::HideHelp => AppState {
            help_visible: false,
            ..state
        },

        // === Add-input box ===
        Action::StartInput => AppState {
            mode: Mode::Input,
            ..state
        },

        Action::CancelInput => AppState {
            mode: Mode::List,
            ..state
        },

        Action::InputChanged(text) => AppState {
            input: text,
            ..state
        },

        Action::SubmitInput => {
            // Blank or whitespace-only drafts dispatch nothing and stay
            // in place so the user can keep typing.
            if state.input.trim().is_empty() {
                return state;
            }

            let store = libtally::reduce(state.store.clone(), TodoAction::Add(state.input.clone()));
            clamp_selection(AppState {
                store,
                input: String::new(),
                ..state
            })
        }

        // === Item editing ===
        Action::StartEdit => {
            let target = state.selected_item().map(|todo| (todo.id, todo.text.clone()));
            match target {
                Some((id, text)) => AppState {
                    mode: Mode::Edit,
                    editing_id: Some(id),
                    edit_draft: text,
                    ..state
                },
                None => state,
            }
        }

        Action::EditDraftChanged(text) => AppState {
            edit_draft: text,
            ..state
        },

        Action::CommitEdit => match state.editing_id {
            Some(id) => {
                let store = libtally::reduce(
                    state.store.clone(),
                    TodoAction::Edit {
                        id,
                        text: state.edit_draft.clone(),
                    },
                );
                clamp_selection(AppState {
                    store,
                    mode: Mode::List,
                    editing_id: None,
                    edit_draft: String::new(),
                    ..state
                })
            }
            None => AppState {
                mode: Mode::List,
                ..state
            },
        },

        Action::CancelEdit => AppState {
            mode: Mode::List,
            editing_id: None,
            edit_draft: String::new(),
            ..state
        },

        // === List navigation ===
        Action::SelectNext => {
            let len = state.store.visible().len();
            if len == 0 {
                return state;
            }
            let selected = (state.selected + 1).min(len - 1);
            AppState { selected, ..state }
        }

        Action::SelectPrev => AppState {
            selected: state.selected.saturating_sub(1),
            ..state
        },

        Action::CycleFilter => {
            let next = state.store.filter.next();
            reduce(state, Action::Todo(TodoAction::SetFilter(next)))
        }

        // === Domain ===
        Action::Todo(todo_action) => {
            let store = libtally::reduce(state.store.clone(), todo_action);
            clamp_selection(AppState { store, ..state })
        }
    }
}

/// Keep the cursor inside the visible list after it shrinks
fn clamp_selection(state: AppState) -> AppState {
    let len = state.store.visible().len();
    let selected = if len == 0 {
        0
    } else {
        state.selected.min(len - 1)
    };
    AppState { selected, ..state }
}

/// Handle keyboard input
///
/// Maps keys to high-level actions. This is where keybindings are defined.
fn handle_key(state: AppState, key: KeyEvent) -> AppState {
    // The help overlay swallows everything except its dismiss keys
    if state.help_visible {
        return match key.code {
            KeyCode::Esc | KeyCode::F(1) => reduce(state, Action::HideHelp),
            _ => state,
        };
    }

    // Help works from any mode
    if key.code == KeyCode::F(1) {
        return reduce(state, Action::ShowHelp);
    }

    match state.mode {
        Mode::List => handle_list_key(state, key),
        Mode::Input => handle_input_key(state, key),
        Mode::Edit => handle_edit_key(state, key),
    }
}

/// Keybindings while navigating the list
fn handle_list_key(state: AppState, key: KeyEvent) -> AppState {
    match (key.code, key.modifiers) {
        // Quit
        (KeyCode::Char('q'), KeyModifiers::NONE) => reduce(state, Action::Quit),

        // Focus the add box
        (KeyCode::Char('i'), KeyModifiers::NONE) | (KeyCode::Char('a'), KeyModifiers::NONE) => {
            reduce(state, Action::StartInput)
        }

        // Cursor movement
        (KeyCode::Down, _) | (KeyCode::Char('j'), KeyModifiers::NONE) => {
            reduce(state, Action::SelectNext)
        }
        (KeyCode::Up, _) | (KeyCode::Char('k'), KeyModifiers::NONE) => {
            reduce(state, Action::SelectPrev)
        }

        // Toggle completion on the item under the cursor
        (KeyCode::Char(' '), KeyModifiers::NONE) | (KeyCode::Enter, _) => {
            let id = state.selected_item().map(|todo| todo.id);
            match id {
                Some(id) => reduce(state, Action::Todo(TodoAction::Toggle(id))),
                None => state,
            }
        }

        // Delete the item under the cursor
        (KeyCode::Char('d'), KeyModifiers::NONE) | (KeyCode::Delete, _) => {
            let id = state.selected_item().map(|todo| todo.id);
            match id {
                Some(id) => reduce(state, Action::Todo(TodoAction::Delete(id))),
                None => state,
            }
        }

        // Edit the item under the cursor
        (KeyCode::Char('e'), KeyModifiers::NONE) => reduce(state, Action::StartEdit),

        // Filter selection
        (KeyCode::Char('1'), KeyModifiers::NONE) => {
            reduce(state, Action::Todo(TodoAction::SetFilter(Filter::All)))
        }
        (KeyCode::Char('2'), KeyModifiers::NONE) => {
            reduce(state, Action::Todo(TodoAction::SetFilter(Filter::Active)))
        }
        (KeyCode::Char('3'), KeyModifiers::NONE) => {
            reduce(state, Action::Todo(TodoAction::SetFilter(Filter::Completed)))
        }
        (KeyCode::Tab, _) => reduce(state, Action::CycleFilter),

        _ => state,
    }
}

/// Keybindings while the add box has focus. Printable characters never
/// reach the reducer in this mode; the main loop feeds them to the
/// textarea and dispatches `InputChanged` instead.
fn handle_input_key(state: AppState, key: KeyEvent) -> AppState {
    match key.code {
        KeyCode::Enter => reduce(state, Action::SubmitInput),
        KeyCode::Esc => reduce(state, Action::CancelInput),
        _ => state,
    }
}

/// Keybindings while editing an item
fn handle_edit_key(state: AppState, key: KeyEvent) -> AppState {
    match key.code {
        KeyCode::Enter => reduce(state, Action::CommitEdit),
        KeyCode::Esc => reduce(state, Action::CancelEdit),
        _ => state,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reducer_is_pure() {
        let state = AppState::new();
        let snapshot = state.clone();

        let new_state = reduce(state.clone(), Action::Quit);

        assert!(!snapshot.should_quit);
        assert!(new_state.should_quit);
    }

    #[test]
    fn test_blank_submit_keeps_draft() {
        let state = reduce(AppState::new(), Action::StartInput);
        let state = reduce(state, Action::InputChanged("   ".to_string()));

        let state = reduce(state, Action::SubmitInput);

        assert_eq!(state.input, "   ");
        assert!(state.store.todos.is_empty());
    }

    #[test]
    fn test_submit_adds_and_clears_draft() {
        let state = reduce(AppState::new(), Action::StartInput);
        let state = reduce(state, Action::InputChanged("buy milk".to_string()));

        let state = reduce(state, Action::SubmitInput);

        assert_eq!(state.store.todos.len(), 1);
        assert_eq!(state.store.todos[0].text, "buy milk");
        assert!(state.input.is_empty());
        // Stays in input mode for rapid entry
        assert_eq!(state.mode, Mode::Input);
    }

    #[test]
    fn test_selection_clamps_when_list_shrinks() {
        let mut state = AppState::new();
        for text in ["a", "b", "c"] {
            state = reduce(state, Action::Todo(TodoAction::Add(text.to_string())));
        }
        state = reduce(state, Action::SelectNext);
        state = reduce(state, Action::SelectNext);
        assert_eq!(state.selected, 2);

        let id = state.store.todos[2].id;
        state = reduce(state, Action::Todo(TodoAction::Delete(id)));

        assert_eq!(state.selected, 1);
    }
}
