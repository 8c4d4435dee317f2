//! Todo store: state, actions, and the pure reducer.
//!
//! The store follows the reducer pattern: all state transitions are
//! described by a [`TodoAction`] and applied by [`reduce`], a pure
//! function `(State, Action) -> State` with no side effects.

use serde::{Deserialize, Serialize};

use crate::types::{Filter, TodoId, TodoItem};

/// The authoritative application state: the todo collection plus the
/// active display filter.
///
/// The collection is insertion-ordered. Items are created only by
/// [`TodoAction::Add`], mutated only by [`TodoAction::Toggle`] and
/// [`TodoAction::Edit`], and removed only by [`TodoAction::Delete`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoState {
    /// All items, in insertion order
    pub todos: Vec<TodoItem>,

    /// Active display filter
    pub filter: Filter,

    /// Next id to hand out. Private so ids can only come from `reduce`,
    /// which keeps them unique for the lifetime of the state.
    next_id: u64,
}

impl TodoState {
    /// Create an empty store with the default filter
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up an item by id
    pub fn get(&self, id: TodoId) -> Option<&TodoItem> {
        self.todos.iter().find(|todo| todo.id == id)
    }

    /// The items selected by the active filter, in insertion order
    pub fn visible(&self) -> Vec<&TodoItem> {
        self.todos
            .iter()
            .filter(|todo| self.filter.matches(todo))
            .collect()
    }

    /// Number of items not yet completed
    pub fn remaining(&self) -> usize {
        self.todos.iter().filter(|todo| !todo.completed).count()
    }
}

/// Actions that transition the todo store.
///
/// This is the complete operation set; there is no other way to mutate
/// [`TodoState`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TodoAction {
    /// Append a new incomplete item with the given text.
    ///
    /// The reducer accepts any text; callers that want to reject blank
    /// input must check before dispatching.
    Add(String),

    /// Remove the item with this id. Silent no-op if absent.
    Delete(TodoId),

    /// Flip the completion flag on the item with this id. Silent no-op
    /// if absent.
    Toggle(TodoId),

    /// Replace the text on the item with this id. Silent no-op if
    /// absent; empty replacement text is accepted.
    Edit { id: TodoId, text: String },

    /// Replace the active filter unconditionally
    SetFilter(Filter),
}

/// Pure reducer for the todo store.
///
/// Takes current state and an action, returns new state. Deterministic,
/// total (never fails), and free of I/O. Operations that target an id
/// not present in the collection return the state unchanged.
pub fn reduce(state: TodoState, action: TodoAction) -> TodoState {
    match action {
        TodoAction::Add(text) => {
            let id = TodoId(state.next_id);
            tracing::debug!(%id, "todo added");

            let mut todos = state.todos;
            todos.push(TodoItem {
                id,
                text,
                completed: false,
            });

            TodoState {
                todos,
                filter: state.filter,
                next_id: state.next_id + 1,
            }
        }

        TodoAction::Delete(id) => TodoState {
            todos: state
                .todos
                .into_iter()
                .filter(|todo| todo.id != id)
                .collect(),
            filter: state.filter,
            next_id: state.next_id,
        },

        TodoAction::Toggle(id) => TodoState {
            todos: state
                .todos
                .into_iter()
                .map(|todo| {
                    if todo.id == id {
                        TodoItem {
                            completed: !todo.completed,
                            ..todo
                        }
                    } else {
                        todo
                    }
                })
                .collect(),
            filter: state.filter,
            next_id: state.next_id,
        },

        TodoAction::Edit { id, text } => TodoState {
            todos: state
                .todos
                .into_iter()
                .map(|todo| {
                    if todo.id == id {
                        TodoItem {
                            text: text.clone(),
                            ..todo
                        }
                    } else {
                        todo
                    }
                })
                .collect(),
            filter: state.filter,
            next_id: state.next_id,
        },

        TodoAction::SetFilter(filter) => {
            tracing::debug!(%filter, "filter changed");
            TodoState { filter, ..state }
        }
    }
}
