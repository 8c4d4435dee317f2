//! Actions for the reducer pattern
//!
//! All state transitions are triggered by actions. Domain mutations are
//! carried as [`libtally::TodoAction`] values inside [`Action::Todo`];
//! everything else here is view-local.

use crossterm::event::KeyEvent;
use libtally::TodoAction;

/// Actions that trigger state transitions
#[derive(Debug, Clone)]
pub enum Action {
    // === UI Events ===
    /// Keyboard input event
    Key(KeyEvent),

    /// Periodic tick
    Tick,

    /// Terminal resize event
    Resize(u16, u16),

    // === Navigation / overlays ===
    /// Quit the application
    Quit,

    /// Show help overlay
    ShowHelp,

    /// Hide help overlay
    HideHelp,

    // === Add-input box ===
    /// Enter input mode (focus the add box)
    StartInput,

    /// Leave input mode without adding; the draft is kept
    CancelInput,

    /// Draft text changed in the add box
    InputChanged(String),

    /// Commit the add box. Dispatches an add only when the trimmed
    /// draft is non-empty; a blank draft is left untouched.
    SubmitInput,

    // === Item editing ===
    /// Enter edit mode on the item under the cursor
    StartEdit,

    /// Draft text changed in the edit box
    EditDraftChanged(String),

    /// Commit the edit and leave edit mode
    CommitEdit,

    /// Leave edit mode without dispatching
    CancelEdit,

    // === List navigation ===
    /// Move the cursor down within the visible list
    SelectNext,

    /// Move the cursor up within the visible list
    SelectPrev,

    /// Advance the filter to the next value (wraps around)
    CycleFilter,

    // === Domain ===
    /// A store transition, applied via `libtally::reduce`
    Todo(TodoAction),
}

/// Input focus mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Navigating the todo list
    List,

    /// Typing into the add box
    Input,

    /// Editing an existing item's text
    Edit,
}
