//! Application state
//!
//! The authoritative todo collection lives in [`libtally::TodoState`];
//! everything else here is transient view state (drafts, cursor,
//! overlays) that is discarded on commit or cancel.

use libtally::{TodoId, TodoItem, TodoState};

use super::actions::Mode;

/// Root application state
///
/// Single source of truth for the UI. State transitions are pure
/// functions that return new state values (see `reducer.rs`).
#[derive(Debug, Clone)]
pub struct AppState {
    /// Should the application quit?
    pub should_quit: bool,

    /// Current input focus mode
    pub mode: Mode,

    /// Help overlay visible?
    pub help_visible: bool,

    /// The todo store (collection + active filter)
    pub store: TodoState,

    /// Draft text for the add box. Cleared after a successful add,
    /// left unchanged when a blank submit is ignored.
    pub input: String,

    /// Item currently in edit mode, if any. At most one at a time.
    pub editing_id: Option<TodoId>,

    /// Draft text for the item being edited
    pub edit_draft: String,

    /// Cursor position within the visible (filtered) list
    pub selected: usize,

    /// UI configuration
    pub config: UiConfig,
}

/// UI configuration
#[derive(Debug, Clone)]
pub struct UiConfig {
    /// Use colors?
    pub colors_enabled: bool,

    /// Use unicode symbols (false = ASCII fallback)
    pub unicode_enabled: bool,

    /// Tick rate in milliseconds
    pub tick_rate_ms: u64,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            should_quit: false,
            mode: Mode::List,
            help_visible: false,
            store: TodoState::new(),
            input: String::new(),
            editing_id: None,
            edit_draft: String::new(),
            selected: 0,
            config: UiConfig::default(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        let colors_enabled =
            std::env::var("NO_COLOR").is_err() && std::env::var("TALLY_TUI_NO_COLOR").is_err();

        let unicode_enabled = colors_enabled; // Same heuristic for now

        let tick_rate_ms = std::env::var("TALLY_TUI_TICK_MS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(100);

        Self {
            colors_enabled,
            unicode_enabled,
            tick_rate_ms,
        }
    }
}

impl AppState {
    /// Create new application state with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// The item under the cursor, if the visible list is non-empty
    pub fn selected_item(&self) -> Option<&TodoItem> {
        self.store.visible().get(self.selected).copied()
    }
}
