//! Application module
//!
//! Contains the core application architecture:
//! - Actions: what can happen
//! - State: what is true right now
//! - Reducer: pure function (State, Action) -> State
//!
//! Domain transitions (add/delete/toggle/edit/set-filter) are delegated
//! to `libtally`'s store reducer; this layer only adds view concerns
//! like the input draft, the list cursor, and overlays.

pub mod actions;
pub mod event;
pub mod reducer;
pub mod state;

// Re-export commonly used types
pub use actions::{Action, Mode};
pub use reducer::reduce;
pub use state::{AppState, UiConfig};
