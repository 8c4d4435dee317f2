//! Tally - a reducer-driven todo list
//!
//! This library owns the application's single source of truth: the todo
//! collection and the active display filter. All state transitions go
//! through the pure reducer in [`store`], so any front end (the bundled
//! terminal UI or otherwise) can drive the same state machine.

pub mod error;
pub mod logging;
pub mod store;
pub mod types;

// Re-export commonly used types
pub use error::{Result, TallyError};
pub use store::{reduce, TodoAction, TodoState};
pub use types::{Filter, TodoId, TodoItem};
