//! Error types for tally-tui
//!
//! Wraps core store errors and terminal/IO errors for unified handling
//! in the event loop.

use thiserror::Error;

/// TUI-specific errors
#[derive(Error, Debug)]
pub enum TuiError {
    /// Core store error (for example an invalid `TALLY_FILTER` value)
    #[error("Store error: {0}")]
    Store(#[from] libtally::TallyError),

    /// Terminal/IO error
    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}

/// Result type for TUI operations
pub type Result<T> = std::result::Result<T, TuiError>;
