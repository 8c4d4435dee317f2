//! Error types for Tally

use thiserror::Error;

pub type Result<T> = std::result::Result<T, TallyError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TallyError {
    #[error("Invalid filter: '{0}'. Valid options: all, active, completed")]
    InvalidFilter(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_filter_message_names_the_input() {
        let err = TallyError::InvalidFilter("done".to_string());
        let msg = err.to_string();
        assert!(msg.contains("'done'"));
        assert!(msg.contains("all, active, completed"));
    }
}
