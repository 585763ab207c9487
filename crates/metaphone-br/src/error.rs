//! Name matching error types

use thiserror::Error;

/// Score reported alongside a [`NameError`]
pub const INVALID_SCORE: f64 = -1.0;

/// Errors that can occur while matching names
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NameError {
    /// Input contains no letters to build a name from
    #[error("invalid name: {0:?}")]
    InvalidName(String),
}

impl NameError {
    /// Sentinel score for callers that report a number even on failure
    pub fn score(&self) -> f64 {
        INVALID_SCORE
    }
}

/// Result type for name operations
pub type NameResult<T> = Result<T, NameError>;
