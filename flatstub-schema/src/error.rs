//! Error types for schema loading.

use thiserror::Error;

/// Error type for schema parsing operations.
#[derive(Debug, Error)]
pub enum ParseError {
    /// JSON syntax error, or a record missing one of its required keys.
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ParseError {
    /// Returns the 1-based line of a JSON error, if known.
    #[must_use]
    pub fn line(&self) -> Option<usize> {
        match self {
            Self::Json(e) => Some(e.line()),
            Self::Io(_) => None,
        }
    }

    /// Returns true if the document was well-formed JSON but did not match
    /// the expected shape (for example a missing `classname`).
    #[must_use]
    pub fn is_structural(&self) -> bool {
        matches!(self, Self::Json(e) if e.classify() == serde_json::error::Category::Data)
    }
}
