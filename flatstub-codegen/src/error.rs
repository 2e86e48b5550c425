//! Error types for code generation.

use thiserror::Error;

/// Error type for code generation operations.
#[derive(Debug, Error)]
pub enum CodegenError {
    /// Schema parsing error.
    #[error("schema parse error: {0}")]
    Parse(#[from] flatstub_schema::ParseError),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Return type not covered by any default-value rule.
    #[error("unknown return type '{type_name}' for function '{function}'")]
    UnknownReturnType {
        /// Flat function name.
        function: String,
        /// Canonical return type.
        type_name: String,
    },
}

impl CodegenError {
    /// Creates an unknown return type error.
    pub fn unknown_return_type(function: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self::UnknownReturnType {
            function: function.into(),
            type_name: type_name.into(),
        }
    }
}
