//! Error types for parsing and printing operations.

use thiserror::Error;

/// Errors that can occur while parsing JSON text or printing a tree.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum JotError {
    /// Malformed input. Includes the byte offset where the error was detected.
    #[error("parse error at offset {offset}: {message}")]
    Parse { offset: usize, message: String },

    /// Nesting exceeded the configured recursion ceiling.
    #[error("nesting deeper than {limit} levels at offset {offset}")]
    TooDeep { offset: usize, limit: usize },

    /// Non-whitespace content after the top-level value when the caller
    /// disallowed trailing input.
    #[error("unexpected trailing content at offset {offset}")]
    TrailingGarbage { offset: usize },

    /// A fixed-capacity print buffer was too small for the output.
    #[error("output exceeds buffer capacity of {capacity} bytes")]
    Capacity { capacity: usize },
}

impl JotError {
    pub(crate) fn parse(offset: usize, message: impl Into<String>) -> Self {
        JotError::Parse {
            offset,
            message: message.into(),
        }
    }
}

/// Convenience alias used throughout jot-core.
pub type Result<T> = std::result::Result<T, JotError>;
