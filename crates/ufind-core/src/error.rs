//! Error types for ufind-core.
//!
//! [`DataError`] covers the input document and is fatal to the binary.
//! [`InvalidExpression`] is a user input error the shell recovers from.

use std::path::PathBuf;
use thiserror::Error;

/// Failure to load the user document.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("failed to read {}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("{} is not valid JSON", path.display())]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("{} must contain a JSON array of user objects", path.display())]
    NotAnArray { path: PathBuf },

    #[error("{}: entry {index} is not a JSON object", path.display())]
    NotAnObject { path: PathBuf, index: usize },
}

/// An age filter expression matched neither the range nor the comparison grammar.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid age filter. Use '30', '>30', '<=25', or '21-29'.")]
pub struct InvalidExpression {
    /// The expression as the user typed it.
    pub expr: String,
}
