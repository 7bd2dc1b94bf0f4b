//! Error types for permission document parsing.
//!
//! Parsing is the only fallible operation in this crate. Evaluation is
//! total and fails closed instead of raising; see [`crate::document`].

use thiserror::Error;

/// Errors that can occur while parsing a permission document.
#[derive(Debug, Error)]
pub enum DocumentError {
    /// The document is not valid JSON, or a leaf is not a boolean.
    #[error("malformed permission document: {0}")]
    Malformed(#[from] serde_json::Error),

    /// The top level of the document is not an object.
    #[error("permission document must be a JSON object at the top level")]
    NotAnObject,
}
