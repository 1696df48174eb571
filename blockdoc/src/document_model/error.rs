//! Error types for structured document parsing

use thiserror::Error;

/// Reasons a string could not be read as a structured document
#[derive(Error, Debug)]
pub enum DocumentError {
    /// The content is not valid JSON at all
    #[error("Invalid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    /// The top-level value is an array, string, number, etc.
    #[error("Structured document must be a JSON object")]
    NotAnObject,

    /// The object has no `blocks` field
    #[error("Structured document has no `blocks` field")]
    MissingBlocks,

    /// `blocks` is present but is not an array
    #[error("`blocks` must be an array, but found {found}")]
    BlocksNotArray {
        /// JSON type name of the value that was found instead
        found: &'static str,
    },
}
