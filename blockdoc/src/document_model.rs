//! Structured (block-based) document model
//!
//! A structured document is a JSON object with an ordered `blocks` array.
//! Any other top-level fields (`time`, `version`, ...) are not modeled here;
//! code that rewrites a stored document works on the raw JSON value so those
//! fields survive untouched.

use serde_json::Value;
use std::collections::BTreeMap;

mod blocks;
mod error;
mod fields;

pub use blocks::{Block, ListItem, ListStyle, DEFAULT_HEADER_LEVEL};
pub use error::DocumentError;

/// An ordered sequence of blocks
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StructuredDocument {
    /// Blocks in reading order
    pub blocks: Vec<Block>,
}

impl StructuredDocument {
    /// Create a document from blocks
    pub fn new(blocks: Vec<Block>) -> Self {
        Self { blocks }
    }

    /// Parse a serialized document
    ///
    /// # Returns
    /// * `Ok(StructuredDocument)` - The string is a JSON object with a `blocks` array
    /// * `Err(DocumentError)` - Invalid JSON, or the value does not have the document shape
    pub fn parse(raw: &str) -> Result<Self, DocumentError> {
        let value: Value = serde_json::from_str(raw)?;
        Self::from_value(&value)
    }

    /// Interpret an already-parsed JSON value
    ///
    /// Individual blocks never cause an error; only the top-level shape is checked.
    pub fn from_value(value: &Value) -> Result<Self, DocumentError> {
        let blocks = block_array(value)?;
        Ok(Self {
            blocks: blocks.iter().map(Block::from_value).collect(),
        })
    }

    /// Serialize as `{"blocks": [...]}`
    pub fn to_value(&self) -> Value {
        serde_json::json!({
            "blocks": self.blocks.iter().map(Block::to_value).collect::<Vec<_>>(),
        })
    }

    /// Number of blocks of each kind, keyed by kind name
    pub fn block_counts(&self) -> BTreeMap<&'static str, usize> {
        let mut counts = BTreeMap::new();
        for block in &self.blocks {
            *counts.entry(block.kind_name()).or_insert(0) += 1;
        }
        counts
    }

    /// Whether the document has no blocks
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}

/// Check the top-level document shape and return the raw `blocks` array
pub(crate) fn block_array(value: &Value) -> Result<&Vec<Value>, DocumentError> {
    let obj = value.as_object().ok_or(DocumentError::NotAnObject)?;
    let blocks = obj.get("blocks").ok_or(DocumentError::MissingBlocks)?;
    blocks
        .as_array()
        .ok_or_else(|| DocumentError::BlocksNotArray {
            found: fields::type_name(blocks),
        })
}
