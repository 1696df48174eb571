//! Flat-text editing round trip for stored content
//!
//! Structured documents are edited through a plain text surface. Extraction
//! keeps only text-bearing blocks, and committing an edit replaces every
//! block with a single paragraph. This loss of structure is intentional:
//! the text surface has no way to express lists, tables, code or images.

use crate::detector::{classify, sniff_json, Content};
use crate::document_model::{self, Block, StructuredDocument};
use itertools::Itertools;
use serde_json::Value;

/// Joiner between the text of consecutive blocks
pub const BLOCK_SEPARATOR: &str = "\n\n";

/// Flat text for an editing surface
///
/// Structured documents yield the text of their paragraph, header, quote and
/// text-carrying unknown blocks, untagged ones included; every other kind of
/// content is returned unchanged.
pub fn to_editable_text(content: &str) -> String {
    match classify(content) {
        Content::Structured(doc) => editable_text_of(&doc),
        Content::Empty | Content::Html(_) | Content::PlainText(_) => content.to_string(),
    }
}

/// Flat text of an already-parsed document
pub fn editable_text_of(doc: &StructuredDocument) -> String {
    doc.blocks
        .iter()
        .filter_map(editable_fragment)
        .join(BLOCK_SEPARATOR)
}

/// Text contributed by one block; headers keep a trailing newline
fn editable_fragment(block: &Block) -> Option<String> {
    match block {
        Block::Header { text, .. } if !text.is_empty() => Some(format!("{}\n", text)),
        Block::Paragraph { text } | Block::Quote { text, .. } if !text.is_empty() => {
            Some(text.clone())
        }
        Block::Unknown {
            text: Some(text), ..
        } => Some(text.clone()),
        _ => None,
    }
}

/// Store edited flat text back in the shape of the original content
///
/// If `original` is a structured document, the result is that document with
/// `blocks` replaced by one paragraph holding `new_text`; all other top-level
/// fields keep their values and order. Otherwise `new_text` is returned as is.
pub fn commit_edited_text(original: &str, new_text: &str) -> String {
    let Some(mut value) = sniff_json(original) else {
        return new_text.to_string();
    };

    if let Err(e) = document_model::block_array(&value) {
        log::debug!("Original content is not a structured document: {}", e);
        return new_text.to_string();
    }

    if let Value::Object(fields) = &mut value {
        fields.insert(
            "blocks".to_string(),
            Value::Array(vec![Block::paragraph(new_text).to_value()]),
        );
    }

    match serde_json::to_string(&value) {
        Ok(serialized) => serialized,
        Err(e) => {
            log::warn!("Failed to serialize edited document: {}", e);
            new_text.to_string()
        }
    }
}
