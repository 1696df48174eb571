//! Format detection for stored content strings
//!
//! Stored content is one of: a serialized structured document, an HTML
//! fragment, or plain text. Detection is total: malformed JSON is simply
//! "not structured".

use crate::document_model::StructuredDocument;
use serde_json::Value;
use std::fmt;

/// Classification of a content string
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ContentKind {
    /// The empty string
    Empty,
    /// Text containing markup
    Html,
    /// A JSON object with a `blocks` array
    StructuredDocument,
    /// Anything else
    PlainText,
}

impl ContentKind {
    /// Short lowercase name used in CLI output
    pub fn as_str(self) -> &'static str {
        match self {
            ContentKind::Empty => "empty",
            ContentKind::Html => "html",
            ContentKind::StructuredDocument => "structured",
            ContentKind::PlainText => "plain-text",
        }
    }
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A classified content string, carrying the parsed document when structured
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Content<'a> {
    /// The empty string
    Empty,
    /// HTML, borrowed from the input
    Html(&'a str),
    /// The parsed structured document
    Structured(StructuredDocument),
    /// Plain text, borrowed from the input
    PlainText(&'a str),
}

impl Content<'_> {
    /// The classification without the payload
    pub fn kind(&self) -> ContentKind {
        match self {
            Content::Empty => ContentKind::Empty,
            Content::Html(_) => ContentKind::Html,
            Content::Structured(_) => ContentKind::StructuredDocument,
            Content::PlainText(_) => ContentKind::PlainText,
        }
    }
}

/// Classify a content string
pub fn detect(content: &str) -> ContentKind {
    classify(content).kind()
}

/// Classify a content string, keeping the parsed document if it is structured
///
/// Rules, in order:
/// 1. empty string is [`Content::Empty`]
/// 2. JSON-looking text that parses to an object with a `blocks` array is
///    [`Content::Structured`]
/// 3. text containing both `<` and `>` is [`Content::Html`]
/// 4. anything else is [`Content::PlainText`]
pub fn classify(content: &str) -> Content<'_> {
    if content.is_empty() {
        return Content::Empty;
    }

    if let Some(value) = sniff_json(content) {
        match StructuredDocument::from_value(&value) {
            Ok(doc) => return Content::Structured(doc),
            Err(e) => log::debug!("JSON content is not a structured document: {}", e),
        }
    }

    if content.contains('<') && content.contains('>') {
        Content::Html(content)
    } else {
        Content::PlainText(content)
    }
}

/// Parse `content` as JSON if it is bracketed like an object or array
///
/// The bracket check is only a cheap pre-filter; callers still validate the
/// parsed shape.
pub(crate) fn sniff_json(content: &str) -> Option<Value> {
    let trimmed = trim_content(content);
    if !looks_like_json(trimmed) {
        return None;
    }

    match serde_json::from_str::<Value>(trimmed) {
        Ok(value) => Some(value),
        Err(e) => {
            log::debug!("Bracketed content failed to parse as JSON: {}", e);
            None
        }
    }
}

/// Strip surrounding whitespace and a leading byte-order mark
pub(crate) fn trim_content(content: &str) -> &str {
    content.trim_start_matches('\u{feff}').trim()
}

fn looks_like_json(trimmed: &str) -> bool {
    (trimmed.starts_with('{') && trimmed.ends_with('}'))
        || (trimmed.starts_with('[') && trimmed.ends_with(']'))
}
