//! Block-level elements of a structured document
//!
//! Each block in the stored JSON is an object with a `type` tag and a `data`
//! object. This module maps that loose shape onto a closed set of kinds.

use super::fields;
use serde_json::{json, Map, Value};

/// Heading level used when `level` is missing or unusable
pub const DEFAULT_HEADER_LEVEL: u8 = 2;

/// Deepest heading level HTML supports
const MAX_HEADER_LEVEL: u8 = 6;

/// Ordered (`<ol>`) or unordered (`<ul>`) list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListStyle {
    /// `"style": "ordered"`
    Ordered,
    /// Any other style
    Unordered,
}

impl ListStyle {
    /// Only the exact string `"ordered"` selects an ordered list
    fn from_data(data: &Map<String, Value>) -> Self {
        match data.get("style").and_then(Value::as_str) {
            Some("ordered") => ListStyle::Ordered,
            _ => ListStyle::Unordered,
        }
    }

    fn as_str(self) -> &'static str {
        match self {
            ListStyle::Ordered => "ordered",
            ListStyle::Unordered => "unordered",
        }
    }
}

/// A single list entry, possibly carrying a nested list of the same style
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListItem {
    /// Text of the entry
    pub content: String,

    /// Nested entries (empty for flat lists)
    pub children: Vec<ListItem>,
}

impl ListItem {
    /// Create a flat list item
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            children: Vec::new(),
        }
    }

    /// Items are plain strings, or `{"content": .., "items": [..]}` objects
    /// as written by nested-list editors.
    fn from_value(value: &Value) -> Self {
        match value {
            Value::Object(obj) => Self {
                content: fields::text(obj, "content"),
                children: fields::array(obj, "items")
                    .iter()
                    .map(ListItem::from_value)
                    .collect(),
            },
            other => Self::new(fields::scalar_text(other)),
        }
    }

    fn to_value(&self) -> Value {
        if self.children.is_empty() {
            Value::String(self.content.clone())
        } else {
            json!({
                "content": self.content,
                "items": self.children.iter().map(ListItem::to_value).collect::<Vec<_>>(),
            })
        }
    }
}

/// One block of a structured document
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    /// A heading
    Header {
        /// Heading text
        text: String,
        /// Heading level, always within 1..=6
        level: u8,
    },

    /// A paragraph of (possibly inline-HTML) text
    Paragraph {
        /// Paragraph text
        text: String,
    },

    /// An ordered or unordered list
    List {
        /// List style
        style: ListStyle,
        /// Entries in order
        items: Vec<ListItem>,
    },

    /// A table of text cells
    Table {
        /// Rows of cells
        content: Vec<Vec<String>>,
        /// Whether the first row is a heading row
        with_headings: bool,
    },

    /// A quotation with optional attribution
    Quote {
        /// Quoted text
        text: String,
        /// Attribution, if non-empty
        caption: Option<String>,
    },

    /// A code listing
    Code {
        /// Raw code
        code: String,
    },

    /// An image reference
    Image {
        /// Image URL (`data.url` or `data.file.url`)
        url: String,
        /// Caption, if non-empty
        caption: Option<String>,
    },

    /// Any kind not modeled above, or a block missing its tag or data
    ///
    /// Renders as a paragraph of `text` only when `kind` is present.
    Unknown {
        /// The original `type` tag, if there was one
        kind: Option<String>,
        /// Free-standing `data.text`, if non-empty
        text: Option<String>,
    },
}

impl Block {
    /// Build a paragraph block
    pub fn paragraph(text: impl Into<String>) -> Self {
        Block::Paragraph { text: text.into() }
    }

    /// Interpret one element of the `blocks` array
    ///
    /// Never fails: anything that is not an object with a string `type` and
    /// an object `data` becomes a [`Block::Unknown`]. A block with `data` but
    /// no `type` keeps its `data.text`.
    pub fn from_value(value: &Value) -> Self {
        let Some(obj) = value.as_object() else {
            return Block::Unknown {
                kind: None,
                text: None,
            };
        };

        let kind = obj.get("type").and_then(Value::as_str);
        let data = obj.get("data").and_then(Value::as_object);

        let Some(data) = data else {
            return Block::Unknown {
                kind: kind.map(str::to_string),
                text: None,
            };
        };

        // Untagged blocks keep their text for editing but never render
        let Some(kind) = kind else {
            return Block::Unknown {
                kind: None,
                text: fields::non_empty_text(data, "text"),
            };
        };

        match kind {
            "header" => Block::Header {
                text: fields::text(data, "text"),
                level: header_level(data.get("level")),
            },
            "paragraph" => Block::Paragraph {
                text: fields::text(data, "text"),
            },
            "list" => Block::List {
                style: ListStyle::from_data(data),
                items: fields::array(data, "items")
                    .iter()
                    .map(ListItem::from_value)
                    .collect(),
            },
            "table" => Block::Table {
                content: fields::array(data, "content")
                    .iter()
                    .map(|row| {
                        row.as_array()
                            .map(|cells| {
                                cells.iter().map(fields::scalar_text).collect::<Vec<_>>()
                            })
                            .unwrap_or_default()
                    })
                    .collect(),
                with_headings: fields::flag(data, "withHeadings"),
            },
            "quote" => Block::Quote {
                text: fields::text(data, "text"),
                caption: fields::non_empty_text(data, "caption"),
            },
            "code" => Block::Code {
                code: fields::text(data, "code"),
            },
            "image" => Block::Image {
                url: image_url(data),
                caption: fields::non_empty_text(data, "caption"),
            },
            other => Block::Unknown {
                kind: Some(other.to_string()),
                text: fields::non_empty_text(data, "text"),
            },
        }
    }

    /// Serialize back to the `{"type": .., "data": {..}}` shape
    pub fn to_value(&self) -> Value {
        match self {
            Block::Header { text, level } => {
                json!({"type": "header", "data": {"text": text, "level": level}})
            }
            Block::Paragraph { text } => json!({"type": "paragraph", "data": {"text": text}}),
            Block::List { style, items } => json!({
                "type": "list",
                "data": {
                    "style": style.as_str(),
                    "items": items.iter().map(ListItem::to_value).collect::<Vec<_>>(),
                }
            }),
            Block::Table {
                content,
                with_headings,
            } => json!({
                "type": "table",
                "data": {"withHeadings": with_headings, "content": content}
            }),
            Block::Quote { text, caption } => {
                let mut data = json!({"text": text});
                if let Some(caption) = caption {
                    data["caption"] = json!(caption);
                }
                json!({"type": "quote", "data": data})
            }
            Block::Code { code } => json!({"type": "code", "data": {"code": code}}),
            Block::Image { url, caption } => {
                let mut data = json!({"url": url});
                if let Some(caption) = caption {
                    data["caption"] = json!(caption);
                }
                json!({"type": "image", "data": data})
            }
            Block::Unknown { kind, text } => {
                let mut block = Map::new();
                if let Some(kind) = kind {
                    block.insert("type".to_string(), json!(kind));
                }
                let mut data = Map::new();
                if let Some(text) = text {
                    data.insert("text".to_string(), json!(text));
                }
                block.insert("data".to_string(), Value::Object(data));
                Value::Object(block)
            }
        }
    }

    /// Kind tag as used in the stored JSON (`"unknown"` for the catch-all)
    pub fn kind_name(&self) -> &'static str {
        match self {
            Block::Header { .. } => "header",
            Block::Paragraph { .. } => "paragraph",
            Block::List { .. } => "list",
            Block::Table { .. } => "table",
            Block::Quote { .. } => "quote",
            Block::Code { .. } => "code",
            Block::Image { .. } => "image",
            Block::Unknown { .. } => "unknown",
        }
    }
}

/// `level` as an integer clamped to 1..=6; missing, zero or non-integer
/// values use the default.
fn header_level(level: Option<&Value>) -> u8 {
    match level.and_then(Value::as_u64) {
        None | Some(0) => DEFAULT_HEADER_LEVEL,
        Some(n) => u8::try_from(n).map_or(MAX_HEADER_LEVEL, |n| n.min(MAX_HEADER_LEVEL)),
    }
}

/// `data.url`, falling back to the uploader shape `data.file.url`
fn image_url(data: &Map<String, Value>) -> String {
    data.get("url")
        .and_then(Value::as_str)
        .filter(|url| !url.is_empty())
        .or_else(|| {
            data.get("file")
                .and_then(|file| file.get("url"))
                .and_then(Value::as_str)
        })
        .unwrap_or_default()
        .to_string()
}
