//! blockdoc - content normalization for stored rich text
//!
//! Stored recommendation content is HTML, plain text, or a block-based
//! structured document serialized as JSON. This library classifies such
//! strings, renders structured documents to HTML fragments, and provides a
//! lossy flat-text editing round trip. Every operation is a pure function of
//! its input and never fails on malformed content.

#![deny(unsafe_code)]
#![cfg_attr(all(not(debug_assertions), not(test)), deny(clippy::all))]
#![cfg_attr(all(not(debug_assertions), not(test)), deny(clippy::pedantic))]
#![cfg_attr(all(not(debug_assertions), not(test)), deny(missing_docs))]
// Allow some pedantic lints that are too strict for this project
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod blockdoc_config;
pub mod detector;
pub mod document_model;
pub mod editable_text;
pub mod html_renderer;
pub mod preview;
pub mod scanner;

pub use blockdoc_config::{BlockdocConfig, ConfigError, PageConfig};
pub use detector::{classify, detect, Content, ContentKind};
pub use document_model::{Block, DocumentError, ListItem, ListStyle, StructuredDocument};
pub use editable_text::{commit_edited_text, editable_text_of, to_editable_text};
pub use html_renderer::{
    escape_html, render, render_str, render_str_with, render_with, standalone_page,
    to_display_html, RenderOptions,
};
pub use preview::to_plain_preview;
pub use scanner::{scan_directory, ScanError, ScanReport};
