//! One-line text previews of stored content for list views

use crate::detector::{classify, Content};
use crate::editable_text::editable_text_of;
use regex::Regex;
use std::sync::LazyLock;

static TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]*>").expect("valid regex"));
static WHITESPACE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").expect("valid regex"));

const ELLIPSIS: char = '…';

/// Single-line preview of at most `max_chars` characters
///
/// Markup is stripped, whitespace collapsed, and text longer than
/// `max_chars` is cut on a character boundary and ends in `…`.
pub fn to_plain_preview(content: &str, max_chars: usize) -> String {
    let text = match classify(content) {
        Content::Empty => return String::new(),
        Content::Structured(doc) => strip_tags(&editable_text_of(&doc)),
        Content::Html(html) => strip_tags(html),
        Content::PlainText(text) => text.to_string(),
    };

    let collapsed = WHITESPACE_RE.replace_all(text.trim(), " ");
    truncate_chars(&collapsed, max_chars)
}

/// Remove tags and decode the common entities
fn strip_tags(html: &str) -> String {
    TAG_RE
        .replace_all(html, " ")
        .replace("&nbsp;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
}

fn truncate_chars(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    if max_chars == 0 {
        return String::new();
    }

    let mut truncated: String = text.chars().take(max_chars - 1).collect();
    truncated.truncate(truncated.trim_end().len());
    truncated.push(ELLIPSIS);
    truncated
}
