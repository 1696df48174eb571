//! HTML rendering for structured documents
//!
//! This module turns a StructuredDocument into an HTML fragment:
//! - One element per block, concatenated in order with no separators
//! - Unknown kinds degrade to a paragraph of their text, or nothing
//! - Text is HTML-escaped unless [`RenderOptions::escape_text`] is off
//!
//! Escaping is on by default. Stored content has historically been rendered
//! verbatim, so `RenderOptions::verbatim()` reproduces that output exactly for
//! callers that still depend on inline HTML inside block text.

use crate::detector::{classify, trim_content, Content};
use crate::document_model::{Block, ListItem, ListStyle, StructuredDocument};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// Alt text for images without a caption
pub const DEFAULT_IMAGE_ALT: &str = "Image";

/// Options controlling HTML output
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    /// Escape `& < > " '` in block text and attribute values
    pub escape_text: bool,

    /// Alt text used for images that have no caption
    pub image_alt_fallback: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            escape_text: true,
            image_alt_fallback: DEFAULT_IMAGE_ALT.to_string(),
        }
    }
}

impl RenderOptions {
    /// Insert all text exactly as stored (no escaping)
    pub fn verbatim() -> Self {
        Self {
            escape_text: false,
            ..Self::default()
        }
    }

    fn text<'a>(&self, text: &'a str) -> Cow<'a, str> {
        if self.escape_text {
            Cow::Owned(escape_html(text))
        } else {
            Cow::Borrowed(text)
        }
    }
}

/// Render a structured document with default (escaping) options
pub fn render(doc: &StructuredDocument) -> String {
    render_with(doc, &RenderOptions::default())
}

/// Render a structured document to an HTML fragment
///
/// # Parameters
/// * `doc` - The document to render
/// * `options` - Escaping and fallback settings
///
/// # Returns
/// * `String` - The concatenated HTML of every block, in order
pub fn render_with(doc: &StructuredDocument, options: &RenderOptions) -> String {
    let mut output = String::new();
    for block in &doc.blocks {
        write_block(&mut output, block, options);
    }
    output
}

/// Render a serialized document; anything that isn't one renders as `""`
pub fn render_str(raw: &str) -> String {
    render_str_with(raw, &RenderOptions::default())
}

/// [`render_str`] with explicit options
pub fn render_str_with(raw: &str, options: &RenderOptions) -> String {
    match StructuredDocument::parse(trim_content(raw)) {
        Ok(doc) => render_with(&doc, options),
        Err(e) => {
            log::debug!("Not rendering content that is not a structured document: {}", e);
            String::new()
        }
    }
}

/// HTML suitable for a read-only display surface, whatever the content kind
///
/// Structured documents are rendered, HTML passes through unchanged, and
/// plain text becomes paragraphs (blank lines split paragraphs, single
/// newlines become `<br>`).
pub fn to_display_html(content: &str, options: &RenderOptions) -> String {
    match classify(content) {
        Content::Empty => String::new(),
        Content::Html(html) => html.to_string(),
        Content::Structured(doc) => render_with(&doc, options),
        Content::PlainText(text) => plain_text_to_html(text, options),
    }
}

/// Write a single block to the output
fn write_block(output: &mut String, block: &Block, options: &RenderOptions) {
    match block {
        Block::Header { text, level } => {
            output.push_str(&format!(
                "<h{}>{}</h{}>",
                level,
                options.text(text),
                level
            ));
        }

        Block::Paragraph { text } => {
            output.push_str(&format!("<p>{}</p>", options.text(text)));
        }

        Block::List { style, items } => {
            write_list(output, *style, items, options);
        }

        Block::Table {
            content,
            with_headings,
        } => {
            write_table(output, content, *with_headings, options);
        }

        Block::Quote { text, caption } => {
            output.push_str("<blockquote>");
            output.push_str(&options.text(text));
            if let Some(caption) = caption {
                output.push_str(&format!("<cite>{}</cite>", options.text(caption)));
            }
            output.push_str("</blockquote>");
        }

        Block::Code { code } => {
            output.push_str(&format!("<pre><code>{}</code></pre>", options.text(code)));
        }

        Block::Image { url, caption } => {
            write_image(output, url, caption.as_deref(), options);
        }

        Block::Unknown { kind: None, .. } => {}

        Block::Unknown {
            kind: Some(kind),
            text,
        } => match text {
            Some(text) => output.push_str(&format!("<p>{}</p>", options.text(text))),
            None => log::debug!("Skipping block of unsupported kind '{}'", kind),
        },
    }
}

/// Write a list, recursing into nested items
fn write_list(output: &mut String, style: ListStyle, items: &[ListItem], options: &RenderOptions) {
    let tag = match style {
        ListStyle::Ordered => "ol",
        ListStyle::Unordered => "ul",
    };

    output.push_str(&format!("<{}>", tag));
    for item in items {
        output.push_str("<li>");
        output.push_str(&options.text(&item.content));
        if !item.children.is_empty() {
            write_list(output, style, &item.children, options);
        }
        output.push_str("</li>");
    }
    output.push_str(&format!("</{}>", tag));
}

/// Write a table; the first row uses `<th>` cells when `with_headings` is set
fn write_table(
    output: &mut String,
    content: &[Vec<String>],
    with_headings: bool,
    options: &RenderOptions,
) {
    output.push_str("<table>");
    for (row_index, row) in content.iter().enumerate() {
        let cell_tag = if with_headings && row_index == 0 {
            "th"
        } else {
            "td"
        };
        output.push_str("<tr>");
        for cell in row {
            output.push_str(&format!(
                "<{}>{}</{}>",
                cell_tag,
                options.text(cell),
                cell_tag
            ));
        }
        output.push_str("</tr>");
    }
    output.push_str("</table>");
}

/// Write an image block as a figure
fn write_image(output: &mut String, url: &str, caption: Option<&str>, options: &RenderOptions) {
    let alt = caption.unwrap_or(&options.image_alt_fallback);
    output.push_str(&format!(
        "<figure><img src=\"{}\" alt=\"{}\"/>",
        options.text(url),
        options.text(alt)
    ));
    if let Some(caption) = caption {
        output.push_str(&format!("<figcaption>{}</figcaption>", options.text(caption)));
    }
    output.push_str("</figure>");
}

/// Plain text as `<p>` paragraphs with `<br>` line breaks
fn plain_text_to_html(text: &str, options: &RenderOptions) -> String {
    let normalized = text.replace("\r\n", "\n");
    normalized
        .split("\n\n")
        .map(str::trim)
        .filter(|paragraph| !paragraph.is_empty())
        .map(|paragraph| {
            let lines: Vec<Cow<'_, str>> = paragraph.lines().map(|l| options.text(l)).collect();
            format!("<p>{}</p>", lines.join("<br>"))
        })
        .collect()
}

/// Escape HTML special characters
pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Wrap a rendered fragment in a complete HTML page with embedded CSS
pub fn standalone_page(fragment: &str, title: &str) -> String {
    let mut output = String::new();
    output.push_str("<!DOCTYPE html>\n");
    output.push_str("<html lang=\"en\">\n");
    output.push_str("<head>\n");
    output.push_str("<meta charset=\"UTF-8\">\n");
    output.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n");
    output.push_str(&format!("<title>{}</title>\n", escape_html(title)));
    output.push_str("<style>\n");
    output.push_str(CSS_STYLES);
    output.push_str("</style>\n");
    output.push_str("</head>\n");
    output.push_str("<body>\n");
    output.push_str("<div class=\"container\">\n");
    output.push_str(fragment);
    output.push('\n');
    output.push_str("</div>\n");
    output.push_str("</body>\n");
    output.push_str("</html>\n");
    output
}

/// Page styles for standalone output
const CSS_STYLES: &str = r#"
body { margin: 0; background: #fafafa; color: #222; font: 16px/1.55 system-ui, sans-serif; }
.container { max-width: 46rem; margin: 2rem auto; padding: 2rem 2.5rem; background: #fff; }
h1, h2, h3, h4, h5, h6 { line-height: 1.25; margin: 1.6em 0 0.5em; }
p, ul, ol, pre, table { margin: 0 0 1em; }
ul, ol { padding-left: 1.5em; }
li > ul, li > ol { margin: 0.25em 0 0; }
pre { padding: 0.75em 1em; background: #f2f2f2; overflow-x: auto; }
code { font: 0.9em ui-monospace, monospace; }
blockquote { margin: 1em 0; padding: 0 1em; border-left: 3px solid #ccc; }
blockquote cite { display: block; font-size: 0.875em; color: #666; }
table { border-collapse: collapse; }
th, td { padding: 0.4em 0.75em; border: 1px solid #ddd; text-align: left; }
th { background: #f2f2f2; }
figure { margin: 1.5em 0; }
figure img { display: block; max-width: 100%; }
figcaption { font-size: 0.875em; color: #666; }
@media print { body { background: none; } .container { margin: 0; padding: 0; } }
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("<div>"), "&lt;div&gt;");
        assert_eq!(escape_html("a & b"), "a &amp; b");
        assert_eq!(escape_html("\"quoted\""), "&quot;quoted&quot;");
    }

    #[test]
    fn test_render_header() {
        let raw = r#"{"blocks":[{"type":"header","data":{"text":"Hello","level":1}}]}"#;
        assert_eq!(render_str(raw), "<h1>Hello</h1>");
    }

    #[test]
    fn test_render_ordered_list() {
        let raw = r#"{"blocks":[{"type":"list","data":{"style":"ordered","items":["a","b"]}}]}"#;
        assert_eq!(render_str(raw), "<ol><li>a</li><li>b</li></ol>");
    }

    #[test]
    fn test_render_nested_unordered_list() {
        let raw = r#"{"blocks":[{"type":"list","data":{"items":[{"content":"a","items":["b"]}]}}]}"#;
        assert_eq!(render_str(raw), "<ul><li>a<ul><li>b</li></ul></li></ul>");
    }

    #[test]
    fn test_render_quote_with_caption() {
        let raw = r#"{"blocks":[{"type":"quote","data":{"text":"Q","caption":"Author"}}]}"#;
        assert_eq!(render_str(raw), "<blockquote>Q<cite>Author</cite></blockquote>");
    }

    #[test]
    fn test_render_quote_without_caption() {
        let raw = r#"{"blocks":[{"type":"quote","data":{"text":"Q","caption":""}}]}"#;
        assert_eq!(render_str(raw), "<blockquote>Q</blockquote>");
    }

    #[test]
    fn test_render_table_with_headings() {
        let raw = r#"{"blocks":[{"type":"table","data":{"withHeadings":true,"content":[["A","B"],["1","2"]]}}]}"#;
        assert_eq!(
            render_str(raw),
            "<table><tr><th>A</th><th>B</th></tr><tr><td>1</td><td>2</td></tr></table>"
        );
    }

    #[test]
    fn test_render_table_without_headings() {
        let raw = r#"{"blocks":[{"type":"table","data":{"content":[["A"]]}}]}"#;
        assert_eq!(render_str(raw), "<table><tr><td>A</td></tr></table>");
    }

    #[test]
    fn test_render_code() {
        let raw = r#"{"blocks":[{"type":"code","data":{"code":"let x = 1;"}}]}"#;
        assert_eq!(render_str(raw), "<pre><code>let x = 1;</code></pre>");
    }

    #[test]
    fn test_render_image() {
        let raw = r#"{"blocks":[{"type":"image","data":{"url":"a.png","caption":"Chart"}}]}"#;
        assert_eq!(
            render_str(raw),
            "<figure><img src=\"a.png\" alt=\"Chart\"/><figcaption>Chart</figcaption></figure>"
        );

        let raw = r#"{"blocks":[{"type":"image","data":{"file":{"url":"b.png"}}}]}"#;
        assert_eq!(
            render_str(raw),
            "<figure><img src=\"b.png\" alt=\"Image\"/></figure>"
        );
    }

    #[test]
    fn test_render_unknown_kind() {
        let raw = r#"{"blocks":[{"type":"callout","data":{"text":"Note"}},{"type":"delimiter","data":{}}]}"#;
        assert_eq!(render_str(raw), "<p>Note</p>");
    }

    #[test]
    fn test_render_untagged_block_is_empty() {
        let raw = r#"{"blocks":[{"data":{"text":"orphan note"}},{"type":"paragraph","data":{"text":"A"}}]}"#;
        assert_eq!(render_str(raw), "<p>A</p>");
    }

    #[test]
    fn test_render_empty_url_uses_file_url() {
        let raw = r#"{"blocks":[{"type":"image","data":{"url":"","file":{"url":"b.png"}}}]}"#;
        assert_eq!(
            render_str(raw),
            "<figure><img src=\"b.png\" alt=\"Image\"/></figure>"
        );
    }

    #[test]
    fn test_render_with_byte_order_mark() {
        let raw = "\u{feff}{\"blocks\":[{\"type\":\"paragraph\",\"data\":{\"text\":\"A\"}}]}";
        assert_eq!(render_str(raw), "<p>A</p>");
    }

    #[test]
    fn test_render_concatenates_in_order() {
        let raw = r#"{"blocks":[{"type":"paragraph","data":{"text":"A"}},{"type":"header","data":{"text":"B"}}]}"#;
        assert_eq!(render_str(raw), "<p>A</p><h2>B</h2>");
    }

    #[test]
    fn test_render_invalid_document_is_empty() {
        assert_eq!(render_str(r#"{"time": 1}"#), "");
        assert_eq!(render_str("<p>hi</p>"), "");
        assert_eq!(render_str(""), "");
    }

    #[test]
    fn test_render_escapes_by_default() {
        let raw = r#"{"blocks":[{"type":"paragraph","data":{"text":"<b>bold</b> & co"}}]}"#;
        assert_eq!(render_str(raw), "<p>&lt;b&gt;bold&lt;/b&gt; &amp; co</p>");
    }

    #[test]
    fn test_render_verbatim_matches_stored_markup() {
        let raw = r#"{"blocks":[{"type":"paragraph","data":{"text":"<b>bold</b> & co"}},{"type":"image","data":{"url":"x\" onerror=\"y"}}]}"#;
        assert_eq!(
            render_str_with(raw, &RenderOptions::verbatim()),
            "<p><b>bold</b> & co</p><figure><img src=\"x\" onerror=\"y\" alt=\"Image\"/></figure>"
        );
    }

    #[test]
    fn test_custom_image_alt_fallback() {
        let doc = StructuredDocument::new(vec![Block::Image {
            url: "a.png".to_string(),
            caption: None,
        }]);
        let options = RenderOptions {
            image_alt_fallback: "Bild".to_string(),
            ..RenderOptions::default()
        };
        assert_eq!(
            render_with(&doc, &options),
            "<figure><img src=\"a.png\" alt=\"Bild\"/></figure>"
        );
    }

    #[test]
    fn test_display_html_plain_text() {
        let options = RenderOptions::default();
        assert_eq!(
            to_display_html("one\ntwo\n\nthree & four", &options),
            "<p>one<br>two</p><p>three &amp; four</p>"
        );
    }

    #[test]
    fn test_display_html_passes_html_through() {
        let options = RenderOptions::default();
        assert_eq!(to_display_html("<p>hi</p>", &options), "<p>hi</p>");
        assert_eq!(to_display_html("", &options), "");
    }

    #[test]
    fn test_standalone_page_wraps_fragment() {
        let page = standalone_page("<p>x</p>", "Q3 <Proposal>");
        assert!(page.starts_with("<!DOCTYPE html>"));
        assert!(page.contains("<title>Q3 &lt;Proposal&gt;</title>"));
        assert!(page.contains("<p>x</p>"));
        assert!(page.contains("<style>\n"));
        assert!(page.contains("figcaption {"));
        assert!(page.ends_with("</html>\n"));
    }
}
