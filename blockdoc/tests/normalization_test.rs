use blockdoc::{
    commit_edited_text, detect, render, render_str, render_str_with, to_display_html,
    to_editable_text, Block, ContentKind, RenderOptions, StructuredDocument,
};
use std::path::PathBuf;

fn fixture(name: &str) -> String {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name);
    std::fs::read_to_string(&path).expect("Should be able to read fixture")
}

#[test]
fn test_fixture_kinds() {
    assert_eq!(
        detect(&fixture("company_analysis.json")),
        ContentKind::StructuredDocument
    );
    assert_eq!(detect(&fixture("site_map.html")), ContentKind::Html);
    assert_eq!(detect(&fixture("suggestions.txt")), ContentKind::PlainText);
}

#[test]
fn test_render_every_block_kind() {
    let html = render_str(&fixture("company_analysis.json"));

    assert_eq!(
        html,
        concat!(
            "<h1>Company analysis</h1>",
            "<p>Acme sells industrial fasteners in three regions.</p>",
            "<ul><li>Strong brand</li><li>Slow website</li></ul>",
            "<table><tr><th>Metric</th><th>Score</th></tr><tr><td>LCP</td><td>4.1s</td></tr></table>",
            "<blockquote>We need more leads.<cite>CEO</cite></blockquote>",
            "<pre><code>&lt;link rel=&quot;preload&quot;&gt;</code></pre>",
            "<figure><img src=\"https://cdn.example.com/traffic.png\" alt=\"Traffic\"/>",
            "<figcaption>Traffic</figcaption></figure>",
        )
    );
}

#[test]
fn test_render_verbatim_code_block() {
    let html = render_str_with(
        &fixture("company_analysis.json"),
        &RenderOptions::verbatim(),
    );
    assert!(html.contains("<pre><code><link rel=\"preload\"></code></pre>"));
}

#[test]
fn test_render_is_deterministic() {
    let raw = fixture("company_analysis.json");
    let doc = StructuredDocument::parse(&raw).unwrap();
    assert_eq!(render(&doc), render(&doc));
    assert_eq!(render_str(&raw), render_str(&raw));
}

#[test]
fn test_render_tolerates_broken_blocks() {
    let raw = r#"{"blocks":[
        {"data":{"text":"no type"}},
        {"type":"paragraph"},
        42,
        null,
        {"type":"paragraph","data":{"text":"kept"}}
    ]}"#;
    assert_eq!(render_str(raw), "<p>kept</p>");
}

#[test]
fn test_detect_is_total() {
    let samples = [
        "",
        " ",
        "{",
        "}",
        "{}",
        "[]",
        "{\"blocks\":null}",
        "{\"blocks\":[null]}",
        "<",
        ">",
        "<>",
        "\u{0}\u{1}\u{fffd}",
        "{\"blocks\":[{\"type\":{\"nested\":[[[[]]]]}}]}",
    ];
    for sample in samples {
        let kind = detect(sample);
        assert!(matches!(
            kind,
            ContentKind::Empty
                | ContentKind::Html
                | ContentKind::StructuredDocument
                | ContentKind::PlainText
        ));
        // Every kind also survives the rest of the pipeline
        let _ = render_str(sample);
        let _ = to_editable_text(sample);
        let _ = commit_edited_text(sample, "x");
    }
}

#[test]
fn test_flat_round_trip_is_identity() {
    for content in [
        fixture("site_map.html"),
        fixture("suggestions.txt"),
        String::new(),
    ] {
        assert_eq!(to_editable_text(&content), content);
        assert_eq!(commit_edited_text(&content, "replacement"), "replacement");
    }
}

#[test]
fn test_structured_round_trip_collapses_to_one_paragraph() {
    let docs = [
        fixture("company_analysis.json"),
        r#"{"blocks":[]}"#.to_string(),
        r#"{"blocks":[{"type":"paragraph","data":{"text":"only"}}]}"#.to_string(),
    ];

    for raw in docs {
        let edited = to_editable_text(&raw);
        let committed = commit_edited_text(&raw, &edited);

        let doc = StructuredDocument::parse(&committed).unwrap();
        assert_eq!(doc.blocks, vec![Block::paragraph(edited)]);
    }
}

#[test]
fn test_editable_text_of_fixture() {
    assert_eq!(
        to_editable_text(&fixture("company_analysis.json")),
        "Company analysis\n\n\nAcme sells industrial fasteners in three regions.\n\nWe need more leads."
    );
}

#[test]
fn test_commit_keeps_metadata_fields() {
    let committed = commit_edited_text(&fixture("company_analysis.json"), "Rewritten");
    let value: serde_json::Value = serde_json::from_str(&committed).unwrap();

    assert_eq!(value["time"], 1718035200000_u64);
    assert_eq!(value["version"], "2.28.2");
    assert_eq!(value["blocks"].as_array().unwrap().len(), 1);
    assert_eq!(value["blocks"][0]["data"]["text"], "Rewritten");
}

#[test]
fn test_scenario_edit_flow() {
    let original = r#"{"blocks":[{"type":"paragraph","data":{"text":"A"}},{"type":"header","data":{"text":"B","level":2}}]}"#;

    let editable = to_editable_text(original);
    let a = editable.find('A').unwrap();
    let b = editable.find('B').unwrap();
    assert!(a < b);

    let committed = commit_edited_text(original, "C");
    assert_eq!(
        StructuredDocument::parse(&committed).unwrap().blocks,
        vec![Block::paragraph("C")]
    );
    assert_eq!(to_display_html(&committed, &RenderOptions::default()), "<p>C</p>");
}

#[test]
fn test_scan_fixtures() {
    let dir = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures");
    let report = blockdoc::scan_directory(&dir).unwrap();

    assert_eq!(report.files, 3);
    assert_eq!(report.count(ContentKind::StructuredDocument), 1);
    assert_eq!(report.count(ContentKind::Html), 1);
    assert_eq!(report.count(ContentKind::PlainText), 1);
    assert_eq!(report.block_kinds.get("unknown"), Some(&1));
    assert!(report.unreadable.is_empty());
}
