//! Malformed and adversarial input should degrade, never panic.

use rs_readability::{Error, ExtractionConfig, Readability};

fn extract_ok(html: &str) -> bool {
    match Readability::new(html, ExtractionConfig::default()) {
        Ok(readability) => readability.extract_readability_data().is_ok(),
        Err(_) => false,
    }
}

#[test]
fn unclosed_tags_still_extract() {
    let html = r#"<html><body>
        <article><p>Paragraph with an unclosed emphasis <em>tag that runs on, with commas, and
        enough length for candidate selection to succeed anyway.
        <p>A second paragraph that the parser has to recover into place.
    </body>"#;

    assert!(extract_ok(html));
}

#[test]
fn broken_json_ld_degrades_to_other_sources() {
    let html = r#"<html><head>
        <title>Recovered Title</title>
        <script type="application/ld+json">{"@type": "Article", "headline": </script>
    </head><body>
        <article><p>Body text long enough to extract, with commas, clauses, and the usual texture
        of real article copy found in production pages.</p></article>
    </body></html>"#;

    let data = Readability::new(html, ExtractionConfig::default())
        .unwrap()
        .extract_readability_data()
        .unwrap();

    assert_eq!(data.title, "Recovered Title");
}

#[test]
fn deeply_nested_json_ld_is_bounded() {
    // 100 levels of nesting, past the recursion cap; must neither find an
    // article down there nor blow the stack.
    let mut json = String::new();
    for _ in 0..100 {
        json.push_str(r#"{"wrapper":"#);
    }
    json.push_str(r#"{"@type":"Article","headline":"Too Deep"}"#);
    for _ in 0..100 {
        json.push('}');
    }

    let html = format!(
        r#"<html><head><script type="application/ld+json">{json}</script></head><body>
            <article><p>Surface level article text, with commas, clauses, and plenty of length for
            the scorer to pick it without any help from structured data.</p></article>
        </body></html>"#
    );

    let data = Readability::new(&html, ExtractionConfig::default())
        .unwrap()
        .extract_readability_data()
        .unwrap();

    assert_ne!(data.title, "Too Deep");
}

#[test]
fn script_bodies_do_not_leak_into_text() {
    let html = r#"<html><body>
        <article>
            <p>Visible copy with commas, clauses, and length enough to win candidate selection.</p>
            <script>var SCRIPT_MARKER = "should never appear in output";</script>
            <style>.hidden-rule { color: red; }</style>
        </article>
    </body></html>"#;

    let data = Readability::new(html, ExtractionConfig::default())
        .unwrap()
        .extract_readability_data()
        .unwrap();

    let text = data.text.unwrap();
    assert!(!text.contains("SCRIPT_MARKER"));
    assert!(!text.contains("hidden-rule"));
}

#[test]
fn meta_tags_without_content_are_ignored() {
    let html = r#"<html><head>
        <meta property="og:title">
        <meta name="keywords" content="">
        <title>Working Title</title>
    </head><body>
        <article><p>Enough article prose for extraction to succeed, with commas, and one further
        clause so the scorer has a clear winner on the page.</p></article>
    </body></html>"#;

    let data = Readability::new(html, ExtractionConfig::default())
        .unwrap()
        .extract_readability_data()
        .unwrap();

    assert_eq!(data.title, "Working Title");
    assert!(data.keywords.is_none());
}

#[test]
fn whitespace_only_input_is_a_parse_error() {
    assert!(matches!(
        Readability::new(" \n\t ", ExtractionConfig::default()),
        Err(Error::ParsingFailed(_))
    ));
}

#[test]
fn text_only_soup_without_blocks_fails_cleanly() {
    let html = "just some loose text with no markup at all around it";
    match Readability::new(html, ExtractionConfig::default()) {
        Ok(readability) => {
            // Parsers wrap loose text in a body; without a block candidate
            // the extraction must fail, not panic.
            let _ = readability.extract_readability_data();
        }
        Err(_) => {}
    }
}

#[test]
fn enormous_attribute_soup_is_tolerated() {
    let mut html = String::from("<html><body><article><p ");
    for i in 0..200 {
        html.push_str(&format!("data-attr-{i}=\"value-{i}\" "));
    }
    html.push_str(
        ">Attribute heavy paragraph, with commas, clauses, and enough words for selection.</p></article></body></html>",
    );

    assert!(extract_ok(&html));
}
