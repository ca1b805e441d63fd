//! Metadata fallback chains exercised through the full pipeline.

use rs_readability::{ExtractionConfig, Readability, ReadabilityData};

const BODY: &str = r#"<article><p>Shared article body for the metadata tests, with commas, clauses,
    and enough length that candidate selection always succeeds on the first pass.</p></article>"#;

fn extract(head: &str, body_extra: &str) -> ReadabilityData {
    let html = format!("<html><head>{head}</head><body>{BODY}{body_extra}</body></html>");
    Readability::new(&html, ExtractionConfig::default())
        .expect("document should parse")
        .extract_readability_data()
        .expect("extraction should succeed")
}

#[test]
fn og_title_outranks_twitter_and_plain_meta() {
    let data = extract(
        r#"<meta name="title" content="Plain Title">
           <meta name="twitter:title" content="Twitter Title">
           <meta property="og:title" content="OG Title">"#,
        "",
    );
    assert_eq!(data.title, "OG Title");
}

#[test]
fn title_element_backs_up_missing_meta() {
    let data = extract("<title>Element Title</title>", "");
    assert_eq!(data.title, "Element Title");
}

#[test]
fn description_meta_chain_then_paragraph_fallback() {
    let data = extract(r#"<meta name="description" content="Meta description text">"#, "");
    assert_eq!(data.description.as_deref(), Some("Meta description text"));

    let fallback = extract("", "");
    assert!(fallback.description.unwrap().starts_with("Shared article body"));
}

#[test]
fn author_meta_then_byline_fallback() {
    let data = extract(r#"<meta name="author" content="Meta Author">"#, "");
    assert_eq!(data.author.as_deref(), Some("Meta Author"));

    let byline = extract("", r#"<p class="byline">Casey Byline</p>"#);
    assert_eq!(byline.author.as_deref(), Some("Casey Byline"));
}

#[test]
fn date_meta_then_time_element_fallbacks() {
    let data = extract(
        r#"<meta property="article:published_time" content="2024-07-08T09:10:11Z">"#,
        "",
    );
    assert_eq!(data.date_published.as_deref(), Some("2024-07-08T09:10:11Z"));

    let datetime = extract("", r#"<time datetime="2024-07-08">July 8</time>"#);
    assert_eq!(datetime.date_published.as_deref(), Some("2024-07-08"));

    let text_only = extract("", "<time>July 9, 2024</time>");
    assert_eq!(text_only.date_published.as_deref(), Some("July 9, 2024"));
}

#[test]
fn image_meta_then_body_image_fallback() {
    let data = extract(r#"<meta property="og:image" content="https://e.x/meta.jpg">"#, "");
    assert_eq!(data.top_image.as_deref(), Some("https://e.x/meta.jpg"));

    let fallback = extract("", r#"<figure><img data-src="https://e.x/lazy.jpg"></figure>"#);
    assert_eq!(fallback.top_image.as_deref(), Some("https://e.x/lazy.jpg"));
}

#[test]
fn video_comes_only_from_og_video_url() {
    let data = extract(r#"<meta property="og:video:url" content="https://e.x/clip.mp4">"#, "");
    assert_eq!(data.top_video.as_deref(), Some("https://e.x/clip.mp4"));

    let absent = extract("", "");
    assert!(absent.top_video.is_none());
}

#[test]
fn keywords_meta_chain_handles_news_keywords() {
    let data = extract(r#"<meta name="news_keywords" content="economy, markets">"#, "");
    assert_eq!(
        data.keywords,
        Some(vec!["economy".to_string(), "markets".to_string()])
    );
}

#[test]
fn structured_data_outranks_every_meta_tag() {
    let data = extract(
        r#"<meta property="og:title" content="OG Title">
           <meta name="author" content="Meta Author">
           <script type="application/ld+json">
               {"@type": "BlogPosting", "headline": "Structured Title", "author": "Structured Author"}
           </script>"#,
        "",
    );

    assert_eq!(data.title, "Structured Title");
    assert_eq!(data.author.as_deref(), Some("Structured Author"));
}
