//! # rs-readability
//!
//! Readable-article extraction for HTML documents.
//!
//! Given raw HTML, the engine decides which subtree is the article, prunes
//! it, and produces a structured payload: cleaned HTML, plain text, document
//! metadata (title, description, author, date, keywords, primary image and
//! video), an estimated reading time, and optionally reader comments.
//!
//! ## Quick start
//!
//! ```rust
//! use rs_readability::{ExtractionConfig, Readability};
//!
//! let html = r#"<html><head><title>My Article</title></head><body>
//! <article><p>The main body of the article, long enough to be recognized as content,
//! with clauses, commas, and ordinary prose.</p></article></body></html>"#;
//!
//! let readability = Readability::new(html, ExtractionConfig::default())?;
//! let data = readability.extract_readability_data()?;
//!
//! assert_eq!(data.title, "My Article");
//! assert!(data.content.unwrap().starts_with(r#"<div id="readability-content">"#));
//! # Ok::<(), rs_readability::Error>(())
//! ```
//!
//! ## Pipeline
//!
//! Construction parses the document and eagerly removes what a reader would
//! never see: hidden elements, chrome roles, known non-content selectors and
//! short navigation anchors. Extraction then reads metadata and comments off
//! the pre-merge document, scores every block candidate, wraps the winner in
//! a synthetic `<div id="readability-content">` container together with its
//! qualifying siblings, strips share widgets and recommendation rails, and
//! renders the result.
//!
//! ## Fetching by URL
//!
//! ```rust,no_run
//! use rs_readability::{ExtractionConfig, Readability};
//!
//! # async fn run() -> Result<(), rs_readability::Error> {
//! let data = Readability::from_url("https://example.com/article", ExtractionConfig::default()).await?;
//! println!("{}", data.title);
//! # Ok(())
//! # }
//! ```

mod cleaning;
mod comments;
mod error;
mod extract;
mod fetch;
mod merge;
mod options;
mod patterns;
mod pruning;
mod render;
mod result;
mod scoring;
mod visibility;

/// DOM adapter over the HTML parser.
pub mod dom;

/// Metadata extraction (JSON-LD, meta tags, DOM fallbacks).
pub mod metadata;

// Public API - re-exports
pub use error::{Error, Result};
pub use extract::Readability;
pub use options::{CommentExtractorFn, ExtractionConfig, Flags};
pub use result::{Comment, ReadabilityData};
