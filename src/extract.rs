//! Extraction pipeline.
//!
//! [`Readability`] owns a parsed document that has already been through the
//! visibility filter and the eager pruning passes. Extraction then reads
//! metadata and comments off the pre-merge document, scores candidates,
//! merges siblings, strips noise and renders the payload. One extraction is
//! a pure function of the input HTML and the config; nothing is shared
//! between extractions.

use tracing::debug;

use crate::cleaning;
use crate::comments;
use crate::dom::{self, Document};
use crate::error::{Error, Result};
use crate::merge;
use crate::metadata;
use crate::options::ExtractionConfig;
use crate::pruning;
use crate::render;
use crate::result::ReadabilityData;
use crate::scoring;
use crate::visibility;

/// A parsed and pre-pruned document, ready for extraction.
///
/// # Example
///
/// ```rust
/// use rs_readability::{ExtractionConfig, Readability};
///
/// let html = r#"<html><head><title>T</title></head><body><article>
///     <p>A long enough paragraph of article text, with some commas, to be scored.</p>
/// </article></body></html>"#;
///
/// let readability = Readability::new(html, ExtractionConfig::default())?;
/// let data = readability.extract_readability_data()?;
/// assert!(data.text.unwrap().contains("article text"));
/// # Ok::<(), rs_readability::Error>(())
/// ```
pub struct Readability {
    document: Document,
    config: ExtractionConfig,
}

impl Readability {
    /// Parse the HTML and run the visibility, selector-pruning and
    /// short-link passes eagerly.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ParsingFailed`] when there is no document to parse
    /// (empty or whitespace-only input).
    pub fn new(html: &str, config: ExtractionConfig) -> Result<Self> {
        if html.trim().is_empty() {
            return Err(Error::ParsingFailed("empty document".to_string()));
        }

        let document = dom::parse(html);

        visibility::apply(&document);
        if config.flags.strip_unlikelies {
            pruning::apply(&document);
        }

        if config.verbose_logging {
            debug!(
                html_len = html.len(),
                strip_unlikelies = config.flags.strip_unlikelies,
                "document parsed and pruned"
            );
        }

        Ok(Self { document, config })
    }

    /// Run the remaining pipeline and produce the payload.
    ///
    /// Metadata and comments are read before any content mutation so their
    /// selectors see the document the reader would have seen.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ParsingFailed`] when no candidate element survives
    /// scoring.
    pub fn extract_readability_data(&self) -> Result<ReadabilityData> {
        // Work on a clone so repeated extractions from one handle see the
        // same document.
        let document = dom::clone_document(&self.document);

        let document_metadata = metadata::extract(&document);

        let comments = if self.config.include_comments {
            let list = comments::extract_comments(&document, &self.config);
            (!list.is_empty()).then_some(list)
        } else {
            None
        };

        // Script bodies would otherwise count as text during scoring.
        pruning::remove_scripts(&document);

        let Some((candidate, score)) = scoring::top_candidate(&document, &self.config.flags)
        else {
            return Err(Error::ParsingFailed("no content candidate found".to_string()));
        };

        if self.config.verbose_logging {
            debug!(
                tag = %dom::tag_name(&candidate).unwrap_or_default(),
                score,
                "top candidate selected"
            );
        }

        let container = merge::merge_siblings(&candidate);
        if self.config.flags.clean_conditionally {
            cleaning::strip_noise(&container);
        }

        let content = render::render_html(&container);
        let text = render::render_text(&container);
        let estimated_reading_time = render::reading_time(&text);

        if self.config.verbose_logging {
            debug!(
                text_len = text.len(),
                comment_count = comments.as_ref().map_or(0, Vec::len),
                "extraction complete"
            );
        }

        Ok(ReadabilityData {
            title: document_metadata.title,
            description: document_metadata.description,
            author: document_metadata.author,
            date_published: document_metadata.date_published,
            keywords: document_metadata.keywords,
            top_image: document_metadata.top_image,
            top_video: document_metadata.top_video,
            content: Some(content),
            text: (!text.is_empty()).then_some(text),
            estimated_reading_time,
            comments,
        })
    }

    /// The pre-pruned document, mainly useful to custom comment extractors
    /// and tests.
    #[must_use]
    pub fn document(&self) -> &Document {
        &self.document
    }
}
