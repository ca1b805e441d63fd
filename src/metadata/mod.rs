//! Metadata extraction.
//!
//! Fields are resolved source by source: structured data first, then the
//! ranked meta-tag chains, then DOM heuristics. Each field is independently
//! optional; a missing source never blocks the others.

pub mod dom_fallbacks;
pub mod json_ld;
pub mod meta_tags;

use dom_query::Document;

/// Metadata gathered for one document.
///
/// `title` is always present, possibly empty. Everything else is optional.
#[derive(Debug, Clone, Default)]
pub struct DocumentMetadata {
    pub title: String,
    pub description: Option<String>,
    pub author: Option<String>,
    pub date_published: Option<String>,
    pub keywords: Option<Vec<String>>,
    pub top_image: Option<String>,
    pub top_video: Option<String>,
}

/// Extract all metadata from a document.
///
/// Reads the pre-merge document; it must run before the content pipeline
/// starts moving elements around.
#[must_use]
pub fn extract(doc: &Document) -> DocumentMetadata {
    let structured = json_ld::extract_structured(doc).unwrap_or_default();

    let title = structured
        .title
        .or_else(|| meta_tags::title(doc))
        .or_else(|| dom_fallbacks::document_title(doc))
        .unwrap_or_default();

    let description = structured
        .description
        .or_else(|| meta_tags::description(doc))
        .or_else(|| dom_fallbacks::first_long_paragraph(doc));

    let author = structured
        .author
        .or_else(|| meta_tags::author(doc))
        .or_else(|| dom_fallbacks::byline(doc));

    let date_published = structured
        .date_published
        .or_else(|| meta_tags::date(doc))
        .or_else(|| dom_fallbacks::time_date(doc));

    let keywords = structured.keywords.or_else(|| meta_tags::keywords(doc));

    let top_image = structured
        .image
        .or_else(|| meta_tags::image(doc))
        .or_else(|| dom_fallbacks::first_image(doc));

    let top_video = meta_tags::video(doc);

    DocumentMetadata { title, description, author, date_published, keywords, top_image, top_video }
}
