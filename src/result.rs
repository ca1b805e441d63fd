//! Output payload types.
//!
//! This module defines the structured result of an extraction: the cleaned
//! article content, its plain-text rendering, document metadata, and the
//! optional reader comments.

use serde::{Deserialize, Serialize};

/// A single reader comment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    /// Comment author, defaults to "Anonymous" when no author element is found.
    pub author: String,

    /// Publication date as found in the markup (`datetime` attribute), possibly empty.
    pub date: String,

    /// Comment body as plain text.
    pub content: String,
}

/// Result of extracting readable content from an HTML document.
///
/// Every metadata field is independently optional. `title` is always present
/// but may be empty when the document carries no usable title at all.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReadabilityData {
    /// Article title.
    pub title: String,

    /// Article description or summary.
    pub description: Option<String>,

    /// Author name.
    pub author: Option<String>,

    /// Publication date, passed through as found (ISO-ish string).
    pub date_published: Option<String>,

    /// Article keywords, trimmed and non-empty.
    pub keywords: Option<Vec<String>>,

    /// Primary image URL.
    pub top_image: Option<String>,

    /// Primary video URL.
    pub top_video: Option<String>,

    /// Cleaned article content as HTML, wrapped in `<div id="readability-content">`.
    pub content: Option<String>,

    /// Plain-text rendering of `content`.
    pub text: Option<String>,

    /// Estimated reading time in minutes, present whenever `text` is non-empty.
    pub estimated_reading_time: Option<u32>,

    /// Reader comments, deduplicated and bounded to 50 entries.
    pub comments: Option<Vec<Comment>>,
}
