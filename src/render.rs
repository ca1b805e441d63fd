//! Rendering and reading-time estimation.
//!
//! Serializes the merged container to HTML and plain text and derives the
//! reading-time estimate from the text.

use dom_query::Document;

use crate::patterns::{CONTENT_CONTAINER_ID, WHITESPACE_NORMALIZE};

/// Words per minute assumed for the reading-time estimate.
const WORDS_PER_MINUTE: usize = 200;

/// Outer HTML of the merged container.
#[must_use]
pub fn render_html(container_doc: &Document) -> String {
    container_doc
        .select(&format!("#{CONTENT_CONTAINER_ID}"))
        .html()
        .to_string()
}

/// Plain text of the merged container with whitespace runs collapsed.
#[must_use]
pub fn render_text(container_doc: &Document) -> String {
    let text = container_doc.select(&format!("#{CONTENT_CONTAINER_ID}")).text();
    WHITESPACE_NORMALIZE.replace_all(text.trim(), " ").to_string()
}

/// Estimated reading time in whole minutes, at least one, absent for empty
/// text. Words are runs of Unicode letters.
#[must_use]
pub fn reading_time(text: &str) -> Option<u32> {
    if text.is_empty() {
        return None;
    }

    let words = text
        .split(|c: char| !c.is_alphabetic())
        .filter(|word| !word.is_empty())
        .count();

    Some(std::cmp::max(1, words / WORDS_PER_MINUTE) as u32)
}
