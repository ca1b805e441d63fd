//! Comment extraction.
//!
//! Selects comment-shaped nodes from the pre-merge document, builds
//! `(author, date, content)` records, deduplicates them and caps the result.
//! A custom extractor supplied through the config replaces the selection
//! logic but still goes through the same normalization.

use std::collections::HashSet;

use dom_query::{Document, Selection};

use crate::options::ExtractionConfig;
use crate::patterns::{
    COMMENT_AUTHOR_SELECTOR, COMMENT_CONTENT_SELECTOR, COMMENT_DATE_SELECTOR,
    COMMENT_FALLBACK_SELECTOR, COMMENT_PRIMARY_SELECTORS, COMMENT_SECONDARY_SELECTORS,
    MAX_COMMENTS,
};
use crate::result::Comment;

/// Minimum content length for a node to count as a comment.
const MIN_COMMENT_LEN: usize = 20;

/// Fallback author name when no author element is found.
const ANONYMOUS: &str = "Anonymous";

/// Extract comments from the document.
pub fn extract_comments(doc: &Document, config: &ExtractionConfig) -> Vec<Comment> {
    let raw = match config.comment_extractor {
        Some(custom) => custom(doc),
        None => builtin_extract(doc),
    };

    normalize(raw)
}

fn builtin_extract(doc: &Document) -> Vec<Comment> {
    let primary = COMMENT_PRIMARY_SELECTORS.join(", ");
    let secondary = COMMENT_SECONDARY_SELECTORS.join(", ");

    let mut selected = doc.select(&primary);
    if selected.is_empty() {
        selected = doc.select(&secondary);
    }
    if selected.is_empty() {
        selected = doc.select(COMMENT_FALLBACK_SELECTOR);
    }

    let mut comments = Vec::new();
    for node in selected.nodes() {
        let element = Selection::from(node.clone());

        let Some(content) = comment_content(&element) else {
            continue;
        };

        comments.push(Comment {
            author: comment_author(&element),
            date: comment_date(&element),
            content,
        });
    }

    comments
}

/// Concatenated text of the content-bearing descendants, or `None` when the
/// result is too short to be a real comment.
fn comment_content(element: &Selection) -> Option<String> {
    let parts: Vec<String> = element
        .select(COMMENT_CONTENT_SELECTOR)
        .iter()
        .map(|part| part.text().trim().to_string())
        .filter(|part| !part.is_empty())
        .collect();

    let content = parts.join(" ");
    let content = content.trim().to_string();
    (content.chars().count() >= MIN_COMMENT_LEN).then_some(content)
}

fn comment_author(element: &Selection) -> String {
    element
        .select(COMMENT_AUTHOR_SELECTOR)
        .iter()
        .next()
        .map(|author| author.text().trim().to_string())
        .filter(|author| !author.is_empty())
        .unwrap_or_else(|| ANONYMOUS.to_string())
}

/// The `datetime` attribute of the first date-shaped descendant. A match
/// without the attribute yields an empty date, matching the tolerance the
/// rest of the metadata extraction shows for missing values.
fn comment_date(element: &Selection) -> String {
    element
        .select(COMMENT_DATE_SELECTOR)
        .attr("datetime")
        .map(|datetime| datetime.trim().to_string())
        .unwrap_or_default()
}

/// Deduplicate on `(author, date, content)`, default empty authors, and cap
/// the list. Applies to built-in and custom extractor output alike.
fn normalize(raw: Vec<Comment>) -> Vec<Comment> {
    let mut seen = HashSet::new();
    let mut comments = Vec::new();

    for mut comment in raw {
        if comment.author.trim().is_empty() {
            comment.author = ANONYMOUS.to_string();
        }

        let key = format!("{}|{}|{}", comment.author, comment.date, comment.content);
        if !seen.insert(key) {
            continue;
        }

        comments.push(comment);
        if comments.len() == MAX_COMMENTS {
            break;
        }
    }

    comments
}
