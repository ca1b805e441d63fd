//! DOM fallbacks for metadata fields.
//!
//! Last-resort lookups against the document body when neither structured
//! data nor meta tags produced a value. Every helper degrades to `None`
//! instead of failing.

use dom_query::Document;

use crate::dom;
use crate::patterns::{BYLINE_SELECTOR, GENERIC_TITLES, IMAGE_SRC_ATTRS};

/// Minimum length for a paragraph to serve as a description.
const MIN_DESCRIPTION_LEN: usize = 40;

/// Trimmed text of the first element matching `selector`, if non-empty.
fn first_text(doc: &Document, selector: &str) -> Option<String> {
    let matched = doc.select(selector);
    let first = matched.iter().next()?;
    let text = first.text().trim().to_string();
    (!text.is_empty()).then_some(text)
}

/// The `<title>` element, rescued by the first `<h1>` when it is one of the
/// generic placeholders CMSes ship ("Home", "Untitled" and friends).
#[must_use]
pub fn document_title(doc: &Document) -> Option<String> {
    let title = first_text(doc, "title")?;

    if GENERIC_TITLES.contains(&title.to_lowercase().as_str()) {
        if let Some(heading) = first_text(doc, "h1") {
            return Some(heading);
        }
    }

    Some(title)
}

/// First body paragraph long enough to pass for a summary.
#[must_use]
pub fn first_long_paragraph(doc: &Document) -> Option<String> {
    for paragraph in doc.select("body p").iter() {
        let text = paragraph.text();
        let text = text.trim();
        if text.chars().count() > MIN_DESCRIPTION_LEN {
            return Some(text.to_string());
        }
    }
    None
}

/// Byline element text.
#[must_use]
pub fn byline(doc: &Document) -> Option<String> {
    first_text(doc, BYLINE_SELECTOR)
}

/// `<time datetime>` attribute first, then bare `<time>` text.
#[must_use]
pub fn time_date(doc: &Document) -> Option<String> {
    if let Some(datetime) = doc.select("time[datetime]").attr("datetime") {
        let datetime = datetime.trim();
        if !datetime.is_empty() {
            return Some(datetime.to_string());
        }
    }

    first_text(doc, "time")
}

/// First body image with a usable source, probing lazy-loading attributes
/// and finally the first token of a `data-srcset`.
#[must_use]
pub fn first_image(doc: &Document) -> Option<String> {
    for img in doc.select("body img").iter() {
        for attr in IMAGE_SRC_ATTRS {
            if let Some(src) = dom::get_attribute(&img, attr) {
                let src = src.trim();
                if !src.is_empty() {
                    return Some(src.to_string());
                }
            }
        }

        if let Some(srcset) = dom::get_attribute(&img, "data-srcset") {
            if let Some(first) = srcset.split_whitespace().next() {
                let first = first.trim_end_matches(',');
                if !first.is_empty() {
                    return Some(first.to_string());
                }
            }
        }
    }
    None
}
