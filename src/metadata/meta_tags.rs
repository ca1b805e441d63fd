//! Ranked meta-tag lookups.
//!
//! Each field consults an ordered selector chain; the first tag whose
//! `content` is non-empty wins. Empty strings count as absent so a bare
//! `<meta property="og:title" content="">` never shadows a usable fallback.

use dom_query::Document;

use crate::patterns::{
    AUTHOR_META, DATE_META, DESCRIPTION_META, IMAGE_META, KEYWORDS_META, TITLE_META, VIDEO_META,
};

/// Walk a selector chain and return the first non-empty `content` value.
fn first_content(doc: &Document, selectors: &[&str]) -> Option<String> {
    for selector in selectors {
        let matched = doc.select(selector);
        if let Some(content) = matched.attr("content") {
            let content = content.trim();
            if !content.is_empty() {
                return Some(content.to_string());
            }
        }
    }
    None
}

#[must_use]
pub fn title(doc: &Document) -> Option<String> {
    first_content(doc, TITLE_META)
}

#[must_use]
pub fn description(doc: &Document) -> Option<String> {
    first_content(doc, DESCRIPTION_META)
}

#[must_use]
pub fn author(doc: &Document) -> Option<String> {
    first_content(doc, AUTHOR_META)
}

#[must_use]
pub fn date(doc: &Document) -> Option<String> {
    first_content(doc, DATE_META)
}

#[must_use]
pub fn image(doc: &Document) -> Option<String> {
    first_content(doc, IMAGE_META)
}

#[must_use]
pub fn video(doc: &Document) -> Option<String> {
    first_content(doc, VIDEO_META)
}

/// Keywords come back comma-joined; split, trim and drop empties.
#[must_use]
pub fn keywords(doc: &Document) -> Option<Vec<String>> {
    let joined = first_content(doc, KEYWORDS_META)?;
    let list: Vec<String> = joined
        .split(',')
        .map(str::trim)
        .filter(|k| !k.is_empty())
        .map(str::to_string)
        .collect();

    (!list.is_empty()).then_some(list)
}
