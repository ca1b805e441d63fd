//! Candidate scoring.
//!
//! Every block candidate gets a real-valued content score built from its tag,
//! class hints, punctuation and text mass, then discounted by link density.
//! The highest-scoring element is the article; ties keep the earliest element
//! in document order because a replacement requires a strictly greater score.

use dom_query::{Document, Selection};

use crate::dom;
use crate::options::Flags;
use crate::patterns::{CANDIDATE_SELECTOR, MIN_CANDIDATE_TEXT_LEN};

/// Ratio of descendant anchor text to total text, in [0, 1].
///
/// Defined as 0 for elements without text.
#[must_use]
pub fn link_density(sel: &Selection) -> f64 {
    let text_length = dom::text_content(sel).chars().count();
    if text_length == 0 {
        return 0.0;
    }

    let link_length: usize = sel
        .select("a")
        .iter()
        .map(|link| link.text().chars().count())
        .sum();

    link_length as f64 / text_length as f64
}

fn tag_base_score(tag: &str) -> f64 {
    match tag {
        "article" => 15.0,
        "main" => 12.0,
        "section" => 4.0,
        "p" => 5.0,
        "div" => 3.0,
        "ul" | "ol" => -3.0,
        "nav" => -6.0,
        "h1" | "h2" | "h3" | "h4" | "h5" | "h6" => -1.0,
        _ => 0.0,
    }
}

/// Compute the content score for one element.
#[must_use]
pub fn content_score(sel: &Selection, flags: &Flags) -> f64 {
    let tag = dom::tag_name(sel).unwrap_or_default().to_lowercase();
    let mut score = tag_base_score(&tag);

    if flags.weight_classes {
        let class = dom::class_name(sel).unwrap_or_default().to_lowercase();
        if class.contains("article") {
            score += 10.0;
        }
        if class.contains("comment") {
            score -= 10.0;
        }
    }

    let text = dom::text_content(sel);
    score += text.matches(',').count() as f64;

    let text_length = text.trim().chars().count();
    score += std::cmp::min(text_length / 100, 3) as f64;

    score * (1.0 - link_density(sel))
}

/// Find the best-scoring candidate with enough text.
///
/// Returns the element together with its score, or `None` when nothing
/// scored above zero.
#[must_use]
pub fn top_candidate<'a>(doc: &'a Document, flags: &Flags) -> Option<(Selection<'a>, f64)> {
    let candidates = doc.select(CANDIDATE_SELECTOR);

    let mut best: Option<Selection<'a>> = None;
    let mut best_score = 0.0_f64;

    for node in candidates.nodes() {
        let sel = Selection::from(node.clone());
        if dom::text_len(&sel) < MIN_CANDIDATE_TEXT_LEN {
            continue;
        }

        let score = content_score(&sel, flags);
        if score > best_score {
            best = Some(sel);
            best_score = score;
        }
    }

    best.map(|sel| (sel, best_score))
}
