//! Sibling merging.
//!
//! Articles are often fragmented across several siblings of the top
//! candidate (lead image figures, continuation blocks). The merger builds a
//! synthetic container, moves the candidate into it, and pulls in siblings
//! that carry enough text or inline media without being link farms.

use dom_query::{Document, Selection};

use crate::dom;
use crate::patterns::{CONTENT_CONTAINER_ID, INLINE_MEDIA_SELECTOR, MIN_CANDIDATE_TEXT_LEN};
use crate::scoring::link_density;

/// Maximum link density for a sibling without media to be merged.
const SIBLING_MAX_LINK_DENSITY: f64 = 0.2;

/// Wrap the top candidate in a fresh `<div id="readability-content">`
/// container and append the qualifying siblings of its original parent, in
/// document order.
#[must_use]
pub fn merge_siblings(candidate: &Selection) -> Document {
    let container_doc = dom::parse(&format!(r#"<div id="{CONTENT_CONTAINER_ID}"></div>"#));
    let container = container_doc.select(&format!("#{CONTENT_CONTAINER_ID}"));

    dom::append_child(&container, candidate);

    let parent = dom::parent(candidate);
    if parent.exists() {
        let candidate_id = candidate.nodes().first().map(|node| node.id);
        let siblings = dom::children(&parent);
        for node in siblings.nodes() {
            if Some(node.id) == candidate_id {
                continue;
            }
            let sibling = Selection::from(node.clone());
            if should_merge(&sibling) {
                dom::append_child(&container, &sibling);
            }
        }
    }

    container_doc
}

/// A sibling joins the article when it has enough text or inline media, and
/// is not dominated by links (media exempts it from the density test too).
fn should_merge(sibling: &Selection) -> bool {
    let has_media = sibling.select(INLINE_MEDIA_SELECTOR).exists();
    let long_enough = dom::text_len(sibling) >= MIN_CANDIDATE_TEXT_LEN;
    let low_density = link_density(sibling) < SIBLING_MAX_LINK_DENSITY;

    (long_enough || has_media) && (low_density || has_media)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn container_of(doc: &Document) -> Selection<'_> {
        doc.select(&format!("#{CONTENT_CONTAINER_ID}"))
    }

    #[test]
    fn wraps_candidate_in_the_synthetic_container() {
        let source = dom::parse(
            "<body><article><p>A complete article paragraph with plenty of text inside it.</p></article></body>",
        );
        let article = source.select("article");

        let merged = merge_siblings(&article);
        let container = container_of(&merged);

        assert!(container.exists());
        assert!(container.select("article").exists());
        assert!(container.text().contains("complete article paragraph"));
    }

    #[test]
    fn merges_text_rich_siblings_in_document_order() {
        let source = dom::parse(
            r#"<body><div id="wrap">
                <p id="lead">An opening paragraph that easily clears the merge length threshold.</p>
                <div id="main">The main candidate block with the most substantial text content of the page, full of sentences.</div>
                <p id="tail">A closing paragraph that also clears the merge length threshold fine.</p>
            </div></body>"#,
        );
        let main = source.select("#main");

        let merged = merge_siblings(&main);
        let container = container_of(&merged);

        let text = container.text().to_string();
        assert!(text.contains("main candidate block"));
        assert!(text.contains("opening paragraph"));
        assert!(text.contains("closing paragraph"));

        // Candidate first, then siblings in their original order.
        let children = container.children();
        let ids: Vec<_> = children
            .iter()
            .map(|child| dom::id(&child).unwrap_or_default())
            .collect();
        assert_eq!(ids, vec!["main", "lead", "tail"]);
    }

    #[test]
    fn keeps_short_media_siblings() {
        let source = dom::parse(
            r#"<body><div>
                <div id="main">Candidate text that is long enough to pass the scoring threshold easily.</div>
                <figure><img src="hero.jpg"><figcaption>Hero.</figcaption></figure>
            </div></body>"#,
        );
        let main = source.select("#main");

        let merged = merge_siblings(&main);
        assert!(container_of(&merged).select("img").exists());
    }

    #[test]
    fn rejects_link_heavy_siblings() {
        let source = dom::parse(
            r#"<body><div>
                <div id="main">Candidate text that is long enough to pass the scoring threshold easily.</div>
                <ul>
                    <li><a href="/1">Related link Alpha</a></li>
                    <li><a href="/2">Related link Bravo</a></li>
                    <li><a href="/3">Related link Charlie</a></li>
                </ul>
            </div></body>"#,
        );
        let main = source.select("#main");

        let merged = merge_siblings(&main);
        let text = container_of(&merged).text().to_string();
        assert!(!text.contains("Related link"));
    }

    #[test]
    fn rejects_short_plain_siblings() {
        let source = dom::parse(
            r#"<body><div>
                <div id="main">Candidate text that is long enough to pass the scoring threshold easily.</div>
                <p>tiny note</p>
            </div></body>"#,
        );
        let main = source.select("#main");

        let merged = merge_siblings(&main);
        assert!(!container_of(&merged).text().contains("tiny note"));
    }
}
