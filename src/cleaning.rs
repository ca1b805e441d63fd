//! Post-merge noise stripping.
//!
//! Even a well-chosen candidate drags share bars, "Recommended" rails and
//! advertising slots along with it. Three passes remove them from the merged
//! container: share/comment widgets matched by class, id or label; link-heavy
//! utility blocks; and bare noise-marker headings together with the
//! link-heavy list that tends to follow them.
//!
//! Each pass snapshots its selector result and walks it in reverse document
//! order, so removing an element never invalidates the remaining walk.

use dom_query::{Document, Selection};

use crate::dom;
use crate::patterns::{
    AD_LABELS, CONTENT_CONTAINER_ID, NOISE_MARKER_LABELS, NOISE_MARKER_SELECTOR,
    NOISE_SIBLING_TAGS, RELATED_PHRASES, SHARE_CLASS, UTILITY_BLOCK_SELECTOR,
};
use crate::scoring::link_density;

/// Link density above which a utility block is treated as navigation.
const UTILITY_MAX_DENSITY: f64 = 0.6;

/// Link density above which a recommendation-phrase block is removed.
const RELATED_MAX_DENSITY: f64 = 0.3;

/// Link density above which a list following a noise marker is removed.
const MARKER_SIBLING_DENSITY: f64 = 0.4;

/// Strip share widgets, utility blocks and noise markers from the merged
/// container document.
pub fn strip_noise(container_doc: &Document) {
    let root_id = container_doc
        .select(&format!("#{CONTENT_CONTAINER_ID}"))
        .nodes()
        .first()
        .map(|node| node.id);

    remove_share_widgets(container_doc, root_id);
    remove_utility_blocks(container_doc, root_id);
    remove_noise_markers(container_doc, root_id);
}

fn remove_share_widgets(doc: &Document, root_id: Option<dom_query::NodeId>) {
    let matched = doc.select("*");
    let nodes = matched.nodes().to_vec();
    for node in nodes.into_iter().rev() {
        if Some(node.id) == root_id {
            continue;
        }
        let sel = Selection::from(node);
        if is_share_widget(&sel) {
            dom::remove(&sel);
        }
    }
}

fn is_share_widget(sel: &Selection) -> bool {
    let class = dom::class_name(sel).unwrap_or_default();
    let id = dom::id(sel).unwrap_or_default();
    let label = dom::get_attribute(sel, "aria-label").unwrap_or_default();

    SHARE_CLASS.is_match(&class)
        || SHARE_CLASS.is_match(&id)
        || SHARE_CLASS.is_match(&label)
        || label.to_lowercase().contains("share")
}

fn remove_utility_blocks(doc: &Document, root_id: Option<dom_query::NodeId>) {
    let matched = doc.select(UTILITY_BLOCK_SELECTOR);
    let nodes = matched.nodes().to_vec();
    for node in nodes.into_iter().rev() {
        if Some(node.id) == root_id {
            continue;
        }
        let sel = Selection::from(node);

        let text = dom::text_content(&sel);
        let trimmed = text.trim();
        let len = trimmed.chars().count();
        if len < 20 {
            continue;
        }

        let lowered = trimmed.to_lowercase();
        if len < 80 && AD_LABELS.contains(&lowered.as_str()) {
            dom::remove(&sel);
            continue;
        }

        let density = link_density(&sel);
        let anchor_count = sel.select("a").length();
        if density > UTILITY_MAX_DENSITY && (len < 500 || anchor_count >= 5) {
            dom::remove(&sel);
            continue;
        }

        if RELATED_PHRASES.iter().any(|phrase| lowered.contains(phrase))
            && density > RELATED_MAX_DENSITY
            && len < 800
        {
            dom::remove(&sel);
        }
    }
}

fn remove_noise_markers(doc: &Document, root_id: Option<dom_query::NodeId>) {
    let matched = doc.select(NOISE_MARKER_SELECTOR);
    let nodes = matched.nodes().to_vec();
    for node in nodes.into_iter().rev() {
        if Some(node.id) == root_id {
            continue;
        }
        let sel = Selection::from(node.clone());

        let text = dom::text_content(&sel);
        let lowered = text.trim().to_lowercase();
        if lowered.is_empty()
            || !NOISE_MARKER_LABELS.iter().any(|label| lowered == *label || lowered.starts_with(label))
        {
            continue;
        }

        // The list after a marker heading is usually its payload.
        if let Some(next) = node.next_element_sibling() {
            let next_sel = Selection::from(next);
            let tag = dom::tag_name(&next_sel).unwrap_or_default();
            if NOISE_SIBLING_TAGS.contains(&tag.as_str())
                && link_density(&next_sel) > MARKER_SIBLING_DENSITY
                && dom::text_len(&next_sel) < 800
            {
                dom::remove(&next_sel);
            }
        }

        dom::remove(&sel);
    }
}
