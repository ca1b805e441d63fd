//! Eager selector pruning.
//!
//! Removes a fixed list of known non-content elements and then every anchor
//! whose text is too short to be anything but navigation. Short anchors are
//! deleted outright, not unwrapped; inline text living only inside them is
//! intentionally lost.

use dom_query::{Document, Selection};

use crate::dom;
use crate::patterns::{PRUNE_SELECTORS, SHORT_LINK_MAX_LEN};

/// Apply both pruning passes to a live document.
pub fn apply(doc: &Document) {
    doc.select(PRUNE_SELECTORS).remove();
    remove_short_links(doc);
}

/// Drop script, style and template subtrees so their text can never reach
/// the scorer or the rendered output. Runs after metadata extraction, which
/// still needs the JSON-LD scripts.
pub fn remove_scripts(doc: &Document) {
    doc.select("script, style, noscript, template").remove();
}

fn remove_short_links(doc: &Document) {
    let anchors = doc.select("a");
    let nodes = anchors.nodes().to_vec();
    for node in nodes.into_iter().rev() {
        let a = Selection::from(node);
        let len = dom::text_len(&a);
        if len > 0 && len < SHORT_LINK_MAX_LEN {
            dom::remove(&a);
        }
    }
}
