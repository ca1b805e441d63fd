//! Visibility and role filtering.
//!
//! Removes everything a reader would never see before any scoring happens:
//! elements hidden through attributes or inline style, and elements whose
//! ARIA role marks them as page chrome. Runs unconditionally, so hidden
//! content can never leak into any output field.

use dom_query::{Document, Selection};

use crate::dom;

/// Roles removed outright in the first pass.
const CHROME_ROLES: &[&str] = &["navigation", "menubar", "complementary", "dialog", "alertdialog"];

/// Roles treated as hidden in the second pass.
const HIDDEN_ROLES: &[&str] = &["navigation", "menu", "complementary"];

/// Apply both filter passes to a live document. Role removal runs first,
/// then the visibility sweep.
pub fn apply(doc: &Document) {
    remove_chrome_roles(doc);
    remove_hidden(doc);
}

fn remove_chrome_roles(doc: &Document) {
    let matched = doc.select("[role]");
    let nodes = matched.nodes().to_vec();
    for node in nodes.into_iter().rev() {
        let sel = Selection::from(node);
        let role = dom::get_attribute(&sel, "role").unwrap_or_default().to_lowercase();
        if CHROME_ROLES.contains(&role.as_str()) {
            dom::remove(&sel);
        }
    }
}

fn remove_hidden(doc: &Document) {
    let matched = doc.select("[hidden], [style], [aria-hidden], [role]");
    let nodes = matched.nodes().to_vec();
    for node in nodes.into_iter().rev() {
        let sel = Selection::from(node);
        if is_hidden(&sel) {
            dom::remove(&sel);
        }
    }
}

/// True when the element is invisible to the reader or carries a hidden role.
fn is_hidden(sel: &Selection) -> bool {
    if dom::has_attribute(sel, "hidden") {
        return true;
    }

    if let Some(style) = dom::get_attribute(sel, "style") {
        let style: String = style.to_lowercase().chars().filter(|c| !c.is_whitespace()).collect();
        if style.contains("display:none") || style.contains("visibility:hidden") {
            return true;
        }
    }

    if dom::get_attribute(sel, "aria-hidden").as_deref() == Some("true") {
        return true;
    }

    let role = dom::get_attribute(sel, "role").unwrap_or_default().to_lowercase();
    HIDDEN_ROLES.contains(&role.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn removes_hidden_attribute_elements() {
        let doc = dom::parse(r#"<div><p hidden>secret</p><p>visible</p></div>"#);
        apply(&doc);

        assert_eq!(doc.select("p").length(), 1);
        assert!(!doc.select("div").text().contains("secret"));
    }

    #[test]
    fn removes_inline_display_none_with_or_without_space() {
        let doc = dom::parse(
            r#"<div>
                <p style="display:none">one</p>
                <p style="display: none">two</p>
                <p style="color: red; VISIBILITY: HIDDEN">three</p>
                <p style="color: blue">kept</p>
            </div>"#,
        );
        apply(&doc);

        let text = doc.select("div").text().to_string();
        assert!(!text.contains("one"));
        assert!(!text.contains("two"));
        assert!(!text.contains("three"));
        assert!(text.contains("kept"));
    }

    #[test]
    fn removes_aria_hidden_true() {
        let doc = dom::parse(r#"<div><span aria-hidden="true">gone</span><span aria-hidden="false">kept</span></div>"#);
        apply(&doc);

        let text = doc.select("div").text().to_string();
        assert!(!text.contains("gone"));
        assert!(text.contains("kept"));
    }

    #[test]
    fn removes_chrome_roles() {
        let doc = dom::parse(
            r#"<div>
                <div role="navigation">nav links</div>
                <div role="menubar">menu bar</div>
                <div role="complementary">aside stuff</div>
                <div role="dialog">modal</div>
                <div role="alertdialog">alert</div>
                <div role="menu">menu</div>
                <div role="main">body text</div>
            </div>"#,
        );
        apply(&doc);

        let text = doc.select("body").text().to_string();
        assert!(!text.contains("nav links"));
        assert!(!text.contains("menu bar"));
        assert!(!text.contains("aside stuff"));
        assert!(!text.contains("modal"));
        assert!(!text.contains("alert"));
        assert!(!text.contains("menu"));
        assert!(text.contains("body text"));
    }

    #[test]
    fn keeps_plain_styled_elements() {
        let doc = dom::parse(r#"<p style="font-weight: bold">styled but visible</p>"#);
        apply(&doc);

        assert!(doc.select("p").exists());
    }
}
