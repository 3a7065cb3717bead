//! Containment legality: which elements may nest under which parents.
//!
//! The builder and combiner are containment-agnostic by design; legality
//! is an explicit schema table over the materialized tree, checked as a
//! runtime validation pass. The table covers the structural rules that
//! break documents in practice (paragraph/phrasing nesting, list and
//! table structure, children of void elements) rather than the full HTML
//! content model.

use ripple_dom::{Document, NodeId};
use thiserror::Error;

/// A containment violation found by [`validate`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NestingError {
    /// A child element is not allowed under its parent element.
    #[error("<{child}> may not appear inside <{parent}>")]
    Forbidden {
        /// The parent element's tag.
        parent: String,
        /// The offending child element's tag.
        child: String,
    },
    /// A void element has children.
    #[error("<{parent}> is a void element and cannot have children")]
    VoidWithChildren {
        /// The void element's tag.
        parent: String,
    },
}

const VOID: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr",
];

const PHRASING: &[&str] = &[
    "a", "abbr", "b", "br", "button", "code", "em", "i", "img", "input", "kbd", "label", "mark",
    "q", "s", "select", "small", "span", "strong", "sub", "sup", "textarea", "u", "wbr",
];

/// Parents restricted to phrasing content.
const PHRASING_ONLY: &[&str] = &[
    "p", "span", "h1", "h2", "h3", "h4", "h5", "h6", "em", "strong", "small", "label", "a",
    "button", "caption", "figcaption",
];

fn allowed(parent: &str, child: &str) -> bool {
    match parent {
        "ul" | "ol" => child == "li",
        "table" => matches!(
            child,
            "caption" | "colgroup" | "thead" | "tbody" | "tfoot" | "tr"
        ),
        "thead" | "tbody" | "tfoot" => child == "tr",
        "tr" => matches!(child, "td" | "th"),
        "select" => matches!(child, "option" | "optgroup"),
        "optgroup" => child == "option",
        _ if PHRASING_ONLY.contains(&parent) => PHRASING.contains(&child),
        _ => true,
    }
}

/// Walks the subtree under `root` and reports the first containment
/// violation, if any.
///
/// Only element-under-element edges are checked; text, raw and comment
/// leaves are always legal.
pub fn validate(document: &Document, root: NodeId) -> Result<(), NestingError> {
    let mut stack = vec![root];
    while let Some(id) = stack.pop() {
        let parent_tag = document.tag(id);

        if let Some(parent) = parent_tag {
            if VOID.contains(&parent) && !document.children(id).is_empty() {
                return Err(NestingError::VoidWithChildren {
                    parent: parent.to_owned(),
                });
            }
        }

        for &child in document.children(id) {
            if let (Some(parent), Some(child_tag)) = (parent_tag, document.tag(child)) {
                if !allowed(parent, child_tag) {
                    return Err(NestingError::Forbidden {
                        parent: parent.to_owned(),
                        child: child_tag.to_owned(),
                    });
                }
            }
            stack.push(child);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use ripple_core::{Builder, Environment, View};
    use ripple_dom::Document;

    use crate::element::{div, li, p, span, table, td, tr, ul};

    use super::*;

    fn materialize(view: impl View) -> (Document, ripple_dom::NodeId) {
        let env = Environment::new();
        let mut builder = Builder::new();
        view.build(&env, &mut builder);
        let mut document = Document::new();
        let root = document.root();
        builder.render(&mut document, root);
        (document, root)
    }

    #[test]
    fn well_formed_content_passes() {
        let (document, root) = materialize(div((
            p(span("phrasing")),
            ul((li("a"), li("b"))),
            table(tr((td("1"), td("2")))),
        )));
        assert_eq!(validate(&document, root), Ok(()));
    }

    #[test]
    fn block_content_inside_a_paragraph_is_rejected() {
        let (document, root) = materialize(p(div("nested block")));
        assert_eq!(
            validate(&document, root),
            Err(NestingError::Forbidden {
                parent: String::from("p"),
                child: String::from("div"),
            })
        );
    }

    #[test]
    fn lists_only_hold_list_items() {
        let (document, root) = materialize(ul(p("not an item")));
        assert!(matches!(
            validate(&document, root),
            Err(NestingError::Forbidden { .. })
        ));
    }

    #[test]
    fn table_rows_only_hold_cells() {
        let (document, root) = materialize(table(tr(div("loose"))));
        assert!(matches!(
            validate(&document, root),
            Err(NestingError::Forbidden { .. })
        ));
    }

    #[test]
    fn void_elements_with_children_are_rejected() {
        let mut document = Document::new();
        let root = document.root();
        let br = document.create_element("br");
        let stray = document.create_text("stray");
        document.append_child(root, br);
        document.append_child(br, stray);

        assert_eq!(
            validate(&document, root),
            Err(NestingError::VoidWithChildren {
                parent: String::from("br"),
            })
        );
    }

    #[test]
    fn validation_starts_at_the_given_root() {
        let (document, root) = materialize(p(div("bad")));
        let paragraph = document.children(root)[0];
        let inner_div = document.children(paragraph)[0];
        // The subtree below the offending edge is fine on its own.
        assert_eq!(validate(&document, inner_div), Ok(()));
    }
}
