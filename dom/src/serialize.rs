//! HTML serialization.

use core::fmt::Write;

use crate::{Document, NodeId, node::NodeData};

/// Elements serialized without children or a closing tag.
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr",
];

impl Document {
    /// Serializes a node and its subtree to HTML.
    ///
    /// Escaped-text leaves are entity-escaped; raw leaves are emitted
    /// verbatim; attributes with empty values serialize as bare names.
    #[must_use]
    pub fn outer_html(&self, id: NodeId) -> String {
        let mut out = String::new();
        self.write_node(id, &mut out);
        out
    }

    /// Serializes a node's children to HTML, in document order.
    #[must_use]
    pub fn inner_html(&self, id: NodeId) -> String {
        let mut out = String::new();
        for &child in self.children(id) {
            self.write_node(child, &mut out);
        }
        out
    }

    fn write_node(&self, id: NodeId, out: &mut String) {
        match &self.node(id).data {
            NodeData::Document => {
                for &child in self.children(id) {
                    self.write_node(child, out);
                }
            }
            NodeData::Element(element) => {
                out.push('<');
                out.push_str(element.name());
                for attribute in element.attributes() {
                    out.push(' ');
                    out.push_str(&attribute.name);
                    if !attribute.value.is_empty() {
                        out.push_str("=\"");
                        push_escaped(out, &attribute.value, true);
                        out.push('"');
                    }
                }
                out.push('>');
                if VOID_ELEMENTS.contains(&element.name()) {
                    return;
                }
                for &child in self.children(id) {
                    self.write_node(child, out);
                }
                let _ = write!(out, "</{}>", element.name());
            }
            NodeData::Text(content) => push_escaped(out, content, false),
            NodeData::Raw(content) => out.push_str(content),
            NodeData::Comment(content) => {
                let _ = write!(out, "<!--{content}-->");
            }
        }
    }
}

fn push_escaped(out: &mut String, content: &str, attribute: bool) {
    for ch in content.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' if attribute => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::Document;

    #[test]
    fn serializes_elements_and_text() {
        let mut doc = Document::new();
        let root = doc.root();
        let div = doc.create_element("div");
        doc.set_attribute(div, "class", "greeting");
        let text = doc.create_text("hello");
        doc.append_child(root, div);
        doc.append_child(div, text);

        assert_eq!(doc.outer_html(div), r#"<div class="greeting">hello</div>"#);
        assert_eq!(doc.inner_html(root), r#"<div class="greeting">hello</div>"#);
    }

    #[test]
    fn escapes_text_but_not_raw() {
        let mut doc = Document::new();
        let p = doc.create_element("p");
        let escaped = doc.create_text("a < b & c");
        let raw = doc.create_raw("<em>kept</em>");
        doc.append_child(p, escaped);
        doc.append_child(p, raw);

        assert_eq!(doc.outer_html(p), "<p>a &lt; b &amp; c<em>kept</em></p>");
    }

    #[test]
    fn escapes_attribute_quotes() {
        let mut doc = Document::new();
        let el = doc.create_element("div");
        doc.set_attribute(el, "title", r#"say "hi""#);
        assert_eq!(doc.outer_html(el), r#"<div title="say &quot;hi&quot;"></div>"#);
    }

    #[test]
    fn bare_boolean_attributes() {
        let mut doc = Document::new();
        let input = doc.create_element("input");
        doc.set_attribute(input, "disabled", "");
        doc.set_attribute(input, "type", "text");
        assert_eq!(doc.outer_html(input), r#"<input disabled type="text">"#);
    }

    #[test]
    fn void_elements_have_no_closing_tag() {
        let mut doc = Document::new();
        let br = doc.create_element("br");
        assert_eq!(doc.outer_html(br), "<br>");
    }

    #[test]
    fn comments_round_trip() {
        let mut doc = Document::new();
        let comment = doc.create_comment("marker");
        assert_eq!(doc.outer_html(comment), "<!--marker-->");
    }
}
