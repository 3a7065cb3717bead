//! The document: an arena of nodes with a single root.

use crate::{
    NodeId,
    event::Listener,
    node::{ElementData, Node, NodeData},
};

/// An in-memory document tree.
///
/// Nodes live in an arena and are addressed by [`NodeId`]. The document
/// starts with a single root node of kind [`NodeData::Document`]; all
/// other nodes are created detached and attached with
/// [`append_child`](Self::append_child).
#[derive(Debug)]
pub struct Document {
    nodes: Vec<Node>,
    root: NodeId,
}

impl Document {
    /// Creates an empty document containing only the root node.
    #[must_use]
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::new(NodeData::Document)],
            root: NodeId(0),
        }
    }

    /// The document root.
    #[must_use]
    pub const fn root(&self) -> NodeId {
        self.root
    }

    fn insert(&mut self, data: NodeData) -> NodeId {
        let id = NodeId(u32::try_from(self.nodes.len()).expect("node arena overflow"));
        self.nodes.push(Node::new(data));
        id
    }

    /// Creates a detached element node.
    pub fn create_element(&mut self, name: impl Into<String>) -> NodeId {
        self.insert(NodeData::Element(ElementData::new(name.into())))
    }

    /// Creates a detached escaped-text node.
    pub fn create_text(&mut self, content: impl Into<String>) -> NodeId {
        self.insert(NodeData::Text(content.into()))
    }

    /// Creates a detached raw-markup node.
    pub fn create_raw(&mut self, content: impl Into<String>) -> NodeId {
        self.insert(NodeData::Raw(content.into()))
    }

    /// Creates a detached comment node.
    pub fn create_comment(&mut self, content: impl Into<String>) -> NodeId {
        self.insert(NodeData::Comment(content.into()))
    }

    /// Borrows a node.
    ///
    /// # Panics
    ///
    /// Panics if `id` does not belong to this document.
    #[must_use]
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()]
    }

    fn node_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.index()]
    }

    /// The node's parent, if attached.
    #[must_use]
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).parent
    }

    /// The node's children, in document order.
    #[must_use]
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.node(id).children
    }

    /// Appends `child` as the last child of `parent`, detaching it from
    /// any previous parent first.
    ///
    /// # Panics
    ///
    /// Panics if `parent` and `child` are the same node, or if `parent` is
    /// a leaf node that cannot hold children.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) {
        assert_ne!(parent, child, "a node cannot be its own child");
        assert!(
            matches!(
                self.node(parent).data,
                NodeData::Document | NodeData::Element(_)
            ),
            "leaf nodes cannot hold children"
        );
        self.detach(child);
        self.node_mut(child).parent = Some(parent);
        self.node_mut(parent).children.push(child);
    }

    /// Unlinks a node from its parent. The node and its subtree stay in
    /// the arena and can be re-attached.
    pub fn detach(&mut self, id: NodeId) {
        if let Some(parent) = self.node_mut(id).parent.take() {
            self.node_mut(parent).children.retain(|&child| child != id);
        }
    }

    /// Detaches every child of a node.
    pub fn clear_children(&mut self, id: NodeId) {
        let children = core::mem::take(&mut self.node_mut(id).children);
        for child in children {
            self.node_mut(child).parent = None;
        }
    }

    /// The element's tag name, if the node is an element.
    #[must_use]
    pub fn tag(&self, id: NodeId) -> Option<&str> {
        self.node(id).as_element().map(ElementData::name)
    }

    /// Looks up an attribute on an element node.
    #[must_use]
    pub fn attribute(&self, id: NodeId, name: &str) -> Option<&str> {
        self.node(id)
            .as_element()
            .and_then(|element| element.attribute(name))
    }

    /// Sets an attribute on an element node, overwriting any previous
    /// value.
    ///
    /// # Panics
    ///
    /// Panics if the node is not an element.
    pub fn set_attribute(&mut self, id: NodeId, name: impl Into<String>, value: impl Into<String>) {
        self.expect_element_mut(id).set_attribute(name, value);
    }

    /// Removes an attribute from an element node.
    ///
    /// # Panics
    ///
    /// Panics if the node is not an element.
    pub fn remove_attribute(&mut self, id: NodeId, name: &str) {
        self.expect_element_mut(id).remove_attribute(name);
    }

    /// Registers an event listener on an element node, replacing any
    /// previous listener for the same event.
    ///
    /// # Panics
    ///
    /// Panics if the node is not an element.
    pub fn set_listener(&mut self, id: NodeId, event: impl Into<String>, listener: Listener) {
        self.expect_element_mut(id).set_listener(event, listener);
    }

    /// Looks up the listener registered for an event on an element node.
    #[must_use]
    pub fn listener(&self, id: NodeId, event: &str) -> Option<Listener> {
        self.node(id)
            .as_element()
            .and_then(|element| element.listener(event))
    }

    fn expect_element_mut(&mut self, id: NodeId) -> &mut ElementData {
        self.node_mut(id)
            .as_element_mut()
            .expect("node is not an element")
    }

    /// Finds the first element (in depth-first document order) whose `id`
    /// attribute equals `value`.
    #[must_use]
    pub fn element_by_id(&self, value: &str) -> Option<NodeId> {
        self.find(self.root, &|document, id| {
            document.attribute(id, "id") == Some(value)
        })
    }

    /// Collects every element with the given tag name, in depth-first
    /// document order.
    #[must_use]
    pub fn elements_by_tag(&self, tag: &str) -> Vec<NodeId> {
        let mut found = Vec::new();
        let mut stack = vec![self.root];
        while let Some(id) = stack.pop() {
            if self.tag(id) == Some(tag) {
                found.push(id);
            }
            for &child in self.children(id).iter().rev() {
                stack.push(child);
            }
        }
        found
    }

    fn find(&self, start: NodeId, accept: &impl Fn(&Self, NodeId) -> bool) -> Option<NodeId> {
        if start != self.root && accept(self, start) {
            return Some(start);
        }
        for &child in self.children(start) {
            if let Some(found) = self.find(child, accept) {
                return Some(found);
            }
        }
        None
    }

    /// Concatenates the text content of a subtree (escaped text and raw
    /// markup leaves, in document order).
    #[must_use]
    pub fn text_content(&self, id: NodeId) -> String {
        let mut out = String::new();
        self.collect_text(id, &mut out);
        out
    }

    fn collect_text(&self, id: NodeId, out: &mut String) {
        match &self.node(id).data {
            NodeData::Text(content) | NodeData::Raw(content) => out.push_str(content),
            NodeData::Comment(_) => {}
            NodeData::Document | NodeData::Element(_) => {
                for &child in self.children(id) {
                    self.collect_text(child, out);
                }
            }
        }
    }

    /// Number of nodes ever created in this document, including detached
    /// ones.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn append_and_children_order() {
        let mut doc = Document::new();
        let list = doc.create_element("ul");
        doc.append_child(doc.root(), list);
        let first = doc.create_element("li");
        let second = doc.create_element("li");
        doc.append_child(list, first);
        doc.append_child(list, second);

        assert_eq!(doc.children(list), &[first, second]);
        assert_eq!(doc.parent(first), Some(list));
    }

    #[test]
    fn reappend_moves_node() {
        let mut doc = Document::new();
        let a = doc.create_element("div");
        let b = doc.create_element("div");
        let child = doc.create_text("hi");
        doc.append_child(doc.root(), a);
        doc.append_child(doc.root(), b);
        doc.append_child(a, child);
        doc.append_child(b, child);

        assert!(doc.children(a).is_empty());
        assert_eq!(doc.children(b), &[child]);
        assert_eq!(doc.parent(child), Some(b));
    }

    #[test]
    fn clear_children_detaches_subtree_roots() {
        let mut doc = Document::new();
        let host = doc.create_element("div");
        doc.append_child(doc.root(), host);
        let child = doc.create_element("span");
        doc.append_child(host, child);

        doc.clear_children(host);
        assert!(doc.children(host).is_empty());
        assert_eq!(doc.parent(child), None);
    }

    #[test]
    fn attribute_overwrite_keeps_position() {
        let mut doc = Document::new();
        let el = doc.create_element("div");
        doc.set_attribute(el, "class", "a");
        doc.set_attribute(el, "id", "x");
        doc.set_attribute(el, "class", "b");

        let element = doc.node(el).as_element().unwrap();
        assert_eq!(element.attributes()[0].name, "class");
        assert_eq!(element.attributes()[0].value, "b");
        assert_eq!(doc.attribute(el, "id"), Some("x"));
    }

    #[test]
    fn element_by_id_finds_nested() {
        let mut doc = Document::new();
        let outer = doc.create_element("section");
        let inner = doc.create_element("p");
        doc.set_attribute(inner, "id", "target");
        doc.append_child(doc.root(), outer);
        doc.append_child(outer, inner);

        assert_eq!(doc.element_by_id("target"), Some(inner));
        assert_eq!(doc.element_by_id("missing"), None);
    }

    #[test]
    fn text_content_concatenates_in_order() {
        let mut doc = Document::new();
        let el = doc.create_element("p");
        let a = doc.create_text("hello ");
        let b = doc.create_raw("<b>world</b>");
        let c = doc.create_comment("ignored");
        doc.append_child(doc.root(), el);
        doc.append_child(el, a);
        doc.append_child(el, b);
        doc.append_child(el, c);

        assert_eq!(doc.text_content(el), "hello <b>world</b>");
    }

    #[test]
    #[should_panic(expected = "leaf nodes cannot hold children")]
    fn text_nodes_reject_children() {
        let mut doc = Document::new();
        let text = doc.create_text("leaf");
        let child = doc.create_element("div");
        doc.append_child(text, child);
    }
}
