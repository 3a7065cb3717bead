//! Node storage: one arena slot per document node.

use core::fmt;

use crate::{NodeId, event::Listener};

/// A single node in the document arena.
pub struct Node {
    pub(crate) parent: Option<NodeId>,
    pub(crate) children: Vec<NodeId>,
    pub(crate) data: NodeData,
}

impl Node {
    pub(crate) const fn new(data: NodeData) -> Self {
        Self {
            parent: None,
            children: Vec::new(),
            data,
        }
    }

    /// The node's payload.
    #[must_use]
    pub const fn data(&self) -> &NodeData {
        &self.data
    }

    /// Returns `true` if this node is an element.
    #[inline]
    #[must_use]
    pub const fn is_element(&self) -> bool {
        matches!(self.data, NodeData::Element(_))
    }

    /// Element payload, if this node is an element.
    #[inline]
    #[must_use]
    pub const fn as_element(&self) -> Option<&ElementData> {
        match &self.data {
            NodeData::Element(element) => Some(element),
            _ => None,
        }
    }

    #[inline]
    pub(crate) const fn as_element_mut(&mut self) -> Option<&mut ElementData> {
        match &mut self.data {
            NodeData::Element(element) => Some(element),
            _ => None,
        }
    }

    /// Text content, if this node is an escaped-text leaf.
    #[inline]
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match &self.data {
            NodeData::Text(content) => Some(content),
            _ => None,
        }
    }
}

impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("parent", &self.parent)
            .field("children", &self.children)
            .field("data", &self.data)
            .finish()
    }
}

/// Node-specific payload.
#[derive(Debug)]
pub enum NodeData {
    /// The document root.
    Document,
    /// An element with attributes and listeners.
    Element(ElementData),
    /// An escaped text leaf; the content is serialized with escaping.
    Text(String),
    /// A raw markup leaf; the content is serialized verbatim.
    Raw(String),
    /// A comment leaf.
    Comment(String),
}

/// Element payload: tag name, ordered attributes, event listeners.
pub struct ElementData {
    pub(crate) name: String,
    pub(crate) attributes: Vec<Attribute>,
    pub(crate) listeners: Vec<(String, Listener)>,
}

impl ElementData {
    pub(crate) const fn new(name: String) -> Self {
        Self {
            name,
            attributes: Vec::new(),
            listeners: Vec::new(),
        }
    }

    /// The element's tag name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The element's attributes, in insertion order.
    #[must_use]
    pub fn attributes(&self) -> &[Attribute] {
        &self.attributes
    }

    /// Looks up an attribute value by name.
    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|attribute| attribute.name == name)
            .map(|attribute| attribute.value.as_str())
    }

    /// Sets an attribute, overwriting any previous value under the same
    /// name while keeping its original position.
    pub fn set_attribute(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        for attribute in &mut self.attributes {
            if attribute.name == name {
                attribute.value = value;
                return;
            }
        }
        self.attributes.push(Attribute { name, value });
    }

    /// Removes an attribute if present.
    pub fn remove_attribute(&mut self, name: &str) {
        self.attributes.retain(|attribute| attribute.name != name);
    }

    /// Looks up the listener registered for an event name.
    #[must_use]
    pub fn listener(&self, event: &str) -> Option<Listener> {
        self.listeners
            .iter()
            .find(|(name, _)| name == event)
            .map(|(_, listener)| listener.clone())
    }

    /// Registers a listener for an event name, replacing any previous one.
    pub fn set_listener(&mut self, event: impl Into<String>, listener: Listener) {
        let event = event.into();
        for entry in &mut self.listeners {
            if entry.0 == event {
                entry.1 = listener;
                return;
            }
        }
        self.listeners.push((event, listener));
    }
}

impl fmt::Debug for ElementData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ElementData")
            .field("name", &self.name)
            .field("attributes", &self.attributes)
            .field(
                "listeners",
                &self
                    .listeners
                    .iter()
                    .map(|(name, _)| name.as_str())
                    .collect::<Vec<_>>(),
            )
            .finish()
    }
}

/// A single element attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    /// Attribute name.
    pub name: String,
    /// Attribute value; an empty value serializes as a bare name.
    pub value: String,
}
