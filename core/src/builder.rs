//! The instruction-accumulating builder and its materializer.
//!
//! Lowering a view tree produces an ordered stream of [`Instruction`]s;
//! [`Builder::render`] replays that stream onto the live document. The
//! two-step split keeps lowering free of document borrows and makes the
//! stream itself observable in tests.

use core::fmt;

use ripple_dom::{Document, Listener, NodeId};

/// One operation in the builder's instruction stream.
pub enum Instruction {
    /// Open an element with an initial attribute set.
    Open {
        /// Tag name.
        name: String,
        /// Initial attributes, applied in order before any merges.
        attributes: Vec<(String, String)>,
    },
    /// Merge one attribute into the current target element. `None`
    /// removes the attribute (boolean-absent); `Some` sets or overwrites
    /// it — duplicate keys are last-writer-wins.
    Attribute {
        /// Attribute name.
        name: String,
        /// Attribute value, or `None` to omit.
        value: Option<String>,
    },
    /// Merge an event binding into the current target element,
    /// replacing any previous binding for the same event.
    Listen {
        /// Event name, e.g. `click`.
        event: String,
        /// The listener to attach.
        listener: Listener,
    },
    /// Append an escaped text leaf.
    Text(String),
    /// Append an unescaped markup leaf.
    Raw(String),
    /// Append a comment leaf.
    Comment(String),
    /// Close the innermost open element.
    Close,
}

impl fmt::Debug for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Open { name, attributes } => f
                .debug_struct("Open")
                .field("name", name)
                .field("attributes", attributes)
                .finish(),
            Self::Attribute { name, value } => f
                .debug_struct("Attribute")
                .field("name", name)
                .field("value", value)
                .finish(),
            Self::Listen { event, .. } => {
                f.debug_struct("Listen").field("event", event).finish()
            }
            Self::Text(text) => f.debug_tuple("Text").field(text).finish(),
            Self::Raw(markup) => f.debug_tuple("Raw").field(markup).finish(),
            Self::Comment(comment) => f.debug_tuple("Comment").field(comment).finish(),
            Self::Close => f.write_str("Close"),
        }
    }
}

/// Accumulates lowering instructions and materializes them.
///
/// The merge target rule: opening an element makes it the target;
/// closing an element makes *the element just closed* the target. A
/// modifier therefore lands on the outermost element its child produced,
/// even though the child has already closed it — while attributes
/// emitted inside an element's children still land on that element.
#[derive(Debug, Default)]
pub struct Builder {
    instructions: Vec<Instruction>,
    opened: bool,
}

impl Builder {
    /// Creates an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens an element with an initial attribute set, lowers its
    /// children through `children`, and closes it.
    pub fn element(
        &mut self,
        name: impl Into<String>,
        attributes: impl IntoIterator<Item = (String, String)>,
        children: impl FnOnce(&mut Self),
    ) {
        self.instructions.push(Instruction::Open {
            name: name.into(),
            attributes: attributes.into_iter().collect(),
        });
        self.opened = true;
        children(self);
        self.instructions.push(Instruction::Close);
    }

    /// Merges one attribute into the current target element.
    ///
    /// # Panics
    ///
    /// Panics if no element has been opened yet — an attribute with
    /// nothing to attach to is a logic error.
    pub fn attribute(&mut self, name: impl Into<String>, value: Option<String>) {
        assert!(
            self.opened,
            "attribute merge with no element to target; wrap the view in an element first"
        );
        self.instructions.push(Instruction::Attribute {
            name: name.into(),
            value,
        });
    }

    /// Merges an event binding into the current target element.
    ///
    /// # Panics
    ///
    /// Panics if no element has been opened yet.
    pub fn listener(&mut self, event: impl Into<String>, listener: Listener) {
        assert!(
            self.opened,
            "event binding with no element to target; wrap the view in an element first"
        );
        self.instructions.push(Instruction::Listen {
            event: event.into(),
            listener,
        });
    }

    /// Appends an escaped text leaf.
    pub fn text(&mut self, content: impl Into<String>) {
        self.instructions.push(Instruction::Text(content.into()));
    }

    /// Appends an unescaped markup leaf.
    pub fn raw(&mut self, content: impl Into<String>) {
        self.instructions.push(Instruction::Raw(content.into()));
    }

    /// Appends a comment leaf.
    pub fn comment(&mut self, content: impl Into<String>) {
        self.instructions.push(Instruction::Comment(content.into()));
    }

    /// Pushes a raw instruction, bypassing the structural checks of the
    /// scoped operations. Intended for backends and tests; the stream is
    /// still validated during [`render`](Self::render).
    pub fn push(&mut self, instruction: Instruction) {
        if matches!(instruction, Instruction::Open { .. }) {
            self.opened = true;
        }
        self.instructions.push(instruction);
    }

    /// The accumulated instruction stream.
    #[must_use]
    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }

    /// Walks the accumulated instructions and materializes real document
    /// nodes, attributes and listeners under `parent`, in instruction
    /// order.
    ///
    /// # Panics
    ///
    /// Panics on a malformed stream: a close without a matching open, a
    /// merge before any element was opened, or an element left open at
    /// the end of the stream.
    pub fn render(&self, document: &mut Document, parent: NodeId) {
        let mut stack: Vec<NodeId> = Vec::new();
        let mut target: Option<NodeId> = None;

        for instruction in &self.instructions {
            match instruction {
                Instruction::Open { name, attributes } => {
                    let element = document.create_element(name.clone());
                    for (attribute, value) in attributes {
                        document.set_attribute(element, attribute.clone(), value.clone());
                    }
                    document.append_child(stack.last().copied().unwrap_or(parent), element);
                    stack.push(element);
                    target = Some(element);
                }
                Instruction::Close => {
                    let element = stack.pop().expect("close without a matching open");
                    target = Some(element);
                }
                Instruction::Attribute { name, value } => {
                    let element = target.expect("attribute merge with no element to target");
                    match value {
                        Some(value) => {
                            document.set_attribute(element, name.clone(), value.clone());
                        }
                        None => document.remove_attribute(element, name),
                    }
                }
                Instruction::Listen { event, listener } => {
                    let element = target.expect("event binding with no element to target");
                    document.set_listener(element, event.clone(), listener.clone());
                }
                Instruction::Text(content) => {
                    let node = document.create_text(content.clone());
                    document.append_child(stack.last().copied().unwrap_or(parent), node);
                }
                Instruction::Raw(content) => {
                    let node = document.create_raw(content.clone());
                    document.append_child(stack.last().copied().unwrap_or(parent), node);
                }
                Instruction::Comment(content) => {
                    let node = document.create_comment(content.clone());
                    document.append_child(stack.last().copied().unwrap_or(parent), node);
                }
            }
        }

        assert!(
            stack.is_empty(),
            "element left open at the end of the instruction stream"
        );
        tracing::trace!(instructions = self.instructions.len(), "materialized");
    }
}
