//! Synchronous event dispatch.
//!
//! Listeners are plain `Rc` closures stored on element nodes. Dispatch
//! collects the listener chain (target first, then ancestors) while the
//! document is borrowed, releases the borrow, and only then invokes the
//! handlers — so a handler is free to mutate the document, including
//! triggering a full re-render.

use std::{cell::RefCell, rc::Rc};

use crate::{Document, NodeId};

/// An event delivered to element listeners.
#[derive(Debug, Clone)]
pub struct DomEvent {
    name: String,
    value: Option<String>,
}

impl DomEvent {
    /// Creates an event with no payload.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: None,
        }
    }

    /// Creates an event carrying a payload value (e.g. an input's text).
    pub fn with_value(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: Some(value.into()),
        }
    }

    /// The event name, e.g. `click`.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The event payload, if any.
    #[must_use]
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }
}

/// An event listener attached to an element.
pub type Listener = Rc<dyn Fn(&DomEvent)>;

/// A document shared between the render driver and event dispatch.
pub type SharedDocument = Rc<RefCell<Document>>;

/// Dispatches an event to `target`, bubbling to its ancestors.
///
/// Every listener registered for the event's name along the chain is
/// invoked in order, target first. Returns `true` if at least one
/// listener ran.
pub fn dispatch(document: &SharedDocument, target: NodeId, event: &DomEvent) -> bool {
    let chain: Vec<Listener> = {
        let doc = document.borrow();
        let mut chain = Vec::new();
        let mut cursor = Some(target);
        while let Some(id) = cursor {
            if let Some(listener) = doc.listener(id, event.name()) {
                chain.push(listener);
            }
            cursor = doc.parent(id);
        }
        chain
    };

    tracing::trace!(event = event.name(), listeners = chain.len(), "dispatch");
    for listener in &chain {
        listener(event);
    }
    !chain.is_empty()
}
