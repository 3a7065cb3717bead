//! Process bootstrap: container creation, baseline metadata, first render.

use std::{cell::RefCell, rc::Rc};

use ripple_core::{AnyView, Environment, Renderer, ViewBuilder};
use ripple_dom::{Document, DomEvent, NodeId, SharedDocument, dispatch};
use thiserror::Error;

use crate::schema::{self, NestingError};

/// Error type produced while mounting an application.
#[derive(Debug, Clone, Error)]
#[non_exhaustive]
pub enum AppError {
    /// The provided document has no `<body>` element to mount into.
    #[error("document has no <body> element to mount into")]
    MissingBody,
}

/// Builder for a ripple application.
///
/// Configures the mounting container, baseline stylesheet, title and
/// favicon, then [`launch`](Self::launch)es: the document skeleton is
/// created, metadata injected, the render driver constructed, and the
/// first render pass run.
pub struct App {
    root: Box<dyn ViewBuilder<Output = AnyView>>,
    environment: Environment,
    container_id: String,
    title: Option<String>,
    favicon: Option<String>,
    inject_default_styles: bool,
}

impl App {
    /// Creates an application for the given root view factory.
    pub fn new(root: impl ViewBuilder) -> Self {
        Self {
            root: Box::new(move || AnyView::new(root.build())),
            environment: Environment::new(),
            container_id: String::from("app"),
            title: None,
            favicon: None,
            inject_default_styles: true,
        }
    }

    /// Sets the document title.
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the favicon URL injected as a `<link rel="icon">`.
    #[must_use]
    pub fn favicon(mut self, href: impl Into<String>) -> Self {
        self.favicon = Some(href.into());
        self
    }

    /// Sets the `id` of the container element hosting the application.
    #[must_use]
    pub fn container_id(mut self, id: impl Into<String>) -> Self {
        self.container_id = id.into();
        self
    }

    /// Controls whether the baseline stylesheet is injected.
    #[must_use]
    pub const fn inject_default_styles(mut self, inject: bool) -> Self {
        self.inject_default_styles = inject;
        self
    }

    /// Seeds the environment threaded through every body evaluation.
    #[must_use]
    pub fn environment(mut self, environment: Environment) -> Self {
        self.environment = environment;
        self
    }

    /// Creates a fresh document with an `html`/`head`/`body` skeleton
    /// and mounts the application into it.
    #[must_use]
    pub fn launch(self) -> MountedApp {
        let document: SharedDocument = Rc::new(RefCell::new(Document::new()));
        let (head, body) = {
            let mut doc = document.borrow_mut();
            let root = doc.root();
            let html = doc.create_element("html");
            let head = doc.create_element("head");
            let body = doc.create_element("body");
            doc.append_child(root, html);
            doc.append_child(html, head);
            doc.append_child(html, body);
            (head, body)
        };
        self.mount(document, Some(head), body)
    }

    /// Mounts the application into an existing document.
    ///
    /// Metadata is injected into the document's `<head>` (if present);
    /// the container is looked up by its `id`, or created under `<body>`
    /// when absent — the first render replaces any previous content of
    /// the container.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::MissingBody`] if the document has no `<body>`
    /// and no pre-existing container element.
    pub fn launch_in(self, document: SharedDocument) -> Result<MountedApp, AppError> {
        let (head, body) = {
            let doc = document.borrow();
            let head = doc.elements_by_tag("head").first().copied();
            let body = doc.elements_by_tag("body").first().copied();
            (head, body)
        };

        let existing = document.borrow().element_by_id(&self.container_id);
        if existing.is_none() && body.is_none() {
            return Err(AppError::MissingBody);
        }
        Ok(self.mount(document, head, existing.or(body).expect("checked above")))
    }

    fn mount(self, document: SharedDocument, head: Option<NodeId>, host: NodeId) -> MountedApp {
        let container = {
            let mut doc = document.borrow_mut();

            if let Some(head) = head {
                if self.inject_default_styles {
                    let style = doc.create_element("style");
                    doc.set_attribute(style, "data-ripple", "baseline");
                    let css = doc.create_raw(include_str!("../styles/default.css"));
                    doc.append_child(style, css);
                    doc.append_child(head, style);
                }
                if let Some(title) = &self.title {
                    let element = doc.create_element("title");
                    let text = doc.create_text(title.clone());
                    doc.append_child(element, text);
                    doc.append_child(head, element);
                }
                if let Some(href) = &self.favicon {
                    let link = doc.create_element("link");
                    doc.set_attribute(link, "rel", "icon");
                    doc.set_attribute(link, "href", href.clone());
                    doc.append_child(head, link);
                }
            }

            if doc.attribute(host, "id") == Some(self.container_id.as_str()) {
                host
            } else {
                let container = doc.create_element("div");
                doc.set_attribute(container, "id", self.container_id.clone());
                doc.append_child(host, container);
                container
            }
        };

        tracing::debug!(container = %self.container_id, "mounting application");
        let root = self.root;
        let renderer = Renderer::new(document, container, self.environment, move || root.build());
        renderer.render();
        MountedApp { renderer }
    }
}

impl core::fmt::Debug for App {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("App")
            .field("container_id", &self.container_id)
            .field("title", &self.title)
            .finish()
    }
}

/// A mounted, running application.
#[derive(Debug, Clone)]
pub struct MountedApp {
    renderer: Renderer,
}

impl MountedApp {
    /// The render driver.
    #[must_use]
    pub const fn renderer(&self) -> &Renderer {
        &self.renderer
    }

    /// The live document.
    #[must_use]
    pub fn document(&self) -> SharedDocument {
        self.renderer.document()
    }

    /// The container node the application renders under.
    #[must_use]
    pub fn container(&self) -> NodeId {
        self.renderer.container()
    }

    /// The rendered content of the container, serialized to HTML.
    #[must_use]
    pub fn html(&self) -> String {
        let document = self.document();
        let html = document.borrow().inner_html(self.container());
        html
    }

    /// Dispatches an event to the element with the given `id` attribute.
    ///
    /// Returns `false` if no such element exists or no listener along
    /// its ancestor chain handles the event.
    pub fn dispatch_by_id(&self, id: &str, event: &DomEvent) -> bool {
        let document = self.document();
        let target = document.borrow().element_by_id(id);
        match target {
            Some(target) => dispatch(&document, target, event),
            None => {
                tracing::warn!(id, "dispatch target not found");
                false
            }
        }
    }

    /// Runs the containment validation pass over the rendered content.
    ///
    /// # Errors
    ///
    /// Returns the first [`NestingError`] found under the container.
    pub fn validate(&self) -> Result<(), NestingError> {
        let document = self.document();
        let result = schema::validate(&document.borrow(), self.container());
        result
    }
}
