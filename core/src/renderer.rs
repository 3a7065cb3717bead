//! The render driver.

use std::{
    cell::{Cell, RefCell},
    rc::Rc,
};

use ripple_dom::{NodeId, SharedDocument};
use ripple_reactive::{Refresh, Runtime};

use crate::{AnyView, Builder, Environment, View, ViewBuilder};

/// Drives render passes for one root view over one container node.
///
/// Each pass runs five steps in order: reset the reactive runtime's
/// positional counter, clear the container's rendered content, construct
/// a fresh [`Builder`], refresh auxiliary inputs and build a fresh root
/// view through the environment, then materialize the accumulated
/// instructions under the container.
///
/// The driver injects itself as the runtime's notifier, so every state
/// write re-enters [`render`](Self::render) synchronously before the
/// write returns. Writes are not batched: N writes inside one event
/// handler trigger N full passes. Writing to a cell *while a pass is
/// evaluating the view tree* re-enters the driver mid-pass and is not
/// supported.
///
/// `Renderer` is a cheap clone; all clones drive the same root.
#[derive(Clone)]
pub struct Renderer {
    inner: Rc<RendererInner>,
}

struct RendererInner {
    document: SharedDocument,
    container: NodeId,
    environment: Environment,
    runtime: Runtime,
    root: Box<dyn ViewBuilder<Output = AnyView>>,
    inputs: RefCell<Vec<Rc<dyn Refresh>>>,
    passes: Cell<u64>,
}

impl Renderer {
    /// Creates a driver for `root` rendering under `container`.
    ///
    /// A fresh [`Runtime`] is created and installed into `environment`;
    /// the driver registers its re-render hook with it. The first pass
    /// is not run here — call [`render`](Self::render).
    pub fn new(
        document: SharedDocument,
        container: NodeId,
        environment: Environment,
        root: impl ViewBuilder,
    ) -> Self {
        let runtime = Runtime::new();
        let environment = environment.with(runtime.clone());
        let erased: Box<dyn ViewBuilder<Output = AnyView>> =
            Box::new(move || AnyView::new(root.build()));

        let inner = Rc::new(RendererInner {
            document,
            container,
            environment,
            runtime: runtime.clone(),
            root: erased,
            inputs: RefCell::new(Vec::new()),
            passes: Cell::new(0),
        });

        let weak = Rc::downgrade(&inner);
        runtime.set_notifier(move || {
            if let Some(inner) = weak.upgrade() {
                inner.render();
            }
        });

        Self { inner }
    }

    /// Runs one full render pass.
    pub fn render(&self) {
        self.inner.render();
    }

    /// Registers an auxiliary reactive input whose
    /// [`update`](Refresh::update) runs immediately before each root
    /// body evaluation.
    pub fn observe(&self, input: impl Refresh + 'static) {
        self.inner.inputs.borrow_mut().push(Rc::new(input));
    }

    /// Number of completed render passes.
    #[must_use]
    pub fn passes(&self) -> u64 {
        self.inner.passes.get()
    }

    /// The document this driver renders into.
    #[must_use]
    pub fn document(&self) -> SharedDocument {
        self.inner.document.clone()
    }

    /// The container node rendered content is appended under.
    #[must_use]
    pub fn container(&self) -> NodeId {
        self.inner.container
    }

    /// The environment threaded through every body evaluation.
    #[must_use]
    pub fn environment(&self) -> &Environment {
        &self.inner.environment
    }

    /// The reactive runtime owned by this driver.
    #[must_use]
    pub fn runtime(&self) -> &Runtime {
        &self.inner.runtime
    }
}

impl RendererInner {
    fn render(&self) {
        let pass = self.passes.get();
        let _span = tracing::debug_span!("render_pass", pass).entered();

        self.runtime.begin_pass();
        self.document.borrow_mut().clear_children(self.container);
        let mut builder = Builder::new();

        let inputs: Vec<Rc<dyn Refresh>> = self.inputs.borrow().clone();
        for input in inputs {
            input.update();
        }
        let view = self.root.build();
        view.build(&self.environment, &mut builder);

        builder.render(&mut self.document.borrow_mut(), self.container);
        self.passes.set(pass + 1);
    }
}

impl core::fmt::Debug for Renderer {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Renderer")
            .field("container", &self.inner.container)
            .field("passes", &self.inner.passes.get())
            .finish()
    }
}
