//! The environment threaded through view evaluation.

use std::{
    any::{Any, TypeId},
    collections::HashMap,
    rc::Rc,
};

use ripple_reactive::{Runtime, State};

/// The render context passed to every `body` call.
///
/// An `Environment` is a type-indexed map: at most one value per type.
/// The render driver installs the reactive [`Runtime`] here before
/// evaluating the root view, which is what makes
/// [`state`](Self::state) work — and what keeps independent render roots
/// (and unit tests) from sharing identity registries.
///
/// Cloning is cheap: values are reference-counted and shared.
#[derive(Default, Clone)]
pub struct Environment {
    values: HashMap<TypeId, Rc<dyn Any>>,
}

impl Environment {
    /// Creates an empty environment.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a value, replacing any previous value of the same type.
    pub fn install<T: 'static>(&mut self, value: T) {
        self.values.insert(TypeId::of::<T>(), Rc::new(value));
    }

    /// Returns a copy of this environment with `value` installed.
    #[must_use]
    pub fn with<T: 'static>(mut self, value: T) -> Self {
        self.install(value);
        self
    }

    /// Looks up a value by type.
    #[must_use]
    pub fn get<T: 'static>(&self) -> Option<&T> {
        self.values
            .get(&TypeId::of::<T>())
            .and_then(|value| value.as_ref().downcast_ref::<T>())
    }

    /// Constructs a positional state cell in the current render pass.
    ///
    /// Identity is purely positional: cells must be constructed
    /// unconditionally, in the same order, on every pass. The first pass
    /// seeds the cell with `initial`; later passes keep the stored value
    /// and discard `initial`.
    ///
    /// # Panics
    ///
    /// Panics if no [`Runtime`] is installed — i.e. when called outside
    /// a render pass.
    pub fn state<T: 'static>(&self, initial: T) -> State<T> {
        self.get::<Runtime>()
            .expect("no reactive runtime installed; state cells can only be constructed while a renderer is evaluating the view tree")
            .cell(initial)
    }
}

impl core::fmt::Debug for Environment {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Environment")
            .field("values", &self.values.len())
            .finish()
    }
}
