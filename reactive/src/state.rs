//! The value cell.

use core::{fmt, marker::PhantomData};

use crate::{Projection, Runtime};

/// A positionally-identified reactive value.
///
/// A `State` is a handle to one registry slot; cloning it clones the
/// handle, not the value. Reads return the stored value; writes overwrite
/// the slot and synchronously trigger a full re-render through the
/// runtime's notifier.
///
/// Writes are unbuffered: a read immediately after [`set`](Self::set)
/// already observes the new value, even though the document only reflects
/// it once the triggered render pass has run.
pub struct State<T: 'static> {
    runtime: Runtime,
    id: usize,
    _marker: PhantomData<fn() -> T>,
}

impl<T: 'static> State<T> {
    pub(crate) const fn new(runtime: Runtime, id: usize) -> Self {
        Self {
            runtime,
            id,
            _marker: PhantomData,
        }
    }

    /// The cell's positional identity within its runtime.
    #[must_use]
    pub const fn id(&self) -> usize {
        self.id
    }

    /// Overwrites the stored value, then synchronously notifies the
    /// render driver.
    pub fn set(&self, value: T) {
        {
            let slot = self.runtime.slot::<T>(self.id);
            *slot.borrow_mut() = value;
        }
        tracing::trace!(slot = self.id, "state write");
        self.runtime.notify();
    }

    /// Mutates the stored value in place, then synchronously notifies
    /// the render driver.
    pub fn update(&self, mutate: impl FnOnce(&mut T)) {
        {
            let slot = self.runtime.slot::<T>(self.id);
            mutate(&mut slot.borrow_mut());
        }
        tracing::trace!(slot = self.id, "state write");
        self.runtime.notify();
    }

    /// Reads the stored value through a closure, without cloning.
    pub fn with<R>(&self, read: impl FnOnce(&T) -> R) -> R {
        let slot = self.runtime.slot::<T>(self.id);
        let value = slot.borrow();
        read(&value)
    }
}

impl<T: Clone + 'static> State<T> {
    /// Returns a clone of the stored value.
    #[must_use]
    pub fn get(&self) -> T {
        self.with(T::clone)
    }

    /// Builds a [`Projection`] forwarding to this cell's slot.
    #[must_use]
    pub fn projection(&self) -> Projection<T> {
        let getter = self.clone();
        let setter = self.clone();
        Projection::new(move || getter.get(), move |value| setter.set(value))
    }
}

impl<T: 'static> Clone for State<T> {
    fn clone(&self) -> Self {
        Self::new(self.runtime.clone(), self.id)
    }
}

impl<T: fmt::Debug + 'static> fmt::Debug for State<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.with(|value| f.debug_struct("State").field("id", &self.id).field("value", value).finish())
    }
}
