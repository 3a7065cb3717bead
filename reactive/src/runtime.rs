//! The identity registry: positional slots plus the render notifier.

use std::{
    any::Any,
    cell::{Cell, RefCell},
    rc::Rc,
};

use crate::state::State;

/// A handle to one registry of positional state slots.
///
/// `Runtime` is a cheap clone (all clones share the same registry). Each
/// render root owns its own runtime, installed into the environment the
/// driver threads through every `body` call, so independent roots — and
/// independent tests — never collide.
#[derive(Clone)]
pub struct Runtime {
    inner: Rc<RuntimeInner>,
}

struct RuntimeInner {
    /// Next slot to hand out; reset to zero at the start of every pass.
    next: Cell<usize>,
    /// Slot storage; never cleared between passes. Slot `i` holds an
    /// `Rc<RefCell<T>>` erased to `Rc<dyn Any>`.
    slots: RefCell<Vec<Rc<dyn Any>>>,
    /// Re-render hook injected by the render driver.
    notifier: RefCell<Option<Rc<dyn Fn()>>>,
    /// Allocation count of the previous pass, for the debug-mode
    /// constant-allocation check.
    last_allocations: Cell<Option<usize>>,
}

impl Runtime {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: Rc::new(RuntimeInner {
                next: Cell::new(0),
                slots: RefCell::new(Vec::new()),
                notifier: RefCell::new(None),
                last_allocations: Cell::new(None),
            }),
        }
    }

    /// Starts a render pass: resets the slot counter to zero while
    /// leaving the slot store untouched.
    ///
    /// In debug builds this also asserts that the number of cells
    /// allocated by the previous pass matches the pass before it — the
    /// cheapest observable symptom of a conditionally-constructed cell.
    pub fn begin_pass(&self) {
        let completed = self.inner.next.get();
        if let Some(previous) = self.inner.last_allocations.get() {
            debug_assert_eq!(
                previous, completed,
                "state cells must be constructed unconditionally; the \
                 previous pass allocated {previous} cells, the last one {completed}"
            );
            self.inner.last_allocations.set(Some(completed));
        } else if completed > 0 || !self.inner.slots.borrow().is_empty() {
            self.inner.last_allocations.set(Some(completed));
        }
        self.inner.next.set(0);
        tracing::trace!(slots = self.inner.slots.borrow().len(), "begin pass");
    }

    /// Allocates the next positional slot and returns a cell bound to it.
    ///
    /// The first pass to reach a given position seeds the slot with
    /// `initial`; every later pass finds the slot occupied and discards
    /// its `initial` argument, keeping the stored value.
    ///
    /// # Panics
    ///
    /// Panics if the slot at this position was seeded with a different
    /// type on an earlier pass (a symptom of conditional construction).
    pub fn cell<T: 'static>(&self, initial: T) -> State<T> {
        let id = self.inner.next.get();
        self.inner.next.set(id + 1);

        let mut slots = self.inner.slots.borrow_mut();
        if id >= slots.len() {
            slots.push(Rc::new(RefCell::new(initial)));
        }
        drop(slots);

        // Resolve eagerly so a type mismatch fails at construction, not
        // at first read.
        let _ = self.slot::<T>(id);
        State::new(self.clone(), id)
    }

    pub(crate) fn slot<T: 'static>(&self, id: usize) -> Rc<RefCell<T>> {
        let slot = self.inner.slots.borrow()[id].clone();
        slot.downcast::<RefCell<T>>().unwrap_or_else(|_| {
            panic!(
                "state slot {id} does not hold a {}; was a cell constructed conditionally?",
                std::any::type_name::<T>()
            )
        })
    }

    /// Installs the re-render hook invoked synchronously after every
    /// cell write. The render driver registers itself here.
    pub fn set_notifier(&self, notifier: impl Fn() + 'static) {
        *self.inner.notifier.borrow_mut() = Some(Rc::new(notifier));
    }

    pub(crate) fn notify(&self) {
        let notifier = self.inner.notifier.borrow().clone();
        if let Some(notifier) = notifier {
            notifier();
        }
    }

    /// Number of cells allocated since the last [`begin_pass`](Self::begin_pass).
    #[must_use]
    pub fn allocations(&self) -> usize {
        self.inner.next.get()
    }

    /// Total number of slots ever seeded.
    #[must_use]
    pub fn slot_count(&self) -> usize {
        self.inner.slots.borrow().len()
    }
}

impl Default for Runtime {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Debug for Runtime {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Runtime")
            .field("next", &self.inner.next.get())
            .field("slots", &self.inner.slots.borrow().len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cells_get_sequential_slots_in_construction_order() {
        let runtime = Runtime::new();
        runtime.begin_pass();
        let a = runtime.cell(1u8);
        let b = runtime.cell("two");
        let c = runtime.cell(3.0f64);
        assert_eq!((a.id(), b.id(), c.id()), (0, 1, 2));
    }

    #[test]
    fn slots_are_stable_across_passes() {
        let runtime = Runtime::new();
        runtime.begin_pass();
        let a = runtime.cell(10i32);
        a.set(99);

        runtime.begin_pass();
        let a_again = runtime.cell(10i32);
        assert_eq!(a_again.id(), 0);
        // The stored value wins; the fresh initial value is discarded.
        assert_eq!(a_again.get(), 99);
    }

    #[test]
    fn store_survives_while_counter_resets() {
        let runtime = Runtime::new();
        runtime.begin_pass();
        runtime.cell(1u8);
        runtime.cell(2u8);
        assert_eq!(runtime.allocations(), 2);
        assert_eq!(runtime.slot_count(), 2);

        runtime.begin_pass();
        assert_eq!(runtime.allocations(), 0);
        assert_eq!(runtime.slot_count(), 2);
    }

    #[test]
    #[should_panic(expected = "constructed conditionally")]
    fn type_mismatch_at_a_position_fails_fast() {
        let runtime = Runtime::new();
        runtime.begin_pass();
        runtime.cell(1u8);
        runtime.begin_pass();
        runtime.cell("not a u8");
    }

    #[cfg(debug_assertions)]
    #[test]
    #[should_panic(expected = "state cells must be constructed unconditionally")]
    fn unstable_allocation_count_is_caught_in_debug() {
        let runtime = Runtime::new();
        runtime.begin_pass();
        runtime.cell(1u8);
        runtime.cell(2u8);
        runtime.begin_pass();
        runtime.cell(1u8);
        // Second pass allocated one cell instead of two.
        runtime.begin_pass();
    }
}
