//! Read/write capabilities that forward to storage they do not own.

use std::{
    any::Any,
    fmt,
    hash::{Hash, Hasher},
    rc::Rc,
};

/// A `(getter, setter)` pair forwarding to a [`State`](crate::State)
/// cell or to another projection.
///
/// A projection owns no storage: reads and writes go straight through to
/// whatever it was built from, so a write is visible to the very next
/// read. Clones share identity (they compare and hash equal).
pub struct Projection<T> {
    inner: Rc<ProjectionInner<T>>,
}

struct ProjectionInner<T> {
    get: Box<dyn Fn() -> T>,
    set: Box<dyn Fn(T)>,
}

impl<T: 'static> Projection<T> {
    /// Builds a projection from a getter and a setter.
    pub fn new(get: impl Fn() -> T + 'static, set: impl Fn(T) + 'static) -> Self {
        Self {
            inner: Rc::new(ProjectionInner {
                get: Box::new(get),
                set: Box::new(set),
            }),
        }
    }

    /// Reads the current value.
    #[must_use]
    pub fn get(&self) -> T {
        (self.inner.get)()
    }

    /// Writes a value through to the underlying storage.
    pub fn set(&self, value: T) {
        (self.inner.set)(value);
    }

    /// Derives a projection in another representation.
    ///
    /// Reads map through `to`; writes map back through `from` before
    /// being forwarded.
    #[must_use]
    pub fn map<U: 'static>(
        &self,
        to: impl Fn(T) -> U + 'static,
        from: impl Fn(U) -> T + 'static,
    ) -> Projection<U> {
        let read = self.clone();
        let write = self.clone();
        Projection::new(
            move || to(read.get()),
            move |value| write.set(from(value)),
        )
    }
}

impl<T> Clone for Projection<T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<T> PartialEq for Projection<T> {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl<T> Eq for Projection<T> {}

impl<T> Hash for Projection<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        Rc::as_ptr(&self.inner).hash(state);
    }
}

impl<T> fmt::Debug for Projection<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(core::any::type_name::<Self>())
    }
}

/// A type-erased, hashable [`Projection`].
///
/// Useful as a map key or in heterogeneous collections. Recovering the
/// typed projection requires naming the exact underlying type; asking
/// for the wrong one is a programmer error and fails fast.
#[derive(Clone)]
pub struct AnyProjection {
    inner: Rc<dyn Any>,
    key: *const (),
}

impl AnyProjection {
    /// Erases a typed projection.
    #[must_use]
    pub fn new<T: 'static>(projection: Projection<T>) -> Self {
        let key = Rc::as_ptr(&projection.inner).cast::<()>();
        Self {
            inner: Rc::new(projection),
            key,
        }
    }

    /// Recovers the typed projection.
    ///
    /// # Panics
    ///
    /// Panics if the projection was erased from a different value type.
    #[must_use]
    pub fn downcast<T: 'static>(&self) -> Projection<T> {
        self.inner
            .downcast_ref::<Projection<T>>()
            .unwrap_or_else(|| {
                panic!(
                    "projection does not forward to a {}",
                    core::any::type_name::<T>()
                )
            })
            .clone()
    }
}

impl PartialEq for AnyProjection {
    fn eq(&self, other: &Self) -> bool {
        core::ptr::eq(self.key, other.key)
    }
}

impl Eq for AnyProjection {}

impl Hash for AnyProjection {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key.hash(state);
    }
}

impl fmt::Debug for AnyProjection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AnyProjection")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Runtime;

    #[test]
    fn forwards_reads_and_writes_to_the_cell() {
        let runtime = Runtime::new();
        let cell = runtime.cell(1i32);
        let projection = cell.projection();

        projection.set(7);
        assert_eq!(projection.get(), 7);
        assert_eq!(cell.get(), 7);
    }

    #[test]
    fn map_round_trips_through_both_directions() {
        let runtime = Runtime::new();
        let cell = runtime.cell(21i32);
        let doubled = cell.projection().map(|n| n * 2, |n| n / 2);

        assert_eq!(doubled.get(), 42);
        doubled.set(100);
        assert_eq!(cell.get(), 50);
    }

    #[test]
    fn clones_share_identity() {
        let runtime = Runtime::new();
        let projection = runtime.cell(0u8).projection();
        let clone = projection.clone();
        assert_eq!(projection, clone);

        let other = runtime.cell(0u8).projection();
        assert_ne!(projection, other);
    }

    #[test]
    fn erased_projection_recovers_its_type() {
        let runtime = Runtime::new();
        let projection = runtime.cell(String::from("x")).projection();
        let erased = AnyProjection::new(projection.clone());

        let recovered = erased.downcast::<String>();
        recovered.set(String::from("y"));
        assert_eq!(projection.get(), "y");
    }

    #[test]
    #[should_panic(expected = "does not forward to a")]
    fn wrong_downcast_fails_fast() {
        let runtime = Runtime::new();
        let erased = AnyProjection::new(runtime.cell(1i32).projection());
        let _ = erased.downcast::<String>();
    }

    #[test]
    fn erased_projections_hash_by_identity() {
        use std::collections::HashSet;

        let runtime = Runtime::new();
        let projection = runtime.cell(1i32).projection();
        let mut set = HashSet::new();
        set.insert(AnyProjection::new(projection.clone()));
        assert!(set.contains(&AnyProjection::new(projection)));
    }
}
