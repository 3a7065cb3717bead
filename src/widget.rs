//! Conditional rendering sugar.
//!
//! Conditions here are plain booleans read during body evaluation — the
//! whole tree re-renders on every state write, so there is nothing to
//! subscribe to.

use ripple_core::{Either, View};

/// Renders `then()` when `condition` holds, nothing otherwise.
///
/// An absent branch contributes zero instructions.
pub fn when<V: View>(condition: bool, then: impl FnOnce() -> V) -> Option<V> {
    condition.then(then)
}

/// Renders `then()` when `condition` holds, `or()` otherwise.
///
/// The two branches may be different view types.
pub fn either<A: View, B: View>(
    condition: bool,
    then: impl FnOnce() -> A,
    or: impl FnOnce() -> B,
) -> Either<A, B> {
    if condition {
        Either::Left(then())
    } else {
        Either::Right(or())
    }
}

#[cfg(test)]
mod tests {
    use ripple_core::{Builder, Environment};

    use crate::element::{p, span};

    use super::*;

    fn instruction_count(view: impl View) -> usize {
        let env = Environment::new();
        let mut builder = Builder::new();
        view.build(&env, &mut builder);
        builder.instructions().len()
    }

    #[test]
    fn absent_branch_contributes_zero_instructions() {
        assert_eq!(instruction_count(when(false, || p("hidden"))), 0);
        assert!(instruction_count(when(true, || p("shown"))) > 0);
    }

    #[test]
    fn either_picks_one_branch() {
        let left = either(true, || p("yes"), || span("no"));
        let right = either(false, || p("yes"), || span("no"));
        assert!(matches!(left, Either::Left(_)));
        assert!(matches!(right, Either::Right(_)));
    }
}
