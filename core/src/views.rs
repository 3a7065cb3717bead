//! Composite combinators: tuples, branches, optionals, collections.
//!
//! Each combinator lowers by emitting its constituents' instructions in
//! declared left-to-right order, with no interleaving. An empty optional
//! contributes zero instructions; a collection contributes its elements'
//! instructions concatenated in order.

use crate::{Builder, Environment, View};

macro_rules! impl_view_for_tuple {
    ($($ty:ident),+) => {
        impl<$($ty: View),+> View for ($($ty,)+) {
            no_body!();

            #[allow(non_snake_case)]
            fn build(self, env: &Environment, out: &mut Builder) {
                let ($($ty,)+) = self;
                $($ty.build(env, out);)+
            }
        }
    };
}

tuples!(impl_view_for_tuple);

impl<V: View> View for Option<V> {
    no_body!();

    fn build(self, env: &Environment, out: &mut Builder) {
        if let Some(view) = self {
            view.build(env, out);
        }
    }
}

impl<V: View> View for Vec<V> {
    no_body!();

    fn build(self, env: &Environment, out: &mut Builder) {
        for view in self {
            view.build(env, out);
        }
    }
}

impl<V: View, const N: usize> View for [V; N] {
    no_body!();

    fn build(self, env: &Environment, out: &mut Builder) {
        for view in self {
            view.build(env, out);
        }
    }
}

/// A view that is one of two alternatives.
///
/// Both branches are full views; only the active one is lowered. Useful
/// when two arms of a condition produce different concrete types.
#[derive(Debug, Clone)]
pub enum Either<A, B> {
    /// The first alternative.
    Left(A),
    /// The second alternative.
    Right(B),
}

impl<A: View, B: View> View for Either<A, B> {
    no_body!();

    fn build(self, env: &Environment, out: &mut Builder) {
        match self {
            Self::Left(view) => view.build(env, out),
            Self::Right(view) => view.build(env, out),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{AnyView, Instruction};

    fn lower(view: impl View) -> Vec<String> {
        let env = Environment::new();
        let mut builder = Builder::new();
        view.build(&env, &mut builder);
        builder
            .instructions()
            .iter()
            .map(|instruction| match instruction {
                Instruction::Text(text) => text.clone(),
                other => panic!("expected text instruction, got {other:?}"),
            })
            .collect()
    }

    #[test]
    fn tuples_emit_left_to_right() {
        assert_eq!(lower(("a", "b", "c")), ["a", "b", "c"]);
    }

    #[test]
    fn array_of_three_leaves_yields_three_instructions_in_order() {
        assert_eq!(lower(["x", "y", "z"]), ["x", "y", "z"]);
    }

    #[test]
    fn vec_concatenates_in_element_order() {
        assert_eq!(lower(vec!["1", "2"]), ["1", "2"]);
    }

    #[test]
    fn empty_optional_contributes_zero_instructions() {
        assert_eq!(lower(None::<&'static str>), Vec::<String>::new());
        assert_eq!(lower(Some("present")), ["present"]);
    }

    #[test]
    fn either_lowers_only_the_active_branch() {
        assert_eq!(lower(Either::<_, String>::Left("left")), ["left"]);
        assert_eq!(
            lower(Either::<&'static str, _>::Right(String::from("right"))),
            ["right"]
        );
    }

    #[test]
    fn erased_views_lower_like_their_originals() {
        assert_eq!(lower(AnyView::new(("a", "b"))), ["a", "b"]);
    }

    #[test]
    #[should_panic(expected = "must not be evaluated")]
    fn direct_emission_views_reject_body() {
        let env = Environment::new();
        let _ = ("a", "b").body(&env);
    }
}
