//! The view contract and its primitive leaves.

use crate::{Builder, Environment};

/// A composable, immutable description of a piece of UI.
///
/// Views form a recursive tree. A *composite* view implements
/// [`body`](Self::body): it describes itself in terms of another view,
/// and the provided [`build`](Self::build) lowers that body. A
/// *direct-emission* view overrides `build` to write instructions
/// straight into the [`Builder`]; its `body` must never be evaluated and
/// fails fast if it is (the [`no_body!`](crate::no_body) macro generates
/// that guard).
///
/// Views are constructed fresh on every render pass and consumed by
/// value during lowering. Re-evaluating `body` with unchanged reactive
/// inputs must yield a structurally identical description.
pub trait View: 'static {
    /// The next view description down the chain.
    ///
    /// Any state cells this view needs must be constructed here, through
    /// [`Environment::state`], unconditionally and in a fixed order.
    fn body(self, env: &Environment) -> impl View;

    /// Lowers this view into builder instructions.
    ///
    /// The default path evaluates [`body`](Self::body) and delegates.
    fn build(self, env: &Environment, out: &mut Builder)
    where
        Self: Sized,
    {
        self.body(env).build(env, out);
    }
}

/// The empty view: contributes zero instructions.
impl View for () {
    no_body!();

    fn build(self, _env: &Environment, _out: &mut Builder) {}
}

/// A string literal is an escaped text leaf.
impl View for &'static str {
    no_body!();

    fn build(self, _env: &Environment, out: &mut Builder) {
        out.text(self);
    }
}

/// An owned string is an escaped text leaf.
impl View for String {
    no_body!();

    fn build(self, _env: &Environment, out: &mut Builder) {
        out.text(self);
    }
}

/// An unescaped markup leaf.
///
/// The content is materialized verbatim; the caller vouches for it.
#[derive(Debug, Clone)]
pub struct Raw(String);

/// Creates an unescaped markup leaf.
pub fn raw(content: impl Into<String>) -> Raw {
    Raw(content.into())
}

impl View for Raw {
    no_body!();

    fn build(self, _env: &Environment, out: &mut Builder) {
        out.raw(self.0);
    }
}

/// A comment leaf.
#[derive(Debug, Clone)]
pub struct Comment(String);

/// Creates a comment leaf.
pub fn comment(content: impl Into<String>) -> Comment {
    Comment(content.into())
}

impl View for Comment {
    no_body!();

    fn build(self, _env: &Environment, out: &mut Builder) {
        out.comment(self.0);
    }
}

trait AnyViewImpl {
    fn build(self: Box<Self>, env: &Environment, out: &mut Builder);
    fn name(&self) -> &'static str;
}

impl<V: View> AnyViewImpl for V {
    fn build(self: Box<Self>, env: &Environment, out: &mut Builder) {
        (*self).build(env, out);
    }

    fn name(&self) -> &'static str {
        core::any::type_name::<V>()
    }
}

/// A type-erased view.
///
/// `AnyView` lets heterogeneous views flow through one interface — as
/// the root handed to the renderer, or as branches whose concrete types
/// differ.
pub struct AnyView(Box<dyn AnyViewImpl>);

impl AnyView {
    /// Erases a concrete view.
    pub fn new(view: impl View) -> Self {
        Self(Box::new(view))
    }
}

impl View for AnyView {
    no_body!();

    fn build(self, env: &Environment, out: &mut Builder) {
        self.0.build(env, out);
    }
}

impl core::fmt::Debug for AnyView {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "AnyView({})", self.0.name())
    }
}

/// A factory that can repeatedly construct views.
///
/// The render driver rebuilds the root view from such a factory on every
/// pass, since views are consumed by lowering. Any `Fn() -> impl View`
/// qualifies.
pub trait ViewBuilder: 'static {
    /// The type of view produced by this builder.
    type Output: View;

    /// Builds a fresh view description.
    fn build(&self) -> Self::Output;
}

impl<V: View, F> ViewBuilder for F
where
    F: 'static + Fn() -> V,
{
    type Output = V;

    fn build(&self) -> Self::Output {
        (self)()
    }
}
