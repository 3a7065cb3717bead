//! Core machinery for the ripple UI library.
//!
//! This crate holds the pieces every ripple program passes through:
//!
//! - [`View`] — the composable description contract: composite views
//!   expose a `body`, leaves emit straight into the [`Builder`];
//! - [`Modifier`] and [`ModifiedContent`] — decorations (attributes,
//!   style declarations, event bindings) attached to the element a child
//!   view produces;
//! - [`Builder`] — the instruction-accumulating combiner that lowers a
//!   view tree into an ordered stream and materializes it onto the live
//!   document;
//! - [`Renderer`] — the render driver: resets positional state identity,
//!   evaluates the root view, and re-materializes the document
//!   synchronously on every state write;
//! - [`Environment`] — the render context threaded through every `body`
//!   call.

#[macro_use]
mod macros;

mod builder;
mod env;
mod modifier;
mod renderer;
mod view;
mod views;

pub use builder::{Builder, Instruction};
pub use env::Environment;
pub use modifier::{Attr, ModifiedContent, Modifier, On, Style};
pub use renderer::Renderer;
pub use view::{AnyView, Comment, Raw, View, ViewBuilder, comment, raw};
pub use views::Either;

pub use ripple_dom as dom;
pub use ripple_reactive as reactive;
