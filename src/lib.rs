//! # ripple
//!
//! A declarative, DOM-backed UI library: describe interfaces as trees of
//! composable [`View`] values, decorate them with modifiers, and let the
//! render driver materialize them into a live document — rebuilding the
//! whole tree synchronously whenever a reactive [`State`](reactive::State)
//! cell changes.
//!
//! ```
//! use ripple::prelude::*;
//!
//! struct Counter;
//!
//! impl View for Counter {
//!     fn body(self, env: &Environment) -> impl View {
//!         let count = env.state(0i32);
//!         let clicks = count.clone();
//!         div((
//!             p(format!("clicked {} times", count.get())),
//!             button("more").on_click(move || clicks.update(|n| *n += 1)),
//!         ))
//!     }
//! }
//!
//! let app = App::new(|| Counter).title("counter").launch();
//! assert!(app.html().contains("clicked 0 times"));
//! ```
//!
//! State identity is positional: cells must be constructed
//! unconditionally, in a fixed order, on every pass. See
//! [`reactive`] for the rules.

mod app;
mod element;
mod schema;
mod style;
mod view;
mod widget;

pub use app::{App, AppError, MountedApp};
pub use element::{El, Void, a, br, hr, img, input};
pub use schema::{NestingError, validate};
pub use style::StyleExt;
pub use view::ViewExt;
pub use widget::{either, when};

#[doc(inline)]
pub use ripple_core::{
    AnyView, Attr, Builder, Comment, Either, Environment, Instruction, ModifiedContent, Modifier,
    On, Raw, Renderer, Style, View, ViewBuilder, comment, no_body, raw,
};

pub use ripple_dom as dom;
pub use ripple_reactive as reactive;

pub use tracing as log;

/// A collection of commonly used traits and types for easy importing.
pub mod prelude {
    pub use super::element::*;
    pub use super::{
        AnyView, App, Attr, Either, Environment, Modifier, On, Style, StyleExt, View, ViewExt,
        comment, either, raw, when,
    };
    pub use ripple_dom::DomEvent;
    pub use ripple_reactive::{Projection, State};
}
