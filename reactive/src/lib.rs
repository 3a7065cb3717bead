//! Positional reactive state for the ripple UI library.
//!
//! Views are plain value types rebuilt from scratch on every render pass,
//! so state cannot live inside them. Instead, a [`Runtime`] hands out
//! [`State`] cells identified purely by *construction order*: the first
//! cell constructed during a pass gets slot 0, the second slot 1, and so
//! on. The slot store survives across passes while the counter resets, so
//! a cell constructed at the same position on every pass always finds its
//! previous value.
//!
//! The corollary is a hard rule: **state cells must be constructed
//! unconditionally**. Skipping a construction on some passes shifts every
//! later cell onto the wrong slot and silently corrupts state. Debug
//! builds assert that the per-pass allocation count stays constant, which
//! catches most violations.
//!
//! Writes are unbuffered: a [`State::set`] is immediately visible to
//! subsequent reads and synchronously invokes the notifier injected by
//! the render driver, which re-renders the whole tree.

mod projection;
mod refresh;
mod runtime;
mod state;

pub use projection::{AnyProjection, Projection};
pub use refresh::Refresh;
pub use runtime::Runtime;
pub use state::State;
