//! The refresh contract for auxiliary reactive inputs.

/// An auxiliary reactive input polled by the render driver.
///
/// State cells push: a write re-renders immediately. Inputs that live
/// outside the registry (clocks, media queries, external models) pull
/// instead: the driver calls [`update`](Self::update) on every registered
/// input immediately before each root `body` evaluation, so the pass
/// reads fresh values.
pub trait Refresh {
    /// Brings the input up to date for the pass about to run.
    fn update(&self);
}

impl<F: Fn()> Refresh for F {
    fn update(&self) {
        self();
    }
}
