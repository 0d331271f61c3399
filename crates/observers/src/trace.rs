use dfmin_core::Observer;

use crate::traits::{HasEvals, HasObjective};

/// Logs the evaluation count and best objective of every event at `info`.
///
/// Never alters the run.
#[derive(Debug, Clone, Default)]
pub struct Trace {
    events: usize,
}

impl Trace {
    /// Creates a trace that has seen no events.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Events seen so far.
    #[must_use]
    pub fn events(&self) -> usize {
        self.events
    }
}

impl<E: HasObjective + HasEvals, A> Observer<E, A> for Trace {
    fn observe(&mut self, event: &E) -> Option<A> {
        self.events += 1;
        tracing::info!(
            "After {:5} funevals, f(x) = {:.4e}",
            event.evals(),
            event.objective()
        );
        None
    }
}

/// Allows `&mut Trace` to be passed to solvers that take an observer by value,
/// so [`Trace::events`] can be read after the run.
impl<E: HasObjective + HasEvals, A> Observer<E, A> for &mut Trace {
    fn observe(&mut self, event: &E) -> Option<A> {
        (*self).observe(event)
    }
}
