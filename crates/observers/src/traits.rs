//! Capability traits for cross-solver observers.
//!
//! These traits abstract over solver-specific event and action types, enabling
//! observers to work generically across both solvers.
//!
//! # Event traits
//!
//! - [`HasObjective`]: events that carry an objective value
//! - [`HasEvals`]: events that carry an evaluation count
//!
//! # Action traits
//!
//! - [`CanStopEarly`]: actions that can signal early termination
//!
//! # Example
//!
//! ```rust
//! use dfmin_core::Observer;
//! use dfmin_observers::traits::{CanStopEarly, HasEvals};
//!
//! struct Budget {
//!     max_evals: usize,
//! }
//!
//! impl<E: HasEvals, A: CanStopEarly> Observer<E, A> for Budget {
//!     fn observe(&mut self, event: &E) -> Option<A> {
//!         (event.evals() >= self.max_evals).then(A::stop_early)
//!     }
//! }
//! ```

use dfmin_solvers::optimization::{hooke_jeeves, nelder_mead};

/// An event that carries an objective value.
pub trait HasObjective {
    /// Returns the best objective value known when the event was emitted.
    fn objective(&self) -> f64;
}

/// An event that carries the run's evaluation count.
pub trait HasEvals {
    /// Returns the objective evaluations performed so far.
    fn evals(&self) -> usize;
}

/// An action type that can signal early termination.
pub trait CanStopEarly {
    /// Returns the action that stops the solver early.
    fn stop_early() -> Self;
}

// --- hooke_jeeves ---

impl HasObjective for hooke_jeeves::Event<'_> {
    fn objective(&self) -> f64 {
        self.objective
    }
}

impl HasEvals for hooke_jeeves::Event<'_> {
    fn evals(&self) -> usize {
        self.evals
    }
}

impl CanStopEarly for hooke_jeeves::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}

// --- nelder_mead ---

impl HasObjective for nelder_mead::Event<'_> {
    fn objective(&self) -> f64 {
        self.best_objective()
    }
}

impl HasEvals for nelder_mead::Event<'_> {
    fn evals(&self) -> usize {
        nelder_mead::Event::evals(self)
    }
}

impl CanStopEarly for nelder_mead::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}
