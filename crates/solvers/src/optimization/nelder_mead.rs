//! Nelder-Mead downhill simplex minimization with restarts.
//!
//! # Algorithm
//!
//! The solver keeps a simplex of `n + 1` vertices. Each iteration reflects
//! the highest vertex through the centroid of the others, then expands,
//! contracts, or shrinks the whole simplex toward its lowest vertex depending
//! on how the reflected point compares with the existing vertices. Every
//! `konvge` iterations the spread of the vertex values is compared with
//! `reqmin`.
//!
//! Once the spread is small enough, the lowest vertex is tested as a local
//! minimum by probing a small step along each axis. If a probe finds a lower
//! value, the search restarts from that probe with a small simplex. The
//! evaluation count carries over across restarts, so the run always ends
//! either converged or with the budget `kcount` exceeded.
//!
//! # Observer Events
//!
//! - [`Event::Built`] after every simplex construction
//! - [`Event::Moved`] after every main-loop iteration
//! - [`Event::ConvergenceCheck`] at every convergence check
//! - [`Event::Restart`] when the local-minimum test fails
//!
//! Returning [`Action::StopEarly`] from any event ends the run with the best
//! point known at that event and [`Status::StoppedByObserver`].

mod action;
mod config;
mod error;
mod event;
mod search;
mod simplex;
mod solution;

#[cfg(test)]
mod tests;

pub use action::Action;
pub use config::{Config, ConfigError};
pub use error::{Error, StartError};
pub use event::{Event, Move};
pub use simplex::Vertex;
pub use solution::{Solution, Status};

use dfmin_core::{Objective, Observer};

use search::search;

/// Maximum number of variables accepted.
pub const MAX_VARS: usize = 20;

/// Finds a local minimum of the objective using the Nelder-Mead method.
///
/// The number of variables is `start.len()`, and `step` gives the initial
/// simplex edge along each coordinate.
///
/// # Errors
///
/// Returns [`Error::InvalidStart`] before evaluating anything if `start` is
/// empty, longer than [`MAX_VARS`], or non-finite, or if `step` does not
/// match it. Returns [`Error::Objective`] if the objective fails.
pub fn minimize<F, Obs>(
    objective: &F,
    start: &[f64],
    step: &[f64],
    config: &Config,
    observer: Obs,
) -> Result<Solution, Error>
where
    F: Objective,
    Obs: for<'a> Observer<Event<'a>, Action>,
{
    search(objective, start, step, config, observer)
}

/// Finds a local minimum of the objective without observer support.
///
/// This is a convenience wrapper around [`minimize`] that uses a no-op observer.
///
/// # Errors
///
/// Returns an error if the start or step is invalid or the objective fails.
pub fn minimize_unobserved<F>(
    objective: &F,
    start: &[f64],
    step: &[f64],
    config: &Config,
) -> Result<Solution, Error>
where
    F: Objective,
{
    minimize(objective, start, step, config, ())
}
