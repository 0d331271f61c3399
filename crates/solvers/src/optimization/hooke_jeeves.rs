//! Hooke-Jeeves pattern search for multivariable minimization.
//!
//! # Algorithm
//!
//! The search keeps a base point and one signed step per coordinate. Each
//! outer iteration makes an exploratory move: every coordinate is probed on
//! both sides in turn and moved wherever the objective strictly decreases.
//! If that improves on the base point, the search makes pattern moves,
//! repeatedly jumping past the new point along the direction just travelled
//! and exploring again, until a jump stops paying off. When an iteration
//! brings no improvement, the step length and every step are multiplied by
//! `rho`.
//!
//! The search stops when the step length falls to `epsilon` or below
//! ([`Status::Converged`]) or when `max_iters` iterations have run
//! ([`Status::MaxIters`]). The reported point is always the last base point.
//!
//! # When to Use
//!
//! - The objective is cheap and its derivatives are unavailable
//! - The problem has few enough variables for coordinate probing
//! - A robust, simple method matters more than fast convergence
//!
//! Results depend on `rho`: Woods' function is solved with `rho = 0.5`, fares
//! poorly with `rho = 0.6`, and is solved again with `rho = 0.8`.
//!
//! # Observer Events
//!
//! One [`Event`] is emitted at the top of each outer iteration with the base
//! point about to be improved on. Returning [`Action::StopEarly`] ends the
//! run with that base point and [`Status::StoppedByObserver`].

mod action;
mod config;
mod error;
mod event;
mod explore;
mod search;
mod solution;


pub use action::Action;
pub use config::{Config, ConfigError};
pub use error::{Error, StartError};
pub use event::Event;
pub use solution::{Solution, Status};

use dfmin_core::{Objective, Observer};

use search::search;

/// Maximum number of variables accepted.
pub const MAX_VARS: usize = 250;

/// Finds a local minimum of the objective using Hooke-Jeeves pattern search.
///
/// The number of variables is `start.len()`. The observer receives an
/// [`Event`] at the top of every outer iteration.
///
/// # Errors
///
/// Returns [`Error::InvalidStart`] before evaluating anything if `start` is
/// empty, longer than [`MAX_VARS`], or has a non-finite coordinate.
/// Returns [`Error::Objective`] if the objective fails.
pub fn minimize<F, Obs>(
    objective: &F,
    start: &[f64],
    config: &Config,
    observer: Obs,
) -> Result<Solution, Error>
where
    F: Objective,
    Obs: for<'a> Observer<Event<'a>, Action>,
{
    search(objective, start, config, observer)
}

/// Finds a local minimum of the objective without observer support.
///
/// This is a convenience wrapper around [`minimize`] that uses a no-op observer.
///
/// # Errors
///
/// Returns an error if the start is invalid or the objective fails.
pub fn minimize_unobserved<F>(
    objective: &F,
    start: &[f64],
    config: &Config,
) -> Result<Solution, Error>
where
    F: Objective,
{
    minimize(objective, start, config, ())
}
