//! Solvers for unconstrained minimization problems.
//!
//! An [`Objective`] maps a point `x: &[f64]` to a scalar cost. Solvers in this
//! module search for the `x` that minimizes that cost using function values
//! only: no gradient or Hessian information is computed.
//!
//! # Solvers
//!
//! - [`hooke_jeeves`]: coordinate pattern search with exploratory and pattern
//!   moves and geometric step shrinkage
//! - [`nelder_mead`]: downhill simplex with reflection, expansion and
//!   contraction, restarted until a local-minimum test passes
//!
//! Every run owns its own [`Evaluator`], so the reported evaluation counts
//! never leak between runs, even when runs execute concurrently.
//!
//! [`Objective`]: dfmin_core::Objective

mod evaluate;

pub use evaluate::Evaluator;

pub mod hooke_jeeves;
pub mod nelder_mead;
