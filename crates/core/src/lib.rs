//! Core traits and types for derivative-free minimization.
//!
//! This crate defines the shared abstractions that solvers and observers
//! build on:
//!
//! - [`Objective`]: a scalar cost over an n-dimensional point
//! - [`Observer`]: receives solver events and optionally returns control actions
//! - [`functions`]: classic test objectives ([`Rosenbrock`], [`Woods`])
//!
//! [`Rosenbrock`]: functions::Rosenbrock
//! [`Woods`]: functions::Woods

mod objective;
mod observer;

pub mod functions;

pub use objective::Objective;
pub use observer::Observer;
