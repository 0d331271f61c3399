//! Reusable observers for the dfmin minimizers.
//!
//! This crate provides [`Observer`] implementations and capability traits that
//! work across both solvers in `dfmin-solvers`.
//!
//! # Modules
//!
//! - [`traits`]: Capability traits for cross-solver observers
//!   ([`HasObjective`], [`HasEvals`], [`CanStopEarly`])
//!
//! # Observers
//!
//! - [`Trace`]: logs every event through `tracing`
//! - [`StopAtObjective`]: stops a run once the objective reaches a target
//!
//! [`Observer`]: dfmin_core::Observer
//! [`HasObjective`]: traits::HasObjective
//! [`HasEvals`]: traits::HasEvals
//! [`CanStopEarly`]: traits::CanStopEarly

pub mod traits;

mod stop;
mod trace;

pub use stop::StopAtObjective;
pub use trace::Trace;
