//! Derivative-free minimizers for the dfmin workspace.
//!
//! Every solver takes an [`Objective`], a starting point and a validated
//! configuration, and returns a solution record. Observers can follow each
//! run through solver-specific events and stop it early.
//!
//! [`Objective`]: dfmin_core::Objective

pub mod optimization;
