//! Solvers for the Fixpoint framework.
//!
//! # Modules
//!
//! - [`equation`] — starting points for one-dimensional equation solving

pub mod equation;
