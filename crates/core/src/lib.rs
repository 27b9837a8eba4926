//! Core traits and types for the Fixpoint solvers.
//!
//! This crate defines the shared abstractions that solvers and observers
//! build on:
//!
//! - [`Objective`] — a scalar function of one variate that can also report
//!   its first and second derivatives
//! - [`Order`] — the derivative order requested from an objective
//! - [`central_difference`] — the numerical derivative used when an objective
//!   has no analytic one
//! - [`Observer`] — watches a search and can stop it early

mod differentiate;
mod objective;
mod observer;

pub use differentiate::{DERIVATIVE_BUMP, central_difference};
pub use objective::{Objective, Order};
pub use observer::Observer;
