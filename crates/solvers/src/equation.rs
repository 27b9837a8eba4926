//! Solvers for equation problems — finding `x` such that `f(x) = goal`.
//!
//! Root polishers (bisection, Newton) need a good place to start. The
//! [`initializer`] module finds one: either a bracket whose endpoints
//! straddle the goal, or a single variate inside the region where a
//! Newton-type iteration converges quadratically.
//!
//! # Solvers
//!
//! - [`initializer`] — bracket search with a convergence-zone fallback

pub mod initializer;
