use std::{convert::Infallible, fmt};

use crate::differentiate::central_difference;

/// The order of a derivative requested from an [`Objective`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Order {
    /// The slope, `f'(x)`.
    First,

    /// The curvature, `f''(x)`.
    Second,
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::First => f.write_str("first"),
            Self::Second => f.write_str("second"),
        }
    }
}

/// A scalar function of a single variate.
///
/// Solvers call [`evaluate`](Objective::evaluate) to sample the function and
/// [`derivative`](Objective::derivative) when they need its slope or
/// curvature. Implementations are expected to be deterministic, since
/// solvers are free to memoize evaluations.
///
/// A failed evaluation is reported either as an `Err` or as a non-finite
/// value. Solvers treat both as "the objective is undefined here".
///
/// Closures of type `Fn(f64) -> f64` are objectives that never return an
/// error and use numerical derivatives.
pub trait Objective {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Evaluates the objective at `x`.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if the objective cannot be computed at `x`.
    fn evaluate(&self, x: f64) -> Result<f64, Self::Error>;

    /// Computes the derivative of the given order at `x`.
    ///
    /// The default implementation uses [`central_difference`] over
    /// [`evaluate`](Objective::evaluate). Override it when an analytic
    /// derivative is available.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if any evaluation needed for the derivative
    /// fails, or if the implementation cannot supply the requested order.
    fn derivative(&self, x: f64, order: Order) -> Result<f64, Self::Error> {
        central_difference(|v| self.evaluate(v), x, order)
    }
}

impl<F> Objective for F
where
    F: Fn(f64) -> f64,
{
    type Error = Infallible;

    fn evaluate(&self, x: f64) -> Result<f64, Self::Error> {
        Ok(self(x))
    }
}
