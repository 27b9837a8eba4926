use fixpoint_core::Order;
use thiserror::Error;

/// Errors that end an initializer operation before any work is done.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum Error {
    #[error("goal must be finite, got {goal}")]
    NonFiniteGoal { goal: f64 },
}

/// Why a single probe could not be used.
///
/// These failures never end a search. During bracket expansion they freeze
/// the side being expanded; during the zone probe they mark the variate as
/// outside the zone.
#[derive(Debug, Error)]
pub enum EvalError<E> {
    /// The variate itself is not finite, usually after the search widened
    /// past the range of `f64`.
    #[error("variate is not finite: {x}")]
    NonFiniteVariate { x: f64 },

    /// The objective returned an error.
    #[error("objective failed at x = {x}")]
    Objective {
        x: f64,
        #[source]
        source: E,
    },

    /// The objective returned NaN or an infinity.
    #[error("objective is not finite at x = {x}: {value}")]
    NonFiniteValue { x: f64, value: f64 },

    /// The objective could not supply a derivative.
    #[error("{order} derivative unavailable at x = {x}")]
    Derivative {
        x: f64,
        order: Order,
        #[source]
        source: E,
    },

    /// The objective returned a NaN or infinite derivative.
    #[error("{order} derivative is not finite at x = {x}: {slope}")]
    NonFiniteDerivative { x: f64, order: Order, slope: f64 },
}

impl<E> EvalError<E> {
    /// Returns the variate that failed.
    #[must_use]
    pub fn x(&self) -> f64 {
        match self {
            Self::NonFiniteVariate { x }
            | Self::Objective { x, .. }
            | Self::NonFiniteValue { x, .. }
            | Self::Derivative { x, .. }
            | Self::NonFiniteDerivative { x, .. } => *x,
        }
    }
}
