use thiserror::Error;

/// A variate paired with its objective value.
///
/// Both fields are finite; [`Point::new`] rejects anything else.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    x: f64,
    value: f64,
}

/// Errors that can occur when constructing a [`Point`].
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum PointError {
    #[error("variate must be finite, got {0}")]
    NonFiniteVariate(f64),

    #[error("objective value must be finite, got {0}")]
    NonFiniteValue(f64),
}

impl Point {
    /// Creates a new point.
    ///
    /// # Errors
    ///
    /// Returns an error if `x` or `value` is NaN or infinite.
    pub fn new(x: f64, value: f64) -> Result<Self, PointError> {
        if !x.is_finite() {
            return Err(PointError::NonFiniteVariate(x));
        }
        if !value.is_finite() {
            return Err(PointError::NonFiniteValue(value));
        }
        Ok(Self { x, value })
    }

    /// Returns the variate.
    #[must_use]
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Returns the objective value at the variate.
    #[must_use]
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Returns `value - goal`.
    #[must_use]
    pub fn residual(&self, goal: f64) -> f64 {
        self.value - goal
    }
}
