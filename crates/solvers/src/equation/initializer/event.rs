use std::fmt;

use super::{EvalError, Point};

/// A side of the bracket being expanded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left => f.write_str("left"),
            Self::Right => f.write_str("right"),
        }
    }
}

/// Events emitted while searching for a starting point.
///
/// `E` is the objective's error type.
#[derive(Debug)]
pub enum Event<'a, E> {
    /// The bracket search found its first valid variate.
    Seeded {
        /// The seed, used as both initial endpoints.
        point: Point,
    },

    /// One side of the bracket moved outward to a valid variate.
    Expanded {
        /// The side that moved.
        side: Side,

        /// The new endpoint.
        point: Point,

        /// The half-width used for this step.
        width: f64,
    },

    /// One side of the bracket hit the edge of the objective's valid region
    /// and is now frozen.
    EdgeReached {
        /// The side that froze.
        side: Side,

        /// The last valid endpoint on this side.
        edge: Point,

        /// Why the step past the edge failed.
        error: &'a EvalError<E>,
    },

    /// A convergence-zone test ran to completion.
    ZoneTested {
        /// The tested variate.
        x: f64,

        /// Whether the variate passed the curvature test.
        in_zone: bool,
    },

    /// A convergence-zone test could not evaluate the objective or its
    /// derivatives.
    ZoneSkipped {
        /// The tested variate.
        x: f64,

        /// The evaluation failure.
        error: &'a EvalError<E>,
    },
}

impl<E> Event<'_, E> {
    /// Returns the variate that was evaluated (or attempted).
    #[must_use]
    pub fn x(&self) -> f64 {
        match self {
            Self::Seeded { point } | Self::Expanded { point, .. } => point.x(),
            Self::EdgeReached { error, .. } | Self::ZoneSkipped { error, .. } => error.x(),
            Self::ZoneTested { x, .. } => *x,
        }
    }
}
