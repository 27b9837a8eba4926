use std::collections::BTreeMap;

use fixpoint_core::Objective;
use ordered_float::OrderedFloat;

use super::{
    Bracket, EvalError, Point,
    bracket::straddles,
    point::PointError,
};

/// Memoized objective evaluations, ordered by variate.
///
/// Only successful (finite) evaluations are stored, and a stored entry is
/// never replaced. Failed evaluations are retried on the next request.
/// Keys compare by value, so `0.0` and `-0.0` share an entry.
#[derive(Debug, Default)]
pub(super) struct Cache {
    points: BTreeMap<OrderedFloat<f64>, Point>,
}

impl Cache {
    pub(super) fn new() -> Self {
        Self::default()
    }

    pub(super) fn len(&self) -> usize {
        self.points.len()
    }

    pub(super) fn clear(&mut self) {
        self.points.clear();
    }

    /// Returns the cached point at `x`, if any.
    pub(super) fn get(&self, x: f64) -> Option<Point> {
        self.points.get(&OrderedFloat(x)).copied()
    }

    /// Evaluates the objective at `x`, reusing a cached value when present.
    ///
    /// Non-finite variates are rejected without calling the objective.
    pub(super) fn evaluate<F: Objective>(
        &mut self,
        objective: &F,
        x: f64,
    ) -> Result<Point, EvalError<F::Error>> {
        if let Some(point) = self.get(x) {
            return Ok(point);
        }

        if !x.is_finite() {
            return Err(EvalError::NonFiniteVariate { x });
        }

        let value = objective
            .evaluate(x)
            .map_err(|source| EvalError::Objective { x, source })?;

        let point = Point::new(x, value).map_err(|err| match err {
            PointError::NonFiniteVariate(x) => EvalError::NonFiniteVariate { x },
            PointError::NonFiniteValue(value) => EvalError::NonFiniteValue { x, value },
        })?;

        self.points.insert(OrderedFloat(x), point);
        Ok(point)
    }

    /// Iterates over cached points in ascending variate order.
    pub(super) fn points(&self) -> impl Iterator<Item = Point> + '_ {
        self.points.values().copied()
    }

    /// Returns the first adjacent pair of cached points, in ascending order,
    /// whose values straddle `goal`.
    pub(super) fn first_straddle(&self, goal: f64) -> Option<Bracket> {
        let mut points = self.points();
        let mut prev = points.next()?;

        for point in points {
            if straddles(&prev, &point, goal) {
                return Some(Bracket::new(prev, point));
            }
            prev = point;
        }

        None
    }
}
