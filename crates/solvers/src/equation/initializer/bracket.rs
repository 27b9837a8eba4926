use super::Point;

/// Two evaluated points whose objective values straddle a goal.
///
/// Endpoints are ordered so that `left().x() <= right().x()`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bracket {
    left: Point,
    right: Point,
}

impl Bracket {
    /// Creates a bracket from two points in either order.
    pub(super) fn new(a: Point, b: Point) -> Self {
        if a.x() <= b.x() {
            Self { left: a, right: b }
        } else {
            Self { left: b, right: a }
        }
    }

    /// Returns the left endpoint.
    #[must_use]
    pub fn left(&self) -> Point {
        self.left
    }

    /// Returns the right endpoint.
    #[must_use]
    pub fn right(&self) -> Point {
        self.right
    }

    /// Returns the bisection point, the arithmetic mean of the endpoints.
    #[must_use]
    pub fn midpoint(&self) -> f64 {
        0.5 * (self.left.x() + self.right.x())
    }

    /// Returns the distance between the endpoints.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.right.x() - self.left.x()
    }

    /// Returns true if the endpoint values lie on opposite sides of `goal`,
    /// or either one equals it.
    #[must_use]
    pub fn straddles(&self, goal: f64) -> bool {
        straddles(&self.left, &self.right, goal)
    }
}

/// Returns true if `(a - goal) * (b - goal) <= 0`.
pub(super) fn straddles(a: &Point, b: &Point, goal: f64) -> bool {
    a.residual(goal) * b.residual(goal) <= 0.0
}
