/// A count that cannot grow past a fixed limit.
///
/// [`increment`](Counter::increment) reports exhaustion instead of
/// exceeding the limit, which is how searches observe their budgets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Counter {
    count: usize,
    limit: usize,
}

impl Counter {
    /// Creates a counter at zero with the given limit.
    #[must_use]
    pub fn new(limit: usize) -> Self {
        Self { count: 0, limit }
    }

    /// Increments the count if the limit allows it.
    ///
    /// Returns `false`, leaving the count unchanged, once the limit is reached.
    pub fn increment(&mut self) -> bool {
        if self.is_exhausted() {
            return false;
        }
        self.count += 1;
        true
    }

    /// Returns the current count.
    #[must_use]
    pub fn count(&self) -> usize {
        self.count
    }

    /// Returns the limit.
    #[must_use]
    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Returns true if no further increments are allowed.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.count >= self.limit
    }
}
