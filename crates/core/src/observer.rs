/// Watches a search as it probes an objective and can cut it short.
///
/// Searches report each seed, expansion, frozen edge and curvature test as an
/// event `E`. Returning `Some(action)` asks the search to act on it (for the
/// initializer, only to stop), while `None` leaves the search untouched.
///
/// Any `FnMut(&E) -> Option<A>` closure is an observer. Pass `()` when no
/// observation is needed.
pub trait Observer<E, A> {
    /// Handles one search event, optionally requesting an action.
    fn observe(&mut self, event: &E) -> Option<A>;
}

impl<E, A, F> Observer<E, A> for F
where
    F: FnMut(&E) -> Option<A>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self(event)
    }
}

impl<E, A> Observer<E, A> for () {
    fn observe(&mut self, _event: &E) -> Option<A> {
        None
    }
}
