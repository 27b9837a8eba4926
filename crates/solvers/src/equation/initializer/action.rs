/// Actions an observer can take during initialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop immediately and return the outcome accumulated so far.
    StopEarly,
}
