use super::{Bracket, Budget, Counter};

/// How a bracket search ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BracketStatus {
    /// Found a bracket that straddles the goal.
    Completed,

    /// Both sides froze at the edge of the objective's valid region without
    /// straddling the goal. The frozen endpoints are reported as a
    /// best-effort bracket.
    EdgesReached,

    /// Ran every expansion round without straddling the goal.
    NotFound,

    /// No variate near the start could be evaluated.
    NoSeed,

    /// An iteration or evaluation budget ran out.
    BudgetExhausted,

    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

/// The result of a bracket search.
///
/// The outcome owns the search's counters. Searches charge them through the
/// `increment_*` methods and stop as soon as one reports exhaustion.
#[derive(Debug, Clone, PartialEq)]
pub struct BracketOutcome {
    status: BracketStatus,
    bracket: Option<Bracket>,
    iters: Counter,
    evals: Counter,
}

impl BracketOutcome {
    /// Creates an outcome with fresh counters bounded by `budget`.
    #[must_use]
    pub fn new(budget: &Budget) -> Self {
        Self {
            status: BracketStatus::NotFound,
            bracket: None,
            iters: Counter::new(budget.max_iters),
            evals: Counter::new(budget.max_evals),
        }
    }

    /// Returns how the search ended.
    #[must_use]
    pub fn status(&self) -> BracketStatus {
        self.status
    }

    /// Returns true if the search found a bracket that straddles the goal.
    #[must_use]
    pub fn is_completed(&self) -> bool {
        self.status == BracketStatus::Completed
    }

    /// Returns the terminal bracket.
    ///
    /// Present when the search completed, and as a best-effort pair when
    /// both sides reached their validity edge.
    #[must_use]
    pub fn bracket(&self) -> Option<&Bracket> {
        self.bracket.as_ref()
    }

    /// Returns the bisection point of the terminal bracket.
    #[must_use]
    pub fn midpoint(&self) -> Option<f64> {
        self.bracket.as_ref().map(Bracket::midpoint)
    }

    /// Returns the iteration counter.
    #[must_use]
    pub fn iters(&self) -> Counter {
        self.iters
    }

    /// Returns the evaluation counter.
    #[must_use]
    pub fn evals(&self) -> Counter {
        self.evals
    }

    /// Charges one iteration, returning `false` if the budget is exhausted.
    pub fn increment_iters(&mut self) -> bool {
        self.iters.increment()
    }

    /// Charges one evaluation, returning `false` if the budget is exhausted.
    pub fn increment_evals(&mut self) -> bool {
        self.evals.increment()
    }

    /// Records a straddling bracket and marks the search completed.
    pub fn finish(&mut self, bracket: Bracket) {
        self.status = BracketStatus::Completed;
        self.bracket = Some(bracket);
    }

    /// Records a non-completed ending.
    pub(super) fn halt(&mut self, status: BracketStatus, bracket: Option<Bracket>) {
        self.status = status;
        self.bracket = bracket;
    }
}

/// How a search for a starting variate ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartStatus {
    /// The bracket search completed; the start is the bracket midpoint.
    Bracketed,

    /// The convergence-zone probe found a variate that passes the
    /// curvature test.
    Converged,

    /// Every probe round ran without finding a variate in the zone.
    NotConverged,

    /// An iteration, evaluation, or derivative budget ran out.
    BudgetExhausted,

    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

/// The result of a search for a starting variate.
#[derive(Debug, Clone, PartialEq)]
pub struct StartOutcome {
    status: StartStatus,
    variate: Option<f64>,
    bracket: Option<Bracket>,
    iters: Counter,
    evals: Counter,
    derivs: Counter,
}

impl StartOutcome {
    /// Creates an outcome with fresh counters bounded by `budget`.
    #[must_use]
    pub fn new(budget: &Budget) -> Self {
        Self {
            status: StartStatus::NotConverged,
            variate: None,
            bracket: None,
            iters: Counter::new(budget.max_iters),
            evals: Counter::new(budget.max_evals),
            derivs: Counter::new(budget.max_derivs),
        }
    }

    /// Converts a completed bracket search into a starting variate at the
    /// bracket midpoint, carrying over its counters.
    ///
    /// Returns `None` if the bracket search did not complete.
    #[must_use]
    pub fn from_bracket(outcome: &BracketOutcome, budget: &Budget) -> Option<Self> {
        let bracket = outcome.bracket().filter(|_| outcome.is_completed())?;
        Some(Self {
            status: StartStatus::Bracketed,
            variate: Some(bracket.midpoint()),
            bracket: Some(*bracket),
            iters: outcome.iters(),
            evals: outcome.evals(),
            derivs: Counter::new(budget.max_derivs),
        })
    }

    /// Returns how the search ended.
    #[must_use]
    pub fn status(&self) -> StartStatus {
        self.status
    }

    /// Returns true if a starting variate was found.
    #[must_use]
    pub fn is_completed(&self) -> bool {
        matches!(self.status, StartStatus::Bracketed | StartStatus::Converged)
    }

    /// Returns the starting variate, if one was found.
    #[must_use]
    pub fn variate(&self) -> Option<f64> {
        self.variate
    }

    /// Returns the bracket the variate was derived from, if any.
    #[must_use]
    pub fn bracket(&self) -> Option<&Bracket> {
        self.bracket.as_ref()
    }

    /// Returns the iteration counter.
    #[must_use]
    pub fn iters(&self) -> Counter {
        self.iters
    }

    /// Returns the evaluation counter.
    #[must_use]
    pub fn evals(&self) -> Counter {
        self.evals
    }

    /// Returns the derivative-evaluation counter.
    #[must_use]
    pub fn derivs(&self) -> Counter {
        self.derivs
    }

    /// Charges one iteration, returning `false` if the budget is exhausted.
    pub fn increment_iters(&mut self) -> bool {
        self.iters.increment()
    }

    /// Charges one evaluation, returning `false` if the budget is exhausted.
    pub fn increment_evals(&mut self) -> bool {
        self.evals.increment()
    }

    /// Charges one derivative evaluation, returning `false` if the budget is
    /// exhausted.
    pub fn increment_derivs(&mut self) -> bool {
        self.derivs.increment()
    }

    /// Records a variate in the convergence zone and marks the search
    /// converged.
    pub fn finish(&mut self, variate: f64) {
        self.status = StartStatus::Converged;
        self.variate = Some(variate);
    }

    /// Records a non-completed ending.
    pub(super) fn halt(&mut self, status: StartStatus) {
        self.status = status;
    }
}
