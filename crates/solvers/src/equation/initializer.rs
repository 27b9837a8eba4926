//! Starting points for one-dimensional equation solving.
//!
//! # Algorithm
//!
//! An [`Initializer`] prepares the ground for a root polisher solving
//! `f(x) = goal`. It offers two operations:
//!
//! - [`Initializer::find_bracket`] searches for two variates whose objective
//!   values straddle the goal. Starting from a seed near
//!   [`BracketConfig::start`], it steps both sides outward by a half-width
//!   that grows geometrically each round. When a step lands where the
//!   objective is undefined, that side freezes at its last valid variate and
//!   the search continues on the other side only.
//! - [`Initializer::find_start`] prefers a bracket and returns its midpoint.
//!   If no bracket is found it probes symmetric variates `±x` for one that
//!   passes the Newton curvature test
//!   `|f(x) - goal| · |f''(x)| < edge_limit · f'(x)²`.
//!
//! Every evaluation goes through a cache that lives as long as the
//! initializer. When the current endpoints straddle the goal, the search
//! scans the whole cache in ascending order and reports the first adjacent
//! straddling pair, which is often much tighter than the endpoints.
//!
//! # Budgets
//!
//! Each operation starts fresh counters bounded by the initializer's
//! [`Budget`]. Running out is not an error: the outcome reports
//! [`BracketStatus::BudgetExhausted`] or [`StartStatus::BudgetExhausted`]
//! along with whatever was accumulated.
//!
//! # Stale cache
//!
//! Cached values are never invalidated. If the objective's behavior changes
//! between calls, call [`Initializer::reset_cache`] or build a new
//! initializer.
//!
//! # Observer Events
//!
//! - [`Event::Seeded`] — the bracket search found a valid starting variate
//! - [`Event::Expanded`] — a side moved outward to a valid variate
//! - [`Event::EdgeReached`] — a side froze at the edge of the valid region
//! - [`Event::ZoneTested`] — a curvature test completed
//! - [`Event::ZoneSkipped`] — a curvature test could not evaluate
//!
//! Observers can return [`Action::StopEarly`] to end the operation with a
//! `StoppedByObserver` status.

mod action;
mod bracket;
mod cache;
mod config;
mod counter;
mod error;
mod event;
mod outcome;
mod point;
mod search;
mod zone;


pub use action::Action;
pub use bracket::Bracket;
pub use config::{BracketConfig, Budget, ConfigError, ZoneConfig};
pub use counter::Counter;
pub use error::{Error, EvalError};
pub use event::{Event, Side};
pub use outcome::{BracketOutcome, BracketStatus, StartOutcome, StartStatus};
pub use point::{Point, PointError};

use fixpoint_core::{Objective, Observer};
use tracing::debug;

use cache::Cache;
use search::BracketSearch;
use zone::ZoneProbe;

/// Finds brackets and starting variates for a single objective.
///
/// The initializer owns the objective and a cache of its evaluations. Reuse
/// one initializer to solve for many goals against the same objective.
#[derive(Debug)]
pub struct Initializer<F> {
    objective: F,
    bracket: BracketConfig,
    zone: ZoneConfig,
    budget: Budget,
    cache: Cache,
}

impl<F: Objective> Initializer<F> {
    /// Creates an initializer with the default [`Budget`].
    pub fn new(objective: F, bracket: BracketConfig, zone: ZoneConfig) -> Self {
        Self {
            objective,
            bracket,
            zone,
            budget: Budget::default(),
            cache: Cache::new(),
        }
    }

    /// Creates an initializer with default configs.
    pub fn with_defaults(objective: F) -> Self {
        Self::new(objective, BracketConfig::default(), ZoneConfig::default())
    }

    /// Replaces the budget applied to each operation.
    #[must_use]
    pub fn with_budget(mut self, budget: Budget) -> Self {
        self.budget = budget;
        self
    }

    /// Returns the objective.
    pub fn objective(&self) -> &F {
        &self.objective
    }

    /// Returns the bracket search config.
    pub fn bracket_config(&self) -> &BracketConfig {
        &self.bracket
    }

    /// Returns the convergence-zone probe config.
    pub fn zone_config(&self) -> &ZoneConfig {
        &self.zone
    }

    /// Returns the budget applied to each operation.
    pub fn budget(&self) -> &Budget {
        &self.budget
    }

    /// Returns the number of cached evaluations.
    pub fn cache_len(&self) -> usize {
        self.cache.len()
    }

    /// Forgets every cached evaluation.
    pub fn reset_cache(&mut self) {
        self.cache.clear();
    }

    /// Searches for a bracket that straddles `goal`.
    ///
    /// The observer receives an [`Event`] for the seed and for every
    /// expansion step. See the [module docs](self) for details.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NonFiniteGoal`] if `goal` is NaN or infinite.
    pub fn find_bracket<Obs>(&mut self, goal: f64, mut observer: Obs) -> Result<BracketOutcome, Error>
    where
        Obs: for<'a> Observer<Event<'a, F::Error>, Action>,
    {
        validate_goal(goal)?;
        Ok(self.bracket_with(goal, &mut observer))
    }

    /// Searches for a bracket without observer support.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NonFiniteGoal`] if `goal` is NaN or infinite.
    pub fn find_bracket_unobserved(&mut self, goal: f64) -> Result<BracketOutcome, Error> {
        self.find_bracket(goal, ())
    }

    /// Searches for a starting variate for solving `f(x) = goal`.
    ///
    /// A completed bracket search wins and yields its midpoint. Otherwise the
    /// convergence-zone probe runs with fresh counters.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NonFiniteGoal`] if `goal` is NaN or infinite.
    pub fn find_start<Obs>(&mut self, goal: f64, mut observer: Obs) -> Result<StartOutcome, Error>
    where
        Obs: for<'a> Observer<Event<'a, F::Error>, Action>,
    {
        validate_goal(goal)?;

        let bracketing = self.bracket_with(goal, &mut observer);
        if let Some(start) = StartOutcome::from_bracket(&bracketing, &self.budget) {
            return Ok(start);
        }

        let mut outcome = StartOutcome::new(&self.budget);
        if bracketing.status() == BracketStatus::StoppedByObserver {
            outcome.halt(StartStatus::StoppedByObserver);
            return Ok(outcome);
        }

        debug!(
            status = ?bracketing.status(),
            "no bracket, probing convergence zone"
        );
        ZoneProbe::new(
            &self.objective,
            &mut self.cache,
            &self.zone,
            &mut observer,
            goal,
        )
        .run(&mut outcome);

        Ok(outcome)
    }

    /// Searches for a starting variate without observer support.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NonFiniteGoal`] if `goal` is NaN or infinite.
    pub fn find_start_unobserved(&mut self, goal: f64) -> Result<StartOutcome, Error> {
        self.find_start(goal, ())
    }

    fn bracket_with<Obs>(&mut self, goal: f64, observer: &mut Obs) -> BracketOutcome
    where
        Obs: for<'a> Observer<Event<'a, F::Error>, Action>,
    {
        let mut outcome = BracketOutcome::new(&self.budget);
        BracketSearch::new(
            &self.objective,
            &mut self.cache,
            &self.bracket,
            observer,
            goal,
        )
        .run(&mut outcome);
        outcome
    }
}

fn validate_goal(goal: f64) -> Result<(), Error> {
    if goal.is_finite() {
        Ok(())
    } else {
        Err(Error::NonFiniteGoal { goal })
    }
}
