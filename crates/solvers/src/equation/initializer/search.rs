use std::ops::ControlFlow::{self, Break, Continue};

use fixpoint_core::{Objective, Observer};
use tracing::{debug, trace};

use super::{
    Action, Bracket, BracketConfig, BracketOutcome, BracketStatus, EvalError, Event, Point, Side,
    bracket::straddles, cache::Cache,
};

/// The result of charging and evaluating a single variate.
enum Probe<E> {
    Valid(Point),
    Invalid(EvalError<E>),
    Exhausted,
}

/// How the search ended, before it is recorded in the outcome.
enum Ending {
    Found(Bracket),
    Halted(BracketStatus, Option<Bracket>),
}

/// One side of the expanding bracket.
#[derive(Debug, Clone, Copy)]
struct Edge {
    point: Point,
    frozen: bool,
}

/// Adaptive two-sided bracket search.
///
/// Borrows the initializer's cache for the duration of one search and
/// records its result in a caller-owned [`BracketOutcome`].
pub(super) struct BracketSearch<'a, F, Obs> {
    objective: &'a F,
    cache: &'a mut Cache,
    config: &'a BracketConfig,
    observer: &'a mut Obs,
    goal: f64,
}

impl<'a, F, Obs> BracketSearch<'a, F, Obs>
where
    F: Objective,
    Obs: for<'e> Observer<Event<'e, F::Error>, Action>,
{
    pub(super) fn new(
        objective: &'a F,
        cache: &'a mut Cache,
        config: &'a BracketConfig,
        observer: &'a mut Obs,
        goal: f64,
    ) -> Self {
        Self {
            objective,
            cache,
            config,
            observer,
            goal,
        }
    }

    /// Runs the search, recording how it ended in `outcome`.
    pub(super) fn run(mut self, outcome: &mut BracketOutcome) {
        match self.expand(outcome) {
            Ending::Found(bracket) => {
                debug!(
                    left = bracket.left().x(),
                    right = bracket.right().x(),
                    iters = outcome.iters().count(),
                    evals = outcome.evals().count(),
                    "bracket found"
                );
                outcome.finish(bracket);
            }
            Ending::Halted(status, bracket) => {
                debug!(
                    ?status,
                    iters = outcome.iters().count(),
                    evals = outcome.evals().count(),
                    "bracket search halted"
                );
                outcome.halt(status, bracket);
            }
        }
    }

    fn expand(&mut self, outcome: &mut BracketOutcome) -> Ending {
        // A search that cannot run a single round must not touch the objective.
        if outcome.iters().is_exhausted() {
            return Ending::Halted(BracketStatus::BudgetExhausted, None);
        }

        let seed = match self.seed(outcome) {
            Ok(point) => point,
            Err(ending) => return ending,
        };

        let event = Event::Seeded { point: seed };
        if let Some(Action::StopEarly) = self.observer.observe(&event) {
            return Ending::Halted(BracketStatus::StoppedByObserver, None);
        }

        let mut edges = [Edge {
            point: seed,
            frozen: false,
        }; 2];
        let mut width = self.config.width();

        for _ in 0..=self.config.max_expansions() {
            if !outcome.increment_iters() {
                return Ending::Halted(BracketStatus::BudgetExhausted, None);
            }

            let [left, right] = edges;
            if left.frozen && right.frozen {
                let bracket = Bracket::new(left.point, right.point);
                return Ending::Halted(BracketStatus::EdgesReached, Some(bracket));
            }

            for side in [Side::Left, Side::Right] {
                if let Break(ending) = self.step(side, &mut edges, width, outcome) {
                    return ending;
                }
            }

            if let Some(bracket) = self.resolve(&edges[0].point, &edges[1].point) {
                return Ending::Found(bracket);
            }

            width *= self.config.expansion();
        }

        Ending::Halted(BracketStatus::NotFound, None)
    }

    /// Finds the first valid variate at or symmetrically around the start.
    fn seed(&mut self, outcome: &mut BracketOutcome) -> Result<Point, Ending> {
        let start = self.config.start();
        let expansion = self.config.expansion();
        let mut width = self.config.width();

        let around = (0..=self.config.max_expansions()).flat_map(move |_| {
            let pair = [start - width, start + width];
            width *= expansion;
            pair
        });

        for x in std::iter::once(start).chain(around) {
            match self.probe(x, outcome) {
                Probe::Valid(point) => {
                    debug!(x = point.x(), value = point.value(), "bracket search seeded");
                    return Ok(point);
                }
                Probe::Invalid(error) => trace!(x, %error, "seed candidate rejected"),
                Probe::Exhausted => {
                    return Err(Ending::Halted(BracketStatus::BudgetExhausted, None));
                }
            }
        }

        Err(Ending::Halted(BracketStatus::NoSeed, None))
    }

    /// Moves one side outward by `width`, or freezes it at its last valid
    /// position if the objective is undefined there.
    fn step(
        &mut self,
        side: Side,
        edges: &mut [Edge; 2],
        width: f64,
        outcome: &mut BracketOutcome,
    ) -> ControlFlow<Ending> {
        let index = match side {
            Side::Left => 0,
            Side::Right => 1,
        };
        let edge = edges[index];
        if edge.frozen {
            return Continue(());
        }

        let x = match side {
            Side::Left => edge.point.x() - width,
            Side::Right => edge.point.x() + width,
        };

        match self.probe(x, outcome) {
            Probe::Exhausted => Break(Ending::Halted(BracketStatus::BudgetExhausted, None)),
            Probe::Valid(point) => {
                trace!(%side, x, value = point.value(), "bracket expanded");
                edges[index].point = point;

                let event = Event::Expanded { side, point, width };
                if let Some(Action::StopEarly) = self.observer.observe(&event) {
                    return Break(Ending::Halted(BracketStatus::StoppedByObserver, None));
                }

                match self.resolve(&edges[0].point, &edges[1].point) {
                    Some(bracket) => Break(Ending::Found(bracket)),
                    None => Continue(()),
                }
            }
            Probe::Invalid(error) => {
                debug!(%side, edge = edge.point.x(), %error, "validity edge reached");
                edges[index].frozen = true;

                let event = Event::EdgeReached {
                    side,
                    edge: edge.point,
                    error: &error,
                };
                match self.observer.observe(&event) {
                    Some(Action::StopEarly) => {
                        Break(Ending::Halted(BracketStatus::StoppedByObserver, None))
                    }
                    None => Continue(()),
                }
            }
        }
    }

    /// Charges one evaluation, then evaluates through the cache.
    fn probe(&mut self, x: f64, outcome: &mut BracketOutcome) -> Probe<F::Error> {
        if !outcome.increment_evals() {
            return Probe::Exhausted;
        }
        match self.cache.evaluate(self.objective, x) {
            Ok(point) => Probe::Valid(point),
            Err(error) => Probe::Invalid(error),
        }
    }

    /// Checks whether the current endpoints straddle the goal.
    ///
    /// When they do, the tightest straddling pair among all cached points is
    /// returned instead, falling back to the endpoints themselves.
    fn resolve(&self, left: &Point, right: &Point) -> Option<Bracket> {
        if !straddles(left, right, self.goal) {
            return None;
        }
        Some(
            self.cache
                .first_straddle(self.goal)
                .unwrap_or_else(|| Bracket::new(*left, *right)),
        )
    }
}
