use fixpoint_core::{Objective, Observer, Order};
use tracing::{debug, trace};

use super::{Action, EvalError, Event, StartOutcome, StartStatus, ZoneConfig, cache::Cache};

/// The result of one curvature test.
enum Verdict<E> {
    InZone,
    OutOfZone,
    Failed(EvalError<E>),
    Exhausted,
}

/// Returns true if `|residual * curvature| < limit * slope²`.
///
/// This is the Newton error-bound test: inside this region a Newton step
/// from the variate converges quadratically. Equality is outside the zone.
pub(super) fn satisfies_curvature_bound(
    residual: f64,
    slope: f64,
    curvature: f64,
    limit: f64,
) -> bool {
    (residual * curvature).abs() < limit * slope * slope
}

/// Symmetric convergence-zone probe around the origin.
pub(super) struct ZoneProbe<'a, F, Obs> {
    objective: &'a F,
    cache: &'a mut Cache,
    config: &'a ZoneConfig,
    observer: &'a mut Obs,
    goal: f64,
}

impl<'a, F, Obs> ZoneProbe<'a, F, Obs>
where
    F: Objective,
    Obs: for<'e> Observer<Event<'e, F::Error>, Action>,
{
    pub(super) fn new(
        objective: &'a F,
        cache: &'a mut Cache,
        config: &'a ZoneConfig,
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

    /// Tests `x` and `-x` each round, scaling `x` by the bump factor between
    /// rounds, and records the first variate in the zone.
    pub(super) fn run(mut self, outcome: &mut StartOutcome) {
        let mut x = self.config.begin();

        for _ in 0..self.config.max_rounds() {
            if !outcome.increment_iters() {
                return halt(StartStatus::BudgetExhausted, outcome);
            }

            for candidate in [x, -x] {
                let verdict = self.test(candidate, outcome);

                let event = match &verdict {
                    Verdict::Exhausted => {
                        return halt(StartStatus::BudgetExhausted, outcome);
                    }
                    Verdict::InZone | Verdict::OutOfZone => Event::ZoneTested {
                        x: candidate,
                        in_zone: matches!(verdict, Verdict::InZone),
                    },
                    Verdict::Failed(error) => {
                        trace!(x = candidate, %error, "zone test skipped");
                        Event::ZoneSkipped {
                            x: candidate,
                            error,
                        }
                    }
                };

                if let Some(Action::StopEarly) = self.observer.observe(&event) {
                    return halt(StartStatus::StoppedByObserver, outcome);
                }

                if let Verdict::InZone = verdict {
                    debug!(
                        x = candidate,
                        iters = outcome.iters().count(),
                        "convergence zone found"
                    );
                    return outcome.finish(candidate);
                }
            }

            x *= self.config.bump();
        }

        halt(StartStatus::NotConverged, outcome);
    }

    /// Runs the curvature test at `x`, charging one evaluation and two
    /// derivative evaluations.
    fn test(&mut self, x: f64, outcome: &mut StartOutcome) -> Verdict<F::Error> {
        if !outcome.increment_evals() {
            return Verdict::Exhausted;
        }
        let point = match self.cache.evaluate(self.objective, x) {
            Ok(point) => point,
            Err(error) => return Verdict::Failed(error),
        };

        if !outcome.increment_derivs() {
            return Verdict::Exhausted;
        }
        let slope = match self.derivative(x, Order::First) {
            Ok(slope) => slope,
            Err(error) => return Verdict::Failed(error),
        };

        if !outcome.increment_derivs() {
            return Verdict::Exhausted;
        }
        let curvature = match self.derivative(x, Order::Second) {
            Ok(curvature) => curvature,
            Err(error) => return Verdict::Failed(error),
        };

        let residual = point.residual(self.goal);
        trace!(x, residual, slope, curvature, "zone test");

        if satisfies_curvature_bound(residual, slope, curvature, self.config.edge_limit()) {
            Verdict::InZone
        } else {
            Verdict::OutOfZone
        }
    }

    fn derivative(&self, x: f64, order: Order) -> Result<f64, EvalError<F::Error>> {
        let slope = self
            .objective
            .derivative(x, order)
            .map_err(|source| EvalError::Derivative { x, order, source })?;

        if slope.is_finite() {
            Ok(slope)
        } else {
            Err(EvalError::NonFiniteDerivative { x, order, slope })
        }
    }
}

fn halt(status: StartStatus, outcome: &mut StartOutcome) {
    debug!(
        ?status,
        iters = outcome.iters().count(),
        evals = outcome.evals().count(),
        derivs = outcome.derivs().count(),
        "convergence zone probe halted"
    );
    outcome.halt(status);
}
