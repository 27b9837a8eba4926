use thiserror::Error;

/// Errors that can occur when validating initializer configs.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("start must be finite")]
    Start,

    #[error("width must be finite and positive")]
    Width,

    #[error("expansion must be finite and greater than one")]
    Expansion,

    #[error("begin must be finite and non-zero")]
    Begin,

    #[error("bump must be finite, positive, and not equal to one")]
    Bump,

    #[error("edge_limit must be finite and positive")]
    EdgeLimit,
}

/// Configuration for the bracket search.
///
/// The search starts at `start` and probes outward on both sides, stepping
/// by `width` in the first round and multiplying the step by `expansion`
/// after every round.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BracketConfig {
    start: f64,
    width: f64,
    expansion: f64,
    max_expansions: usize,
}

impl Default for BracketConfig {
    fn default() -> Self {
        Self {
            start: 0.0,
            width: 1.0e-3,
            expansion: 2.0,
            max_expansions: 40,
        }
    }
}

impl BracketConfig {
    /// Creates a new config with validated parameters.
    ///
    /// The search runs at most `max_expansions + 1` rounds.
    ///
    /// # Errors
    ///
    /// Returns an error if `start` is not finite, `width` is not finite and
    /// positive, or `expansion` is not finite and greater than one.
    pub fn new(
        start: f64,
        width: f64,
        expansion: f64,
        max_expansions: usize,
    ) -> Result<Self, ConfigError> {
        if !start.is_finite() {
            return Err(ConfigError::Start);
        }
        if !width.is_finite() || width <= 0.0 {
            return Err(ConfigError::Width);
        }
        if !expansion.is_finite() || expansion <= 1.0 {
            return Err(ConfigError::Expansion);
        }

        Ok(Self {
            start,
            width,
            expansion,
            max_expansions,
        })
    }

    /// Returns the starting variate.
    #[must_use]
    pub fn start(&self) -> f64 {
        self.start
    }

    /// Returns the starting half-width.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Returns the factor applied to the half-width after each round.
    #[must_use]
    pub fn expansion(&self) -> f64 {
        self.expansion
    }

    /// Returns the maximum number of expansions.
    #[must_use]
    pub fn max_expansions(&self) -> usize {
        self.max_expansions
    }
}

/// Configuration for the convergence-zone probe.
///
/// The probe tests `begin` and `-begin`, then multiplies the probe variate
/// by `bump` and repeats for up to `max_rounds` rounds. A variate is in the
/// zone when `|f(x) - goal| * |f''(x)| < edge_limit * f'(x)²`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoneConfig {
    begin: f64,
    bump: f64,
    max_rounds: usize,
    edge_limit: f64,
}

impl Default for ZoneConfig {
    fn default() -> Self {
        Self {
            begin: 1.0e-2,
            bump: 3.0,
            max_rounds: 20,
            edge_limit: 1.0e-2,
        }
    }
}

impl ZoneConfig {
    /// Creates a new config with validated parameters.
    ///
    /// # Errors
    ///
    /// Returns an error if `begin` is zero or not finite, `bump` is not a
    /// finite positive value other than one, or `edge_limit` is not finite
    /// and positive.
    pub fn new(
        begin: f64,
        bump: f64,
        max_rounds: usize,
        edge_limit: f64,
    ) -> Result<Self, ConfigError> {
        if !begin.is_finite() || begin == 0.0 {
            return Err(ConfigError::Begin);
        }
        #[allow(clippy::float_cmp)]
        if !bump.is_finite() || bump <= 0.0 || bump == 1.0 {
            return Err(ConfigError::Bump);
        }
        if !edge_limit.is_finite() || edge_limit <= 0.0 {
            return Err(ConfigError::EdgeLimit);
        }

        Ok(Self {
            begin,
            bump,
            max_rounds,
            edge_limit,
        })
    }

    /// Returns the first probe variate.
    #[must_use]
    pub fn begin(&self) -> f64 {
        self.begin
    }

    /// Returns the factor applied to the probe variate after each round.
    #[must_use]
    pub fn bump(&self) -> f64 {
        self.bump
    }

    /// Returns the maximum number of probe rounds.
    #[must_use]
    pub fn max_rounds(&self) -> usize {
        self.max_rounds
    }

    /// Returns the curvature safety margin.
    #[must_use]
    pub fn edge_limit(&self) -> f64 {
        self.edge_limit
    }
}

/// Caps on the work a single search may perform.
///
/// Each search starts fresh counters bounded by these limits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Budget {
    /// Maximum number of search rounds.
    pub max_iters: usize,

    /// Maximum number of objective evaluations, cached or not.
    pub max_evals: usize,

    /// Maximum number of derivative evaluations.
    pub max_derivs: usize,
}

impl Default for Budget {
    fn default() -> Self {
        Self {
            max_iters: 1_000,
            max_evals: 10_000,
            max_derivs: 10_000,
        }
    }
}

impl Budget {
    /// A budget that never runs out in practice.
    #[must_use]
    pub fn unlimited() -> Self {
        Self {
            max_iters: usize::MAX,
            max_evals: usize::MAX,
            max_derivs: usize::MAX,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let bracket = BracketConfig::default();
        assert_eq!(
            BracketConfig::new(
                bracket.start(),
                bracket.width(),
                bracket.expansion(),
                bracket.max_expansions()
            ),
            Ok(bracket)
        );

        let zone = ZoneConfig::default();
        assert_eq!(
            ZoneConfig::new(
                zone.begin(),
                zone.bump(),
                zone.max_rounds(),
                zone.edge_limit()
            ),
            Ok(zone)
        );
    }

    #[test]
    fn bracket_config_rejects_bad_values() {
        assert_eq!(
            BracketConfig::new(f64::NAN, 1.0, 2.0, 10),
            Err(ConfigError::Start)
        );
        assert_eq!(
            BracketConfig::new(0.0, 0.0, 2.0, 10),
            Err(ConfigError::Width)
        );
        assert_eq!(
            BracketConfig::new(0.0, -1.0, 2.0, 10),
            Err(ConfigError::Width)
        );
        assert_eq!(
            BracketConfig::new(0.0, 1.0, 1.0, 10),
            Err(ConfigError::Expansion)
        );
        assert_eq!(
            BracketConfig::new(0.0, 1.0, f64::INFINITY, 10),
            Err(ConfigError::Expansion)
        );
    }

    #[test]
    fn zone_config_rejects_bad_values() {
        assert_eq!(
            ZoneConfig::new(0.0, 2.0, 10, 0.1),
            Err(ConfigError::Begin)
        );
        assert_eq!(
            ZoneConfig::new(1.0, 1.0, 10, 0.1),
            Err(ConfigError::Bump)
        );
        assert_eq!(
            ZoneConfig::new(1.0, -2.0, 10, 0.1),
            Err(ConfigError::Bump)
        );
        assert_eq!(
            ZoneConfig::new(1.0, 2.0, 10, 0.0),
            Err(ConfigError::EdgeLimit)
        );
    }

    #[test]
    fn zone_config_allows_shrinking_bump() {
        let config = ZoneConfig::new(100.0, 0.5, 10, 0.1).expect("valid config");
        assert_eq!(config.bump(), 0.5);
    }
}
