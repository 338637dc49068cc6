// src/rank/settings.rs
//! Tuning knobs for the rank engine.

use crate::error::{RankError, Result};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Default convergence threshold on the L1 change of the rank vector.
pub const DEFAULT_EPSILON: f64 = 0.1;
/// Default iteration cap.
pub const DEFAULT_MAX_ITERATIONS: usize = 10_000;

/// Probability of following a link rather than teleporting.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Damping {
    /// `1 - 1/N`, where N is the node count.
    #[default]
    GraphSize,
    /// A constant probability, e.g. `0.85`.
    Fixed(f64),
}

impl Damping {
    /// Resolves the probability for a graph of `node_count` nodes.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn factor(self, node_count: usize) -> f64 {
        match self {
            Self::GraphSize => 1.0 - (1.0 / node_count as f64),
            Self::Fixed(p) => p,
        }
    }

    /// Builds from an optional fixed value; `None` selects the graph-size formula.
    #[must_use]
    pub fn from_option(value: Option<f64>) -> Self {
        value.map_or(Self::GraphSize, Self::Fixed)
    }
}

/// What happens to the rank held by nodes with no out-edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DanglingPolicy {
    /// Spread it uniformly over all nodes so total rank stays 1.
    #[default]
    Redistribute,
    /// Let it leak; such nodes contribute nothing through links.
    Drop,
}

/// Engine parameters.
///
/// The default `dangling` policy is `Redistribute`, which departs from the bare
/// teleport-plus-link formula on graphs containing sinks: their rank is spread
/// over every node instead of being lost, so totals stay at 1. Use
/// `DanglingPolicy::Drop` to get the bare formula.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankConfig {
    pub epsilon: f64,
    /// `None` iterates until convergence with no cap.
    pub max_iterations: Option<usize>,
    pub damping: Damping,
    pub dangling: DanglingPolicy,
}

impl Default for RankConfig {
    fn default() -> Self {
        Self {
            epsilon: DEFAULT_EPSILON,
            max_iterations: Some(DEFAULT_MAX_ITERATIONS),
            damping: Damping::default(),
            dangling: DanglingPolicy::default(),
        }
    }
}

impl RankConfig {
    /// Rejects parameters the engine cannot iterate with.
    ///
    /// # Errors
    /// Returns error on a non-positive epsilon, a zero cap, or a fixed damping outside [0, 1].
    pub fn validate(&self) -> Result<()> {
        if !(self.epsilon > 0.0) {
            return Err(RankError::InvalidEpsilon(self.epsilon));
        }
        if self.max_iterations == Some(0) {
            return Err(RankError::InvalidIterationCap);
        }
        if let Damping::Fixed(p) = self.damping {
            if !(0.0..=1.0).contains(&p) {
                return Err(RankError::InvalidDamping(p));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn graph_size_damping_depends_on_n() {
        assert!((Damping::GraphSize.factor(4) - 0.75).abs() < 1e-12);
        assert!(Damping::GraphSize.factor(1).abs() < 1e-12);
        assert!((Damping::Fixed(0.85).factor(4) - 0.85).abs() < 1e-12);
    }

    #[test]
    fn validate_rejects_bad_values() {
        let bad_eps = RankConfig { epsilon: 0.0, ..RankConfig::default() };
        assert!(matches!(bad_eps.validate(), Err(RankError::InvalidEpsilon(_))));

        let nan_eps = RankConfig { epsilon: f64::NAN, ..RankConfig::default() };
        assert!(nan_eps.validate().is_err());

        let bad_cap = RankConfig { max_iterations: Some(0), ..RankConfig::default() };
        assert!(matches!(bad_cap.validate(), Err(RankError::InvalidIterationCap)));

        let bad_damping = RankConfig { damping: Damping::Fixed(1.5), ..RankConfig::default() };
        assert!(matches!(bad_damping.validate(), Err(RankError::InvalidDamping(_))));

        assert!(RankConfig::default().validate().is_ok());
    }

    #[test]
    fn defaults_match_documented_behavior() {
        let c = RankConfig::default();
        assert_eq!(c.damping, Damping::GraphSize);
        assert_eq!(c.dangling, DanglingPolicy::Redistribute);
        assert_eq!(c.max_iterations, Some(DEFAULT_MAX_ITERATIONS));
    }
}
