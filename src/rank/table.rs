// src/rank/table.rs
//! Rank tables and the engine's tagged result.

use serde::Serialize;
use std::collections::BTreeMap;

/// Node label -> importance score.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct RankTable {
    scores: BTreeMap<String, f64>,
}

impl RankTable {
    #[must_use]
    pub fn get(&self, label: &str) -> Option<f64> {
        self.scores.get(label).copied()
    }

    /// Sum of all scores; 1.0 when no rank mass was dropped.
    #[must_use]
    pub fn total(&self) -> f64 {
        self.scores.values().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.scores.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// Entries by score descending; equal scores fall back to label order.
    #[must_use]
    pub fn sorted(&self) -> Vec<(&str, f64)> {
        let mut ranked: Vec<_> = self.iter().collect();
        ranked.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        ranked
    }
}

impl FromIterator<(String, f64)> for RankTable {
    fn from_iter<T: IntoIterator<Item = (String, f64)>>(iter: T) -> Self {
        Self {
            scores: iter.into_iter().collect(),
        }
    }
}

/// How the engine stopped.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum RankOutcome {
    /// The L1 change fell below epsilon on iteration `iterations`.
    Converged { ranks: RankTable, iterations: usize },
    /// The cap was hit first; `ranks` is the last table computed.
    MaxIterationsReached { ranks: RankTable, iterations: usize },
}

impl RankOutcome {
    #[must_use]
    pub fn ranks(&self) -> &RankTable {
        match self {
            Self::Converged { ranks, .. } | Self::MaxIterationsReached { ranks, .. } => ranks,
        }
    }

    #[must_use]
    pub fn iterations(&self) -> usize {
        match self {
            Self::Converged { iterations, .. } | Self::MaxIterationsReached { iterations, .. } => {
                *iterations
            }
        }
    }

    #[must_use]
    pub fn is_converged(&self) -> bool {
        matches!(self, Self::Converged { .. })
    }
}
