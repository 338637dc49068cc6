// src/rank/mod.rs
//! Rank Engine: converged importance scores for a built graph.

pub mod pagerank;
pub mod settings;
pub mod table;

pub use settings::{Damping, DanglingPolicy, RankConfig, DEFAULT_EPSILON, DEFAULT_MAX_ITERATIONS};
pub use table::{RankOutcome, RankTable};

use crate::error::Result;
use crate::graph::{EdgeRecord, Graph};

/// Orchestrates graph construction and ranking.
pub struct RankEngine;

impl RankEngine {
    /// Ranks an already built graph.
    ///
    /// # Errors
    /// Returns error if the graph is empty or the config is invalid.
    pub fn rank(graph: &Graph, config: &RankConfig) -> Result<RankOutcome> {
        pagerank::compute(graph, config)
    }

    /// Builds the graph from `records` and ranks it.
    ///
    /// # Errors
    /// Returns error if no records were given or the config is invalid.
    pub fn rank_records(records: &[EdgeRecord], config: &RankConfig) -> Result<RankOutcome> {
        let graph = Graph::build(records);
        pagerank::compute(&graph, config)
    }
}
