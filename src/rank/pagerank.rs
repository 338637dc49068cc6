// src/rank/pagerank.rs
//! `PageRank` power iteration with teleportation.

use std::collections::BTreeMap;

use tracing::{debug, trace, warn};

use super::settings::{DanglingPolicy, RankConfig};
use super::table::{RankOutcome, RankTable};
use crate::error::{RankError, Result};
use crate::graph::Graph;

/// Runs power iteration over `graph` until the L1 rank change drops below
/// `config.epsilon` or the iteration cap is reached.
///
/// # Errors
/// Returns `EmptyGraph` for a graph with no nodes, or a validation error for bad settings.
pub fn compute(graph: &Graph, config: &RankConfig) -> Result<RankOutcome> {
    config.validate()?;
    if graph.is_empty() {
        return Err(RankError::EmptyGraph);
    }

    let topology = Topology::from_graph(graph);
    let damping = config.damping.factor(topology.len());
    let mut prev = Snapshot::uniform(topology.len());
    let mut iterations = 0usize;

    debug!(
        target: "edgerank.rank",
        nodes = topology.len(),
        damping,
        epsilon = config.epsilon,
        "starting power iteration"
    );

    loop {
        iterations += 1;
        let curr = iterate_once(&topology, &prev, damping, config.dangling);
        let delta = curr.l1_distance(&prev);
        trace!(target: "edgerank.rank", iteration = iterations, delta, "iteration complete");

        if delta < config.epsilon {
            debug!(target: "edgerank.rank", iterations, delta, "converged");
            return Ok(RankOutcome::Converged {
                ranks: topology.table(curr),
                iterations,
            });
        }

        if config.max_iterations.is_some_and(|cap| iterations >= cap) {
            warn!(target: "edgerank.rank", iterations, delta, "iteration cap reached before convergence");
            return Ok(RankOutcome::MaxIterationsReached {
                ranks: topology.table(curr),
                iterations,
            });
        }

        prev = curr;
    }
}

/// Index-based view of the graph, computed once before iterating.
struct Topology<'g> {
    labels: Vec<&'g str>,
    out_degree: Vec<usize>,
    /// One entry per in-edge: the index of the node feeding rank in.
    in_sources: Vec<Vec<usize>>,
}

impl<'g> Topology<'g> {
    fn from_graph(graph: &'g Graph) -> Self {
        let labels: Vec<&str> = graph.nodes().collect();
        let index: BTreeMap<&str, usize> =
            labels.iter().enumerate().map(|(i, l)| (*l, i)).collect();

        let mut out_degree = vec![0; labels.len()];
        let mut in_sources = vec![Vec::new(); labels.len()];

        for (v, (label, edges)) in graph.iter().enumerate() {
            for edge in edges {
                if edge.is_out_edge_of(label) {
                    out_degree[v] += 1;
                }
                if let Some(j) = edge.source_for(label).and_then(|s| index.get(s)) {
                    in_sources[v].push(*j);
                }
            }
        }

        Self {
            labels,
            out_degree,
            in_sources,
        }
    }

    fn len(&self) -> usize {
        self.labels.len()
    }

    fn table(&self, snapshot: Snapshot) -> RankTable {
        self.labels
            .iter()
            .zip(snapshot.0)
            .map(|(l, r)| ((*l).to_string(), r))
            .collect()
    }
}

/// An immutable rank vector for one iteration, indexed like `Topology::labels`.
struct Snapshot(Vec<f64>);

impl Snapshot {
    #[allow(clippy::cast_precision_loss)]
    fn uniform(n: usize) -> Self {
        Self(vec![1.0 / n as f64; n])
    }

    fn l1_distance(&self, other: &Self) -> f64 {
        self.0
            .iter()
            .zip(&other.0)
            .map(|(a, b)| (a - b).abs())
            .sum()
    }
}

#[allow(clippy::cast_precision_loss)]
fn iterate_once(
    topology: &Topology<'_>,
    prev: &Snapshot,
    probability: f64,
    dangling: DanglingPolicy,
) -> Snapshot {
    let n = topology.len() as f64;
    let teleport = (1.0 - probability) * (1.0 / n);
    let leaked = match dangling {
        DanglingPolicy::Redistribute => probability * dangling_mass(topology, prev) / n,
        DanglingPolicy::Drop => 0.0,
    };

    let next = (0..topology.len())
        .map(|v| teleport + leaked + probability * compute_incoming_rank(v, topology, prev))
        .collect();
    Snapshot(next)
}

#[allow(clippy::cast_precision_loss)]
fn compute_incoming_rank(target: usize, topology: &Topology<'_>, prev: &Snapshot) -> f64 {
    topology.in_sources[target]
        .iter()
        .filter_map(|&j| match topology.out_degree[j] {
            0 => None,
            deg => Some(prev.0[j] / deg as f64),
        })
        .sum()
}

fn dangling_mass(topology: &Topology<'_>, prev: &Snapshot) -> f64 {
    topology
        .out_degree
        .iter()
        .zip(&prev.0)
        .filter(|(deg, _)| **deg == 0)
        .map(|(_, r)| r)
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::EdgeRecord;

    #[test]
    fn topology_counts_ambiguous_edges_both_ways() {
        let records = vec![EdgeRecord::unvalued("A", "B")];
        let graph = Graph::build(&records);
        let t = Topology::from_graph(&graph);
        assert_eq!(t.out_degree, vec![1, 1]);
        assert_eq!(t.in_sources, vec![vec![1], vec![0]]);
    }

    #[test]
    fn topology_directed_self_loop_counts_once() {
        let records = vec![EdgeRecord::new("A", "B", 2, 2)];
        let graph = Graph::build(&records);
        let t = Topology::from_graph(&graph);
        assert_eq!(t.labels, vec!["A", "B"]);
        assert_eq!(t.out_degree, vec![1, 0]);
        assert_eq!(t.in_sources, vec![vec![0], vec![]]);
    }

    #[test]
    fn snapshot_distance_is_l1() {
        let a = Snapshot(vec![0.5, 0.5]);
        let b = Snapshot(vec![0.25, 0.75]);
        assert!((a.l1_distance(&b) - 0.5).abs() < 1e-12);
    }
}
