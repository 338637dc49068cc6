// src/graph/types.rs
//! Records, edges and the label-keyed incidence graph.

use serde::Serialize;
use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::hash::{Hash, Hasher};

/// One observed connection between two labels, direction not yet resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgeRecord {
    pub labels: (String, String),
    pub values: (i64, i64),
}

impl EdgeRecord {
    /// Creates a record, trimming surrounding whitespace from both labels.
    #[must_use]
    pub fn new(label_a: &str, label_b: &str, value_a: i64, value_b: i64) -> Self {
        Self {
            labels: (label_a.trim().to_string(), label_b.trim().to_string()),
            values: (value_a, value_b),
        }
    }

    /// A record whose direction carries no information (both values zero).
    #[must_use]
    pub fn unvalued(label_a: &str, label_b: &str) -> Self {
        Self::new(label_a, label_b, 0, 0)
    }

    #[must_use]
    pub fn is_ambiguous(&self) -> bool {
        self.values == (0, 0)
    }
}

/// How an edge participates in rank propagation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Rank flows from `from` to `to` only.
    Directed,
    /// Both endpoints link to each other. `from`/`to` keep record order.
    Ambiguous,
}

/// A resolved edge. Identity is the ordered `(from, to)` pair alone, so a
/// second record resolving to the same pair collapses into the first edge
/// whatever its direction.
#[derive(Debug, Clone, Serialize)]
pub struct Edge {
    pub from: String,
    pub to: String,
    pub direction: Direction,
}

impl Edge {
    #[must_use]
    pub fn directed(from: &str, to: &str) -> Self {
        Self {
            from: from.to_string(),
            to: to.to_string(),
            direction: Direction::Directed,
        }
    }

    #[must_use]
    pub fn ambiguous(from: &str, to: &str) -> Self {
        Self {
            from: from.to_string(),
            to: to.to_string(),
            direction: Direction::Ambiguous,
        }
    }

    /// The canonical `(from, to)` pair.
    #[must_use]
    pub fn pair(&self) -> (&str, &str) {
        (self.from.as_str(), self.to.as_str())
    }

    /// True if rank leaves `node` along this edge.
    #[must_use]
    pub fn is_out_edge_of(&self, node: &str) -> bool {
        self.from == node || (self.direction == Direction::Ambiguous && self.to == node)
    }

    /// True if rank arrives at `node` along this edge.
    #[must_use]
    pub fn is_in_edge_of(&self, node: &str) -> bool {
        self.to == node || (self.direction == Direction::Ambiguous && self.from == node)
    }

    /// The endpoint that feeds rank into `node`, if this is one of its in-edges.
    #[must_use]
    pub fn source_for(&self, node: &str) -> Option<&str> {
        if self.to == node {
            Some(self.from.as_str())
        } else if self.direction == Direction::Ambiguous && self.from == node {
            Some(self.to.as_str())
        } else {
            None
        }
    }
}

impl PartialEq for Edge {
    fn eq(&self, other: &Self) -> bool {
        self.pair() == other.pair()
    }
}

impl Eq for Edge {}

impl PartialOrd for Edge {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Edge {
    fn cmp(&self, other: &Self) -> Ordering {
        self.pair().cmp(&other.pair())
    }
}

impl Hash for Edge {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.pair().hash(state);
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.direction {
            Direction::Directed => write!(f, "({} -> {})", self.from, self.to),
            Direction::Ambiguous => write!(f, "({} <-> {})", self.from, self.to),
        }
    }
}

/// Node label -> every edge touching that node (in- and out-edges together).
///
/// Invariant: an edge `(a, b)` is stored under both `a` and `b`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Graph {
    pub(crate) nodes: BTreeMap<String, BTreeSet<Edge>>,
}

impl Graph {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of distinct edges in the graph.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.nodes
            .values()
            .flatten()
            .collect::<BTreeSet<_>>()
            .len()
    }

    #[must_use]
    pub fn contains(&self, label: &str) -> bool {
        self.nodes.contains_key(label)
    }

    /// Node labels in ascending order.
    pub fn nodes(&self) -> impl Iterator<Item = &str> {
        self.nodes.keys().map(String::as_str)
    }

    /// All edges incident to `label`.
    #[must_use]
    pub fn edges(&self, label: &str) -> Option<&BTreeSet<Edge>> {
        self.nodes.get(label)
    }

    /// Edges along which rank leaves `label`.
    #[must_use]
    pub fn out_edges(&self, label: &str) -> Vec<&Edge> {
        self.edges(label)
            .map(|set| set.iter().filter(|e| e.is_out_edge_of(label)).collect())
            .unwrap_or_default()
    }

    /// Edges along which rank arrives at `label`.
    #[must_use]
    pub fn in_edges(&self, label: &str) -> Vec<&Edge> {
        self.edges(label)
            .map(|set| set.iter().filter(|e| e.is_in_edge_of(label)).collect())
            .unwrap_or_default()
    }

    /// Iterates `(label, incident edges)` in label order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &BTreeSet<Edge>)> {
        self.nodes.iter().map(|(k, v)| (k.as_str(), v))
    }
}
