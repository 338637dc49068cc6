// src/graph/builder.rs
//! Graph construction: direction inference and symmetric edge insertion.

use super::types::{Edge, EdgeRecord, Graph};
use tracing::debug;

impl Graph {
    /// Builds a graph from records in order.
    #[must_use]
    pub fn build<'a, I>(records: I) -> Self
    where
        I: IntoIterator<Item = &'a EdgeRecord>,
    {
        let mut graph = Self::new();
        let mut count = 0usize;
        for record in records {
            graph.insert(record);
            count += 1;
        }

        debug!(
            target: "edgerank.graph",
            records = count,
            nodes = graph.node_count(),
            "graph built"
        );
        graph
    }

    /// Adds both labels as nodes and stores the resolved edge under each endpoint.
    pub fn insert(&mut self, record: &EdgeRecord) {
        let (a, b) = (&record.labels.0, &record.labels.1);
        self.nodes.entry(a.clone()).or_default();
        self.nodes.entry(b.clone()).or_default();

        let edge = resolve(record);
        self.attach(edge);
    }

    /// Adds an isolated node; a no-op if the label is already present.
    pub fn add_node(&mut self, label: &str) {
        self.nodes.entry(label.trim().to_string()).or_default();
    }

    /// An edge whose pair is already stored is ignored; the first insertion wins.
    fn attach(&mut self, edge: Edge) {
        if edge.from != edge.to {
            self.nodes
                .entry(edge.to.clone())
                .or_default()
                .insert(edge.clone());
        }
        self.nodes.entry(edge.from.clone()).or_default().insert(edge);
    }
}

/// Resolves a record into an edge.
///
/// Two zero values give an ambiguous edge in record order. Otherwise the
/// smaller value marks the source and the larger the target; on a tie the
/// first label takes both roles.
#[must_use]
pub fn resolve(record: &EdgeRecord) -> Edge {
    let (a, b) = (&record.labels.0, &record.labels.1);
    if record.is_ambiguous() {
        return Edge::ambiguous(a, b);
    }

    let (va, vb) = record.values;
    let to = if vb > va { b } else { a };
    let from = if vb < va { b } else { a };
    Edge::directed(from, to)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Direction;

    #[test]
    fn larger_value_is_target() {
        let e = resolve(&EdgeRecord::new("A", "B", 1, 5));
        assert_eq!(e.pair(), ("A", "B"));
        let e = resolve(&EdgeRecord::new("A", "B", 5, 1));
        assert_eq!(e.pair(), ("B", "A"));
        assert_eq!(e.direction, Direction::Directed);
    }

    #[test]
    fn zero_values_keep_record_order() {
        let e = resolve(&EdgeRecord::unvalued("B", "A"));
        assert_eq!(e.pair(), ("B", "A"));
        assert_eq!(e.direction, Direction::Ambiguous);
    }

    #[test]
    fn single_zero_is_not_ambiguous() {
        let e = resolve(&EdgeRecord::new("A", "B", 0, 3));
        assert_eq!(e.pair(), ("A", "B"));
        assert_eq!(e.direction, Direction::Directed);
    }

    #[test]
    fn nonzero_tie_gives_first_label_self_loop() {
        let e = resolve(&EdgeRecord::new("A", "B", 4, 4));
        assert_eq!(e.pair(), ("A", "A"));
    }

    #[test]
    fn negative_values_compare_numerically() {
        let e = resolve(&EdgeRecord::new("A", "B", -2, -7));
        assert_eq!(e.pair(), ("B", "A"));
    }
}
