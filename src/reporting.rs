//! Console and JSON output for rank results and graph dumps.
//!
//! Text output lists one node per line, highest score first, followed by a
//! footer with timing and the iteration count.

use crate::graph::{Edge, Graph};
use crate::input::InputFormat;
use crate::rank::RankOutcome;
use anyhow::Result;
use colored::Colorize;
use serde::Serialize;
use std::path::PathBuf;
use std::time::Duration;

/// One printed row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankEntry {
    pub standing: usize,
    pub label: String,
    pub score: f64,
}

/// Everything the `rank` command reports.
#[derive(Debug, Clone, Serialize)]
pub struct RankReport {
    pub input: PathBuf,
    pub format: InputFormat,
    pub nodes: usize,
    pub edges: usize,
    pub converged: bool,
    pub iterations: usize,
    pub read_ms: f64,
    pub process_ms: f64,
    pub ranks: Vec<RankEntry>,
}

impl RankReport {
    /// Builds the report; `top` limits how many rows are kept.
    #[must_use]
    pub fn new(
        input: PathBuf,
        format: InputFormat,
        graph: &Graph,
        outcome: &RankOutcome,
        read: Duration,
        process: Duration,
        top: Option<usize>,
    ) -> Self {
        let limit = top.unwrap_or(usize::MAX);
        let ranks = outcome
            .ranks()
            .sorted()
            .into_iter()
            .take(limit)
            .enumerate()
            .map(|(i, (label, score))| RankEntry {
                standing: i + 1,
                label: label.to_string(),
                score,
            })
            .collect();

        Self {
            input,
            format,
            nodes: graph.node_count(),
            edges: graph.edge_count(),
            converged: outcome.is_converged(),
            iterations: outcome.iterations(),
            read_ms: millis(read),
            process_ms: millis(process),
            ranks,
        }
    }
}

fn millis(d: Duration) -> f64 {
    d.as_secs_f64() * 1000.0
}

/// Formats a single ranking row.
#[must_use]
pub fn format_entry(entry: &RankEntry, precision: usize) -> String {
    format!(
        "{} {:>30}  PageRank: {:>15.precision$}",
        entry.standing, entry.label, entry.score
    )
}

/// Prints the ranking followed by the timing footer.
pub fn print_ranks(report: &RankReport, precision: usize) {
    for entry in &report.ranks {
        println!("{}", format_entry(entry, precision));
    }

    println!("{}", "-".repeat(63).dimmed());
    println!("{} {}", "Read time (ms):".white(), report.read_ms);
    println!("{} {}", "Process time (ms):".white(), report.process_ms);
    println!("{} {}", "Number of iterations:".white(), report.iterations);

    if !report.converged {
        println!(
            "{}",
            format!(
                "Stopped at the iteration cap after {} iterations without converging.",
                report.iterations
            )
            .yellow()
            .bold()
        );
    }
}

/// Prints each vertex, then every edge it touches.
pub fn print_graph(graph: &Graph) {
    for (label, edges) in graph.iter() {
        println!("{} {}", label.bold(), format_edges(edges.iter()));
    }
}

fn format_edges<'a>(edges: impl Iterator<Item = &'a Edge>) -> String {
    let parts: Vec<String> = edges.map(ToString::to_string).collect();
    format!("{{{}}}", parts.join(", "))
}

/// Prints any serializable value as pretty JSON.
///
/// # Errors
/// Returns error if serialization fails.
pub fn print_json<T: Serialize>(data: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(data)?;
    println!("{json}");
    Ok(())
}
