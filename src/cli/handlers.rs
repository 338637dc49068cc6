// src/cli/handlers.rs
//! Command handlers: read, build, rank, report.

use crate::cli::args::RankArgs;
use crate::config::Config;
use crate::exit::EdgeRankExit;
use crate::graph::Graph;
use crate::input::{self, InputFormat};
use crate::rank::RankEngine;
use crate::reporting::{self, RankReport};
use anyhow::{Context, Result};
use std::path::Path;
use std::time::Instant;
use tracing::info;

/// Handles the rank command.
///
/// # Errors
/// Returns error if the input cannot be read or parsed, the graph is empty,
/// or the rank parameters are invalid.
pub fn handle_rank(args: &RankArgs, mut config: Config) -> Result<EdgeRankExit> {
    apply_overrides(args, &mut config);
    let format = args.format.unwrap_or(config.output.format);

    let before_read = Instant::now();
    let graph = load_graph(&args.file, format)?;
    let read = before_read.elapsed();

    let before_process = Instant::now();
    let outcome = RankEngine::rank(&graph, &config.rank.to_rank_config())
        .with_context(|| format!("Failed to rank {}", args.file.display()))?;
    let process = before_process.elapsed();

    info!(
        nodes = graph.node_count(),
        iterations = outcome.iterations(),
        converged = outcome.is_converged(),
        "ranking finished"
    );

    let report = RankReport::new(
        args.file.clone(),
        format,
        &graph,
        &outcome,
        read,
        process,
        config.output.top,
    );

    if args.json {
        reporting::print_json(&report)?;
    } else {
        reporting::print_ranks(&report, config.output.precision);
    }

    Ok(if outcome.is_converged() {
        EdgeRankExit::Success
    } else {
        EdgeRankExit::NotConverged
    })
}

/// Handles the graph command.
///
/// # Errors
/// Returns error if the input cannot be read or parsed.
pub fn handle_graph(
    file: &Path,
    format: Option<InputFormat>,
    json: bool,
    config: &Config,
) -> Result<EdgeRankExit> {
    let graph = load_graph(file, format.unwrap_or(config.output.format))?;
    if json {
        reporting::print_json(&graph)?;
    } else {
        reporting::print_graph(&graph);
    }
    Ok(EdgeRankExit::Success)
}

/// Handles the config command.
///
/// # Errors
/// Returns error if the configuration cannot be serialized.
pub fn handle_config(config: &Config) -> Result<EdgeRankExit> {
    let rendered = config.to_toml().context("Failed to serialize configuration")?;
    print!("{rendered}");
    Ok(EdgeRankExit::Success)
}

fn load_graph(file: &Path, format: InputFormat) -> Result<Graph> {
    let records = input::read_records(file, format)
        .with_context(|| format!("Failed to read edge list {}", file.display()))?;
    Ok(Graph::build(&records))
}

/// Command-line flags win over file settings.
pub fn apply_overrides(args: &RankArgs, config: &mut Config) {
    if let Some(epsilon) = args.epsilon {
        config.rank.epsilon = epsilon;
    }
    if let Some(max) = args.max_iterations {
        config.rank.max_iterations = max;
    }
    if let Some(damping) = args.damping {
        config.rank.damping = Some(damping);
    }
    if let Some(dangling) = args.dangling {
        config.rank.dangling = dangling;
    }
    if let Some(precision) = args.precision {
        config.output.precision = precision;
    }
    if args.top.is_some() {
        config.output.top = args.top;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rank::DanglingPolicy;

    #[test]
    fn flags_override_file_settings() {
        let mut config = Config::new();
        config.rank.epsilon = 0.5;
        config.output.top = Some(3);

        let args = RankArgs {
            epsilon: Some(0.01),
            max_iterations: Some(0),
            damping: Some(0.85),
            dangling: Some(DanglingPolicy::Drop),
            precision: Some(6),
            ..RankArgs::default()
        };
        apply_overrides(&args, &mut config);

        assert!((config.rank.epsilon - 0.01).abs() < f64::EPSILON);
        assert_eq!(config.rank.max_iterations, 0);
        assert_eq!(config.rank.damping, Some(0.85));
        assert_eq!(config.rank.dangling, DanglingPolicy::Drop);
        assert_eq!(config.output.precision, 6);
        assert_eq!(config.output.top, Some(3));
        assert_eq!(config.rank.to_rank_config().max_iterations, None);
    }
}
