use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::input::InputFormat;
use crate::rank::DanglingPolicy;

#[derive(Parser)]
#[command(name = "edgerank", version, about = "PageRank scores for edge list files")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
    /// Log filter, e.g. `debug` or `edgerank=trace` (RUST_LOG wins if set)
    #[arg(long, global = true, default_value = "warn")]
    pub log_level: String,
    /// Read settings from this file instead of ./edgerank.toml
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Rank every node of an edge list and print the ordering
    Rank {
        #[arg(value_name = "FILE")]
        file: PathBuf,
        /// Input layout (small = comma separated with values, snap = tab separated)
        #[arg(value_enum, ignore_case = true)]
        format: Option<InputFormat>,
        /// Emit a JSON report instead of text
        #[arg(long)]
        json: bool,
        /// Only print the N highest ranked nodes
        #[arg(long, short, value_name = "N")]
        top: Option<usize>,
        /// Stop once the summed rank change is below this value
        #[arg(long)]
        epsilon: Option<f64>,
        /// Give up after this many iterations (0 = no cap)
        #[arg(long)]
        max_iterations: Option<usize>,
        /// Fixed damping probability instead of 1 - 1/N
        #[arg(long)]
        damping: Option<f64>,
        /// Treatment of rank held by nodes without out-edges
        #[arg(long, value_enum)]
        dangling: Option<DanglingPolicy>,
        /// Decimal places for scores
        #[arg(long)]
        precision: Option<usize>,
    },
    /// Print each vertex followed by the edges it touches
    Graph {
        #[arg(value_name = "FILE")]
        file: PathBuf,
        #[arg(value_enum, ignore_case = true)]
        format: Option<InputFormat>,
        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Print the effective configuration as TOML
    Config,
}

/// Arguments for the rank command (used by handlers)
#[derive(Debug, Clone, Default)]
pub struct RankArgs {
    pub file: PathBuf,
    pub format: Option<InputFormat>,
    pub json: bool,
    pub top: Option<usize>,
    pub epsilon: Option<f64>,
    pub max_iterations: Option<usize>,
    pub damping: Option<f64>,
    pub dangling: Option<DanglingPolicy>,
    pub precision: Option<usize>,
}
