//! Command dispatch logic extracted from binary to reduce main function size.

use super::args::{Commands, RankArgs};
use super::handlers::{handle_config, handle_graph, handle_rank};
use crate::config::Config;
use crate::error::RankError;
use crate::exit::EdgeRankExit;
use anyhow::Result;
use std::path::Path;

/// Executes the parsed command.
///
/// # Errors
/// Returns error if configuration loading or the command handler fails.
pub fn execute(command: Commands, config_path: Option<&Path>) -> Result<EdgeRankExit> {
    let config = Config::load(config_path)?;

    match command {
        Commands::Rank {
            file,
            format,
            json,
            top,
            epsilon,
            max_iterations,
            damping,
            dangling,
            precision,
        } => handle_rank(
            &RankArgs {
                file,
                format,
                json,
                top,
                epsilon,
                max_iterations,
                damping,
                dangling,
                precision,
            },
            config,
        ),
        Commands::Graph { file, format, json } => handle_graph(&file, format, json, &config),
        Commands::Config => handle_config(&config),
    }
}

/// Chooses the exit code for a failed command.
#[must_use]
pub fn exit_for(error: &anyhow::Error) -> EdgeRankExit {
    match error.downcast_ref::<RankError>() {
        Some(e) if e.is_input_error() => EdgeRankExit::InvalidInput,
        _ => EdgeRankExit::Error,
    }
}
