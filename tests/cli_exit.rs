// tests/cli_exit.rs - Exit code tests
use edgerank_core::cli::args::Commands;
use edgerank_core::cli::dispatch::{execute, exit_for};
use edgerank_core::error::RankError;
use edgerank_core::exit::EdgeRankExit;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn write(d: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = d.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

fn rank_cmd(file: PathBuf, max_iterations: Option<usize>) -> Commands {
    Commands::Rank {
        file,
        format: None,
        json: false,
        top: None,
        epsilon: None,
        max_iterations,
        damping: None,
        dangling: None,
        precision: None,
    }
}

#[test]
fn test_exit_0_converged() {
    let d = tempfile::tempdir().unwrap();
    let file = write(&d, "cycle.csv", "A,1,B,5\nB,1,C,5\nC,1,A,5\n");
    let config = write(&d, "edgerank.toml", "");
    let exit = execute(rank_cmd(file, None), Some(&config)).unwrap();
    assert_eq!(exit, EdgeRankExit::Success);
}

#[test]
fn test_exit_3_not_converged() {
    let d = tempfile::tempdir().unwrap();
    let file = write(&d, "pair.csv", "A,1,B,2\n");
    let config = write(&d, "edgerank.toml", "[rank]\nepsilon = 1e-12\n");
    let exit = execute(rank_cmd(file, Some(1)), Some(&config)).unwrap();
    assert_eq!(exit, EdgeRankExit::NotConverged);
}

#[test]
fn test_exit_2_empty_input() {
    let d = tempfile::tempdir().unwrap();
    let file = write(&d, "empty.csv", "\n");
    let config = write(&d, "edgerank.toml", "");
    let err = execute(rank_cmd(file, None), Some(&config)).unwrap_err();
    assert!(matches!(err.downcast_ref::<RankError>(), Some(RankError::EmptyGraph)));
    assert_eq!(exit_for(&err), EdgeRankExit::InvalidInput);
}

#[test]
fn test_exit_2_malformed_record() {
    let d = tempfile::tempdir().unwrap();
    let file = write(&d, "bad.csv", "A,one,B,2\n");
    let config = write(&d, "edgerank.toml", "");
    let err = execute(rank_cmd(file, None), Some(&config)).unwrap_err();
    assert_eq!(exit_for(&err), EdgeRankExit::InvalidInput);
}

#[test]
fn test_exit_1_missing_file() {
    let d = tempfile::tempdir().unwrap();
    let config = write(&d, "edgerank.toml", "");
    let err = execute(rank_cmd(d.path().join("missing.csv"), None), Some(&config)).unwrap_err();
    assert_eq!(exit_for(&err), EdgeRankExit::Error);
}

#[test]
fn test_graph_and_config_commands_succeed() {
    let d = tempfile::tempdir().unwrap();
    let file = write(&d, "web.txt", "# comment\n0\t1\n1\t2\n");
    let config = write(&d, "edgerank.toml", "[output]\nformat = \"snap\"\n");
    let graph = Commands::Graph {
        file,
        format: None,
        json: true,
    };
    assert_eq!(execute(graph, Some(&config)).unwrap(), EdgeRankExit::Success);
    assert_eq!(
        execute(Commands::Config, Some(&config)).unwrap(),
        EdgeRankExit::Success
    );
}
