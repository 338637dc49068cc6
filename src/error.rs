// src/error.rs
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RankError {
    #[error("I/O error: {source} (path: {path})")]
    Io {
        source: std::io::Error,
        path: PathBuf,
    },

    #[error("Malformed record on line {line}: {reason}")]
    Parse { line: usize, reason: String },

    #[error("Cannot rank an empty graph")]
    EmptyGraph,

    #[error("Damping factor must lie in [0, 1], got {0}")]
    InvalidDamping(f64),

    #[error("Convergence epsilon must be positive, got {0}")]
    InvalidEpsilon(f64),

    #[error("Iteration cap must be at least 1")]
    InvalidIterationCap,

    #[error("Invalid configuration in {path}: {reason}")]
    Config { path: PathBuf, reason: String },
}

impl RankError {
    /// True for failures caused by the input data or parameters rather than the environment.
    #[must_use]
    pub fn is_input_error(&self) -> bool {
        !matches!(self, Self::Io { .. })
    }
}

pub type Result<T> = std::result::Result<T, RankError>;

// Allow `?` on std::io::Error by converting to RankError::Io with unknown path.
impl From<std::io::Error> for RankError {
    fn from(source: std::io::Error) -> Self {
        RankError::Io {
            source,
            path: PathBuf::from("<unknown>"),
        }
    }
}
