// src/exit.rs
//! Standardized process exit codes for `edgerank`.
//!
//! Provides a stable contract for scripts and automation.

use std::process::Termination;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum EdgeRankExit {
    /// Ranking completed and converged.
    Success = 0,
    /// Generic error (e.g. IO, config).
    Error = 1,
    /// Input validation failed (malformed record, empty graph, bad parameter).
    InvalidInput = 2,
    /// The iteration cap was reached before the rank change fell below epsilon.
    NotConverged = 3,
}

impl EdgeRankExit {
    #[must_use]
    pub fn code(self) -> i32 {
        self as i32
    }
}

impl Termination for EdgeRankExit {
    fn report(self) -> std::process::ExitCode {
        #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
        std::process::ExitCode::from(self.code() as u8)
    }
}
