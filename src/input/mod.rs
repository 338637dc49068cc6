// src/input/mod.rs
//! Edge list readers for the two supported file layouts.

pub mod small;
pub mod snap;

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{RankError, Result};
use crate::graph::EdgeRecord;

/// Layout of an edge list file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputFormat {
    /// Comma separated: `label_a, value_a, label_b, value_b`.
    #[default]
    Small,
    /// Tab separated SNAP dump: `label_a <TAB> label_b`, `#` comments.
    Snap,
}

/// Reads every record from the file at `path`.
///
/// # Errors
/// Returns error if the file cannot be opened or a line is malformed.
pub fn read_records(path: &Path, format: InputFormat) -> Result<Vec<EdgeRecord>> {
    let file = File::open(path).map_err(|source| RankError::Io {
        source,
        path: path.to_path_buf(),
    })?;
    let records = parse_records(BufReader::new(file), format)?;
    debug!(
        target: "edgerank.input",
        path = %path.display(),
        ?format,
        records = records.len(),
        "records loaded"
    );
    Ok(records)
}

/// Parses records from any buffered reader. Blank lines are skipped.
///
/// # Errors
/// Returns error on a read failure or a malformed line (1-based line number).
pub fn parse_records<R: BufRead>(reader: R, format: InputFormat) -> Result<Vec<EdgeRecord>> {
    let mut records = Vec::new();
    for (i, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let parsed = match format {
            InputFormat::Small => small::parse_line(&line),
            InputFormat::Snap => snap::parse_line(&line),
        };
        match parsed {
            Ok(Some(record)) => records.push(record),
            Ok(None) => {}
            Err(reason) => return Err(RankError::Parse { line: i + 1, reason }),
        }
    }
    Ok(records)
}

/// Removes double quotes anywhere in the line.
fn strip_quotes(line: &str) -> String {
    line.replace('"', "")
}
