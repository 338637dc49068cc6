// src/input/snap.rs
//! Tab separated SNAP edge lists. No values; every record is unvalued.

use crate::graph::EdgeRecord;

const COLUMNS: usize = 2;

/// Parses `label_a <TAB> label_b`; lines starting with `#` yield `None`.
pub(super) fn parse_line(line: &str) -> Result<Option<EdgeRecord>, String> {
    let cleaned = super::strip_quotes(line);
    if cleaned.starts_with('#') {
        return Ok(None);
    }

    let cols: Vec<&str> = cleaned.split('\t').take(COLUMNS).collect();
    match cols.as_slice() {
        [a, b] => Ok(Some(EdgeRecord::unvalued(a, b))),
        _ => Err(format!("expected {COLUMNS} tab separated columns")),
    }
}
