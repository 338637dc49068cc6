// src/input/small.rs
//! Comma separated edge lists with one value per label.

use crate::graph::EdgeRecord;

const COLUMNS: usize = 4;

/// Parses `label_a, value_a, label_b, value_b`; extra columns are ignored.
pub(super) fn parse_line(line: &str) -> Result<Option<EdgeRecord>, String> {
    let cleaned = super::strip_quotes(line);
    let cols: Vec<&str> = cleaned.split(',').take(COLUMNS).collect();
    if cols.len() < COLUMNS {
        return Err(format!("expected {COLUMNS} columns, found {}", cols.len()));
    }

    let value_a = parse_value(cols[1])?;
    let value_b = parse_value(cols[3])?;
    Ok(Some(EdgeRecord::new(cols[0], cols[2], value_a, value_b)))
}

fn parse_value(raw: &str) -> Result<i64, String> {
    raw.trim()
        .parse()
        .map_err(|_| format!("'{}' is not an integer", raw.trim()))
}
