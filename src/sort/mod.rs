// src/sort/mod.rs
use anyhow::Result;
use std::path::Path;
use tracing::info;

use crate::table::Table;

/// Sentinel substituted for a blank field under a descending key. Sorts below
/// any real year/date value so blanks land at the end once the comparison is
/// reversed.
const EMPTY_DESC: &str = "0000";
/// Sentinel substituted for a blank field under an ascending key.
const EMPTY_ASC: &str = "zzzz";

/// Sort direction for a single key column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Asc,
    Desc,
}

impl Direction {
    /// Only the literal token `"desc"` means descending; anything else
    /// (including unrecognized tokens) behaves as ascending.
    pub fn parse(token: &str) -> Direction {
        if token == "desc" {
            Direction::Desc
        } else {
            Direction::Asc
        }
    }
}

/// One `column:direction` entry of a sort specification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortKey {
    pub column: String,
    pub direction: Direction,
}

/// Ordered list of sort keys; the first entry is the primary key.
pub type SortSpec = Vec<SortKey>;

/// Parse a command-line column specification like `"Year:desc,Name:asc"`.
///
/// Tokens that are blank after trimming (stray commas) are skipped. The column
/// name is the part before the first colon, taken verbatim; the direction is
/// the second part when present and defaults to `asc`. Parts past the second
/// colon are ignored.
pub fn parse_sort_spec(spec_str: &str) -> SortSpec {
    let mut spec = Vec::new();
    for pair in spec_str.split(',') {
        if pair.trim().is_empty() {
            continue;
        }
        let mut parts = pair.split(':');
        let column = parts.next().unwrap_or("").to_string();
        let direction = match parts.next() {
            Some(token) => Direction::parse(token),
            None => Direction::Asc,
        };
        spec.push(SortKey { column, direction });
    }
    spec
}

/// Composite sort key for one row: the trimmed value of each key column in
/// priority order, with blanks replaced by a sentinel chosen per that key's
/// direction so they sort to the end of the output either way.
pub fn build_key(table: &Table, row: &[String], spec: &SortSpec) -> Vec<String> {
    let mut key = Vec::with_capacity(spec.len());
    for sk in spec {
        let raw = table
            .column_index(&sk.column)
            .map(|i| Table::value(row, i))
            .unwrap_or("");
        let trimmed = raw.trim();
        let val = if trimmed.is_empty() {
            match sk.direction {
                Direction::Desc => EMPTY_DESC,
                Direction::Asc => EMPTY_ASC,
            }
        } else {
            trimmed
        };
        key.push(val.to_string());
    }
    key
}

/// Stable-sort the table's rows by their composite keys.
///
/// The overall direction comes from the FIRST key's direction only: a
/// descending primary key reverses the entire composite comparison, secondary
/// keys included. Mixed per-key directions are deliberately not supported;
/// this mirrors the documented contract and must not be "fixed" to
/// independent directions.
pub fn sort_rows(table: &mut Table, spec: &SortSpec) {
    let reverse = spec
        .first()
        .map(|sk| sk.direction == Direction::Desc)
        .unwrap_or(false);

    let rows = std::mem::take(&mut table.rows);
    let mut decorated: Vec<(Vec<String>, Vec<String>)> = rows
        .into_iter()
        .map(|row| (build_key(table, &row, spec), row))
        .collect();

    // Swapping operands keeps the sort stable for equal keys, same as a
    // stable reverse sort.
    if reverse {
        decorated.sort_by(|a, b| b.0.cmp(&a.0));
    } else {
        decorated.sort_by(|a, b| a.0.cmp(&b.0));
    }

    table.rows = decorated.into_iter().map(|(_, row)| row).collect();
}

/// Load, sort, and rewrite one file. Returns `false` when the file was
/// skipped (missing or no data rows); parse and I/O errors propagate.
pub fn sort_file<P: AsRef<Path>>(path: P, spec: &SortSpec) -> Result<bool> {
    let path = path.as_ref();
    let mut table = match Table::load(path)? {
        Some(t) => t,
        None => return Ok(false),
    };

    sort_rows(&mut table, spec);
    table.save(path)?;
    info!(path = %path.display(), "sorted");
    Ok(true)
}
