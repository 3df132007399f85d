//! FILENAME: core/reshape-engine/src/join.rs
//! Inner join of the result sheet with the NAD registry sheet.
//!
//! Semantics:
//! - Joined columns are all result columns followed by all NAD columns.
//!   A non-key name present on both sides gets `_x` (result) / `_y` (NAD).
//!   When both key columns share a name, the NAD copy is dropped.
//! - Rows follow result-sheet order; each result row is followed by its
//!   matches in NAD order. Duplicate keys multiply (full cross product).
//! - Keys compare by display value, so 2024001 matches "2024001".
//!   Blank keys never match.

use engine::{CellValue, Table};
use rustc_hash::{FxHashMap, FxHashSet};
use smallvec::SmallVec;

use crate::definition::KeyColumns;
use crate::error::{ReshapeError, TableRole};

/// Row-level diagnostics of a join.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JoinSummary {
    pub result_rows: usize,
    pub nad_rows: usize,
    pub joined_rows: usize,
    /// Result rows with no NAD match (including blank keys).
    pub unmatched_result_rows: usize,
    /// NAD rows with no result match (including blank keys).
    pub unmatched_nad_rows: usize,
    /// Distinct keys occurring more than once in the result sheet.
    pub duplicate_result_keys: usize,
    /// Distinct keys occurring more than once in the NAD sheet.
    pub duplicate_nad_keys: usize,
}

impl JoinSummary {
    pub fn has_duplicates(&self) -> bool {
        self.duplicate_result_keys > 0 || self.duplicate_nad_keys > 0
    }
}

/// The joined table plus its diagnostics.
#[derive(Debug, Clone)]
pub struct Joined {
    pub table: Table,
    pub summary: JoinSummary,
}

/// Joins `result` and `nad` on `keys.result = keys.nad`.
pub fn inner_join(result: &Table, nad: &Table, keys: &KeyColumns) -> Result<Joined, ReshapeError> {
    let result_key = result
        .column_index(&keys.result)
        .ok_or_else(|| ReshapeError::MissingKeyColumn {
            table: TableRole::Result,
            column: keys.result.clone(),
        })?;
    let nad_key = nad
        .column_index(&keys.nad)
        .ok_or_else(|| ReshapeError::MissingKeyColumn {
            table: TableRole::Nad,
            column: keys.nad.clone(),
        })?;

    // A shared key name collapses into a single joined column.
    let dropped_nad_col = (keys.result == keys.nad).then_some(nad_key);
    let columns = joined_columns(result, nad, dropped_nad_col);

    // Index NAD rows by key
    let mut nad_index: FxHashMap<String, SmallVec<[usize; 1]>> = FxHashMap::default();
    let mut blank_nad_rows = 0;
    for row in 0..nad.row_count() {
        match join_key(nad.cell(row, Some(nad_key))) {
            Some(key) => nad_index.entry(key).or_default().push(row),
            None => blank_nad_rows += 1,
        }
    }

    let mut table = Table::new(columns);
    let mut summary = JoinSummary {
        result_rows: result.row_count(),
        nad_rows: nad.row_count(),
        duplicate_nad_keys: nad_index.values().filter(|rows| rows.len() > 1).count(),
        ..JoinSummary::default()
    };

    let mut result_key_counts: FxHashMap<String, usize> = FxHashMap::default();
    let mut matched_keys: FxHashSet<String> = FxHashSet::default();

    for (row_idx, left) in result.rows().iter().enumerate() {
        let Some(key) = join_key(result.cell(row_idx, Some(result_key))) else {
            summary.unmatched_result_rows += 1;
            continue;
        };
        *result_key_counts.entry(key.clone()).or_insert(0) += 1;

        let Some(matches) = nad_index.get(&key) else {
            summary.unmatched_result_rows += 1;
            continue;
        };

        for &nad_row in matches {
            let mut joined = Vec::with_capacity(table.column_count());
            joined.extend(left.iter().cloned());
            joined.extend(
                nad.rows()[nad_row]
                    .iter()
                    .enumerate()
                    .filter(|(col, _)| Some(*col) != dropped_nad_col)
                    .map(|(_, value)| value.clone()),
            );
            table.push_row(joined);
        }
        matched_keys.insert(key);
    }

    summary.joined_rows = table.row_count();
    summary.duplicate_result_keys = result_key_counts.values().filter(|&&n| n > 1).count();
    summary.unmatched_nad_rows = blank_nad_rows
        + nad_index
            .iter()
            .filter(|(key, _)| !matched_keys.contains(*key))
            .map(|(_, rows)| rows.len())
            .sum::<usize>();

    Ok(Joined { table, summary })
}

fn join_key(value: &CellValue) -> Option<String> {
    if value.is_blank() {
        None
    } else {
        Some(value.display_value())
    }
}

/// Result columns then NAD columns, with `_x`/`_y` suffixes on collisions.
fn joined_columns(result: &Table, nad: &Table, dropped_nad_col: Option<usize>) -> Vec<String> {
    let nad_columns: Vec<(usize, &String)> = nad
        .columns()
        .iter()
        .enumerate()
        .filter(|(col, _)| Some(*col) != dropped_nad_col)
        .collect();

    let nad_names: FxHashSet<&str> = nad_columns.iter().map(|(_, name)| name.as_str()).collect();
    let result_names: FxHashSet<&str> = result.columns().iter().map(String::as_str).collect();

    let mut columns = Vec::with_capacity(result.column_count() + nad_columns.len());
    for name in result.columns() {
        if nad_names.contains(name.as_str()) {
            columns.push(format!("{}_x", name));
        } else {
            columns.push(name.clone());
        }
    }
    for (_, name) in nad_columns {
        if result_names.contains(name.as_str()) {
            columns.push(format!("{}_y", name));
        } else {
            columns.push(name.clone());
        }
    }
    columns
}
