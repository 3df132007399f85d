//! FILENAME: core/engine/src/table.rs
//! PURPOSE: In-memory representation of one sheet as a header plus rows.
//! CONTEXT: Inputs are loaded into a `Table`, joined into a `Table`, and the
//! reshaped output is converted back into a `Table` before export. Unlike
//! the sparse cell grid of an interactive sheet, every row here is dense and
//! padded to the column count, which keeps column lookups to a single index.

use std::collections::HashMap;
use crate::cell::{CellValue, EMPTY};

/// A dense, column-named table.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    columns: Vec<String>,
    /// Column name -> position. First occurrence wins on duplicate names.
    index: HashMap<String, usize>,
    rows: Vec<Vec<CellValue>>,
}

impl Table {
    /// Creates an empty table with the given header.
    pub fn new<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let columns: Vec<String> = columns.into_iter().map(Into::into).collect();
        let mut index = HashMap::with_capacity(columns.len());
        for (pos, name) in columns.iter().enumerate() {
            index.entry(name.clone()).or_insert(pos);
        }
        Table {
            columns,
            index,
            rows: Vec::new(),
        }
    }

    /// Appends a row. Short rows are padded with `Empty`, long rows truncated.
    pub fn push_row(&mut self, mut row: Vec<CellValue>) {
        row.resize(self.columns.len(), CellValue::Empty);
        self.rows.push(row);
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows(&self) -> &[Vec<CellValue>] {
        &self.rows
    }

    pub fn row(&self, row: usize) -> Option<&[CellValue]> {
        self.rows.get(row).map(Vec::as_slice)
    }

    /// Position of a column by exact name.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Typed accessor by pre-resolved column position.
    /// An unmapped column (`None`) or out-of-range cell yields the `Empty`
    /// sentinel rather than an error.
    pub fn cell(&self, row: usize, col: Option<usize>) -> &CellValue {
        col.and_then(|c| self.rows.get(row).and_then(|r| r.get(c)))
            .unwrap_or(&EMPTY)
    }

    /// Typed accessor by column name. Same missing-value policy as `cell`.
    pub fn get(&self, row: usize, column: &str) -> &CellValue {
        self.cell(row, self.column_index(column))
    }

    /// Returns a copy of the first `n` rows (all columns).
    pub fn head(&self, n: usize) -> Table {
        Table {
            columns: self.columns.clone(),
            index: self.index.clone(),
            rows: self.rows.iter().take(n).cloned().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Table {
        let mut table = Table::new(["PRN", "CNAME", "Sub01_TOT"]);
        table.push_row(vec![
            CellValue::Number(101.0),
            CellValue::text("Asha"),
            CellValue::Number(78.0),
        ]);
        table.push_row(vec![CellValue::Number(102.0)]);
        table
    }

    #[test]
    fn short_rows_are_padded() {
        let table = sample();
        assert_eq!(table.row(1).unwrap().len(), 3);
        assert_eq!(table.get(1, "CNAME"), &CellValue::Empty);
    }

    #[test]
    fn long_rows_are_truncated() {
        let mut table = Table::new(["A"]);
        table.push_row(vec![CellValue::Number(1.0), CellValue::Number(2.0)]);
        assert_eq!(table.row(0).unwrap(), &[CellValue::Number(1.0)]);
    }

    #[test]
    fn unknown_column_yields_empty_sentinel() {
        let table = sample();
        assert_eq!(table.get(0, "Sub01_GRADE"), &CellValue::Empty);
        assert_eq!(table.cell(0, None), &CellValue::Empty);
        assert_eq!(table.cell(99, Some(0)), &CellValue::Empty);
    }

    #[test]
    fn lookup_by_name_and_position() {
        let table = sample();
        assert_eq!(table.column_index("Sub01_TOT"), Some(2));
        assert!(table.has_column("PRN"));
        assert!(!table.has_column("prn"));
        assert_eq!(table.get(0, "CNAME"), &CellValue::text("Asha"));
    }

    #[test]
    fn head_limits_rows_and_keeps_header() {
        let table = sample();
        let head = table.head(1);
        assert_eq!(head.row_count(), 1);
        assert_eq!(head.columns(), table.columns());
        assert_eq!(table.head(10).row_count(), 2);
    }

    #[test]
    fn duplicate_names_resolve_to_first() {
        let table = Table::new(["A", "A"]);
        assert_eq!(table.column_index("A"), Some(0));
        assert_eq!(table.column_count(), 2);
    }
}
