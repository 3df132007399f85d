// FILENAME: core\persistence\src\xlsx_reader.rs

use crate::PersistenceError;
use calamine::{Data, Range, Reader, Xlsx};
use engine::{CellValue, Table};
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, Read, Seek};
use std::path::Path;

/// Loads one sheet of an `.xlsx` file into a `Table`.
/// `sheet = None` selects the first sheet of the workbook.
pub fn load_table(path: &Path, sheet: Option<&str>) -> Result<Table, PersistenceError> {
    let file = File::open(path).map_err(|source| PersistenceError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    read_table(BufReader::new(file), sheet)
}

/// Reads one sheet from any seekable `.xlsx` byte source (file, upload buffer).
pub fn read_table<R: Read + Seek>(reader: R, sheet: Option<&str>) -> Result<Table, PersistenceError> {
    let mut workbook: Xlsx<R> = Xlsx::new(reader)?;
    let sheet_names = workbook.sheet_names();

    let sheet_name = match sheet {
        Some(name) => sheet_names
            .iter()
            .find(|candidate| candidate.as_str() == name)
            .cloned()
            .ok_or_else(|| PersistenceError::SheetNotFound {
                sheet: name.to_string(),
                available: sheet_names.clone(),
            })?,
        None => sheet_names.first().cloned().ok_or_else(|| {
            PersistenceError::InvalidFormat("Workbook contains no sheets".to_string())
        })?,
    };

    let range = workbook.worksheet_range(&sheet_name)?;
    Ok(range_to_table(&range))
}

/// First row of the used range is the header; remaining non-blank rows are data.
fn range_to_table(range: &Range<Data>) -> Table {
    let mut rows = range.rows();

    let Some(header_row) = rows.next() else {
        return Table::default();
    };

    let mut table = Table::new(header_names(header_row));

    for row in rows {
        if row.iter().all(|cell| matches!(cell, Data::Empty)) {
            continue;
        }
        table.push_row(row.iter().map(to_cell_value).collect());
    }

    table
}

/// Renders header cells as unique column names.
/// Blank headers become `Unnamed: {col}`; repeats of `X` become `X.1`, `X.2`, ...
/// A generated name that is itself taken gets another suffix, so
/// `A, A.1, A` reads as `A, A.1, A.1.1`.
fn header_names(header_row: &[Data]) -> Vec<String> {
    let mut counts: HashMap<String, usize> = HashMap::with_capacity(header_row.len());
    let mut names = Vec::with_capacity(header_row.len());

    for (col_idx, cell) in header_row.iter().enumerate() {
        let value = to_cell_value(cell);
        let mut name = if value.is_blank() {
            format!("Unnamed: {}", col_idx)
        } else {
            value.display_value()
        };

        let mut seen = counts.get(&name).copied().unwrap_or(0);
        while seen > 0 {
            counts.insert(name.clone(), seen + 1);
            name = format!("{}.{}", name, seen);
            seen = counts.get(&name).copied().unwrap_or(0);
        }

        counts.insert(name.clone(), seen + 1);
        names.push(name);
    }

    names
}

fn to_cell_value(cell: &Data) -> CellValue {
    match cell {
        Data::Empty => CellValue::Empty,
        Data::String(s) => CellValue::Text(s.clone()),
        Data::Float(f) => CellValue::Number(*f),
        Data::Int(i) => CellValue::Number(*i as f64),
        Data::Bool(b) => CellValue::Boolean(*b),
        Data::Error(e) => CellValue::Error(e.to_string()),
        Data::DateTime(dt) => CellValue::Number(dt.as_f64()),
        Data::DateTimeIso(s) => CellValue::Text(s.clone()),
        Data::DurationIso(s) => CellValue::Text(s.clone()),
    }
}
