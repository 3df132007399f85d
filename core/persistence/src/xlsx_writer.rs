//! FILENAME: core/persistence/src/xlsx_writer.rs

use crate::PersistenceError;
use engine::{CellValue, Table};
use rust_xlsxwriter::{DocProperties, ExcelDateTime, Workbook as XlsxWorkbook, Worksheet};
use std::path::Path;

/// Serializes a table to an in-memory `.xlsx` document.
/// Identical tables produce identical bytes for a given library version.
pub fn to_spreadsheet_bytes(table: &Table) -> Result<Vec<u8>, PersistenceError> {
    let mut xlsx = build_workbook(table)?;
    Ok(xlsx.save_to_buffer()?)
}

/// Serializes a table straight to a file on disk.
pub fn save_table(table: &Table, path: &Path) -> Result<(), PersistenceError> {
    let mut xlsx = build_workbook(table)?;
    xlsx.save(path)?;
    Ok(())
}

fn build_workbook(table: &Table) -> Result<XlsxWorkbook, PersistenceError> {
    let mut xlsx = XlsxWorkbook::new();

    // Pin the creation timestamp, otherwise docProps/core.xml embeds "now".
    let created = ExcelDateTime::from_ymd(2000, 1, 1)?;
    xlsx.set_properties(&DocProperties::new().set_creation_datetime(&created));

    let worksheet = xlsx.add_worksheet();
    worksheet.set_name(crate::SHEET_NAME)?;

    // Header row
    for (col, name) in table.columns().iter().enumerate() {
        worksheet.write_string(0, column_number(col)?, name)?;
    }

    // Data rows start directly under the header
    for (row_idx, row) in table.rows().iter().enumerate() {
        let row_number = u32::try_from(row_idx + 1).map_err(|_| {
            PersistenceError::InvalidFormat(format!("row {} exceeds the sheet size", row_idx + 1))
        })?;
        for (col, value) in row.iter().enumerate() {
            write_cell(worksheet, row_number, column_number(col)?, value)?;
        }
    }

    Ok(xlsx)
}

fn write_cell(
    worksheet: &mut Worksheet,
    row: u32,
    col: u16,
    value: &CellValue,
) -> Result<(), PersistenceError> {
    match value {
        CellValue::Empty => {}
        CellValue::Number(n) => {
            worksheet.write_number(row, col, *n)?;
        }
        CellValue::Text(s) => {
            worksheet.write_string(row, col, s)?;
        }
        CellValue::Boolean(b) => {
            worksheet.write_boolean(row, col, *b)?;
        }
        CellValue::Error(e) => {
            worksheet.write_string(row, col, e)?;
        }
    }
    Ok(())
}

fn column_number(col: usize) -> Result<u16, PersistenceError> {
    u16::try_from(col).map_err(|_| {
        PersistenceError::InvalidFormat(format!("column {} exceeds the sheet size", col))
    })
}
