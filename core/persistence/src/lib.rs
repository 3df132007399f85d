//! FILENAME: core/persistence/src/lib.rs
//! Exam Migration Persistence Module
//!
//! Handles reading input sheets from and writing output sheets to XLSX.

mod error;
mod xlsx_reader;
mod xlsx_writer;

pub use error::PersistenceError;
pub use xlsx_reader::{load_table, read_table};
pub use xlsx_writer::{save_table, to_spreadsheet_bytes};

// ============================================================================
// CONSTANTS
// ============================================================================

/// MIME type announced when the generated workbook is delivered as a download.
pub const XLSX_MIME: &str = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// Name of the single worksheet in generated workbooks.
pub const SHEET_NAME: &str = "Sheet1";
