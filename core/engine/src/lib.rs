//! FILENAME: core/engine/src/lib.rs
//! PURPOSE: Main library entry point for the tabular data model.
//! CONTEXT: Re-exports public types and modules for use by other crates.

pub mod cell;
pub mod table;

// Re-export commonly used types at the crate root
pub use cell::{CellValue, EMPTY};
pub use table::Table;
