//! FILENAME: core/reshape-engine/src/error.rs

use std::fmt;
use thiserror::Error;

/// Which input sheet an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableRole {
    Result,
    Nad,
}

impl fmt::Display for TableRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableRole::Result => write!(f, "result"),
            TableRole::Nad => write!(f, "NAD"),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ReshapeError {
    #[error("{table} sheet has no '{column}' column to join on")]
    MissingKeyColumn { table: TableRole, column: String },

    #[error("subject count must be at least 1, got {got}")]
    InvalidSubjectCount { got: u32 },
}
