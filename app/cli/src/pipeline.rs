//! FILENAME: app/cli/src/pipeline.rs
// PURPOSE: Load -> reshape -> export, with one error type for the whole run.
// CONTEXT: Any failure here aborts the run before an output file is written.

use engine::Table;
use log::{debug, info, warn};
use persistence::{load_table, to_spreadsheet_bytes, PersistenceError};
use reshape_engine::{reshape, OutputTable, ReshapeError, ReshapeOptions};
use std::fmt;
use std::io::Write;
use std::path::Path;
use thiserror::Error;

use crate::config::{ConfigError, OutputTarget};

/// Which input workbook a failure refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Result,
    Nad,
}

impl fmt::Display for InputKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputKind::Result => write!(f, "result file"),
            InputKind::Nad => write!(f, "NAD file"),
        }
    }
}

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("cannot read {input}: {source}")]
    Read {
        input: InputKind,
        #[source]
        source: PersistenceError,
    },

    #[error("{0}")]
    Reshape(#[from] ReshapeError),

    #[error("cannot write output: {0}")]
    Export(#[source] PersistenceError),
}

/// Result of a successful run, before delivery.
#[derive(Debug)]
pub struct Generated {
    pub output: OutputTable,
    pub table: Table,
    pub bytes: Vec<u8>,
}

pub fn load_input(kind: InputKind, path: &Path, sheet: Option<&str>) -> Result<Table, PipelineError> {
    debug!(target: "LOAD", "reading {} from {}", kind, path.display());
    let table = load_table(path, sheet).map_err(|source| PipelineError::Read { input: kind, source })?;
    info!(
        target: "LOAD",
        "{}: {} rows, {} columns",
        kind,
        table.row_count(),
        table.column_count()
    );
    Ok(table)
}

/// Reshapes the two tables and serializes the output workbook.
pub fn generate(result: &Table, nad: &Table, options: &ReshapeOptions) -> Result<Generated, PipelineError> {
    let output = reshape(result, nad, options)?;
    report(&output);

    let table = output.to_table();
    let bytes = to_spreadsheet_bytes(&table).map_err(PipelineError::Export)?;
    debug!(target: "EXPORT", "serialized {} bytes", bytes.len());

    Ok(Generated { output, table, bytes })
}

/// Writes the generated workbook to its destination.
pub fn deliver(generated: &Generated, target: &OutputTarget) -> Result<(), PipelineError> {
    match target {
        OutputTarget::File(path) => {
            std::fs::write(path, &generated.bytes).map_err(write_failed)?;
        }
        OutputTarget::Stdout => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(&generated.bytes).map_err(write_failed)?;
            stdout.flush().map_err(write_failed)?;
        }
    }
    Ok(())
}

fn write_failed(e: std::io::Error) -> PipelineError {
    PipelineError::Export(PersistenceError::Io(e))
}

fn report(output: &OutputTable) {
    let join = &output.summary.join;
    info!(
        target: "RESHAPE",
        "joined {} of {} result rows with {} NAD rows",
        join.joined_rows,
        join.result_rows,
        join.nad_rows
    );
    if join.unmatched_result_rows > 0 {
        info!(target: "RESHAPE", "{} result rows have no NAD match and were dropped", join.unmatched_result_rows);
    }
    if join.unmatched_nad_rows > 0 {
        info!(target: "RESHAPE", "{} NAD rows have no result match and were dropped", join.unmatched_nad_rows);
    }
    if join.has_duplicates() {
        warn!(
            target: "RESHAPE",
            "duplicate registration numbers: {} in result file, {} in NAD file; matching rows were multiplied",
            join.duplicate_result_keys,
            join.duplicate_nad_keys
        );
    }

    if output.summary.subjects_present.is_empty() {
        warn!(target: "RESHAPE", "no subject groups found (no SubNN_TOT columns)");
    } else {
        debug!(target: "RESHAPE", "subject groups present: {:?}", output.summary.subjects_present);
    }
    info!(target: "RESHAPE", "{} output rows", output.len());
}
