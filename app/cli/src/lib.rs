//! FILENAME: app/cli/src/lib.rs
// PURPOSE: Library entry point for the exam migration front end.
// CONTEXT: `main.rs` only parses arguments and reports the final error;
// everything else lives here so integration tests can drive a full run.

pub mod cli;
pub mod config;
pub mod logging;
pub mod pipeline;
pub mod preview;

pub use cli::{Cli, OrderArg};
pub use config::{AppConfig, ConfigError, OutputTarget, DEFAULT_OUTPUT_FILE};
pub use pipeline::{deliver, generate, load_input, Generated, InputKind, PipelineError};

use log::info;
use persistence::XLSX_MIME;
use std::io::Write;

/// Prefix of the single line printed when a run fails.
pub const FAILURE_PREFIX: &str = "Error processing files";

/// Runs one conversion: read both workbooks, reshape, write the output.
pub fn run(cli: &Cli) -> Result<(), PipelineError> {
    let config = AppConfig::resolve(cli)?;
    let target = config.output_target();

    let result = load_input(InputKind::Result, &cli.result, config.result_sheet.as_deref())?;
    let nad = load_input(InputKind::Nad, &cli.nad, config.nad_sheet.as_deref())?;
    info!(target: "SYS", "Files uploaded and read successfully");

    // Previews go to stderr when stdout carries the workbook itself
    let mut previews: Box<dyn Write> = match target {
        OutputTarget::Stdout => Box::new(std::io::stderr()),
        OutputTarget::File(_) => Box::new(std::io::stdout()),
    };
    show_preview(&mut previews, "Preview of Result File", &result, cli.preview);
    show_preview(&mut previews, "Preview of NAD File", &nad, cli.preview);

    let generated = generate(&result, &nad, &config.reshape_options())?;
    show_preview(&mut previews, "Preview of Processed Data", &generated.table, cli.preview);

    deliver(&generated, &target)?;
    match &target {
        OutputTarget::File(path) => info!(
            target: "SYS",
            "wrote {} rows to {} ({})",
            generated.output.len(),
            path.display(),
            XLSX_MIME
        ),
        OutputTarget::Stdout => info!(
            target: "SYS",
            "streamed {} bytes to stdout ({})",
            generated.bytes.len(),
            XLSX_MIME
        ),
    }
    Ok(())
}

fn show_preview(out: &mut dyn Write, title: &str, table: &engine::Table, rows: usize) {
    if rows == 0 {
        return;
    }
    if let Err(e) = writeln!(out, "{}", preview::render(title, table, rows)) {
        log::debug!(target: "SYS", "preview not shown: {}", e);
    }
}
