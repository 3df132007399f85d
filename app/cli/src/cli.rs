//! FILENAME: app/cli/src/cli.rs
//! Command-line arguments for `exam-migrate`.

use clap::{Parser, ValueEnum};
use reshape_engine::RowOrder;
use std::path::PathBuf;

/// Generate exam migration data from a result sheet and a NAD data sheet.
#[derive(Parser, Debug, Clone)]
#[command(name = "exam-migrate", author, version, about, long_about = None)]
pub struct Cli {
    /// Result format workbook (e.g. FRESH-RESULT-FORMAT.xlsx)
    #[arg(short, long)]
    pub result: PathBuf,

    /// NAD data workbook (e.g. NAD-DATA.xlsx)
    #[arg(short, long)]
    pub nad: PathBuf,

    /// Output workbook, or '-' to write the bytes to stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Highest subject group index to scan (Sub01..SubNN)
    #[arg(long, env = "EXAM_MIGRATE_SUBJECT_COUNT")]
    pub subject_count: Option<u32>,

    /// Semester number stamped into every output row
    #[arg(long = "semester", env = "EXAM_MIGRATE_SEMESTER")]
    pub semester_number: Option<i64>,

    /// Output row grouping
    #[arg(long, value_enum)]
    pub order: Option<OrderArg>,

    /// Registration number column in the result sheet
    #[arg(long)]
    pub result_key: Option<String>,

    /// Registration number column in the NAD sheet
    #[arg(long)]
    pub nad_key: Option<String>,

    /// Sheet to read from the result workbook (default: first sheet)
    #[arg(long)]
    pub result_sheet: Option<String>,

    /// Sheet to read from the NAD workbook (default: first sheet)
    #[arg(long)]
    pub nad_sheet: Option<String>,

    /// JSON configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Rows to preview from each input and the output (0 disables)
    #[arg(long, default_value_t = 5)]
    pub preview: usize,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OrderArg {
    /// All students for subject 1, then subject 2, ...
    BySubject,
    /// All subjects for each student in turn
    ByStudent,
}

impl From<OrderArg> for RowOrder {
    fn from(order: OrderArg) -> Self {
        match order {
            OrderArg::BySubject => RowOrder::BySubject,
            OrderArg::ByStudent => RowOrder::ByStudent,
        }
    }
}
