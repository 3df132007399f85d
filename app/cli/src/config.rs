//! FILENAME: app/cli/src/config.rs
// PURPOSE: Run configuration, layered as defaults < JSON file < CLI flags/env.

use crate::cli::Cli;
use reshape_engine::{
    KeyColumns, ReshapeError, ReshapeOptions, RowOrder, DEFAULT_SEMESTER_NUMBER,
    DEFAULT_SUBJECT_COUNT,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// File name offered for the generated workbook.
pub const DEFAULT_OUTPUT_FILE: &str = "Generated_ExamMigrationData.xlsx";

/// Output path that means "write to stdout".
pub const STDOUT_MARKER: &str = "-";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("cannot read config {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid configuration: {0}")]
    Invalid(#[from] ReshapeError),
}

/// Where the generated workbook goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    File(PathBuf),
    Stdout,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub subject_count: u32,
    pub semester_number: i64,
    pub result_key: String,
    pub nad_key: String,
    pub row_order: RowOrder,
    pub result_sheet: Option<String>,
    pub nad_sheet: Option<String>,
    pub output: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        let keys = KeyColumns::default();
        AppConfig {
            subject_count: DEFAULT_SUBJECT_COUNT,
            semester_number: DEFAULT_SEMESTER_NUMBER,
            result_key: keys.result,
            nad_key: keys.nad,
            row_order: RowOrder::default(),
            result_sheet: None,
            nad_sheet: None,
            output: PathBuf::from(DEFAULT_OUTPUT_FILE),
        }
    }
}

impl AppConfig {
    pub fn from_json(path: &Path, json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(path, &json)
    }

    /// Builds the effective configuration for a CLI invocation and validates it.
    pub fn resolve(cli: &Cli) -> Result<Self, ConfigError> {
        let mut config = match &cli.config {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.apply_cli(cli);
        config.reshape_options().validate()?;
        Ok(config)
    }

    /// Flags given on the command line (or via env) win over file values.
    pub fn apply_cli(&mut self, cli: &Cli) {
        if let Some(count) = cli.subject_count {
            self.subject_count = count;
        }
        if let Some(semester) = cli.semester_number {
            self.semester_number = semester;
        }
        if let Some(order) = cli.order {
            self.row_order = order.into();
        }
        if let Some(key) = &cli.result_key {
            self.result_key = key.clone();
        }
        if let Some(key) = &cli.nad_key {
            self.nad_key = key.clone();
        }
        if let Some(sheet) = &cli.result_sheet {
            self.result_sheet = Some(sheet.clone());
        }
        if let Some(sheet) = &cli.nad_sheet {
            self.nad_sheet = Some(sheet.clone());
        }
        if let Some(output) = &cli.output {
            self.output = output.clone();
        }
    }

    pub fn reshape_options(&self) -> ReshapeOptions {
        ReshapeOptions {
            subject_count: self.subject_count,
            semester_number: self.semester_number,
            keys: KeyColumns {
                result: self.result_key.clone(),
                nad: self.nad_key.clone(),
            },
            row_order: self.row_order,
        }
    }

    pub fn output_target(&self) -> OutputTarget {
        if self.output.as_os_str() == STDOUT_MARKER {
            OutputTarget::Stdout
        } else {
            OutputTarget::File(self.output.clone())
        }
    }
}
