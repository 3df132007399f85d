//! FILENAME: tests/common/mod.rs
//! Test harness and fixtures for exam-migrate integration tests.

#![allow(dead_code)]

use app_lib::Cli;
use clap::Parser;
use engine::{CellValue, Table};
use std::path::PathBuf;
use tempfile::TempDir;

const SUBJECT_SUFFIXES: [&str; 10] = [
    "CODE",
    "NAME",
    "CREDIT",
    "IA_MRKS",
    "UE_MRKS",
    "TOT",
    "GRADE",
    "GRADE_POINTS",
    "CREDIT_POINTS",
    "Remark",
];

/// A student row for the result workbook.
pub struct Student {
    pub prn: f64,
    pub name: &'static str,
}

impl Student {
    pub fn new(prn: f64, name: &'static str) -> Self {
        Student { prn, name }
    }
}

/// Test harness owning a temporary directory with input workbooks.
pub struct TestHarness {
    pub dir: TempDir,
}

impl TestHarness {
    pub fn new() -> Self {
        TestHarness {
            dir: tempfile::tempdir().expect("create temp dir"),
        }
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    /// Writes a result workbook with the given subject groups fully populated.
    pub fn write_results(&self, name: &str, subjects: &[u32], students: &[Student]) -> PathBuf {
        let mut columns: Vec<String> = vec![
            "PRN".into(),
            "Stud ID".into(),
            "RROLL".into(),
            "CNAME".into(),
            "COURSE_NAME".into(),
        ];
        for &i in subjects {
            for suffix in SUBJECT_SUFFIXES {
                columns.push(format!("Sub{:02}_{}", i, suffix));
            }
        }
        for aggregate in ["SEM_CREDIT_REGISTERED", "SGPA", "CGPA", "GRADE"] {
            columns.push(aggregate.to_string());
        }

        let mut table = Table::new(columns.clone());
        for student in students {
            let row = columns
                .iter()
                .map(|column| match column.as_str() {
                    "PRN" => CellValue::Number(student.prn),
                    "Stud ID" => CellValue::text(format!("STU{}", student.prn)),
                    "RROLL" => CellValue::Number(student.prn + 1000.0),
                    "CNAME" => CellValue::text(student.name),
                    "COURSE_NAME" => CellValue::text("B.Com"),
                    "SEM_CREDIT_REGISTERED" => CellValue::Number(22.0),
                    "SGPA" => CellValue::Number(7.5),
                    "CGPA" => CellValue::Number(7.25),
                    "GRADE" => CellValue::text("B+"),
                    other if other.ends_with("_TOT") => CellValue::Number(66.0),
                    other if other.ends_with("_CREDIT") => CellValue::Number(4.0),
                    other => CellValue::text(format!("{}/{}", other, student.name)),
                })
                .collect();
            table.push_row(row);
        }
        self.write_table(name, &table)
    }

    /// Writes a NAD workbook keyed by the given registration numbers.
    pub fn write_nad(&self, name: &str, keys: &[f64]) -> PathBuf {
        let mut table = Table::new(["REGN_NO", "ABC_ACCOUNT_ID"]);
        for key in keys {
            table.push_row(vec![CellValue::Number(*key), CellValue::text(format!("ABC-{}", key))]);
        }
        self.write_table(name, &table)
    }

    pub fn write_table(&self, name: &str, table: &Table) -> PathBuf {
        let path = self.path(name);
        persistence::save_table(table, &path).expect("write fixture workbook");
        path
    }

    pub fn write_text(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.path(name);
        std::fs::write(&path, contents).expect("write fixture file");
        path
    }

    /// Parses a CLI invocation with previews disabled.
    pub fn cli(&self, args: &[&str]) -> Cli {
        let mut argv = vec!["exam-migrate", "--preview", "0"];
        argv.extend_from_slice(args);
        Cli::parse_from(argv)
    }

    pub fn read_output(&self, name: &str) -> Table {
        persistence::load_table(&self.path(name), None).expect("read output workbook")
    }
}
