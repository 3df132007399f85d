//! FILENAME: tests/test_run.rs
//! Integration tests for a full exam-migrate run (read, reshape, write).

mod common;

use app_lib::{run, PipelineError};
use common::{Student, TestHarness};
use engine::CellValue;
use reshape_engine::OutputColumn;

// ============================================================================
// HAPPY PATH
// ============================================================================

#[test]
fn test_two_subjects_one_student() {
    let harness = TestHarness::new();
    let result = harness.write_results("result.xlsx", &[1, 2], &[Student::new(2301.0, "Meera")]);
    let nad = harness.write_nad("nad.xlsx", &[2301.0]);
    let out = harness.path("out.xlsx");

    let cli = harness.cli(&[
        "-r",
        result.to_str().unwrap(),
        "-n",
        nad.to_str().unwrap(),
        "-o",
        out.to_str().unwrap(),
        "--subject-count",
        "3",
    ]);
    run(&cli).unwrap();

    let table = harness.read_output("out.xlsx");
    assert_eq!(table.columns().len(), OutputColumn::ALL.len());
    assert_eq!(table.row_count(), 2);
    for row in 0..2 {
        assert_eq!(table.get(row, "StudentId"), &CellValue::text("STU2301"));
        assert_eq!(table.get(row, "ExamRollNo"), &CellValue::Number(3301.0));
        assert_eq!(table.get(row, "StudentName"), &CellValue::text("Meera"));
        assert_eq!(table.get(row, "IsBackLog"), &CellValue::text("NO"));
        assert_eq!(table.get(row, "Semester_No"), &CellValue::Number(2.0));
        assert_eq!(table.get(row, "Semester_RegistredCredit"), &CellValue::Number(22.0));
        assert_eq!(table.get(row, "CGPA"), &CellValue::Number(7.25));
        assert_eq!(table.get(row, "OverallGrade"), &CellValue::text("B+"));
    }
    assert_eq!(table.get(0, "SubjectCode"), &CellValue::text("Sub01_CODE/Meera"));
    assert_eq!(table.get(1, "SubjectCode"), &CellValue::text("Sub02_CODE/Meera"));
    assert_eq!(table.get(1, "Credit_Earned"), &CellValue::Number(4.0));
    // Not present in the fixture
    assert_eq!(table.get(0, "Semester_EarnCredit"), &CellValue::Empty);
}

#[test]
fn test_inner_join_and_subject_major_order() {
    let harness = TestHarness::new();
    let result = harness.write_results(
        "result.xlsx",
        &[1, 2],
        &[
            Student::new(1.0, "Ana"),
            Student::new(2.0, "Ben"),
            Student::new(3.0, "Cai"),
        ],
    );
    // Ben has no NAD row; 9 has no result row
    let nad = harness.write_nad("nad.xlsx", &[3.0, 1.0, 9.0]);
    let out = harness.path("out.xlsx");

    let cli = harness.cli(&[
        "-r",
        result.to_str().unwrap(),
        "-n",
        nad.to_str().unwrap(),
        "-o",
        out.to_str().unwrap(),
    ]);
    run(&cli).unwrap();

    let table = harness.read_output("out.xlsx");
    let names: Vec<String> = (0..table.row_count())
        .map(|row| table.get(row, "SubjectCode").display_value())
        .collect();
    assert_eq!(
        names,
        vec![
            "Sub01_CODE/Ana",
            "Sub01_CODE/Cai",
            "Sub02_CODE/Ana",
            "Sub02_CODE/Cai"
        ]
    );
}

#[test]
fn test_config_file_and_flag_layering() {
    let harness = TestHarness::new();
    let result = harness.write_results(
        "result.xlsx",
        &[1, 2],
        &[Student::new(1.0, "Ana"), Student::new(2.0, "Ben")],
    );
    let nad = harness.write_nad("nad.xlsx", &[1.0, 2.0]);
    let out = harness.path("from-config.xlsx");
    let config = harness.write_text(
        "exam.json",
        &format!(
            r#"{{"semester_number": 6, "row_order": "by_student", "output": {:?}}}"#,
            out.to_str().unwrap()
        ),
    );

    let cli = harness.cli(&[
        "-r",
        result.to_str().unwrap(),
        "-n",
        nad.to_str().unwrap(),
        "-c",
        config.to_str().unwrap(),
        "--semester",
        "3",
    ]);
    run(&cli).unwrap();

    let table = harness.read_output("from-config.xlsx");
    assert_eq!(table.row_count(), 4);
    // Flag wins over the file's semester_number
    assert_eq!(table.get(0, "Semester_No"), &CellValue::Number(3.0));
    // File's row_order applies
    assert_eq!(table.get(1, "StudentName"), &CellValue::text("Ana"));
    assert_eq!(table.get(2, "StudentName"), &CellValue::text("Ben"));
}

#[test]
fn test_no_matching_students_writes_header_only() {
    let harness = TestHarness::new();
    let result = harness.write_results("result.xlsx", &[1], &[Student::new(1.0, "Ana")]);
    let nad = harness.write_nad("nad.xlsx", &[42.0]);
    let out = harness.path("out.xlsx");

    let cli = harness.cli(&[
        "-r",
        result.to_str().unwrap(),
        "-n",
        nad.to_str().unwrap(),
        "-o",
        out.to_str().unwrap(),
    ]);
    run(&cli).unwrap();

    let table = harness.read_output("out.xlsx");
    assert_eq!(table.row_count(), 0);
    assert_eq!(table.columns()[0], "StudentId");
    assert_eq!(table.columns()[26], "OverallGrade");
}

// ============================================================================
// FAILURES
// ============================================================================

#[test]
fn test_missing_join_key_fails_without_output() {
    let harness = TestHarness::new();
    let result = harness.write_results("result.xlsx", &[1], &[Student::new(1.0, "Ana")]);
    let mut bad_nad = engine::Table::new(["REGISTRATION_NO"]);
    bad_nad.push_row(vec![CellValue::Number(1.0)]);
    let nad = harness.write_table("nad.xlsx", &bad_nad);
    let out = harness.path("out.xlsx");

    let cli = harness.cli(&[
        "-r",
        result.to_str().unwrap(),
        "-n",
        nad.to_str().unwrap(),
        "-o",
        out.to_str().unwrap(),
    ]);
    let err = run(&cli).unwrap_err();

    assert!(matches!(err, PipelineError::Reshape(_)));
    assert!(err.to_string().contains("REGN_NO"));
    assert!(!out.exists());
}

#[test]
fn test_unreadable_workbook_names_the_input() {
    let harness = TestHarness::new();
    let result = harness.write_text("result.xlsx", "this is not a spreadsheet");
    let nad = harness.write_nad("nad.xlsx", &[1.0]);
    let out = harness.path("out.xlsx");

    let cli = harness.cli(&[
        "-r",
        result.to_str().unwrap(),
        "-n",
        nad.to_str().unwrap(),
        "-o",
        out.to_str().unwrap(),
    ]);
    let err = run(&cli).unwrap_err();

    assert!(matches!(err, PipelineError::Read { .. }));
    assert!(err.to_string().starts_with("cannot read result file"));
    assert!(!out.exists());
}

#[test]
fn test_unknown_sheet_fails() {
    let harness = TestHarness::new();
    let result = harness.write_results("result.xlsx", &[1], &[Student::new(1.0, "Ana")]);
    let nad = harness.write_nad("nad.xlsx", &[1.0]);

    let cli = harness.cli(&[
        "-r",
        result.to_str().unwrap(),
        "-n",
        nad.to_str().unwrap(),
        "--nad-sheet",
        "Registry",
    ]);
    let err = run(&cli).unwrap_err();
    assert!(err.to_string().contains("Sheet not found: Registry"));
}
