//! FILENAME: core/reshape-engine/src/view.rs
//! Reshape View - The long-format output rows, ready for export.
//!
//! One `OutputRow` per (joined student row, present subject group). The
//! header names below are the import format of the downstream records
//! system and are spelled exactly as it expects them.

use engine::{CellValue, Table};

use crate::join::JoinSummary;

// ============================================================================
// OUTPUT COLUMNS
// ============================================================================

/// The output columns, in header order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutputColumn {
    StudentId,
    ExamRollNo,
    StudentName,
    CourseName,
    SemesterNo,
    IsBackLog,
    SubjectCode,
    SubjectName,
    SubjectCredit,
    InternalMarks,
    ExternalMarks,
    TotalMarks,
    Grade,
    GradePoint,
    CreditEarned,
    CreditPoints,
    Result,
    SemesterRegisteredCredit,
    SemesterEarnCredit,
    SemesterEarnedGradePoint,
    Sgpa,
    SemesterOverallGrade,
    CumulativeRegisteredCredit,
    CumulativeEarnCredit,
    CumulativeEarnedGradePoint,
    Cgpa,
    OverallGrade,
}

impl OutputColumn {
    pub const ALL: [OutputColumn; 27] = [
        OutputColumn::StudentId,
        OutputColumn::ExamRollNo,
        OutputColumn::StudentName,
        OutputColumn::CourseName,
        OutputColumn::SemesterNo,
        OutputColumn::IsBackLog,
        OutputColumn::SubjectCode,
        OutputColumn::SubjectName,
        OutputColumn::SubjectCredit,
        OutputColumn::InternalMarks,
        OutputColumn::ExternalMarks,
        OutputColumn::TotalMarks,
        OutputColumn::Grade,
        OutputColumn::GradePoint,
        OutputColumn::CreditEarned,
        OutputColumn::CreditPoints,
        OutputColumn::Result,
        OutputColumn::SemesterRegisteredCredit,
        OutputColumn::SemesterEarnCredit,
        OutputColumn::SemesterEarnedGradePoint,
        OutputColumn::Sgpa,
        OutputColumn::SemesterOverallGrade,
        OutputColumn::CumulativeRegisteredCredit,
        OutputColumn::CumulativeEarnCredit,
        OutputColumn::CumulativeEarnedGradePoint,
        OutputColumn::Cgpa,
        OutputColumn::OverallGrade,
    ];

    /// Header text as expected by the records system (original spellings kept).
    pub fn header(self) -> &'static str {
        match self {
            OutputColumn::StudentId => "StudentId",
            OutputColumn::ExamRollNo => "ExamRollNo",
            OutputColumn::StudentName => "StudentName",
            OutputColumn::CourseName => "CourseName",
            OutputColumn::SemesterNo => "Semester_No",
            OutputColumn::IsBackLog => "IsBackLog",
            OutputColumn::SubjectCode => "SubjectCode",
            OutputColumn::SubjectName => "SubjectName",
            OutputColumn::SubjectCredit => "Subject_Credit",
            OutputColumn::InternalMarks => "Internal_Marks",
            OutputColumn::ExternalMarks => "External_Marks",
            OutputColumn::TotalMarks => "Total_Marks",
            OutputColumn::Grade => "Grade",
            OutputColumn::GradePoint => "Grade_Point",
            OutputColumn::CreditEarned => "Credit_Earned",
            OutputColumn::CreditPoints => "Credit_Points",
            OutputColumn::Result => "Result",
            OutputColumn::SemesterRegisteredCredit => "Semester_RegistredCredit",
            OutputColumn::SemesterEarnCredit => "Semester_EarnCredit",
            OutputColumn::SemesterEarnedGradePoint => "Semester_EarnedGradePoint",
            OutputColumn::Sgpa => "SGPA",
            OutputColumn::SemesterOverallGrade => "Semester_OverallGrade",
            OutputColumn::CumulativeRegisteredCredit => "CumullativeRegistredCredit",
            OutputColumn::CumulativeEarnCredit => "CumullativeEarnCredit",
            OutputColumn::CumulativeEarnedGradePoint => "CumullativeEarnedGradePoint",
            OutputColumn::Cgpa => "CGPA",
            OutputColumn::OverallGrade => "OverallGrade",
        }
    }

    pub fn headers() -> Vec<&'static str> {
        Self::ALL.iter().map(|c| c.header()).collect()
    }
}

// ============================================================================
// OUTPUT ROW
// ============================================================================

/// One student's result for one subject.
#[derive(Debug, Clone, PartialEq)]
pub struct OutputRow {
    pub student_id: CellValue,
    pub exam_roll_no: CellValue,
    pub student_name: CellValue,
    pub course_name: CellValue,
    pub semester_no: CellValue,
    pub is_backlog: CellValue,
    pub subject_code: CellValue,
    pub subject_name: CellValue,
    pub subject_credit: CellValue,
    pub internal_marks: CellValue,
    pub external_marks: CellValue,
    pub total_marks: CellValue,
    pub grade: CellValue,
    pub grade_point: CellValue,
    /// Sourced from the subject's CREDIT column, same as `subject_credit`.
    pub credit_earned: CellValue,
    pub credit_points: CellValue,
    pub result: CellValue,
    pub semester_registered_credit: CellValue,
    pub semester_earn_credit: CellValue,
    pub semester_earned_grade_point: CellValue,
    pub sgpa: CellValue,
    pub semester_overall_grade: CellValue,
    pub cumulative_registered_credit: CellValue,
    pub cumulative_earn_credit: CellValue,
    pub cumulative_earned_grade_point: CellValue,
    pub cgpa: CellValue,
    pub overall_grade: CellValue,
}

impl OutputRow {
    pub fn value(&self, column: OutputColumn) -> &CellValue {
        match column {
            OutputColumn::StudentId => &self.student_id,
            OutputColumn::ExamRollNo => &self.exam_roll_no,
            OutputColumn::StudentName => &self.student_name,
            OutputColumn::CourseName => &self.course_name,
            OutputColumn::SemesterNo => &self.semester_no,
            OutputColumn::IsBackLog => &self.is_backlog,
            OutputColumn::SubjectCode => &self.subject_code,
            OutputColumn::SubjectName => &self.subject_name,
            OutputColumn::SubjectCredit => &self.subject_credit,
            OutputColumn::InternalMarks => &self.internal_marks,
            OutputColumn::ExternalMarks => &self.external_marks,
            OutputColumn::TotalMarks => &self.total_marks,
            OutputColumn::Grade => &self.grade,
            OutputColumn::GradePoint => &self.grade_point,
            OutputColumn::CreditEarned => &self.credit_earned,
            OutputColumn::CreditPoints => &self.credit_points,
            OutputColumn::Result => &self.result,
            OutputColumn::SemesterRegisteredCredit => &self.semester_registered_credit,
            OutputColumn::SemesterEarnCredit => &self.semester_earn_credit,
            OutputColumn::SemesterEarnedGradePoint => &self.semester_earned_grade_point,
            OutputColumn::Sgpa => &self.sgpa,
            OutputColumn::SemesterOverallGrade => &self.semester_overall_grade,
            OutputColumn::CumulativeRegisteredCredit => &self.cumulative_registered_credit,
            OutputColumn::CumulativeEarnCredit => &self.cumulative_earn_credit,
            OutputColumn::CumulativeEarnedGradePoint => &self.cumulative_earned_grade_point,
            OutputColumn::Cgpa => &self.cgpa,
            OutputColumn::OverallGrade => &self.overall_grade,
        }
    }

    /// Cells in header order.
    pub fn to_cells(&self) -> Vec<CellValue> {
        OutputColumn::ALL.iter().map(|&c| self.value(c).clone()).collect()
    }
}

// ============================================================================
// OUTPUT TABLE
// ============================================================================

/// What a reshape run found, for reporting.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReshapeSummary {
    pub join: JoinSummary,
    /// 1-based indices of subject groups whose TOT column was present.
    pub subjects_present: Vec<u32>,
}

/// The result of a reshape run.
#[derive(Debug, Clone)]
pub struct OutputTable {
    pub rows: Vec<OutputRow>,
    pub summary: ReshapeSummary,
}

impl OutputTable {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Flattens into a `Table` with the 27 output headers.
    pub fn to_table(&self) -> Table {
        let mut table = Table::new(OutputColumn::headers());
        for row in &self.rows {
            table.push_row(row.to_cells());
        }
        table
    }
}
