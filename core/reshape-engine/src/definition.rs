//! FILENAME: core/reshape-engine/src/definition.rs
//! Reshape Definition - The serializable configuration and column schema.
//!
//! This module contains the types needed to DESCRIBE a reshape run:
//! - which columns make up a student and a subject group in the result sheet
//! - how the two input sheets are keyed
//! - the run options (subject count, semester number, row order)

use serde::{Deserialize, Serialize};
use crate::error::ReshapeError;

/// Default upper bound on the subject-group index to scan.
pub const DEFAULT_SUBJECT_COUNT: u32 = 12;

/// Default semester number stamped into every output row.
pub const DEFAULT_SEMESTER_NUMBER: i64 = 2;

/// Literal written to the `IsBackLog` column of every row.
pub const BACKLOG_FLAG: &str = "NO";

// ============================================================================
// SUBJECT GROUP SCHEMA
// ============================================================================

/// One column of a repeating subject group (`Sub{nn}_{suffix}`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SubjectField {
    Code,
    Name,
    Credit,
    InternalMarks,
    ExternalMarks,
    Total,
    Grade,
    GradePoints,
    CreditPoints,
    Remark,
}

impl SubjectField {
    /// Every field of a group, in resolution order.
    pub const ALL: [SubjectField; 10] = [
        SubjectField::Code,
        SubjectField::Name,
        SubjectField::Credit,
        SubjectField::InternalMarks,
        SubjectField::ExternalMarks,
        SubjectField::Total,
        SubjectField::Grade,
        SubjectField::GradePoints,
        SubjectField::CreditPoints,
        SubjectField::Remark,
    ];

    /// Column-name suffix used by the result sheet.
    pub fn suffix(self) -> &'static str {
        match self {
            SubjectField::Code => "CODE",
            SubjectField::Name => "NAME",
            SubjectField::Credit => "CREDIT",
            SubjectField::InternalMarks => "IA_MRKS",
            SubjectField::ExternalMarks => "UE_MRKS",
            SubjectField::Total => "TOT",
            SubjectField::Grade => "GRADE",
            SubjectField::GradePoints => "GRADE_POINTS",
            SubjectField::CreditPoints => "CREDIT_POINTS",
            SubjectField::Remark => "Remark",
        }
    }

    /// Position within `ALL`.
    pub fn position(self) -> usize {
        self as usize
    }
}

/// A positional subject group, 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubjectGroup {
    pub index: u32,
}

impl SubjectGroup {
    pub fn new(index: u32) -> Self {
        SubjectGroup { index }
    }

    /// `Sub01`, `Sub02`, ...
    pub fn prefix(&self) -> String {
        format!("Sub{:02}", self.index)
    }

    pub fn column_name(&self, field: SubjectField) -> String {
        format!("{}_{}", self.prefix(), field.suffix())
    }

    /// The column whose presence decides whether the group exists at all.
    pub fn presence_column(&self) -> String {
        self.column_name(SubjectField::Total)
    }
}

// ============================================================================
// STUDENT SCHEMA
// ============================================================================

/// Per-student columns: identity plus semester and cumulative aggregates.
/// Constant across a student's subject rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StudentField {
    StudentId,
    RollNo,
    Name,
    CourseName,
    SemesterCreditRegistered,
    SemesterCreditEarned,
    SemesterEarnedGradePoints,
    Sgpa,
    SemesterGrade,
    TotalCreditRegistered,
    TotalCreditEarned,
    TotalEarnedGradePoints,
    Cgpa,
    OverallGrade,
}

impl StudentField {
    pub const ALL: [StudentField; 14] = [
        StudentField::StudentId,
        StudentField::RollNo,
        StudentField::Name,
        StudentField::CourseName,
        StudentField::SemesterCreditRegistered,
        StudentField::SemesterCreditEarned,
        StudentField::SemesterEarnedGradePoints,
        StudentField::Sgpa,
        StudentField::SemesterGrade,
        StudentField::TotalCreditRegistered,
        StudentField::TotalCreditEarned,
        StudentField::TotalEarnedGradePoints,
        StudentField::Cgpa,
        StudentField::OverallGrade,
    ];

    /// Column name in the joined sheet.
    pub fn column(self) -> &'static str {
        match self {
            StudentField::StudentId => "Stud ID",
            StudentField::RollNo => "RROLL",
            StudentField::Name => "CNAME",
            StudentField::CourseName => "COURSE_NAME",
            StudentField::SemesterCreditRegistered => "SEM_CREDIT_REGISTERED",
            StudentField::SemesterCreditEarned => "SEM_CREDIT_EARNED",
            StudentField::SemesterEarnedGradePoints => "SEM_EARNED_GRADE_POINTS",
            StudentField::Sgpa => "SGPA",
            StudentField::SemesterGrade => "SEM_GRADE",
            StudentField::TotalCreditRegistered => "TOTAL_CREDIT_REGISTERED",
            StudentField::TotalCreditEarned => "TOTAL_CREDIT_EARNED",
            StudentField::TotalEarnedGradePoints => "TOTAL_EARNED_GRADE_POINTS",
            StudentField::Cgpa => "CGPA",
            StudentField::OverallGrade => "GRADE",
        }
    }

    pub fn position(self) -> usize {
        self as usize
    }
}

// ============================================================================
// OPTIONS
// ============================================================================

/// Join key column names for the two input sheets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyColumns {
    /// Registration number column in the result sheet.
    pub result: String,
    /// Registration number column in the NAD registry sheet.
    pub nad: String,
}

impl Default for KeyColumns {
    fn default() -> Self {
        KeyColumns {
            result: "PRN".to_string(),
            nad: "REGN_NO".to_string(),
        }
    }
}

/// Grouping of output rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RowOrder {
    /// All students for subject 1, then all for subject 2, ...
    #[default]
    BySubject,
    /// All subjects of the first joined row, then the next row, ...
    ByStudent,
}

/// Run options for `reshape`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReshapeOptions {
    pub subject_count: u32,
    pub semester_number: i64,
    pub keys: KeyColumns,
    pub row_order: RowOrder,
}

impl ReshapeOptions {
    /// Rejects option sets a run could never use. Checked once, when the
    /// configuration is resolved; `reshape` itself accepts any count.
    pub fn validate(&self) -> Result<(), ReshapeError> {
        if self.subject_count == 0 {
            return Err(ReshapeError::InvalidSubjectCount {
                got: self.subject_count,
            });
        }
        Ok(())
    }

    /// The subject groups to scan, in order. Indices past 99 widen the
    /// prefix (`Sub100`).
    pub fn subject_groups(&self) -> impl Iterator<Item = SubjectGroup> {
        (1..=self.subject_count).map(SubjectGroup::new)
    }
}

impl Default for ReshapeOptions {
    fn default() -> Self {
        ReshapeOptions {
            subject_count: DEFAULT_SUBJECT_COUNT,
            semester_number: DEFAULT_SEMESTER_NUMBER,
            keys: KeyColumns::default(),
            row_order: RowOrder::default(),
        }
    }
}
