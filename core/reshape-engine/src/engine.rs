//! FILENAME: core/reshape-engine/src/engine.rs
//! Reshape Engine - Turns wide result rows into long per-subject rows.
//!
//! Algorithm:
//! 1. Inner join result and NAD sheets on the registration number
//! 2. Resolve the student columns once against the joined schema
//! 3. Resolve each subject group `Sub01..SubNN`; a group without a TOT
//!    column is skipped for every student
//! 4. Emit one row per (present group, joined row), ordered per `RowOrder`
//!
//! Missing columns and empty cells become `CellValue::Empty`; they never fail.
//! A subject count of zero scans no groups and yields no rows.

use engine::{CellValue, Table};

use crate::definition::{
    ReshapeOptions, RowOrder, StudentField, SubjectField, SubjectGroup, BACKLOG_FLAG,
};
use crate::error::ReshapeError;
use crate::join::inner_join;
use crate::view::{OutputRow, OutputTable, ReshapeSummary};

// ============================================================================
// RESOLVED SCHEMA
// ============================================================================

/// Student columns resolved to positions in the joined table.
#[derive(Debug, Clone)]
struct StudentColumns {
    positions: [Option<usize>; 14],
}

impl StudentColumns {
    fn resolve(table: &Table) -> Self {
        StudentColumns {
            positions: StudentField::ALL.map(|field| table.column_index(field.column())),
        }
    }

    fn value(&self, table: &Table, row: usize, field: StudentField) -> CellValue {
        table.cell(row, self.positions[field.position()]).clone()
    }
}

/// A present subject group resolved to column positions.
#[derive(Debug, Clone)]
struct ResolvedGroup {
    group: SubjectGroup,
    positions: [Option<usize>; 10],
}

impl ResolvedGroup {
    /// Returns `None` when the group's TOT column is absent.
    fn resolve(group: SubjectGroup, table: &Table) -> Option<Self> {
        if !table.has_column(&group.presence_column()) {
            return None;
        }
        Some(ResolvedGroup {
            group,
            positions: SubjectField::ALL.map(|field| table.column_index(&group.column_name(field))),
        })
    }

    fn value(&self, table: &Table, row: usize, field: SubjectField) -> CellValue {
        table.cell(row, self.positions[field.position()]).clone()
    }
}

// ============================================================================
// RESHAPE
// ============================================================================

/// Joins the two sheets and unpivots subject groups into output rows.
pub fn reshape(
    result: &Table,
    nad: &Table,
    options: &ReshapeOptions,
) -> Result<OutputTable, ReshapeError> {
    let joined = inner_join(result, nad, &options.keys)?;
    let table = &joined.table;

    let student = StudentColumns::resolve(table);
    let groups: Vec<ResolvedGroup> = options
        .subject_groups()
        .filter_map(|group| ResolvedGroup::resolve(group, table))
        .collect();

    let semester = CellValue::from(options.semester_number);
    let mut rows = Vec::with_capacity(groups.len() * table.row_count());

    match options.row_order {
        RowOrder::BySubject => {
            for group in &groups {
                for row in 0..table.row_count() {
                    rows.push(build_row(table, row, &student, group, &semester));
                }
            }
        }
        RowOrder::ByStudent => {
            for row in 0..table.row_count() {
                for group in &groups {
                    rows.push(build_row(table, row, &student, group, &semester));
                }
            }
        }
    }

    Ok(OutputTable {
        rows,
        summary: ReshapeSummary {
            subjects_present: groups.iter().map(|g| g.group.index).collect(),
            join: joined.summary,
        },
    })
}

fn build_row(
    table: &Table,
    row: usize,
    student: &StudentColumns,
    group: &ResolvedGroup,
    semester: &CellValue,
) -> OutputRow {
    let s = |field| student.value(table, row, field);
    let g = |field| group.value(table, row, field);

    OutputRow {
        student_id: s(StudentField::StudentId),
        exam_roll_no: s(StudentField::RollNo),
        student_name: s(StudentField::Name),
        course_name: s(StudentField::CourseName),
        semester_no: semester.clone(),
        is_backlog: CellValue::text(BACKLOG_FLAG),
        subject_code: g(SubjectField::Code),
        subject_name: g(SubjectField::Name),
        subject_credit: g(SubjectField::Credit),
        internal_marks: g(SubjectField::InternalMarks),
        external_marks: g(SubjectField::ExternalMarks),
        total_marks: g(SubjectField::Total),
        grade: g(SubjectField::Grade),
        grade_point: g(SubjectField::GradePoints),
        credit_earned: g(SubjectField::Credit),
        credit_points: g(SubjectField::CreditPoints),
        result: g(SubjectField::Remark),
        semester_registered_credit: s(StudentField::SemesterCreditRegistered),
        semester_earn_credit: s(StudentField::SemesterCreditEarned),
        semester_earned_grade_point: s(StudentField::SemesterEarnedGradePoints),
        sgpa: s(StudentField::Sgpa),
        semester_overall_grade: s(StudentField::SemesterGrade),
        cumulative_registered_credit: s(StudentField::TotalCreditRegistered),
        cumulative_earn_credit: s(StudentField::TotalCreditEarned),
        cumulative_earned_grade_point: s(StudentField::TotalEarnedGradePoints),
        cgpa: s(StudentField::Cgpa),
        overall_grade: s(StudentField::OverallGrade),
    }
}
