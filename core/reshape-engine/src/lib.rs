//! FILENAME: core/reshape-engine/src/lib.rs
//! Exam result reshaping subsystem.
//!
//! Joins an exam-result sheet (one wide row per student, repeating
//! `SubNN_*` column groups) with a NAD registry sheet and unpivots the
//! subject groups into one row per student per subject. Depends on `engine`
//! only for shared types (CellValue, Table).
//!
//! Layers:
//! - `definition`: Column schema and run options (what the reshape IS)
//! - `join`: Inner join of the two input sheets
//! - `engine`: The unpivot itself (HOW we reshape)
//! - `view`: Long-format output rows (WHAT we export)

pub mod definition;
pub mod engine;
pub mod error;
pub mod join;
pub mod view;

pub use definition::*;
pub use self::engine::reshape;
pub use error::{ReshapeError, TableRole};
pub use join::{inner_join, JoinSummary, Joined};
pub use view::*;
