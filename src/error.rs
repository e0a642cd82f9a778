use thiserror::Error;

use crate::models::Subject;

/// Errors surfaced to the caller of the scoring and curriculum operations.
///
/// Missing reference files are not errors: they show up as
/// [`Unavailable`](crate::models::Unavailable) markers in the bundle.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PerformanceError {
    #[error("unknown semester {0}, expected 1..=6")]
    UnknownSemester(u8),

    #[error("unknown subject: {0}")]
    UnknownSubject(String),

    #[error("{field} value {value} is outside {min}..={max}")]
    OutOfRange {
        field: String,
        value: u32,
        min: u32,
        max: u32,
    },

    #[error("{subject} is not taught in semester {semester}")]
    SubjectNotInSemester { subject: Subject, semester: u8 },
}
