//! Domain errors. Used by the catalog, ports and use cases.
//!
//! Adapters map parse/format errors into these.

use crate::domain::entities::{CourseId, EnrollmentId, EntityKind, StudentId};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    /// An untyped reference named the wrong kind of entity.
    #[error("Type mismatch: expected {expected}, found {found}")]
    TypeMismatch {
        expected: EntityKind,
        found: EntityKind,
    },

    #[error("Unknown student: {0}")]
    UnknownStudent(StudentId),

    #[error("Unknown course: {0}")]
    UnknownCourse(CourseId),

    #[error("Unknown enrollment: {0}")]
    UnknownEnrollment(EnrollmentId),

    /// Enrollment linked into a student or course it does not name.
    #[error("{enrollment} does not belong to {owner}")]
    WrongOwner {
        enrollment: EnrollmentId,
        owner: String,
    },

    #[error("Roster error: {0}")]
    Roster(String),

    #[error("Report error: {0}")]
    Report(String),
}
