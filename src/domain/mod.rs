//! Core domain layer. No external I/O dependencies.
//!
//! Entities, the catalog that owns them, and domain errors.

pub mod catalog;
pub mod entities;
pub mod errors;
pub mod report;
pub mod roster;

pub use catalog::Catalog;
pub use entities::{
    Course, CourseId, Enrollment, EnrollmentId, EntityKind, EntityRef, Student, StudentId,
};
pub use errors::DomainError;
pub use report::{CatalogReport, CourseSummary, DayCount, StudentSummary};
pub use roster::{Roster, RosterEnrollment};
