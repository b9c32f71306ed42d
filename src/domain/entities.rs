//! Domain entities. Pure data structures for the core business.
//!
//! Students and courses never hold references to each other; both keep the
//! ids of their enrollments, and the [`Catalog`](super::Catalog) owns every
//! entity in its arenas.

use crate::domain::DomainError;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Index of a student in its catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StudentId(pub usize);

/// Index of a course in its catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CourseId(pub usize);

/// Index of an enrollment in its catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EnrollmentId(pub usize);

impl fmt::Display for StudentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "student#{}", self.0)
    }
}

impl fmt::Display for CourseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "course#{}", self.0)
    }
}

impl fmt::Display for EnrollmentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "enrollment#{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Student,
    Course,
    Enrollment,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            EntityKind::Student => "student",
            EntityKind::Course => "course",
            EntityKind::Enrollment => "enrollment",
        })
    }
}

/// Untyped reference to any entity. Serialized as `{"student": 0}`.
///
/// Used where the kind of a reference is only known at runtime, e.g. a
/// deserialized roster. Narrowing to the wrong kind is a `TypeMismatch`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityRef {
    Student(StudentId),
    Course(CourseId),
    Enrollment(EnrollmentId),
}

impl EntityRef {
    pub fn kind(&self) -> EntityKind {
        match self {
            EntityRef::Student(_) => EntityKind::Student,
            EntityRef::Course(_) => EntityKind::Course,
            EntityRef::Enrollment(_) => EntityKind::Enrollment,
        }
    }

    pub fn as_student(&self) -> Result<StudentId, DomainError> {
        match self {
            EntityRef::Student(id) => Ok(*id),
            other => Err(mismatch(EntityKind::Student, other)),
        }
    }

    pub fn as_course(&self) -> Result<CourseId, DomainError> {
        match self {
            EntityRef::Course(id) => Ok(*id),
            other => Err(mismatch(EntityKind::Course, other)),
        }
    }

    pub fn as_enrollment(&self) -> Result<EnrollmentId, DomainError> {
        match self {
            EntityRef::Enrollment(id) => Ok(*id),
            other => Err(mismatch(EntityKind::Enrollment, other)),
        }
    }
}

fn mismatch(expected: EntityKind, found: &EntityRef) -> DomainError {
    DomainError::TypeMismatch {
        expected,
        found: found.kind(),
    }
}

impl From<StudentId> for EntityRef {
    fn from(id: StudentId) -> Self {
        EntityRef::Student(id)
    }
}

impl From<CourseId> for EntityRef {
    fn from(id: CourseId) -> Self {
        EntityRef::Course(id)
    }
}

impl From<EnrollmentId> for EntityRef {
    fn from(id: EnrollmentId) -> Self {
        EntityRef::Enrollment(id)
    }
}

/// A student and the enrollments linked to them.
#[derive(Debug, Clone, PartialEq)]
pub struct Student {
    pub id: StudentId,
    pub name: String,
    enrollments: Vec<EnrollmentId>,
    /// Only graded enrollments appear here.
    grades: HashMap<EnrollmentId, f64>,
}

impl Student {
    pub(crate) fn new(id: StudentId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            enrollments: Vec::new(),
            grades: HashMap::new(),
        }
    }

    /// Append an enrollment and record its grade, if any.
    ///
    /// Enrolling the same enrollment twice appends it twice; its grade entry
    /// is simply overwritten.
    pub fn enroll(&mut self, enrollment: &Enrollment) -> Result<(), DomainError> {
        if enrollment.student != self.id {
            return Err(DomainError::WrongOwner {
                enrollment: enrollment.id,
                owner: self.id.to_string(),
            });
        }
        self.enrollments.push(enrollment.id);
        if let Some(grade) = enrollment.grade {
            self.grades.insert(enrollment.id, grade);
        }
        Ok(())
    }

    /// Number of enrollments, duplicates included.
    pub fn course_count(&self) -> usize {
        self.enrollments.len()
    }

    /// Mean over graded enrollments only; `0.0` when nothing is graded.
    ///
    /// Ungraded enrollments are not part of the denominator, so a student with
    /// one graded and several ungraded courses averages the single grade.
    pub fn aggregate_average_grade(&self) -> f64 {
        if self.grades.is_empty() {
            return 0.0;
        }
        let total: f64 = self.grades.values().sum();
        total / self.grades.len() as f64
    }

    pub fn enrollments(&self) -> &[EnrollmentId] {
        &self.enrollments
    }

    pub fn grade_for(&self, enrollment: EnrollmentId) -> Option<f64> {
        self.grades.get(&enrollment).copied()
    }

    pub fn graded_count(&self) -> usize {
        self.grades.len()
    }
}

/// A course and the enrollments linked to it.
#[derive(Debug, Clone, PartialEq)]
pub struct Course {
    pub id: CourseId,
    pub name: String,
    enrollments: Vec<EnrollmentId>,
}

impl Course {
    pub(crate) fn new(id: CourseId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            enrollments: Vec::new(),
        }
    }

    pub fn add_enrollment(&mut self, enrollment: &Enrollment) -> Result<(), DomainError> {
        if enrollment.course != self.id {
            return Err(DomainError::WrongOwner {
                enrollment: enrollment.id,
                owner: self.id.to_string(),
            });
        }
        self.enrollments.push(enrollment.id);
        Ok(())
    }

    /// Counts enrollments, not distinct students: a student enrolled twice
    /// counts twice.
    pub fn student_count(&self) -> usize {
        self.enrollments.len()
    }

    pub fn enrollments(&self) -> &[EnrollmentId] {
        &self.enrollments
    }
}

/// Join record between one student and one course.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Enrollment {
    pub id: EnrollmentId,
    pub student: StudentId,
    pub course: CourseId,
    pub enrolled_at: NaiveDateTime,
    pub grade: Option<f64>,
}

impl Enrollment {
    pub fn enrollment_date(&self) -> NaiveDateTime {
        self.enrolled_at
    }
}
