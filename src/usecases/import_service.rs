//! Roster import: resolve a roster document into catalog entities.
//!
//! - Adds every roster student and course, in document order
//! - Maps roster indices onto the ids issued by the catalog
//! - Creates enrollments through `Catalog::enroll_ref`, so kind checks apply
//!
//! References are all validated before the catalog is touched.

use crate::domain::{Catalog, CourseId, DomainError, EntityRef, Roster, StudentId};
use crate::ports::RosterSource;
use tracing::info;

/// Import service. Loads rosters through a `RosterSource`.
pub struct ImportService<'a> {
    source: &'a dyn RosterSource,
}

impl<'a> ImportService<'a> {
    pub fn new(source: &'a dyn RosterSource) -> Self {
        Self { source }
    }

    /// Load the roster and add its contents to `catalog`.
    pub fn import_into(&self, catalog: &mut Catalog) -> Result<ImportStats, DomainError> {
        let roster = self.source.load_roster()?;
        import_roster(catalog, &roster)
    }
}

/// Add a roster's contents to `catalog`.
///
/// Fails with `TypeMismatch` if an enrollment's `student` is not a student
/// reference or its `course` is not a course reference, and with `Roster` if
/// an index points past the document's lists. Either way the catalog is left
/// unchanged.
pub fn import_roster(catalog: &mut Catalog, roster: &Roster) -> Result<ImportStats, DomainError> {
    for (i, entry) in roster.enrollments.iter().enumerate() {
        let student = entry.student.as_student()?;
        let course = entry.course.as_course()?;
        if student.0 >= roster.students.len() {
            return Err(DomainError::Roster(format!(
                "enrollment {} refers to {} but roster has {} students",
                i,
                student,
                roster.students.len()
            )));
        }
        if course.0 >= roster.courses.len() {
            return Err(DomainError::Roster(format!(
                "enrollment {} refers to {} but roster has {} courses",
                i,
                course,
                roster.courses.len()
            )));
        }
    }

    let students: Vec<StudentId> = roster
        .students
        .iter()
        .map(|name| catalog.add_student(name.as_str()))
        .collect();
    let courses: Vec<CourseId> = roster
        .courses
        .iter()
        .map(|name| catalog.add_course(name.as_str()))
        .collect();

    let mut graded = 0usize;
    for entry in &roster.enrollments {
        let student = EntityRef::Student(students[entry.student.as_student()?.0]);
        let course = EntityRef::Course(courses[entry.course.as_course()?.0]);
        catalog.enroll_ref(&student, &course, entry.date, entry.grade)?;
        if entry.grade.is_some() {
            graded += 1;
        }
    }

    let stats = ImportStats {
        students: students.len(),
        courses: courses.len(),
        enrollments: roster.enrollments.len(),
        graded,
    };
    info!(
        students = stats.students,
        courses = stats.courses,
        enrollments = stats.enrollments,
        graded = stats.graded,
        "imported roster"
    );
    Ok(stats)
}

/// Result of a roster import.
#[derive(Debug, Default, PartialEq)]
pub struct ImportStats {
    pub students: usize,
    pub courses: usize,
    pub enrollments: usize,
    pub graded: usize,
}
