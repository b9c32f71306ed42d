//! Built-in sample: two students, two courses, three graded enrollments.

use crate::domain::{Catalog, CourseId, DomainError, StudentId};

/// Ids handed out while seeding the sample.
#[derive(Debug, Clone, Copy)]
pub struct SampleIds {
    pub alice: StudentId,
    pub bob: StudentId,
    pub math: CourseId,
    pub history: CourseId,
}

/// Alice takes Math (90) and History (85); Bob takes Math (75). All three
/// enrollments are dated by the catalog clock.
pub fn seed_sample(catalog: &mut Catalog) -> Result<SampleIds, DomainError> {
    let alice = catalog.add_student("Alice");
    let bob = catalog.add_student("Bob");
    let math = catalog.add_course("Math");
    let history = catalog.add_course("History");

    catalog.enroll(alice, math, None, Some(90.0))?;
    catalog.enroll(alice, history, None, Some(85.0))?;
    catalog.enroll(bob, math, None, Some(75.0))?;

    Ok(SampleIds {
        alice,
        bob,
        math,
        history,
    })
}
