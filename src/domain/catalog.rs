//! The catalog: owning registry of students, courses and enrollments.
//!
//! Every entity lives in one of three arenas and is addressed by its id.
//! Constructing an enrollment is the only operation that links entities.

use crate::domain::entities::{
    Course, CourseId, Enrollment, EnrollmentId, EntityRef, Student, StudentId,
};
use crate::domain::DomainError;
use chrono::{Local, NaiveDate, NaiveDateTime};
use std::collections::{BTreeMap, HashMap};
use tracing::debug;

fn system_now() -> NaiveDateTime {
    Local::now().naive_local()
}

/// Registry of every entity created so far. Not thread-safe; mutation
/// requires `&mut Catalog`.
#[derive(Debug, Clone)]
pub struct Catalog {
    students: Vec<Student>,
    courses: Vec<Course>,
    enrollments: Vec<Enrollment>,
    /// Timestamp source for enrollments created without a date.
    clock: fn() -> NaiveDateTime,
}

impl Catalog {
    pub fn new() -> Self {
        Self::with_clock(system_now)
    }

    pub fn with_clock(clock: fn() -> NaiveDateTime) -> Self {
        Self {
            students: Vec::new(),
            courses: Vec::new(),
            enrollments: Vec::new(),
            clock,
        }
    }

    pub fn add_student(&mut self, name: impl Into<String>) -> StudentId {
        let id = StudentId(self.students.len());
        self.students.push(Student::new(id, name));
        id
    }

    pub fn add_course(&mut self, name: impl Into<String>) -> CourseId {
        let id = CourseId(self.courses.len());
        self.courses.push(Course::new(id, name));
        id
    }

    /// Create an enrollment and link it into its student, its course and the
    /// enrollment registry.
    ///
    /// Both ids are checked before anything is mutated; after that no step
    /// can fail. `enrollment_date` defaults to the catalog clock.
    pub fn enroll(
        &mut self,
        student: StudentId,
        course: CourseId,
        enrollment_date: Option<NaiveDateTime>,
        grade: Option<f64>,
    ) -> Result<EnrollmentId, DomainError> {
        self.student(student)?;
        self.course(course)?;

        let enrollment = Enrollment {
            id: EnrollmentId(self.enrollments.len()),
            student,
            course,
            enrolled_at: enrollment_date.unwrap_or_else(self.clock),
            grade,
        };
        self.students[student.0].enroll(&enrollment)?;
        self.courses[course.0].add_enrollment(&enrollment)?;

        let id = enrollment.id;
        debug!(
            enrollment = %id,
            student = %student,
            course = %course,
            grade = ?grade,
            "enrollment created"
        );
        self.enrollments.push(enrollment);
        Ok(id)
    }

    /// [`enroll`](Self::enroll) for references whose kind is only known at
    /// runtime. Fails with `TypeMismatch` before any mutation.
    pub fn enroll_ref(
        &mut self,
        student: &EntityRef,
        course: &EntityRef,
        enrollment_date: Option<NaiveDateTime>,
        grade: Option<f64>,
    ) -> Result<EnrollmentId, DomainError> {
        let student = student.as_student()?;
        let course = course.as_course()?;
        self.enroll(student, course, enrollment_date, grade)
    }

    /// Dynamic form of [`Student::enroll`]: appends an existing enrollment to
    /// the referenced student.
    pub fn student_enroll_ref(
        &mut self,
        student: &EntityRef,
        enrollment: &EntityRef,
    ) -> Result<(), DomainError> {
        let student = student.as_student()?;
        let enrollment = self.enrollment(enrollment.as_enrollment()?)?.clone();
        self.student_mut(student)?.enroll(&enrollment)
    }

    /// Dynamic form of [`Course::add_enrollment`].
    pub fn course_add_enrollment_ref(
        &mut self,
        course: &EntityRef,
        enrollment: &EntityRef,
    ) -> Result<(), DomainError> {
        let course = course.as_course()?;
        let enrollment = self.enrollment(enrollment.as_enrollment()?)?.clone();
        self.course_mut(course)?.add_enrollment(&enrollment)
    }

    pub fn student(&self, id: StudentId) -> Result<&Student, DomainError> {
        self.students
            .get(id.0)
            .ok_or(DomainError::UnknownStudent(id))
    }

    pub fn course(&self, id: CourseId) -> Result<&Course, DomainError> {
        self.courses.get(id.0).ok_or(DomainError::UnknownCourse(id))
    }

    pub fn enrollment(&self, id: EnrollmentId) -> Result<&Enrollment, DomainError> {
        self.enrollments
            .get(id.0)
            .ok_or(DomainError::UnknownEnrollment(id))
    }

    fn student_mut(&mut self, id: StudentId) -> Result<&mut Student, DomainError> {
        self.students
            .get_mut(id.0)
            .ok_or(DomainError::UnknownStudent(id))
    }

    fn course_mut(&mut self, id: CourseId) -> Result<&mut Course, DomainError> {
        self.courses
            .get_mut(id.0)
            .ok_or(DomainError::UnknownCourse(id))
    }

    /// All students in registration order.
    pub fn students(&self) -> &[Student] {
        &self.students
    }

    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    pub fn enrollments(&self) -> &[Enrollment] {
        &self.enrollments
    }

    /// Names are not unique, so this may yield several students.
    pub fn students_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Student> {
        self.students.iter().filter(move |s| s.name == name)
    }

    pub fn course_count(&self, student: StudentId) -> Result<usize, DomainError> {
        Ok(self.student(student)?.course_count())
    }

    pub fn aggregate_average_grade(&self, student: StudentId) -> Result<f64, DomainError> {
        Ok(self.student(student)?.aggregate_average_grade())
    }

    pub fn student_count(&self, course: CourseId) -> Result<usize, DomainError> {
        Ok(self.course(course)?.student_count())
    }

    /// Enrollment count per calendar date. Key order is unspecified.
    pub fn aggregate_enrollments_per_day(&self) -> HashMap<NaiveDate, usize> {
        let mut counts = HashMap::new();
        for enrollment in &self.enrollments {
            *counts.entry(enrollment.enrollment_date().date()).or_insert(0) += 1;
        }
        counts
    }

    /// Same grouping as [`aggregate_enrollments_per_day`](Self::aggregate_enrollments_per_day),
    /// ordered by date.
    pub fn enrollments_per_day_sorted(&self) -> BTreeMap<NaiveDate, usize> {
        self.aggregate_enrollments_per_day().into_iter().collect()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::EntityKind;

    fn fixed_now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 9, 2)
            .unwrap()
            .and_hms_opt(10, 0, 0)
            .unwrap()
    }

    fn day(d: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 9, d)
            .unwrap()
            .and_hms_opt(23, 59, 0)
            .unwrap()
    }

    fn assert_registries(catalog: &Catalog, students: usize, courses: usize, enrollments: usize) {
        assert_eq!(catalog.students().len(), students);
        assert_eq!(catalog.courses().len(), courses);
        assert_eq!(catalog.enrollments().len(), enrollments);
    }

    #[test]
    fn test_canonical_scenario() {
        let mut catalog = Catalog::with_clock(fixed_now);
        let alice = catalog.add_student("Alice");
        let bob = catalog.add_student("Bob");
        let math = catalog.add_course("Math");
        let history = catalog.add_course("History");

        catalog.enroll(alice, math, None, Some(90.0)).unwrap();
        catalog.enroll(alice, history, None, Some(85.0)).unwrap();
        catalog.enroll(bob, math, None, Some(75.0)).unwrap();

        assert_eq!(catalog.course_count(alice).unwrap(), 2);
        assert_eq!(catalog.aggregate_average_grade(alice).unwrap(), 87.5);
        assert_eq!(catalog.student_count(math).unwrap(), 2);

        let per_day = catalog.aggregate_enrollments_per_day();
        assert_eq!(per_day.len(), 1);
        assert_eq!(per_day[&fixed_now().date()], 3);
    }

    #[test]
    fn test_enroll_links_both_endpoints() {
        let mut catalog = Catalog::with_clock(fixed_now);
        let s = catalog.add_student("Carol");
        let c = catalog.add_course("Art");
        let e = catalog.enroll(s, c, Some(day(5)), None).unwrap();

        let enrollment = catalog.enrollment(e).unwrap();
        assert_eq!(enrollment.student, s);
        assert_eq!(enrollment.course, c);
        assert_eq!(enrollment.enrollment_date(), day(5));
        assert_eq!(catalog.student(s).unwrap().enrollments(), &[e]);
        assert_eq!(catalog.course(c).unwrap().enrollments(), &[e]);
    }

    #[test]
    fn test_counts_match_constructed_enrollments() {
        let mut catalog = Catalog::with_clock(fixed_now);
        let students: Vec<_> = (0..3).map(|i| catalog.add_student(format!("s{i}"))).collect();
        let courses: Vec<_> = (0..2).map(|i| catalog.add_course(format!("c{i}"))).collect();

        let pairs = [(0, 0), (0, 1), (1, 1), (2, 1), (2, 1)];
        for (s, c) in pairs {
            catalog.enroll(students[s], courses[c], None, None).unwrap();
        }

        for (i, &s) in students.iter().enumerate() {
            let expected = pairs.iter().filter(|(ps, _)| *ps == i).count();
            assert_eq!(catalog.course_count(s).unwrap(), expected);
        }
        for (i, &c) in courses.iter().enumerate() {
            let expected = pairs.iter().filter(|(_, pc)| *pc == i).count();
            assert_eq!(catalog.student_count(c).unwrap(), expected);
        }
    }

    #[test]
    fn test_average_over_graded_only() {
        let mut catalog = Catalog::with_clock(fixed_now);
        let s = catalog.add_student("Dan");
        let a = catalog.add_course("A");
        let b = catalog.add_course("B");
        let c = catalog.add_course("C");
        catalog.enroll(s, a, None, Some(60.0)).unwrap();
        catalog.enroll(s, b, None, None).unwrap();
        catalog.enroll(s, c, None, Some(100.0)).unwrap();

        assert_eq!(catalog.course_count(s).unwrap(), 3);
        assert_eq!(catalog.aggregate_average_grade(s).unwrap(), 80.0);

        let idle = catalog.add_student("Eve");
        catalog.enroll(idle, a, None, None).unwrap();
        assert_eq!(catalog.aggregate_average_grade(idle).unwrap(), 0.0);
    }

    #[test]
    fn test_per_day_partitions_all_enrollments() {
        let mut catalog = Catalog::with_clock(fixed_now);
        let s = catalog.add_student("Frank");
        let c = catalog.add_course("Physics");
        for d in [1, 1, 3, 7, 7, 7] {
            catalog.enroll(s, c, Some(day(d)), None).unwrap();
        }
        catalog.enroll(s, c, None, None).unwrap();

        let per_day = catalog.aggregate_enrollments_per_day();
        assert_eq!(per_day.values().sum::<usize>(), catalog.enrollments().len());
        assert_eq!(per_day[&day(1).date()], 2);
        assert_eq!(per_day[&day(2).date()], 1);
        assert_eq!(per_day[&day(7).date()], 3);

        let sorted: Vec<_> = catalog.enrollments_per_day_sorted().into_iter().collect();
        assert_eq!(sorted.first().unwrap().0, day(1).date());
        assert_eq!(sorted.last().unwrap().0, day(7).date());
    }

    #[test]
    fn test_empty_catalog_has_no_days() {
        assert!(Catalog::new().aggregate_enrollments_per_day().is_empty());
    }

    #[test]
    fn test_enroll_ref_type_mismatch_leaves_no_trace() {
        let mut catalog = Catalog::with_clock(fixed_now);
        let s = catalog.add_student("Gina");
        let c = catalog.add_course("Law");

        let err = catalog
            .enroll_ref(&c.into(), &c.into(), None, Some(50.0))
            .unwrap_err();
        assert_eq!(
            err,
            DomainError::TypeMismatch {
                expected: EntityKind::Student,
                found: EntityKind::Course,
            }
        );

        let err = catalog
            .enroll_ref(&s.into(), &s.into(), None, None)
            .unwrap_err();
        assert_eq!(
            err,
            DomainError::TypeMismatch {
                expected: EntityKind::Course,
                found: EntityKind::Student,
            }
        );

        assert_registries(&catalog, 1, 1, 0);
        assert_eq!(catalog.course_count(s).unwrap(), 0);
        assert_eq!(catalog.student_count(c).unwrap(), 0);
        assert_eq!(catalog.aggregate_average_grade(s).unwrap(), 0.0);
    }

    #[test]
    fn test_enroll_unknown_ids_leave_no_trace() {
        let mut catalog = Catalog::with_clock(fixed_now);
        let s = catalog.add_student("Hal");
        let c = catalog.add_course("Music");

        assert_eq!(
            catalog.enroll(StudentId(9), c, None, None).unwrap_err(),
            DomainError::UnknownStudent(StudentId(9))
        );
        assert_eq!(
            catalog.enroll(s, CourseId(4), None, None).unwrap_err(),
            DomainError::UnknownCourse(CourseId(4))
        );
        assert_registries(&catalog, 1, 1, 0);
        assert!(catalog.student(s).unwrap().enrollments().is_empty());
    }

    #[test]
    fn test_dynamic_enroll_requires_enrollment() {
        let mut catalog = Catalog::with_clock(fixed_now);
        let s = catalog.add_student("Ivy");
        let c = catalog.add_course("Chemistry");
        let e = catalog.enroll(s, c, None, Some(70.0)).unwrap();

        let err = catalog.student_enroll_ref(&s.into(), &c.into()).unwrap_err();
        assert_eq!(
            err,
            DomainError::TypeMismatch {
                expected: EntityKind::Enrollment,
                found: EntityKind::Course,
            }
        );
        let err = catalog
            .course_add_enrollment_ref(&c.into(), &s.into())
            .unwrap_err();
        assert!(matches!(err, DomainError::TypeMismatch { .. }));
        assert_eq!(catalog.course_count(s).unwrap(), 1);

        catalog.student_enroll_ref(&s.into(), &e.into()).unwrap();
        catalog.course_add_enrollment_ref(&c.into(), &e.into()).unwrap();
        assert_eq!(catalog.course_count(s).unwrap(), 2);
        assert_eq!(catalog.student_count(c).unwrap(), 2);
        assert_eq!(catalog.aggregate_average_grade(s).unwrap(), 70.0);
        assert_eq!(catalog.enrollments().len(), 1);
    }

    #[test]
    fn test_dynamic_enroll_checks_owner() {
        let mut catalog = Catalog::with_clock(fixed_now);
        let s = catalog.add_student("Jon");
        let other = catalog.add_student("Kim");
        let c = catalog.add_course("Biology");
        let e = catalog.enroll(s, c, None, None).unwrap();

        let err = catalog
            .student_enroll_ref(&other.into(), &e.into())
            .unwrap_err();
        assert!(matches!(err, DomainError::WrongOwner { .. }));
        assert_eq!(catalog.course_count(other).unwrap(), 0);
    }

    #[test]
    fn test_students_named_allows_duplicates() {
        let mut catalog = Catalog::new();
        catalog.add_student("Sam");
        catalog.add_student("Lee");
        catalog.add_student("Sam");

        assert_eq!(catalog.students_named("Sam").count(), 2);
        assert_eq!(catalog.students_named("Max").count(), 0);
    }
}
