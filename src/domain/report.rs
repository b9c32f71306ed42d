//! Read-only snapshot of the catalog aggregates, ready for formatting.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentSummary {
    pub name: String,
    pub course_count: usize,
    pub graded_count: usize,
    pub average_grade: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseSummary {
    pub name: String,
    /// Enrollment count; a student enrolled twice counts twice.
    pub student_count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayCount {
    pub date: NaiveDate,
    pub count: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogReport {
    pub students: Vec<StudentSummary>,
    pub courses: Vec<CourseSummary>,
    /// Ascending by date.
    pub enrollments_per_day: Vec<DayCount>,
    pub total_enrollments: usize,
}
