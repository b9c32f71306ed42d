//! Build and render catalog reports.

use crate::domain::{Catalog, CatalogReport, CourseSummary, DayCount, DomainError, StudentSummary};
use crate::ports::ReportFormatter;
use tracing::debug;

/// Report service. Snapshots catalog aggregates and renders them.
pub struct ReportService {
    formatter: Box<dyn ReportFormatter>,
}

impl ReportService {
    pub fn new(formatter: Box<dyn ReportFormatter>) -> Self {
        Self { formatter }
    }

    pub fn render(&self, catalog: &Catalog) -> Result<String, DomainError> {
        let report = build_report(catalog);
        debug!(
            format = self.formatter.name(),
            students = report.students.len(),
            courses = report.courses.len(),
            days = report.enrollments_per_day.len(),
            "rendering report"
        );
        self.formatter.format_report(&report)
    }
}

/// Snapshot of every aggregate in `catalog`. Students and courses keep
/// registration order; days are ascending.
pub fn build_report(catalog: &Catalog) -> CatalogReport {
    let students = catalog
        .students()
        .iter()
        .map(|s| StudentSummary {
            name: s.name.clone(),
            course_count: s.course_count(),
            graded_count: s.graded_count(),
            average_grade: s.aggregate_average_grade(),
        })
        .collect();
    let courses = catalog
        .courses()
        .iter()
        .map(|c| CourseSummary {
            name: c.name.clone(),
            student_count: c.student_count(),
        })
        .collect();
    let enrollments_per_day = catalog
        .enrollments_per_day_sorted()
        .into_iter()
        .map(|(date, count)| DayCount { date, count })
        .collect();

    CatalogReport {
        students,
        courses,
        enrollments_per_day,
        total_enrollments: catalog.enrollments().len(),
    }
}
