//! Plain-text report formatter for terminal output.

use crate::domain::{CatalogReport, DomainError};
use crate::ports::ReportFormatter;
use std::fmt::Write;

pub struct TextReportFormatter;

impl ReportFormatter for TextReportFormatter {
    fn name(&self) -> &'static str {
        "text"
    }

    fn format_report(&self, report: &CatalogReport) -> Result<String, DomainError> {
        render(report).map_err(|e| DomainError::Report(e.to_string()))
    }
}

fn render(report: &CatalogReport) -> Result<String, std::fmt::Error> {
    let mut out = String::new();

    writeln!(out, "Students")?;
    writeln!(out, "  {:<20} {:>7} {:>7} {:>8}", "name", "courses", "graded", "average")?;
    for s in &report.students {
        writeln!(
            out,
            "  {:<20} {:>7} {:>7} {:>8.2}",
            s.name, s.course_count, s.graded_count, s.average_grade
        )?;
    }

    writeln!(out)?;
    writeln!(out, "Courses")?;
    writeln!(out, "  {:<20} {:>8}", "name", "students")?;
    for c in &report.courses {
        writeln!(out, "  {:<20} {:>8}", c.name, c.student_count)?;
    }

    writeln!(out)?;
    writeln!(out, "Enrollments per day")?;
    for d in &report.enrollments_per_day {
        writeln!(out, "  {}  {}", d.date.format("%Y-%m-%d"), d.count)?;
    }
    writeln!(out, "  total       {}", report.total_enrollments)?;

    Ok(out)
}
