//! CSV report formatter. Uses the `csv` crate for safe serialization.
//!
//! Format: one semicolon-delimited table, `Kind;Key;Count;Graded;Average`,
//! where `Kind` is `student`, `course` or `day`. Columns that do not apply to
//! a row are left empty.

use crate::domain::{CatalogReport, DomainError};
use crate::ports::ReportFormatter;

pub struct CsvReportFormatter;

impl CsvReportFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for CsvReportFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for CsvReportFormatter {
    fn name(&self) -> &'static str {
        "csv"
    }

    fn format_report(&self, report: &CatalogReport) -> Result<String, DomainError> {
        report_to_csv(report).map_err(|e| DomainError::Report(e.to_string()))
    }
}

fn report_to_csv(report: &CatalogReport) -> Result<String, csv::Error> {
    let mut wtr = csv::WriterBuilder::new()
        .delimiter(b';')
        .has_headers(true)
        .from_writer(Vec::new());

    wtr.write_record(["Kind", "Key", "Count", "Graded", "Average"])?;

    for s in &report.students {
        wtr.write_record([
            "student".to_string(),
            s.name.clone(),
            s.course_count.to_string(),
            s.graded_count.to_string(),
            format!("{:.2}", s.average_grade),
        ])?;
    }
    for c in &report.courses {
        wtr.write_record([
            "course".to_string(),
            c.name.clone(),
            c.student_count.to_string(),
            String::new(),
            String::new(),
        ])?;
    }
    for d in &report.enrollments_per_day {
        wtr.write_record([
            "day".to_string(),
            d.date.format("%Y-%m-%d").to_string(),
            d.count.to_string(),
            String::new(),
            String::new(),
        ])?;
    }

    wtr.flush()?;
    let bytes = wtr
        .into_inner()
        .map_err(|e| csv::Error::from(std::io::Error::other(e.to_string())))?;

    String::from_utf8(bytes).map_err(|e| {
        csv::Error::from(std::io::Error::new(
            std::io::ErrorKind::InvalidData,
            e.to_string(),
        ))
    })
}
