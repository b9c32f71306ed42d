//! JSON report formatter (pretty-printed `CatalogReport`).

use crate::domain::{CatalogReport, DomainError};
use crate::ports::ReportFormatter;

pub struct JsonReportFormatter;

impl ReportFormatter for JsonReportFormatter {
    fn name(&self) -> &'static str {
        "json"
    }

    fn format_report(&self, report: &CatalogReport) -> Result<String, DomainError> {
        serde_json::to_string_pretty(report).map_err(|e| DomainError::Report(e.to_string()))
    }
}
