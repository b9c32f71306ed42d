//! Report adapters. Implement ReportFormatter.

pub mod csv_report;
pub mod json_report;
pub mod text_report;

pub use csv_report::CsvReportFormatter;
pub use json_report::JsonReportFormatter;
pub use text_report::TextReportFormatter;

use crate::ports::ReportFormatter;
use crate::shared::config::ReportFormat;

/// Formatter for the configured output format.
pub fn formatter_for(format: ReportFormat) -> Box<dyn ReportFormatter> {
    match format {
        ReportFormat::Text => Box::new(TextReportFormatter),
        ReportFormat::Csv => Box::new(CsvReportFormatter::new()),
        ReportFormat::Json => Box::new(JsonReportFormatter),
    }
}
