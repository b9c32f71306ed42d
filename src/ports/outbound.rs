//! Outbound ports. Application calls into infrastructure.
//!
//! Implemented by adapters.

use crate::domain::{CatalogReport, DomainError, Roster};

/// Source of roster documents (JSON text, files, fixtures).
pub trait RosterSource {
    /// Parse and return the roster. Reference kinds are not checked here;
    /// the import use case does that against the catalog.
    fn load_roster(&self) -> Result<Roster, DomainError>;
}

/// Renders a catalog report into a textual format.
pub trait ReportFormatter {
    /// Short format name, e.g. `"csv"`.
    fn name(&self) -> &'static str;

    fn format_report(&self, report: &CatalogReport) -> Result<String, DomainError>;
}
