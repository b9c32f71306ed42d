//! Application use cases. Orchestrate the catalog via ports.

pub mod import_service;
pub mod report_service;
pub mod sample;

pub use import_service::{ImportService, ImportStats, import_roster};
pub use report_service::{ReportService, build_report};
pub use sample::{SampleIds, seed_sample};
