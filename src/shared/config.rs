//! Application configuration. Roster input and report output.

use serde::Deserialize;
use std::fmt;
use std::str::FromStr;
use tracing::warn;

/// Output format for the catalog report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportFormat {
    #[default]
    Text,
    Csv,
    Json,
}

impl FromStr for ReportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" | "txt" => Ok(ReportFormat::Text),
            "csv" => Ok(ReportFormat::Csv),
            "json" => Ok(ReportFormat::Json),
            other => Err(format!("unknown report format: {}", other)),
        }
    }
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ReportFormat::Text => "text",
            ReportFormat::Csv => "csv",
            ReportFormat::Json => "json",
        })
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct AppConfig {
    /// JSON roster to import instead of the built-in sample. Read from ENROLLMENT_ROSTER_PATH.
    #[serde(default)]
    pub roster_path: Option<String>,

    /// `text`, `csv` or `json`. Read from ENROLLMENT_REPORT_FORMAT.
    #[serde(default)]
    pub report_format: Option<String>,
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        dotenv::dotenv().ok();
        let mut c = config::Config::builder();
        c = c.add_source(config::Environment::with_prefix("ENROLLMENT"));
        if let Ok(path) = std::env::var("ENROLLMENT_CONFIG") {
            c = c.add_source(config::File::with_name(&path));
        }
        c.build()?.try_deserialize()
    }

    /// Returns the report format. Defaults to text if unset; unknown values
    /// fall back to text with a warning.
    pub fn report_format_or_default(&self) -> ReportFormat {
        match self.report_format.as_deref() {
            None => ReportFormat::default(),
            Some(raw) => raw.parse().unwrap_or_else(|e: String| {
                warn!(value = raw, "{}, using text", e);
                ReportFormat::default()
            }),
        }
    }
}
