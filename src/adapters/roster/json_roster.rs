//! Implements RosterSource using a JSON document.
//!
//! The document is read eagerly (file) or held as text (inline).

use crate::domain::{DomainError, Roster};
use crate::ports::RosterSource;
use std::path::{Path, PathBuf};
use tracing::info;

enum Origin {
    Inline(String),
    File(PathBuf),
}

/// JSON roster reader.
pub struct JsonRoster {
    origin: Origin,
}

impl JsonRoster {
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            origin: Origin::Inline(text.into()),
        }
    }

    /// The file is read on each `load_roster` call.
    pub fn from_path(path: impl AsRef<Path>) -> Self {
        Self {
            origin: Origin::File(path.as_ref().to_path_buf()),
        }
    }

    fn parse(text: &str) -> Result<Roster, DomainError> {
        serde_json::from_str(text).map_err(|e| DomainError::Roster(format!("invalid JSON: {}", e)))
    }
}

impl RosterSource for JsonRoster {
    fn load_roster(&self) -> Result<Roster, DomainError> {
        match &self.origin {
            Origin::Inline(text) => Self::parse(text),
            Origin::File(path) => {
                let text = std::fs::read_to_string(path).map_err(|e| {
                    DomainError::Roster(format!("read {}: {}", path.display(), e))
                })?;
                let roster = Self::parse(&text)?;
                info!(
                    path = %path.display(),
                    students = roster.students.len(),
                    courses = roster.courses.len(),
                    enrollments = roster.enrollments.len(),
                    "loaded roster"
                );
                Ok(roster)
            }
        }
    }
}
