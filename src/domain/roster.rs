//! Roster document: students, courses and enrollments described as data.
//!
//! References inside `enrollments` are indices into the document's own
//! `students` / `courses` lists, tagged with their kind.

use crate::domain::EntityRef;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Roster {
    #[serde(default)]
    pub students: Vec<String>,
    #[serde(default)]
    pub courses: Vec<String>,
    #[serde(default)]
    pub enrollments: Vec<RosterEnrollment>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RosterEnrollment {
    pub student: EntityRef,
    pub course: EntityRef,
    /// `None` means "enrolled now".
    #[serde(default)]
    pub date: Option<NaiveDateTime>,
    #[serde(default)]
    pub grade: Option<f64>,
}
