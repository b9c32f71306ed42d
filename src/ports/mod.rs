//! Port traits. API boundaries for the hexagon.
//!
//! Outbound only: the application pulls rosters from, and pushes reports
//! through, adapters.

pub mod outbound;

pub use outbound::{ReportFormatter, RosterSource};
