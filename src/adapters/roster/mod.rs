//! Roster adapters. Implement RosterSource.

pub mod json_roster;

pub use json_roster::JsonRoster;
