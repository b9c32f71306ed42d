//! Infrastructure adapters. Implement outbound ports.
//!
//! Roster readers and report formatters. Map errors to DomainError.

pub mod report;
pub mod roster;
