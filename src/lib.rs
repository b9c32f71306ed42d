//! enrollment-ledger: in-memory student/course enrollment bookkeeping with Hexagonal Architecture.

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod shared;
pub mod usecases;
