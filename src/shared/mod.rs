//! Cross-cutting helpers shared by the binary and use cases.

pub mod config;
