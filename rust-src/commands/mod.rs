//! CLI command implementations.

pub mod dashboard;
pub mod dump;
