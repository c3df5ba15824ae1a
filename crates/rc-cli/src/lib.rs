//! CLI library components for the report checker.

pub mod commands;
pub mod logging;
pub mod summary;
pub mod types;
