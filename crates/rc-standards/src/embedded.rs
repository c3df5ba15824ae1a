//! Embedded rule tables.
//!
//! The default Russian tables are embedded at compile time using
//! `include_str!()` so a checker works without any files on disk.

/// Task-type categories and their accepted variants.
pub const RU_TASK_TYPES: &str = include_str!("../data/ru/task_types.csv");

/// Unification of near-synonym task-type categories.
pub const RU_UNIFICATION: &str = include_str!("../data/ru/unification.csv");

/// Decorations, role keywords and subject prefixes.
pub const RU_PHRASES: &str = include_str!("../data/ru/phrases.csv");

/// Manifest describing the embedded tables.
pub const RU_MANIFEST: &str = include_str!("../data/ru/manifest.toml");
