//! `manifest.toml` of a rules directory.

#![deny(unsafe_code)]

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Manifest {
    pub manifest: ManifestHeader,
    #[serde(default)]
    pub notes: Option<ManifestNotes>,
    pub pins: Pins,
    #[serde(default)]
    pub policy: Option<Policy>,
    pub files: Vec<ManifestFile>,
}

impl Manifest {
    /// Fuzzy task-type ratio from `[policy]`, if the manifest sets one.
    pub fn token_ratio(&self) -> Option<f64> {
        self.policy
            .as_ref()
            .and_then(|policy| policy.task_type_token_ratio)
    }
}

/// Always `report-checker.rules-manifest`, version 1.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManifestHeader {
    pub schema: String,
    pub schema_version: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManifestNotes {
    pub summary: Option<String>,
}

/// Which phrasing the tables describe, e.g. `ru 2024.1`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pins {
    pub locale: String,
    pub version: String,
}

impl fmt::Display for Pins {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.locale, self.version)
    }
}

/// Tunable matching thresholds.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Policy {
    /// Share of task-type words that must appear for the fuzzy fallback.
    pub task_type_token_ratio: Option<f64>,
}

/// One rule file, pinned by sha256 and identified by its role
/// (`task_types`, `unification` or `phrases`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManifestFile {
    pub path: String,
    pub sha256: String,
    pub kind: String,
    pub role: String,
}
