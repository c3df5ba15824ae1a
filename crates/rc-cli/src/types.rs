use std::path::PathBuf;

use rc_ingest::DocumentFormat;
use rc_standards::Pins;
use rc_validate::ValidationReport;

/// Inputs for one `check` run.
#[derive(Debug, Clone)]
pub struct CheckRequest {
    pub document: PathBuf,
    pub submission: PathBuf,
    /// Overrides detection from the file extension.
    pub document_format: Option<DocumentFormat>,
    pub rules_dir: Option<PathBuf>,
}

#[derive(Debug)]
pub struct CheckResult {
    pub document: PathBuf,
    pub page_count: usize,
    pub rules: Pins,
    pub report: ValidationReport,
}

impl CheckResult {
    pub fn has_issues(&self) -> bool {
        !self.report.is_valid()
    }
}
