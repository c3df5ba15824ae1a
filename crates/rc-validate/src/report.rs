//! The result of one validation run.

use serde::{Deserialize, Serialize, Serializer};

use crate::issue::{Check, Issue};

/// An advisory note from a matcher. Never affects validity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub check: Check,
    pub message: String,
}

/// Issues in the order the checks ran, plus matcher diagnostics.
///
/// An empty issue list means the report passed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    pub issues: Vec<Issue>,
    pub diagnostics: Vec<Diagnostic>,
}

impl ValidationReport {
    /// A report holding a single structural fault, for failures that happen
    /// before a document can be checked at all.
    pub fn structural(issue: Issue) -> Self {
        let mut report = Self::default();
        report.halt(issue);
        report
    }

    pub fn is_valid(&self) -> bool {
        self.issues.is_empty()
    }

    /// User-facing messages, one per issue.
    pub fn messages(&self) -> Vec<String> {
        self.issues.iter().map(Issue::message).collect()
    }

    pub fn has_structural_fault(&self) -> bool {
        self.issues.iter().any(Issue::is_structural)
    }

    pub fn diagnostics_for(&self, check: Check) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter().filter(move |d| d.check == check)
    }

    pub(crate) fn diagnose(&mut self, check: Check, message: impl Into<String>) {
        self.diagnostics.push(Diagnostic {
            check,
            message: message.into(),
        });
    }

    /// Replace every field result with a single structural issue.
    pub(crate) fn halt(&mut self, issue: Issue) {
        self.diagnose(Check::Document, issue.message());
        self.issues = vec![issue];
    }
}

#[derive(Serialize)]
struct ReportRecord<'a> {
    is_valid: bool,
    errors: Vec<String>,
    issues: &'a [Issue],
    diagnostics: &'a [Diagnostic],
}

impl Serialize for ValidationReport {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        ReportRecord {
            is_valid: self.is_valid(),
            errors: self.messages(),
            issues: &self.issues,
            diagnostics: &self.diagnostics,
        }
        .serialize(serializer)
    }
}
