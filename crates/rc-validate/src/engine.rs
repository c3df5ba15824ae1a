//! The validation run: guards, title-page checks, then body checks.

use rc_ingest::{ExtractedDocument, Page};
use rc_model::{ReportInfo, StudentInfo};
use rc_standards::RuleTable;
use tracing::{debug, info, info_span, trace, warn};

use crate::checks::{
    MatchOutcome, group, identity, role, sections, subject, task_name, task_type, year,
};
use crate::issue::{Check, Issue};
use crate::normalize::{fold, normalize};
use crate::report::ValidationReport;

const REDACTED: &str = "[redacted]";

/// Checks documents against one rule table.
///
/// A validator holds no state between runs; one instance can check any
/// number of documents, from any number of threads.
#[derive(Debug, Clone, Copy)]
pub struct Validator<'a> {
    rules: &'a RuleTable,
    log_values: bool,
}

impl<'a> Validator<'a> {
    pub fn new(rules: &'a RuleTable) -> Self {
        Self {
            rules,
            log_values: false,
        }
    }

    /// Include names and extracted text in log events.
    #[must_use]
    pub fn with_value_logging(mut self, enabled: bool) -> Self {
        self.log_values = enabled;
        self
    }

    pub fn rules(&self) -> &RuleTable {
        self.rules
    }

    /// Run every check and collect the issues.
    ///
    /// Field mismatches accumulate. A structural fault (no pages, no title
    /// text, an extraction error) replaces them with a single issue.
    pub fn validate<P: Page>(
        &self,
        document: &ExtractedDocument<P>,
        student: &StudentInfo,
        report: &ReportInfo,
    ) -> ValidationReport {
        let span = info_span!("validate", pages = document.page_count());
        let _enter = span.enter();

        let mut result = ValidationReport::default();
        if let Err(issue) = self.run(document, student, report, &mut result) {
            warn!(check = issue.check().label(), issue = %issue, "validation halted");
            result.halt(issue);
        }

        info!(
            issues = result.issues.len(),
            valid = result.is_valid(),
            "validation finished"
        );
        result
    }

    fn run<P: Page>(
        &self,
        document: &ExtractedDocument<P>,
        student: &StudentInfo,
        report: &ReportInfo,
        result: &mut ValidationReport,
    ) -> Result<(), Issue> {
        let Some(title_page) = document.title_page() else {
            return Err(Issue::EmptyDocument);
        };
        let Some(raw) = title_page.text()? else {
            return Err(Issue::TitlePageUnreadable);
        };
        let title = normalize(&raw);
        let haystack = title.to_lowercase();
        trace!(title = %self.redact(&haystack), "normalised title page");

        let phrases = self.rules.phrases();

        self.record(
            result,
            Check::StudentName,
            identity::check(&haystack, &student.name),
            Issue::StudentNameMismatch,
        );
        match group::check(&haystack, &student.group, &phrases.group_decorations) {
            Some(outcome) => self.record(result, Check::Group, outcome, Issue::GroupMismatch),
            None => debug!(check = Check::Group.label(), "no group supplied, skipped"),
        }
        self.record(
            result,
            Check::Subject,
            subject::check(&haystack, &report.subject_name, &phrases.subject_prefixes),
            Issue::SubjectMismatch,
        );
        self.record(
            result,
            Check::TaskName,
            task_name::check(&haystack, &report.task_name, &phrases.task_name_decorations),
            Issue::TaskNameMismatch,
        );
        self.record(
            result,
            Check::TaskType,
            task_type::check(&haystack, &report.task_type, self.rules),
            Issue::TaskTypeMismatch,
        );
        self.record(
            result,
            Check::TeacherName,
            identity::check(&haystack, &report.teacher.name),
            Issue::TeacherNameMismatch,
        );
        self.record(
            result,
            Check::TeacherRole,
            role::check(&haystack, &phrases.role_keywords),
            Issue::TeacherRoleMismatch,
        );

        let expected = report.submission_year();
        let outcome = year::check(&title, title_page, expected)?;
        self.record(
            result,
            Check::Year,
            outcome,
            Issue::YearMismatch { expected },
        );

        let body = body_text(document)?;
        trace!(chars = body.chars().count(), "assembled body text");
        let outcome = sections::check(
            &body,
            &report.required_sections,
            &phrases.section_decorations,
        );
        for note in outcome.diagnostics {
            debug!(check = Check::Sections.label(), detail = %self.redact(&note), "section missing");
            result.diagnose(Check::Sections, note);
        }
        if !outcome.missing.is_empty() {
            result.issues.push(Issue::MissingSections {
                sections: outcome.missing,
            });
        }
        Ok(())
    }

    fn record(
        &self,
        result: &mut ValidationReport,
        check: Check,
        outcome: MatchOutcome,
        issue: Issue,
    ) {
        if outcome.found {
            trace!(check = check.label(), "matched");
        } else {
            debug!(
                check = check.label(),
                detail = %self.redact(outcome.diagnostic.as_deref().unwrap_or_default()),
                "field mismatch"
            );
            result.issues.push(issue);
        }
        if let Some(note) = outcome.diagnostic {
            result.diagnose(check, note);
        }
    }

    fn redact<'s>(&self, value: &'s str) -> &'s str {
        if self.log_values { value } else { REDACTED }
    }
}

/// Normalised, lowercased text of every body page joined by spaces.
///
/// Pages without text contribute nothing.
fn body_text<P: Page>(document: &ExtractedDocument<P>) -> rc_ingest::Result<String> {
    let mut parts = Vec::new();
    for page in document.body_pages() {
        if let Some(text) = page.text()? {
            let folded = fold(&text);
            if !folded.is_empty() {
                parts.push(folded);
            }
        }
    }
    Ok(parts.join(" "))
}

/// Validate with a one-off [`Validator`].
pub fn validate<P: Page>(
    document: &ExtractedDocument<P>,
    student: &StudentInfo,
    report: &ReportInfo,
    rules: &RuleTable,
) -> ValidationReport {
    Validator::new(rules).validate(document, student, report)
}
