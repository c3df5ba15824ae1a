use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use comfy_table::Table;
use rc_ingest::{ExtractionError, load_document};
use rc_model::Submission;
use rc_standards::{RuleTable, VerifySummary, load_rule_table, rules_dir_from_env};
use rc_validate::{Issue, ValidationReport, Validator};
use tracing::{debug, info, info_span, warn};

use crate::logging::{log_data_enabled, redact_value};
use crate::summary::apply_table_style;
use crate::types::{CheckRequest, CheckResult};

/// Rules from `rules_dir`, then the environment, then the built-in tables.
pub fn resolve_rules(rules_dir: Option<&Path>) -> Result<RuleTable> {
    let dir = rules_dir.map(Path::to_path_buf).or_else(rules_dir_from_env);
    match &dir {
        Some(path) => info!(rules_dir = %path.display(), "loading rules directory"),
        None => debug!("using built-in rules"),
    }
    load_rule_table(dir.as_deref()).context("load rule table")
}

pub fn read_submission(path: &Path) -> Result<Submission> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("read submission {}", path.display()))?;
    serde_json::from_str(&contents)
        .with_context(|| format!("parse submission {}", path.display()))
}

pub fn run_check(request: &CheckRequest) -> Result<CheckResult> {
    let span = info_span!("check", document = %request.document.display());
    let _guard = span.enter();

    let rules = resolve_rules(request.rules_dir.as_deref())?;
    let submission = read_submission(&request.submission)?;
    let student = submission.student.name.to_string();
    debug!(
        student = %redact_value(&student),
        sections = submission.report.required_sections.len(),
        year = submission.report.submission_year(),
        "loaded submission"
    );

    let (page_count, report) = match load_document(&request.document, request.document_format) {
        Ok(document) => {
            let report = Validator::new(&rules)
                .with_value_logging(log_data_enabled())
                .validate(&document, &submission.student, &submission.report);
            (document.page_count(), report)
        }
        // A document that exists but cannot be parsed is a finding, not a
        // failure of the tool.
        Err(error @ (ExtractionError::Json { .. } | ExtractionError::Decode { .. })) => {
            warn!(%error, "document could not be read");
            (0, ValidationReport::structural(Issue::from(error)))
        }
        Err(error) => {
            return Err(error)
                .with_context(|| format!("load document {}", request.document.display()));
        }
    };

    Ok(CheckResult {
        document: request.document.clone(),
        page_count,
        rules: rules.pins().clone(),
        report,
    })
}

pub fn run_rules(rules_dir: Option<&Path>) -> Result<()> {
    let rules = resolve_rules(rules_dir)?;
    println!("Rules: {} (token ratio {})", rules.pins(), rules.token_ratio());
    let mut table = Table::new();
    table.set_header(vec!["Category", "Matched as", "Variants"]);
    apply_table_style(&mut table);
    for (category, variants) in rules.categories() {
        let canonical = rules.canonicalize(category);
        let matched_as = if canonical == category {
            "-".to_string()
        } else {
            canonical
        };
        let variants = if variants.is_empty() {
            "-".to_string()
        } else {
            variants.join(", ")
        };
        table.add_row(vec![category.to_string(), matched_as, variants]);
    }
    println!("{table}");
    Ok(())
}

pub fn run_verify_rules(dir: &Path) -> Result<VerifySummary> {
    let (_, summary) = RuleTable::verify_and_load(dir)
        .with_context(|| format!("verify rules directory {}", dir.display()))?;
    info!(
        files = summary.file_count,
        categories = summary.category_count,
        "rules directory verified"
    );
    Ok(summary)
}
