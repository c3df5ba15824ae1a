//! Task-type matching: variant phrases first, then a fuzzy word count.

use std::sync::LazyLock;

use rc_standards::RuleTable;
use regex::Regex;

use super::{MatchOutcome, contains_word};

static NON_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\W+").expect("Invalid non-word regex"));

/// Check the task type against the rule table.
///
/// Stage one canonicalises the category and accepts any of its variants as a
/// substring. Stage two splits the canonical name into words and accepts
/// when at least `ratio` of them (and never fewer than one) occur as whole
/// words.
pub fn check(haystack: &str, task_type: &str, rules: &RuleTable) -> MatchOutcome {
    let canonical = rules.canonicalize(task_type);
    let variants = rules.variants_for(&canonical);

    if let Some(variant) = variants.iter().find(|v| haystack.contains(v.as_str())) {
        return MatchOutcome::found_with(format!("task type '{canonical}' matched variant '{variant}'"));
    }

    // Leading or trailing punctuation leaves empty tokens; they never match
    // but still count towards the threshold.
    let words: Vec<&str> = NON_WORD.split(&canonical).collect();
    let matched = words
        .iter()
        .filter(|word| !word.is_empty() && contains_word(haystack, word))
        .count();
    let required = (words.len() as f64 * rules.token_ratio()).max(1.0);

    if matched as f64 >= required {
        MatchOutcome::found_with(format!(
            "task type '{canonical}' matched {matched} of {} words",
            words.len()
        ))
    } else {
        MatchOutcome::missing(format!(
            "task type '{canonical}': no variant of {} found, {matched} of {} words matched",
            variants.len(),
            words.len()
        ))
    }
}
