//! Subject (course name) matching.

use super::MatchOutcome;
use crate::normalize::{fold, normalize};

/// Look for the subject; on a miss, strip the course prefixes and retry.
///
/// A subject that is nothing but a prefix passes once stripped.
pub fn check(haystack: &str, subject: &str, prefixes: &[String]) -> MatchOutcome {
    let subject = fold(subject);
    if haystack.contains(&subject) {
        return MatchOutcome::found();
    }

    let mut stripped = subject.clone();
    for prefix in prefixes {
        let prefix = fold(prefix);
        if !prefix.is_empty() {
            stripped = stripped.replace(&prefix, "");
        }
    }
    let stripped = normalize(&stripped);

    if stripped.is_empty() {
        return MatchOutcome::found_with(format!("subject '{subject}' is only a course prefix"));
    }
    if haystack.contains(&stripped) {
        return MatchOutcome::found_with(format!("subject matched without prefix as '{stripped}'"));
    }
    MatchOutcome::missing(format!("subject '{subject}' not found (also tried '{stripped}')"))
}
