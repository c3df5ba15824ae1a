//! Study group matching.

use rc_standards::Decoration;

use super::{MatchOutcome, contains_decorated};
use crate::normalize::fold;

/// Look for the group bare or in one of its decorated forms.
///
/// Returns `None` when no group was supplied; the check is skipped.
pub fn check(haystack: &str, group: &str, decorations: &[Decoration]) -> Option<MatchOutcome> {
    let group = fold(group);
    if group.is_empty() {
        return None;
    }
    let outcome = if contains_decorated(haystack, &group, decorations) {
        MatchOutcome::found()
    } else {
        MatchOutcome::missing(format!(
            "group '{group}' not found bare or with {} decorations",
            decorations.len()
        ))
    };
    Some(outcome)
}
