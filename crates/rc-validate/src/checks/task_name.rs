//! Task (assignment) name matching.

use rc_standards::Decoration;

use super::{MatchOutcome, contains_decorated};
use crate::normalize::fold;

/// Look for the task name bare or in one of its decorated forms.
pub fn check(haystack: &str, task_name: &str, decorations: &[Decoration]) -> MatchOutcome {
    let name = fold(task_name);
    if contains_decorated(haystack, &name, decorations) {
        MatchOutcome::found()
    } else {
        MatchOutcome::missing(format!("task name '{name}' not found"))
    }
}
