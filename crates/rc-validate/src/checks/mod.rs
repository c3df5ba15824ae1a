//! Field matchers.
//!
//! Each matcher is a pure function over already-normalised text. It never
//! fails: a miss is reported through [`MatchOutcome`] and the orchestrator
//! turns it into an issue.

pub mod group;
pub mod identity;
pub mod role;
pub mod sections;
pub mod subject;
pub mod task_name;
pub mod task_type;
pub mod year;

use rc_standards::Decoration;
use regex::Regex;

/// Result of one matcher: whether the value was found, plus an optional
/// human-readable note for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchOutcome {
    pub found: bool,
    pub diagnostic: Option<String>,
}

impl MatchOutcome {
    pub fn found() -> Self {
        Self {
            found: true,
            diagnostic: None,
        }
    }

    /// Found, with a note on how.
    pub fn found_with(note: impl Into<String>) -> Self {
        Self {
            found: true,
            diagnostic: Some(note.into()),
        }
    }

    pub fn missing(note: impl Into<String>) -> Self {
        Self {
            found: false,
            diagnostic: Some(note.into()),
        }
    }
}

/// True when `needle` or any decorated form of it occurs in `haystack`.
pub(crate) fn contains_decorated(haystack: &str, needle: &str, decorations: &[Decoration]) -> bool {
    haystack.contains(needle)
        || decorations
            .iter()
            .any(|decoration| haystack.contains(&decoration.apply(needle)))
}

/// Whole-word search for a literal phrase.
///
/// Boundaries follow the Unicode `\b` definition, so Cyrillic words are
/// delimited the same way Latin ones are.
pub(crate) fn contains_word(haystack: &str, phrase: &str) -> bool {
    let pattern = format!(r"\b{}\b", regex::escape(phrase));
    Regex::new(&pattern)
        .map(|re| re.is_match(haystack))
        .unwrap_or(false)
}
