//! Instructor role check.
//!
//! This does not look for the supplied role value. It only confirms the
//! title page carries every role keyword (position, academic degree, rank).

use super::MatchOutcome;

pub fn check(haystack: &str, keywords: &[String]) -> MatchOutcome {
    match keywords
        .iter()
        .find(|keyword| !haystack.contains(keyword.as_str()))
    {
        Some(keyword) => MatchOutcome::missing(format!("role keyword '{keyword}' not found")),
        None => MatchOutcome::found(),
    }
}
