//! Submission year check: line text first, then glyph fragments.

use rc_ingest::{CharFragment, Page};

use super::MatchOutcome;

/// Look for `year` in the normalised (not lowercased) title text, falling
/// back to the title page's character fragments.
///
/// Fragments are only extracted when the text search misses, so a page
/// whose fragments cannot be read fails only when they are needed.
pub fn check<P: Page>(title_text: &str, page: &P, year: i32) -> rc_ingest::Result<MatchOutcome> {
    let year = year.to_string();
    if title_text.contains(&year) {
        return Ok(MatchOutcome::found());
    }
    let fragments = page.characters()?;
    Ok(check_fragments(&fragments, &year))
}

fn check_fragments(fragments: &[CharFragment], year: &str) -> MatchOutcome {
    match fragments.iter().find(|fragment| fragment.text.contains(year)) {
        Some(fragment) => MatchOutcome::found_with(format!(
            "year {year} found in fragment at ({}, {})",
            fragment.x, fragment.y
        )),
        None => MatchOutcome::missing(format!(
            "year {year} not in title text or any of {} fragments",
            fragments.len()
        )),
    }
}

#[cfg(test)]
mod tests {
    use rc_ingest::ExtractedPage;

    use super::*;

    #[test]
    fn found_in_text() {
        let page = ExtractedPage::from_text("Москва 2024");
        let outcome = check("Москва 2024", &page, 2024).unwrap();
        assert!(outcome.found);
        assert!(outcome.diagnostic.is_none());
    }

    #[test]
    fn falls_back_to_fragments() {
        let page = ExtractedPage::from_text("Москва 2 0 2 4")
            .with_chars(vec![CharFragment::new("2024", 120.0, 700.0)]);
        let outcome = check("Москва 2 0 2 4", &page, 2024).unwrap();
        assert!(outcome.found);
        assert!(outcome.diagnostic.unwrap().contains("(120, 700)"));
    }

    #[test]
    fn wrong_year_is_missing() {
        let page = ExtractedPage::from_text("Москва 2023")
            .with_chars(vec![CharFragment::new("2023", 0.0, 0.0)]);
        assert!(!check("Москва 2023", &page, 2024).unwrap().found);
    }
}
