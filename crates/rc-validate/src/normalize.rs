//! Text normalisation shared by every matcher.
//!
//! Normalising and case folding are separate steps: the year check reads
//! normalised text with its original case.

/// Collapse every whitespace run to one space and trim the ends.
pub fn normalize(raw: &str) -> String {
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Normalise and lowercase, for case-insensitive comparison.
pub fn fold(raw: &str) -> String {
    normalize(raw).to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapses_mixed_whitespace() {
        assert_eq!(normalize("  Иванов\t\tИван \n\u{a0}Иванович  "), "Иванов Иван Иванович");
    }

    #[test]
    fn keeps_case() {
        assert_eq!(normalize("ГРУППА ИТ-101"), "ГРУППА ИТ-101");
    }

    #[test]
    fn fold_lowercases_cyrillic() {
        assert_eq!(fold("Лабораторная  РАБОТА"), "лабораторная работа");
    }

    #[test]
    fn blank_input_is_empty() {
        assert_eq!(normalize(" \n\t "), "");
    }
}
