//! Required-section matching over the body pages.

use rc_standards::Decoration;

use super::contains_word;
use crate::normalize::fold;

/// Sections that could not be found, with a note per miss.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SectionOutcome {
    /// Labels as the caller supplied them, in the order given.
    pub missing: Vec<String>,
    pub diagnostics: Vec<String>,
}

impl SectionOutcome {
    pub fn all_found(&self) -> bool {
        self.missing.is_empty()
    }
}

/// Check every required section against the body text.
///
/// A label is found when it, or one of its decorated forms, occurs as a
/// whole word. Blank labels are ignored.
pub fn check(body: &str, sections: &[String], decorations: &[Decoration]) -> SectionOutcome {
    let mut outcome = SectionOutcome::default();
    for section in sections {
        let label = fold(section);
        if label.is_empty() {
            continue;
        }
        let found = contains_word(body, &label)
            || decorations
                .iter()
                .any(|decoration| contains_word(body, &decoration.apply(&label)));
        if !found {
            outcome.diagnostics.push(format!(
                "section '{label}' not found bare or with {} decorations",
                decorations.len()
            ));
            outcome.missing.push(section.clone());
        }
    }
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decorations() -> Vec<Decoration> {
        ["{} работы", "{} задания", "{}:"]
            .into_iter()
            .filter_map(Decoration::parse)
            .collect()
    }

    fn labels(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn reports_every_missing_label() {
        let body = "введение: цель работы. выводы";
        let outcome = check(
            body,
            &labels(&["Введение", "Заключение", "Список литературы"]),
            &decorations(),
        );
        assert_eq!(outcome.missing, labels(&["Заключение", "Список литературы"]));
        assert_eq!(outcome.diagnostics.len(), 2);
    }

    #[test]
    fn label_inside_a_word_does_not_count() {
        let outcome = check("подзаключение", &labels(&["заключение"]), &decorations());
        assert!(!outcome.all_found());
    }

    #[test]
    fn matches_across_case_and_spacing() {
        let outcome = check("3. список литературы", &labels(&["Список  Литературы"]), &decorations());
        assert!(outcome.all_found());
    }

    #[test]
    fn blank_labels_are_ignored() {
        assert!(check("", &labels(&["", "  "]), &decorations()).all_found());
    }
}
