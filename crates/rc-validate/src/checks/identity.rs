//! Person-name matching, shared by the student and instructor checks.

use rc_model::PersonName;

use super::MatchOutcome;
use crate::normalize::fold;

/// Every present name part must occur in `haystack`.
///
/// Parts are tried surname first, then given name, then patronymic, and the
/// first missing one is named in the diagnostic. There is no word-boundary
/// check: a part that only occurs inside a longer word still counts.
pub fn check(haystack: &str, name: &PersonName) -> MatchOutcome {
    for (part, value) in name.parts() {
        let needle = fold(value);
        if needle.is_empty() {
            continue;
        }
        if !haystack.contains(&needle) {
            return MatchOutcome::missing(format!("{} '{}' not found", part.label(), needle));
        }
    }
    MatchOutcome::found()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn name(patronymic: Option<&str>) -> PersonName {
        PersonName::new("Иванов", "Иван", patronymic.map(str::to_string)).unwrap()
    }

    #[test]
    fn finds_all_parts() {
        let outcome = check("выполнил: иванов иван иванович", &name(Some("Иванович")));
        assert!(outcome.found);
        assert!(outcome.diagnostic.is_none());
    }

    #[test]
    fn reports_first_missing_part() {
        let outcome = check("выполнил: петров иван", &name(None));
        assert!(!outcome.found);
        assert_eq!(outcome.diagnostic.as_deref(), Some("surname 'иванов' not found"));
    }

    #[test]
    fn absent_patronymic_is_not_required() {
        assert!(check("иванов иван", &name(None)).found);
    }

    #[test]
    fn accepts_part_inside_longer_word() {
        assert!(check("иванова ивановна", &name(None)).found);
    }
}
