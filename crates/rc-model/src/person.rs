//! People named on a title page.

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};

/// Full name as written on a Russian title page.
///
/// Surname and given name are always non-empty after trimming. An empty
/// patronymic is normalised to `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "PersonNameRecord", into = "PersonNameRecord")]
pub struct PersonName {
    surname: String,
    given_name: String,
    patronymic: Option<String>,
}

impl PersonName {
    pub fn new(
        surname: impl Into<String>,
        given_name: impl Into<String>,
        patronymic: Option<String>,
    ) -> Result<Self> {
        let surname = surname.into().trim().to_string();
        let given_name = given_name.into().trim().to_string();
        if surname.is_empty() {
            return Err(ModelError::EmptyNamePart { part: "surname" });
        }
        if given_name.is_empty() {
            return Err(ModelError::EmptyNamePart { part: "given name" });
        }
        let patronymic = patronymic
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty());
        Ok(Self {
            surname,
            given_name,
            patronymic,
        })
    }

    pub fn surname(&self) -> &str {
        &self.surname
    }

    pub fn given_name(&self) -> &str {
        &self.given_name
    }

    pub fn patronymic(&self) -> Option<&str> {
        self.patronymic.as_deref()
    }

    /// Name parts in matching order: surname, given name, patronymic.
    pub fn parts(&self) -> Vec<(NamePart, &str)> {
        let mut parts = vec![
            (NamePart::Surname, self.surname.as_str()),
            (NamePart::GivenName, self.given_name.as_str()),
        ];
        if let Some(patronymic) = self.patronymic.as_deref() {
            parts.push((NamePart::Patronymic, patronymic));
        }
        parts
    }
}

impl std::fmt::Display for PersonName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.surname, self.given_name)?;
        if let Some(patronymic) = &self.patronymic {
            write!(f, " {patronymic}")?;
        }
        Ok(())
    }
}

/// Component of a [`PersonName`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NamePart {
    Surname,
    GivenName,
    Patronymic,
}

impl NamePart {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Surname => "surname",
            Self::GivenName => "given name",
            Self::Patronymic => "patronymic",
        }
    }
}

/// Wire shape of a name, matching the upload form field names.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct PersonNameRecord {
    surname: String,
    name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    patronymic: Option<String>,
}

impl TryFrom<PersonNameRecord> for PersonName {
    type Error = ModelError;

    fn try_from(record: PersonNameRecord) -> Result<Self> {
        Self::new(record.surname, record.name, record.patronymic)
    }
}

impl From<PersonName> for PersonNameRecord {
    fn from(name: PersonName) -> Self {
        Self {
            surname: name.surname,
            name: name.given_name,
            patronymic: name.patronymic,
        }
    }
}

/// A student submitting a report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentInfo {
    #[serde(flatten)]
    pub name: PersonName,
    /// Study group identifier, e.g. `ИТ-101`. Empty means "not checked".
    #[serde(default)]
    pub group: String,
}

impl StudentInfo {
    pub fn new(name: PersonName, group: impl Into<String>) -> Self {
        Self {
            name,
            group: group.into(),
        }
    }
}

/// The supervising instructor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeacherInfo {
    #[serde(flatten)]
    pub name: PersonName,
    /// Free-text position and degree, e.g. `доцент, к.т.н.`.
    #[serde(default)]
    pub status: String,
}

impl TeacherInfo {
    pub fn new(name: PersonName, status: impl Into<String>) -> Self {
        Self {
            name,
            status: status.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_and_drops_blank_patronymic() {
        let name = PersonName::new("  Иванов ", "Иван", Some("   ".to_string())).unwrap();
        assert_eq!(name.surname(), "Иванов");
        assert_eq!(name.patronymic(), None);
        assert_eq!(name.parts().len(), 2);
    }

    #[test]
    fn rejects_blank_surname() {
        let err = PersonName::new(" ", "Иван", None).unwrap_err();
        assert!(matches!(err, ModelError::EmptyNamePart { part: "surname" }));
    }

    #[test]
    fn rejects_blank_given_name() {
        assert!(PersonName::new("Иванов", "", None).is_err());
    }

    #[test]
    fn parts_keep_matching_order() {
        let name = PersonName::new("Петров", "Пётр", Some("Петрович".to_string())).unwrap();
        let kinds: Vec<NamePart> = name.parts().into_iter().map(|(kind, _)| kind).collect();
        assert_eq!(
            kinds,
            vec![NamePart::Surname, NamePart::GivenName, NamePart::Patronymic]
        );
        assert_eq!(name.to_string(), "Петров Пётр Петрович");
    }
}
