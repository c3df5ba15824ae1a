//! Validation issue types.
//!
//! Each variant carries only the data its message needs. Message text is
//! what the user reads, so its wording is kept stable.

use std::fmt;

use rc_ingest::ExtractionError;
use serde::{Deserialize, Serialize};

/// The check an issue or diagnostic belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Check {
    /// Document-level guards and extraction.
    Document,
    StudentName,
    Group,
    Subject,
    TaskName,
    TaskType,
    TeacherName,
    TeacherRole,
    Year,
    Sections,
}

impl Check {
    /// Checks in the order they run.
    pub const fn all() -> &'static [Self] {
        &[
            Self::Document,
            Self::StudentName,
            Self::Group,
            Self::Subject,
            Self::TaskName,
            Self::TaskType,
            Self::TeacherName,
            Self::TeacherRole,
            Self::Year,
            Self::Sections,
        ]
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Document => "document",
            Self::StudentName => "student name",
            Self::Group => "group",
            Self::Subject => "subject",
            Self::TaskName => "task name",
            Self::TaskType => "task type",
            Self::TeacherName => "teacher name",
            Self::TeacherRole => "teacher role",
            Self::Year => "year",
            Self::Sections => "sections",
        }
    }
}

/// Validation issue - each variant carries only its needed data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Issue {
    // Structural faults, always reported alone
    /// The document has no pages
    EmptyDocument,
    /// The title page produced no text
    TitlePageUnreadable,
    /// Extraction or decoding failed part way through
    ProcessingFailed { reason: String },

    // Title page
    StudentNameMismatch,
    GroupMismatch,
    SubjectMismatch,
    TaskNameMismatch,
    TaskTypeMismatch,
    TeacherNameMismatch,
    TeacherRoleMismatch,
    YearMismatch { expected: i32 },

    // Body
    /// Every required section that could not be found, in the order given
    MissingSections { sections: Vec<String> },
}

impl Issue {
    pub fn check(&self) -> Check {
        match self {
            Issue::EmptyDocument | Issue::TitlePageUnreadable | Issue::ProcessingFailed { .. } => {
                Check::Document
            }
            Issue::StudentNameMismatch => Check::StudentName,
            Issue::GroupMismatch => Check::Group,
            Issue::SubjectMismatch => Check::Subject,
            Issue::TaskNameMismatch => Check::TaskName,
            Issue::TaskTypeMismatch => Check::TaskType,
            Issue::TeacherNameMismatch => Check::TeacherName,
            Issue::TeacherRoleMismatch => Check::TeacherRole,
            Issue::YearMismatch { .. } => Check::Year,
            Issue::MissingSections { .. } => Check::Sections,
        }
    }

    /// Structural faults end the run; field mismatches accumulate.
    pub fn is_structural(&self) -> bool {
        self.check() == Check::Document
    }

    /// User-facing message.
    pub fn message(&self) -> String {
        match self {
            Issue::EmptyDocument => "Отчет пустой".to_string(),
            Issue::TitlePageUnreadable => {
                "Не удалось извлечь текст с титульного листа".to_string()
            }
            Issue::ProcessingFailed { reason } => format!("Ошибка при обработке PDF: {reason}"),
            Issue::StudentNameMismatch => "Неверное ФИО студента".to_string(),
            Issue::GroupMismatch => "Неверная группа студента".to_string(),
            Issue::SubjectMismatch => "Неправильное название предмета".to_string(),
            Issue::TaskNameMismatch => "Неверное название задания".to_string(),
            Issue::TaskTypeMismatch => "Неверный тип задания".to_string(),
            Issue::TeacherNameMismatch => "Неверное ФИО преподавателя".to_string(),
            Issue::TeacherRoleMismatch => "Неверная должность преподавателя".to_string(),
            Issue::YearMismatch { expected } => {
                format!("Неверный год выполнения отчета (ожидался {expected})")
            }
            Issue::MissingSections { sections } => {
                format!("Отсутствуют обязательные разделы: {}", sections.join(", "))
            }
        }
    }
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}

impl From<ExtractionError> for Issue {
    fn from(error: ExtractionError) -> Self {
        Issue::ProcessingFailed {
            reason: error.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_are_stable() {
        assert_eq!(Issue::EmptyDocument.message(), "Отчет пустой");
        assert_eq!(
            Issue::YearMismatch { expected: 2024 }.to_string(),
            "Неверный год выполнения отчета (ожидался 2024)"
        );
        assert_eq!(
            Issue::MissingSections {
                sections: vec!["Заключение".into(), "Выводы".into()]
            }
            .message(),
            "Отсутствуют обязательные разделы: Заключение, Выводы"
        );
    }

    #[test]
    fn extraction_errors_become_processing_failures() {
        let issue = Issue::from(ExtractionError::Decode {
            page: 2,
            message: "invalid utf-8".into(),
        });
        assert!(issue.is_structural());
        assert!(issue.message().starts_with("Ошибка при обработке PDF: "));
    }

    #[test]
    fn field_mismatches_are_not_structural() {
        assert!(!Issue::GroupMismatch.is_structural());
        assert_eq!(Issue::TaskTypeMismatch.check(), Check::TaskType);
    }

    #[test]
    fn serializes_with_kind_tag() {
        let json = serde_json::to_value(Issue::YearMismatch { expected: 2024 }).unwrap();
        assert_eq!(json, serde_json::json!({"kind": "year_mismatch", "expected": 2024}));
    }
}
