//! End-to-end validation runs over in-memory documents.

mod common;

use common::{TITLE, document, fragment, good_document, report, rules, student};
use rc_ingest::{ExtractedDocument, ExtractedPage};
use rc_model::{PersonName, StudentInfo};
use rc_validate::{Check, Issue, Validator};

#[test]
fn well_formed_report_is_valid() {
    let rules = rules();
    let result = Validator::new(&rules).validate(&good_document(), &student(), &report());
    assert!(result.is_valid(), "{:?}", result.messages());
}

#[test]
fn empty_document_yields_only_empty_issue() {
    let rules = rules();
    let doc: ExtractedDocument = ExtractedDocument::default();
    let result = Validator::new(&rules).validate(&doc, &student(), &report());

    assert_eq!(result.issues, vec![Issue::EmptyDocument]);
    assert_eq!(result.messages(), vec!["Отчет пустой"]);
}

#[test]
fn unreadable_title_yields_only_extraction_issue() {
    let rules = rules();
    let doc = ExtractedDocument::new(vec![
        ExtractedPage::unreadable(),
        ExtractedPage::from_text("Введение"),
    ]);
    let result = Validator::new(&rules).validate(&doc, &student(), &report());

    assert_eq!(
        result.messages(),
        vec!["Не удалось извлечь текст с титульного листа"]
    );
    assert!(result.has_structural_fault());
}

#[test]
fn scenario_identity_and_group_with_varied_case_and_spacing() {
    let rules = rules();
    let student = StudentInfo::new(PersonName::new("Иванов", "Иван", None).unwrap(), "IT-101");
    let doc = document("ИВАНОВ    иван\n\n ...  группа   it-101", &[]);
    let result = Validator::new(&rules).validate(&doc, &student, &report());

    let checks: Vec<Check> = result.issues.iter().map(Issue::check).collect();
    assert!(!checks.contains(&Check::StudentName));
    assert!(!checks.contains(&Check::Group));
}

#[test]
fn scenario_unified_task_type_passes_on_single_variant() {
    let rules = rules();
    let mut info = report();
    info.task_type = "практическая работа".into();
    let title = TITLE.replace("Лабораторная работа", "Отчет: практика");
    let doc = document(&title, &["Введение Заключение"]);
    let result = Validator::new(&rules).validate(&doc, &student(), &info);

    assert!(!result.issues.contains(&Issue::TaskTypeMismatch));
    assert!(result.is_valid(), "{:?}", result.messages());
}

#[test]
fn task_type_falls_back_to_whole_word_count() {
    let rules = rules();
    let mut info = report();
    info.task_type = "Курсовая работа".into();
    let title = TITLE.replace("Лабораторная работа", "Итоговая работа");
    let doc = document(&title, &["Введение Заключение"]);
    let result = Validator::new(&rules).validate(&doc, &student(), &info);

    assert!(result.is_valid(), "{:?}", result.messages());
    let notes: Vec<&str> = result
        .diagnostics_for(Check::TaskType)
        .map(|d| d.message.as_str())
        .collect();
    assert_eq!(notes, vec!["task type 'курсовая работа' matched 1 of 2 words"]);
}

#[test]
fn scenario_sections_reported_in_one_aggregate_issue() {
    let rules = rules();
    let mut info = report();
    info.required_sections = vec!["введение".into(), "заключение".into()];
    let doc = document(TITLE, &["введение: постановка задачи", "выводы"]);
    let result = Validator::new(&rules).validate(&doc, &student(), &info);

    assert_eq!(
        result.issues,
        vec![Issue::MissingSections {
            sections: vec!["заключение".into()]
        }]
    );
    assert_eq!(
        result.messages(),
        vec!["Отсутствуют обязательные разделы: заключение"]
    );
}

#[test]
fn scenario_year_found_in_character_fragment() {
    let rules = rules();
    let title = TITLE.replace("2024", "2 0 2 4");
    let doc = ExtractedDocument::new(vec![
        ExtractedPage::from_text(title)
            .with_chars(vec![fragment("Москва"), fragment("2024")]),
        ExtractedPage::from_text("Введение. Заключение"),
    ]);
    let result = Validator::new(&rules).validate(&doc, &student(), &report());

    assert!(result.is_valid(), "{:?}", result.messages());
    assert_eq!(result.diagnostics_for(Check::Year).count(), 1);
}

#[test]
fn wrong_year_names_expected_year() {
    let rules = rules();
    let doc = document(&TITLE.replace("2024", "2023"), &["Введение Заключение"]);
    let result = Validator::new(&rules).validate(&doc, &student(), &report());

    assert_eq!(
        result.messages(),
        vec!["Неверный год выполнения отчета (ожидался 2024)"]
    );
}

#[test]
fn every_mismatch_is_reported_in_check_order() {
    let rules = rules();
    let doc = document("Титульный лист без данных", &[]);
    let result = Validator::new(&rules).validate(&doc, &student(), &report());

    assert_eq!(
        result.messages(),
        vec![
            "Неверное ФИО студента",
            "Неверная группа студента",
            "Неправильное название предмета",
            "Неверное название задания",
            "Неверный тип задания",
            "Неверное ФИО преподавателя",
            "Неверная должность преподавателя",
            "Неверный год выполнения отчета (ожидался 2024)",
            "Отсутствуют обязательные разделы: Введение, Заключение",
        ]
    );
    assert!(!result.has_structural_fault());
}

#[test]
fn two_independent_mismatches_give_two_issues() {
    let rules = rules();
    let title = TITLE.replace("ИТ-101", "ИТ-202").replace("Петров", "Сидоров");
    let result = Validator::new(&rules).validate(
        &document(&title, &["Введение", "Заключение"]),
        &student(),
        &report(),
    );

    assert_eq!(
        result.issues,
        vec![Issue::GroupMismatch, Issue::TeacherNameMismatch]
    );
}

#[test]
fn removing_a_section_never_changes_other_checks() {
    let rules = rules();
    let validator = Validator::new(&rules);
    let doc = document(
        &TITLE.replace("Иванов   Иван Иванович", "Смирнов Сергей Петрович"),
        &["Введение"],
    );

    let full = validator.validate(&doc, &student(), &report());
    let mut fewer = report();
    fewer.required_sections.pop();
    let reduced = validator.validate(&doc, &student(), &fewer);

    let field_issues = |issues: &[Issue]| -> Vec<Issue> {
        issues
            .iter()
            .filter(|issue| issue.check() != Check::Sections)
            .cloned()
            .collect()
    };
    assert_eq!(field_issues(&full.issues), field_issues(&reduced.issues));
    assert_eq!(full.issues.len(), 2);
    assert_eq!(reduced.issues, vec![Issue::StudentNameMismatch]);
}

#[test]
fn empty_group_skips_group_check() {
    let rules = rules();
    let student = StudentInfo::new(student().name, "");
    let doc = document(&TITLE.replace("ИТ-101", ""), &["Введение Заключение"]);
    let result = Validator::new(&rules).validate(&doc, &student, &report());

    assert!(result.is_valid(), "{:?}", result.messages());
    assert_eq!(result.diagnostics_for(Check::Group).count(), 0);
}

#[test]
fn body_pages_without_text_are_skipped() {
    let rules = rules();
    let doc = ExtractedDocument::new(vec![
        ExtractedPage::from_text(TITLE),
        ExtractedPage::unreadable(),
        ExtractedPage::from_text("Введение"),
        ExtractedPage::from_text(""),
        ExtractedPage::from_text("Заключение"),
    ]);
    let result = Validator::new(&rules).validate(&doc, &student(), &report());
    assert!(result.is_valid(), "{:?}", result.messages());
}

#[test]
fn section_on_title_page_does_not_count() {
    let rules = rules();
    let title = format!("{TITLE}\nВведение Заключение");
    let result = Validator::new(&rules).validate(&document(&title, &[]), &student(), &report());
    assert!(matches!(
        result.issues.as_slice(),
        [Issue::MissingSections { sections }] if sections.len() == 2
    ));
}
