//! Shared fixtures for validation tests.

#![allow(dead_code)]

use rc_ingest::{CharFragment, ExtractedDocument, ExtractedPage};
use rc_model::{PersonName, ReportInfo, StudentInfo, TeacherInfo, parse_submission_timestamp};
use rc_standards::RuleTable;

pub const TITLE: &str = "МИНИСТЕРСТВО НАУКИ И ВЫСШЕГО ОБРАЗОВАНИЯ\n\
    Лабораторная работа №2\n\
    «Нормализация  отношений»\n\
    по курсу: Базы данных\n\
    Выполнил студент группы ИТ-101\n\
    Иванов   Иван Иванович\n\
    Проверил: должность, уч. степень, уч. звание\n\
    Петров Пётр Сергеевич\n\
    Москва 2024";

pub fn rules() -> RuleTable {
    RuleTable::embedded().expect("embedded rules")
}

pub fn student() -> StudentInfo {
    StudentInfo::new(
        PersonName::new("Иванов", "Иван", Some("Иванович".into())).unwrap(),
        "ИТ-101",
    )
}

pub fn report() -> ReportInfo {
    ReportInfo {
        subject_name: "Базы данных".into(),
        task_name: "Нормализация отношений".into(),
        task_type: "Лабораторная работа".into(),
        teacher: TeacherInfo::new(
            PersonName::new("Петров", "Пётр", Some("Сергеевич".into())).unwrap(),
            "доцент, к.т.н.",
        ),
        required_sections: vec!["Введение".into(), "Заключение".into()],
        submitted_at: parse_submission_timestamp("2024-05-20T10:15:00+03:00").unwrap(),
    }
}

pub fn document(title: &str, body: &[&str]) -> ExtractedDocument {
    let mut pages = vec![ExtractedPage::from_text(title)];
    pages.extend(body.iter().map(|text| ExtractedPage::from_text(*text)));
    ExtractedDocument::new(pages)
}

pub fn good_document() -> ExtractedDocument {
    document(
        TITLE,
        &["1. Введение\nЦель работы", "2. Ход работы", "Заключение\nВыводы"],
    )
}

pub fn fragment(text: &str) -> CharFragment {
    CharFragment::new(text, 0.0, 0.0)
}
