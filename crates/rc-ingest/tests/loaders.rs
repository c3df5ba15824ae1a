//! Integration tests for document loading from disk.

use std::fs;

use rc_ingest::{DocumentFormat, ExtractionError, Page, load_document};
use tempfile::TempDir;

#[test]
fn loads_pdftotext_dump() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("report.txt");
    fs::write(
        &path,
        "МИНИСТЕРСТВО НАУКИ\nОтчёт\n2024\x0cВведение\nТекст\x0cЗаключение\n\x0c",
    )
    .unwrap();

    let document = load_document(&path, None).expect("load text dump");

    assert_eq!(document.page_count(), 3);
    let title = document.pages[0].text().unwrap().unwrap();
    assert!(title.contains("Отчёт"));
    let runs = document.pages[0].characters().unwrap();
    assert!(runs.iter().any(|run| run.text == "2024"));
}

#[test]
fn loads_json_dump_regardless_of_extension_when_format_given() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("pages.out");
    fs::write(
        &path,
        r#"{"pages": [{"text": "Титул", "chars": [{"text": "2024", "x": 1.0, "y": 2.0}]}, {"text": null}]}"#,
    )
    .unwrap();

    let document = load_document(&path, Some(DocumentFormat::Json)).expect("load json dump");

    assert_eq!(document.page_count(), 2);
    assert_eq!(document.pages[0].characters().unwrap()[0].text, "2024");
    assert!(document.pages[1].text().unwrap().is_none());
}

#[test]
fn missing_file_reports_path() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("absent.txt");

    let err = load_document(&path, None).unwrap_err();

    assert!(matches!(err, ExtractionError::FileRead { .. }));
    assert!(err.to_string().contains("absent.txt"));
}

#[test]
fn empty_text_file_has_no_pages() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("empty.txt");
    fs::write(&path, "").unwrap();

    let document = load_document(&path, None).expect("load empty dump");
    assert!(document.is_empty());
}
