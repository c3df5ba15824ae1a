//! JSON page dumps.
//!
//! Shape: `{"pages": [{"text": "..." | null, "chars": [{"text": "2", "x": 1.0, "y": 2.0}]}]}`.

use std::path::Path;

use crate::error::{ExtractionError, Result};
use crate::page::ExtractedDocument;

/// Parse a JSON page dump held in memory.
pub fn parse_json_document(content: &str, path: &Path) -> Result<ExtractedDocument> {
    serde_json::from_str(content).map_err(|source| ExtractionError::Json {
        path: path.to_path_buf(),
        source,
    })
}

/// Load a JSON page dump from disk.
pub fn load_json_document(path: &Path) -> Result<ExtractedDocument> {
    let content = std::fs::read_to_string(path).map_err(|source| ExtractionError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    let document = parse_json_document(&content, path)?;
    tracing::debug!(
        path = %path.display(),
        pages = document.page_count(),
        "loaded page dump"
    );
    Ok(document)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::Page;

    #[test]
    fn parses_pages_with_missing_fields() {
        let json = r#"{"pages": [
            {"text": "Титульный лист", "chars": [{"text": "2", "x": 10.5, "y": 700.0}]},
            {"text": null},
            {}
        ]}"#;
        let doc = parse_json_document(json, Path::new("dump.json")).unwrap();
        assert_eq!(doc.page_count(), 3);
        assert_eq!(doc.pages[0].characters().unwrap()[0].x, 10.5);
        assert!(doc.pages[1].text().unwrap().is_none());
        assert!(doc.pages[2].text().unwrap().is_none());
    }

    #[test]
    fn rejects_wrong_shape() {
        let err = parse_json_document(r#"{"pages": "nope"}"#, Path::new("dump.json")).unwrap_err();
        assert!(err.to_string().contains("dump.json"));
    }
}
