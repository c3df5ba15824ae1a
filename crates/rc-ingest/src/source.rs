//! Format-agnostic document loading.

use std::borrow::Cow;
use std::path::Path;

use crate::error::{ExtractionError, Result};
use crate::json::load_json_document;
use crate::page::{CharFragment, ExtractedDocument, ExtractedPage, Page};
use crate::text::{RawTextPage, load_text_document};

/// Supported extractor output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    /// JSON page dump with text and glyph fragments.
    Json,
    /// Form-feed separated plain text (`pdftotext` output).
    Text,
}

impl DocumentFormat {
    /// Guess the format from the file extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "json" => Some(Self::Json),
            "txt" | "text" => Some(Self::Text),
            _ => None,
        }
    }
}

/// A page from any supported format.
#[derive(Debug, Clone)]
pub enum SourcePage {
    Extracted(ExtractedPage),
    RawText(RawTextPage),
}

impl Page for SourcePage {
    fn text(&self) -> Result<Option<Cow<'_, str>>> {
        match self {
            Self::Extracted(page) => page.text(),
            Self::RawText(page) => page.text(),
        }
    }

    fn characters(&self) -> Result<Cow<'_, [CharFragment]>> {
        match self {
            Self::Extracted(page) => page.characters(),
            Self::RawText(page) => page.characters(),
        }
    }
}

/// Load a document, using `format` or else the file extension.
pub fn load_document(
    path: &Path,
    format: Option<DocumentFormat>,
) -> Result<ExtractedDocument<SourcePage>> {
    let format = format
        .or_else(|| DocumentFormat::from_path(path))
        .ok_or_else(|| ExtractionError::UnsupportedFormat {
            path: path.to_path_buf(),
        })?;
    let pages = match format {
        DocumentFormat::Json => load_json_document(path)?
            .pages
            .into_iter()
            .map(SourcePage::Extracted)
            .collect(),
        DocumentFormat::Text => load_text_document(path)?
            .pages
            .into_iter()
            .map(SourcePage::RawText)
            .collect(),
    };
    Ok(ExtractedDocument::new(pages))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_format_from_extension() {
        assert_eq!(
            DocumentFormat::from_path(Path::new("report.JSON")),
            Some(DocumentFormat::Json)
        );
        assert_eq!(
            DocumentFormat::from_path(Path::new("report.txt")),
            Some(DocumentFormat::Text)
        );
        assert_eq!(DocumentFormat::from_path(Path::new("report.pdf")), None);
    }

    #[test]
    fn unknown_extension_is_unsupported() {
        let err = load_document(Path::new("report.pdf"), None).unwrap_err();
        assert!(matches!(err, ExtractionError::UnsupportedFormat { .. }));
    }
}
