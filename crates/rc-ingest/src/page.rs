//! The extraction boundary: pages of an already-extracted document.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// A run of glyphs as reported by the extractor, with its rough position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CharFragment {
    pub text: String,
    #[serde(default)]
    pub x: f64,
    #[serde(default)]
    pub y: f64,
}

impl CharFragment {
    pub fn new(text: impl Into<String>, x: f64, y: f64) -> Self {
        Self {
            text: text.into(),
            x,
            y,
        }
    }
}

/// One page of an extracted document.
///
/// `Ok(None)` from [`Page::text`] means the extractor produced no text for
/// the page; `Err` means extraction itself failed.
pub trait Page {
    fn text(&self) -> Result<Option<Cow<'_, str>>>;

    fn characters(&self) -> Result<Cow<'_, [CharFragment]>>;
}

/// A page whose text and fragments were extracted up front.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExtractedPage {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub chars: Vec<CharFragment>,
}

impl ExtractedPage {
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            chars: Vec::new(),
        }
    }

    /// A page the extractor could not read.
    pub fn unreadable() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_chars(mut self, chars: Vec<CharFragment>) -> Self {
        self.chars = chars;
        self
    }
}

impl Page for ExtractedPage {
    fn text(&self) -> Result<Option<Cow<'_, str>>> {
        Ok(self.text.as_deref().map(Cow::Borrowed))
    }

    fn characters(&self) -> Result<Cow<'_, [CharFragment]>> {
        Ok(Cow::Borrowed(&self.chars))
    }
}

/// Pages in physical order; page 0 is the title page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractedDocument<P = ExtractedPage> {
    pub pages: Vec<P>,
}

impl<P> ExtractedDocument<P> {
    pub fn new(pages: Vec<P>) -> Self {
        Self { pages }
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn title_page(&self) -> Option<&P> {
        self.pages.first()
    }

    /// Every page after the title page.
    pub fn body_pages(&self) -> &[P] {
        self.pages.get(1..).unwrap_or(&[])
    }
}

impl<P> Default for ExtractedDocument<P> {
    fn default() -> Self {
        Self { pages: Vec::new() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn body_pages_skip_title() {
        let doc = ExtractedDocument::new(vec![
            ExtractedPage::from_text("title"),
            ExtractedPage::from_text("body"),
        ]);
        assert_eq!(doc.body_pages().len(), 1);
        assert_eq!(doc.title_page().and_then(|p| p.text.as_deref()), Some("title"));
    }

    #[test]
    fn empty_document_has_no_body() {
        let doc: ExtractedDocument = ExtractedDocument::default();
        assert!(doc.is_empty());
        assert!(doc.title_page().is_none());
        assert!(doc.body_pages().is_empty());
    }

    #[test]
    fn unreadable_page_reports_absent_text() {
        let page = ExtractedPage::unreadable();
        assert!(page.text().unwrap().is_none());
        assert!(page.characters().unwrap().is_empty());
    }
}
