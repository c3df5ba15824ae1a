//! Plain-text page dumps as written by `pdftotext`.
//!
//! Pages are separated by form feed (`\x0c`). Bytes are kept raw until a
//! page is read so one badly encoded page fails on its own.

use std::borrow::Cow;
use std::path::Path;

use crate::error::{ExtractionError, Result};
use crate::page::{CharFragment, ExtractedDocument, Page};

const FORM_FEED: u8 = 0x0c;

/// A page of a plain-text dump, decoded on demand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawTextPage {
    index: usize,
    bytes: Vec<u8>,
}

impl RawTextPage {
    pub fn new(index: usize, bytes: Vec<u8>) -> Self {
        Self { index, bytes }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    fn decode(&self) -> Result<&str> {
        std::str::from_utf8(&self.bytes).map_err(|e| ExtractionError::Decode {
            page: self.index + 1,
            message: e.to_string(),
        })
    }
}

impl Page for RawTextPage {
    fn text(&self) -> Result<Option<Cow<'_, str>>> {
        let text = self.decode()?;
        if text.trim().is_empty() {
            return Ok(None);
        }
        Ok(Some(Cow::Borrowed(text)))
    }

    fn characters(&self) -> Result<Cow<'_, [CharFragment]>> {
        let text = self.decode()?;
        Ok(Cow::Owned(glyph_runs(text)))
    }
}

/// Split a form-feed separated dump into pages.
///
/// The empty page `pdftotext` leaves after the final form feed is dropped.
pub fn split_pages(bytes: &[u8]) -> Vec<RawTextPage> {
    let mut chunks: Vec<&[u8]> = bytes.split(|b| *b == FORM_FEED).collect();
    if chunks.len() > 1 && chunks.last().is_some_and(|chunk| is_blank(chunk)) {
        chunks.pop();
    }
    if chunks.len() == 1 && chunks[0].is_empty() {
        return Vec::new();
    }
    chunks
        .into_iter()
        .enumerate()
        .map(|(index, chunk)| RawTextPage::new(index, chunk.to_vec()))
        .collect()
}

/// Load a plain-text dump from disk.
pub fn load_text_document(path: &Path) -> Result<ExtractedDocument<RawTextPage>> {
    let bytes = std::fs::read(path).map_err(|source| ExtractionError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    let pages = split_pages(&bytes);
    tracing::debug!(path = %path.display(), pages = pages.len(), "loaded text dump");
    Ok(ExtractedDocument::new(pages))
}

/// Whitespace-separated runs of each line, positioned at (column, line).
fn glyph_runs(text: &str) -> Vec<CharFragment> {
    let mut runs = Vec::new();
    for (line_no, line) in text.lines().enumerate() {
        let mut start: Option<usize> = None;
        let mut column = 0usize;
        let mut current = String::new();
        for ch in line.chars() {
            if ch.is_whitespace() {
                if let Some(begin) = start.take() {
                    runs.push(CharFragment::new(
                        std::mem::take(&mut current),
                        begin as f64,
                        line_no as f64,
                    ));
                }
            } else {
                start.get_or_insert(column);
                current.push(ch);
            }
            column += 1;
        }
        if let Some(begin) = start {
            runs.push(CharFragment::new(current, begin as f64, line_no as f64));
        }
    }
    runs
}

fn is_blank(chunk: &[u8]) -> bool {
    chunk.iter().all(u8::is_ascii_whitespace)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_form_feed_and_drops_trailing_page() {
        let pages = split_pages(b"title\x0cbody one\x0cbody two\x0c");
        assert_eq!(pages.len(), 3);
        assert_eq!(pages[2].text().unwrap().as_deref(), Some("body two"));
    }

    #[test]
    fn empty_input_has_no_pages() {
        assert!(split_pages(b"").is_empty());
    }

    #[test]
    fn blank_page_has_no_text() {
        let pages = split_pages(b"  \n \x0cbody");
        assert!(pages[0].text().unwrap().is_none());
    }

    #[test]
    fn invalid_utf8_fails_only_that_page() {
        let pages = split_pages(b"title\x0c\xff\xfe");
        assert!(pages[0].text().is_ok());
        let err = pages[1].text().unwrap_err();
        assert!(matches!(err, ExtractionError::Decode { page: 2, .. }));
    }

    #[test]
    fn glyph_runs_carry_positions() {
        let runs = glyph_runs("Москва  2024\nгод");
        let texts: Vec<&str> = runs.iter().map(|r| r.text.as_str()).collect();
        assert_eq!(texts, vec!["Москва", "2024", "год"]);
        assert_eq!((runs[1].x, runs[1].y), (8.0, 0.0));
        assert_eq!((runs[2].x, runs[2].y), (0.0, 1.0));
    }
}
