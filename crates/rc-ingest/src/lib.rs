//! Extracted-document input for report checking.
//!
//! Converting a binary document into text is the job of an external
//! extractor. This crate models its output and loads it from disk.
//!
//! # Features
//!
//! - **[`Page`]**: the extraction boundary, returning typed errors instead of
//!   panicking when a page cannot be read
//! - **JSON dumps**: per-page text plus glyph fragments with positions
//! - **Plain-text dumps**: form-feed separated `pdftotext` output, decoded
//!   lazily per page
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use rc_ingest::{Page, load_document};
//!
//! let document = load_document(Path::new("report.txt"), None)?;
//! let title = document.title_page().map(|page| page.text()).transpose()?;
//! ```

mod error;
mod json;
mod page;
mod source;
mod text;

// === Error Types ===
pub use error::{ExtractionError, Result};

// === Pages ===
pub use page::{CharFragment, ExtractedDocument, ExtractedPage, Page};

// === Loaders ===
pub use json::{load_json_document, parse_json_document};
pub use source::{DocumentFormat, SourcePage, load_document};
pub use text::{RawTextPage, load_text_document, split_pages};
