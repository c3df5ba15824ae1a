//! Error types for document extraction.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while reading extracted pages.
#[derive(Debug, Error)]
pub enum ExtractionError {
    /// Failed to read the document file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Page dump is not valid JSON of the expected shape.
    #[error("failed to parse page dump {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Page bytes could not be decoded as text.
    #[error("page {page}: {message}")]
    Decode { page: usize, message: String },

    /// File extension does not name a supported document format.
    #[error("unsupported document format: {path}")]
    UnsupportedFormat { path: PathBuf },
}

/// Result type for extraction operations.
pub type Result<T> = std::result::Result<T, ExtractionError>;
