use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("{part} must not be empty")]
    EmptyNamePart { part: &'static str },
    #[error("invalid submission timestamp '{value}': expected ISO 8601 date or date-time")]
    InvalidTimestamp { value: String },
}

pub type Result<T> = std::result::Result<T, ModelError>;
