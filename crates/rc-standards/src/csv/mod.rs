#![deny(unsafe_code)]

pub mod phrases;
pub mod task_types;
pub mod unification;

use serde::de::DeserializeOwned;

use crate::error::{Result, RulesError};

/// Deserialize every row of a headed CSV document.
pub(crate) fn read_rows<T: DeserializeOwned>(content: &str, source_name: &str) -> Result<Vec<T>> {
    let content = content.trim_start_matches('\u{feff}');
    let mut reader = ::csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(::csv::Trim::All)
        .from_reader(content.as_bytes());

    let mut rows = Vec::new();
    for row in reader.deserialize::<T>() {
        let row = row.map_err(|e| RulesError::Csv {
            source_name: source_name.to_string(),
            message: e.to_string(),
        })?;
        rows.push(row);
    }
    Ok(rows)
}

/// Lowercase and collapse a table key so lookups are case-insensitive.
pub(crate) fn table_key(value: &str) -> String {
    value.split_whitespace().collect::<Vec<_>>().join(" ").to_lowercase()
}
