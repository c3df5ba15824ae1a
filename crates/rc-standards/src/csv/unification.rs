#![deny(unsafe_code)]

use std::collections::BTreeMap;

use serde::Deserialize;

use super::{read_rows, table_key};
use crate::error::{Result, RulesError};

#[derive(Debug, Deserialize)]
struct UnificationRow {
    #[serde(rename = "Category")]
    category: String,
    #[serde(rename = "Canonical")]
    canonical: String,
}

/// Map of category to the canonical key it is matched under.
pub fn parse_unification_csv(content: &str, source_name: &str) -> Result<BTreeMap<String, String>> {
    let mut map = BTreeMap::new();
    for row in read_rows::<UnificationRow>(content, source_name)? {
        let category = table_key(&row.category);
        let canonical = table_key(&row.canonical);
        if category.is_empty() || canonical.is_empty() {
            return Err(RulesError::InvalidValue {
                field: "Canonical",
                value: format!("{} -> {}", row.category, row.canonical),
                source_name: source_name.to_string(),
            });
        }
        map.insert(category, canonical);
    }
    Ok(map)
}
