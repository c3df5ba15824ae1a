#![deny(unsafe_code)]

use serde::Deserialize;

use super::{read_rows, table_key};
use crate::error::{Result, RulesError};

#[derive(Debug, Deserialize)]
struct TaskTypeRow {
    #[serde(rename = "Category")]
    category: String,
    #[serde(rename = "Variant", default)]
    variant: String,
}

/// Categories in file order, each with its variants in file order.
///
/// A row with an empty `Variant` declares a category without variants.
pub fn parse_task_types_csv(content: &str, source_name: &str) -> Result<Vec<(String, Vec<String>)>> {
    let mut categories: Vec<(String, Vec<String>)> = Vec::new();

    for row in read_rows::<TaskTypeRow>(content, source_name)? {
        let category = table_key(&row.category);
        if category.is_empty() {
            return Err(RulesError::InvalidValue {
                field: "Category",
                value: row.category,
                source_name: source_name.to_string(),
            });
        }
        let index = match categories.iter().position(|(name, _)| *name == category) {
            Some(index) => index,
            None => {
                categories.push((category, Vec::new()));
                categories.len() - 1
            }
        };
        let variant = table_key(&row.variant);
        if !variant.is_empty() && !categories[index].1.contains(&variant) {
            categories[index].1.push(variant);
        }
    }

    Ok(categories)
}
