//! The rule table consulted by the field matchers.
//!
//! A [`RuleTable`] is read-only configuration: task-type categories with
//! their accepted variant phrases, the unification of near-synonym
//! categories, and the decorated forms and keywords the matchers retry with.
//! Lookups are case-insensitive and never fail; an unknown category simply
//! has no variants.

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::Serialize;

use crate::csv::phrases::parse_phrases_csv;
use crate::csv::table_key;
use crate::csv::task_types::parse_task_types_csv;
use crate::csv::unification::parse_unification_csv;
use crate::embedded;
use crate::error::{Result, RulesError};
use crate::manifest::{Manifest, Pins};

/// Placeholder replaced by the expected value in a decoration template.
pub const PLACEHOLDER: &str = "{}";

/// Default share of task-type words required by the fuzzy fallback.
pub const DEFAULT_TOKEN_RATIO: f64 = 0.5;

/// A phrase template such as `группа {}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Decoration(String);

impl Decoration {
    /// Parse a template; `None` when it has no `{}` placeholder.
    pub fn parse(template: &str) -> Option<Self> {
        template
            .contains(PLACEHOLDER)
            .then(|| Self(template.to_string()))
    }

    pub fn template(&self) -> &str {
        &self.0
    }

    /// Substitute the expected value into the template.
    pub fn apply(&self, value: &str) -> String {
        self.0.replace(PLACEHOLDER, value)
    }
}

/// Locale phrases used by the matchers beyond task-type variants.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Phrases {
    pub group_decorations: Vec<Decoration>,
    pub task_name_decorations: Vec<Decoration>,
    pub section_decorations: Vec<Decoration>,
    /// Words that must all appear for the instructor role check.
    pub role_keywords: Vec<String>,
    /// Prefixes stripped from the subject name before retrying.
    pub subject_prefixes: Vec<String>,
}

/// Read-only matching configuration for one locale.
#[derive(Debug, Clone, Serialize)]
pub struct RuleTable {
    pins: Pins,
    categories: Vec<(String, Vec<String>)>,
    unification: BTreeMap<String, String>,
    phrases: Phrases,
    token_ratio: f64,
}

impl RuleTable {
    /// Build a table from the three CSV documents.
    pub fn from_csv(
        pins: Pins,
        task_types: &str,
        unification: &str,
        phrases: &str,
    ) -> Result<Self> {
        let categories = parse_task_types_csv(task_types, "task_types.csv")?;
        let unification = parse_unification_csv(unification, "unification.csv")?;
        let phrases = parse_phrases_csv(phrases, "phrases.csv")?;

        for (category, canonical) in &unification {
            if !categories.iter().any(|(name, _)| name == canonical) {
                tracing::warn!(
                    category = %category,
                    canonical = %canonical,
                    "unification target has no variant list"
                );
            }
        }

        Ok(Self {
            pins,
            categories,
            unification,
            phrases,
            token_ratio: DEFAULT_TOKEN_RATIO,
        })
    }

    /// The default Russian tables compiled into the binary.
    pub fn embedded() -> Result<Self> {
        let manifest: Manifest =
            toml::from_str(embedded::RU_MANIFEST).map_err(|e| RulesError::Toml {
                path: PathBuf::from("<embedded>/manifest.toml"),
                source: e,
            })?;
        let table = Self::from_csv(
            manifest.pins.clone(),
            embedded::RU_TASK_TYPES,
            embedded::RU_UNIFICATION,
            embedded::RU_PHRASES,
        )?;
        match manifest.token_ratio() {
            Some(ratio) => table.with_token_ratio(ratio),
            None => Ok(table),
        }
    }

    /// Override the fuzzy-match token ratio (must be within `(0, 1]`).
    pub fn with_token_ratio(mut self, ratio: f64) -> Result<Self> {
        if !(ratio > 0.0 && ratio <= 1.0) {
            return Err(RulesError::InvalidValue {
                field: "task_type_token_ratio",
                value: ratio.to_string(),
                source_name: "manifest.toml".to_string(),
            });
        }
        self.token_ratio = ratio;
        Ok(self)
    }

    pub fn pins(&self) -> &Pins {
        &self.pins
    }

    pub fn phrases(&self) -> &Phrases {
        &self.phrases
    }

    pub fn token_ratio(&self) -> f64 {
        self.token_ratio
    }

    /// Canonical key for a category; the normalised input when no rule exists.
    pub fn canonicalize(&self, category: &str) -> String {
        let key = table_key(category);
        self.unification.get(&key).cloned().unwrap_or(key)
    }

    /// Accepted variants of a category; empty for an unknown category.
    pub fn variants_for(&self, category: &str) -> &[String] {
        let key = table_key(category);
        self.categories
            .iter()
            .find(|(name, _)| *name == key)
            .map(|(_, variants)| variants.as_slice())
            .unwrap_or(&[])
    }

    /// Whether the category is declared in the table.
    pub fn has_category(&self, category: &str) -> bool {
        let key = table_key(category);
        self.categories.iter().any(|(name, _)| *name == key)
    }

    /// Categories in declaration order.
    pub fn categories(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.categories
            .iter()
            .map(|(name, variants)| (name.as_str(), variants.as_slice()))
    }

    pub fn category_count(&self) -> usize {
        self.categories.len()
    }

    pub fn variant_count(&self) -> usize {
        self.categories.iter().map(|(_, variants)| variants.len()).sum()
    }
}
