//! Rule tables for report title-page checking.
//!
//! This crate provides:
//!
//! - **[`RuleTable`]**: task-type categories with accepted variant phrases,
//!   unification of near-synonym categories, and the decorated forms and
//!   keywords the field matchers fall back to
//! - **Embedded defaults** for Russian title pages, compiled into the binary
//! - **Versioned rules directories** verified against a `manifest.toml` with
//!   sha256 pins, so new phrasing is a data change
//!
//! # Rules Directory Structure
//!
//! ```text
//! rules/
//! ├── manifest.toml      # schema, pins (locale, version), policy, file list
//! ├── task_types.csv     # Category,Variant
//! ├── unification.csv    # Category,Canonical
//! └── phrases.csv        # Kind,Phrase
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use rc_standards::RuleTable;
//!
//! let rules = RuleTable::embedded()?;
//! let key = rules.canonicalize("Практическая работа");
//! assert_eq!(key, "практическое задание");
//! assert!(rules.variants_for(&key).iter().any(|v| v == "практика"));
//! ```

#![deny(unsafe_code)]

pub mod csv;
pub mod embedded;
pub mod error;
pub mod hash;
pub mod manifest;
pub mod paths;
pub mod registry;
pub mod table;

pub use crate::error::{Result, RulesError};
pub use crate::manifest::Pins;
pub use crate::paths::{RULES_ENV_VAR, bundled_rules_dir, rules_dir_from_env};
pub use crate::registry::{VerifySummary, load_rule_table};
pub use crate::table::{DEFAULT_TOKEN_RATIO, Decoration, Phrases, RuleTable};
