//! Title-page and section checks for student reports.
//!
//! [`Validator`] runs a fixed sequence of field matchers over an extracted
//! document and returns every problem found in one pass:
//!
//! 1. Guards: the document must have pages and a readable title page
//! 2. Title page: student name, group, subject, task name, task type,
//!    instructor name and role, submission year
//! 3. Body: required sections, reported together as one issue
//!
//! Matching is case-insensitive and tolerant of whitespace; the phrase
//! tables it consults come from an injected [`RuleTable`](rc_standards::RuleTable).
//!
//! # Example
//!
//! ```rust,ignore
//! use rc_standards::RuleTable;
//! use rc_validate::Validator;
//!
//! let rules = RuleTable::embedded()?;
//! let report = Validator::new(&rules).validate(&document, &student, &info);
//! for message in report.messages() {
//!     println!("{message}");
//! }
//! ```

pub mod checks;
mod engine;
mod issue;
pub mod normalize;
mod report;

pub use checks::MatchOutcome;
pub use engine::{Validator, validate};
pub use issue::{Check, Issue};
pub use normalize::{fold, normalize};
pub use report::{Diagnostic, ValidationReport};
