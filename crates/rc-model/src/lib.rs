//! Data model for report title-page checking.
//!
//! All types here are request-scoped value objects: they are built from the
//! caller's submission at the start of one check and dropped at its end.

pub mod error;
pub mod person;
pub mod report;

pub use error::{ModelError, Result};
pub use person::{NamePart, PersonName, StudentInfo, TeacherInfo};
pub use report::{ReportInfo, Submission, parse_section_list, parse_submission_timestamp};
