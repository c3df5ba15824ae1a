//! Report metadata supplied alongside the uploaded document.

use chrono::{DateTime, Datelike, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{ModelError, Result};
use crate::person::{StudentInfo, TeacherInfo};

/// What the title page and body are expected to contain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportInfo {
    pub subject_name: String,
    pub task_name: String,
    /// Task category as entered by the student, e.g. `лабораторная работа`.
    pub task_type: String,
    pub teacher: TeacherInfo,
    /// Section labels the body must contain, in the order they were listed.
    #[serde(rename = "report_structure", deserialize_with = "deserialize_sections")]
    pub required_sections: Vec<String>,
    #[serde(
        rename = "uploaded_at",
        serialize_with = "serialize_timestamp",
        deserialize_with = "deserialize_timestamp"
    )]
    pub submitted_at: DateTime<FixedOffset>,
}

impl ReportInfo {
    /// Calendar year of the submission, in the timestamp's own offset.
    pub fn submission_year(&self) -> i32 {
        self.submitted_at.year()
    }
}

/// Student and report metadata for one upload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Submission {
    pub student: StudentInfo,
    pub report: ReportInfo,
}

/// Parse a submission timestamp.
///
/// Accepts RFC 3339 (`2024-05-20T10:15:00+03:00`, `2024-05-20T07:15:00Z`),
/// a date-time without offset (read as UTC) or a bare date (midnight UTC).
pub fn parse_submission_timestamp(value: &str) -> Result<DateTime<FixedOffset>> {
    let trimmed = value.trim();
    if let Ok(parsed) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(parsed);
    }
    for format in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Ok(naive.and_utc().fixed_offset());
        }
    }
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Ok(date.and_time(NaiveTime::MIN).and_utc().fixed_offset());
    }
    Err(ModelError::InvalidTimestamp {
        value: value.to_string(),
    })
}

/// Split a comma-separated report structure into trimmed section labels.
///
/// Blank entries are dropped.
pub fn parse_section_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|label| !label.is_empty())
        .map(String::from)
        .collect()
}

#[derive(Deserialize)]
#[serde(untagged)]
enum SectionList {
    Labels(Vec<String>),
    CommaSeparated(String),
}

fn deserialize_sections<'de, D>(deserializer: D) -> std::result::Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match SectionList::deserialize(deserializer)? {
        SectionList::Labels(labels) => labels
            .into_iter()
            .map(|label| label.trim().to_string())
            .filter(|label| !label.is_empty())
            .collect(),
        SectionList::CommaSeparated(value) => parse_section_list(&value),
    })
}

fn deserialize_timestamp<'de, D>(
    deserializer: D,
) -> std::result::Result<DateTime<FixedOffset>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_submission_timestamp(&raw).map_err(serde::de::Error::custom)
}

fn serialize_timestamp<S>(
    value: &DateTime<FixedOffset>,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&value.to_rfc3339())
}
