#![deny(unsafe_code)]

use serde::Deserialize;

use super::{read_rows, table_key};
use crate::error::{Result, RulesError};
use crate::table::{Decoration, Phrases};

#[derive(Debug, Deserialize)]
struct PhraseRow {
    #[serde(rename = "Kind")]
    kind: String,
    #[serde(rename = "Phrase")]
    phrase: String,
}

pub fn parse_phrases_csv(content: &str, source_name: &str) -> Result<Phrases> {
    let mut phrases = Phrases::default();

    for row in read_rows::<PhraseRow>(content, source_name)? {
        let invalid = |field: &'static str, value: &str| RulesError::InvalidValue {
            field,
            value: value.to_string(),
            source_name: source_name.to_string(),
        };
        let phrase = table_key(&row.phrase);
        if phrase.is_empty() {
            return Err(invalid("Phrase", &row.phrase));
        }

        match row.kind.trim().to_lowercase().as_str() {
            "group_decoration" => phrases
                .group_decorations
                .push(Decoration::parse(&phrase).ok_or_else(|| invalid("Phrase", &phrase))?),
            "task_name_decoration" => phrases
                .task_name_decorations
                .push(Decoration::parse(&phrase).ok_or_else(|| invalid("Phrase", &phrase))?),
            "section_decoration" => phrases
                .section_decorations
                .push(Decoration::parse(&phrase).ok_or_else(|| invalid("Phrase", &phrase))?),
            "role_keyword" => phrases.role_keywords.push(phrase),
            "subject_prefix" => phrases.subject_prefixes.push(phrase),
            _ => return Err(invalid("Kind", &row.kind)),
        }
    }

    Ok(phrases)
}
