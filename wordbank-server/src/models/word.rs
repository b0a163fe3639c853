//! Word response DTO, with optionally nested definitions

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::db::repos::{DefinitionRecord, WordRecord};

use super::Definition;

#[derive(Debug, Clone, Serialize)]
pub struct Word {
    pub id: Uuid,
    pub word: String,
    /// Formatted display variant, e.g. the native-script rendering
    #[serde(skip_serializing_if = "Option::is_none")]
    pub formatted: Option<String>,
    pub language_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub definitions: Vec<Definition>,
}

impl Word {
    /// Build the DTO from a word row and its definition rows.
    pub fn with_definitions(record: WordRecord, definitions: Vec<DefinitionRecord>) -> Self {
        Self {
            id: record.id,
            word: record.word,
            formatted: record.display_form,
            language_id: record.language_id,
            created_at: record.created_at,
            updated_at: record.updated_at,
            definitions: definitions.into_iter().map(Definition::from).collect(),
        }
    }
}

impl From<WordRecord> for Word {
    fn from(record: WordRecord) -> Self {
        Self::with_definitions(record, Vec::new())
    }
}
