//! Definition response DTO

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::db::repos::DefinitionRecord;

#[derive(Debug, Clone, Serialize)]
pub struct Definition {
    pub id: Uuid,
    pub content: String,
    pub part_of_speech: String,
    pub word_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<DefinitionRecord> for Definition {
    fn from(record: DefinitionRecord) -> Self {
        Self {
            id: record.id,
            content: record.content,
            part_of_speech: record.part_of_speech,
            word_id: record.word_id,
            created_at: record.created_at,
            updated_at: record.updated_at,
        }
    }
}
