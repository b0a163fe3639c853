//! Language response DTO

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::db::repos::LanguageRecord;

#[derive(Debug, Clone, Serialize)]
pub struct Language {
    pub id: Uuid,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<LanguageRecord> for Language {
    fn from(record: LanguageRecord) -> Self {
        Self {
            id: record.id,
            name: record.name,
            created_at: record.created_at,
            updated_at: record.updated_at,
        }
    }
}
