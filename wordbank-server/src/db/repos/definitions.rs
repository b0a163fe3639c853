//! Definition repository
//!
//! Definitions are only ever created, deleted, or listed through their
//! owning word; there is no standalone fetch.

use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use super::DbError;

/// Definition row from the database
#[derive(Debug, Clone, FromRow)]
pub struct DefinitionRecord {
    pub id: Uuid,
    pub content: String,
    pub part_of_speech: String,
    pub word_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

pub struct DefinitionRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> DefinitionRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List a word's definitions, oldest first.
    pub async fn list_for_word(&self, word_id: Uuid) -> Result<Vec<DefinitionRecord>, DbError> {
        let rows = sqlx::query_as::<_, DefinitionRecord>(
            r#"
            SELECT id, content, part_of_speech, word_id, created_at, updated_at
            FROM definitions
            WHERE word_id = $1
            ORDER BY created_at
            "#,
        )
        .bind(word_id)
        .fetch_all(self.pool)
        .await?;

        Ok(rows)
    }

    /// Create a definition under a word.
    pub async fn create(
        &self,
        word_id: Uuid,
        content: &str,
        part_of_speech: &str,
    ) -> Result<DefinitionRecord, DbError> {
        let row = sqlx::query_as::<_, DefinitionRecord>(
            r#"
            INSERT INTO definitions (content, part_of_speech, word_id)
            VALUES ($1, $2, $3)
            RETURNING id, content, part_of_speech, word_id, created_at, updated_at
            "#,
        )
        .bind(content)
        .bind(part_of_speech)
        .bind(word_id)
        .fetch_one(self.pool)
        .await?;

        Ok(row)
    }

    /// Delete a definition by id. Deleting an id that no longer exists is
    /// not an error; only a store failure is.
    pub async fn delete(&self, id: Uuid) -> Result<u64, DbError> {
        let result = sqlx::query("DELETE FROM definitions WHERE id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::repos::{LanguageRepo, WordRepo};
    use wordbank_core::{LanguageName, WordText};

    #[tokio::test]
    #[ignore = "requires database"]
    async fn create_list_delete_roundtrip() {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let pool = crate::db::create_pool(&url).await.expect("pool");
        crate::db::migrations::run(&pool).await.expect("migrations");

        let tag = Uuid::new_v4();
        let language = LanguageRepo::new(&pool)
            .create(&LanguageName::new(&format!("Defs-{tag}")).unwrap())
            .await
            .expect("language");
        let word = WordRepo::new(&pool)
            .create(&WordText::new(&format!("sky-{tag}")).unwrap(), language.id)
            .await
            .expect("word");

        let repo = DefinitionRepo::new(&pool);
        let def = repo
            .create(word.id, "the region above the earth", "noun")
            .await
            .expect("create");

        let listed = repo.list_for_word(word.id).await.expect("list");
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].id, def.id);

        assert_eq!(repo.delete(def.id).await.expect("delete"), 1);
        // Second delete affects zero rows but is not an error
        assert_eq!(repo.delete(def.id).await.expect("redelete"), 0);

        LanguageRepo::new(&pool)
            .delete(language.id)
            .await
            .expect("cleanup");
    }
}
