//! Word repository
//!
//! A word is unique per (text, language); the same spelling may exist
//! independently under different languages, so text-only lookups return
//! every match.

use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use wordbank_core::WordText;

use super::DbError;

/// Word row from the database
#[derive(Debug, Clone, FromRow)]
pub struct WordRecord {
    pub id: Uuid,
    pub word: String,
    pub display_form: Option<String>,
    pub language_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

pub struct WordRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> WordRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List every word across all languages.
    pub async fn list_all(&self) -> Result<Vec<WordRecord>, DbError> {
        let rows = sqlx::query_as::<_, WordRecord>(
            r#"
            SELECT id, word, display_form, language_id, created_at, updated_at
            FROM words
            ORDER BY created_at
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(rows)
    }

    /// List the words registered under one language.
    pub async fn list_by_language(&self, language_id: Uuid) -> Result<Vec<WordRecord>, DbError> {
        let rows = sqlx::query_as::<_, WordRecord>(
            r#"
            SELECT id, word, display_form, language_id, created_at, updated_at
            FROM words
            WHERE language_id = $1
            ORDER BY created_at
            "#,
        )
        .bind(language_id)
        .fetch_all(self.pool)
        .await?;

        Ok(rows)
    }

    /// Find every word with this spelling, across all languages.
    pub async fn find_by_text(&self, text: &str) -> Result<Vec<WordRecord>, DbError> {
        let rows = sqlx::query_as::<_, WordRecord>(
            r#"
            SELECT id, word, display_form, language_id, created_at, updated_at
            FROM words
            WHERE LOWER(word) = LOWER($1)
            ORDER BY created_at
            "#,
        )
        .bind(text)
        .fetch_all(self.pool)
        .await?;

        Ok(rows)
    }

    /// Get the word with this spelling in one language.
    pub async fn get_in_language(
        &self,
        text: &str,
        language_id: Uuid,
    ) -> Result<WordRecord, DbError> {
        sqlx::query_as::<_, WordRecord>(
            r#"
            SELECT id, word, display_form, language_id, created_at, updated_at
            FROM words
            WHERE LOWER(word) = LOWER($1) AND language_id = $2
            "#,
        )
        .bind(text)
        .bind(language_id)
        .fetch_optional(self.pool)
        .await?
        .ok_or_else(|| DbError::NotFound {
            resource: "word",
            name: text.to_owned(),
        })
    }

    /// Create a word under a language.
    pub async fn create(&self, text: &WordText, language_id: Uuid) -> Result<WordRecord, DbError> {
        let row = sqlx::query_as::<_, WordRecord>(
            r#"
            INSERT INTO words (word, language_id)
            VALUES ($1, $2)
            RETURNING id, word, display_form, language_id, created_at, updated_at
            "#,
        )
        .bind(text.as_str())
        .bind(language_id)
        .fetch_one(self.pool)
        .await?;

        Ok(row)
    }

    /// Apply a partial update. Each field is written only when supplied;
    /// an absent field leaves the stored value untouched. An explicitly
    /// empty display form clears it to NULL.
    pub async fn update_fields(
        &self,
        id: Uuid,
        word: Option<&str>,
        display_form: Option<&str>,
    ) -> Result<WordRecord, DbError> {
        sqlx::query_as::<_, WordRecord>(
            r#"
            UPDATE words SET
                word = CASE WHEN $2 THEN $3 ELSE word END,
                display_form = CASE WHEN $4 THEN NULLIF($5, '') ELSE display_form END,
                updated_at = NOW()
            WHERE id = $1
            RETURNING id, word, display_form, language_id, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(word.is_some())
        .bind(word)
        .bind(display_form.is_some())
        .bind(display_form)
        .fetch_optional(self.pool)
        .await?
        .ok_or_else(|| DbError::NotFound {
            resource: "word",
            name: id.to_string(),
        })
    }

    /// Delete a word by id.
    pub async fn delete(&self, id: Uuid) -> Result<(), DbError> {
        let result = sqlx::query("DELETE FROM words WHERE id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::NotFound {
                resource: "word",
                name: id.to_string(),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::repos::LanguageRepo;
    use wordbank_core::LanguageName;

    async fn test_pool() -> PgPool {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let pool = crate::db::create_pool(&url).await.expect("pool");
        crate::db::migrations::run(&pool).await.expect("migrations");
        pool
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn same_spelling_allowed_across_languages() {
        let pool = test_pool().await;
        let languages = LanguageRepo::new(&pool);
        let words = WordRepo::new(&pool);

        let tag = Uuid::new_v4();
        let first = languages
            .create(&LanguageName::new(&format!("First-{tag}")).unwrap())
            .await
            .expect("language");
        let second = languages
            .create(&LanguageName::new(&format!("Second-{tag}")).unwrap())
            .await
            .expect("language");

        let spelling = WordText::new(&format!("gift-{tag}")).unwrap();
        words.create(&spelling, first.id).await.expect("word 1");
        words.create(&spelling, second.id).await.expect("word 2");

        let matches = words.find_by_text(spelling.as_str()).await.expect("find");
        assert_eq!(matches.len(), 2);

        // Duplicate within one language is rejected
        let err = words.create(&spelling, first.id).await.expect_err("dup");
        assert!(err.is_unique_violation());

        languages.delete(first.id).await.expect("cleanup");
        languages.delete(second.id).await.expect("cleanup");
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn partial_update_leaves_other_fields() {
        let pool = test_pool().await;
        let languages = LanguageRepo::new(&pool);
        let words = WordRepo::new(&pool);

        let tag = Uuid::new_v4();
        let language = languages
            .create(&LanguageName::new(&format!("Partial-{tag}")).unwrap())
            .await
            .expect("language");
        let word = words
            .create(&WordText::new(&format!("stone-{tag}")).unwrap(), language.id)
            .await
            .expect("word");

        let updated = words
            .update_fields(word.id, None, Some("𐍃𐍄𐍉𐌽𐌴"))
            .await
            .expect("update");
        assert_eq!(updated.word, word.word);
        assert_eq!(updated.display_form.as_deref(), Some("𐍃𐍄𐍉𐌽𐌴"));

        // Explicitly empty display form clears it
        let cleared = words
            .update_fields(word.id, None, Some(""))
            .await
            .expect("clear");
        assert_eq!(cleared.display_form, None);

        languages.delete(language.id).await.expect("cleanup");
    }
}
