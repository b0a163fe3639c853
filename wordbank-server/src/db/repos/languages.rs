//! Language repository
//!
//! Lookups lower-case the supplied name in SQL; the display casing
//! stored at creation time is preserved.

use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use wordbank_core::LanguageName;

use super::DbError;

/// Language row from the database
#[derive(Debug, Clone, FromRow)]
pub struct LanguageRecord {
    pub id: Uuid,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

pub struct LanguageRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> LanguageRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List all languages, oldest first.
    pub async fn list(&self) -> Result<Vec<LanguageRecord>, DbError> {
        let rows = sqlx::query_as::<_, LanguageRecord>(
            r#"
            SELECT id, name, created_at, updated_at
            FROM languages
            ORDER BY created_at
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(rows)
    }

    /// Get a language by name, case-insensitively.
    pub async fn get_by_name(&self, name: &str) -> Result<LanguageRecord, DbError> {
        sqlx::query_as::<_, LanguageRecord>(
            r#"
            SELECT id, name, created_at, updated_at
            FROM languages
            WHERE LOWER(name) = LOWER($1)
            "#,
        )
        .bind(name)
        .fetch_optional(self.pool)
        .await?
        .ok_or_else(|| DbError::NotFound {
            resource: "language",
            name: name.to_owned(),
        })
    }

    /// Create a language. The case-insensitive unique index rejects
    /// duplicates with a unique violation.
    pub async fn create(&self, name: &LanguageName) -> Result<LanguageRecord, DbError> {
        let row = sqlx::query_as::<_, LanguageRecord>(
            r#"
            INSERT INTO languages (name)
            VALUES ($1)
            RETURNING id, name, created_at, updated_at
            "#,
        )
        .bind(name.as_str())
        .fetch_one(self.pool)
        .await?;

        Ok(row)
    }

    /// Rename the language currently called `current` to `new_name`.
    pub async fn rename(
        &self,
        current: &str,
        new_name: &LanguageName,
    ) -> Result<LanguageRecord, DbError> {
        sqlx::query_as::<_, LanguageRecord>(
            r#"
            UPDATE languages
            SET name = $1, updated_at = NOW()
            WHERE LOWER(name) = LOWER($2)
            RETURNING id, name, created_at, updated_at
            "#,
        )
        .bind(new_name.as_str())
        .bind(current)
        .fetch_optional(self.pool)
        .await?
        .ok_or_else(|| DbError::NotFound {
            resource: "language",
            name: current.to_owned(),
        })
    }

    /// Delete a language by id.
    pub async fn delete(&self, id: Uuid) -> Result<(), DbError> {
        let result = sqlx::query("DELETE FROM languages WHERE id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::NotFound {
                resource: "language",
                name: id.to_string(),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    #[ignore = "requires database"]
    async fn name_lookup_is_case_insensitive() {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let pool = crate::db::create_pool(&url).await.expect("pool");
        crate::db::migrations::run(&pool).await.expect("migrations");

        let repo = LanguageRepo::new(&pool);
        let name = LanguageName::new(&format!("Casefold-{}", Uuid::new_v4())).unwrap();
        let created = repo.create(&name).await.expect("create");

        let found = repo
            .get_by_name(&name.as_str().to_uppercase())
            .await
            .expect("lookup");
        assert_eq!(found.id, created.id);

        repo.delete(created.id).await.expect("cleanup");
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn duplicate_name_is_unique_violation() {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let pool = crate::db::create_pool(&url).await.expect("pool");
        crate::db::migrations::run(&pool).await.expect("migrations");

        let repo = LanguageRepo::new(&pool);
        let name = LanguageName::new(&format!("Dup-{}", Uuid::new_v4())).unwrap();
        let created = repo.create(&name).await.expect("create");

        let shouty = LanguageName::new(&name.as_str().to_uppercase()).unwrap();
        let err = repo.create(&shouty).await.expect_err("duplicate");
        assert!(err.is_unique_violation());

        repo.delete(created.id).await.expect("cleanup");
    }
}
