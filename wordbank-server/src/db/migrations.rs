//! Startup DDL for the dictionary tables
//!
//! All statements are idempotent; the full set runs on every boot.

use sqlx::PgPool;

use super::DbError;

/// Create the dictionary tables and uniqueness indexes.
pub async fn run(pool: &PgPool) -> Result<(), DbError> {
    tracing::info!("running dictionary migrations");

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS languages (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            name TEXT NOT NULL,
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
            updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )
        "#,
    )
    .execute(pool)
    .await?;

    // Language names are unique case-insensitively
    sqlx::query(
        r#"
        CREATE UNIQUE INDEX IF NOT EXISTS languages_name_lower_idx
        ON languages ((LOWER(name)))
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS words (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            word TEXT NOT NULL,
            display_form TEXT,
            language_id UUID NOT NULL REFERENCES languages(id) ON DELETE CASCADE,
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
            updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )
        "#,
    )
    .execute(pool)
    .await?;

    // Same spelling may exist under different languages
    sqlx::query(
        r#"
        CREATE UNIQUE INDEX IF NOT EXISTS words_text_language_idx
        ON words ((LOWER(word)), language_id)
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS definitions (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            content TEXT NOT NULL,
            part_of_speech TEXT NOT NULL,
            word_id UUID NOT NULL REFERENCES words(id) ON DELETE CASCADE,
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
            updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )
        "#,
    )
    .execute(pool)
    .await?;

    tracing::info!("dictionary migrations complete");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    #[ignore = "requires database"]
    async fn migrations_are_idempotent() {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let pool = crate::db::create_pool(&url).await.expect("pool");

        run(&pool).await.expect("first run");
        run(&pool).await.expect("second run");
    }
}
