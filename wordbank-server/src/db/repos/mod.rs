//! Repository implementations for database access
//!
//! Each repository borrows the pool and issues parameterized queries.
//! Name lookups compare `LOWER(...)` in SQL so the case-insensitive
//! uniqueness rules live next to the indexes that enforce them.

pub mod definitions;
pub mod languages;
pub mod words;

pub use definitions::{DefinitionRecord, DefinitionRepo};
pub use languages::{LanguageRecord, LanguageRepo};
pub use words::{WordRecord, WordRepo};

/// Postgres SQLSTATE for unique_violation
const UNIQUE_VIOLATION: &str = "23505";

/// Database error type shared by all repositories
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("not found: {resource} '{name}'")]
    NotFound { resource: &'static str, name: String },
}

impl DbError {
    /// True when the underlying error is a Postgres unique-constraint
    /// violation (duplicate language name, duplicate word per language).
    pub fn is_unique_violation(&self) -> bool {
        match self {
            Self::Sqlx(sqlx::Error::Database(db)) => {
                db.code().as_deref() == Some(UNIQUE_VIOLATION)
            }
            _ => false,
        }
    }
}
