//! Application state shared across handlers

use sqlx::PgPool;

/// Shared application state, wrapped in an `Arc` at router construction.
pub struct AppState {
    pub pool: PgPool,
    /// Shared secret for the API-key gate on mutating routes
    pub api_key: String,
}

impl AppState {
    pub fn new(pool: PgPool, api_key: String) -> Self {
        Self { pool, api_key }
    }
}
