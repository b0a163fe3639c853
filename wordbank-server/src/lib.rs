//! wordbank-server: HTTP server for the wordbank dictionary
//!
//! Exposes languages, words, and definitions over a JSON REST API
//! backed by PostgreSQL. Mutating routes are gated by a shared API key.

pub mod db;
pub mod http;
pub mod models;
pub mod state;

pub use http::{build_router, run_server, ServerError};
pub use state::AppState;
