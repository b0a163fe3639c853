//! HTTP layer
//!
//! Axum server with:
//! - API-key gate on mutating routes
//! - Request tracing
//! - Graceful shutdown
//! - JSON error envelope

pub mod auth;
pub mod error;
pub mod json;
pub mod routes;
pub mod server;

pub use error::ApiError;
pub use server::{build_router, run_server, ServerError};
