//! Liveness probe

use std::sync::Arc;

use axum::{routing::get, Json, Router};
use serde_json::{json, Value};

use crate::state::AppState;

/// GET /health - liveness only, does not touch the database
async fn health() -> Json<Value> {
    Json(json!({ "body": "ok" }))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/health", get(health))
}
