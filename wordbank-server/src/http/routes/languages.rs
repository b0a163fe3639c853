//! Language endpoints
//!
//! Reads are open; create, rename, and delete are behind the API-key
//! gate. Names are compared case-insensitively throughout.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use uuid::Uuid;

use wordbank_core::LanguageName;

use crate::db::repos::LanguageRepo;
use crate::db::DbError;
use crate::http::auth::ApiKeyAuth;
use crate::http::error::{failed_creation, ApiError};
use crate::http::json::Body;
use crate::models::Language;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct CreateLanguageRequest {
    pub name: Option<String>,
}

#[derive(Deserialize)]
pub struct RenameLanguageRequest {
    pub name: Option<String>,
}

#[derive(Deserialize)]
pub struct DeleteLanguageRequest {
    pub id: Uuid,
}

/// GET /languages - list all languages
async fn list_languages(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Language>>, ApiError> {
    let languages = LanguageRepo::new(&state.pool).list().await?;
    Ok(Json(languages.into_iter().map(Language::from).collect()))
}

/// GET /languages/{language} - get one language by name
async fn get_language(
    State(state): State<Arc<AppState>>,
    Path(language): Path<String>,
) -> Result<Json<Language>, ApiError> {
    let record = LanguageRepo::new(&state.pool).get_by_name(&language).await?;
    Ok(Json(record.into()))
}

/// POST /languages - create a language
async fn create_language(
    _auth: ApiKeyAuth,
    State(state): State<Arc<AppState>>,
    Body(req): Body<CreateLanguageRequest>,
) -> Result<(StatusCode, Json<Language>), ApiError> {
    let name = LanguageName::new(req.name.as_deref().unwrap_or_default())?;
    let record = LanguageRepo::new(&state.pool)
        .create(&name)
        .await
        .map_err(failed_creation("language"))?;

    Ok((StatusCode::CREATED, Json(record.into())))
}

/// PUT /languages/{language} - rename a language, creating it under the
/// new name when no language matches the path (201 in that case).
async fn update_language(
    _auth: ApiKeyAuth,
    State(state): State<Arc<AppState>>,
    Path(language): Path<String>,
    Body(req): Body<RenameLanguageRequest>,
) -> Result<(StatusCode, Json<Language>), ApiError> {
    let name = LanguageName::new(req.name.as_deref().unwrap_or_default())?;
    let repo = LanguageRepo::new(&state.pool);

    match repo.rename(&language, &name).await {
        Ok(record) => Ok((StatusCode::OK, Json(record.into()))),
        Err(DbError::NotFound { .. }) => {
            let record = repo
                .create(&name)
                .await
                .map_err(failed_creation("language"))?;
            Ok((StatusCode::CREATED, Json(record.into())))
        }
        Err(e) => Err(e.into()),
    }
}

/// DELETE /languages - delete a language by id in the body
async fn delete_language(
    _auth: ApiKeyAuth,
    State(state): State<Arc<AppState>>,
    Body(req): Body<DeleteLanguageRequest>,
) -> Result<StatusCode, ApiError> {
    LanguageRepo::new(&state.pool).delete(req.id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/languages",
            get(list_languages)
                .post(create_language)
                .delete(delete_language),
        )
        .route(
            "/languages/{language}",
            get(get_language).put(update_language),
        )
}
