//! Word endpoints, including the upsert-style update
//!
//! Words hang off languages in the path; the text-only lookup routes
//! span every language, since a spelling is only unique per language.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use uuid::Uuid;

use wordbank_core::{LanguageName, ValidationError, WordText};

use crate::db::repos::{DefinitionRepo, LanguageRepo, WordRecord, WordRepo};
use crate::db::DbError;
use crate::http::auth::ApiKeyAuth;
use crate::http::error::{failed_creation, ApiError};
use crate::http::json::Body;
use crate::models::Word;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct CreateWordRequest {
    pub word: Option<String>,
    pub language: Option<String>,
}

#[derive(Deserialize)]
pub struct CreateWordForLanguageRequest {
    pub word: Option<String>,
}

/// Body of PUT /languages/{language}/words/{word}.
///
/// Absent fields are left untouched; `Option` distinguishes "absent"
/// from "explicitly empty".
#[derive(Deserialize, Default)]
pub struct UpdateWordRequest {
    pub word: Option<String>,
    pub formatted: Option<String>,
    #[serde(default)]
    pub definition: DefinitionOps,
}

/// At most one definition delete and one add per request. The two are
/// independent; either, both, or neither may be present.
#[derive(Deserialize, Default)]
pub struct DefinitionOps {
    pub delete_id: Option<Uuid>,
    pub add: Option<NewDefinition>,
}

#[derive(Deserialize)]
pub struct NewDefinition {
    pub content: String,
    pub part_of_speech: String,
}

/// GET /languages/{language}/words - words registered under one language
async fn list_words_for_language(
    State(state): State<Arc<AppState>>,
    Path(language): Path<String>,
) -> Result<Json<Vec<Word>>, ApiError> {
    let language = LanguageRepo::new(&state.pool).get_by_name(&language).await?;
    let words = WordRepo::new(&state.pool)
        .list_by_language(language.id)
        .await?;

    Ok(Json(words.into_iter().map(Word::from).collect()))
}

/// GET /languages/{language}/words/{word} - one word with its definitions
async fn get_word_in_language(
    State(state): State<Arc<AppState>>,
    Path((language, word)): Path<(String, String)>,
) -> Result<Json<Word>, ApiError> {
    let language = LanguageRepo::new(&state.pool).get_by_name(&language).await?;
    let record = WordRepo::new(&state.pool)
        .get_in_language(&word, language.id)
        .await?;
    let definitions = DefinitionRepo::new(&state.pool)
        .list_for_word(record.id)
        .await?;

    Ok(Json(Word::with_definitions(record, definitions)))
}

/// GET /languages/words - every word across all languages
async fn list_words(State(state): State<Arc<AppState>>) -> Result<Json<Vec<Word>>, ApiError> {
    let records = WordRepo::new(&state.pool).list_all().await?;
    Ok(Json(attach_definitions(&state, records).await?))
}

/// GET /languages/words/{word} - every language's entry for a spelling
async fn find_word(
    State(state): State<Arc<AppState>>,
    Path(word): Path<String>,
) -> Result<Json<Vec<Word>>, ApiError> {
    let records = WordRepo::new(&state.pool).find_by_text(&word).await?;
    Ok(Json(attach_definitions(&state, records).await?))
}

async fn attach_definitions(
    state: &AppState,
    records: Vec<WordRecord>,
) -> Result<Vec<Word>, ApiError> {
    let definitions = DefinitionRepo::new(&state.pool);
    let mut words = Vec::with_capacity(records.len());
    for record in records {
        let defs = definitions.list_for_word(record.id).await?;
        words.push(Word::with_definitions(record, defs));
    }
    Ok(words)
}

/// POST /languages/words - create a word, auto-creating its language
async fn create_word(
    _auth: ApiKeyAuth,
    State(state): State<Arc<AppState>>,
    Body(req): Body<CreateWordRequest>,
) -> Result<(StatusCode, Json<Word>), ApiError> {
    let text = WordText::new(req.word.as_deref().unwrap_or_default())?;
    let language_name = LanguageName::new(req.language.as_deref().unwrap_or_default())?;

    let languages = LanguageRepo::new(&state.pool);
    let language = match languages.get_by_name(language_name.as_str()).await {
        Ok(record) => record,
        Err(DbError::NotFound { .. }) => languages
            .create(&language_name)
            .await
            .map_err(failed_creation("language"))?,
        Err(e) => return Err(e.into()),
    };

    let record = WordRepo::new(&state.pool)
        .create(&text, language.id)
        .await
        .map_err(failed_creation("word"))?;

    Ok((StatusCode::CREATED, Json(record.into())))
}

/// POST /languages/{language}/words - create a word under an existing
/// language; unlike POST /languages/words, a missing language is a 404.
async fn create_word_for_language(
    _auth: ApiKeyAuth,
    State(state): State<Arc<AppState>>,
    Path(language): Path<String>,
    Body(req): Body<CreateWordForLanguageRequest>,
) -> Result<(StatusCode, Json<Word>), ApiError> {
    let language = LanguageRepo::new(&state.pool).get_by_name(&language).await?;
    let text = WordText::new(req.word.as_deref().unwrap_or_default())?;

    let record = WordRepo::new(&state.pool)
        .create(&text, language.id)
        .await
        .map_err(failed_creation("word"))?;

    Ok((StatusCode::CREATED, Json(record.into())))
}

/// PUT /languages/{language}/words/{word} - upsert-style update.
///
/// Resolves the language (404 if absent), then the word, creating it
/// under the path name when missing. Applies the optional definition
/// delete and add (independent of each other), then any supplied field
/// updates, and responds with the word plus its full definition list.
/// 201 when the word was created here, 200 otherwise.
///
/// Each store operation commits independently; a failure partway
/// through leaves the earlier steps applied.
async fn update_word(
    _auth: ApiKeyAuth,
    State(state): State<Arc<AppState>>,
    Path((language, word)): Path<(String, String)>,
    Body(req): Body<UpdateWordRequest>,
) -> Result<(StatusCode, Json<Word>), ApiError> {
    let language = LanguageRepo::new(&state.pool).get_by_name(&language).await?;

    let words = WordRepo::new(&state.pool);
    let (mut record, created) = match words.get_in_language(&word, language.id).await {
        Ok(record) => (record, false),
        Err(DbError::NotFound { .. }) => {
            let text = WordText::new(&word)?;
            let record = words
                .create(&text, language.id)
                .await
                .map_err(ApiError::Database)?;
            (record, true)
        }
        Err(e) => return Err(ApiError::Database(e)),
    };

    let definitions = DefinitionRepo::new(&state.pool);
    if let Some(delete_id) = req.definition.delete_id {
        definitions
            .delete(delete_id)
            .await
            .map_err(ApiError::Database)?;
    }

    if let Some(add) = &req.definition.add {
        if add.content.is_empty() {
            return Err(ValidationError::Empty { field: "content" }.into());
        }
        if add.part_of_speech.is_empty() {
            return Err(ValidationError::Empty {
                field: "part_of_speech",
            }
            .into());
        }
        definitions
            .create(record.id, &add.content, &add.part_of_speech)
            .await
            .map_err(ApiError::Database)?;
    }

    let rename = match req.word.as_deref() {
        Some(text) => Some(WordText::new(text)?),
        None => None,
    };
    if rename.is_some() || req.formatted.is_some() {
        record = words
            .update_fields(
                record.id,
                rename.as_ref().map(WordText::as_str),
                req.formatted.as_deref(),
            )
            .await
            .map_err(ApiError::Database)?;
    }

    let defs = definitions
        .list_for_word(record.id)
        .await
        .map_err(ApiError::Database)?;

    let status = if created {
        StatusCode::CREATED
    } else {
        StatusCode::OK
    };
    Ok((status, Json(Word::with_definitions(record, defs))))
}

/// DELETE /languages/{language}/words/{word} - delete one word
async fn delete_word(
    _auth: ApiKeyAuth,
    State(state): State<Arc<AppState>>,
    Path((language, word)): Path<(String, String)>,
) -> Result<StatusCode, ApiError> {
    let language = LanguageRepo::new(&state.pool).get_by_name(&language).await?;
    let words = WordRepo::new(&state.pool);
    let record = words.get_in_language(&word, language.id).await?;
    words.delete(record.id).await?;

    Ok(StatusCode::NO_CONTENT)
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/languages/words", get(list_words).post(create_word))
        .route("/languages/words/{word}", get(find_word))
        .route(
            "/languages/{language}/words",
            get(list_words_for_language).post(create_word_for_language),
        )
        .route(
            "/languages/{language}/words/{word}",
            get(get_word_in_language).put(update_word).delete(delete_word),
        )
}
