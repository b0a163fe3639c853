//! API-key gate for mutating routes
//!
//! Expects `Authorization: ApiKey <key>`. A missing header, a different
//! scheme, and a wrong key all produce the same 401 so a caller cannot
//! tell which check failed. The comparison itself is constant-time.

use std::sync::Arc;

use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use subtle::ConstantTimeEq;

use crate::state::AppState;

use super::error::ApiError;

const SCHEME_PREFIX: &str = "ApiKey ";

/// Extractor placed first in every mutating handler's signature.
pub struct ApiKeyAuth;

impl FromRequestParts<Arc<AppState>> for ApiKeyAuth {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<AppState>,
    ) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok());

        let supplied = api_key_from_header(header).ok_or(ApiError::Unauthorized)?;
        if !keys_match(supplied, &state.api_key) {
            return Err(ApiError::Unauthorized);
        }

        Ok(Self)
    }
}

/// Pull the key out of an `Authorization: ApiKey <key>` header value.
fn api_key_from_header(header: Option<&str>) -> Option<&str> {
    header?
        .strip_prefix(SCHEME_PREFIX)
        .filter(|key| !key.is_empty())
}

/// Constant-time equality; length mismatch also compares unequal.
fn keys_match(supplied: &str, expected: &str) -> bool {
    supplied.as_bytes().ct_eq(expected.as_bytes()).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_key_from_well_formed_header() {
        assert_eq!(api_key_from_header(Some("ApiKey s3cret")), Some("s3cret"));
    }

    #[test]
    fn rejects_missing_header() {
        assert_eq!(api_key_from_header(None), None);
    }

    #[test]
    fn rejects_other_schemes_and_casing() {
        assert_eq!(api_key_from_header(Some("Bearer s3cret")), None);
        assert_eq!(api_key_from_header(Some("apikey s3cret")), None);
        assert_eq!(api_key_from_header(Some("ApiKeys3cret")), None);
    }

    #[test]
    fn rejects_empty_key() {
        assert_eq!(api_key_from_header(Some("ApiKey ")), None);
    }

    #[test]
    fn key_comparison() {
        assert!(keys_match("s3cret", "s3cret"));
        assert!(!keys_match("s3cret", "s3cret2"));
        assert!(!keys_match("", "s3cret"));
    }
}
