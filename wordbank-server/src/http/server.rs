//! Axum server setup
//!
//! Router assembly, CORS, tracing middleware, and graceful shutdown on
//! Ctrl+C / SIGTERM.

use std::sync::Arc;

use axum::Router;
use sqlx::PgPool;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use wordbank_core::Config;

use super::routes;
use crate::state::AppState;

/// Build the application router with all routes.
pub fn build_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .merge(routes::health::router())
        .merge(routes::languages::router())
        .merge(routes::words::router())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Run the HTTP server until a shutdown signal arrives.
pub async fn run_server(pool: PgPool, config: &Config) -> Result<(), ServerError> {
    let state = Arc::new(AppState::new(pool, config.api_key.clone()));
    let app = build_router(state);

    let listener = TcpListener::bind(config.bind_addr).await?;
    tracing::info!("server listening on {}", config.bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("server shutdown complete");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("received Ctrl+C, starting shutdown");
        }
        _ = terminate => {
            tracing::info!("received SIGTERM, starting shutdown");
        }
    }
}

/// Server error type
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use http_body_util::BodyExt;
    use serde_json::Value;
    use sqlx::postgres::PgPoolOptions;
    use tower::ServiceExt;

    const TEST_KEY: &str = "correct-horse-battery-staple";

    // connect_lazy never opens a connection; these tests only exercise
    // paths that are rejected before any query runs.
    fn test_app() -> Router {
        let pool = PgPoolOptions::new()
            .connect_lazy("postgres://localhost/wordbank_test")
            .expect("lazy pool");
        build_router(Arc::new(AppState::new(pool, TEST_KEY.to_string())))
    }

    fn post_languages(auth: Option<&str>, body: &str) -> Request<Body> {
        let mut builder = Request::builder()
            .method("POST")
            .uri("/languages")
            .header(header::CONTENT_TYPE, "application/json");
        if let Some(value) = auth {
            builder = builder.header(header::AUTHORIZATION, value);
        }
        builder.body(Body::from(body.to_string())).unwrap()
    }

    async fn error_body(response: axum::response::Response) -> Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn health_is_open() {
        let response = test_app()
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn mutating_route_without_header_is_401() {
        let response = test_app()
            .oneshot(post_languages(None, r#"{"name":"Gothic"}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(error_body(response).await["error"], "not authorized");
    }

    #[tokio::test]
    async fn wrong_scheme_and_wrong_key_are_indistinguishable() {
        let bearer = test_app()
            .oneshot(post_languages(
                Some(&format!("Bearer {TEST_KEY}")),
                r#"{"name":"Gothic"}"#,
            ))
            .await
            .unwrap();
        let wrong = test_app()
            .oneshot(post_languages(Some("ApiKey wrong"), r#"{"name":"Gothic"}"#))
            .await
            .unwrap();

        assert_eq!(bearer.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(wrong.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            error_body(bearer).await["error"],
            error_body(wrong).await["error"]
        );
    }

    #[tokio::test]
    async fn auth_is_checked_before_the_body() {
        // Garbage body, no credentials: the 401 wins over the 400
        let response = test_app()
            .oneshot(post_languages(None, "{not json"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn malformed_body_with_valid_key_is_400() {
        let response = test_app()
            .oneshot(post_languages(Some(&format!("ApiKey {TEST_KEY}")), "{not json"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = error_body(response).await;
        assert!(body["error"].as_str().unwrap().contains("decode"));
    }

    #[tokio::test]
    async fn empty_language_name_is_400() {
        let response = test_app()
            .oneshot(post_languages(
                Some(&format!("ApiKey {TEST_KEY}")),
                r#"{"name":""}"#,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            error_body(response).await["error"],
            "language name cannot be empty"
        );
    }

    #[tokio::test]
    async fn unauthenticated_put_on_word_route_is_401() {
        let response = test_app()
            .oneshot(
                Request::builder()
                    .method("PUT")
                    .uri("/languages/gothic/words/gift")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from("{}"))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }
}
