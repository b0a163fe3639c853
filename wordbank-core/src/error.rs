//! Structured error types for wordbank-core.
//!
//! Uses `thiserror` for composable library errors. Binary crates can
//! still wrap these in `anyhow` for convenience.

use thiserror::Error;

/// Main error type for wordbank-core operations
#[derive(Error, Debug)]
pub enum CoreError {
    /// Configuration error (missing or malformed environment variable)
    #[error("configuration error: {reason}")]
    Config { reason: String },

    /// Required environment variable is not set
    #[error("missing required environment variable {name}")]
    MissingEnv { name: &'static str },
}
