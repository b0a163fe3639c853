//! wordbank-core: shared pieces of the wordbank dictionary service
//!
//! Holds the environment-driven configuration, the library error type,
//! and the validated name newtypes used by both the repositories and
//! the HTTP layer.

pub mod config;
pub mod error;
pub mod names;

pub use config::Config;
pub use error::CoreError;
pub use names::{LanguageName, ValidationError, WordText};
