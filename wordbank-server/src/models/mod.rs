//! Response DTOs
//!
//! Database records stay in the repo layer; these are the shapes the API
//! serializes. Request bodies live next to their route handlers.

pub mod definition;
pub mod language;
pub mod word;

pub use definition::Definition;
pub use language::Language;
pub use word::Word;
