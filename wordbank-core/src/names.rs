//! Validated name newtypes for languages and words.
//!
//! Uniqueness is case-insensitive in the store, so these types carry the
//! text as supplied and expose a lowercase form for lookups, keeping
//! display casing intact on create.

use std::fmt;

/// Maximum length for a language name
const MAX_LANGUAGE_NAME_LEN: usize = 128;

/// Maximum length for a word's text
const MAX_WORD_TEXT_LEN: usize = 256;

/// Validation error for domain names
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Field is empty when it shouldn't be
    Empty { field: &'static str },

    /// Field exceeds maximum length
    TooLong { field: &'static str, max: usize },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { field } => write!(f, "{} cannot be empty", field),
            Self::TooLong { field, max } => {
                write!(f, "{} exceeds maximum length of {} characters", field, max)
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// Validated language name.
///
/// Compared case-insensitively everywhere; `lowercase()` is the lookup key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LanguageName(String);

impl LanguageName {
    pub fn new(s: &str) -> Result<Self, ValidationError> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty {
                field: "language name",
            });
        }
        if trimmed.len() > MAX_LANGUAGE_NAME_LEN {
            return Err(ValidationError::TooLong {
                field: "language name",
                max: MAX_LANGUAGE_NAME_LEN,
            });
        }
        Ok(Self(trimmed.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Lowercased form used for case-insensitive lookups.
    pub fn lowercase(&self) -> String {
        self.0.to_lowercase()
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl AsRef<str> for LanguageName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Validated word text.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WordText(String);

impl WordText {
    pub fn new(s: &str) -> Result<Self, ValidationError> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: "word" });
        }
        if trimmed.len() > MAX_WORD_TEXT_LEN {
            return Err(ValidationError::TooLong {
                field: "word",
                max: MAX_WORD_TEXT_LEN,
            });
        }
        Ok(Self(trimmed.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Lowercased form used for case-insensitive lookups.
    pub fn lowercase(&self) -> String {
        self.0.to_lowercase()
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl AsRef<str> for WordText {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_ordinary_names() {
        assert!(LanguageName::new("Norwegian").is_ok());
        assert!(LanguageName::new("mandarin chinese").is_ok());
        assert!(WordText::new("fjord").is_ok());
    }

    #[test]
    fn rejects_empty_and_whitespace() {
        assert_eq!(
            LanguageName::new(""),
            Err(ValidationError::Empty {
                field: "language name"
            })
        );
        assert_eq!(
            WordText::new("   "),
            Err(ValidationError::Empty { field: "word" })
        );
    }

    #[test]
    fn rejects_over_length() {
        let long = "x".repeat(MAX_LANGUAGE_NAME_LEN + 1);
        assert!(matches!(
            LanguageName::new(&long),
            Err(ValidationError::TooLong { .. })
        ));
    }

    #[test]
    fn trims_and_keeps_casing() {
        let name = LanguageName::new("  Norwegian ").unwrap();
        assert_eq!(name.as_str(), "Norwegian");
        assert_eq!(name.lowercase(), "norwegian");
    }

    #[test]
    fn error_display() {
        let err = ValidationError::TooLong {
            field: "word",
            max: 256,
        };
        assert_eq!(
            err.to_string(),
            "word exceeds maximum length of 256 characters"
        );
    }
}
