//! User Name Value Object
//!
//! The login handle. Unique across users and immutable once registered.
//!
//! ## Invariants
//! - NFKC-normalized and trimmed before validation
//! - Length 3..=30 characters
//! - ASCII letters, digits and `_ . -` only
//! - At least one letter or digit

use derive_more::Display;
use thiserror::Error;
use unicode_normalization::UnicodeNormalization;

/// Minimum length for user name (in characters)
pub const USER_NAME_MIN_LENGTH: usize = 3;

/// Maximum length for user name (in characters)
pub const USER_NAME_MAX_LENGTH: usize = 30;

const ALLOWED_SPECIAL_CHARS: &[char] = &['_', '.', '-'];

/// Error returned when user name validation fails
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UserNameError {
    #[error("must be at least {} characters", USER_NAME_MIN_LENGTH)]
    TooShort,

    #[error("must be at most {} characters", USER_NAME_MAX_LENGTH)]
    TooLong,

    #[error("contains invalid character '{0}'")]
    InvalidCharacter(char),

    #[error("must contain at least one letter or digit")]
    NoAlphanumeric,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Display)]
pub struct UserName(String);

impl UserName {
    pub fn new(raw: &str) -> Result<Self, UserNameError> {
        let normalized: String = raw.nfkc().collect();
        let value = normalized.trim();

        let len = value.chars().count();
        if len < USER_NAME_MIN_LENGTH {
            return Err(UserNameError::TooShort);
        }
        if len > USER_NAME_MAX_LENGTH {
            return Err(UserNameError::TooLong);
        }

        if let Some(bad) = value
            .chars()
            .find(|c| !(c.is_ascii_alphanumeric() || ALLOWED_SPECIAL_CHARS.contains(c)))
        {
            return Err(UserNameError::InvalidCharacter(bad));
        }

        if !value.chars().any(|c| c.is_ascii_alphanumeric()) {
            return Err(UserNameError::NoAlphanumeric);
        }

        Ok(Self(value.to_string()))
    }

    /// Rebuild from a stored value without re-validating
    pub fn from_db(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_user_names() {
        for name in ["mluukkai", "hellas", "root_2", "a.b-c"] {
            assert_eq!(UserName::new(name).unwrap().as_str(), name);
        }
    }

    #[test]
    fn test_trims_surrounding_whitespace() {
        assert_eq!(UserName::new("  hellas ").unwrap().as_str(), "hellas");
    }

    #[test]
    fn test_length_bounds() {
        assert_eq!(UserName::new("ab"), Err(UserNameError::TooShort));
        assert_eq!(
            UserName::new(&"x".repeat(USER_NAME_MAX_LENGTH + 1)),
            Err(UserNameError::TooLong)
        );
        assert!(UserName::new(&"x".repeat(USER_NAME_MAX_LENGTH)).is_ok());
    }

    #[test]
    fn test_rejects_invalid_characters() {
        assert_eq!(
            UserName::new("has space"),
            Err(UserNameError::InvalidCharacter(' '))
        );
        assert_eq!(
            UserName::new("emoji🙂"),
            Err(UserNameError::InvalidCharacter('🙂'))
        );
    }

    #[test]
    fn test_symbols_only() {
        assert_eq!(UserName::new("._-"), Err(UserNameError::NoAlphanumeric));
    }

    #[test]
    fn test_fullwidth_is_normalized() {
        // NFKC folds fullwidth ASCII
        assert_eq!(UserName::new("ｕｓｅｒ１").unwrap().as_str(), "user1");
    }
}
