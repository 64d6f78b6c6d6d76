//! Validated user identifier.

use std::fmt;

use crate::error::ValidationError;

/// Minimum `user_id` length in characters.
pub const USER_ID_MIN_LEN: usize = 6;
/// Maximum `user_id` length in characters.
pub const USER_ID_MAX_LEN: usize = 20;

/// Unique, immutable key of an [`Account`](crate::account::Account).
///
/// Always 6 to 20 ASCII alphanumeric characters.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UserId(String);

impl UserId {
    /// Validate and wrap a raw identifier.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidSignup`] when `raw` has the wrong
    /// length or contains anything but ASCII letters and digits.
    pub fn parse(raw: impl Into<String>) -> Result<Self, ValidationError> {
        let raw = raw.into();
        let len = raw.len();
        if !(USER_ID_MIN_LEN..=USER_ID_MAX_LEN).contains(&len)
            || !raw.bytes().all(|b| b.is_ascii_alphanumeric())
        {
            return Err(ValidationError::InvalidSignup);
        }
        Ok(Self(raw))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_accept_alphanumeric_id_within_bounds() {
        assert!(UserId::parse("alice01").is_ok());
        assert!(UserId::parse("abcdef").is_ok());
        assert!(UserId::parse("A".repeat(20)).is_ok());
    }

    #[test]
    fn should_reject_id_shorter_than_six_chars() {
        assert_eq!(
            UserId::parse("abc12"),
            Err(ValidationError::InvalidSignup)
        );
    }

    #[test]
    fn should_reject_id_longer_than_twenty_chars() {
        assert!(UserId::parse("a".repeat(21)).is_err());
    }

    #[test]
    fn should_reject_non_alphanumeric_chars() {
        assert!(UserId::parse("alice_01").is_err());
        assert!(UserId::parse("alice 01").is_err());
        assert!(UserId::parse("alicé001").is_err());
    }

    #[test]
    fn should_display_raw_id() {
        let id = UserId::parse("alice01").unwrap();
        assert_eq!(id.to_string(), "alice01");
        assert_eq!(id.as_str(), "alice01");
    }
}
