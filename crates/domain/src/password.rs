//! Password rules and at-rest hashing.

use std::fmt;

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHasher, PasswordVerifier, SaltString};
use argon2::Argon2;

use crate::error::{DirectoryError, ValidationError};

/// Minimum password length in characters.
pub const PASSWORD_MIN_LEN: usize = 8;
/// Maximum password length in characters.
pub const PASSWORD_MAX_LEN: usize = 20;

/// Argon2 PHC string of an account password. The plaintext is never kept.
#[derive(Clone, PartialEq, Eq)]
pub struct PasswordHash(String);

impl PasswordHash {
    /// Check the length rule, then hash `plain` with a fresh random salt.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidSignup`] when `plain` is not 8 to 20
    /// characters long, or [`DirectoryError::Credential`] if hashing fails.
    pub fn new(plain: &str) -> Result<Self, DirectoryError> {
        let len = plain.chars().count();
        if !(PASSWORD_MIN_LEN..=PASSWORD_MAX_LEN).contains(&len) {
            return Err(ValidationError::InvalidSignup.into());
        }
        let salt = SaltString::generate(&mut OsRng);
        let hash = Argon2::default()
            .hash_password(plain.as_bytes(), &salt)
            .map_err(DirectoryError::Credential)?;
        Ok(Self(hash.to_string()))
    }

    /// Whether `candidate` is exactly the password this hash was built from.
    #[must_use]
    pub fn verify(&self, candidate: &str) -> bool {
        let Ok(parsed) = argon2::PasswordHash::new(&self.0) else {
            return false;
        };
        Argon2::default()
            .verify_password(candidate.as_bytes(), &parsed)
            .is_ok()
    }
}

impl fmt::Debug for PasswordHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PasswordHash(***)")
    }
}
