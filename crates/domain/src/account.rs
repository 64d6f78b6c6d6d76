//! Account — the single entity of the directory, plus its update patch.

use serde::Serialize;

use crate::credentials::Credentials;
use crate::error::{DirectoryError, ValidationError};
use crate::id::UserId;
use crate::password::PasswordHash;

/// Maximum nickname length in characters; longer input is truncated.
pub const NICKNAME_MAX_LEN: usize = 30;
/// Maximum comment length in characters; longer input is truncated.
pub const COMMENT_MAX_LEN: usize = 100;

/// A registered account.
///
/// Invariants held by construction:
/// - `nickname` is never empty (it falls back to the user id)
/// - `comment` is either absent or a non-empty string of at most
///   [`COMMENT_MAX_LEN`] characters
#[derive(Debug, Clone)]
pub struct Account {
    user_id: UserId,
    password: PasswordHash,
    nickname: String,
    comment: Option<String>,
}

impl Account {
    /// Build a fresh account from signup input.
    ///
    /// The nickname defaults to the user id and there is no comment.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidSignup`] when either field breaks
    /// its format rule, or [`DirectoryError::Credential`] if hashing fails.
    pub fn signup(user_id: &str, password: &str) -> Result<Self, DirectoryError> {
        let user_id = UserId::parse(user_id)?;
        let password = PasswordHash::new(password)?;
        Ok(Self {
            nickname: user_id.to_string(),
            user_id,
            password,
            comment: None,
        })
    }

    #[must_use]
    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    #[must_use]
    pub fn nickname(&self) -> &str {
        &self.nickname
    }

    #[must_use]
    pub fn comment(&self) -> Option<&str> {
        self.comment.as_deref()
    }

    /// Whether `credentials` name this account and carry its password.
    #[must_use]
    pub fn accepts(&self, credentials: &Credentials) -> bool {
        credentials.user_id == self.user_id.as_str() && self.password.verify(&credentials.password)
    }

    /// Apply a validated patch.
    ///
    /// An empty nickname resets it to the user id and an empty comment
    /// removes it. Anything else is truncated to its maximum length.
    pub fn apply(&mut self, patch: AccountPatch) {
        if let Some(nickname) = patch.nickname {
            self.nickname = if nickname.is_empty() {
                self.user_id.to_string()
            } else {
                truncate(&nickname, NICKNAME_MAX_LEN)
            };
        }
        if let Some(comment) = patch.comment {
            self.comment = if comment.is_empty() {
                None
            } else {
                Some(truncate(&comment, COMMENT_MAX_LEN))
            };
        }
    }

    /// Public view of the account, without any credential material.
    #[must_use]
    pub fn profile(&self) -> Profile {
        Profile {
            user_id: self.user_id.to_string(),
            nickname: self.nickname.clone(),
            comment: self.comment.clone(),
        }
    }
}

fn truncate(value: &str, max_chars: usize) -> String {
    value.chars().take(max_chars).collect()
}

/// What anyone holding valid credentials may see of an account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Profile {
    pub user_id: String,
    pub nickname: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

/// Partial profile update as submitted by a caller.
///
/// `user_id` and `password` are only tracked so that an attempt to change
/// them can be refused.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AccountPatch {
    pub nickname: Option<String>,
    pub comment: Option<String>,
    pub touches_user_id: bool,
    pub touches_password: bool,
}

impl AccountPatch {
    /// Check that the patch is applicable.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::ImmutableField`] when the patch names
    /// `user_id` or `password`, and [`ValidationError::EmptyPatch`] when it
    /// carries neither `nickname` nor `comment`.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.touches_user_id || self.touches_password {
            return Err(ValidationError::ImmutableField);
        }
        if self.nickname.is_none() && self.comment.is_none() {
            return Err(ValidationError::EmptyPatch);
        }
        Ok(())
    }
}
