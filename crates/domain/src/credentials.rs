//! Credentials presented by a caller.

use std::fmt;

/// An unverified `user_id` / `password` pair.
///
/// Nothing about the pair is validated here: an unknown or malformed user id
/// simply fails authentication later on.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub user_id: String,
    pub password: String,
}

impl Credentials {
    #[must_use]
    pub fn new(user_id: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            password: password.into(),
        }
    }

    /// Split a decoded `user_id:password` payload on its first colon.
    ///
    /// Returns `None` when the payload has no colon.
    #[must_use]
    pub fn from_pair(decoded: &str) -> Option<Self> {
        let (user_id, password) = decoded.split_once(':')?;
        Some(Self::new(user_id, password))
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("user_id", &self.user_id)
            .field("password", &"***")
            .finish()
    }
}
