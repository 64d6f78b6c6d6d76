//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`DirectoryError`] via `#[from]`.

/// Top-level error for every account directory operation.
#[derive(Debug, thiserror::Error)]
pub enum DirectoryError {
    #[error("validation error")]
    Validation(#[from] ValidationError),

    #[error("conflict")]
    Conflict(#[from] ConflictError),

    /// Credentials were missing or did not match. The reason is never exposed.
    #[error("authentication failed")]
    Authentication,

    #[error("forbidden")]
    Forbidden(#[from] ForbiddenError),

    #[error("not found")]
    NotFound(#[from] NotFoundError),

    #[error("credential hashing failed")]
    Credential(#[source] argon2::password_hash::Error),

    #[error("storage error")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Rejected input fields.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// Signup `user_id` or `password` is missing or malformed.
    #[error("required user_id and password")]
    InvalidSignup,

    /// A patch tried to touch `user_id` or `password`.
    #[error("not updatable user_id and password")]
    ImmutableField,

    /// A patch carried neither `nickname` nor `comment`.
    #[error("required nickname or comment")]
    EmptyPatch,
}

/// A `user_id` is already taken.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("already same user_id is used")]
pub struct ConflictError {
    pub user_id: String,
}

/// Authenticated as one account while targeting another.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{actor} may not modify {target}")]
pub struct ForbiddenError {
    pub actor: String,
    pub target: String,
}

/// No account matches the requested `user_id`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("no account found for {user_id}")]
pub struct NotFoundError {
    pub user_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_display_validation_causes_verbatim() {
        assert_eq!(
            ValidationError::InvalidSignup.to_string(),
            "required user_id and password"
        );
        assert_eq!(
            ValidationError::ImmutableField.to_string(),
            "not updatable user_id and password"
        );
        assert_eq!(
            ValidationError::EmptyPatch.to_string(),
            "required nickname or comment"
        );
    }

    #[test]
    fn should_convert_typed_errors_with_from() {
        let err: DirectoryError = NotFoundError {
            user_id: "alice01".to_string(),
        }
        .into();
        assert!(matches!(err, DirectoryError::NotFound(_)));

        let err: DirectoryError = ValidationError::EmptyPatch.into();
        assert!(matches!(
            err,
            DirectoryError::Validation(ValidationError::EmptyPatch)
        ));
    }
}
