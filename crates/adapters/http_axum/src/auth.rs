//! `Authorization: Basic` extraction.

use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use axum::http::HeaderValue;
use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64_STANDARD;

use acctdir_domain::credentials::Credentials;
use acctdir_domain::error::DirectoryError;

use crate::error::ApiError;

/// Credentials decoded from a Basic `Authorization` header.
///
/// Only the header format is checked here. Whether the pair actually unlocks
/// an account is decided by the service. Every decoding failure is rejected
/// with the same `401` as a wrong password.
#[derive(Debug)]
pub struct BasicAuth(pub Credentials);

impl<S> FromRequestParts<S> for BasicAuth
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .headers
            .get(AUTHORIZATION)
            .and_then(decode)
            .map(Self)
            .ok_or_else(|| {
                tracing::debug!("missing or malformed basic authorization header");
                DirectoryError::Authentication.into()
            })
    }
}

/// Decode `Basic base64(user_id:password)` into [`Credentials`].
#[must_use]
pub fn decode(value: &HeaderValue) -> Option<Credentials> {
    let value = value.to_str().ok()?;
    let (scheme, payload) = value.split_once(' ')?;
    if !scheme.eq_ignore_ascii_case("basic") {
        return None;
    }
    let bytes = BASE64_STANDARD.decode(payload.trim()).ok()?;
    let pair = String::from_utf8(bytes).ok()?;
    Credentials::from_pair(&pair)
}

/// Build a Basic header value for `user_id` and `password`.
#[must_use]
pub fn encode(user_id: &str, password: &str) -> String {
    format!(
        "Basic {}",
        BASE64_STANDARD.encode(format!("{user_id}:{password}"))
    )
}
