//! JSON handlers for accounts.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use acctdir_app::ports::AccountRepository;
use acctdir_domain::account::{AccountPatch, Profile};

use crate::auth::BasicAuth;
use crate::error::ApiError;
use crate::state::AppState;

/// Request body for signing up.
///
/// Both fields are optional at the wire level so that a missing field is
/// reported as a validation failure rather than a deserialization error.
#[derive(Debug, Default, Deserialize)]
pub struct SignupRequest {
    pub user_id: Option<String>,
    pub password: Option<String>,
}

/// Success body carrying a profile.
#[derive(Debug, Serialize)]
pub struct UserBody {
    pub message: &'static str,
    pub user: Profile,
}

/// Success body carrying only a message.
#[derive(Debug, Serialize)]
pub struct MessageBody {
    pub message: &'static str,
}

/// Possible responses from the signup endpoint.
pub enum SignupResponse {
    Ok(Json<UserBody>),
}

impl IntoResponse for SignupResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the get endpoint.
pub enum GetResponse {
    Ok(Json<UserBody>),
}

impl IntoResponse for GetResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the update endpoint.
pub enum UpdateResponse {
    Ok(Json<UserBody>),
}

impl IntoResponse for UpdateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the close endpoint.
pub enum CloseResponse {
    Ok(Json<MessageBody>),
}

impl IntoResponse for CloseResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Turn a raw JSON object into an [`AccountPatch`].
///
/// `nickname` and `comment` only count when they are strings. The presence
/// of a `user_id` or `password` key is recorded whatever its value.
#[must_use]
pub fn patch_from_json(body: &Map<String, Value>) -> AccountPatch {
    let text = |key: &str| body.get(key).and_then(Value::as_str).map(str::to_owned);
    AccountPatch {
        nickname: text("nickname"),
        comment: text("comment"),
        touches_user_id: body.contains_key("user_id"),
        touches_password: body.contains_key("password"),
    }
}

/// `POST /signup`
pub async fn signup<R>(
    State(state): State<AppState<R>>,
    body: Result<Json<SignupRequest>, JsonRejection>,
) -> Result<SignupResponse, ApiError>
where
    R: AccountRepository + Send + Sync + 'static,
{
    let req = body.map_or_else(
        |rejection| {
            tracing::debug!(%rejection, "unreadable signup body");
            SignupRequest::default()
        },
        |Json(req)| req,
    );
    let profile = state
        .account_service
        .create_account(
            req.user_id.as_deref().unwrap_or_default(),
            req.password.as_deref().unwrap_or_default(),
        )
        .await?;
    Ok(SignupResponse::Ok(Json(UserBody {
        message: "Account successfully created",
        user: profile,
    })))
}

/// `GET /users/{user_id}`
pub async fn get<R>(
    State(state): State<AppState<R>>,
    Path(user_id): Path<String>,
    BasicAuth(credentials): BasicAuth,
) -> Result<GetResponse, ApiError>
where
    R: AccountRepository + Send + Sync + 'static,
{
    let profile = state
        .account_service
        .get_account(&user_id, &credentials)
        .await?;
    Ok(GetResponse::Ok(Json(UserBody {
        message: "User details by user_id",
        user: profile,
    })))
}

/// `PATCH /users/{user_id}`
///
/// A body that is not a JSON object counts as an empty patch. Non-string
/// `nickname` or `comment` values are ignored, so `{"nickname": 42}` is
/// refused with "required nickname or comment".
pub async fn update<R>(
    State(state): State<AppState<R>>,
    Path(user_id): Path<String>,
    BasicAuth(credentials): BasicAuth,
    body: Result<Json<Map<String, Value>>, JsonRejection>,
) -> Result<UpdateResponse, ApiError>
where
    R: AccountRepository + Send + Sync + 'static,
{
    let patch = body.map_or_else(
        |rejection| {
            tracing::debug!(%rejection, "unreadable update body");
            AccountPatch::default()
        },
        |Json(body)| patch_from_json(&body),
    );
    let profile = state
        .account_service
        .update_account(&user_id, &credentials, patch)
        .await?;
    Ok(UpdateResponse::Ok(Json(UserBody {
        message: "User successfully updated",
        user: profile,
    })))
}

/// `POST /close`
pub async fn close<R>(
    State(state): State<AppState<R>>,
    BasicAuth(credentials): BasicAuth,
) -> Result<CloseResponse, ApiError>
where
    R: AccountRepository + Send + Sync + 'static,
{
    state.account_service.delete_account(&credentials).await?;
    Ok(CloseResponse::Ok(Json(MessageBody {
        message: "Account and user successfully removed",
    })))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn object(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            other => panic!("expected object, got {other}"),
        }
    }

    #[test]
    fn should_read_string_fields_into_patch() {
        let patch = patch_from_json(&object(json!({ "nickname": "Ali", "comment": "" })));
        assert_eq!(patch.nickname.as_deref(), Some("Ali"));
        assert_eq!(patch.comment.as_deref(), Some(""));
        assert!(patch.validate().is_ok());
    }

    #[test]
    fn should_flag_credential_keys_even_when_null() {
        let patch = patch_from_json(&object(json!({ "nickname": "Ali", "password": null })));
        assert!(patch.touches_password);
        assert!(!patch.touches_user_id);
        assert!(patch.validate().is_err());
    }

    #[test]
    fn should_ignore_non_string_profile_fields() {
        let patch = patch_from_json(&object(json!({ "nickname": 42, "comment": null })));
        assert!(patch.nickname.is_none());
        assert!(patch.comment.is_none());
    }

    #[test]
    fn should_ignore_unrelated_keys() {
        let patch = patch_from_json(&object(json!({ "age": 3 })));
        assert_eq!(patch, AccountPatch::default());
    }
}
