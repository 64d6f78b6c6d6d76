//! Axum router assembly.

use axum::Router;
use axum::routing::get;
use tower_http::trace::TraceLayer;

use acctdir_app::ports::AccountRepository;

use crate::state::AppState;

/// Build the top-level axum [`Router`].
///
/// Mounts the account API at the root next to `/health`.
/// Includes a [`TraceLayer`] that logs each HTTP request/response at the
/// `DEBUG` level using the `tracing` ecosystem.
pub fn build<R>(state: AppState<R>) -> Router
where
    R: AccountRepository + Send + Sync + 'static,
{
    Router::new()
        .route("/health", get(health_check))
        .merge(crate::api::routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth;
    use crate::state::AppState;
    use acctdir_app::services::account_service::AccountService;
    use acctdir_domain::account::Account;
    use acctdir_domain::error::DirectoryError;
    use acctdir_domain::id::UserId;
    use axum::body::Body;
    use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
    use axum::http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use std::collections::HashMap;
    use std::sync::Mutex;
    use tower::ServiceExt;

    #[derive(Default)]
    struct StubAccountRepo {
        store: Mutex<HashMap<UserId, Account>>,
    }

    impl AccountRepository for StubAccountRepo {
        async fn contains(&self, user_id: &UserId) -> Result<bool, DirectoryError> {
            Ok(self.store.lock().unwrap().contains_key(user_id))
        }
        async fn get(&self, user_id: &UserId) -> Result<Option<Account>, DirectoryError> {
            Ok(self.store.lock().unwrap().get(user_id).cloned())
        }
        async fn put(&self, account: Account) -> Result<(), DirectoryError> {
            self.store
                .lock()
                .unwrap()
                .insert(account.user_id().clone(), account);
            Ok(())
        }
        async fn delete(&self, user_id: &UserId) -> Result<bool, DirectoryError> {
            Ok(self.store.lock().unwrap().remove(user_id).is_some())
        }
    }

    fn test_app() -> Router {
        build(AppState::new(AccountService::new(StubAccountRepo::default())))
    }

    async fn send(app: &Router, request: Request<Body>) -> (StatusCode, serde_json::Value) {
        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);
        (status, json)
    }

    fn signup_request(body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/signup")
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn should_return_ok_when_health_check_called() {
        let app = test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn should_sign_up_through_router() {
        let app = test_app();
        let (status, body) = send(
            &app,
            signup_request(r#"{"user_id":"alice01","password":"secret123"}"#),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            serde_json::json!({
                "message": "Account successfully created",
                "user": { "user_id": "alice01", "nickname": "alice01" },
            })
        );
    }

    #[tokio::test]
    async fn should_report_validation_failure_for_unreadable_signup_body() {
        let app = test_app();
        let (status, body) = send(&app, signup_request("not json")).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["cause"], "required user_id and password");
    }

    #[tokio::test]
    async fn should_reject_profile_read_without_authorization() {
        let app = test_app();
        send(
            &app,
            signup_request(r#"{"user_id":"alice01","password":"secret123"}"#),
        )
        .await;

        let (status, body) = send(
            &app,
            Request::builder()
                .uri("/users/alice01")
                .body(Body::empty())
                .unwrap(),
        )
        .await;

        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body, serde_json::json!({ "message": "Authentication Failed" }));
    }

    #[tokio::test]
    async fn should_read_profile_with_basic_authorization() {
        let app = test_app();
        send(
            &app,
            signup_request(r#"{"user_id":"alice01","password":"secret123"}"#),
        )
        .await;

        let (status, body) = send(
            &app,
            Request::builder()
                .uri("/users/alice01")
                .header(AUTHORIZATION, auth::encode("alice01", "secret123"))
                .body(Body::empty())
                .unwrap(),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "User details by user_id");
        assert_eq!(body["user"]["nickname"], "alice01");
        assert!(body["user"].get("comment").is_none());
    }

    #[tokio::test]
    async fn should_return_not_found_for_unknown_route() {
        let app = test_app();
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/nowhere")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
