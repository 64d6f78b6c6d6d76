//! JSON API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod accounts;

use axum::Router;
use axum::routing::{get, post};

use acctdir_app::ports::AccountRepository;

use crate::state::AppState;

/// Build the account API router.
pub fn routes<R>() -> Router<AppState<R>>
where
    R: AccountRepository + Send + Sync + 'static,
{
    Router::new()
        .route("/signup", post(accounts::signup::<R>))
        .route(
            "/users/{user_id}",
            get(accounts::get::<R>).patch(accounts::update::<R>),
        )
        .route("/close", post(accounts::close::<R>))
}
