//! # acctdir-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the **JSON account API**
//!   (`POST /signup`, `GET|PATCH /users/{user_id}`, `POST /close`)
//! - Decode `Authorization: Basic` headers into domain credentials
//! - Map HTTP requests into application service calls (driving adapter)
//! - Map application results and errors into `{message, cause?, user?}` bodies
//!
//! ## Dependency rule
//! Depends on `acctdir-app` (for port traits and services) and `acctdir-domain`
//! (for domain types used in request/response mapping). Never leaks axum types
//! into the domain.

pub mod api;
pub mod auth;
pub mod error;
pub mod router;
pub mod state;
