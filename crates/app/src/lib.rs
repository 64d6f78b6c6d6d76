//! # acctdir-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `AccountRepository` — get / put / delete / contains by user id
//! - Define **driving/inbound ports** as use-case structs:
//!   - `AccountService` — signup, authenticate, fetch, update, close
//! - Serialise read-modify-write sequences over the account table
//!
//! ## Dependency rule
//! Depends on `acctdir-domain` only (plus `tokio::sync` for the write lock).
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;
