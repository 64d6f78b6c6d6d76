//! # acctdir-domain
//!
//! Pure domain model for the acctdir account directory.
//!
//! ## Responsibilities
//! - Foundational types: the validated [`UserId`](id::UserId), error conventions
//! - Define **Accounts** (user id, hashed password, nickname, optional comment)
//! - Define **Patches** (partial profile updates) and their application rules
//! - Define **Credentials** (the `user_id:password` pair presented by a caller)
//! - Contain all invariant enforcement and domain logic
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;

pub mod account;
pub mod credentials;
pub mod password;
