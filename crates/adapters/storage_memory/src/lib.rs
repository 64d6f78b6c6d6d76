//! # acctdir-adapter-storage-memory
//!
//! In-memory persistence adapter.
//!
//! ## Responsibilities
//! - Implement the repository port trait defined in `acctdir-app::ports::storage`
//! - Hold the account table for the lifetime of the process (empty at start,
//!   discarded at exit)
//!
//! ## Dependency rule
//! Depends on `acctdir-app` (for port traits) and `acctdir-domain` (for domain types).
//! The `app` and `domain` crates must never reference this adapter.

pub mod account_repo;
pub mod error;

pub use account_repo::InMemoryAccountRepository;
