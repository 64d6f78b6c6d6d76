//! Storage port — repository trait for the account table.

use std::future::Future;
use std::sync::Arc;

use acctdir_domain::account::Account;
use acctdir_domain::error::DirectoryError;
use acctdir_domain::id::UserId;

/// Keyed storage for [`Account`]s.
///
/// Each call is atomic on its own. Sequences of calls are not: callers that
/// need check-then-mutate semantics must serialise them.
pub trait AccountRepository {
    /// Whether an account with `user_id` exists.
    fn contains(
        &self,
        user_id: &UserId,
    ) -> impl Future<Output = Result<bool, DirectoryError>> + Send;

    /// Fetch a copy of the account stored under `user_id`.
    fn get(
        &self,
        user_id: &UserId,
    ) -> impl Future<Output = Result<Option<Account>, DirectoryError>> + Send;

    /// Insert or replace the account under its own user id.
    fn put(&self, account: Account) -> impl Future<Output = Result<(), DirectoryError>> + Send;

    /// Remove the account under `user_id`, returning whether it existed.
    fn delete(
        &self,
        user_id: &UserId,
    ) -> impl Future<Output = Result<bool, DirectoryError>> + Send;
}

impl<T: AccountRepository + Send + Sync> AccountRepository for Arc<T> {
    fn contains(
        &self,
        user_id: &UserId,
    ) -> impl Future<Output = Result<bool, DirectoryError>> + Send {
        (**self).contains(user_id)
    }

    fn get(
        &self,
        user_id: &UserId,
    ) -> impl Future<Output = Result<Option<Account>, DirectoryError>> + Send {
        (**self).get(user_id)
    }

    fn put(&self, account: Account) -> impl Future<Output = Result<(), DirectoryError>> + Send {
        (**self).put(account)
    }

    fn delete(
        &self,
        user_id: &UserId,
    ) -> impl Future<Output = Result<bool, DirectoryError>> + Send {
        (**self).delete(user_id)
    }
}
