//! In-memory implementation of [`AccountRepository`].

use std::collections::HashMap;
use std::future::{Future, ready};
use std::sync::{PoisonError, RwLock};

use acctdir_app::ports::AccountRepository;
use acctdir_domain::account::Account;
use acctdir_domain::error::DirectoryError;
use acctdir_domain::id::UserId;

use crate::error::StorageError;

/// Account table guarded by a reader/writer lock.
#[derive(Debug, Default)]
pub struct InMemoryAccountRepository {
    accounts: RwLock<HashMap<UserId, Account>>,
}

impl InMemoryAccountRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored accounts.
    ///
    /// # Errors
    ///
    /// Returns a storage error if the lock is poisoned.
    pub fn len(&self) -> Result<usize, DirectoryError> {
        let accounts = self.accounts.read().map_err(poisoned)?;
        Ok(accounts.len())
    }

    /// Whether the table is empty.
    ///
    /// # Errors
    ///
    /// Returns a storage error if the lock is poisoned.
    pub fn is_empty(&self) -> Result<bool, DirectoryError> {
        self.len().map(|len| len == 0)
    }
}

fn poisoned<T>(_: PoisonError<T>) -> DirectoryError {
    tracing::error!("account table lock poisoned");
    StorageError::Poisoned.into()
}

impl AccountRepository for InMemoryAccountRepository {
    fn contains(
        &self,
        user_id: &UserId,
    ) -> impl Future<Output = Result<bool, DirectoryError>> + Send {
        let result = self
            .accounts
            .read()
            .map(|accounts| accounts.contains_key(user_id))
            .map_err(poisoned);
        ready(result)
    }

    fn get(
        &self,
        user_id: &UserId,
    ) -> impl Future<Output = Result<Option<Account>, DirectoryError>> + Send {
        let result = self
            .accounts
            .read()
            .map(|accounts| accounts.get(user_id).cloned())
            .map_err(poisoned);
        ready(result)
    }

    fn put(&self, account: Account) -> impl Future<Output = Result<(), DirectoryError>> + Send {
        let result = self
            .accounts
            .write()
            .map(|mut accounts| {
                accounts.insert(account.user_id().clone(), account);
            })
            .map_err(poisoned);
        ready(result)
    }

    fn delete(
        &self,
        user_id: &UserId,
    ) -> impl Future<Output = Result<bool, DirectoryError>> + Send {
        let result = self
            .accounts
            .write()
            .map(|mut accounts| accounts.remove(user_id).is_some())
            .map_err(poisoned);
        ready(result)
    }
}

#[cfg(test)]
mod tests {
    use acctdir_domain::account::AccountPatch;

    use super::*;

    fn account(user_id: &str) -> Account {
        Account::signup(user_id, "secret123").unwrap()
    }

    fn id(raw: &str) -> UserId {
        UserId::parse(raw).unwrap()
    }

    #[tokio::test]
    async fn should_start_empty() {
        let repo = InMemoryAccountRepository::new();
        assert!(repo.is_empty().unwrap());
        assert!(!repo.contains(&id("alice01")).await.unwrap());
        assert!(repo.get(&id("alice01")).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn should_put_and_get_account() {
        let repo = InMemoryAccountRepository::new();
        repo.put(account("alice01")).await.unwrap();

        assert!(repo.contains(&id("alice01")).await.unwrap());
        let fetched = repo.get(&id("alice01")).await.unwrap().unwrap();
        assert_eq!(fetched.nickname(), "alice01");
        assert_eq!(repo.len().unwrap(), 1);
    }

    #[tokio::test]
    async fn should_replace_account_on_put() {
        let repo = InMemoryAccountRepository::new();
        let mut original = account("alice01");
        repo.put(original.clone()).await.unwrap();

        original.apply(AccountPatch {
            nickname: Some("Ali".to_string()),
            ..AccountPatch::default()
        });
        repo.put(original).await.unwrap();

        let fetched = repo.get(&id("alice01")).await.unwrap().unwrap();
        assert_eq!(fetched.nickname(), "Ali");
        assert_eq!(repo.len().unwrap(), 1);
    }

    #[tokio::test]
    async fn should_report_whether_delete_removed_anything() {
        let repo = InMemoryAccountRepository::new();
        repo.put(account("alice01")).await.unwrap();

        assert!(repo.delete(&id("alice01")).await.unwrap());
        assert!(!repo.delete(&id("alice01")).await.unwrap());
        assert!(repo.is_empty().unwrap());
    }

    #[tokio::test]
    async fn should_keep_accounts_independent() {
        let repo = InMemoryAccountRepository::new();
        repo.put(account("alice01")).await.unwrap();
        repo.put(account("bob0001")).await.unwrap();

        repo.delete(&id("alice01")).await.unwrap();
        assert!(repo.contains(&id("bob0001")).await.unwrap());
    }
}
