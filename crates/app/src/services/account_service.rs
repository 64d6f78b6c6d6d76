//! Account service — signup, authentication, profile read/update, close.

use tokio::sync::Mutex;

use acctdir_domain::account::{Account, AccountPatch, Profile};
use acctdir_domain::credentials::Credentials;
use acctdir_domain::error::{ConflictError, DirectoryError, ForbiddenError, NotFoundError};
use acctdir_domain::id::UserId;

use crate::ports::AccountRepository;

/// Application service for the account directory.
///
/// The read-modify-write step of every mutation runs under a single write
/// lock so that check-then-mutate sequences (duplicate check before insert,
/// ownership check before update) cannot interleave. Password hashing and
/// verification happen before the lock is taken. Reads only rely on the
/// repository's own atomicity.
pub struct AccountService<R> {
    repo: R,
    write_lock: Mutex<()>,
}

impl<R: AccountRepository> AccountService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self {
            repo,
            write_lock: Mutex::new(()),
        }
    }

    /// Register a new account whose nickname defaults to its user id.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::Validation`] if either field is malformed,
    /// [`DirectoryError::Conflict`] if `user_id` is taken, or a storage error.
    #[tracing::instrument(skip(self, password))]
    pub async fn create_account(
        &self,
        user_id: &str,
        password: &str,
    ) -> Result<Profile, DirectoryError> {
        let account = Account::signup(user_id, password)?;

        let _guard = self.write_lock.lock().await;
        if self.repo.contains(account.user_id()).await? {
            tracing::debug!("user id already registered");
            return Err(ConflictError {
                user_id: account.user_id().to_string(),
            }
            .into());
        }
        let profile = account.profile();
        self.repo.put(account).await?;
        tracing::info!("account created");
        Ok(profile)
    }

    /// Resolve `credentials` to the account they unlock.
    ///
    /// Returns `Ok(None)` for every kind of mismatch (unknown or malformed
    /// user id, wrong password) without telling them apart.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    #[tracing::instrument(skip_all, fields(actor = %credentials.user_id))]
    pub async fn authenticate(
        &self,
        credentials: &Credentials,
    ) -> Result<Option<Account>, DirectoryError> {
        let Ok(user_id) = UserId::parse(credentials.user_id.as_str()) else {
            tracing::debug!("rejected credentials: malformed user id");
            return Ok(None);
        };
        let Some(account) = self.repo.get(&user_id).await? else {
            tracing::debug!("rejected credentials: unknown user id");
            return Ok(None);
        };
        if !account.accepts(credentials) {
            tracing::debug!("rejected credentials: password mismatch");
            return Ok(None);
        }
        Ok(Some(account))
    }

    /// Fetch the public profile of any account.
    ///
    /// Any valid credentials grant read access, not only the owner's.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::Authentication`] when `credentials` are
    /// rejected, [`DirectoryError::NotFound`] when `requested_id` does not
    /// exist, or a storage error.
    #[tracing::instrument(skip(self, credentials), fields(actor = %credentials.user_id))]
    pub async fn get_account(
        &self,
        requested_id: &str,
        credentials: &Credentials,
    ) -> Result<Profile, DirectoryError> {
        self.require(credentials).await?;
        let account = self.find(requested_id).await?;
        Ok(account.profile())
    }

    /// Apply `patch` to the caller's own account.
    ///
    /// Checks run in order: credentials, existence of the target, ownership,
    /// then the patch itself.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::Authentication`], [`DirectoryError::NotFound`],
    /// [`DirectoryError::Forbidden`], [`DirectoryError::Validation`], or a
    /// storage error, matching the first failing check.
    #[tracing::instrument(skip(self, credentials, patch), fields(actor = %credentials.user_id))]
    pub async fn update_account(
        &self,
        requested_id: &str,
        credentials: &Credentials,
        patch: AccountPatch,
    ) -> Result<Profile, DirectoryError> {
        let actor = self.require(credentials).await?;
        let target = self.find(requested_id).await?;
        ensure_owner(&actor, &target)?;
        patch.validate()?;

        let _guard = self.write_lock.lock().await;
        // The target may have been closed since it was first read.
        let mut target = self.find(requested_id).await?;
        ensure_owner(&actor, &target)?;
        target.apply(patch);
        let profile = target.profile();
        self.repo.put(target).await?;
        tracing::info!("account updated");
        Ok(profile)
    }

    /// Delete the account the credentials belong to.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::Authentication`] when `credentials` are
    /// rejected (including after a previous close), or a storage error.
    #[tracing::instrument(skip_all, fields(actor = %credentials.user_id))]
    pub async fn delete_account(&self, credentials: &Credentials) -> Result<(), DirectoryError> {
        let account = self.require(credentials).await?;

        let _guard = self.write_lock.lock().await;
        if !self.repo.delete(account.user_id()).await? {
            tracing::debug!("account already closed");
            return Err(DirectoryError::Authentication);
        }
        tracing::info!("account closed");
        Ok(())
    }

    async fn require(&self, credentials: &Credentials) -> Result<Account, DirectoryError> {
        self.authenticate(credentials)
            .await?
            .ok_or(DirectoryError::Authentication)
    }

    async fn find(&self, requested_id: &str) -> Result<Account, DirectoryError> {
        let not_found = || NotFoundError {
            user_id: requested_id.to_string(),
        };
        let user_id = UserId::parse(requested_id).map_err(|_| not_found())?;
        self.repo
            .get(&user_id)
            .await?
            .ok_or_else(|| not_found().into())
    }
}

fn ensure_owner(actor: &Account, target: &Account) -> Result<(), ForbiddenError> {
    if actor.user_id() == target.user_id() {
        return Ok(());
    }
    Err(ForbiddenError {
        actor: actor.user_id().to_string(),
        target: target.user_id().to_string(),
    })
}
