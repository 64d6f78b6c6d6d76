//! Storage-specific error type.

use acctdir_domain::error::DirectoryError;

/// Errors originating from the in-memory storage layer.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// A writer panicked while holding the table lock.
    #[error("account table lock poisoned")]
    Poisoned,
}

impl From<StorageError> for DirectoryError {
    fn from(err: StorageError) -> Self {
        Self::Storage(Box::new(err))
    }
}
