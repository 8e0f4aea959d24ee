//! Storage-specific error type wrapping sqlx errors.

use staffhub_domain::error::StaffHubError;

/// Errors originating from the `SQLite` storage layer.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// A query or connection failed.
    #[error("database error")]
    Database(#[from] sqlx::Error),

    /// Failed to run migrations.
    #[error("migration error")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// A write was attempted through a read-only transaction.
    #[error("write attempted in a read-only transaction")]
    ReadOnly,
}

impl StorageError {
    /// Whether the database rejected a write because of a `UNIQUE` constraint.
    pub(crate) fn is_unique_violation(&self) -> bool {
        matches!(self, Self::Database(sqlx::Error::Database(err)) if err.is_unique_violation())
    }
}

impl From<StorageError> for StaffHubError {
    fn from(err: StorageError) -> Self {
        Self::Storage(Box::new(err))
    }
}
