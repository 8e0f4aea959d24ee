//! Transaction manager backed by a `SQLite` pool.
//!
//! A [`SqliteTransaction`] wraps one sqlx transaction and implements every
//! store port, so all reads and writes of a directory operation share a
//! single connection and commit or roll back together. Dropping it without
//! committing rolls back.

use std::future::Future;

use sqlx::{Sqlite, SqlitePool, Transaction};

use staffhub_app::ports::{StoreTransaction, TransactionManager, TxMode};
use staffhub_domain::error::StaffHubError;

use crate::error::StorageError;

/// `SQLite`-backed transaction manager.
#[derive(Clone)]
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    /// Create a new store using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

/// An open `SQLite` transaction.
pub struct SqliteTransaction {
    pub(crate) tx: Transaction<'static, Sqlite>,
    mode: TxMode,
}

impl SqliteTransaction {
    /// Fail unless the transaction was opened for writing.
    pub(crate) fn ensure_writable(&self) -> Result<(), StorageError> {
        match self.mode {
            TxMode::ReadWrite => Ok(()),
            TxMode::ReadOnly => Err(StorageError::ReadOnly),
        }
    }
}

impl TransactionManager for SqliteStore {
    type Transaction = SqliteTransaction;

    fn begin(
        &self,
        mode: TxMode,
    ) -> impl Future<Output = Result<SqliteTransaction, StaffHubError>> + Send {
        let pool = self.pool.clone();
        async move {
            // Writers take the write lock up front so a second writer waits
            // for the first to commit instead of failing on lock upgrade.
            let tx = match mode {
                TxMode::ReadOnly => pool.begin().await,
                TxMode::ReadWrite => pool.begin_with("BEGIN IMMEDIATE").await,
            }
            .map_err(StorageError::from)?;
            Ok(SqliteTransaction { tx, mode })
        }
    }
}

impl StoreTransaction for SqliteTransaction {
    fn commit(self) -> impl Future<Output = Result<(), StaffHubError>> + Send {
        async move {
            self.tx.commit().await.map_err(StorageError::from)?;
            Ok(())
        }
    }
}
