//! Transaction port: all-or-nothing units of work over the stores.

use std::future::Future;

use staffhub_domain::error::StaffHubError;

use super::storage::{DepartmentStore, EmployeeStore, EquipmentStore};

/// Access mode requested when opening a transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TxMode {
    /// Reads only; any save or delete fails.
    ReadOnly,
    ReadWrite,
}

/// A unit of work spanning every store.
///
/// Dropping a transaction without calling [`commit`](Self::commit) discards
/// every write made through it.
pub trait StoreTransaction:
    DepartmentStore + EquipmentStore + EmployeeStore + Send + Sized
{
    /// Make every write of this transaction durable and visible.
    fn commit(self) -> impl Future<Output = Result<(), StaffHubError>> + Send;
}

/// Opens transactions against the underlying datastore.
pub trait TransactionManager {
    type Transaction: StoreTransaction;

    /// Start a new transaction in the given mode.
    fn begin(
        &self,
        mode: TxMode,
    ) -> impl Future<Output = Result<Self::Transaction, StaffHubError>> + Send;
}
