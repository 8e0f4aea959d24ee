//! Department service: use-cases for managing departments.

use staffhub_domain::department::Department;
use staffhub_domain::error::{ConflictError, NotFoundError, StaffHubError};
use staffhub_domain::id::DepartmentId;

use crate::ports::{DepartmentStore, StoreTransaction, TransactionManager, TxMode};

/// Application service for department operations.
pub struct DepartmentService<T> {
    store: T,
}

impl<T: TransactionManager> DepartmentService<T> {
    /// Create a new service backed by the given transaction manager.
    pub fn new(store: T) -> Self {
        Self { store }
    }

    /// Create a new department after validating domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`StaffHubError::Validation`] if invariants fail,
    /// [`ConflictError::DuplicateId`] if the id is already taken, or a
    /// storage error propagated from the store.
    #[tracing::instrument(skip(self, department), fields(department_name = %department.name))]
    pub async fn create_department(
        &self,
        department: Department,
    ) -> Result<Department, StaffHubError> {
        department.validate()?;
        let mut tx = self.store.begin(TxMode::ReadWrite).await?;
        if tx.find_department(department.id).await?.is_some() {
            return Err(ConflictError::DuplicateId.into());
        }
        let saved = tx.save_department(department).await?;
        tx.commit().await?;
        Ok(saved)
    }

    /// Look up a department by id, returning an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`StaffHubError::NotFound`] when no department with `id`
    /// exists, or a storage error from the store.
    pub async fn get_department(&self, id: DepartmentId) -> Result<Department, StaffHubError> {
        let mut tx = self.store.begin(TxMode::ReadOnly).await?;
        tx.find_department(id).await?.ok_or_else(|| {
            NotFoundError {
                entity: "Department",
                id: id.to_string(),
            }
            .into()
        })
    }

    /// List all departments.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the store.
    pub async fn list_departments(&self) -> Result<Vec<Department>, StaffHubError> {
        let mut tx = self.store.begin(TxMode::ReadOnly).await?;
        tx.list_departments().await
    }
}
