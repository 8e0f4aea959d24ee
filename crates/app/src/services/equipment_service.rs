//! Equipment service: registering and looking up equipment.
//!
//! Equipment is always registered unassigned; handing it to an employee
//! goes through the [`EmployeeDirectory`](super::employee_directory::EmployeeDirectory).

use staffhub_domain::equipment::Equipment;
use staffhub_domain::error::{ConflictError, NotFoundError, StaffHubError};
use staffhub_domain::id::EquipmentId;

use crate::ports::{EquipmentStore, StoreTransaction, TransactionManager, TxMode};

/// Application service for equipment operations.
pub struct EquipmentService<T> {
    store: T,
}

impl<T: TransactionManager> EquipmentService<T> {
    /// Create a new service backed by the given transaction manager.
    pub fn new(store: T) -> Self {
        Self { store }
    }

    /// Register new, unassigned equipment.
    ///
    /// # Errors
    ///
    /// Returns [`StaffHubError::Validation`] if invariants fail,
    /// [`ConflictError::DuplicateId`] if the id is already registered,
    /// [`ConflictError::DuplicateSerialNumber`] if the serial number is
    /// taken, or a storage error propagated from the store.
    #[tracing::instrument(skip(self, equipment), fields(serial_number = %equipment.serial_number))]
    pub async fn register_equipment(
        &self,
        mut equipment: Equipment,
    ) -> Result<Equipment, StaffHubError> {
        equipment.validate()?;
        equipment.employee_id = None;

        let mut tx = self.store.begin(TxMode::ReadWrite).await?;
        if tx.find_equipment(equipment.id).await?.is_some() {
            return Err(ConflictError::DuplicateId.into());
        }
        if tx
            .find_equipment_by_serial(&equipment.serial_number)
            .await?
            .is_some()
        {
            return Err(ConflictError::DuplicateSerialNumber.into());
        }
        let saved = tx.save_equipment(equipment).await?;
        tx.commit().await?;
        Ok(saved)
    }

    /// Look up equipment by id.
    ///
    /// # Errors
    ///
    /// Returns [`StaffHubError::NotFound`] when no equipment with `id`
    /// exists, or a storage error from the store.
    pub async fn get_equipment(&self, id: EquipmentId) -> Result<Equipment, StaffHubError> {
        let mut tx = self.store.begin(TxMode::ReadOnly).await?;
        tx.find_equipment(id).await?.ok_or_else(|| {
            NotFoundError {
                entity: "Equipment",
                id: id.to_string(),
            }
            .into()
        })
    }

    /// Look up equipment by serial number.
    ///
    /// # Errors
    ///
    /// Returns [`StaffHubError::NotFound`] when the serial number is
    /// unknown, or a storage error from the store.
    pub async fn get_by_serial(&self, serial_number: &str) -> Result<Equipment, StaffHubError> {
        let mut tx = self.store.begin(TxMode::ReadOnly).await?;
        tx.find_equipment_by_serial(serial_number)
            .await?
            .ok_or_else(|| {
                NotFoundError {
                    entity: "Equipment",
                    id: serial_number.to_string(),
                }
                .into()
            })
    }

    /// List all equipment.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the store.
    pub async fn list_equipment(&self) -> Result<Vec<Equipment>, StaffHubError> {
        let mut tx = self.store.begin(TxMode::ReadOnly).await?;
        tx.list_equipment().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::InMemoryStore;
    use staffhub_domain::id::EmployeeId;

    fn laptop(serial: &str) -> Equipment {
        Equipment::builder()
            .serial_number(serial)
            .kind("laptop")
            .build()
            .unwrap()
    }

    #[tokio::test]
    async fn should_register_and_find_by_serial() {
        let svc = EquipmentService::new(InMemoryStore::default());
        let eq = laptop("EQ-42");

        svc.register_equipment(eq.clone()).await.unwrap();

        assert_eq!(svc.get_by_serial("EQ-42").await.unwrap(), eq);
        assert_eq!(svc.get_equipment(eq.id).await.unwrap(), eq);
    }

    #[tokio::test]
    async fn should_register_equipment_unassigned() {
        let store = InMemoryStore::default();
        let svc = EquipmentService::new(store.clone());
        let mut eq = laptop("EQ-1");
        eq.employee_id = Some(EmployeeId::new());

        let saved = svc.register_equipment(eq).await.unwrap();

        assert!(saved.is_available());
        assert!(store.committed().equipment[&saved.id].is_available());
    }

    #[tokio::test]
    async fn should_reject_duplicate_serial_number() {
        let svc = EquipmentService::new(InMemoryStore::default());
        svc.register_equipment(laptop("EQ-42")).await.unwrap();

        let result = svc.register_equipment(laptop("EQ-42")).await;

        assert!(matches!(
            result,
            Err(StaffHubError::Conflict(ConflictError::DuplicateSerialNumber))
        ));
        assert_eq!(svc.list_equipment().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn should_not_overwrite_equipment_registered_under_same_id() {
        let store = InMemoryStore::default();
        let svc = EquipmentService::new(store.clone());
        let holder = EmployeeId::new();
        let mut held = laptop("EQ-1");
        held.employee_id = Some(holder);
        store.seed(|state| {
            state.equipment.insert(held.id, held.clone());
        });

        let impostor = Equipment::builder()
            .id(held.id)
            .serial_number("EQ-NEW")
            .kind("laptop")
            .build()
            .unwrap();
        let result = svc.register_equipment(impostor).await;

        assert!(matches!(
            result,
            Err(StaffHubError::Conflict(ConflictError::DuplicateId))
        ));
        let stored = &store.committed().equipment[&held.id];
        assert_eq!(stored.serial_number, "EQ-1");
        assert_eq!(stored.employee_id, Some(holder));
    }

    #[tokio::test]
    async fn should_return_not_found_for_unknown_serial() {
        let svc = EquipmentService::new(InMemoryStore::default());
        let result = svc.get_by_serial("nope").await;
        assert!(matches!(result, Err(StaffHubError::NotFound(_))));
    }
}
