//! Shared application state for axum handlers.

use std::sync::Arc;

use staffhub_app::ports::TransactionManager;
use staffhub_app::services::department_service::DepartmentService;
use staffhub_app::services::employee_directory::EmployeeDirectory;
use staffhub_app::services::equipment_service::EquipmentService;

/// Application state shared across all axum handlers.
///
/// Generic over the transaction manager to avoid dynamic dispatch. Every
/// service is backed by its own handle on the same datastore.
/// `Clone` is implemented manually so the manager itself does not need to be
/// `Clone`; only the `Arc` wrappers are cloned.
pub struct AppState<T> {
    /// Employee directory (the association rules).
    pub directory: Arc<EmployeeDirectory<T>>,
    /// Department CRUD service.
    pub department_service: Arc<DepartmentService<T>>,
    /// Equipment CRUD service.
    pub equipment_service: Arc<EquipmentService<T>>,
}

impl<T> Clone for AppState<T> {
    fn clone(&self) -> Self {
        Self {
            directory: Arc::clone(&self.directory),
            department_service: Arc::clone(&self.department_service),
            equipment_service: Arc::clone(&self.equipment_service),
        }
    }
}

impl<T> AppState<T>
where
    T: TransactionManager + Send + Sync + 'static,
{
    /// Create a new application state from service instances.
    pub fn new(
        directory: EmployeeDirectory<T>,
        department_service: DepartmentService<T>,
        equipment_service: EquipmentService<T>,
    ) -> Self {
        Self {
            directory: Arc::new(directory),
            department_service: Arc::new(department_service),
            equipment_service: Arc::new(equipment_service),
        }
    }

    /// Build every service on clones of one transaction manager.
    pub fn from_store(store: &T) -> Self
    where
        T: Clone,
    {
        Self::new(
            EmployeeDirectory::new(store.clone()),
            DepartmentService::new(store.clone()),
            EquipmentService::new(store.clone()),
        )
    }
}
