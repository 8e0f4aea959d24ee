//! Storage ports: one store per record type.
//!
//! Stores are implemented by a transaction handle, which is why every
//! method takes `&mut self`: all reads and writes issued through one handle
//! belong to the same unit of work. Lookups return `Ok(None)` for a missing
//! key; turning that into a not-found error is the caller's decision.

use std::future::Future;

use staffhub_domain::department::Department;
use staffhub_domain::employee::Employee;
use staffhub_domain::equipment::Equipment;
use staffhub_domain::error::StaffHubError;
use staffhub_domain::id::{DepartmentId, EmployeeId, EquipmentId};
use staffhub_domain::search::SearchCriteria;

/// Lookup and persistence of [`Department`]s.
pub trait DepartmentStore {
    /// Get a department by its unique identifier.
    fn find_department(
        &mut self,
        id: DepartmentId,
    ) -> impl Future<Output = Result<Option<Department>, StaffHubError>> + Send;

    /// Get all departments ordered by name.
    fn list_departments(
        &mut self,
    ) -> impl Future<Output = Result<Vec<Department>, StaffHubError>> + Send;

    /// Insert or replace a department.
    fn save_department(
        &mut self,
        department: Department,
    ) -> impl Future<Output = Result<Department, StaffHubError>> + Send;
}

/// Lookup and persistence of [`Equipment`].
pub trait EquipmentStore {
    /// Get equipment by its unique identifier.
    fn find_equipment(
        &mut self,
        id: EquipmentId,
    ) -> impl Future<Output = Result<Option<Equipment>, StaffHubError>> + Send;

    /// Get equipment by its serial number.
    fn find_equipment_by_serial(
        &mut self,
        serial_number: &str,
    ) -> impl Future<Output = Result<Option<Equipment>, StaffHubError>> + Send;

    /// Get all equipment ordered by serial number.
    fn list_equipment(&mut self)
    -> impl Future<Output = Result<Vec<Equipment>, StaffHubError>> + Send;

    /// Insert or replace equipment, including its back-reference.
    fn save_equipment(
        &mut self,
        equipment: Equipment,
    ) -> impl Future<Output = Result<Equipment, StaffHubError>> + Send;
}

/// Lookup, search and persistence of [`Employee`]s.
pub trait EmployeeStore {
    /// Get all employees ordered by name, then id.
    fn find_all_employees(
        &mut self,
    ) -> impl Future<Output = Result<Vec<Employee>, StaffHubError>> + Send;

    /// Get an employee by its unique identifier.
    fn find_employee(
        &mut self,
        id: EmployeeId,
    ) -> impl Future<Output = Result<Option<Employee>, StaffHubError>> + Send;

    /// Get the employees matching `criteria`, in the same order as
    /// [`find_all_employees`](Self::find_all_employees).
    fn search_employees(
        &mut self,
        criteria: SearchCriteria,
    ) -> impl Future<Output = Result<Vec<Employee>, StaffHubError>> + Send;

    /// Insert or replace an employee.
    fn save_employee(
        &mut self,
        employee: Employee,
    ) -> impl Future<Output = Result<Employee, StaffHubError>> + Send;

    /// Delete an employee by id. Deleting a missing id is not an error.
    fn delete_employee(
        &mut self,
        id: EmployeeId,
    ) -> impl Future<Output = Result<(), StaffHubError>> + Send;
}
