//! Employee directory: the association rules between employees,
//! departments and equipment.
//!
//! Every operation opens exactly one transaction. Mutating operations save
//! each record they touched, employee first, then equipment, and commit at
//! the end; an early return drops the transaction and rolls back every
//! write made before it.

use staffhub_domain::assignment;
use staffhub_domain::department::Department;
use staffhub_domain::employee::{Employee, EmployeeUpdate, NewEmployee};
use staffhub_domain::equipment::Equipment;
use staffhub_domain::error::{NotFoundError, StaffHubError, ValidationError};
use staffhub_domain::id::{DepartmentId, EmployeeId, EquipmentId};
use staffhub_domain::search::SearchCriteria;
use staffhub_domain::time::now;

use crate::ports::{
    DepartmentStore, EmployeeStore, EquipmentStore, StoreTransaction, TransactionManager, TxMode,
};

/// Application service owning the employee ↔ department ↔ equipment rules.
pub struct EmployeeDirectory<T> {
    store: T,
}

impl<T: TransactionManager> EmployeeDirectory<T> {
    /// Create a new directory backed by the given transaction manager.
    pub fn new(store: T) -> Self {
        Self { store }
    }

    /// List every employee, ordered by name.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the store.
    #[tracing::instrument(skip(self))]
    pub async fn list_all(&self) -> Result<Vec<Employee>, StaffHubError> {
        let mut tx = self.store.begin(TxMode::ReadOnly).await?;
        tx.find_all_employees().await
    }

    /// Look up an employee by id.
    ///
    /// # Errors
    ///
    /// Returns [`StaffHubError::NotFound`] when no employee with `id` exists,
    /// or a storage error from the store.
    #[tracing::instrument(skip(self))]
    pub async fn get_by_id(&self, id: EmployeeId) -> Result<Employee, StaffHubError> {
        let mut tx = self.store.begin(TxMode::ReadOnly).await?;
        load_employee(&mut tx, id).await
    }

    /// Find the employees matching every filter set in `criteria`.
    ///
    /// # Errors
    ///
    /// Returns [`StaffHubError::Validation`] for an inverted salary range,
    /// or a storage error from the store.
    #[tracing::instrument(skip(self))]
    pub async fn search(&self, criteria: SearchCriteria) -> Result<Vec<Employee>, StaffHubError> {
        criteria.validate()?;
        let mut tx = self.store.begin(TxMode::ReadOnly).await?;
        tx.search_employees(criteria).await
    }

    /// Delete an employee by id, releasing the equipment it holds.
    ///
    /// Deleting an unknown id succeeds and changes nothing.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the store.
    #[tracing::instrument(skip(self))]
    pub async fn delete_by_id(&self, id: EmployeeId) -> Result<(), StaffHubError> {
        let mut tx = self.store.begin(TxMode::ReadWrite).await?;

        if let Some(mut employee) = tx.find_employee(id).await?
            && let Some(equipment_id) = employee.equipment_id
            && let Some(mut equipment) = tx.find_equipment(equipment_id).await?
        {
            assignment::release(&mut employee, &mut equipment);
            let equipment = tx.save_equipment(equipment).await?;
            tracing::info!(equipment_id = %equipment.id, "equipment released");
        }
        tx.delete_employee(id).await?;

        tx.commit().await
    }

    /// Hire a new employee into an existing department, handing over
    /// already registered, unassigned equipment when a serial number is given.
    ///
    /// The employee is saved first, then the equipment so its
    /// back-reference is stored too.
    ///
    /// # Errors
    ///
    /// Returns [`StaffHubError::Validation`] for invalid input,
    /// [`StaffHubError::NotFound`] if the department or the serial number
    /// is unknown, [`StaffHubError::Conflict`] if the equipment is already
    /// held, or a storage error from the store.
    #[tracing::instrument(skip(self, input), fields(employee_name = %input.name))]
    pub async fn create(&self, input: NewEmployee) -> Result<Employee, StaffHubError> {
        input.validate()?;
        let mut tx = self.store.begin(TxMode::ReadWrite).await?;

        let department = load_department(&mut tx, input.department_id).await?;
        let mut equipment = match input.serial_number.as_deref() {
            Some(serial_number) => Some(load_equipment_by_serial(&mut tx, serial_number).await?),
            None => None,
        };

        let employee = assignment::hire(input, &department, equipment.as_mut())?;

        let saved = tx.save_employee(employee).await?;
        tracing::info!(employee_id = %saved.id, equipment_id = ?saved.equipment_id, "employee saved");
        if let Some(equipment) = equipment {
            let equipment = tx.save_equipment(equipment).await?;
            tracing::info!(
                equipment_id = %equipment.id,
                employee_id = ?equipment.employee_id,
                "equipment saved"
            );
        }

        tx.commit().await?;
        Ok(saved)
    }

    /// Change the salary of an existing employee.
    ///
    /// Moving an employee to another department is not supported; an
    /// update carrying the current department id is accepted.
    ///
    /// # Errors
    ///
    /// Returns [`StaffHubError::NotFound`] if the employee does not exist,
    /// [`StaffHubError::Validation`] for a negative salary or a department
    /// change, or a storage error from the store.
    #[tracing::instrument(skip(self, update), fields(employee_id = %update.employee_id))]
    pub async fn update(&self, update: EmployeeUpdate) -> Result<Employee, StaffHubError> {
        let mut tx = self.store.begin(TxMode::ReadWrite).await?;

        let mut employee = load_employee(&mut tx, update.employee_id).await?;
        if update
            .department_id
            .is_some_and(|id| id != employee.department_id)
        {
            return Err(ValidationError::DepartmentChangeUnsupported.into());
        }
        employee.salary = update.salary;
        employee.validate()?;

        let saved = tx.save_employee(employee).await?;
        tx.commit().await?;
        Ok(saved)
    }

    /// Hand `equipment_id` to an active employee, freeing what it held before.
    ///
    /// The employee, the new equipment and the previous equipment are each
    /// saved, in that order.
    ///
    /// # Errors
    ///
    /// Returns [`StaffHubError::NotFound`] if the employee or the equipment
    /// does not exist, [`StaffHubError::Conflict`] if the employee is retired
    /// or the equipment is held by someone else, or a storage error.
    #[tracing::instrument(skip(self))]
    pub async fn change_equipment(
        &self,
        employee_id: EmployeeId,
        equipment_id: EquipmentId,
    ) -> Result<Employee, StaffHubError> {
        let mut tx = self.store.begin(TxMode::ReadWrite).await?;

        let mut employee = load_employee(&mut tx, employee_id).await?;
        let mut next = load_equipment(&mut tx, equipment_id).await?;
        let mut previous = match employee.equipment_id {
            Some(id) if id != next.id => Some(load_equipment(&mut tx, id).await?),
            _ => None,
        };

        assignment::reassign_equipment(&mut employee, &mut next, previous.as_mut())?;

        let saved = tx.save_employee(employee).await?;
        tracing::info!(employee_id = %saved.id, equipment_id = ?saved.equipment_id, "employee saved");
        let next = tx.save_equipment(next).await?;
        tracing::info!(
            equipment_id = %next.id,
            employee_id = ?next.employee_id,
            "equipment saved"
        );
        if let Some(previous) = previous {
            let previous = tx.save_equipment(previous).await?;
            tracing::info!(equipment_id = %previous.id, "previous equipment released");
        }

        tx.commit().await?;
        Ok(saved)
    }

    /// Retire an employee, releasing the equipment it holds.
    ///
    /// # Errors
    ///
    /// Returns [`StaffHubError::NotFound`] if the employee does not exist,
    /// [`StaffHubError::Conflict`] if it is already retired, or a storage
    /// error from the store.
    #[tracing::instrument(skip(self))]
    pub async fn retire(&self, employee_id: EmployeeId) -> Result<Employee, StaffHubError> {
        let mut tx = self.store.begin(TxMode::ReadWrite).await?;

        let mut employee = load_employee(&mut tx, employee_id).await?;
        let mut equipment = match employee.equipment_id {
            Some(id) => Some(load_equipment(&mut tx, id).await?),
            None => None,
        };

        assignment::retire(&mut employee, equipment.as_mut(), now())?;

        let saved = tx.save_employee(employee).await?;
        tracing::info!(employee_id = %saved.id, "employee retired");
        if let Some(equipment) = equipment {
            let equipment = tx.save_equipment(equipment).await?;
            tracing::info!(equipment_id = %equipment.id, "equipment released");
        }

        tx.commit().await?;
        Ok(saved)
    }
}

async fn load_employee<S: EmployeeStore>(
    store: &mut S,
    id: EmployeeId,
) -> Result<Employee, StaffHubError> {
    store.find_employee(id).await?.ok_or_else(|| {
        NotFoundError {
            entity: "Employee",
            id: id.to_string(),
        }
        .into()
    })
}

async fn load_department<S: DepartmentStore>(
    store: &mut S,
    id: DepartmentId,
) -> Result<Department, StaffHubError> {
    store.find_department(id).await?.ok_or_else(|| {
        NotFoundError {
            entity: "Department",
            id: id.to_string(),
        }
        .into()
    })
}

async fn load_equipment<S: EquipmentStore>(
    store: &mut S,
    id: EquipmentId,
) -> Result<Equipment, StaffHubError> {
    store.find_equipment(id).await?.ok_or_else(|| {
        NotFoundError {
            entity: "Equipment",
            id: id.to_string(),
        }
        .into()
    })
}

async fn load_equipment_by_serial<S: EquipmentStore>(
    store: &mut S,
    serial_number: &str,
) -> Result<Equipment, StaffHubError> {
    store
        .find_equipment_by_serial(serial_number)
        .await?
        .ok_or_else(|| {
            NotFoundError {
                entity: "Equipment",
                id: serial_number.to_string(),
            }
            .into()
        })
}
