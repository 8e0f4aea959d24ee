//! Assignment rules for the employee ↔ equipment association.
//!
//! Both sides of the link are stored independently: an employee records
//! the equipment it holds and the equipment records its holder. Every rule
//! here mutates both records together; callers must persist every record
//! they passed in as `&mut`.

use crate::department::Department;
use crate::employee::{Employee, NewEmployee};
use crate::equipment::Equipment;
use crate::error::{ConflictError, StaffHubError};
use crate::id::EmployeeId;
use crate::time::Timestamp;

/// Build a new employee in `department`, optionally handing over `equipment`.
///
/// # Errors
///
/// Returns [`StaffHubError::Validation`] if `input` is invalid, or
/// [`ConflictError::EquipmentAlreadyAssigned`] if `equipment` already has
/// a holder.
pub fn hire(
    input: NewEmployee,
    department: &Department,
    equipment: Option<&mut Equipment>,
) -> Result<Employee, StaffHubError> {
    input.validate()?;
    if equipment.as_deref().is_some_and(|eq| !eq.is_available()) {
        return Err(ConflictError::EquipmentAlreadyAssigned.into());
    }

    let mut employee = Employee {
        id: EmployeeId::new(),
        name: input.name,
        salary: input.salary,
        employment_type: input.employment_type,
        department_id: department.id,
        equipment_id: None,
        retired_at: None,
    };
    if let Some(equipment) = equipment {
        link(&mut employee, equipment);
    }
    Ok(employee)
}

/// Hand `next` to `employee`, clearing the back-reference of `previous`.
///
/// `previous` is the equipment the employee held before the call, if any.
/// Reassigning the equipment the employee already holds leaves both
/// records unchanged.
///
/// # Errors
///
/// Returns [`ConflictError::EmployeeRetired`] for a retired employee and
/// [`ConflictError::EquipmentAlreadyAssigned`] if `next` is held by
/// someone else.
pub fn reassign_equipment(
    employee: &mut Employee,
    next: &mut Equipment,
    previous: Option<&mut Equipment>,
) -> Result<(), StaffHubError> {
    if employee.is_retired() {
        return Err(ConflictError::EmployeeRetired.into());
    }
    if next.employee_id.is_some_and(|holder| holder != employee.id) {
        return Err(ConflictError::EquipmentAlreadyAssigned.into());
    }

    if let Some(previous) = previous
        && previous.id != next.id
    {
        release(employee, previous);
    }
    link(employee, next);
    Ok(())
}

/// Retire `employee` at `at`, releasing the equipment it holds.
///
/// # Errors
///
/// Returns [`ConflictError::EmployeeAlreadyRetired`] if the employee is
/// already retired.
pub fn retire(
    employee: &mut Employee,
    equipment: Option<&mut Equipment>,
    at: Timestamp,
) -> Result<(), StaffHubError> {
    if employee.is_retired() {
        return Err(ConflictError::EmployeeAlreadyRetired.into());
    }
    if let Some(equipment) = equipment {
        release(employee, equipment);
    }
    employee.retired_at = Some(at);
    Ok(())
}

/// Break the link between `employee` and `equipment` on both sides.
///
/// Each side is only cleared if it points at the other one.
pub fn release(employee: &mut Employee, equipment: &mut Equipment) {
    if employee.equipment_id == Some(equipment.id) {
        employee.equipment_id = None;
    }
    if equipment.employee_id == Some(employee.id) {
        equipment.employee_id = None;
    }
}

fn link(employee: &mut Employee, equipment: &mut Equipment) {
    employee.equipment_id = Some(equipment.id);
    equipment.employee_id = Some(employee.id);
}
