//! Employee: a person on the payroll, attached to one department and
//! holding at most one piece of equipment.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{StaffHubError, ValidationError};
use crate::id::{DepartmentId, EmployeeId, EquipmentId};
use crate::time::Timestamp;

/// Contract under which an employee is engaged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmploymentType {
    FullTime,
    PartTime,
    Contract,
    Intern,
}

impl EmploymentType {
    /// Stable lowercase name, identical to the serde representation.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::FullTime => "full_time",
            Self::PartTime => "part_time",
            Self::Contract => "contract",
            Self::Intern => "intern",
        }
    }
}

impl fmt::Display for EmploymentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EmploymentType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "full_time" => Ok(Self::FullTime),
            "part_time" => Ok(Self::PartTime),
            "contract" => Ok(Self::Contract),
            "intern" => Ok(Self::Intern),
            _ => Err(ValidationError::UnknownEmploymentType),
        }
    }
}

/// An employee record.
///
/// `equipment_id` mirrors [`Equipment::employee_id`](crate::equipment::Equipment::employee_id);
/// both sides are kept in sync by [`crate::assignment`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    pub id: EmployeeId,
    pub name: String,
    pub salary: i64,
    pub employment_type: EmploymentType,
    pub department_id: DepartmentId,
    pub equipment_id: Option<EquipmentId>,
    /// Set once the employee has gone through retirement.
    pub retired_at: Option<Timestamp>,
}

impl Employee {
    /// Whether the employee has been retired. Retirement is terminal.
    #[must_use]
    pub fn is_retired(&self) -> bool {
        self.retired_at.is_some()
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`StaffHubError::Validation`] when:
    /// - `name` is empty ([`ValidationError::EmptyName`])
    /// - `salary` is negative ([`ValidationError::NegativeSalary`])
    pub fn validate(&self) -> Result<(), StaffHubError> {
        validate_name_and_salary(&self.name, self.salary)
    }
}

/// Input for hiring a new employee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewEmployee {
    pub name: String,
    pub salary: i64,
    pub employment_type: EmploymentType,
    pub department_id: DepartmentId,
    /// Serial number of already registered, unassigned equipment.
    pub serial_number: Option<String>,
}

impl NewEmployee {
    /// Check the input before any lookup happens.
    ///
    /// # Errors
    ///
    /// Returns [`StaffHubError::Validation`] on an empty name, a negative
    /// salary, or a blank serial number.
    pub fn validate(&self) -> Result<(), StaffHubError> {
        validate_name_and_salary(&self.name, self.salary)?;
        if self
            .serial_number
            .as_deref()
            .is_some_and(|serial| serial.trim().is_empty())
        {
            return Err(ValidationError::EmptySerialNumber.into());
        }
        Ok(())
    }
}

/// Input for updating an existing employee.
///
/// Only the salary is applied. `department_id` is accepted so callers can
/// send back what they read, but moving an employee to another department
/// is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeUpdate {
    pub employee_id: EmployeeId,
    pub salary: i64,
    pub department_id: Option<DepartmentId>,
}

fn validate_name_and_salary(name: &str, salary: i64) -> Result<(), StaffHubError> {
    if name.trim().is_empty() {
        return Err(ValidationError::EmptyName.into());
    }
    if salary < 0 {
        return Err(ValidationError::NegativeSalary.into());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_employee() -> NewEmployee {
        NewEmployee {
            name: "Alice".to_string(),
            salary: 50_000,
            employment_type: EmploymentType::FullTime,
            department_id: DepartmentId::new(),
            serial_number: Some("EQ-42".to_string()),
        }
    }

    #[test]
    fn should_accept_valid_new_employee() {
        assert!(new_employee().validate().is_ok());
    }

    #[test]
    fn should_reject_negative_salary() {
        let mut input = new_employee();
        input.salary = -1;
        assert!(matches!(
            input.validate(),
            Err(StaffHubError::Validation(ValidationError::NegativeSalary))
        ));
    }

    #[test]
    fn should_reject_blank_serial_number() {
        let mut input = new_employee();
        input.serial_number = Some(String::new());
        assert!(matches!(
            input.validate(),
            Err(StaffHubError::Validation(ValidationError::EmptySerialNumber))
        ));
    }

    #[test]
    fn should_accept_new_employee_without_equipment() {
        let mut input = new_employee();
        input.serial_number = None;
        assert!(input.validate().is_ok());
    }

    #[test]
    fn should_parse_every_employment_type_from_its_name() {
        for kind in [
            EmploymentType::FullTime,
            EmploymentType::PartTime,
            EmploymentType::Contract,
            EmploymentType::Intern,
        ] {
            assert_eq!(kind.as_str().parse::<EmploymentType>().unwrap(), kind);
        }
        assert!("permanent".parse::<EmploymentType>().is_err());
    }

    #[test]
    fn should_serialize_employment_type_in_snake_case() {
        let json = serde_json::to_string(&EmploymentType::PartTime).unwrap();
        assert_eq!(json, "\"part_time\"");
    }
}
