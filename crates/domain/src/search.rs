//! Search criteria for filtering employees.

use serde::{Deserialize, Serialize};

use crate::employee::{Employee, EmploymentType};
use crate::error::{StaffHubError, ValidationError};
use crate::id::DepartmentId;

/// Filter over department, employment type and salary.
///
/// Every field is optional; absent fields match everything. Salary bounds
/// are inclusive.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchCriteria {
    pub department_id: Option<DepartmentId>,
    pub employment_type: Option<EmploymentType>,
    pub min_salary: Option<i64>,
    pub max_salary: Option<i64>,
}

impl SearchCriteria {
    /// Check that the salary range is not inverted.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidSalaryRange`] when `min_salary`
    /// is greater than `max_salary`.
    pub fn validate(&self) -> Result<(), StaffHubError> {
        if let (Some(min), Some(max)) = (self.min_salary, self.max_salary)
            && min > max
        {
            return Err(ValidationError::InvalidSalaryRange.into());
        }
        Ok(())
    }

    /// Evaluate the criteria against a single employee.
    ///
    /// Storage adapters that can push the filter down to a query language
    /// should do so; this is the reference semantics.
    #[must_use]
    pub fn matches(&self, employee: &Employee) -> bool {
        self.department_id
            .is_none_or(|id| employee.department_id == id)
            && self
                .employment_type
                .is_none_or(|kind| employee.employment_type == kind)
            && self.min_salary.is_none_or(|min| employee.salary >= min)
            && self.max_salary.is_none_or(|max| employee.salary <= max)
    }
}
