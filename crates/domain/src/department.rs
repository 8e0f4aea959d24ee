//! Department: an organisational unit employees belong to.

use serde::{Deserialize, Serialize};

use crate::error::{StaffHubError, ValidationError};
use crate::id::DepartmentId;

/// An organisational unit. Referenced, never owned, by employees.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Department {
    pub id: DepartmentId,
    pub name: String,
}

impl Department {
    /// Create a builder for constructing a [`Department`].
    #[must_use]
    pub fn builder() -> DepartmentBuilder {
        DepartmentBuilder::default()
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`StaffHubError::Validation`] when `name` is empty.
    pub fn validate(&self) -> Result<(), StaffHubError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::EmptyName.into());
        }
        Ok(())
    }
}

/// Step-by-step builder for [`Department`].
#[derive(Debug, Default)]
pub struct DepartmentBuilder {
    id: Option<DepartmentId>,
    name: Option<String>,
}

impl DepartmentBuilder {
    #[must_use]
    pub fn id(mut self, id: DepartmentId) -> Self {
        self.id = Some(id);
        self
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Consume the builder, validate, and return a [`Department`].
    ///
    /// # Errors
    ///
    /// Returns [`StaffHubError::Validation`] if `name` is missing or empty.
    pub fn build(self) -> Result<Department, StaffHubError> {
        let department = Department {
            id: self.id.unwrap_or_default(),
            name: self.name.unwrap_or_default(),
        };
        department.validate()?;
        Ok(department)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_build_valid_department_when_name_provided() {
        let department = Department::builder().name("Engineering").build().unwrap();
        assert_eq!(department.name, "Engineering");
    }

    #[test]
    fn should_keep_given_id() {
        let id = DepartmentId::new();
        let department = Department::builder().id(id).name("Sales").build().unwrap();
        assert_eq!(department.id, id);
    }

    #[test]
    fn should_return_validation_error_when_name_is_blank() {
        let result = Department::builder().name("   ").build();
        assert!(matches!(
            result,
            Err(StaffHubError::Validation(ValidationError::EmptyName))
        ));
    }
}
