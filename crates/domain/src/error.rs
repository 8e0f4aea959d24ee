//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`StaffHubError`] via `#[from]`.

/// Top-level error returned by services and ports.
#[derive(Debug, thiserror::Error)]
pub enum StaffHubError {
    #[error("validation error")]
    Validation(#[from] ValidationError),

    #[error("record not found")]
    NotFound(#[from] NotFoundError),

    #[error("conflicting state")]
    Conflict(#[from] ConflictError),

    /// Opaque failure coming from a storage adapter.
    #[error("storage error")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Input rejected before touching storage.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("name must not be empty")]
    EmptyName,

    #[error("serial number must not be empty")]
    EmptySerialNumber,

    #[error("equipment kind must not be empty")]
    EmptyEquipmentKind,

    #[error("salary must not be negative")]
    NegativeSalary,

    #[error("minimum salary is greater than maximum salary")]
    InvalidSalaryRange,

    #[error("changing the department of an employee is not supported")]
    DepartmentChangeUnsupported,

    #[error("unknown employment type")]
    UnknownEmploymentType,

    #[error("invalid identifier")]
    InvalidId,
}

/// A lookup by key found nothing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{entity} {id} not found")]
pub struct NotFoundError {
    pub entity: &'static str,
    pub id: String,
}

/// The requested transition is not allowed by the current state.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConflictError {
    #[error("equipment is already assigned to another employee")]
    EquipmentAlreadyAssigned,

    #[error("employee is retired")]
    EmployeeRetired,

    #[error("employee is already retired")]
    EmployeeAlreadyRetired,

    #[error("serial number is already registered")]
    DuplicateSerialNumber,

    #[error("a record with this id already exists")]
    DuplicateId,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_render_not_found_with_entity_and_id() {
        let err = NotFoundError {
            entity: "Employee",
            id: "42".to_string(),
        };
        assert_eq!(err.to_string(), "Employee 42 not found");
    }

    #[test]
    fn should_convert_typed_errors_into_staffhub_error() {
        let err: StaffHubError = ConflictError::EmployeeRetired.into();
        assert!(matches!(
            err,
            StaffHubError::Conflict(ConflictError::EmployeeRetired)
        ));

        let err: StaffHubError = ValidationError::EmptyName.into();
        assert!(matches!(
            err,
            StaffHubError::Validation(ValidationError::EmptyName)
        ));
    }
}
