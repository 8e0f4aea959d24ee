//! Equipment: an asset held by at most one employee at a time.
//!
//! Equipment is registered on its own and starts unassigned. The
//! `employee_id` back-reference is only ever changed by the rules in
//! [`crate::assignment`].

use serde::{Deserialize, Serialize};

use crate::error::{StaffHubError, ValidationError};
use crate::id::{EmployeeId, EquipmentId};

/// A piece of equipment identified by a unique serial number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Equipment {
    pub id: EquipmentId,
    pub serial_number: String,
    /// What the equipment is (`laptop`, `phone`, …).
    pub kind: String,
    pub model: Option<String>,
    /// Employee currently holding this equipment.
    pub employee_id: Option<EmployeeId>,
}

impl Equipment {
    /// Create a builder for constructing an [`Equipment`].
    #[must_use]
    pub fn builder() -> EquipmentBuilder {
        EquipmentBuilder::default()
    }

    /// Whether no employee currently holds this equipment.
    #[must_use]
    pub fn is_available(&self) -> bool {
        self.employee_id.is_none()
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`StaffHubError::Validation`] when:
    /// - `serial_number` is empty ([`ValidationError::EmptySerialNumber`])
    /// - `kind` is empty ([`ValidationError::EmptyEquipmentKind`])
    pub fn validate(&self) -> Result<(), StaffHubError> {
        if self.serial_number.trim().is_empty() {
            return Err(ValidationError::EmptySerialNumber.into());
        }
        if self.kind.trim().is_empty() {
            return Err(ValidationError::EmptyEquipmentKind.into());
        }
        Ok(())
    }
}

/// Step-by-step builder for [`Equipment`].
///
/// There is no setter for the back-reference: built equipment is
/// always unassigned.
#[derive(Debug, Default)]
pub struct EquipmentBuilder {
    id: Option<EquipmentId>,
    serial_number: Option<String>,
    kind: Option<String>,
    model: Option<String>,
}

impl EquipmentBuilder {
    #[must_use]
    pub fn id(mut self, id: EquipmentId) -> Self {
        self.id = Some(id);
        self
    }

    #[must_use]
    pub fn serial_number(mut self, serial_number: impl Into<String>) -> Self {
        self.serial_number = Some(serial_number.into());
        self
    }

    #[must_use]
    pub fn kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = Some(kind.into());
        self
    }

    #[must_use]
    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Consume the builder, validate, and return an [`Equipment`].
    ///
    /// # Errors
    ///
    /// Returns [`StaffHubError::Validation`] if the serial number or kind
    /// is missing or empty.
    pub fn build(self) -> Result<Equipment, StaffHubError> {
        let equipment = Equipment {
            id: self.id.unwrap_or_default(),
            serial_number: self.serial_number.unwrap_or_default(),
            kind: self.kind.unwrap_or_default(),
            model: self.model,
            employee_id: None,
        };
        equipment.validate()?;
        Ok(equipment)
    }
}
