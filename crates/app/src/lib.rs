//! # staffhub-app
//!
//! Application layer: use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `DepartmentStore`: department lookup and persistence
//!   - `EquipmentStore`: equipment lookup by id or serial, persistence
//!   - `EmployeeStore`: employee listing, search, persistence, deletion
//!   - `TransactionManager` / `StoreTransaction`: all-or-nothing units of work
//!     spanning the three stores
//! - Define **driving/inbound ports** as use-case structs:
//!   - `EmployeeDirectory`: the association rules between employees,
//!     departments and equipment
//!   - `DepartmentService`, `EquipmentService`: reference data
//! - Orchestrate domain objects without knowing *how* persistence works
//!
//! ## Dependency rule
//! Depends on `staffhub-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;

#[cfg(test)]
mod testing;
