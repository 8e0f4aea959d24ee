//! Application services: use-case implementations.
//!
//! Each service struct accepts a [`TransactionManager`](crate::ports::TransactionManager)
//! via a generic parameter (constructor injection), keeping this layer
//! decoupled from concrete adapters.

pub mod department_service;
pub mod employee_directory;
pub mod equipment_service;
