//! # staffhub-domain
//!
//! Pure domain model for the staffhub employee directory.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, error conventions, timestamps
//! - Define **Departments** (organisational units employees belong to)
//! - Define **Equipment** (assets held by at most one employee at a time)
//! - Define **Employees** (salary, employment type, retirement state)
//! - Define **Search criteria** used to filter employees
//! - Contain the **assignment rules** that keep the employee ↔ equipment
//!   link consistent on both sides
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;
pub mod time;

pub mod assignment;
pub mod department;
pub mod employee;
pub mod equipment;
pub mod search;
