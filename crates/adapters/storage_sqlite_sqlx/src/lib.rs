//! # staffhub-adapter-storage-sqlite-sqlx
//!
//! `SQLite` persistence adapter using [sqlx](https://docs.rs/sqlx).
//!
//! ## Responsibilities
//! - Implement the store and transaction port traits defined in
//!   `staffhub-app::ports`
//! - Manage `SQLite` connection pool lifecycle
//! - Run database migrations (using sqlx embedded migrations)
//! - Map between domain types and database rows
//!
//! ## Dependency rule
//! Depends on `staffhub-app` (for port traits) and `staffhub-domain` (for domain types).
//! The `app` and `domain` crates must never reference this adapter.

mod department_repo;
mod employee_repo;
mod equipment_repo;
pub mod error;
pub mod pool;
pub mod store;

pub use pool::{Config, Database};
pub use store::{SqliteStore, SqliteTransaction};
