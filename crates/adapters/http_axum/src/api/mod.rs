//! JSON REST API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod departments;
#[allow(clippy::missing_errors_doc)]
pub mod employees;
#[allow(clippy::missing_errors_doc)]
pub mod equipment;

use std::str::FromStr;

use axum::Router;
use axum::routing::{get, post, put};

use staffhub_app::ports::TransactionManager;
use staffhub_domain::error::ValidationError;

use crate::error::ApiError;
use crate::state::AppState;

/// Build the `/api` sub-router.
pub fn routes<T>() -> Router<AppState<T>>
where
    T: TransactionManager + Send + Sync + 'static,
{
    Router::new()
        // Employees
        .route(
            "/employees",
            get(employees::list::<T>).post(employees::create::<T>),
        )
        .route("/employees/search", get(employees::search::<T>))
        .route(
            "/employees/{id}",
            get(employees::get::<T>)
                .put(employees::update::<T>)
                .delete(employees::delete::<T>),
        )
        .route(
            "/employees/{id}/equipment",
            put(employees::change_equipment::<T>),
        )
        .route("/employees/{id}/retire", post(employees::retire::<T>))
        // Departments
        .route(
            "/departments",
            get(departments::list::<T>).post(departments::create::<T>),
        )
        .route("/departments/{id}", get(departments::get::<T>))
        // Equipment
        .route(
            "/equipment",
            get(equipment::list::<T>).post(equipment::register::<T>),
        )
        .route("/equipment/{id}", get(equipment::get::<T>))
        .route(
            "/equipment/serial/{serial}",
            get(equipment::get_by_serial::<T>),
        )
}

/// Parse a typed identifier from a path segment or request field.
pub(crate) fn parse_id<I: FromStr>(raw: &str) -> Result<I, ApiError> {
    I::from_str(raw).map_err(|_| ApiError::from(ValidationError::InvalidId))
}
