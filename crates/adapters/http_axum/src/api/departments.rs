//! JSON REST handlers for departments.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use staffhub_app::ports::TransactionManager;
use staffhub_domain::department::Department;
use staffhub_domain::id::DepartmentId;

use super::parse_id;
use crate::error::ApiError;
use crate::state::AppState;

/// Request body for creating a department.
#[derive(Deserialize)]
pub struct CreateDepartmentRequest {
    pub name: String,
}

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<Department>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the get endpoint.
pub enum GetResponse {
    Ok(Json<Department>),
}

impl IntoResponse for GetResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the create endpoint.
pub enum CreateResponse {
    Created(Json<Department>),
}

impl IntoResponse for CreateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Created(json) => (StatusCode::CREATED, json).into_response(),
        }
    }
}

/// `GET /api/departments`
pub async fn list<T>(State(state): State<AppState<T>>) -> Result<ListResponse, ApiError>
where
    T: TransactionManager + Send + Sync + 'static,
{
    let departments = state.department_service.list_departments().await?;
    Ok(ListResponse::Ok(Json(departments)))
}

/// `GET /api/departments/:id`
pub async fn get<T>(
    State(state): State<AppState<T>>,
    Path(id): Path<String>,
) -> Result<GetResponse, ApiError>
where
    T: TransactionManager + Send + Sync + 'static,
{
    let department_id: DepartmentId = parse_id(&id)?;
    let department = state.department_service.get_department(department_id).await?;
    Ok(GetResponse::Ok(Json(department)))
}

/// `POST /api/departments`
pub async fn create<T>(
    State(state): State<AppState<T>>,
    Json(req): Json<CreateDepartmentRequest>,
) -> Result<CreateResponse, ApiError>
where
    T: TransactionManager + Send + Sync + 'static,
{
    let department = Department::builder().name(req.name).build()?;
    let created = state.department_service.create_department(department).await?;
    Ok(CreateResponse::Created(Json(created)))
}
