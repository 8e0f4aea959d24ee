//! JSON REST handlers for employees.

use std::str::FromStr;

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use staffhub_app::ports::TransactionManager;
use staffhub_domain::employee::{Employee, EmployeeUpdate, EmploymentType, NewEmployee};
use staffhub_domain::id::{DepartmentId, EmployeeId, EquipmentId};
use staffhub_domain::search::SearchCriteria;

use super::parse_id;
use crate::error::ApiError;
use crate::state::AppState;

/// Request body for hiring an employee.
#[derive(Deserialize)]
pub struct CreateEmployeeRequest {
    pub name: String,
    pub salary: i64,
    pub employment_type: String,
    pub department_id: String,
    pub serial_number: Option<String>,
}

/// Request body for updating an employee.
#[derive(Deserialize)]
pub struct UpdateEmployeeRequest {
    pub salary: i64,
    pub department_id: Option<String>,
}

/// Request body for assigning equipment.
#[derive(Deserialize)]
pub struct ChangeEquipmentRequest {
    pub equipment_id: String,
}

/// Query string of the search endpoint; every filter is optional.
#[derive(Deserialize, Default)]
pub struct SearchQuery {
    pub department_id: Option<String>,
    pub employment_type: Option<String>,
    pub min_salary: Option<i64>,
    pub max_salary: Option<i64>,
}

impl SearchQuery {
    fn into_criteria(self) -> Result<SearchCriteria, ApiError> {
        Ok(SearchCriteria {
            department_id: self.department_id.as_deref().map(parse_id).transpose()?,
            employment_type: self
                .employment_type
                .as_deref()
                .map(EmploymentType::from_str)
                .transpose()?,
            min_salary: self.min_salary,
            max_salary: self.max_salary,
        })
    }
}

/// Possible responses from the list and search endpoints.
pub enum ListResponse {
    Ok(Json<Vec<Employee>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from endpoints returning a single employee.
pub enum GetResponse {
    Ok(Json<Employee>),
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
    Created(Json<Employee>),
}

impl IntoResponse for CreateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Created(json) => (StatusCode::CREATED, json).into_response(),
        }
    }
}

/// Possible responses from the delete endpoint.
pub enum DeleteResponse {
    NoContent,
}

impl IntoResponse for DeleteResponse {
    fn into_response(self) -> Response {
        match self {
            Self::NoContent => StatusCode::NO_CONTENT.into_response(),
        }
    }
}

/// `GET /api/employees`
pub async fn list<T>(State(state): State<AppState<T>>) -> Result<ListResponse, ApiError>
where
    T: TransactionManager + Send + Sync + 'static,
{
    let employees = state.directory.list_all().await?;
    Ok(ListResponse::Ok(Json(employees)))
}

/// `GET /api/employees/search`
pub async fn search<T>(
    State(state): State<AppState<T>>,
    Query(query): Query<SearchQuery>,
) -> Result<ListResponse, ApiError>
where
    T: TransactionManager + Send + Sync + 'static,
{
    let employees = state.directory.search(query.into_criteria()?).await?;
    Ok(ListResponse::Ok(Json(employees)))
}

/// `GET /api/employees/:id`
pub async fn get<T>(
    State(state): State<AppState<T>>,
    Path(id): Path<String>,
) -> Result<GetResponse, ApiError>
where
    T: TransactionManager + Send + Sync + 'static,
{
    let employee_id: EmployeeId = parse_id(&id)?;
    let employee = state.directory.get_by_id(employee_id).await?;
    Ok(GetResponse::Ok(Json(employee)))
}

/// `POST /api/employees`
pub async fn create<T>(
    State(state): State<AppState<T>>,
    Json(req): Json<CreateEmployeeRequest>,
) -> Result<CreateResponse, ApiError>
where
    T: TransactionManager + Send + Sync + 'static,
{
    let input = NewEmployee {
        name: req.name,
        salary: req.salary,
        employment_type: EmploymentType::from_str(&req.employment_type)?,
        department_id: parse_id::<DepartmentId>(&req.department_id)?,
        serial_number: req.serial_number,
    };
    let created = state.directory.create(input).await?;
    Ok(CreateResponse::Created(Json(created)))
}

/// `PUT /api/employees/:id`
pub async fn update<T>(
    State(state): State<AppState<T>>,
    Path(id): Path<String>,
    Json(req): Json<UpdateEmployeeRequest>,
) -> Result<GetResponse, ApiError>
where
    T: TransactionManager + Send + Sync + 'static,
{
    let update = EmployeeUpdate {
        employee_id: parse_id(&id)?,
        salary: req.salary,
        department_id: req.department_id.as_deref().map(parse_id).transpose()?,
    };
    let updated = state.directory.update(update).await?;
    Ok(GetResponse::Ok(Json(updated)))
}

/// `DELETE /api/employees/:id`
pub async fn delete<T>(
    State(state): State<AppState<T>>,
    Path(id): Path<String>,
) -> Result<DeleteResponse, ApiError>
where
    T: TransactionManager + Send + Sync + 'static,
{
    let employee_id: EmployeeId = parse_id(&id)?;
    state.directory.delete_by_id(employee_id).await?;
    Ok(DeleteResponse::NoContent)
}

/// `PUT /api/employees/:id/equipment`
pub async fn change_equipment<T>(
    State(state): State<AppState<T>>,
    Path(id): Path<String>,
    Json(req): Json<ChangeEquipmentRequest>,
) -> Result<GetResponse, ApiError>
where
    T: TransactionManager + Send + Sync + 'static,
{
    let employee_id: EmployeeId = parse_id(&id)?;
    let equipment_id: EquipmentId = parse_id(&req.equipment_id)?;
    let employee = state
        .directory
        .change_equipment(employee_id, equipment_id)
        .await?;
    Ok(GetResponse::Ok(Json(employee)))
}

/// `POST /api/employees/:id/retire`
pub async fn retire<T>(
    State(state): State<AppState<T>>,
    Path(id): Path<String>,
) -> Result<GetResponse, ApiError>
where
    T: TransactionManager + Send + Sync + 'static,
{
    let employee_id: EmployeeId = parse_id(&id)?;
    let employee = state.directory.retire(employee_id).await?;
    Ok(GetResponse::Ok(Json(employee)))
}
