//! JSON REST handlers for equipment.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use staffhub_app::ports::TransactionManager;
use staffhub_domain::equipment::Equipment;
use staffhub_domain::id::EquipmentId;

use super::parse_id;
use crate::error::ApiError;
use crate::state::AppState;

/// Request body for registering equipment.
#[derive(Deserialize)]
pub struct RegisterEquipmentRequest {
    pub serial_number: String,
    pub kind: String,
    pub model: Option<String>,
}

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<Equipment>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the lookup endpoints.
pub enum GetResponse {
    Ok(Json<Equipment>),
}

impl IntoResponse for GetResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the register endpoint.
pub enum CreateResponse {
    Created(Json<Equipment>),
}

impl IntoResponse for CreateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Created(json) => (StatusCode::CREATED, json).into_response(),
        }
    }
}

/// `GET /api/equipment`
pub async fn list<T>(State(state): State<AppState<T>>) -> Result<ListResponse, ApiError>
where
    T: TransactionManager + Send + Sync + 'static,
{
    let equipment = state.equipment_service.list_equipment().await?;
    Ok(ListResponse::Ok(Json(equipment)))
}

/// `GET /api/equipment/:id`
pub async fn get<T>(
    State(state): State<AppState<T>>,
    Path(id): Path<String>,
) -> Result<GetResponse, ApiError>
where
    T: TransactionManager + Send + Sync + 'static,
{
    let equipment_id: EquipmentId = parse_id(&id)?;
    let equipment = state.equipment_service.get_equipment(equipment_id).await?;
    Ok(GetResponse::Ok(Json(equipment)))
}

/// `GET /api/equipment/serial/:serial`
pub async fn get_by_serial<T>(
    State(state): State<AppState<T>>,
    Path(serial): Path<String>,
) -> Result<GetResponse, ApiError>
where
    T: TransactionManager + Send + Sync + 'static,
{
    let equipment = state.equipment_service.get_by_serial(&serial).await?;
    Ok(GetResponse::Ok(Json(equipment)))
}

/// `POST /api/equipment`
pub async fn register<T>(
    State(state): State<AppState<T>>,
    Json(req): Json<RegisterEquipmentRequest>,
) -> Result<CreateResponse, ApiError>
where
    T: TransactionManager + Send + Sync + 'static,
{
    let mut builder = Equipment::builder()
        .serial_number(req.serial_number)
        .kind(req.kind);
    if let Some(model) = req.model {
        builder = builder.model(model);
    }

    let equipment = builder.build()?;
    let created = state.equipment_service.register_equipment(equipment).await?;
    Ok(CreateResponse::Created(Json(created)))
}
