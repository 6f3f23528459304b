//! Action CRUD handlers. Admin-gated.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use uuid::Uuid;
use validator::Validate;

use apibase_core::types::pagination::{ListResponse, PageQuery};
use apibase_entity::action::{Action, CreateUpdateAction};

use crate::error::{ApiError, validation_error};
use crate::state::AppState;

/// GET /api/v1/actions
pub async fn read_many(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> Result<Json<ListResponse<Action>>, ApiError> {
    Ok(Json(state.action_service.read_many(query).await?))
}

/// GET /api/v1/actions/{id}
pub async fn read_one(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Action>, ApiError> {
    Ok(Json(state.action_service.read_one(id).await?))
}

/// POST /api/v1/actions
pub async fn create(
    State(state): State<AppState>,
    Json(dto): Json<CreateUpdateAction>,
) -> Result<(StatusCode, Json<Action>), ApiError> {
    dto.validate().map_err(|e| validation_error(&e))?;
    let action = state.action_service.create(dto).await?;
    Ok((StatusCode::CREATED, Json(action)))
}

/// PATCH /api/v1/actions/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(dto): Json<CreateUpdateAction>,
) -> Result<Json<Action>, ApiError> {
    dto.validate().map_err(|e| validation_error(&e))?;
    Ok(Json(state.action_service.update(id, dto).await?))
}

/// DELETE /api/v1/actions/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Action>, ApiError> {
    Ok(Json(state.action_service.delete(id).await?))
}
