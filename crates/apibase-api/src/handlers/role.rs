//! Role CRUD handlers. Admin-gated.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use uuid::Uuid;
use validator::Validate;

use apibase_core::types::pagination::{ListResponse, PageQuery};
use apibase_entity::role::{CreateUpdateRole, Role};

use crate::error::{ApiError, validation_error};
use crate::state::AppState;

/// GET /api/v1/roles
pub async fn read_many(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> Result<Json<ListResponse<Role>>, ApiError> {
    Ok(Json(state.role_service.read_many(query).await?))
}

/// GET /api/v1/roles/{id}
pub async fn read_one(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Role>, ApiError> {
    Ok(Json(state.role_service.read_one(id).await?))
}

/// POST /api/v1/roles
pub async fn create(
    State(state): State<AppState>,
    Json(dto): Json<CreateUpdateRole>,
) -> Result<(StatusCode, Json<Role>), ApiError> {
    dto.validate().map_err(|e| validation_error(&e))?;
    let role = state.role_service.create(dto).await?;
    Ok((StatusCode::CREATED, Json(role)))
}

/// PATCH /api/v1/roles/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(dto): Json<CreateUpdateRole>,
) -> Result<Json<Role>, ApiError> {
    dto.validate().map_err(|e| validation_error(&e))?;
    Ok(Json(state.role_service.update(id, dto).await?))
}

/// DELETE /api/v1/roles/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Role>, ApiError> {
    Ok(Json(state.role_service.delete(id).await?))
}
