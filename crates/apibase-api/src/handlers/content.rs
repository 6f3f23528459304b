//! Content CRUD handlers. All routes sit behind the auth gate.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use uuid::Uuid;
use validator::Validate;

use apibase_core::types::pagination::{ListResponse, PageQuery};
use apibase_entity::content::{Content, CreateUpdateContent};

use crate::error::{ApiError, validation_error};
use crate::state::AppState;

/// GET /api/v1/contents
pub async fn read_many(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> Result<Json<ListResponse<Content>>, ApiError> {
    Ok(Json(state.content_service.read_many(query).await?))
}

/// GET /api/v1/contents/{id}
pub async fn read_one(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Content>, ApiError> {
    Ok(Json(state.content_service.read_one(id).await?))
}

/// POST /api/v1/contents
pub async fn create(
    State(state): State<AppState>,
    Json(dto): Json<CreateUpdateContent>,
) -> Result<(StatusCode, Json<Content>), ApiError> {
    dto.validate().map_err(|e| validation_error(&e))?;
    let content = state.content_service.create(dto).await?;
    Ok((StatusCode::CREATED, Json(content)))
}

/// PATCH /api/v1/contents/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(dto): Json<CreateUpdateContent>,
) -> Result<Json<Content>, ApiError> {
    dto.validate().map_err(|e| validation_error(&e))?;
    Ok(Json(state.content_service.update(id, dto).await?))
}

/// DELETE /api/v1/contents/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Content>, ApiError> {
    Ok(Json(state.content_service.delete(id).await?))
}
