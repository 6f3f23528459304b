//! User CRUD handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use uuid::Uuid;
use validator::Validate;

use apibase_core::types::pagination::{ListResponse, PageQuery};
use apibase_entity::user::{CreateUpdateUser, User};

use crate::dto::response::MessageResponse;
use crate::error::{ApiError, validation_error};
use crate::extractors::Principal;
use crate::state::AppState;

/// GET /api/v1/users
pub async fn read_many(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> Result<Json<ListResponse<User>>, ApiError> {
    Ok(Json(state.user_service.read_many(query).await?))
}

/// GET /api/v1/users/{id}
pub async fn read_one(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<User>, ApiError> {
    Ok(Json(state.user_service.read_one(id).await?))
}

/// POST /api/v1/users
pub async fn create(
    State(state): State<AppState>,
    Json(dto): Json<CreateUpdateUser>,
) -> Result<(StatusCode, Json<User>), ApiError> {
    dto.validate().map_err(|e| validation_error(&e))?;
    let user = state.user_service.create(dto).await?;
    Ok((StatusCode::CREATED, Json(user)))
}

/// PATCH /api/v1/users/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(dto): Json<CreateUpdateUser>,
) -> Result<Json<User>, ApiError> {
    dto.validate().map_err(|e| validation_error(&e))?;
    Ok(Json(state.user_service.update(id, dto).await?))
}

/// DELETE /api/v1/users/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<User>, ApiError> {
    Ok(Json(state.user_service.delete(id).await?))
}

/// GET /api/v1/users/me — the authenticated principal, as attached by
/// the auth gate.
pub async fn me(principal: Principal) -> Json<User> {
    Json(principal.0)
}

/// GET /api/v1/users/public
pub async fn public() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: "public api".to_string(),
    })
}
