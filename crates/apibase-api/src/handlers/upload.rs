//! File-upload handlers.
//!
//! Each handler drains the multipart body into [`FilePart`] values and
//! hands them to the upload service. Partial multi-file failures surface
//! the already-saved paths in the error details.

use std::collections::HashMap;

use axum::Json;
use axum::extract::multipart::{Field, Multipart, MultipartError};
use axum::extract::State;

use apibase_core::error::AppError;
use apibase_service::upload::{FilePart, PartialUploadError, REQUIRED_IMAGE_FIELDS};

use crate::dto::response::{UploadManyResponse, UploadResponse};
use crate::error::ApiError;
use crate::state::AppState;

/// POST /api/v1/uploads/one — store in object storage, return a path URL.
pub async fn upload_one(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<UploadResponse>, ApiError> {
    let part = single_file(&mut multipart).await?;
    let path = state.upload_service.upload_one(part).await?;
    Ok(Json(UploadResponse { path }))
}

/// POST /api/v1/uploads/one/presigned — store in object storage, return a
/// time-limited presigned retrieval URL.
pub async fn upload_one_presigned(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<UploadResponse>, ApiError> {
    let part = single_file(&mut multipart).await?;
    let path = state.upload_service.upload_one_presigned(part).await?;
    Ok(Json(UploadResponse { path }))
}

/// POST /api/v1/uploads/one/disk — save to the local uploads directory.
pub async fn upload_one_disk(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<UploadResponse>, ApiError> {
    let part = single_file(&mut multipart).await?;
    let path = state.upload_service.upload_one_disk(part).await?;
    Ok(Json(UploadResponse { path }))
}

/// POST /api/v1/uploads/many/disk — save every "files" field to disk.
pub async fn upload_many_disk(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<UploadManyResponse>, ApiError> {
    let mut parts = Vec::new();
    while let Some(field) = next_field(&mut multipart).await? {
        if field.name() == Some("files") {
            parts.push(read_part(field).await?);
        }
    }

    let paths = state
        .upload_service
        .upload_many_disk(parts)
        .await
        .map_err(partial_failure)?;
    Ok(Json(UploadManyResponse { paths }))
}

/// POST /api/v1/uploads/many/keys/disk — save the fixed named fields to
/// disk, in order.
pub async fn upload_many_with_keys_disk(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<UploadManyResponse>, ApiError> {
    let mut parts: HashMap<String, FilePart> = HashMap::new();
    while let Some(field) = next_field(&mut multipart).await? {
        let Some(name) = field.name().map(str::to_string) else {
            continue;
        };
        if REQUIRED_IMAGE_FIELDS.contains(&name.as_str()) && !parts.contains_key(&name) {
            parts.insert(name, read_part(field).await?);
        }
    }

    let paths = state
        .upload_service
        .upload_many_with_keys_disk(&parts)
        .await
        .map_err(partial_failure)?;
    Ok(Json(UploadManyResponse { paths }))
}

/// Drain the form until the "file" field appears.
async fn single_file(multipart: &mut Multipart) -> Result<FilePart, AppError> {
    while let Some(field) = next_field(multipart).await? {
        if field.name() == Some("file") {
            return read_part(field).await;
        }
    }
    Err(AppError::validation("Missing form field 'file'"))
}

async fn next_field(multipart: &mut Multipart) -> Result<Option<Field<'_>>, AppError> {
    multipart.next_field().await.map_err(multipart_error)
}

async fn read_part(field: Field<'_>) -> Result<FilePart, AppError> {
    let file_name = field.file_name().unwrap_or("upload").to_string();
    let bytes = field.bytes().await.map_err(multipart_error)?;
    Ok(FilePart { file_name, bytes })
}

fn multipart_error(err: MultipartError) -> AppError {
    AppError::validation(format!("Malformed multipart body: {err}"))
}

fn partial_failure(err: PartialUploadError) -> ApiError {
    let saved = err.saved;
    ApiError::with_details(err.source, serde_json::json!({ "saved": saved }))
}
