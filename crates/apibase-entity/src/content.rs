//! Content entity model.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

/// A piece of managed content.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Content {
    /// Unique content identifier, assigned by the store on insert.
    pub id: Uuid,
    /// Content title.
    pub name: String,
    /// Content body text.
    pub body: String,
    /// Creation time in Unix milliseconds.
    pub created_at: i64,
    /// Last modification time in Unix milliseconds.
    pub updated_at: i64,
    /// Soft-delete flag.
    pub is_deleted: bool,
}

/// Client-settable fields for creating or updating a content entry.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateUpdateContent {
    /// Content title.
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    /// Content body text.
    #[validate(length(min = 1, message = "body is required"))]
    pub body: String,
}
