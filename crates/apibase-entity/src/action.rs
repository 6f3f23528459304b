//! Action entity model.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

/// A permissible action, referenced by role grants.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Action {
    /// Unique action identifier, assigned by the store on insert.
    pub id: Uuid,
    /// Human-readable action name.
    pub name: String,
    /// Machine-readable action key (e.g. `"content.write"`).
    pub key: String,
    /// Creation time in Unix milliseconds.
    pub created_at: i64,
    /// Last modification time in Unix milliseconds.
    pub updated_at: i64,
    /// Soft-delete flag.
    pub is_deleted: bool,
}

/// Client-settable fields for creating or updating an action.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateUpdateAction {
    /// Human-readable action name.
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    /// Machine-readable action key.
    #[validate(length(min = 1, message = "key is required"))]
    pub key: String,
}
