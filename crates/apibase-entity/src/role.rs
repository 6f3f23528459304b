//! Role entity model.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

/// An RBAC role.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Role {
    /// Unique role identifier, assigned by the store on insert.
    pub id: Uuid,
    /// Human-readable role name.
    pub name: String,
    /// Machine-readable role key (e.g. `"admin"`).
    pub key: String,
    /// Creation time in Unix milliseconds.
    pub created_at: i64,
    /// Last modification time in Unix milliseconds.
    pub updated_at: i64,
    /// Soft-delete flag.
    pub is_deleted: bool,
}

/// Client-settable fields for creating or updating a role.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateUpdateRole {
    /// Human-readable role name.
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    /// Machine-readable role key.
    #[validate(length(min = 1, message = "key is required"))]
    pub key: String,
}
