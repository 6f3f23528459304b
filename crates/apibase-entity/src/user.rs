//! User entity model.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

/// A registered user.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    /// Unique user identifier, assigned by the store on insert.
    pub id: Uuid,
    /// Display name.
    pub name: String,
    /// Role key used by the RBAC gate (references `roles.key`).
    pub role: String,
    /// Creation time in Unix milliseconds.
    pub created_at: i64,
    /// Last modification time in Unix milliseconds.
    pub updated_at: i64,
    /// Soft-delete flag; flagged rows stay queryable by id.
    pub is_deleted: bool,
}

/// Client-settable fields for creating or updating a user.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateUpdateUser {
    /// Display name.
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    /// Role key; defaults to `"user"` on create, left unchanged on update.
    pub role: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_name_fails_validation() {
        let dto = CreateUpdateUser {
            name: String::new(),
            role: None,
        };
        assert!(dto.validate().is_err());
    }

    #[test]
    fn role_is_optional() {
        let dto: CreateUpdateUser = serde_json::from_str(r#"{"name": "alice"}"#).unwrap();
        assert!(dto.validate().is_ok());
        assert!(dto.role.is_none());
    }
}
