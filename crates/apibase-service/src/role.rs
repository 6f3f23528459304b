//! Role CRUD service.

use std::sync::Arc;

use uuid::Uuid;

use apibase_core::error::AppError;
use apibase_core::result::AppResult;
use apibase_core::time::now_millis;
use apibase_core::traits::Repository;
use apibase_core::types::pagination::{ListResponse, PageQuery};
use apibase_entity::role::{CreateUpdateRole, Role};

/// CRUD operations over roles. Role keys are unique at the schema level;
/// duplicate keys surface as database errors.
#[derive(Clone)]
pub struct RoleService {
    repo: Arc<dyn Repository<Role>>,
}

impl RoleService {
    /// Create a new role service.
    pub fn new(repo: Arc<dyn Repository<Role>>) -> Self {
        Self { repo }
    }

    /// Create a role from the request DTO.
    pub async fn create(&self, dto: CreateUpdateRole) -> AppResult<Role> {
        let now = now_millis();
        let mut role = Role {
            id: Uuid::nil(), // assigned by the store
            name: dto.name,
            key: dto.key,
            created_at: now,
            updated_at: now,
            is_deleted: false,
        };
        role.id = self.repo.create(&role).await?;
        Ok(role)
    }

    /// Fetch one page of active roles.
    pub async fn read_many(&self, query: PageQuery) -> AppResult<ListResponse<Role>> {
        let items = self.repo.read_many(query.limit(), query.offset()).await?;
        Ok(ListResponse::new(items, &query))
    }

    /// Fetch a role by id.
    pub async fn read_one(&self, id: Uuid) -> AppResult<Role> {
        self.repo
            .read_one(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Role {id} not found")))
    }

    /// Overlay the DTO onto the current row and persist the full row.
    pub async fn update(&self, id: Uuid, dto: CreateUpdateRole) -> AppResult<Role> {
        let mut role = self.read_one(id).await?;
        role.name = dto.name;
        role.key = dto.key;
        role.updated_at = now_millis();

        let rows = self.repo.update(id, &role).await?;
        if rows == 0 {
            return Err(AppError::conflict(format!(
                "Update of role {id} affected no rows"
            )));
        }
        Ok(role)
    }

    /// Soft-delete a role.
    pub async fn delete(&self, id: Uuid) -> AppResult<Role> {
        let mut role = self.read_one(id).await?;
        let now = now_millis();

        let rows = self.repo.delete(id, now).await?;
        if rows == 0 {
            return Err(AppError::conflict(format!(
                "Delete of role {id} affected no rows"
            )));
        }

        role.is_deleted = true;
        role.updated_at = now;
        Ok(role)
    }
}
