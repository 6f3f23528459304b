//! Action CRUD service.

use std::sync::Arc;

use uuid::Uuid;

use apibase_core::error::AppError;
use apibase_core::result::AppResult;
use apibase_core::time::now_millis;
use apibase_core::traits::Repository;
use apibase_core::types::pagination::{ListResponse, PageQuery};
use apibase_entity::action::{Action, CreateUpdateAction};

/// CRUD operations over actions.
#[derive(Clone)]
pub struct ActionService {
    repo: Arc<dyn Repository<Action>>,
}

impl ActionService {
    /// Create a new action service.
    pub fn new(repo: Arc<dyn Repository<Action>>) -> Self {
        Self { repo }
    }

    /// Create an action from the request DTO.
    pub async fn create(&self, dto: CreateUpdateAction) -> AppResult<Action> {
        let now = now_millis();
        let mut action = Action {
            id: Uuid::nil(), // assigned by the store
            name: dto.name,
            key: dto.key,
            created_at: now,
            updated_at: now,
            is_deleted: false,
        };
        action.id = self.repo.create(&action).await?;
        Ok(action)
    }

    /// Fetch one page of active actions.
    pub async fn read_many(&self, query: PageQuery) -> AppResult<ListResponse<Action>> {
        let items = self.repo.read_many(query.limit(), query.offset()).await?;
        Ok(ListResponse::new(items, &query))
    }

    /// Fetch an action by id.
    pub async fn read_one(&self, id: Uuid) -> AppResult<Action> {
        self.repo
            .read_one(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Action {id} not found")))
    }

    /// Overlay the DTO onto the current row and persist the full row.
    pub async fn update(&self, id: Uuid, dto: CreateUpdateAction) -> AppResult<Action> {
        let mut action = self.read_one(id).await?;
        action.name = dto.name;
        action.key = dto.key;
        action.updated_at = now_millis();

        let rows = self.repo.update(id, &action).await?;
        if rows == 0 {
            return Err(AppError::conflict(format!(
                "Update of action {id} affected no rows"
            )));
        }
        Ok(action)
    }

    /// Soft-delete an action.
    pub async fn delete(&self, id: Uuid) -> AppResult<Action> {
        let mut action = self.read_one(id).await?;
        let now = now_millis();

        let rows = self.repo.delete(id, now).await?;
        if rows == 0 {
            return Err(AppError::conflict(format!(
                "Delete of action {id} affected no rows"
            )));
        }

        action.is_deleted = true;
        action.updated_at = now;
        Ok(action)
    }
}
