//! Content CRUD service.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use apibase_core::error::AppError;
use apibase_core::result::AppResult;
use apibase_core::time::now_millis;
use apibase_core::traits::Repository;
use apibase_core::types::pagination::{ListResponse, PageQuery};
use apibase_entity::content::{Content, CreateUpdateContent};

/// CRUD operations over content entries. Same read-before-write shape as
/// [`crate::user::UserService`].
#[derive(Clone)]
pub struct ContentService {
    repo: Arc<dyn Repository<Content>>,
}

impl ContentService {
    /// Create a new content service.
    pub fn new(repo: Arc<dyn Repository<Content>>) -> Self {
        Self { repo }
    }

    /// Create a content entry from the request DTO.
    pub async fn create(&self, dto: CreateUpdateContent) -> AppResult<Content> {
        let now = now_millis();
        let mut content = Content {
            id: Uuid::nil(), // assigned by the store
            name: dto.name,
            body: dto.body,
            created_at: now,
            updated_at: now,
            is_deleted: false,
        };
        content.id = self.repo.create(&content).await?;

        info!(content_id = %content.id, "Content created");
        Ok(content)
    }

    /// Fetch one page of active content entries.
    pub async fn read_many(&self, query: PageQuery) -> AppResult<ListResponse<Content>> {
        let items = self.repo.read_many(query.limit(), query.offset()).await?;
        Ok(ListResponse::new(items, &query))
    }

    /// Fetch a content entry by id.
    pub async fn read_one(&self, id: Uuid) -> AppResult<Content> {
        self.repo
            .read_one(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Content {id} not found")))
    }

    /// Overlay the DTO onto the current row and persist the full row.
    pub async fn update(&self, id: Uuid, dto: CreateUpdateContent) -> AppResult<Content> {
        let mut content = self.read_one(id).await?;
        content.name = dto.name;
        content.body = dto.body;
        content.updated_at = now_millis();

        let rows = self.repo.update(id, &content).await?;
        if rows == 0 {
            return Err(AppError::conflict(format!(
                "Update of content {id} affected no rows"
            )));
        }
        Ok(content)
    }

    /// Soft-delete a content entry.
    pub async fn delete(&self, id: Uuid) -> AppResult<Content> {
        let mut content = self.read_one(id).await?;
        let now = now_millis();

        let rows = self.repo.delete(id, now).await?;
        if rows == 0 {
            return Err(AppError::conflict(format!(
                "Delete of content {id} affected no rows"
            )));
        }

        content.is_deleted = true;
        content.updated_at = now;
        Ok(content)
    }
}
