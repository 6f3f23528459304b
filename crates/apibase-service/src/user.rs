//! User CRUD service.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use apibase_core::error::AppError;
use apibase_core::result::AppResult;
use apibase_core::time::now_millis;
use apibase_core::traits::Repository;
use apibase_core::types::pagination::{ListResponse, PageQuery};
use apibase_entity::user::{CreateUpdateUser, User};

/// Role key assigned when a create request does not specify one.
const DEFAULT_ROLE: &str = "user";

/// CRUD operations over users.
///
/// Update and delete perform a read-before-write: the repository's update
/// is a full-column overwrite, so the current row is fetched first and
/// only DTO-settable fields are overlaid. A row that disappears between
/// the read and the write surfaces as a conflict rather than a silent
/// no-op.
#[derive(Clone)]
pub struct UserService {
    repo: Arc<dyn Repository<User>>,
}

impl UserService {
    /// Create a new user service.
    pub fn new(repo: Arc<dyn Repository<User>>) -> Self {
        Self { repo }
    }

    /// Create a user from the request DTO.
    pub async fn create(&self, dto: CreateUpdateUser) -> AppResult<User> {
        let now = now_millis();
        let mut user = User {
            id: Uuid::nil(), // assigned by the store
            name: dto.name,
            role: dto.role.unwrap_or_else(|| DEFAULT_ROLE.to_string()),
            created_at: now,
            updated_at: now,
            is_deleted: false,
        };
        user.id = self.repo.create(&user).await?;

        info!(user_id = %user.id, "User created");
        Ok(user)
    }

    /// Fetch one page of active users.
    pub async fn read_many(&self, query: PageQuery) -> AppResult<ListResponse<User>> {
        let items = self.repo.read_many(query.limit(), query.offset()).await?;
        Ok(ListResponse::new(items, &query))
    }

    /// Fetch a user by id; soft-deleted users are still returned.
    pub async fn read_one(&self, id: Uuid) -> AppResult<User> {
        self.repo
            .read_one(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("User {id} not found")))
    }

    /// Overlay the DTO onto the current row and persist the full row.
    pub async fn update(&self, id: Uuid, dto: CreateUpdateUser) -> AppResult<User> {
        let mut user = self.read_one(id).await?;
        user.name = dto.name;
        if let Some(role) = dto.role {
            user.role = role;
        }
        user.updated_at = now_millis();

        let rows = self.repo.update(id, &user).await?;
        if rows == 0 {
            return Err(AppError::conflict(format!(
                "Update of user {id} affected no rows"
            )));
        }
        Ok(user)
    }

    /// Soft-delete a user; the row stays queryable by id.
    pub async fn delete(&self, id: Uuid) -> AppResult<User> {
        let mut user = self.read_one(id).await?;
        let now = now_millis();

        let rows = self.repo.delete(id, now).await?;
        if rows == 0 {
            return Err(AppError::conflict(format!(
                "Delete of user {id} affected no rows"
            )));
        }

        user.is_deleted = true;
        user.updated_at = now;
        info!(user_id = %id, "User soft-deleted");
        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::MemoryRepo;
    use apibase_core::error::ErrorKind;

    fn service() -> UserService {
        UserService::new(Arc::new(MemoryRepo::<User>::new()))
    }

    fn dto(name: &str) -> CreateUpdateUser {
        CreateUpdateUser {
            name: name.to_string(),
            role: None,
        }
    }

    #[tokio::test]
    async fn create_then_read_one_returns_matching_record() {
        let service = service();

        let created = service.create(dto("alice")).await.unwrap();
        assert_ne!(created.id, Uuid::nil());
        assert_eq!(created.created_at, created.updated_at);

        let read = service.read_one(created.id).await.unwrap();
        assert_eq!(read.name, "alice");
        assert_eq!(read.role, "user");
        assert_eq!(read.created_at, created.created_at);
        assert_eq!(read.updated_at, created.updated_at);
    }

    #[tokio::test]
    async fn update_changes_only_dto_fields_and_bumps_updated_at() {
        let service = service();
        let created = service.create(dto("bob")).await.unwrap();

        // Make sure the clock has a chance to advance past create time.
        std::thread::sleep(std::time::Duration::from_millis(2));

        let updated = service.update(created.id, dto("robert")).await.unwrap();
        assert_eq!(updated.name, "robert");
        assert_eq!(updated.role, created.role);
        assert_eq!(updated.created_at, created.created_at);
        assert!(updated.updated_at > created.updated_at);

        let read = service.read_one(created.id).await.unwrap();
        assert_eq!(read.name, "robert");
    }

    #[tokio::test]
    async fn update_of_missing_row_is_not_found() {
        let service = service();
        let err = service.update(Uuid::new_v4(), dto("ghost")).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::NotFound);
    }

    #[tokio::test]
    async fn delete_is_soft() {
        let service = service();
        let created = service.create(dto("carol")).await.unwrap();

        let deleted = service.delete(created.id).await.unwrap();
        assert!(deleted.is_deleted);

        // The row is still there by id, flagged.
        let read = service.read_one(created.id).await.unwrap();
        assert!(read.is_deleted);

        // But it no longer shows up in listings.
        let listing = service.read_many(PageQuery::default()).await.unwrap();
        assert!(listing.items.iter().all(|u| u.id != created.id));
    }

    #[tokio::test]
    async fn read_many_pages_with_limit_and_page() {
        let service = service();
        for i in 0..15 {
            service.create(dto(&format!("user-{i}"))).await.unwrap();
        }

        let first = service.read_many(PageQuery::new(10, 1)).await.unwrap();
        assert_eq!(first.items.len(), 10);
        assert_eq!(first.limit, 10);
        assert_eq!(first.page, 1);

        let second = service.read_many(PageQuery::new(10, 2)).await.unwrap();
        assert_eq!(second.items.len(), 5);
        assert_eq!(second.page, 2);
    }
}
