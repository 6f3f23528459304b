//! Generic repository trait for database access.

use async_trait::async_trait;
use uuid::Uuid;

use crate::result::AppResult;

/// Generic CRUD repository contract, one implementation per entity type.
///
/// The contract is deliberately thin: `read_one` surfaces the zero-row
/// case as `None` rather than a distinguished error, `read_many` returns a
/// single page without a total count, and `update`/`delete` report rows
/// affected — a result of 0 means "missing row or no-op" and it is the
/// caller's job to tell those apart.
#[async_trait]
pub trait Repository<E>: Send + Sync
where
    E: Send + Sync + 'static,
{
    /// Insert a new row and return the store-assigned identifier.
    async fn create(&self, entity: &E) -> AppResult<Uuid>;

    /// Fetch one row by identifier. Soft-deleted rows are still returned.
    async fn read_one(&self, id: Uuid) -> AppResult<Option<E>>;

    /// Fetch one page of rows. Soft-deleted rows are excluded.
    async fn read_many(&self, limit: i64, offset: i64) -> AppResult<Vec<E>>;

    /// Full-column overwrite by identifier. Returns rows affected.
    async fn update(&self, id: Uuid, entity: &E) -> AppResult<u64>;

    /// Soft delete: flip the `is_deleted` flag and stamp `updated_at`.
    /// Returns rows affected; the row itself is retained.
    async fn delete(&self, id: Uuid, updated_at: i64) -> AppResult<u64>;
}
