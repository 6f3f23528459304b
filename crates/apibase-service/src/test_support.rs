//! In-memory repository fake shared by service tests.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use uuid::Uuid;

use apibase_core::result::AppResult;
use apibase_core::traits::Repository;
use apibase_entity::user::User;

/// Row access the fake needs from an entity.
pub trait FakeRow: Clone + Send + Sync + 'static {
    fn id(&self) -> Uuid;
    fn set_id(&mut self, id: Uuid);
    fn created_at(&self) -> i64;
    fn is_deleted(&self) -> bool;
    fn mark_deleted(&mut self, updated_at: i64);
}

impl FakeRow for User {
    fn id(&self) -> Uuid {
        self.id
    }
    fn set_id(&mut self, id: Uuid) {
        self.id = id;
    }
    fn created_at(&self) -> i64 {
        self.created_at
    }
    fn is_deleted(&self) -> bool {
        self.is_deleted
    }
    fn mark_deleted(&mut self, updated_at: i64) {
        self.is_deleted = true;
        self.updated_at = updated_at;
    }
}

/// In-memory stand-in for `PgRepository`, mirroring its contract: ids
/// assigned on create, listings exclude soft-deleted rows, update/delete
/// report rows affected.
pub struct MemoryRepo<E> {
    rows: Mutex<HashMap<Uuid, E>>,
}

impl<E> MemoryRepo<E> {
    pub fn new() -> Self {
        Self {
            rows: Mutex::new(HashMap::new()),
        }
    }
}

#[async_trait]
impl<E: FakeRow> Repository<E> for MemoryRepo<E> {
    async fn create(&self, entity: &E) -> AppResult<Uuid> {
        let id = Uuid::new_v4();
        let mut row = entity.clone();
        row.set_id(id);
        self.rows.lock().unwrap().insert(id, row);
        Ok(id)
    }

    async fn read_one(&self, id: Uuid) -> AppResult<Option<E>> {
        Ok(self.rows.lock().unwrap().get(&id).cloned())
    }

    async fn read_many(&self, limit: i64, offset: i64) -> AppResult<Vec<E>> {
        let rows = self.rows.lock().unwrap();
        let mut items: Vec<E> = rows.values().filter(|r| !r.is_deleted()).cloned().collect();
        items.sort_by(|a, b| b.created_at().cmp(&a.created_at()));
        Ok(items
            .into_iter()
            .skip(offset.max(0) as usize)
            .take(limit.max(0) as usize)
            .collect())
    }

    async fn update(&self, id: Uuid, entity: &E) -> AppResult<u64> {
        let mut rows = self.rows.lock().unwrap();
        if rows.contains_key(&id) {
            let mut row = entity.clone();
            row.set_id(id);
            rows.insert(id, row);
            Ok(1)
        } else {
            Ok(0)
        }
    }

    async fn delete(&self, id: Uuid, updated_at: i64) -> AppResult<u64> {
        let mut rows = self.rows.lock().unwrap();
        match rows.get_mut(&id) {
            Some(row) => {
                row.mark_deleted(updated_at);
                Ok(1)
            }
            None => Ok(0),
        }
    }
}
