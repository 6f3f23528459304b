//! Generic Postgres repository.

use std::marker::PhantomData;

use async_trait::async_trait;
use sqlx::{PgPool, Row};
use uuid::Uuid;

use apibase_core::error::{AppError, ErrorKind};
use apibase_core::result::AppResult;
use apibase_core::traits::Repository;

use crate::table::{
    TableEntity, insert_statement, select_one_statement, select_page_statement,
    soft_delete_statement, update_statement,
};

/// One repository shape reused for every entity via table metadata.
///
/// Constraints (uniqueness, foreign keys) are enforced by the schema, not
/// validated here; violations surface as database errors.
pub struct PgRepository<E> {
    pool: PgPool,
    _entity: PhantomData<fn() -> E>,
}

impl<E> PgRepository<E> {
    /// Create a repository backed by the shared connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self {
            pool,
            _entity: PhantomData,
        }
    }
}

impl<E> Clone for PgRepository<E> {
    fn clone(&self) -> Self {
        Self {
            pool: self.pool.clone(),
            _entity: PhantomData,
        }
    }
}

#[async_trait]
impl<E> Repository<E> for PgRepository<E>
where
    E: TableEntity + 'static,
{
    async fn create(&self, entity: &E) -> AppResult<Uuid> {
        let sql = insert_statement(E::TABLE, E::INSERT_COLUMNS);
        let row = entity
            .bind_insert(sqlx::query(&sql))
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(
                    ErrorKind::Database,
                    format!("Failed to insert into {}", E::TABLE),
                    e,
                )
            })?;

        row.try_get("id").map_err(|e| {
            AppError::with_source(
                ErrorKind::Database,
                format!("Insert into {} returned no id", E::TABLE),
                e,
            )
        })
    }

    async fn read_one(&self, id: Uuid) -> AppResult<Option<E>> {
        let sql = select_one_statement(E::TABLE);
        sqlx::query_as::<_, E>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(
                    ErrorKind::Database,
                    format!("Failed to read one row from {}", E::TABLE),
                    e,
                )
            })
    }

    async fn read_many(&self, limit: i64, offset: i64) -> AppResult<Vec<E>> {
        let sql = select_page_statement(E::TABLE);
        sqlx::query_as::<_, E>(&sql)
            .bind(limit)
            .bind(offset)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(
                    ErrorKind::Database,
                    format!("Failed to list rows from {}", E::TABLE),
                    e,
                )
            })
    }

    async fn update(&self, id: Uuid, entity: &E) -> AppResult<u64> {
        let sql = update_statement(E::TABLE, E::UPDATE_COLUMNS);
        let result = entity
            .bind_update(sqlx::query(&sql).bind(id))
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(
                    ErrorKind::Database,
                    format!("Failed to update row in {}", E::TABLE),
                    e,
                )
            })?;

        Ok(result.rows_affected())
    }

    async fn delete(&self, id: Uuid, updated_at: i64) -> AppResult<u64> {
        let sql = soft_delete_statement(E::TABLE);
        let result = sqlx::query(&sql)
            .bind(id)
            .bind(updated_at)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(
                    ErrorKind::Database,
                    format!("Failed to soft-delete row in {}", E::TABLE),
                    e,
                )
            })?;

        Ok(result.rows_affected())
    }
}
