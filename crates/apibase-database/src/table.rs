//! Table metadata for the generic repository.
//!
//! Instead of duplicating near-identical SQL per entity, each entity
//! declares its table name and column lists and knows how to bind its own
//! values. [`crate::repository::PgRepository`] drives the five CRUD
//! statements off that metadata.

use sqlx::Postgres;
use sqlx::postgres::{PgArguments, PgRow};

use apibase_entity::action::Action;
use apibase_entity::content::Content;
use apibase_entity::role::Role;
use apibase_entity::user::User;

/// A parameterized Postgres query in the process of being bound.
pub type PgQuery<'q> = sqlx::query::Query<'q, Postgres, PgArguments>;

/// Table metadata implemented by every persisted entity.
///
/// `INSERT_COLUMNS` excludes `id` (assigned by the store) and `is_deleted`
/// (schema default). `UPDATE_COLUMNS` covers the full-column overwrite
/// performed by update, in the order `bind_update` binds them.
pub trait TableEntity:
    for<'r> sqlx::FromRow<'r, PgRow> + Send + Sync + Unpin
{
    /// The table this entity is persisted in.
    const TABLE: &'static str;
    /// Columns written on insert, in bind order.
    const INSERT_COLUMNS: &'static [&'static str];
    /// Columns written on update, in bind order (placeholders start at $2;
    /// $1 is the row id).
    const UPDATE_COLUMNS: &'static [&'static str];

    /// Bind this entity's insert values onto `query`, in
    /// `INSERT_COLUMNS` order.
    fn bind_insert<'q>(&self, query: PgQuery<'q>) -> PgQuery<'q>;

    /// Bind this entity's update values onto `query`, in
    /// `UPDATE_COLUMNS` order.
    fn bind_update<'q>(&self, query: PgQuery<'q>) -> PgQuery<'q>;
}

impl TableEntity for User {
    const TABLE: &'static str = "users";
    const INSERT_COLUMNS: &'static [&'static str] =
        &["name", "role", "created_at", "updated_at"];
    const UPDATE_COLUMNS: &'static [&'static str] =
        &["name", "role", "is_deleted", "updated_at"];

    fn bind_insert<'q>(&self, query: PgQuery<'q>) -> PgQuery<'q> {
        query
            .bind(self.name.clone())
            .bind(self.role.clone())
            .bind(self.created_at)
            .bind(self.updated_at)
    }

    fn bind_update<'q>(&self, query: PgQuery<'q>) -> PgQuery<'q> {
        query
            .bind(self.name.clone())
            .bind(self.role.clone())
            .bind(self.is_deleted)
            .bind(self.updated_at)
    }
}

impl TableEntity for Content {
    const TABLE: &'static str = "contents";
    const INSERT_COLUMNS: &'static [&'static str] =
        &["name", "body", "created_at", "updated_at"];
    const UPDATE_COLUMNS: &'static [&'static str] =
        &["name", "body", "is_deleted", "updated_at"];

    fn bind_insert<'q>(&self, query: PgQuery<'q>) -> PgQuery<'q> {
        query
            .bind(self.name.clone())
            .bind(self.body.clone())
            .bind(self.created_at)
            .bind(self.updated_at)
    }

    fn bind_update<'q>(&self, query: PgQuery<'q>) -> PgQuery<'q> {
        query
            .bind(self.name.clone())
            .bind(self.body.clone())
            .bind(self.is_deleted)
            .bind(self.updated_at)
    }
}

impl TableEntity for Role {
    const TABLE: &'static str = "roles";
    const INSERT_COLUMNS: &'static [&'static str] =
        &["name", "key", "created_at", "updated_at"];
    const UPDATE_COLUMNS: &'static [&'static str] =
        &["name", "key", "is_deleted", "updated_at"];

    fn bind_insert<'q>(&self, query: PgQuery<'q>) -> PgQuery<'q> {
        query
            .bind(self.name.clone())
            .bind(self.key.clone())
            .bind(self.created_at)
            .bind(self.updated_at)
    }

    fn bind_update<'q>(&self, query: PgQuery<'q>) -> PgQuery<'q> {
        query
            .bind(self.name.clone())
            .bind(self.key.clone())
            .bind(self.is_deleted)
            .bind(self.updated_at)
    }
}

impl TableEntity for Action {
    const TABLE: &'static str = "actions";
    const INSERT_COLUMNS: &'static [&'static str] =
        &["name", "key", "created_at", "updated_at"];
    const UPDATE_COLUMNS: &'static [&'static str] =
        &["name", "key", "is_deleted", "updated_at"];

    fn bind_insert<'q>(&self, query: PgQuery<'q>) -> PgQuery<'q> {
        query
            .bind(self.name.clone())
            .bind(self.key.clone())
            .bind(self.created_at)
            .bind(self.updated_at)
    }

    fn bind_update<'q>(&self, query: PgQuery<'q>) -> PgQuery<'q> {
        query
            .bind(self.name.clone())
            .bind(self.key.clone())
            .bind(self.is_deleted)
            .bind(self.updated_at)
    }
}

/// `INSERT INTO <table> (<columns>) VALUES ($1..$n) RETURNING id`
pub fn insert_statement(table: &str, columns: &[&str]) -> String {
    let placeholders: Vec<String> = (1..=columns.len()).map(|i| format!("${i}")).collect();
    format!(
        "INSERT INTO {table} ({}) VALUES ({}) RETURNING id",
        columns.join(", "),
        placeholders.join(", ")
    )
}

/// `SELECT * FROM <table> WHERE id = $1 LIMIT 1`
pub fn select_one_statement(table: &str) -> String {
    format!("SELECT * FROM {table} WHERE id = $1 LIMIT 1")
}

/// One page of non-deleted rows, newest first.
pub fn select_page_statement(table: &str) -> String {
    format!(
        "SELECT * FROM {table} WHERE is_deleted = FALSE \
         ORDER BY created_at DESC LIMIT $1 OFFSET $2"
    )
}

/// Full-column overwrite keyed by id; placeholders for the SET clause
/// start at $2.
pub fn update_statement(table: &str, columns: &[&str]) -> String {
    let assignments: Vec<String> = columns
        .iter()
        .enumerate()
        .map(|(i, col)| format!("{col} = ${}", i + 2))
        .collect();
    format!(
        "UPDATE {table} SET {} WHERE id = $1",
        assignments.join(", ")
    )
}

/// Soft delete: flag flip plus timestamp, row retained.
pub fn soft_delete_statement(table: &str) -> String {
    format!("UPDATE {table} SET is_deleted = TRUE, updated_at = $2 WHERE id = $1")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_statement_numbers_placeholders() {
        assert_eq!(
            insert_statement(User::TABLE, User::INSERT_COLUMNS),
            "INSERT INTO users (name, role, created_at, updated_at) \
             VALUES ($1, $2, $3, $4) RETURNING id"
        );
    }

    #[test]
    fn update_statement_reserves_first_placeholder_for_id() {
        assert_eq!(
            update_statement(Role::TABLE, Role::UPDATE_COLUMNS),
            "UPDATE roles SET name = $2, key = $3, is_deleted = $4, updated_at = $5 \
             WHERE id = $1"
        );
    }

    #[test]
    fn page_statement_excludes_soft_deleted_rows() {
        let sql = select_page_statement(Content::TABLE);
        assert!(sql.contains("is_deleted = FALSE"));
        assert!(sql.contains("LIMIT $1 OFFSET $2"));
    }

    #[test]
    fn soft_delete_statement_keeps_the_row() {
        let sql = soft_delete_statement(Action::TABLE);
        assert!(sql.starts_with("UPDATE actions SET is_deleted = TRUE"));
        assert!(!sql.to_uppercase().contains("DELETE FROM"));
    }
}
