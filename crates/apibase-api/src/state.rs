//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use sqlx::PgPool;

use apibase_core::config::AppConfig;
use apibase_service::{
    ActionService, AuthService, ContentService, RoleService, UploadService, UserService,
};

/// Application state containing all shared dependencies.
///
/// Constructed once at startup and passed to every Axum handler via the
/// `State` extractor. All fields are cheap to clone; there is no hidden
/// global state anywhere else.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// PostgreSQL connection pool.
    pub db_pool: PgPool,
    /// User CRUD service.
    pub user_service: Arc<UserService>,
    /// Content CRUD service.
    pub content_service: Arc<ContentService>,
    /// Role CRUD service.
    pub role_service: Arc<RoleService>,
    /// Action CRUD service.
    pub action_service: Arc<ActionService>,
    /// Bearer-token authorization service.
    pub auth_service: Arc<AuthService>,
    /// File-upload service.
    pub upload_service: Arc<UploadService>,
}
