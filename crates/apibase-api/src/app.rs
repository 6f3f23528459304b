//! Composition root — wires pool, storage, services, and router into a
//! running server.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum_server::tls_rustls::RustlsConfig;
use sqlx::PgPool;
use tracing::info;

use apibase_core::config::AppConfig;
use apibase_core::error::AppError;
use apibase_core::traits::Repository;
use apibase_database::PgRepository;
use apibase_entity::{Action, Content, Role, User};
use apibase_service::{
    ActionService, AuthService, ContentService, RoleService, UploadService, UserService,
};
use apibase_storage::{LocalStore, S3Store};

use crate::router::build_router;
use crate::state::AppState;

/// Build the shared application state from its externally-constructed
/// dependencies. Everything downstream receives its dependencies
/// explicitly; there are no process-wide singletons.
pub fn build_state(
    config: AppConfig,
    db_pool: PgPool,
    local: LocalStore,
    s3: Option<S3Store>,
) -> AppState {
    let user_repo: Arc<dyn Repository<User>> =
        Arc::new(PgRepository::<User>::new(db_pool.clone()));
    let content_repo: Arc<dyn Repository<Content>> =
        Arc::new(PgRepository::<Content>::new(db_pool.clone()));
    let role_repo: Arc<dyn Repository<Role>> =
        Arc::new(PgRepository::<Role>::new(db_pool.clone()));
    let action_repo: Arc<dyn Repository<Action>> =
        Arc::new(PgRepository::<Action>::new(db_pool.clone()));

    let auth_service = Arc::new(AuthService::new(
        Arc::clone(&user_repo),
        config.auth.clone(),
    ));
    let upload_service = Arc::new(UploadService::new(
        local,
        s3,
        config.storage.s3.presign_expiry_seconds,
    ));

    AppState {
        config: Arc::new(config),
        db_pool,
        user_service: Arc::new(UserService::new(user_repo)),
        content_service: Arc::new(ContentService::new(content_repo)),
        role_service: Arc::new(RoleService::new(role_repo)),
        action_service: Arc::new(ActionService::new(action_repo)),
        auth_service,
        upload_service,
    }
}

/// Run the Apibase server with the given configuration.
pub async fn run_server(config: AppConfig) -> Result<(), AppError> {
    // ── Uploads directory ────────────────────────────────────────
    let local = LocalStore::new(&config.storage.uploads_dir).await?;

    // ── Database connection + migrations ─────────────────────────
    let db_pool = apibase_database::connection::create_pool(&config.database).await?;
    apibase_database::migration::run_migrations(&db_pool).await?;

    // ── Object storage client ────────────────────────────────────
    let s3 = if config.storage.s3.enabled {
        Some(S3Store::new(&config.storage.s3).await?)
    } else {
        info!("Object storage disabled");
        None
    };

    // ── State + router ───────────────────────────────────────────
    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port)
        .parse()
        .map_err(|e| AppError::configuration(format!("Invalid bind address: {e}")))?;
    let tls = config.server.tls.clone();
    let grace = Duration::from_secs(config.server.shutdown_grace_seconds);

    let state = build_state(config, db_pool, local, s3);
    let app = build_router(state);

    // ── Bounded graceful shutdown ────────────────────────────────
    let handle = axum_server::Handle::new();
    let shutdown_handle = handle.clone();
    tokio::spawn(async move {
        shutdown_signal().await;
        info!("Shutdown signal received, draining connections...");
        shutdown_handle.graceful_shutdown(Some(grace));
    });

    // ── Serve ────────────────────────────────────────────────────
    if tls.enabled {
        let rustls_config = RustlsConfig::from_pem_file(&tls.cert_path, &tls.key_path)
            .await
            .map_err(|e| {
                AppError::configuration(format!("Failed to load TLS certificate/key: {e}"))
            })?;

        info!("Apibase listening on https://{addr}");
        axum_server::bind_rustls(addr, rustls_config)
            .handle(handle)
            .serve(app.into_make_service())
            .await
            .map_err(|e| AppError::internal(format!("Server error: {e}")))?;
    } else {
        info!("Apibase listening on http://{addr}");
        axum_server::bind(addr)
            .handle(handle)
            .serve(app.into_make_service())
            .await
            .map_err(|e| AppError::internal(format!("Server error: {e}")))?;
    }

    info!("Apibase shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
