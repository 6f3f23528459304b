//! Route definitions for the Apibase HTTP API.
//!
//! Routes are grouped by domain under `/api/v1` and by whether the auth
//! gate (and for the admin groups, the RBAC gate) applies. The user CRUD
//! group and the upload group carry no gate.

use axum::middleware as axum_middleware;
use axum::routing::{delete, get, patch, post};
use axum::{Router, extract::DefaultBodyLimit};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware;
use crate::middleware::cors::build_cors_layer;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let max_body = state.config.server.max_body_size_bytes as usize;

    let api_routes = Router::new()
        .merge(user_routes())
        .merge(me_routes(state.clone()))
        .merge(content_routes(state.clone()))
        .merge(role_routes(state.clone()))
        .merge(action_routes(state.clone()))
        .merge(upload_routes())
        .merge(health_routes());

    Router::new()
        .nest("/api/v1", api_routes)
        .layer(DefaultBodyLimit::max(max_body))
        .layer(build_cors_layer(&state.config.server.cors))
        .layer(TraceLayer::new_for_http())
        .layer(axum_middleware::from_fn(
            middleware::logging::request_logging,
        ))
        .with_state(state)
}

/// User CRUD plus the unauthenticated public sub-route.
fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users/public", get(handlers::user::public))
        .route("/users", get(handlers::user::read_many))
        .route("/users", post(handlers::user::create))
        .route("/users/{id}", get(handlers::user::read_one))
        .route("/users/{id}", patch(handlers::user::update))
        .route("/users/{id}", delete(handlers::user::delete))
}

/// Self-service route behind the auth gate. `/users/me` is a static
/// segment, so it wins over `/users/{id}` in the ungated group.
fn me_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/users/me", get(handlers::user::me))
        .route_layer(axum_middleware::from_fn_with_state(
            state,
            middleware::auth::require_auth,
        ))
}

/// Content CRUD behind the auth gate.
fn content_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/contents", get(handlers::content::read_many))
        .route("/contents", post(handlers::content::create))
        .route("/contents/{id}", get(handlers::content::read_one))
        .route("/contents/{id}", patch(handlers::content::update))
        .route("/contents/{id}", delete(handlers::content::delete))
        .route_layer(axum_middleware::from_fn_with_state(
            state,
            middleware::auth::require_auth,
        ))
}

/// Role CRUD behind auth + admin gates. Layers added last run first, so
/// auth resolves the principal before the RBAC check reads it.
fn role_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/roles", get(handlers::role::read_many))
        .route("/roles", post(handlers::role::create))
        .route("/roles/{id}", get(handlers::role::read_one))
        .route("/roles/{id}", patch(handlers::role::update))
        .route("/roles/{id}", delete(handlers::role::delete))
        .route_layer(axum_middleware::from_fn(middleware::rbac::require_admin))
        .route_layer(axum_middleware::from_fn_with_state(
            state,
            middleware::auth::require_auth,
        ))
}

/// Action CRUD behind auth + admin gates.
fn action_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/actions", get(handlers::action::read_many))
        .route("/actions", post(handlers::action::create))
        .route("/actions/{id}", get(handlers::action::read_one))
        .route("/actions/{id}", patch(handlers::action::update))
        .route("/actions/{id}", delete(handlers::action::delete))
        .route_layer(axum_middleware::from_fn(middleware::rbac::require_admin))
        .route_layer(axum_middleware::from_fn_with_state(
            state,
            middleware::auth::require_auth,
        ))
}

/// File-upload endpoints.
fn upload_routes() -> Router<AppState> {
    Router::new()
        .route("/uploads/one", post(handlers::upload::upload_one))
        .route(
            "/uploads/one/presigned",
            post(handlers::upload::upload_one_presigned),
        )
        .route("/uploads/one/disk", post(handlers::upload::upload_one_disk))
        .route(
            "/uploads/many/disk",
            post(handlers::upload::upload_many_disk),
        )
        .route(
            "/uploads/many/keys/disk",
            post(handlers::upload::upload_many_with_keys_disk),
        )
}

/// Health check endpoints (no auth required).
fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(handlers::health::health_check))
        .route("/health/detailed", get(handlers::health::detailed_health))
}
