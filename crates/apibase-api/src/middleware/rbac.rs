//! Role-based access gate.

use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;

use apibase_core::error::AppError;

use crate::error::ApiError;
use crate::extractors::Principal;

/// Role key that grants access to admin-gated route groups.
const ADMIN_ROLE: &str = "admin";

/// Middleware requiring the authenticated principal to hold the admin
/// role. Must run after [`crate::middleware::auth::require_auth`] in the
/// chain; an absent principal is rejected the same way as a wrong role.
pub async fn require_admin(request: Request, next: Next) -> Result<Response, ApiError> {
    let authorized = request
        .extensions()
        .get::<Principal>()
        .map(|principal| principal.role == ADMIN_ROLE)
        .unwrap_or(false);

    if !authorized {
        return Err(AppError::authorization("Admin role required").into());
    }

    Ok(next.run(request).await)
}
