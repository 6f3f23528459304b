//! Authentication gate.

use axum::extract::{Request, State};
use axum::http::header::AUTHORIZATION;
use axum::middleware::Next;
use axum::response::Response;

use apibase_core::error::AppError;

use crate::error::ApiError;
use crate::extractors::Principal;
use crate::state::AppState;

/// Middleware that authorizes the request before it reaches the handler.
///
/// Extracts the bearer credentials, runs them through the auth service,
/// and attaches the resolved principal to request extensions. Any failure
/// short-circuits the chain with the error response; the wrapped handler
/// is never invoked.
pub async fn require_auth(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = bearer_token(&request)
        .ok_or_else(|| AppError::authorization("Missing bearer credentials"))?;

    let user = state.auth_service.authorize(&token).await?;
    request.extensions_mut().insert(Principal(user));

    Ok(next.run(request).await)
}

fn bearer_token(request: &Request) -> Option<String> {
    request
        .headers()
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(str::to_string)
}
