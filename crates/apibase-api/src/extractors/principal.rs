//! `Principal` extractor — reads the authenticated user the auth
//! middleware attached to the request.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use apibase_core::error::AppError;
use apibase_entity::user::User;

use crate::error::ApiError;

/// The authenticated user for the current request.
///
/// The auth middleware inserts this into request extensions after a
/// successful `authorize` call; handlers behind the gate take it as a
/// typed argument instead of digging through an untyped context bag.
#[derive(Debug, Clone)]
pub struct Principal(pub User);

impl std::ops::Deref for Principal {
    type Target = User;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<S> FromRequestParts<S> for Principal
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<Principal>()
            .cloned()
            .ok_or_else(|| AppError::authorization("Request is not authenticated").into())
    }
}
