//! Bearer-token authorization.
//!
//! Tokens are HS256 JWTs carrying the user id and role key. `authorize`
//! is the single entry point the auth middleware gates on: every failure
//! mode (malformed token, bad signature, expired, unknown or soft-deleted
//! user) collapses into an authorization error so nothing internal leaks
//! to the client.

use std::sync::Arc;

use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use apibase_core::config::auth::AuthConfig;
use apibase_core::error::{AppError, ErrorKind};
use apibase_core::result::AppResult;
use apibase_core::time::now_millis;
use apibase_core::traits::Repository;
use apibase_entity::user::User;

/// JWT claims carried by access tokens.
#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    /// Subject: the user id.
    sub: Uuid,
    /// Role key at issue time.
    role: String,
    /// Expiry as Unix seconds.
    exp: i64,
}

/// Authorizes requests against the user store.
#[derive(Clone)]
pub struct AuthService {
    repo: Arc<dyn Repository<User>>,
    config: AuthConfig,
}

impl AuthService {
    /// Create a new auth service.
    pub fn new(repo: Arc<dyn Repository<User>>, config: AuthConfig) -> Self {
        Self { repo, config }
    }

    /// Mint an access token for a user.
    pub fn issue_token(&self, user: &User) -> AppResult<String> {
        let claims = Claims {
            sub: user.id,
            role: user.role.clone(),
            exp: now_millis() / 1000 + self.config.token_ttl_seconds as i64,
        };

        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.config.jwt_secret.as_bytes()),
        )
        .map_err(|e| AppError::with_source(ErrorKind::Internal, "Failed to sign token", e))
    }

    /// Validate a bearer token and resolve it to its user.
    pub async fn authorize(&self, token: &str) -> AppResult<User> {
        let claims = decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.config.jwt_secret.as_bytes()),
            &Validation::default(),
        )
        .map_err(|_| AppError::authorization("Invalid bearer token"))?
        .claims;

        let user = self
            .repo
            .read_one(claims.sub)
            .await?
            .ok_or_else(|| AppError::authorization("Unknown principal"))?;

        if user.is_deleted {
            return Err(AppError::authorization("Principal is no longer active"));
        }

        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::MemoryRepo;
    use apibase_core::error::ErrorKind;

    async fn seeded() -> (AuthService, User) {
        let repo = Arc::new(MemoryRepo::<User>::new());
        let mut user = User {
            id: Uuid::nil(),
            name: "alice".to_string(),
            role: "admin".to_string(),
            created_at: now_millis(),
            updated_at: now_millis(),
            is_deleted: false,
        };
        user.id = repo.create(&user).await.unwrap();

        let service = AuthService::new(repo, AuthConfig::default());
        (service, user)
    }

    #[tokio::test]
    async fn issued_tokens_authorize() {
        let (service, user) = seeded().await;
        let token = service.issue_token(&user).unwrap();

        let principal = service.authorize(&token).await.unwrap();
        assert_eq!(principal.id, user.id);
        assert_eq!(principal.role, "admin");
    }

    #[tokio::test]
    async fn garbage_tokens_are_rejected() {
        let (service, _user) = seeded().await;
        let err = service.authorize("not-a-token").await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::Authorization);
    }

    #[tokio::test]
    async fn tokens_signed_with_another_secret_are_rejected() {
        let (service, user) = seeded().await;

        let other = AuthService::new(
            Arc::new(MemoryRepo::<User>::new()),
            AuthConfig {
                jwt_secret: "different-secret".to_string(),
                ..AuthConfig::default()
            },
        );
        let token = other.issue_token(&user).unwrap();

        let err = service.authorize(&token).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::Authorization);
    }

    #[tokio::test]
    async fn soft_deleted_users_are_rejected() {
        let (service, user) = seeded().await;
        let token = service.issue_token(&user).unwrap();

        service.repo.delete(user.id, now_millis()).await.unwrap();

        let err = service.authorize(&token).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::Authorization);
    }
}
