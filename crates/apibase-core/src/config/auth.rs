//! Authentication configuration.

use serde::{Deserialize, Serialize};

/// Bearer-token authentication configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// HS256 signing secret for bearer tokens.
    #[serde(default = "default_jwt_secret")]
    pub jwt_secret: String,
    /// Token lifetime in seconds.
    #[serde(default = "default_token_ttl")]
    pub token_ttl_seconds: u64,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: default_jwt_secret(),
            token_ttl_seconds: default_token_ttl(),
        }
    }
}

fn default_jwt_secret() -> String {
    // Overridden in any real deployment via APIBASE__AUTH__JWT_SECRET.
    "insecure-development-secret".to_string()
}

fn default_token_ttl() -> u64 {
    3600
}
