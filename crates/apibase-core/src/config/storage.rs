//! Upload and object-storage configuration.

use serde::{Deserialize, Serialize};

/// Top-level storage configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Directory for files uploaded to local disk; created at startup if
    /// absent.
    #[serde(default = "default_uploads_dir")]
    pub uploads_dir: String,
    /// S3-compatible object storage configuration.
    #[serde(default)]
    pub s3: S3Config,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            uploads_dir: default_uploads_dir(),
            s3: S3Config::default(),
        }
    }
}

/// S3-compatible object storage configuration.
///
/// When `access_key`/`secret_key` are empty the client falls back to the
/// SDK's own credential resolution chain.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct S3Config {
    /// Whether object storage is enabled.
    #[serde(default)]
    pub enabled: bool,
    /// AWS region.
    #[serde(default = "default_region")]
    pub region: String,
    /// Endpoint URL override (for non-AWS services like MinIO).
    #[serde(default)]
    pub endpoint: String,
    /// Bucket name.
    #[serde(default)]
    pub bucket: String,
    /// Access key ID.
    #[serde(default)]
    pub access_key: String,
    /// Secret access key.
    #[serde(default)]
    pub secret_key: String,
    /// Lifetime of presigned retrieval URLs in seconds.
    #[serde(default = "default_presign_expiry")]
    pub presign_expiry_seconds: u64,
}

impl Default for S3Config {
    fn default() -> Self {
        Self {
            enabled: false,
            region: default_region(),
            endpoint: String::new(),
            bucket: String::new(),
            access_key: String::new(),
            secret_key: String::new(),
            presign_expiry_seconds: default_presign_expiry(),
        }
    }
}

fn default_uploads_dir() -> String {
    "./uploads".to_string()
}

fn default_region() -> String {
    "us-east-1".to_string()
}

fn default_presign_expiry() -> u64 {
    300
}
