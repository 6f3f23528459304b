//! Response DTOs.

use serde::{Deserialize, Serialize};

/// Simple message response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Message.
    pub message: String,
}

/// Single-file upload result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadResponse {
    /// Resource locator: filesystem path, object URL, or presigned URL.
    pub path: String,
}

/// Multi-file upload result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadManyResponse {
    /// Resource locators in upload order.
    pub paths: Vec<String>,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status.
    pub status: String,
    /// Version.
    pub version: String,
}

/// Detailed health response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetailedHealthResponse {
    /// Overall status.
    pub status: String,
    /// Database status: `"up"` or `"down"`.
    pub database: String,
}
