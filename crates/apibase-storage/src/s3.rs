//! S3-compatible object store.
//!
//! The client is constructed once at startup and shared by handle; when no
//! static credentials are configured it relies on the SDK's own credential
//! resolution chain.

use std::time::Duration;

use aws_config::{BehaviorVersion, Region};
use aws_sdk_s3::Client;
use aws_sdk_s3::config::Credentials;
use aws_sdk_s3::presigning::PresigningConfig;
use aws_sdk_s3::primitives::ByteStream;
use bytes::Bytes;
use tracing::info;

use apibase_core::config::storage::S3Config;
use apibase_core::error::{AppError, ErrorKind};
use apibase_core::result::AppResult;

/// S3-compatible object store bound to a single bucket.
#[derive(Debug, Clone)]
pub struct S3Store {
    client: Client,
    bucket: String,
    region: String,
    endpoint: String,
}

impl S3Store {
    /// Build the client from configuration.
    pub async fn new(config: &S3Config) -> AppResult<Self> {
        if config.bucket.is_empty() {
            return Err(AppError::configuration("S3 bucket name is not configured"));
        }

        let mut loader = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(config.region.clone()));

        if !config.access_key.is_empty() && !config.secret_key.is_empty() {
            loader = loader.credentials_provider(Credentials::new(
                config.access_key.clone(),
                config.secret_key.clone(),
                None,
                None,
                "configured",
            ));
        }

        let sdk_config = loader.load().await;

        let mut builder = aws_sdk_s3::config::Builder::from(&sdk_config).force_path_style(true);
        if !config.endpoint.is_empty() {
            builder = builder.endpoint_url(config.endpoint.as_str());
        }

        info!(
            region = %config.region,
            endpoint = %config.endpoint,
            bucket = %config.bucket,
            "Initialized S3 client"
        );

        Ok(Self {
            client: Client::from_conf(builder.build()),
            bucket: config.bucket.clone(),
            region: config.region.clone(),
            endpoint: config.endpoint.clone(),
        })
    }

    /// Store an object under `key`. An existing object under the same key
    /// is silently overwritten.
    pub async fn put_object(&self, key: &str, data: Bytes) -> AppResult<()> {
        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(key)
            .body(ByteStream::from(data))
            .send()
            .await
            .map_err(|e| {
                AppError::with_source(
                    ErrorKind::Storage,
                    format!("Failed to store object '{key}'"),
                    e,
                )
            })?;
        Ok(())
    }

    /// Issue a time-limited presigned retrieval URL for `key`.
    pub async fn presign_get(&self, key: &str, expires_in: Duration) -> AppResult<String> {
        let presigning = PresigningConfig::expires_in(expires_in).map_err(|e| {
            AppError::with_source(ErrorKind::Storage, "Invalid presign expiry", e)
        })?;

        let request = self
            .client
            .get_object()
            .bucket(&self.bucket)
            .key(key)
            .presigned(presigning)
            .await
            .map_err(|e| {
                AppError::with_source(
                    ErrorKind::Storage,
                    format!("Failed to presign object '{key}'"),
                    e,
                )
            })?;

        Ok(request.uri().to_string())
    }

    /// Path-style URL for a stored object (no presigning, no existence
    /// check).
    pub fn object_url(&self, key: &str) -> String {
        object_url(&self.endpoint, &self.region, &self.bucket, key)
    }
}

/// Build a path-style object URL, preferring the configured endpoint
/// override over the public AWS form.
fn object_url(endpoint: &str, region: &str, bucket: &str, key: &str) -> String {
    if endpoint.is_empty() {
        format!("https://s3.{region}.amazonaws.com/{bucket}/{key}")
    } else {
        format!("{}/{bucket}/{key}", endpoint.trim_end_matches('/'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aws_url_is_path_style() {
        assert_eq!(
            object_url("", "us-east-1", "media", "photo.png"),
            "https://s3.us-east-1.amazonaws.com/media/photo.png"
        );
    }

    #[test]
    fn endpoint_override_wins() {
        assert_eq!(
            object_url("http://localhost:9000/", "us-east-1", "media", "photo.png"),
            "http://localhost:9000/media/photo.png"
        );
    }
}
