//! File-upload flow.
//!
//! Handlers parse multipart bodies into [`FilePart`] values; this service
//! routes them to local disk or object storage. Multi-file operations
//! abort on the first failure and report the paths saved up to that point
//! alongside the error — nothing already written is rolled back, cleanup
//! is the caller's concern.

use std::collections::HashMap;
use std::time::Duration;

use bytes::Bytes;
use thiserror::Error;
use uuid::Uuid;

use apibase_core::error::AppError;
use apibase_core::result::AppResult;
use apibase_storage::{LocalStore, S3Store};

/// The fixed field names consumed by `upload_many_with_keys_disk`.
pub const REQUIRED_IMAGE_FIELDS: [&str; 2] = ["image0", "image1"];

/// One file extracted from a multipart form.
#[derive(Debug, Clone)]
pub struct FilePart {
    /// Original filename as sent by the client.
    pub file_name: String,
    /// File contents.
    pub bytes: Bytes,
}

/// A multi-file upload that failed partway through.
#[derive(Debug, Error)]
#[error("{source}")]
pub struct PartialUploadError {
    /// Paths written before the failure.
    pub saved: Vec<String>,
    /// The failure that aborted the remaining files.
    #[source]
    pub source: AppError,
}

/// Routes uploaded files to disk or object storage.
#[derive(Clone)]
pub struct UploadService {
    local: LocalStore,
    s3: Option<S3Store>,
    presign_expiry: Duration,
}

impl UploadService {
    /// Create a new upload service. `s3` is `None` when object storage is
    /// disabled in configuration.
    pub fn new(local: LocalStore, s3: Option<S3Store>, presign_expiry_seconds: u64) -> Self {
        Self {
            local,
            s3,
            presign_expiry: Duration::from_secs(presign_expiry_seconds),
        }
    }

    fn s3(&self) -> AppResult<&S3Store> {
        self.s3
            .as_ref()
            .ok_or_else(|| AppError::configuration("Object storage is not configured"))
    }

    /// Store one file in object storage under its original filename and
    /// return a path-style URL. Key collisions silently overwrite.
    pub async fn upload_one(&self, part: FilePart) -> AppResult<String> {
        let s3 = self.s3()?;
        s3.put_object(&part.file_name, part.bytes).await?;
        Ok(s3.object_url(&part.file_name))
    }

    /// Same upload path, but return a time-limited presigned retrieval URL
    /// instead of a static path.
    pub async fn upload_one_presigned(&self, part: FilePart) -> AppResult<String> {
        let s3 = self.s3()?;
        s3.put_object(&part.file_name, part.bytes).await?;
        s3.presign_get(&part.file_name, self.presign_expiry).await
    }

    /// Save one file to local disk under a freshly generated unique name,
    /// preserving the original extension.
    pub async fn upload_one_disk(&self, part: FilePart) -> AppResult<String> {
        let stem = Uuid::new_v4().to_string();
        self.local.save(&stem, &part.file_name, &part.bytes).await
    }

    /// Save every file in `parts` to local disk. The first failure aborts
    /// the remainder.
    pub async fn upload_many_disk(
        &self,
        parts: Vec<FilePart>,
    ) -> Result<Vec<String>, PartialUploadError> {
        let mut saved = Vec::with_capacity(parts.len());
        for part in parts {
            match self.upload_one_disk(part).await {
                Ok(path) => saved.push(path),
                Err(source) => return Err(PartialUploadError { saved, source }),
            }
        }
        Ok(saved)
    }

    /// Save the files under the fixed field names
    /// [`REQUIRED_IMAGE_FIELDS`], in order. A missing field aborts the
    /// remainder; nothing is saved for it.
    pub async fn upload_many_with_keys_disk(
        &self,
        parts: &HashMap<String, FilePart>,
    ) -> Result<Vec<String>, PartialUploadError> {
        let mut saved = Vec::with_capacity(REQUIRED_IMAGE_FIELDS.len());
        for key in REQUIRED_IMAGE_FIELDS {
            let part = match parts.get(key) {
                Some(part) => part.clone(),
                None => {
                    return Err(PartialUploadError {
                        saved,
                        source: AppError::validation(format!("Missing form field '{key}'")),
                    });
                }
            };
            match self.upload_one_disk(part).await {
                Ok(path) => saved.push(path),
                Err(source) => return Err(PartialUploadError { saved, source }),
            }
        }
        Ok(saved)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use apibase_core::error::ErrorKind;

    async fn disk_only_service(dir: &tempfile::TempDir) -> UploadService {
        let local = LocalStore::new(dir.path().to_str().unwrap()).await.unwrap();
        UploadService::new(local, None, 300)
    }

    fn part(name: &str, bytes: &[u8]) -> FilePart {
        FilePart {
            file_name: name.to_string(),
            bytes: Bytes::copy_from_slice(bytes),
        }
    }

    #[tokio::test]
    async fn upload_one_disk_preserves_extension_and_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let service = disk_only_service(&dir).await;

        let payload = b"binary image data";
        let path = service.upload_one_disk(part("x.png", payload)).await.unwrap();

        assert!(path.ends_with(".png"));
        assert_eq!(std::fs::read(&path).unwrap(), payload);
    }

    #[tokio::test]
    async fn upload_one_disk_generates_unique_names() {
        let dir = tempfile::tempdir().unwrap();
        let service = disk_only_service(&dir).await;

        let first = service.upload_one_disk(part("a.txt", b"one")).await.unwrap();
        let second = service.upload_one_disk(part("a.txt", b"two")).await.unwrap();
        assert_ne!(first, second);
    }

    #[tokio::test]
    async fn upload_many_disk_saves_all() {
        let dir = tempfile::tempdir().unwrap();
        let service = disk_only_service(&dir).await;

        let paths = service
            .upload_many_disk(vec![part("a.txt", b"a"), part("b.txt", b"b")])
            .await
            .unwrap();
        assert_eq!(paths.len(), 2);
    }

    #[tokio::test]
    async fn missing_keyed_field_aborts_with_partial_result() {
        let dir = tempfile::tempdir().unwrap();
        let service = disk_only_service(&dir).await;

        let mut parts = HashMap::new();
        parts.insert("image0".to_string(), part("first.jpg", b"jpeg"));
        // "image1" deliberately absent.

        let err = service.upload_many_with_keys_disk(&parts).await.unwrap_err();
        assert_eq!(err.saved.len(), 1);
        assert!(err.saved[0].ends_with(".jpg"));
        assert_eq!(err.source.kind, ErrorKind::Validation);

        // Exactly one file on disk: nothing was written for the missing field.
        let written = std::fs::read_dir(dir.path()).unwrap().count();
        assert_eq!(written, 1);
    }

    #[tokio::test]
    async fn both_keyed_fields_save_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let service = disk_only_service(&dir).await;

        let mut parts = HashMap::new();
        parts.insert("image0".to_string(), part("a.png", b"a"));
        parts.insert("image1".to_string(), part("b.gif", b"b"));

        let paths = service.upload_many_with_keys_disk(&parts).await.unwrap();
        assert_eq!(paths.len(), 2);
        assert!(paths[0].ends_with(".png"));
        assert!(paths[1].ends_with(".gif"));
    }

    #[tokio::test]
    async fn s3_operations_require_configuration() {
        let dir = tempfile::tempdir().unwrap();
        let service = disk_only_service(&dir).await;

        let err = service.upload_one(part("x.png", b"data")).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::Configuration);
    }
}
