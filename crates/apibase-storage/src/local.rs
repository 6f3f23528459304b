//! Local filesystem store for uploaded files.

use std::path::{Path, PathBuf};

use tokio::fs;
use tracing::debug;

use apibase_core::error::{AppError, ErrorKind};
use apibase_core::result::AppResult;

/// Local filesystem store rooted at the uploads directory.
#[derive(Debug, Clone)]
pub struct LocalStore {
    root: PathBuf,
}

impl LocalStore {
    /// Create a new store rooted at the given path, creating the directory
    /// if absent.
    pub async fn new(root_path: &str) -> AppResult<Self> {
        let root = PathBuf::from(root_path);
        fs::create_dir_all(&root).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to create uploads root: {}", root.display()),
                e,
            )
        })?;
        Ok(Self { root })
    }

    /// The uploads root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Save `data` under `stem`, preserving the extension of
    /// `original_name`. Returns the path of the written file.
    pub async fn save(&self, stem: &str, original_name: &str, data: &[u8]) -> AppResult<String> {
        let file_name = match Path::new(original_name).extension() {
            Some(ext) => format!("{stem}.{}", ext.to_string_lossy()),
            None => stem.to_string(),
        };
        let path = self.root.join(&file_name);

        fs::write(&path, data).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to write file: {}", path.display()),
                e,
            )
        })?;

        debug!(path = %path.display(), bytes = data.len(), "Saved uploaded file");
        Ok(path.to_string_lossy().into_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn save_preserves_extension_and_content() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalStore::new(dir.path().to_str().unwrap()).await.unwrap();

        let payload = b"\x89PNG fake image bytes";
        let path = store.save("abc123", "x.png", payload).await.unwrap();

        assert!(path.ends_with("abc123.png"));
        let written = std::fs::read(&path).unwrap();
        assert_eq!(written, payload);
    }

    #[tokio::test]
    async fn save_without_extension_keeps_bare_stem() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalStore::new(dir.path().to_str().unwrap()).await.unwrap();

        let path = store.save("abc123", "README", b"text").await.unwrap();
        assert!(path.ends_with("abc123"));
    }

    #[tokio::test]
    async fn new_creates_missing_root() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a/b/uploads");
        let store = LocalStore::new(nested.to_str().unwrap()).await.unwrap();
        assert!(store.root().is_dir());
    }
}
