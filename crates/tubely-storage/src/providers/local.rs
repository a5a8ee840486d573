//! Local filesystem blob store.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use futures::stream::StreamExt;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::{debug, warn};

use tubely_core::error::{AppError, ErrorKind};
use tubely_core::result::AppResult;
use tubely_core::traits::storage::{BlobStore, ByteStream};

/// Stores thumbnails as flat files under a root directory.
#[derive(Debug, Clone)]
pub struct LocalBlobStore {
    /// Directory every file is written into.
    root: PathBuf,
    /// Public URL prefix of `root`, without a trailing slash.
    base_url: String,
}

impl LocalBlobStore {
    /// Create a store rooted at `root_path`, creating the directory if needed.
    pub async fn new(root_path: impl AsRef<Path>, base_url: &str) -> AppResult<Self> {
        let root = root_path.as_ref().to_path_buf();
        fs::create_dir_all(&root).await.map_err(|e| {
            AppError::with_source(ErrorKind::Storage, "Failed to create assets root", e)
        })?;
        debug!(root = %root.display(), "Local blob store ready");

        Ok(Self {
            root,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// The directory files are written into.
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn resolve(&self, name: &str) -> AppResult<PathBuf> {
        let flat = !name.is_empty()
            && name != "."
            && name != ".."
            && !name.contains(['/', '\\']);
        if !flat {
            return Err(AppError::storage("Invalid file name"));
        }
        Ok(self.root.join(name))
    }
}

#[async_trait]
impl BlobStore for LocalBlobStore {
    fn provider_type(&self) -> &str {
        "local"
    }

    fn url_for(&self, name: &str) -> String {
        format!("{}/{}", self.base_url, name)
    }

    async fn write_stream(&self, name: &str, mut stream: ByteStream<'_>) -> AppResult<u64> {
        let path = self.resolve(name)?;

        let mut file = fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&path)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Storage, "Failed to create file", e))?;

        let mut total_bytes = 0u64;
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(|e| {
                warn!(name, bytes = total_bytes, "Upload stream failed mid-copy");
                AppError::with_source(ErrorKind::Storage, "Stream read error", e)
            })?;
            total_bytes += chunk.len() as u64;
            file.write_all(&chunk).await.map_err(|e| {
                AppError::with_source(ErrorKind::Storage, "Failed to write chunk", e)
            })?;
        }

        file.flush()
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Storage, "Failed to flush file", e))?;

        debug!(name, bytes = total_bytes, "Wrote file");
        Ok(total_bytes)
    }

    async fn health_check(&self) -> AppResult<bool> {
        Ok(fs::metadata(&self.root)
            .await
            .map(|m| m.is_dir())
            .unwrap_or(false))
    }
}
