use super::types::{ImageRef, extension_for};
use crate::Result;
use async_trait::async_trait;
use chrono::Utc;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Turns generated image bytes into something the reply capability can send.
#[async_trait]
pub trait ImageStore: Send + Sync {
    async fn persist(&self, data: &[u8], mime_type: &str) -> Result<ImageRef>;
}

/// Writes each image to `<dir>/image_<unix-millis>.<ext>`.
///
/// Files are never read back or cleaned up. Two images generated within the
/// same millisecond share a name and the later write wins.
pub struct FileImageStore {
    dir: PathBuf,
}

impl FileImageStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn file_name(mime_type: &str) -> String {
        format!(
            "image_{}.{}",
            Utc::now().timestamp_millis(),
            extension_for(mime_type)
        )
    }
}

#[async_trait]
impl ImageStore for FileImageStore {
    async fn persist(&self, data: &[u8], mime_type: &str) -> Result<ImageRef> {
        tokio::fs::create_dir_all(&self.dir).await?;

        let path = self.dir.join(Self::file_name(mime_type));
        tokio::fs::write(&path, data).await?;

        debug!("Saved generated image ({} bytes) to {}", data.len(), path.display());
        Ok(ImageRef::File(path))
    }
}

/// Hands the bytes straight back for transports that upload from memory.
#[derive(Debug, Default)]
pub struct MemoryImageStore;

#[async_trait]
impl ImageStore for MemoryImageStore {
    async fn persist(&self, data: &[u8], mime_type: &str) -> Result<ImageRef> {
        Ok(ImageRef::memory(data, mime_type))
    }
}
