mod images;
mod types;

pub use images::{FileImageStore, ImageStore, MemoryImageStore};
pub use types::{ImageRef, extension_for};

use crate::config::{StorageConfig, StorageMode};
use std::sync::Arc;

pub fn create_image_store(config: &StorageConfig) -> Arc<dyn ImageStore> {
    match config.mode {
        StorageMode::File => Arc::new(FileImageStore::new(&config.downloads_dir)),
        StorageMode::Memory => Arc::new(MemoryImageStore),
    }
}
