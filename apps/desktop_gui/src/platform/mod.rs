//! OS services the controller reaches through traits: clipboard, downloads and
//! the persisted preference store.

mod clipboard;
mod downloads;
mod preferences;

use std::{path::PathBuf, sync::Arc};

use async_trait::async_trait;

pub use clipboard::SystemClipboard;
pub use downloads::DownloadsFolder;
pub use preferences::{FilePreferenceStore, MemoryPreferenceStore};

#[async_trait]
pub trait ClipboardWriter: Send + Sync {
    async fn write_text(&self, text: &str) -> anyhow::Result<()>;
}

pub trait DownloadTarget: Send + Sync {
    /// Writes `content` under `filename` and returns where it landed.
    fn save_text(&self, filename: &str, content: &str) -> anyhow::Result<PathBuf>;
}

/// Flat string key-value store that outlives the process.
pub trait PreferenceStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> anyhow::Result<()>;
}

#[derive(Clone)]
pub struct Platform {
    pub clipboard: Arc<dyn ClipboardWriter>,
    pub downloads: Arc<dyn DownloadTarget>,
    pub preferences: Arc<dyn PreferenceStore>,
}
