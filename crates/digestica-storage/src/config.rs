use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::StorageError;
use crate::store::FileStore;

/// Directory name under the platform data directory.
const APP_DIR: &str = "com.digestica.app";

/// Where the file-backed store keeps its blobs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageConfig {
    pub data_dir: PathBuf,
}

impl StorageConfig {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// `<platform data dir>/com.digestica.app`.
    pub fn default_location() -> Result<Self, StorageError> {
        let base = dirs::data_dir().ok_or(StorageError::NoDataDir)?;
        Ok(Self::new(base.join(APP_DIR)))
    }

    pub fn open(&self) -> FileStore {
        tracing::debug!(path = %self.data_dir.display(), "opening file store");
        FileStore::new(&self.data_dir)
    }
}
