//! File-backed key/value store - one JSON file per key

use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use super::{KeyValueStore, Result, StorageError};

#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key);
        if !path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&path).map_err(|source| StorageError::Read {
            path: path.clone(),
            source,
        })?;
        if content.trim().is_empty() {
            return Ok(None);
        }

        Ok(Some(content))
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let path = self.path_for(key);

        if path.exists() {
            let backup_path = path.with_extension("json.bak");
            if let Err(e) = fs::copy(&path, &backup_path) {
                warn!("Failed to create backup of {}: {}", path.display(), e);
            }
        } else {
            fs::create_dir_all(&self.dir).map_err(|source| StorageError::Write {
                path: self.dir.clone(),
                source,
            })?;
        }

        fs::write(&path, value).map_err(|source| StorageError::Write {
            path: path.clone(),
            source,
        })?;
        debug!("Wrote {} bytes to {}", value.len(), path.display());
        Ok(())
    }
}
