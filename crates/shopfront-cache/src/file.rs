use crate::store::{KeyValueStore, Result, StoreError};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Plain JSON file store, for people who like to `cat` their data
///
/// The whole file is one JSON object of string values. Every `set` rewrites it
/// through a temp file + rename so readers never see a torn write.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> Result<BTreeMap<String, String>> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }

        let contents = std::fs::read_to_string(&self.path)?;
        if contents.trim().is_empty() {
            return Ok(BTreeMap::new());
        }

        Ok(serde_json::from_str(&contents)?)
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.read_all()?.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        // A corrupt file reads as absent, so writing over it is the recovery path
        let mut entries = match self.read_all() {
            Ok(entries) => entries,
            Err(StoreError::Corrupt(e)) => {
                warn!("Overwriting corrupt store {}: {}", self.path.display(), e);
                BTreeMap::new()
            }
            Err(e) => return Err(e),
        };
        entries.insert(key.to_string(), value.to_string());

        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let tmp = self.path.with_extension("tmp");
        std::fs::write(&tmp, serde_json::to_string_pretty(&entries)?)?;
        std::fs::rename(&tmp, &self.path)?;

        debug!("Wrote '{}' to {}", key, self.path.display());
        Ok(())
    }
}
