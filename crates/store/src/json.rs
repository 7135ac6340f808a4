//! Key-value store backed by one JSON file per key.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, info};

use crate::error::StoreError;

/// A directory of `<key>.json` files.
#[derive(Debug, Clone)]
pub struct JsonStore {
    root: PathBuf,
}

impl JsonStore {
    /// Opens the store at `dir`, creating the directory if needed.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let root = dir.into();
        fs::create_dir_all(&root).map_err(|source| StoreError::CreateDir {
            path: root.clone(),
            source,
        })?;
        Ok(Self { root })
    }

    /// The data directory.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of the file holding `key`.
    pub fn path_of(&self, key: &str) -> Result<PathBuf, StoreError> {
        validate_key(key)?;
        Ok(self.root.join(format!("{key}.json")))
    }

    /// Loads `key`, or returns `None` if it was never saved.
    pub fn load<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StoreError> {
        let path = self.path_of(key)?;
        let raw = match fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(StoreError::io(key, err)),
        };
        let value = serde_json::from_str(&raw).map_err(|err| StoreError::json(key, err))?;
        debug!(key, "Loaded key");
        Ok(Some(value))
    }

    /// Loads `key`, falling back to `default` when it was never saved.
    pub fn load_or_default<T: DeserializeOwned>(
        &self,
        key: &str,
        default: T,
    ) -> Result<T, StoreError> {
        match self.load(key)? {
            Some(value) => Ok(value),
            None => {
                info!(key, "Key not found, using default");
                Ok(default)
            }
        }
    }

    /// Loads `key`, saving `default` under it first when it was never saved.
    pub fn load_or_init<T: Serialize + DeserializeOwned>(
        &self,
        key: &str,
        default: T,
    ) -> Result<T, StoreError> {
        match self.load(key)? {
            Some(value) => Ok(value),
            None => {
                info!(key, "Key not found, storing default");
                self.save(key, &default)?;
                Ok(default)
            }
        }
    }

    /// Writes `value` under `key` as pretty JSON.
    ///
    /// The file is replaced through a rename so readers never see a
    /// partial write.
    pub fn save<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<(), StoreError> {
        let path = self.path_of(key)?;
        let json = serde_json::to_string_pretty(value).map_err(|err| StoreError::json(key, err))?;

        let staging = path.with_extension("json.tmp");
        fs::write(&staging, json).map_err(|err| StoreError::io(key, err))?;
        fs::rename(&staging, &path).map_err(|err| StoreError::io(key, err))?;

        debug!(key, path = %path.display(), "Saved key");
        Ok(())
    }

    /// Returns true if `key` has been saved.
    pub fn contains(&self, key: &str) -> Result<bool, StoreError> {
        Ok(self.path_of(key)?.is_file())
    }
}

fn validate_key(key: &str) -> Result<(), StoreError> {
    let valid = !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
    if valid {
        Ok(())
    } else {
        Err(StoreError::InvalidKey(key.to_string()))
    }
}
