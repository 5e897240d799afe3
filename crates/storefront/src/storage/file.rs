//! File-backed store: one JSON file per key in a data directory.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::{KeyValueStore, StorageError};

/// A [`KeyValueStore`] that keeps each slot in `<dir>/<key>.json`.
///
/// Writes go to a temporary sibling and are renamed into place, so a
/// reader never sees a half-written slot. The directory is created on the
/// first write.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the file backing `key`.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::InvalidKey`] unless the key is a non-empty
    /// run of ASCII letters, digits, `-`, `_` or `.` that does not start
    /// with a dot.
    pub fn slot_path(&self, key: &str) -> Result<PathBuf, StorageError> {
        let valid = !key.is_empty()
            && !key.starts_with('.')
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'));
        if !valid {
            return Err(StorageError::InvalidKey(key.to_owned()));
        }
        Ok(self.dir.join(format!("{key}.json")))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.slot_path(key)?;
        match fs::read_to_string(&path) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        let path = self.slot_path(key)?;
        fs::create_dir_all(&self.dir)?;
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, value)?;
        fs::rename(&tmp, &path)?;
        debug!(path = %path.display(), bytes = value.len(), "Slot written");
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        let path = self.slot_path(key)?;
        match fs::remove_file(&path) {
            Ok(()) => {
                debug!(path = %path.display(), "Slot removed");
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_roundtrip_on_disk() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(dir.path().join("nested"));

        assert_eq!(store.get("w_cart").unwrap(), None);
        store.set("w_cart", "[]").unwrap();
        assert_eq!(store.get("w_cart").unwrap().as_deref(), Some("[]"));
        assert!(dir.path().join("nested/w_cart.json").exists());
        assert!(!dir.path().join("nested/w_cart.json.tmp").exists());

        store.remove("w_cart").unwrap();
        assert_eq!(store.get("w_cart").unwrap(), None);
        store.remove("w_cart").unwrap();
    }

    #[test]
    fn test_rejects_path_like_keys() {
        let store = FileStore::new("/tmp/unused");
        for key in ["", "../etc", "a/b", ".hidden", "sp ace"] {
            assert!(
                matches!(store.slot_path(key), Err(StorageError::InvalidKey(_))),
                "{key:?} should be rejected"
            );
        }
        assert!(store.slot_path("w_cart.v1").is_ok());
    }
}
