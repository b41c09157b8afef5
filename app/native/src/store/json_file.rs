//! File-backed keyed store.
//!
//! Persists each key as one JSON document under the application data
//! directory, mirroring the simple key-value storage the shell frontend
//! uses. Values are opaque JSON strings; typing lives in
//! [`LayoutStore`](super::LayoutStore).

use std::path::{Path, PathBuf};

use tracing::debug;

use super::KeyedStore;
use crate::constants::APP_ID;
use crate::error::SnapdockError;

/// Keyed store writing one `<key>.json` file per key.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    /// Creates a store rooted at the given directory.
    ///
    /// The directory is created lazily on first write.
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self { Self { dir: dir.into() } }

    /// Creates a store rooted at the platform data directory.
    ///
    /// Falls back to `/tmp/{APP_ID}` when no data directory is available.
    #[must_use]
    pub fn in_data_dir() -> Self {
        let dir = dirs::data_dir().map_or_else(
            || PathBuf::from(format!("/tmp/{APP_ID}")),
            |data| data.join(APP_ID),
        );
        Self::new(dir)
    }

    /// Returns the directory this store writes into.
    #[must_use]
    pub fn dir(&self) -> &Path { &self.dir }

    fn path_for(&self, key: &str) -> PathBuf { self.dir.join(format!("{key}.json")) }
}

impl KeyedStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<String>, SnapdockError> {
        match std::fs::read_to_string(self.path_for(key)) {
            Ok(value) => Ok(Some(value)),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), SnapdockError> {
        std::fs::create_dir_all(&self.dir)?;
        std::fs::write(self.path_for(key), value)?;
        debug!(key, dir = %self.dir.display(), "stored value");
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), SnapdockError> {
        match std::fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
