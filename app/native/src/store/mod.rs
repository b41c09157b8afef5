//! Layout persistence interface.
//!
//! The shell persists window layouts and the active layout id as JSON
//! documents in a simple keyed store. The docking engine never touches
//! storage from its decision paths (it receives layouts as plain data),
//! but the storage contract lives here so both sides agree on keys and
//! shapes.
//!
//! [`KeyedStore`] is the collaborator seam; [`JsonFileStore`] is the
//! file-backed implementation the native shell uses, and [`MemoryStore`]
//! backs tests. [`LayoutStore`] is the typed wrapper over either.

mod json_file;

use std::collections::HashMap;

use parking_lot::Mutex;
use tracing::warn;

pub use json_file::JsonFileStore;

use crate::docking::types::WindowLayout;
use crate::error::SnapdockError;

/// Store key holding the serialized `Vec<WindowLayout>`.
pub const LAYOUTS_KEY: &str = "layouts";

/// Store key holding the active layout id.
pub const ACTIVE_LAYOUT_KEY: &str = "active-layout";

// ============================================================================
// Keyed Store
// ============================================================================

/// A minimal keyed JSON store.
///
/// Values are opaque JSON strings; callers own the schema per key.
pub trait KeyedStore: Send + Sync {
    /// Returns the value for a key, or `None` when absent.
    ///
    /// # Errors
    ///
    /// Returns an error when the underlying storage fails to read.
    fn get(&self, key: &str) -> Result<Option<String>, SnapdockError>;

    /// Writes the value for a key, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error when the underlying storage fails to write.
    fn set(&self, key: &str, value: &str) -> Result<(), SnapdockError>;

    /// Removes a key. Removing an absent key is a no-op.
    ///
    /// # Errors
    ///
    /// Returns an error when the underlying storage fails to delete.
    fn remove(&self, key: &str) -> Result<(), SnapdockError>;
}

/// In-memory keyed store for tests and headless embedding.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    /// Creates an empty in-memory store.
    #[must_use]
    pub fn new() -> Self { Self::default() }
}

impl KeyedStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, SnapdockError> {
        Ok(self.values.lock().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), SnapdockError> {
        self.values.lock().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), SnapdockError> {
        self.values.lock().remove(key);
        Ok(())
    }
}

// ============================================================================
// Layout Store
// ============================================================================

/// Typed layout persistence over any [`KeyedStore`].
#[derive(Debug)]
pub struct LayoutStore<S: KeyedStore> {
    store: S,
}

impl<S: KeyedStore> LayoutStore<S> {
    /// Creates a layout store over the given backend.
    #[must_use]
    pub const fn new(store: S) -> Self { Self { store } }

    /// Persists the full window layout collection.
    ///
    /// # Errors
    ///
    /// Returns an error when serialization or the backend write fails.
    pub fn save_layouts(&self, layouts: &[WindowLayout]) -> Result<(), SnapdockError> {
        let json = serde_json::to_string(layouts)?;
        self.store.set(LAYOUTS_KEY, &json)
    }

    /// Loads the persisted window layouts.
    ///
    /// An absent key yields an empty collection. A corrupt document is
    /// logged and treated as absent rather than propagated, so one bad
    /// write cannot brick the shell at startup.
    ///
    /// # Errors
    ///
    /// Returns an error when the backend read fails.
    pub fn load_layouts(&self) -> Result<Vec<WindowLayout>, SnapdockError> {
        let Some(json) = self.store.get(LAYOUTS_KEY)? else {
            return Ok(Vec::new());
        };

        match serde_json::from_str(&json) {
            Ok(layouts) => Ok(layouts),
            Err(err) => {
                warn!(error = %err, "discarding corrupt layout document");
                Ok(Vec::new())
            }
        }
    }

    /// Persists the active layout id.
    ///
    /// # Errors
    ///
    /// Returns an error when the backend write fails.
    pub fn save_active_layout(&self, id: &str) -> Result<(), SnapdockError> {
        let json = serde_json::to_string(id)?;
        self.store.set(ACTIVE_LAYOUT_KEY, &json)
    }

    /// Loads the active layout id, if one was persisted.
    ///
    /// # Errors
    ///
    /// Returns an error when the backend read fails.
    pub fn load_active_layout(&self) -> Result<Option<String>, SnapdockError> {
        let Some(json) = self.store.get(ACTIVE_LAYOUT_KEY)? else {
            return Ok(None);
        };

        match serde_json::from_str(&json) {
            Ok(id) => Ok(Some(id)),
            Err(err) => {
                warn!(error = %err, "discarding corrupt active layout id");
                Ok(None)
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
