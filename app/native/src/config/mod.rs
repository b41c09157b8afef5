//! Configuration module for the docking engine.
//!
//! Configuration loading, file formats, and watching belong to the shell;
//! the engine receives a [`DockingConfig`] as plain data and exposes it
//! through a [`SharedConfig`] handle so thresholds can be adjusted at
//! runtime without restarting the engine.

mod types;

use std::sync::Arc;

use parking_lot::RwLock;

pub use types::{AnimationConfig, DockingConfig, EasingType};

/// Shared, runtime-adjustable configuration handle.
///
/// Cheap to clone; all clones observe the same configuration. Readers take
/// a snapshot per evaluation, so a mid-drag update applies from the next
/// tick onward and never tears a single decision.
#[derive(Debug, Clone, Default)]
pub struct SharedConfig {
    inner: Arc<RwLock<DockingConfig>>,
}

impl SharedConfig {
    /// Creates a handle over the given configuration.
    #[must_use]
    pub fn new(config: DockingConfig) -> Self {
        Self {
            inner: Arc::new(RwLock::new(config)),
        }
    }

    /// Returns a copy of the current configuration.
    #[must_use]
    pub fn snapshot(&self) -> DockingConfig { self.inner.read().clone() }

    /// Applies a mutation to the live configuration.
    pub fn update(&self, apply: impl FnOnce(&mut DockingConfig)) {
        apply(&mut self.inner.write());
    }
}

// ============================================================================
// Tests
// ============================================================================
