//! Re-entrancy guard for native edge docking.
//!
//! Applying bounds to a native window fires a move event for that same
//! window, synchronously or a tick later depending on the platform. Without
//! a guard the detector would re-evaluate its own transition and could
//! oscillate between snap positions.
//!
//! The guard is an explicit per-window-id set: a window id is present while
//! that window is `Docking` and absent while it is `Idle`. Entries are
//! inserted when a snap triggers and removed by a scheduled cooldown
//! callback. Removal of an unknown id is a no-op, so a window destroyed
//! mid-cooldown can never corrupt the state of other windows.

use std::sync::Arc;

use dashmap::DashSet;
use tracing::debug;

use super::window::WindowId;

/// Tracks which native windows are currently mid-dock.
///
/// Cheap to clone; clones share the same underlying set, which is how the
/// scheduled cooldown callback reaches the map after the triggering call
/// has returned.
#[derive(Debug, Clone, Default)]
pub struct DockingGuard {
    docking: Arc<DashSet<WindowId>>,
}

impl DockingGuard {
    /// Creates a new guard with no windows mid-dock.
    #[must_use]
    pub fn new() -> Self { Self::default() }

    /// Returns whether a window is currently mid-dock.
    #[must_use]
    pub fn is_docking(&self, id: WindowId) -> bool { self.docking.contains(&id) }

    /// Marks a window as mid-dock.
    ///
    /// Returns `false` if the window was already mid-dock, in which case
    /// the caller must not start another transition.
    pub fn begin(&self, id: WindowId) -> bool {
        let inserted = self.docking.insert(id);
        if !inserted {
            debug!(window = id, "dock already in progress, ignoring");
        }
        inserted
    }

    /// Returns a window to idle.
    ///
    /// No-op when the id is unknown (e.g. the window was destroyed while
    /// its cooldown was pending).
    pub fn clear(&self, id: WindowId) { self.docking.remove(&id); }

    /// Returns the number of windows currently mid-dock.
    #[must_use]
    pub fn active_count(&self) -> usize { self.docking.len() }
}

// ============================================================================
// Tests
// ============================================================================
