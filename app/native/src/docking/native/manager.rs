//! Edge dock manager for native windows.
//!
//! Ties the pieces of the OS-level detector together: classification
//! against the work area, the per-window re-entrancy guard, and the
//! cooldown that disarms it. This is the only part of the engine with side
//! effects: it repositions windows through the [`NativeWindow`] trait.
//!
//! State machine per window id: `Idle -> Docking -> Idle`. A move event
//! for a window already in `Docking` is dropped, which absorbs the move
//! callback the platform fires in response to the manager's own
//! `set_frame` call. The guard is armed before `set_frame` runs and is
//! only cleared by the scheduled cooldown, never synchronously.

use std::time::Duration;

use tracing::{debug, trace};

use super::detector::{EdgeDockKind, classify, target_frame};
use super::events::NativeWindowEvent;
use super::guard::DockingGuard;
use super::scheduler::CooldownScheduler;
use super::window::{NativeWindow, WindowId};
use crate::config::SharedConfig;
use crate::docking::constants::timing::DOCK_COOLDOWN_MS;
use crate::docking::geometry::Rect;

/// Drives edge docking for native top-level windows.
pub struct EdgeDockManager<S: CooldownScheduler> {
    guard: DockingGuard,
    scheduler: S,
    config: SharedConfig,
}

impl<S: CooldownScheduler> EdgeDockManager<S> {
    /// Creates a manager with the given configuration and scheduler.
    #[must_use]
    pub fn new(config: SharedConfig, scheduler: S) -> Self {
        Self {
            guard: DockingGuard::new(),
            scheduler,
            config,
        }
    }

    /// Returns the re-entrancy guard.
    #[must_use]
    pub const fn guard(&self) -> &DockingGuard { &self.guard }

    /// Handles one event from the native windowing layer.
    pub fn handle_event(&self, event: NativeWindowEvent) {
        match event {
            NativeWindowEvent::Moved { window, work_area } => {
                self.detect_and_apply(window.as_ref(), &work_area);
            }
            NativeWindowEvent::Destroyed { id } => self.handle_destroyed(id),
        }
    }

    /// Evaluates a native window move and applies the edge dock, if any.
    ///
    /// Returns the applied classification, or `None` when the event was
    /// ignored (mid-dock or maximized) or no edge was in range. On a
    /// trigger the window enters `Docking`, its bounds are applied, and the
    /// cooldown is armed.
    pub fn detect_and_apply(
        &self,
        window: &dyn NativeWindow,
        work_area: &Rect,
    ) -> Option<EdgeDockKind> {
        let id = window.id();

        if self.guard.is_docking(id) {
            trace!(window = id, "move ignored, dock in progress");
            return None;
        }

        if window.is_maximized() {
            trace!(window = id, "move ignored, window is maximized");
            return None;
        }

        let config = self.config.snapshot();
        let kind = classify(&window.frame(), work_area, config.edge_threshold)?;

        if !self.guard.begin(id) {
            return None;
        }

        let target = target_frame(kind, work_area);
        debug!(window = id, kind = ?kind, ?target, "edge dock triggered");
        window.set_frame(target, &config.animation);

        // The clear runs after the cooldown, keyed by id: a no-op if the
        // window is destroyed in the meantime.
        let guard = self.guard.clone();
        self.scheduler.schedule(
            Duration::from_millis(DOCK_COOLDOWN_MS),
            Box::new(move || guard.clear(id)),
        );

        Some(kind)
    }

    /// Forgets a destroyed window.
    ///
    /// Any pending cooldown clear for the id becomes a no-op.
    pub fn handle_destroyed(&self, id: WindowId) {
        debug!(window = id, "window destroyed, clearing dock state");
        self.guard.clear(id);
    }
}

// ============================================================================
// Tests
// ============================================================================
