//! Native window abstraction.
//!
//! The engine never talks to the window system directly; the shell's
//! platform layer implements [`NativeWindow`] for whatever toolkit it runs
//! on and hands the trait object to the detector. This keeps the geometry
//! engine free of any UI-framework dependency and lets tests drive the
//! detector with plain structs.

use crate::config::AnimationConfig;
use crate::docking::geometry::Rect;

/// Identifier of a native top-level window.
pub type WindowId = u32;

/// Operations the edge-dock detector needs from a native window.
pub trait NativeWindow: Send + Sync {
    /// Returns the window's id.
    fn id(&self) -> WindowId;

    /// Returns the window's current bounds in screen coordinates.
    fn frame(&self) -> Rect;

    /// Returns whether the window is currently OS-maximized.
    ///
    /// Maximized windows are never edge-docked; the OS owns their frame.
    fn is_maximized(&self) -> bool;

    /// Moves and resizes the window.
    ///
    /// Implementations animate the transition according to `animation`.
    /// Applying bounds may fire a re-entrant move event for this window,
    /// synchronously or asynchronously; the caller guards against that.
    fn set_frame(&self, frame: Rect, animation: &AnimationConfig);
}
