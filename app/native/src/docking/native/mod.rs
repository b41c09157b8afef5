//! OS-level edge docking for native top-level windows.
//!
//! A structurally similar but coarser engine than the in-workspace one:
//! native windows snap against the display work area only (fullscreen,
//! left half, right half), and every applied snap arms a short cooldown
//! that absorbs the re-entrant move event the platform fires in response
//! to the engine's own bounds change.
//!
//! - [`detector`] - pure classification of bounds against the work area
//! - [`guard`] - per-window-id re-entrancy guard
//! - [`scheduler`] - injectable cooldown timing
//! - [`manager`] - the side-effectful orchestrator
//! - [`events`] - the event stream fed by the platform layer
//! - [`window`] - the trait seam to the window system

pub mod detector;
pub mod events;
pub mod guard;
pub mod manager;
pub mod scheduler;
pub mod window;

pub use detector::{EdgeDockKind, classify, target_frame};
pub use events::{NativeWindowEvent, run_event_loop};
pub use guard::DockingGuard;
pub use manager::EdgeDockManager;
pub use scheduler::{CooldownScheduler, ManualScheduler, ScheduledCallback, TokioScheduler};
pub use window::{NativeWindow, WindowId};
