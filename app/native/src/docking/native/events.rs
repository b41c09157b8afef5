//! Native window event stream.
//!
//! The platform layer translates its window-system callbacks into
//! [`NativeWindowEvent`] values and sends them down an mpsc channel; the
//! manager consumes them on the shell's runtime. Modeling the hooks as an
//! explicit stream keeps the detector decoupled from any window toolkit
//! and makes the event order testable.

use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::debug;

use super::manager::EdgeDockManager;
use super::scheduler::CooldownScheduler;
use super::window::{NativeWindow, WindowId};
use crate::docking::geometry::Rect;

/// An event from the native windowing layer.
#[derive(Clone)]
pub enum NativeWindowEvent {
    /// A window was moved by the user or the system.
    Moved {
        /// The moved window.
        window: Arc<dyn NativeWindow>,
        /// Work area of the display the window is on.
        work_area: Rect,
    },
    /// A window was destroyed.
    Destroyed {
        /// Id of the destroyed window.
        id: WindowId,
    },
}

impl std::fmt::Debug for NativeWindowEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Moved { window, work_area } => f
                .debug_struct("Moved")
                .field("window", &window.id())
                .field("work_area", work_area)
                .finish(),
            Self::Destroyed { id } => f.debug_struct("Destroyed").field("id", id).finish(),
        }
    }
}

/// Consumes native window events until the sending side closes.
///
/// The shell spawns this once on its runtime and feeds the channel from
/// its window-system callbacks.
pub async fn run_event_loop<S: CooldownScheduler>(
    manager: Arc<EdgeDockManager<S>>,
    mut events: mpsc::Receiver<NativeWindowEvent>,
) {
    while let Some(event) = events.recv().await {
        manager.handle_event(event);
    }
    debug!("native window event stream closed");
}

// ============================================================================
// Tests
// ============================================================================
