//! Magnetic docking decision engine.
//!
//! This module decides whether and how a dragged window should snap, both
//! for the shell's in-workspace windows and for native top-level windows
//! against the screen work area.
//!
//! # Structure
//!
//! - [`geometry`] - rectangle primitives everything else is built on
//! - [`edge`] - workspace edge proximity detection
//! - [`scanner`] - sibling window dock scanning
//! - [`selector`] - candidate selection, the public preview entry point
//! - [`native`] - OS-level edge detector, cooldown guard, and event stream
//!
//! The in-workspace engine ([`compute_docking_preview`]) is a pure function
//! called on every drag tick; it holds no state and performs no IO. The
//! native side is stateful (the re-entrancy guard) and side-effectful (it
//! repositions windows), which is why the two live in separate submodules.

pub mod constants;
pub mod edge;
pub mod geometry;
pub mod native;
pub mod scanner;
pub mod selector;
pub mod types;

pub use edge::{EdgeCandidate, WorkspaceEdge};
pub use geometry::{Point, Rect};
pub use selector::compute_docking_preview;
pub use types::{DockOpportunity, DockPosition, DockingResult, WindowLayout};
