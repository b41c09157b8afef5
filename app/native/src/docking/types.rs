//! Core data types for the docking engine.
//!
//! These are the wire shapes shared with the shell frontend: window layouts
//! arrive from the shell's window collection as plain data and docking
//! results go back the same way. Field naming follows the frontend's
//! camelCase convention, like every other payload the shell exchanges.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::constants::capacity::OPPORTUNITIES_INLINE_CAP;
use super::geometry::Rect;

// ============================================================================
// Window Layout
// ============================================================================

/// The layout of a single workspace window, owned by the shell.
///
/// The docking engine only ever reads these; the shell mutates them from its
/// drag/resize handlers and when committing a [`DockingResult`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WindowLayout {
    /// Unique id, stable for the window's lifetime.
    pub id: String,
    /// X coordinate in workspace-local pixels.
    pub x: f64,
    /// Y coordinate in workspace-local pixels.
    pub y: f64,
    /// Window width in pixels.
    pub width: f64,
    /// Window height in pixels.
    pub height: f64,
    /// Whether this window is the active one in the shell.
    ///
    /// Sibling-set metadata owned by the shell; the engine ignores it.
    #[serde(default)]
    pub is_active: bool,
}

impl WindowLayout {
    /// Creates a new window layout.
    #[must_use]
    pub fn new(id: impl Into<String>, x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            id: id.into(),
            x,
            y,
            width,
            height,
            is_active: false,
        }
    }

    /// Returns the window's frame as a rectangle.
    #[must_use]
    pub const fn frame(&self) -> Rect {
        Rect {
            x: self.x,
            y: self.y,
            width: self.width,
            height: self.height,
        }
    }
}

// ============================================================================
// Dock Position
// ============================================================================

/// Where a window docks relative to a sibling window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DockPosition {
    /// To the left of the target, forming a vertical split.
    Left,
    /// To the right of the target, forming a vertical split.
    Right,
    /// Above the target, forming a horizontal split.
    Top,
    /// Below the target, forming a horizontal split.
    Bottom,
    /// Stacked over the target (tabbed arrangement).
    Center,
}

impl DockPosition {
    /// All positions in scan order.
    ///
    /// This order is load-bearing: equal-score candidates are resolved to
    /// the first one discovered, scanning positions in this sequence.
    pub const SCAN_ORDER: [DockPosition; 5] = [
        DockPosition::Left,
        DockPosition::Right,
        DockPosition::Top,
        DockPosition::Bottom,
        DockPosition::Center,
    ];
}

// ============================================================================
// Docking Result
// ============================================================================

/// The outcome of one docking evaluation: the target rectangle plus
/// classification metadata.
///
/// Ephemeral and advisory: recomputed every drag tick, never persisted.
/// The shell draws a preview from it and commits the rectangle into the
/// dragged window's [`WindowLayout`] on drop.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DockingResult {
    /// Target x coordinate.
    pub x: f64,
    /// Target y coordinate.
    pub y: f64,
    /// Target width.
    pub width: f64,
    /// Target height.
    pub height: f64,
    /// Id of the sibling window docked against; `None` for edge docks.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dock_target_id: Option<String>,
    /// Position relative to the sibling; `None` for edge docks.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dock_position: Option<DockPosition>,
}

impl DockingResult {
    /// Creates an edge-dock result (no target window).
    #[must_use]
    pub const fn edge(frame: Rect) -> Self {
        Self {
            x: frame.x,
            y: frame.y,
            width: frame.width,
            height: frame.height,
            dock_target_id: None,
            dock_position: None,
        }
    }

    /// Creates a sibling-dock result.
    #[must_use]
    pub const fn sibling(frame: Rect, target_id: String, position: DockPosition) -> Self {
        Self {
            x: frame.x,
            y: frame.y,
            width: frame.width,
            height: frame.height,
            dock_target_id: Some(target_id),
            dock_position: Some(position),
        }
    }

    /// Returns the result's frame as a rectangle.
    #[must_use]
    pub const fn frame(&self) -> Rect {
        Rect {
            x: self.x,
            y: self.y,
            width: self.width,
            height: self.height,
        }
    }
}

// ============================================================================
// Dock Opportunity
// ============================================================================

/// A candidate sibling dock discovered by the scanner.
///
/// Exists only during one evaluation call; the selector reduces the pool to
/// at most one opportunity.
#[derive(Debug, Clone, PartialEq)]
pub struct DockOpportunity {
    /// Id of the sibling window this opportunity docks against.
    pub target_id: String,
    /// Position relative to the sibling.
    pub position: DockPosition,
    /// The frame the dragged window would snap to.
    pub frame: Rect,
    /// Proximity distance in pixels; lower is better.
    pub score: f64,
}

/// Pool of opportunities collected during one scan.
///
/// Inline capacity covers the common case of a handful of nearby siblings
/// without heap allocation on the per-tick hot path.
pub type OpportunityPool = SmallVec<[DockOpportunity; OPPORTUNITIES_INLINE_CAP]>;

// ============================================================================
// Tests
// ============================================================================
