//! Workspace edge proximity detection.
//!
//! Given a dragged window and the workspace bounds, finds the nearest
//! workspace edge and its distance. Detection is threshold-free: the
//! selector decides whether the nearest edge is close enough to snap.
//!
//! Edge docks resolve to half-workspace rectangles. Opposite halves use
//! floored/complement arithmetic so a left + right (or top + bottom) pair
//! always tiles the workspace exactly, with no one-pixel rounding gap.

use serde::{Deserialize, Serialize};

use super::geometry::Rect;

// ============================================================================
// Types
// ============================================================================

/// One of the four workspace edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkspaceEdge {
    /// The left workspace boundary.
    Left,
    /// The right workspace boundary.
    Right,
    /// The top workspace boundary.
    Top,
    /// The bottom workspace boundary.
    Bottom,
}

/// The nearest workspace edge and its distance from the dragged window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgeCandidate {
    /// The nearest edge.
    pub edge: WorkspaceEdge,
    /// Absolute pixel distance between the window edge and workspace edge.
    pub distance: f64,
}

// ============================================================================
// Detection
// ============================================================================

/// Finds the workspace edge nearest to the window, regardless of threshold.
///
/// Distances are measured like-edge to like-edge: window left to workspace
/// left, right to right, top to top, bottom to bottom. Ties resolve in
/// left, right, top, bottom order.
#[must_use]
pub fn nearest_edge(window: &Rect, workspace: &Rect) -> EdgeCandidate {
    let distances = [
        (WorkspaceEdge::Left, (window.x - workspace.x).abs()),
        (WorkspaceEdge::Right, (window.right() - workspace.right()).abs()),
        (WorkspaceEdge::Top, (window.y - workspace.y).abs()),
        (WorkspaceEdge::Bottom, (window.bottom() - workspace.bottom()).abs()),
    ];

    let mut best = EdgeCandidate {
        edge: distances[0].0,
        distance: distances[0].1,
    };
    for &(edge, distance) in &distances[1..] {
        if distance < best.distance {
            best = EdgeCandidate { edge, distance };
        }
    }

    best
}

/// Returns the half-workspace rectangle a given edge dock resolves to.
///
/// Left/top halves take the floored half extent; right/bottom halves take
/// the complement, so opposite halves sum exactly to the workspace size.
#[must_use]
pub fn edge_dock_frame(edge: WorkspaceEdge, workspace: &Rect) -> Rect {
    let half_width = (workspace.width / 2.0).floor();
    let half_height = (workspace.height / 2.0).floor();

    match edge {
        WorkspaceEdge::Left => {
            Rect::new(workspace.x, workspace.y, half_width, workspace.height)
        }
        WorkspaceEdge::Right => Rect::new(
            workspace.x + half_width,
            workspace.y,
            workspace.width - half_width,
            workspace.height,
        ),
        WorkspaceEdge::Top => {
            Rect::new(workspace.x, workspace.y, workspace.width, half_height)
        }
        WorkspaceEdge::Bottom => Rect::new(
            workspace.x,
            workspace.y + half_height,
            workspace.width,
            workspace.height - half_height,
        ),
    }
}

// ============================================================================
// Tests
// ============================================================================
