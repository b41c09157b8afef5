//! Candidate selection and result building.
//!
//! This is the engine's public entry point for in-workspace docking. Every
//! drag tick the shell calls [`compute_docking_preview`] with the dragged
//! window, its siblings, and the workspace bounds, and gets back either
//! `None` (no snap this tick) or the single best [`DockingResult`].
//!
//! Selection rule, in order:
//! 1. If the nearest workspace edge is within threshold, the edge dock wins
//!    outright and siblings are not scanned at all.
//! 2. Otherwise the sibling pool is scanned; an empty pool means no dock.
//! 3. Otherwise the lowest-score opportunity wins. Equal scores resolve to
//!    the first opportunity discovered, scanning siblings in slice order
//!    and positions in left, right, top, bottom, center order.

use tracing::trace;

use super::edge::{edge_dock_frame, nearest_edge};
use super::geometry::Rect;
use super::scanner::scan_siblings;
use super::types::{DockOpportunity, DockingResult, WindowLayout};

/// Computes the docking preview for the current drag position.
///
/// Pure and deterministic: the result depends only on the three geometric
/// inputs and the threshold, so it is safe to call on every pointer-move
/// event without locking. Cost is O(number of siblings).
#[must_use]
pub fn compute_docking_preview(
    dragging: &WindowLayout,
    siblings: &[WindowLayout],
    workspace: &Rect,
    snap_threshold: f64,
) -> Option<DockingResult> {
    // Workspace edges outrank sibling windows: when an edge is in range the
    // sibling scan is skipped entirely.
    let edge = nearest_edge(&dragging.frame(), workspace);
    if edge.distance <= snap_threshold {
        trace!(window = %dragging.id, edge = ?edge.edge, distance = edge.distance, "edge dock");
        return Some(DockingResult::edge(edge_dock_frame(edge.edge, workspace)));
    }

    let pool = scan_siblings(dragging, siblings, workspace, snap_threshold);
    let best = select_best(&pool)?;

    trace!(
        window = %dragging.id,
        target = %best.target_id,
        position = ?best.position,
        score = best.score,
        "sibling dock"
    );

    Some(DockingResult::sibling(
        best.frame,
        best.target_id.clone(),
        best.position,
    ))
}

/// Picks the lowest-score opportunity from the pool.
///
/// Runs a strict `<` running minimum over discovery order instead of a
/// sort, so equal scores deterministically resolve to the earliest
/// opportunity.
fn select_best(pool: &[DockOpportunity]) -> Option<&DockOpportunity> {
    let mut best: Option<&DockOpportunity> = None;
    for opportunity in pool {
        match best {
            Some(current) if opportunity.score >= current.score => {}
            _ => best = Some(opportunity),
        }
    }
    best
}

// ============================================================================
// Tests
// ============================================================================
