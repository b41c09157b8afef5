//! Sibling window dock scanning.
//!
//! For every sibling of the dragged window, evaluates five independent
//! candidate checks: left-of, right-of, top-of, bottom-of, and
//! center/overlay. Valid candidates are pooled; the selector reduces the
//! pool to the single best opportunity.
//!
//! Side docks adopt the target's cross-axis extent (height for left/right,
//! width for top/bottom) so the snapped pair forms a clean split. Center
//! docks adopt the target's frame exactly, for a tabbed/stacked arrangement.

use super::constants::thresholds::{CENTER_RADIUS_FACTOR, OVERLAY_MIN_COVERAGE};
use super::geometry::Rect;
use super::types::{DockOpportunity, DockPosition, OpportunityPool, WindowLayout};

// ============================================================================
// Scanning
// ============================================================================

/// Scans all siblings for dock opportunities against the dragged window.
///
/// Siblings are visited in slice order and positions in
/// [`DockPosition::SCAN_ORDER`]; the resulting pool preserves discovery
/// order, which the selector relies on for deterministic tie-breaking.
/// A sibling sharing the dragged window's id is skipped.
#[must_use]
pub fn scan_siblings(
    dragging: &WindowLayout,
    siblings: &[WindowLayout],
    workspace: &Rect,
    threshold: f64,
) -> OpportunityPool {
    let mut pool = OpportunityPool::new();
    let frame = dragging.frame();

    for sibling in siblings {
        if sibling.id == dragging.id {
            continue;
        }

        let target = sibling.frame();
        for position in DockPosition::SCAN_ORDER {
            if let Some(opportunity) =
                check_position(position, &frame, &target, &sibling.id, workspace, threshold)
            {
                pool.push(opportunity);
            }
        }
    }

    pool
}

/// Evaluates a single position check against one sibling.
fn check_position(
    position: DockPosition,
    dragging: &Rect,
    target: &Rect,
    target_id: &str,
    workspace: &Rect,
    threshold: f64,
) -> Option<DockOpportunity> {
    let (score, frame) = match position {
        DockPosition::Left => {
            let distance = (dragging.right() - target.x).abs();
            if distance > threshold || !dragging.vertical_span_overlaps(target) {
                return None;
            }
            let frame = Rect::new(
                (target.x - dragging.width).max(workspace.x),
                target.y,
                dragging.width,
                target.height,
            );
            (distance, frame)
        }
        DockPosition::Right => {
            let distance = (dragging.x - target.right()).abs();
            if distance > threshold || !dragging.vertical_span_overlaps(target) {
                return None;
            }
            let frame = Rect::new(
                target.right().min(workspace.right() - dragging.width),
                target.y,
                dragging.width,
                target.height,
            );
            (distance, frame)
        }
        DockPosition::Top => {
            let distance = (dragging.bottom() - target.y).abs();
            if distance > threshold || !dragging.horizontal_span_overlaps(target) {
                return None;
            }
            let frame = Rect::new(
                target.x,
                (target.y - dragging.height).max(workspace.y),
                target.width,
                dragging.height,
            );
            (distance, frame)
        }
        DockPosition::Bottom => {
            let distance = (dragging.y - target.bottom()).abs();
            if distance > threshold || !dragging.horizontal_span_overlaps(target) {
                return None;
            }
            let frame = Rect::new(
                target.x,
                target.bottom().min(workspace.bottom() - dragging.height),
                target.width,
                dragging.height,
            );
            (distance, frame)
        }
        DockPosition::Center => {
            let distance = dragging.center_distance(target);
            if distance > CENTER_RADIUS_FACTOR * threshold
                || dragging.coverage_by(target) < OVERLAY_MIN_COVERAGE
            {
                return None;
            }
            (distance, *target)
        }
    };

    Some(DockOpportunity {
        target_id: target_id.to_string(),
        position,
        frame,
        score,
    })
}

// ============================================================================
// Tests
// ============================================================================
