//! OS-level edge classification.
//!
//! A coarser sibling of the workspace edge detector: native windows are
//! tested against the display work area only, never against each other.
//! Classification is pure; applying the resulting frame is the manager's
//! job.
//!
//! The top edge is special-cased: dragging into the top-left or top-right
//! corner must read as a half-screen snap, not fullscreen, so fullscreen
//! requires the window to be clear of both side edges by a margin of
//! three thresholds.

use serde::Serialize;

use crate::docking::constants::thresholds::CORNER_MARGIN_FACTOR;
use crate::docking::geometry::Rect;

// ============================================================================
// Types
// ============================================================================

/// The snap a native window move resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum EdgeDockKind {
    /// Fill the entire work area.
    Fullscreen,
    /// Fill the left half of the work area.
    LeftHalf,
    /// Fill the right half of the work area.
    RightHalf,
}

// ============================================================================
// Classification
// ============================================================================

/// Classifies a native window's bounds against the work area.
///
/// Checks, in order: fullscreen (top edge within threshold, both side
/// edges clear by `3 x threshold`), then left half, then right half.
/// Returns `None` when no edge is in range.
#[must_use]
pub fn classify(frame: &Rect, work_area: &Rect, threshold: f64) -> Option<EdgeDockKind> {
    let top_distance = (frame.y - work_area.y).abs();
    let left_distance = (frame.x - work_area.x).abs();
    let right_distance = (frame.right() - work_area.right()).abs();

    let corner_margin = CORNER_MARGIN_FACTOR * threshold;
    if top_distance <= threshold
        && left_distance > corner_margin
        && right_distance > corner_margin
    {
        return Some(EdgeDockKind::Fullscreen);
    }

    if left_distance <= threshold {
        return Some(EdgeDockKind::LeftHalf);
    }

    if right_distance <= threshold {
        return Some(EdgeDockKind::RightHalf);
    }

    None
}

/// Returns the bounds a classification resolves to.
///
/// Halves use the same floored/complement split as workspace edge docks,
/// so a left-half + right-half pair tiles the work area exactly.
#[must_use]
pub fn target_frame(kind: EdgeDockKind, work_area: &Rect) -> Rect {
    let half_width = (work_area.width / 2.0).floor();

    match kind {
        EdgeDockKind::Fullscreen => *work_area,
        EdgeDockKind::LeftHalf => {
            Rect::new(work_area.x, work_area.y, half_width, work_area.height)
        }
        EdgeDockKind::RightHalf => Rect::new(
            work_area.x + half_width,
            work_area.y,
            work_area.width - half_width,
            work_area.height,
        ),
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const THRESHOLD: f64 = 10.0;

    fn work_area() -> Rect { Rect::new(0.0, 25.0, 1920.0, 1055.0) }

    #[test]
    fn test_fullscreen_on_top_edge() {
        // 3px from the top, 200px from both sides
        let frame = Rect::new(200.0, 28.0, 1520.0, 900.0);
        assert_eq!(
            classify(&frame, &work_area(), THRESHOLD),
            Some(EdgeDockKind::Fullscreen)
        );
    }

    #[test]
    fn test_top_left_corner_reads_as_left_half() {
        // Near the top AND near the left edge: the corner margin rejects
        // fullscreen and the left rule fires instead.
        let frame = Rect::new(4.0, 28.0, 800.0, 600.0);
        assert_eq!(
            classify(&frame, &work_area(), THRESHOLD),
            Some(EdgeDockKind::LeftHalf)
        );
    }

    #[test]
    fn test_top_right_corner_reads_as_right_half() {
        let frame = Rect::new(1116.0, 28.0, 800.0, 600.0);
        assert_eq!(
            classify(&frame, &work_area(), THRESHOLD),
            Some(EdgeDockKind::RightHalf)
        );
    }

    #[test]
    fn test_left_half() {
        let frame = Rect::new(5.0, 400.0, 800.0, 600.0);
        assert_eq!(
            classify(&frame, &work_area(), THRESHOLD),
            Some(EdgeDockKind::LeftHalf)
        );
    }

    #[test]
    fn test_right_half() {
        let frame = Rect::new(1112.0, 400.0, 800.0, 600.0);
        assert_eq!(
            classify(&frame, &work_area(), THRESHOLD),
            Some(EdgeDockKind::RightHalf)
        );
    }

    #[test]
    fn test_no_dock_in_the_middle() {
        let frame = Rect::new(500.0, 400.0, 800.0, 600.0);
        assert_eq!(classify(&frame, &work_area(), THRESHOLD), None);
    }

    #[test]
    fn test_near_margin_top_still_fullscreen() {
        // Sides clear by just over the corner margin (30px at threshold 10)
        let frame = Rect::new(31.0, 28.0, 1858.0, 900.0);
        assert_eq!(
            classify(&frame, &work_area(), THRESHOLD),
            Some(EdgeDockKind::Fullscreen)
        );
    }

    #[test]
    fn test_fullscreen_target_is_work_area() {
        let wa = work_area();
        assert_eq!(target_frame(EdgeDockKind::Fullscreen, &wa), wa);
    }

    #[test]
    fn test_half_targets_tile_work_area() {
        let wa = Rect::new(0.0, 25.0, 1921.0, 1055.0);
        let left = target_frame(EdgeDockKind::LeftHalf, &wa);
        let right = target_frame(EdgeDockKind::RightHalf, &wa);

        assert!((left.width - 960.0).abs() < f64::EPSILON);
        assert!((right.width - 961.0).abs() < f64::EPSILON);
        assert!((right.x - left.right()).abs() < f64::EPSILON);
        assert!((left.width + right.width - wa.width).abs() < f64::EPSILON);
    }
}
