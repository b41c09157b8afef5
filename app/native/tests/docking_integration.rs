//! Integration tests for the docking engine.
//!
//! These drive the engine the way the shell does: a drag produces a
//! preview on every tick, a drop commits the result into the layout
//! collection, and the collection is persisted through the layout store.
//! The native edge-dock flow runs against a scripted window and a manual
//! scheduler, so no timers and no real window system are involved.

use std::sync::Arc;
use std::sync::atomic::{AtomicU32, Ordering};

use parking_lot::Mutex;
use snapdock_lib::config::{AnimationConfig, DockingConfig, SharedConfig};
use snapdock_lib::docking::native::{
    EdgeDockKind, EdgeDockManager, ManualScheduler, NativeWindow, NativeWindowEvent, WindowId,
    run_event_loop,
};
use snapdock_lib::docking::{DockPosition, Rect, WindowLayout, compute_docking_preview};
use snapdock_lib::store::{LayoutStore, MemoryStore};

const SNAP_THRESHOLD: f64 = 16.0;

fn workspace() -> Rect { Rect::new(0.0, 0.0, 1000.0, 800.0) }

// ============================================================================
// In-Workspace Drag Flow
// ============================================================================

#[test]
fn test_drag_commit_persist_cycle() {
    let store = LayoutStore::new(MemoryStore::new());
    let mut layouts = vec![
        WindowLayout::new("editor", 300.0, 200.0, 300.0, 200.0),
        WindowLayout::new("terminal", 500.0, 100.0, 300.0, 300.0),
    ];

    // Drag "editor" toward "terminal" in steps; far ticks produce no
    // preview, the final tick lands 2px from the terminal's left edge.
    let drag_xs = [300.0, 250.0, 225.0, 198.0];
    let mut preview = None;
    for x in drag_xs {
        let dragged = WindowLayout { x, y: 150.0, ..layouts[0].clone() };
        preview = compute_docking_preview(&dragged, &layouts, &workspace(), SNAP_THRESHOLD);
    }

    let result = preview.expect("final tick should offer a dock");
    assert_eq!(result.dock_position, Some(DockPosition::Left));
    assert_eq!(result.dock_target_id.as_deref(), Some("terminal"));

    // Drop: commit the result into the dragged window's layout.
    layouts[0].x = result.x;
    layouts[0].y = result.y;
    layouts[0].width = result.width;
    layouts[0].height = result.height;

    store.save_layouts(&layouts).unwrap();
    store.save_active_layout("default").unwrap();

    // A restarted shell reloads the committed arrangement.
    let restored = store.load_layouts().unwrap();
    assert_eq!(restored[0].frame(), Rect::new(200.0, 100.0, 300.0, 300.0));
    assert_eq!(store.load_active_layout().unwrap().as_deref(), Some("default"));
}

#[test]
fn test_workspace_edge_scenario() {
    // Dragging 2px from the left edge resolves to the left half.
    let dragging = WindowLayout::new("drag", 2.0, 300.0, 400.0, 300.0);
    let result = compute_docking_preview(&dragging, &[], &workspace(), SNAP_THRESHOLD).unwrap();

    assert_eq!(result.frame(), Rect::new(0.0, 0.0, 500.0, 800.0));
    assert!(result.dock_target_id.is_none());
    assert!(result.dock_position.is_none());
}

#[test]
fn test_sibling_left_dock_scenario() {
    // Right edge at x=498, 2px from the sibling edge at x=500.
    let dragging = WindowLayout::new("drag", 198.0, 150.0, 300.0, 200.0);
    let sibling = WindowLayout::new("s", 500.0, 100.0, 300.0, 300.0);

    let result =
        compute_docking_preview(&dragging, &[sibling], &workspace(), SNAP_THRESHOLD).unwrap();

    assert_eq!(result.frame(), Rect::new(200.0, 100.0, 300.0, 300.0));
}

#[test]
fn test_center_overlay_scenario() {
    // Heavy overlap with a 5px center offset stacks onto the sibling.
    let dragging = WindowLayout::new("drag", 503.0, 104.0, 300.0, 300.0);
    let sibling = WindowLayout::new("s", 500.0, 100.0, 300.0, 300.0);

    let result =
        compute_docking_preview(&dragging, &[sibling], &workspace(), SNAP_THRESHOLD).unwrap();

    assert_eq!(result.frame(), Rect::new(500.0, 100.0, 300.0, 300.0));
    assert_eq!(result.dock_position, Some(DockPosition::Center));
}

#[test]
fn test_runtime_threshold_update_changes_preview() {
    let config = SharedConfig::new(DockingConfig::default());
    // 20px out: silent at the default threshold of 16.
    let dragging = WindowLayout::new("drag", 20.0, 300.0, 400.0, 300.0);

    let threshold = config.snapshot().snap_threshold;
    assert!(compute_docking_preview(&dragging, &[], &workspace(), threshold).is_none());

    config.update(|c| c.snap_threshold = 24.0);
    let threshold = config.snapshot().snap_threshold;
    assert!(compute_docking_preview(&dragging, &[], &workspace(), threshold).is_some());
}

// ============================================================================
// Native Edge-Dock Flow
// ============================================================================

struct ScriptedWindow {
    id: WindowId,
    frame: Mutex<Rect>,
    applied: AtomicU32,
}

impl ScriptedWindow {
    fn new(id: WindowId, frame: Rect) -> Self {
        Self {
            id,
            frame: Mutex::new(frame),
            applied: AtomicU32::new(0),
        }
    }
}

impl NativeWindow for ScriptedWindow {
    fn id(&self) -> WindowId { self.id }

    fn frame(&self) -> Rect { *self.frame.lock() }

    fn is_maximized(&self) -> bool { false }

    fn set_frame(&self, frame: Rect, _animation: &AnimationConfig) {
        *self.frame.lock() = frame;
        self.applied.fetch_add(1, Ordering::SeqCst);
    }
}

fn work_area() -> Rect { Rect::new(0.0, 25.0, 1920.0, 1055.0) }

#[test]
fn test_native_fullscreen_scenario() {
    // 3px from the top, 200px clear of both sides, threshold 10.
    let scheduler = Arc::new(ManualScheduler::new());
    let manager = EdgeDockManager::new(SharedConfig::default(), Arc::clone(&scheduler));
    let window = ScriptedWindow::new(1, Rect::new(200.0, 28.0, 1520.0, 900.0));

    let kind = manager.detect_and_apply(&window, &work_area());

    assert_eq!(kind, Some(EdgeDockKind::Fullscreen));
    assert_eq!(window.frame(), work_area());
}

#[test]
fn test_native_cooldown_absorbs_reentrant_move() {
    let scheduler = Arc::new(ManualScheduler::new());
    let manager = EdgeDockManager::new(SharedConfig::default(), Arc::clone(&scheduler));
    let window = ScriptedWindow::new(1, Rect::new(4.0, 400.0, 800.0, 600.0));

    // First move snaps to the left half and arms the cooldown.
    assert_eq!(
        manager.detect_and_apply(&window, &work_area()),
        Some(EdgeDockKind::LeftHalf)
    );
    assert_eq!(window.applied.load(Ordering::SeqCst), 1);

    // The snap itself fired a move event; it must be ignored even though
    // the window now sits exactly on the left edge.
    assert!(manager.detect_and_apply(&window, &work_area()).is_none());
    assert_eq!(window.applied.load(Ordering::SeqCst), 1);

    // After the cooldown the detector re-arms.
    scheduler.fire_all();
    assert!(manager.detect_and_apply(&window, &work_area()).is_some());
    assert_eq!(window.applied.load(Ordering::SeqCst), 2);
}

#[test]
fn test_native_destroy_mid_cooldown() {
    let scheduler = Arc::new(ManualScheduler::new());
    let manager = EdgeDockManager::new(SharedConfig::default(), Arc::clone(&scheduler));
    let window = ScriptedWindow::new(9, Rect::new(4.0, 400.0, 800.0, 600.0));

    assert!(manager.detect_and_apply(&window, &work_area()).is_some());
    manager.handle_destroyed(9);

    // The scheduled clear fires against a forgotten id: nothing happens,
    // and other windows are unaffected.
    let other = ScriptedWindow::new(10, Rect::new(1116.0, 400.0, 800.0, 600.0));
    assert!(manager.detect_and_apply(&other, &work_area()).is_some());

    scheduler.fire_all();
    assert_eq!(manager.guard().active_count(), 0);
}

#[tokio::test]
async fn test_native_event_stream_end_to_end() {
    let scheduler = Arc::new(ManualScheduler::new());
    let manager = Arc::new(EdgeDockManager::new(
        SharedConfig::default(),
        Arc::clone(&scheduler),
    ));

    let window = Arc::new(ScriptedWindow::new(3, Rect::new(1112.0, 400.0, 800.0, 600.0)));

    let (tx, rx) = tokio::sync::mpsc::channel(8);
    let pump = tokio::spawn(run_event_loop(Arc::clone(&manager), rx));

    tx.send(NativeWindowEvent::Moved {
        window: Arc::clone(&window) as Arc<dyn NativeWindow>,
        work_area: work_area(),
    })
    .await
    .unwrap();
    tx.send(NativeWindowEvent::Destroyed { id: 3 }).await.unwrap();
    drop(tx);
    pump.await.unwrap();

    // The move snapped to the right half before the destroy cleared state.
    assert_eq!(window.frame(), Rect::new(960.0, 25.0, 960.0, 1055.0));
    assert_eq!(manager.guard().active_count(), 0);
}
