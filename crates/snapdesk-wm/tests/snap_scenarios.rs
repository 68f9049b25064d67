//! End-to-end snapping scenarios driven through the public Manager and
//! Workspace APIs, the way a host feeds pointer samples and frames.

use snapdesk_common::{Event, EventBus, Size, Vec2, WindowId};
use snapdesk_config::{SnapWith, SnapdeskConfig};
use snapdesk_wm::{
    Interaction, Manager, PointerInput, ResizeDirection, ScaleTransform, SnapKey, WindowSpec, Workspace,
};

fn id(s: &str) -> WindowId {
    WindowId::from(s)
}

fn spec(name: &str, x: f64, y: f64) -> WindowSpec {
    WindowSpec {
        id: Some(id(name)),
        position: Some(Vec2::new(x, y)),
        size: Size::new(200.0, 150.0),
        options: None,
    }
}

fn mouse(x: f64, y: f64, down: bool) -> PointerInput {
    PointerInput::Mouse {
        client: Vec2::new(x, y),
        primary_down: down,
    }
}

fn key(left: &str, right: &str) -> SnapKey {
    SnapKey {
        left: id(left),
        right: id(right),
    }
}

fn workspace_with(config: &SnapdeskConfig) -> Workspace {
    Workspace::new(config, ScaleTransform::identity(), EventBus::default())
}

/// Drag `name` by `delta` (manager space) from a grab point inside its body.
fn drag_by(ws: &mut Workspace, name: &str, delta: Vec2) {
    let wid = id(name);
    let grab = ws.window(&wid).unwrap().position() + Vec2::new(100.0, 75.0);
    ws.begin_move(&wid, grab).unwrap();
    ws.drag_to(&wid, grab + delta).unwrap();
    ws.end_interaction(&wid).unwrap();
}

fn position(ws: &Workspace, name: &str) -> Vec2 {
    ws.window(&id(name)).unwrap().position()
}

// =============================================================================
// Pointer-driven snapping
// =============================================================================

#[test]
fn dragging_next_to_a_window_snaps_flush() {
    let mut mgr = Manager::new(SnapdeskConfig::default());
    let ws = mgr.active_workspace_mut();
    ws.mount(spec("a", 100.0, 100.0)).unwrap();
    ws.mount(spec("b", 500.0, 100.0)).unwrap();

    mgr.handle_pointer(&mouse(600.0, 175.0, true));
    mgr.handle_pointer(&mouse(405.0, 180.0, true));
    // While dragging, B sits at (305,105) and is proposed, not committed.
    {
        let ws = mgr.active_workspace();
        assert_eq!(position(ws, "b"), Vec2::new(305.0, 105.0));
        assert_eq!(ws.engine().snapping().map(|s| s.key()), Some(key("a", "b")));
        assert!(ws.engine().snaps().is_empty());
    }
    mgr.handle_pointer(&mouse(405.0, 180.0, false));

    let ws = mgr.active_workspace();
    let b = ws.window(&id("b")).unwrap();
    assert_eq!(b.position(), Vec2::new(320.0, 100.0));
    assert_eq!(b.size().height, 150.0);
    assert_eq!(ws.engine().snaps().len(), 1);
    assert!(ws.engine().snap(&key("a", "b")).is_some());
    assert!(ws.engine().snapping().is_none());
}

#[test]
fn scaled_surface_snaps_in_window_space() {
    let mut config = SnapdeskConfig::default();
    config.manager.scale = Vec2::new(2.0, 2.0);
    let mut mgr = Manager::new(config);
    let ws = mgr.active_workspace_mut();
    ws.mount(spec("a", 100.0, 100.0)).unwrap();
    ws.mount(spec("b", 500.0, 100.0)).unwrap();

    mgr.handle_pointer(&mouse(1200.0, 350.0, true));
    mgr.handle_pointer(&mouse(810.0, 360.0, true));
    mgr.handle_pointer(&mouse(810.0, 360.0, false));

    let ws = mgr.active_workspace();
    assert_eq!(position(ws, "b"), Vec2::new(320.0, 100.0));
    assert_eq!(ws.engine().snaps().len(), 1);
}

#[test]
fn snap_survives_release_when_scaled_gap_exceeds_threshold() {
    let mut config = SnapdeskConfig::default();
    config.manager.scale = Vec2::new(3.0, 3.0);
    let mut mgr = Manager::new(config);
    let ws = mgr.active_workspace_mut();
    ws.mount(spec("a", 100.0, 100.0)).unwrap();
    ws.mount(spec("b", 500.0, 100.0)).unwrap();
    let mut rx = mgr.active_workspace().subscribe();

    // B lands at (315,105): 45px from A on screen, 60px once committed.
    mgr.handle_pointer(&mouse(1800.0, 525.0, true));
    mgr.handle_pointer(&mouse(1245.0, 540.0, true));
    mgr.handle_pointer(&mouse(1245.0, 540.0, false));

    let ws = mgr.active_workspace();
    assert_eq!(position(ws, "b"), Vec2::new(320.0, 100.0));
    assert_eq!(ws.engine().snaps().len(), 1);

    let mut events = Vec::new();
    while let Ok(event) = rx.try_recv() {
        events.push(event);
    }
    assert!(events.contains(&Event::SnapCommitted {
        left: id("a"),
        right: id("b")
    }));
    assert!(!events.iter().any(|e| matches!(e, Event::SnapDropped { .. })));
}

#[test]
fn snap_survives_release_when_margin_exceeds_threshold() {
    let mut config = SnapdeskConfig::default();
    config.workspace.snap_margin = 60.0;
    let mut ws = workspace_with(&config);
    ws.mount(spec("a", 100.0, 100.0)).unwrap();
    ws.mount(spec("b", 500.0, 100.0)).unwrap();

    drag_by(&mut ws, "b", Vec2::new(-170.0, 0.0));
    assert_eq!(position(&ws, "b"), Vec2::new(360.0, 100.0));
    assert_eq!(ws.engine().snaps().len(), 1);

    // Nudging the partner re-runs proximity against the committed gap.
    drag_by(&mut ws, "a", Vec2::new(0.0, 5.0));
    assert_eq!(ws.engine().snaps().len(), 1);
}

#[test]
fn snap_mover_is_grabbed_from_the_gap() {
    let mut mgr = Manager::new(SnapdeskConfig::default());
    let ws = mgr.active_workspace_mut();
    ws.mount(spec("a", 100.0, 100.0)).unwrap();
    ws.mount(spec("b", 500.0, 100.0)).unwrap();
    mgr.handle_pointer(&mouse(600.0, 175.0, true));
    mgr.handle_pointer(&mouse(405.0, 180.0, true));
    mgr.handle_pointer(&mouse(405.0, 180.0, false));

    // A press between the pair, near the top, lands on the shared mover.
    mgr.handle_pointer(&mouse(310.0, 110.0, true));
    assert!(matches!(mgr.interaction(), Some(Interaction::Snap { .. })));
    mgr.handle_pointer(&mouse(310.0, 160.0, true));
    mgr.handle_pointer(&mouse(310.0, 160.0, false));

    let ws = mgr.active_workspace();
    assert_eq!(position(ws, "a"), Vec2::new(100.0, 150.0));
    assert_eq!(position(ws, "b"), Vec2::new(320.0, 150.0));
    assert!(ws.engine().snap(&key("a", "b")).is_some());
}

// =============================================================================
// Neighbor counting
// =============================================================================

#[test]
fn three_neighbors_in_range_form_no_snap() {
    let mut ws = workspace_with(&SnapdeskConfig::default());
    ws.mount(spec("a", 100.0, 100.0)).unwrap();
    ws.mount(spec("b", 500.0, 300.0)).unwrap();
    ws.mount(spec("c", 540.0, 100.0)).unwrap();
    ws.mount(spec("d", 100.0, 110.0)).unwrap();

    drag_by(&mut ws, "b", Vec2::new(-195.0, -195.0));

    assert_eq!(position(&ws, "b"), Vec2::new(305.0, 105.0));
    assert!(ws.engine().snaps().is_empty());
    assert!(ws.engine().snapping().is_none());
}

#[test]
fn two_neighbors_pick_the_last_by_id() {
    let mut ws = workspace_with(&SnapdeskConfig::default());
    ws.mount(spec("a", 100.0, 100.0)).unwrap();
    ws.mount(spec("b", 500.0, 300.0)).unwrap();
    ws.mount(spec("c", 540.0, 100.0)).unwrap();

    drag_by(&mut ws, "b", Vec2::new(-195.0, -195.0));

    // C lies on B's right: B ends one margin left of C.
    assert_eq!(position(&ws, "b"), Vec2::new(320.0, 100.0));
    let snaps = ws.engine().snaps();
    assert_eq!(snaps.len(), 1);
    assert_eq!(snaps[0].key(), key("b", "c"));
}

// =============================================================================
// Resize releases and policy
// =============================================================================

fn resize_b_west(ws: &mut Workspace) {
    ws.begin_resize(&id("b"), ResizeDirection::W, Vec2::new(330.0, 175.0)).unwrap();
    ws.drag_to(&id("b"), Vec2::new(325.0, 175.0)).unwrap();
    ws.end_interaction(&id("b")).unwrap();
}

#[test]
fn resize_release_snaps_keeping_new_width() {
    let mut ws = workspace_with(&SnapdeskConfig::default());
    ws.mount(spec("a", 100.0, 100.0)).unwrap();
    ws.mount(spec("b", 330.0, 100.0)).unwrap();
    // Mounting next to A does not snap by itself.
    assert!(ws.engine().snaps().is_empty());

    resize_b_west(&mut ws);

    let b = ws.window(&id("b")).unwrap();
    assert_eq!(b.position(), Vec2::new(320.0, 100.0));
    assert_eq!(b.size(), Size::new(205.0, 150.0));
    assert_eq!(ws.engine().snaps().len(), 1);
}

#[test]
fn move_only_policy_ignores_resize() {
    let mut config = SnapdeskConfig::default();
    config.workspace.snap_with = SnapWith::Move;
    let mut ws = workspace_with(&config);
    ws.mount(spec("a", 100.0, 100.0)).unwrap();
    ws.mount(spec("b", 330.0, 100.0)).unwrap();

    resize_b_west(&mut ws);

    assert_eq!(position(&ws, "b"), Vec2::new(325.0, 100.0));
    assert!(ws.engine().snaps().is_empty());
}

#[test]
fn snapping_disabled_leaves_windows_where_dropped() {
    let mut config = SnapdeskConfig::default();
    config.workspace.snap = false;
    let mut ws = workspace_with(&config);
    ws.mount(spec("a", 100.0, 100.0)).unwrap();
    ws.mount(spec("b", 500.0, 100.0)).unwrap();

    drag_by(&mut ws, "b", Vec2::new(-195.0, 5.0));

    assert_eq!(position(&ws, "b"), Vec2::new(305.0, 105.0));
    assert!(ws.engine().snaps().is_empty());
}

// =============================================================================
// Dropping snaps
// =============================================================================

fn snapped() -> Workspace {
    let mut ws = workspace_with(&SnapdeskConfig::default());
    ws.mount(spec("a", 100.0, 100.0)).unwrap();
    ws.mount(spec("b", 500.0, 100.0)).unwrap();
    drag_by(&mut ws, "b", Vec2::new(-195.0, 5.0));
    assert_eq!(ws.engine().snaps().len(), 1);
    ws
}

#[test]
fn unmount_then_reap_removes_snap() {
    let mut ws = snapped();
    let mut rx = ws.subscribe();

    ws.unmount(&id("a")).unwrap();
    // Snaps survive until the end-of-frame reap.
    assert_eq!(ws.engine().snaps().len(), 1);
    assert_eq!(ws.pending_unmounts(), &[id("a")]);

    assert_eq!(ws.reap(), 1);
    assert!(ws.engine().snaps().is_empty());
    assert!(!ws.engine().registry().contains(&id("a")));
    assert_eq!(
        rx.try_recv().unwrap(),
        Event::SnapDropped {
            left: id("a"),
            right: id("b")
        }
    );
    assert_eq!(rx.try_recv().unwrap(), Event::WindowUnmounted(id("a")));
}

#[test]
fn staging_a_member_drops_its_snap() {
    let mut ws = snapped();
    let wid = id("b");
    ws.begin_move(&wid, Vec2::new(420.0, 175.0)).unwrap();
    ws.drag_to(&wid, Vec2::new(10.0, 175.0)).unwrap();
    assert!(ws.window(&wid).unwrap().is_staging());
    ws.end_interaction(&wid).unwrap();

    let b = ws.window(&wid).unwrap();
    assert!(b.is_staged());
    assert_eq!(b.position(), Vec2::new(320.0, 100.0));
    assert!(ws.engine().snaps().is_empty());
}

#[test]
fn moving_a_member_away_drops_its_snap() {
    let mut ws = snapped();
    drag_by(&mut ws, "a", Vec2::new(0.0, 300.0));
    assert!(ws.engine().snaps().is_empty());
}

#[test]
fn manager_frame_reaps_every_workspace() {
    let mut mgr = Manager::new(SnapdeskConfig::default());
    let second = mgr.add_workspace();
    mgr.active_workspace_mut().mount(spec("a", 0.0, 0.0)).unwrap();
    let other = mgr.workspace_mut(second).unwrap();
    other.mount(spec("x", 0.0, 0.0)).unwrap();
    other.unmount(&id("x")).unwrap();
    mgr.active_workspace_mut().unmount(&id("a")).unwrap();

    assert_eq!(mgr.end_frame(), 2);
    assert_eq!(mgr.end_frame(), 0);
}
