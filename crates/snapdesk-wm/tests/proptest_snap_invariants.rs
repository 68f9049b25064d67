//! Property-based invariant tests for proximity and snap bookkeeping.
//!
//! 1. Neighbor classification is mirror-symmetric between two windows.
//! 2. Power-of-two scales shift the threshold, never the geometry.
//! 3. A window belongs to at most one committed snap at any time.
//! 4. A freshly committed snap leaves its members flush, one margin apart.
//! 5. Dragging the shared mover keeps the members' relative offset.
//! 6. Dragging the shared resizer keeps the shared edge and total width.

use proptest::prelude::*;
use snapdesk_common::{EventBus, Rect, Size, Vec2, WindowId};
use snapdesk_config::SnapdeskConfig;
use snapdesk_wm::snap::proximity::edge_hint;
use snapdesk_wm::{EdgeHint, ScaleTransform, SnapControl, SnapKey, WindowSpec, Workspace};

// ── Helpers ─────────────────────────────────────────────────────────────

const NAMES: [&str; 4] = ["a", "b", "c", "d"];

fn id(s: &str) -> WindowId {
    WindowId::from(s)
}

fn workspace() -> Workspace {
    Workspace::new(&SnapdeskConfig::default(), ScaleTransform::identity(), EventBus::default())
}

fn scaled_workspace(s: f64) -> Workspace {
    let scale = ScaleTransform::new(Vec2::new(s, s));
    Workspace::new(&SnapdeskConfig::default(), scale, EventBus::default())
}

fn spec(name: &str, x: f64, y: f64) -> WindowSpec {
    WindowSpec {
        id: Some(id(name)),
        position: Some(Vec2::new(x, y)),
        size: Size::new(200.0, 150.0),
        options: None,
    }
}

/// Rects wide enough that one cannot touch both edges of another.
fn wide_rect() -> impl Strategy<Value = Rect> {
    (0i32..1000, 0i32..800, 120i32..400, 40i32..300).prop_map(|(x, y, w, h)| Rect {
        x: f64::from(x),
        y: f64::from(y),
        width: f64::from(w),
        height: f64::from(h),
    })
}

fn pow2_scale() -> impl Strategy<Value = f64> {
    prop_oneof![Just(0.5), Just(1.0), Just(2.0), Just(4.0)]
}

/// A scale with window-space offsets that stay inside the 50px on-screen
/// threshold, capped so the dropped window never overlaps its neighbor.
fn scale_with_offsets() -> impl Strategy<Value = (f64, i32, i32)> {
    pow2_scale().prop_flat_map(|s| {
        let reach = ((50.0 / s) as i32).min(40);
        (Just(s), -reach..=reach, -reach..=reach)
    })
}

/// Drag `name` so its top-left lands on `target` (window space), then
/// release. Pointer samples go through the workspace scale.
fn drop_window(ws: &mut Workspace, name: &str, target: Vec2) {
    let wid = id(name);
    let Some(start) = ws.window(&wid).map(|w| w.position()) else {
        return;
    };
    let scale = *ws.engine().scale();
    let grab = Vec2::new(10.0, 10.0);
    ws.begin_move(&wid, scale.scale_point(start + grab)).unwrap();
    ws.drag_to(&wid, scale.scale_point(target + grab)).unwrap();
    ws.end_interaction(&wid).unwrap();
}

/// A at (100,100) and B dropped next to it, snapped at (320,100).
fn snapped_pair() -> Workspace {
    let mut ws = workspace();
    ws.mount(spec("a", 100.0, 100.0)).unwrap();
    ws.mount(spec("b", 500.0, 100.0)).unwrap();
    drop_window(&mut ws, "b", Vec2::new(305.0, 105.0));
    ws
}

fn pair_key() -> SnapKey {
    SnapKey {
        left: id("a"),
        right: id("b"),
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 1. Proximity symmetry
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn edge_hint_is_mirror_symmetric(
        a in wide_rect(),
        b in wide_rect(),
        threshold in 0i32..50,
    ) {
        let threshold = f64::from(threshold);
        let forward = edge_hint(&a, &b, threshold);
        let backward = edge_hint(&b, &a, threshold);
        let mirrored = forward.map(|hint| match hint {
            EdgeHint::Left => EdgeHint::Right,
            EdgeHint::Right => EdgeHint::Left,
        });
        prop_assert_eq!(mirrored, backward);
    }

    #[test]
    fn edge_hint_under_scale_matches_scaled_threshold(
        a in wide_rect(),
        b in wide_rect(),
        threshold in 0i32..64,
        s in pow2_scale(),
    ) {
        let threshold = f64::from(threshold);
        let scale = ScaleTransform::new(Vec2::new(s, s));
        let scaled = edge_hint(&scale.scale_rect(a), &scale.scale_rect(b), threshold);
        let local = edge_hint(&a, &b, threshold / s);
        prop_assert_eq!(scaled, local);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 2. Single membership under arbitrary drag sequences
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn each_window_in_at_most_one_snap(
        moves in proptest::collection::vec((0usize..4, 60i32..560, 0i32..420), 1..24),
    ) {
        let mut ws = workspace();
        for (i, name) in NAMES.iter().enumerate() {
            ws.mount(spec(name, 60.0 + 120.0 * i as f64, 40.0 * i as f64)).unwrap();
        }

        for (which, x, y) in moves {
            drop_window(&mut ws, NAMES[which], Vec2::new(f64::from(x), f64::from(y)));

            let snaps = ws.engine().snaps();
            for name in NAMES {
                let count = snaps.iter().filter(|s| s.involves(&id(name))).count();
                prop_assert!(count <= 1, "{} is in {} snaps", name, count);
            }
            for snap in snaps {
                prop_assert!(ws.window(snap.left()).is_some());
                prop_assert!(ws.window(snap.right()).is_some());
                prop_assert_ne!(snap.left(), snap.right());
            }
        }
    }

    #[test]
    fn committed_snap_is_flush((s, dx, dy) in scale_with_offsets()) {
        let mut ws = scaled_workspace(s);
        ws.mount(spec("a", 100.0, 100.0)).unwrap();
        ws.mount(spec("b", 500.0, 300.0)).unwrap();
        drop_window(&mut ws, "b", Vec2::new(300.0 + f64::from(dx), 100.0 + f64::from(dy)));

        let margin = ws.config().snap_margin;
        let snaps = ws.engine().snaps();
        prop_assert_eq!(snaps.len(), 1);
        prop_assert_eq!(snaps[0].key(), pair_key());

        let left = ws.window(snaps[0].left()).unwrap().rect();
        let right = ws.window(snaps[0].right()).unwrap().rect();
        prop_assert_eq!(left.right() + margin, right.left());
        prop_assert_eq!(left.top(), right.top());
        prop_assert_eq!(left.height, right.height);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 3. Shared controls
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn mover_preserves_relative_offset(
        steps in proptest::collection::vec((-80i32..80, -80i32..80), 1..8),
    ) {
        let mut ws = snapped_pair();
        let offset = |ws: &Workspace| {
            ws.window(&id("b")).unwrap().position() - ws.window(&id("a")).unwrap().position()
        };
        let before = offset(&ws);

        let mut pointer = Vec2::new(310.0, 110.0);
        ws.begin_snap_drag(&pair_key(), SnapControl::Mover, pointer).unwrap();
        for (dx, dy) in steps {
            pointer += Vec2::new(f64::from(dx), f64::from(dy));
            ws.drag_snap(pointer);
            prop_assert_eq!(offset(&ws), before);
        }
        ws.end_snap_drag();
        prop_assert!(ws.engine().snap(&pair_key()).is_some());
    }

    #[test]
    fn resizer_preserves_shared_edge(
        steps in proptest::collection::vec(-150i32..150, 1..8),
    ) {
        let mut ws = snapped_pair();
        let margin = ws.config().snap_margin;
        let min = ws.window(&id("a")).unwrap().options().min_size.width;

        let mut pointer = Vec2::new(310.0, 200.0);
        ws.begin_snap_drag(&pair_key(), SnapControl::Resizer, pointer).unwrap();
        for dx in steps {
            pointer += Vec2::new(f64::from(dx), 0.0);
            ws.drag_snap(pointer);

            let a = ws.window(&id("a")).unwrap().rect();
            let b = ws.window(&id("b")).unwrap().rect();
            prop_assert_eq!(a.left(), 100.0);
            prop_assert_eq!(a.right() + margin, b.left());
            prop_assert_eq!(a.width + b.width, 400.0);
            prop_assert!(a.width >= min && b.width >= min);
        }
        ws.end_snap_drag();
    }
}
