// Host-side tests for the zoom/pan transform engine.

mod common;

use common::*;
use explorer_core::constants::{MAX_SCALE, MIN_SCALE};
use explorer_core::*;
use glam::Vec2;
use instant::Instant;

const EPS: f32 = 1e-3;

fn engine() -> ViewportTransform {
    ViewportTransform::new(VIEWPORT, &ViewerConfig::default())
}

fn approx(a: Vec2, b: Vec2) -> bool {
    (a - b).abs().max_element() < EPS
}

#[test]
fn starts_at_identity() {
    let t = engine();
    assert_eq!(t.scale(), 1.0);
    assert_eq!(t.translate(), Vec2::ZERO);
    assert!(t.is_identity());
    assert!(!t.is_dragging());
    assert_eq!(t.max_offset(), Vec2::ZERO);
}

#[test]
fn zoom_keeps_point_under_anchor_fixed() {
    let t0 = Instant::now();
    let anchors = [
        Vec2::new(200.0, 150.0),
        Vec2::new(400.0, 300.0),
        Vec2::new(0.0, 0.0),
        Vec2::new(800.0, 600.0),
        Vec2::new(613.0, 41.0),
    ];
    for anchor in anchors {
        let mut t = engine();
        let content = t.content_point_at(anchor);
        assert!(t.zoom_by(1.1, anchor, t0));
        assert!((t.scale() - 1.1).abs() < EPS);
        assert!(
            approx(t.view_point_of(content), anchor),
            "anchor {:?} drifted to {:?}",
            anchor,
            t.view_point_of(content)
        );
    }
}

#[test]
fn zoom_anchor_holds_from_a_panned_start() {
    let t0 = Instant::now();
    let mut t = engine();
    t.zoom_to(2.0, t0);
    t.begin_drag(Vec2::ZERO);
    t.drag_to(Vec2::new(120.0, -80.0), t0);
    t.end_drag(t0);

    let anchor = Vec2::new(500.0, 260.0);
    let content = t.content_point_at(anchor);
    t.zoom_by(1.1, anchor, t0);
    assert!(approx(t.view_point_of(content), anchor));
}

#[test]
fn scale_stays_within_limits_for_any_zoom_sequence() {
    let t0 = Instant::now();
    let mut t = engine();
    let factors = [1.1, 1.1, 5.0, 10.0, 0.9, 0.01, 0.5, 1.1, 2.0, 2.0, 2.0, 0.2, 0.2, 0.2];
    for (i, f) in factors.iter().enumerate() {
        let anchor = Vec2::new(37.0 * i as f32, 23.0 * i as f32);
        t.zoom_by(*f, anchor, t0);
        assert!(
            (MIN_SCALE..=MAX_SCALE).contains(&t.scale()),
            "scale {} escaped after factor {}",
            t.scale(),
            f
        );
    }
}

#[test]
fn invalid_factors_are_ignored() {
    let t0 = Instant::now();
    let mut t = engine();
    assert!(!t.zoom_by(0.0, Vec2::ZERO, t0));
    assert!(!t.zoom_by(-2.0, Vec2::ZERO, t0));
    assert!(!t.zoom_by(f32::NAN, Vec2::ZERO, t0));
    assert!(!t.zoom_to(f32::INFINITY, t0));
    assert!(t.is_identity());
}

#[test]
fn zoom_at_limit_reports_no_change() {
    let t0 = Instant::now();
    let mut t = engine();
    assert!(t.zoom_to(3.0, t0));
    assert!(!t.zoom_by(1.1, Vec2::new(10.0, 10.0), t0));
    assert!(!t.zoom_to(7.0, t0));
}

#[test]
fn drag_is_rejected_without_zoom() {
    let t0 = Instant::now();
    let mut t = engine();
    assert!(!t.begin_drag(Vec2::new(10.0, 10.0)));
    assert!(!t.is_dragging());
    assert!(!t.drag_to(Vec2::new(50.0, 50.0), t0));
    assert_eq!(t.translate(), Vec2::ZERO);

    // Zoomed out is also not pannable
    t.zoom_to(0.5, t0);
    assert!(!t.begin_drag(Vec2::new(10.0, 10.0)));
}

#[test]
fn drag_follows_pointer_relative_to_anchor() {
    let t0 = Instant::now();
    let mut t = engine();
    t.zoom_to(2.0, t0);
    assert!(t.begin_drag(Vec2::new(100.0, 100.0)));
    assert_eq!(t.drag_anchor(), Some(Vec2::new(100.0, 100.0)));

    assert!(t.drag_to(Vec2::new(130.0, 90.0), t0));
    assert_eq!(t.translate(), Vec2::new(30.0, -10.0));

    // Same position again is not a change
    assert!(!t.drag_to(Vec2::new(130.0, 90.0), t0));

    assert!(t.end_drag(t0));
    assert!(!t.is_dragging());
    assert!(!t.end_drag(t0));
}

#[test]
fn pan_is_clamped_only_after_settle_delay() {
    let t0 = Instant::now();
    let mut t = engine();
    t.zoom_to(2.0, t0);
    t.begin_drag(Vec2::ZERO);
    t.drag_to(Vec2::new(1000.0, -1000.0), ms(t0, 10));

    // Not fought mid-drag
    assert_eq!(t.translate(), Vec2::new(1000.0, -1000.0));
    assert!(!t.poll(ms(t0, 500)));
    assert_eq!(t.translate(), Vec2::new(1000.0, -1000.0));

    t.end_drag(ms(t0, 600));
    assert!(t.settle_pending());
    assert!(!t.poll(ms(t0, 719)));
    assert!(t.poll(ms(t0, 720)));

    // (2 - 1) * 800 / 2 and (2 - 1) * 600 / 2
    assert_eq!(t.max_offset(), Vec2::new(400.0, 300.0));
    assert_eq!(t.translate(), Vec2::new(400.0, -300.0));
}

#[test]
fn pan_bounds_hold_after_settle_for_mixed_gestures() {
    let t0 = Instant::now();
    let mut t = engine();
    t.zoom_by(1.1, Vec2::new(790.0, 10.0), t0);
    t.zoom_by(1.1, Vec2::new(790.0, 10.0), t0);
    t.begin_drag(Vec2::new(400.0, 300.0));
    t.drag_to(Vec2::new(-300.0, 900.0), ms(t0, 5));
    t.end_drag(ms(t0, 6));
    t.zoom_by(1.0 / 1.1, Vec2::new(5.0, 590.0), ms(t0, 7));
    t.poll(ms(t0, 1_000));

    let s = t.scale();
    let tr = t.translate();
    assert!(tr.x.abs() <= (s - 1.0) * VIEWPORT.x / 2.0 + EPS);
    assert!(tr.y.abs() <= (s - 1.0) * VIEWPORT.y / 2.0 + EPS);
}

#[test]
fn zooming_out_below_one_centres_content() {
    let t0 = Instant::now();
    let mut t = engine();
    t.zoom_to(2.0, t0);
    t.begin_drag(Vec2::ZERO);
    t.drag_to(Vec2::new(200.0, 100.0), t0);
    t.end_drag(t0);

    // zoom_to keeps translation when it still fits
    t.zoom_to(3.0, t0);
    assert_eq!(t.translate(), Vec2::new(200.0, 100.0));

    t.zoom_to(0.5, t0);
    assert_eq!(t.max_offset(), Vec2::ZERO);
    assert_eq!(t.translate(), Vec2::ZERO);
}

#[test]
fn reset_returns_to_identity_and_drops_timers() {
    let t0 = Instant::now();
    let mut t = engine();
    t.zoom_to(2.5, t0);
    t.begin_drag(Vec2::ZERO);
    assert!(t.reset());
    assert!(t.is_identity());
    assert!(!t.is_dragging());
    assert!(!t.settle_pending());
    assert!(!t.reset());
}

#[test]
fn viewport_resize_rearms_settle() {
    let t0 = Instant::now();
    let mut t = engine();
    t.zoom_to(2.0, t0);
    t.begin_drag(Vec2::ZERO);
    t.drag_to(Vec2::new(400.0, 0.0), t0);
    t.end_drag(t0);
    t.poll(ms(t0, 1_000));
    assert_eq!(t.translate(), Vec2::new(400.0, 0.0));

    t.set_viewport_size(Vec2::new(400.0, 300.0), ms(t0, 2_000));
    assert!(t.settle_pending());
    assert!(t.poll(ms(t0, 3_000)));
    assert_eq!(t.translate(), Vec2::new(200.0, 0.0));
}
