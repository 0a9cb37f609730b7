// Host-side tests for the crossfade state machine.

mod common;

use common::*;
use explorer_core::*;
use instant::Instant;
use std::time::Duration;

fn scene(index: usize, id: u32) -> SceneRef {
    SceneRef {
        index,
        id: SceneId(id),
    }
}

fn machine() -> TransitionMachine {
    TransitionMachine::new(scene(0, 1), Duration::from_millis(500))
}

#[test]
fn starts_idle_with_only_an_active_scene() {
    let m = machine();
    assert_eq!(m.phase(), TransitionPhase::Idle);
    assert_eq!(m.active(), scene(0, 1));
    assert_eq!(m.outgoing(), None);
    assert_eq!(m.settles_at(), None);
}

#[test]
fn scene_change_enters_transitioning_then_settles_after_dwell() {
    let t0 = Instant::now();
    let mut m = machine();

    let change = m.request(scene(2, 3), t0).expect("different id changes scene");
    assert_eq!(change.from, scene(0, 1));
    assert_eq!(change.to, scene(2, 3));
    assert_eq!(m.phase(), TransitionPhase::Transitioning);
    assert_eq!(m.outgoing(), Some(scene(0, 1)));
    assert_eq!(m.settles_at(), Some(ms(t0, 500)));

    assert!(!m.poll(ms(t0, 499)));
    assert!(m.is_transitioning());
    assert!(m.poll(ms(t0, 500)));
    assert_eq!(m.phase(), TransitionPhase::Idle);
    assert_eq!(m.outgoing(), None);
    assert_eq!(m.active(), scene(2, 3));
}

#[test]
fn same_id_request_is_ignored() {
    let t0 = Instant::now();
    let mut m = machine();
    assert!(m.request(scene(0, 1), t0).is_none());
    assert_eq!(m.phase(), TransitionPhase::Idle);
    assert_eq!(m.settles_at(), None);
}

#[test]
fn superseding_change_keeps_only_latest_outgoing_and_restarts_dwell() {
    let t0 = Instant::now();
    let mut m = machine();
    m.request(scene(1, 2), t0).unwrap();
    m.request(scene(2, 3), ms(t0, 300)).unwrap();

    // 1 was discarded immediately; 2 is now outgoing
    assert_eq!(m.outgoing(), Some(scene(1, 2)));
    assert_eq!(m.active(), scene(2, 3));

    // The first timer would have fired at 500; it was replaced
    assert!(!m.poll(ms(t0, 500)));
    assert!(m.is_transitioning());
    assert!(m.poll(ms(t0, 800)));
    assert!(!m.is_transitioning());
}

#[test]
fn cancel_drops_pending_dwell() {
    let t0 = Instant::now();
    let mut m = machine();
    m.request(scene(1, 2), t0).unwrap();
    m.cancel();
    assert_eq!(m.phase(), TransitionPhase::Idle);
    assert!(!m.poll(ms(t0, 1_000)));
    assert_eq!(m.active(), scene(1, 2));
}
