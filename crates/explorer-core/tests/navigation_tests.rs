// Host-side tests for the navigation controller.

mod common;

use common::*;
use explorer_core::*;

#[test]
fn next_cycles_back_to_start_after_scene_count_steps() {
    for start in 0..5 {
        let mut nav = Navigator::new(5);
        nav.jump_to_index(start).unwrap();
        for step in 1..=5 {
            let i = nav.next();
            assert_eq!(i, (start + step) % 5);
        }
        assert_eq!(nav.current_index(), start);
    }
}

#[test]
fn prev_is_inverse_of_next() {
    let mut nav = Navigator::new(5);
    for i in 0..5 {
        nav.jump_to_index(i).unwrap();
        nav.next();
        nav.prev();
        assert_eq!(nav.current_index(), i);
    }
    // And wraps below zero
    nav.jump_to_index(0).unwrap();
    assert_eq!(nav.prev(), 4);
}

#[test]
fn single_scene_wraps_onto_itself() {
    let mut nav = Navigator::new(1);
    assert_eq!(nav.next(), 0);
    assert_eq!(nav.prev(), 0);
}

#[test]
fn jump_to_index_rejects_out_of_range() {
    let mut nav = Navigator::new(5);
    nav.jump_to_index(2).unwrap();
    assert_eq!(
        nav.jump_to_index(5),
        Err(NavigationError::IndexOutOfRange { index: 5, count: 5 })
    );
    assert_eq!(nav.current_index(), 2);
}

#[test]
fn jump_to_scene_id_resolves_through_graph() {
    let graph = five_scene_graph();
    let mut nav = Navigator::for_graph(&graph);
    assert_eq!(nav.scene_count(), 5);
    assert_eq!(nav.jump_to_scene_id(&graph, SceneId(4)), Some(3));
    assert_eq!(nav.current_index(), 3);
}

#[test]
fn jump_to_unknown_scene_id_is_a_no_op() {
    let graph = five_scene_graph();
    let mut nav = Navigator::for_graph(&graph);
    nav.jump_to_index(1).unwrap();
    assert_eq!(nav.jump_to_scene_id(&graph, SceneId(99)), None);
    assert_eq!(nav.current_index(), 1);
}
