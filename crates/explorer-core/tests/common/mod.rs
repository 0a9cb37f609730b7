// Shared fixtures for the host-side tests.
#![allow(dead_code)]

use explorer_core::*;
use glam::Vec2;
use instant::Instant;
use std::time::Duration;

// Five scenes with ids 1..=5. Scene 1 links to 3 and to a missing scene 99.
pub const FIVE_SCENES: &str = r#"[
  { "id": 1, "image_url": "one.jpg", "alt": "one",
    "hotspots": [
      { "id": "to-three", "target_scene_id": 3, "label": "Three",
        "region": { "top": 10.0, "left": 10.0, "width": 20.0, "height": 20.0 } },
      { "id": "nowhere", "target_scene_id": 99, "label": "Nowhere",
        "region": { "top": 50.0, "left": 50.0, "width": 10.0, "height": 10.0 } }
    ] },
  { "id": 2, "image_url": "two.jpg", "alt": "two" },
  { "id": 3, "image_url": "three.jpg", "alt": "three",
    "hotspots": [
      { "id": "back", "target_scene_id": 1, "label": "Back",
        "region": { "top": 0.0, "left": 0.0, "width": 100.0, "height": 100.0 } }
    ] },
  { "id": 4, "image_url": "four.jpg", "alt": "four" },
  { "id": 5, "image_url": "five.jpg", "alt": "five" }
]"#;

pub const VIEWPORT: Vec2 = Vec2::new(800.0, 600.0);

pub fn five_scene_graph() -> SceneGraph {
    SceneGraph::from_json(FIVE_SCENES).expect("fixture dataset is valid")
}

pub fn viewer() -> Viewer {
    Viewer::new(five_scene_graph(), ViewerConfig::default(), VIEWPORT)
}

pub fn ms(t0: Instant, millis: u64) -> Instant {
    t0 + Duration::from_millis(millis)
}
