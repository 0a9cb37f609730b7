pub mod config;
pub mod constants;
pub mod navigation;
pub mod router;
pub mod scene;
pub mod timer;
pub mod transform;
pub mod transition;
pub mod viewer;

pub use config::ViewerConfig;
pub use navigation::{NavigationError, Navigator};
pub use router::{
    command_for_key, scene_index_for_digit, Command, FullscreenMode, FullscreenPlatform,
    InputRouter, PointerInput,
};
pub use scene::{DanglingHotspot, Hotspot, Region, Scene, SceneGraph, SceneGraphError, SceneId};
pub use timer::OneShotTimer;
pub use transform::ViewportTransform;
pub use transition::{
    SceneChangeObserver, SceneChanged, SceneRef, TransitionMachine, TransitionPhase,
};
pub use viewer::{RenderSnapshot, Viewer};

// Scene dataset bundled as a JSON string constant
pub static SCENES_JSON: &str = include_str!("../assets/scenes.json");
