//! Static scene dataset: scenes, their hotspots and the id index over them.
//!
//! The graph is built once at startup and never mutated. Nodes are scenes,
//! edges are hotspots pointing at a target scene id. Targets are allowed to
//! dangle; navigation treats an unresolved target as a no-op.

use fnv::FnvHashMap;
use serde::Deserialize;
use smallvec::SmallVec;
use std::fmt;

/// Stable, author-assigned scene identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(transparent)]
pub struct SceneId(pub u32);

impl fmt::Display for SceneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Rectangle over the scene image in percent of its width/height.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
pub struct Region {
    pub top: f32,
    pub left: f32,
    pub width: f32,
    pub height: f32,
}

impl Region {
    // Allow authoring slop such as 33.3 + 66.7.
    const EDGE_TOLERANCE: f32 = 1e-3;

    fn is_valid(&self) -> bool {
        let fields = [self.top, self.left, self.width, self.height];
        fields.iter().all(|v| v.is_finite() && *v >= 0.0)
            && self.left + self.width <= 100.0 + Self::EDGE_TOLERANCE
            && self.top + self.height <= 100.0 + Self::EDGE_TOLERANCE
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Hotspot {
    pub id: String,
    pub target_scene_id: SceneId,
    pub region: Region,
    pub label: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Scene {
    pub id: SceneId,
    pub image_url: String,
    /// Accessible description of the image.
    pub alt: String,
    #[serde(default)]
    pub hotspots: SmallVec<[Hotspot; 4]>,
}

impl Scene {
    pub fn hotspot(&self, hotspot_id: &str) -> Option<&Hotspot> {
        self.hotspots.iter().find(|h| h.id == hotspot_id)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SceneGraphError {
    #[error("malformed scene dataset: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("scene dataset is empty")]
    Empty,
    #[error("duplicate scene id {0}")]
    DuplicateSceneId(SceneId),
    #[error("scene {scene}: duplicate hotspot id {hotspot:?}")]
    DuplicateHotspotId { scene: SceneId, hotspot: String },
    #[error("scene {scene}: hotspot {hotspot:?} has an invalid region {region:?}")]
    InvalidRegion {
        scene: SceneId,
        hotspot: String,
        region: Region,
    },
    #[error("no scene with id {0}")]
    NotFound(SceneId),
}

/// A hotspot whose target does not resolve to any scene.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DanglingHotspot {
    pub scene: SceneId,
    pub hotspot: String,
    pub target: SceneId,
}

/// Immutable, ordered scene collection with an id index.
#[derive(Clone, Debug)]
pub struct SceneGraph {
    scenes: Vec<Scene>,
    index_by_id: FnvHashMap<SceneId, usize>,
}

impl SceneGraph {
    /// Validates and indexes an ordered scene list.
    ///
    /// Structural problems (empty list, duplicate ids, bad regions) are
    /// errors. Dangling hotspot targets are not; they are logged and can be
    /// listed with [`SceneGraph::dangling_hotspots`].
    pub fn new(scenes: Vec<Scene>) -> Result<Self, SceneGraphError> {
        if scenes.is_empty() {
            return Err(SceneGraphError::Empty);
        }
        let mut index_by_id = FnvHashMap::default();
        for (i, scene) in scenes.iter().enumerate() {
            if index_by_id.insert(scene.id, i).is_some() {
                return Err(SceneGraphError::DuplicateSceneId(scene.id));
            }
            for (j, hotspot) in scene.hotspots.iter().enumerate() {
                if scene.hotspots[..j].iter().any(|h| h.id == hotspot.id) {
                    return Err(SceneGraphError::DuplicateHotspotId {
                        scene: scene.id,
                        hotspot: hotspot.id.clone(),
                    });
                }
                if !hotspot.region.is_valid() {
                    return Err(SceneGraphError::InvalidRegion {
                        scene: scene.id,
                        hotspot: hotspot.id.clone(),
                        region: hotspot.region,
                    });
                }
            }
        }
        let graph = Self {
            scenes,
            index_by_id,
        };
        for d in graph.dangling_hotspots() {
            log::warn!(
                "[scenes] hotspot {:?} on scene {} targets missing scene {}",
                d.hotspot,
                d.scene,
                d.target
            );
        }
        log::info!("[scenes] loaded {} scenes", graph.scene_count());
        Ok(graph)
    }

    /// Parses a JSON array of scenes and builds the graph.
    pub fn from_json(json: &str) -> Result<Self, SceneGraphError> {
        let scenes: Vec<Scene> = serde_json::from_str(json)?;
        Self::new(scenes)
    }

    /// The dataset bundled with the crate.
    pub fn bundled() -> Result<Self, SceneGraphError> {
        Self::from_json(crate::SCENES_JSON)
    }

    #[inline]
    pub fn scene_count(&self) -> usize {
        self.scenes.len()
    }

    /// Scene at `index`. Panics when out of range; indices come from the
    /// navigator, which keeps them in `[0, scene_count)`.
    #[inline]
    pub fn scene_at(&self, index: usize) -> &Scene {
        &self.scenes[index]
    }

    pub fn scenes(&self) -> &[Scene] {
        &self.scenes
    }

    pub fn find_index_by_id(&self, id: SceneId) -> Result<usize, SceneGraphError> {
        self.index_by_id
            .get(&id)
            .copied()
            .ok_or(SceneGraphError::NotFound(id))
    }

    pub fn hotspot(&self, scene_index: usize, hotspot_id: &str) -> Option<&Hotspot> {
        self.scenes.get(scene_index)?.hotspot(hotspot_id)
    }

    pub fn dangling_hotspots(&self) -> Vec<DanglingHotspot> {
        self.scenes
            .iter()
            .flat_map(|scene| {
                scene
                    .hotspots
                    .iter()
                    .filter(|h| !self.index_by_id.contains_key(&h.target_scene_id))
                    .map(move |h| DanglingHotspot {
                        scene: scene.id,
                        hotspot: h.id.clone(),
                        target: h.target_scene_id,
                    })
            })
            .collect()
    }
}
