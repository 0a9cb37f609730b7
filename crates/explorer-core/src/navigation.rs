use crate::scene::{SceneGraph, SceneId};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NavigationError {
    #[error("scene index {index} out of range (scene count {count})")]
    IndexOutOfRange { index: usize, count: usize },
}

/// Owns the current scene index. Wraps at both ends; there is no terminal scene.
///
/// The navigator only moves the index. Crossfades and transform resets are
/// driven by whoever observes the resulting scene (see `Viewer`).
#[derive(Clone, Debug)]
pub struct Navigator {
    current: usize,
    count: usize,
}

impl Navigator {
    /// Starts at index 0 over `count` scenes. `count` must be non-zero, which
    /// `SceneGraph` guarantees.
    pub fn new(count: usize) -> Self {
        debug_assert!(count > 0, "navigator over an empty scene list");
        Self {
            current: 0,
            count: count.max(1),
        }
    }

    pub fn for_graph(graph: &SceneGraph) -> Self {
        Self::new(graph.scene_count())
    }

    #[inline]
    pub fn current_index(&self) -> usize {
        self.current
    }

    #[inline]
    pub fn scene_count(&self) -> usize {
        self.count
    }

    pub fn next(&mut self) -> usize {
        self.current = (self.current + 1) % self.count;
        self.current
    }

    pub fn prev(&mut self) -> usize {
        self.current = (self.current + self.count - 1) % self.count;
        self.current
    }

    /// Out-of-range indices are rejected and leave the index untouched.
    pub fn jump_to_index(&mut self, index: usize) -> Result<usize, NavigationError> {
        if index >= self.count {
            return Err(NavigationError::IndexOutOfRange {
                index,
                count: self.count,
            });
        }
        self.current = index;
        Ok(self.current)
    }

    /// Resolves `id` against the graph. An unknown id is a silent no-op and
    /// returns `None`.
    pub fn jump_to_scene_id(&mut self, graph: &SceneGraph, id: SceneId) -> Option<usize> {
        match graph.find_index_by_id(id) {
            Ok(index) => {
                self.current = index;
                Some(index)
            }
            Err(e) => {
                log::debug!("[nav] ignoring jump: {}", e);
                None
            }
        }
    }
}
