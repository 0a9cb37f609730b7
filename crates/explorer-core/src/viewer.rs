//! Composition root of the interaction core.
//!
//! Navigation moves the index, the transition machine decides whether that is
//! a real scene change, and every change is fanned out to the transform engine
//! and any subscribed observers. The rendering surface reads a
//! [`RenderSnapshot`] and uses its revision to skip redundant work.

use crate::config::ViewerConfig;
use crate::navigation::{NavigationError, Navigator};
use crate::scene::{Scene, SceneGraph, SceneId};
use crate::transition::{
    SceneChangeObserver, SceneChanged, SceneRef, TransitionMachine, TransitionPhase,
};
use crate::transform::ViewportTransform;
use glam::Vec2;
use instant::Instant;

/// Borrowed view of everything the rendering surface draws.
#[derive(Clone, Copy, Debug)]
pub struct RenderSnapshot<'a> {
    pub revision: u64,
    pub current_index: usize,
    pub scene_count: usize,
    pub active: &'a Scene,
    pub outgoing: Option<&'a Scene>,
    /// Hotspots are hidden during a crossfade and fade in once idle.
    pub hotspots_visible: bool,
    pub scale: f32,
    pub translate: Vec2,
    pub dragging: bool,
    /// Zoomed in far enough that a drag would pan.
    pub pannable: bool,
}

pub struct Viewer {
    graph: SceneGraph,
    nav: Navigator,
    transition: TransitionMachine,
    transform: ViewportTransform,
    config: ViewerConfig,
    observers: Vec<Box<dyn SceneChangeObserver>>,
    revision: u64,
}

impl Viewer {
    pub fn new(graph: SceneGraph, config: ViewerConfig, viewport_size: Vec2) -> Self {
        let config = config.sanitized();
        let nav = Navigator::for_graph(&graph);
        let first = SceneRef {
            index: 0,
            id: graph.scene_at(0).id,
        };
        let transition = TransitionMachine::new(first, config.transition_dwell);
        let transform = ViewportTransform::new(viewport_size, &config);
        Self {
            graph,
            nav,
            transition,
            transform,
            config,
            observers: Vec::new(),
            revision: 0,
        }
    }

    pub fn graph(&self) -> &SceneGraph {
        &self.graph
    }

    pub fn config(&self) -> &ViewerConfig {
        &self.config
    }

    #[inline]
    pub fn current_index(&self) -> usize {
        self.nav.current_index()
    }

    pub fn active_scene(&self) -> &Scene {
        self.graph.scene_at(self.transition.active().index)
    }

    pub fn outgoing_scene(&self) -> Option<&Scene> {
        self.transition
            .outgoing()
            .map(|r| self.graph.scene_at(r.index))
    }

    pub fn phase(&self) -> TransitionPhase {
        self.transition.phase()
    }

    pub fn transform(&self) -> &ViewportTransform {
        &self.transform
    }

    #[inline]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Registers a scene-change subscriber. The transform engine is always
    /// notified first.
    pub fn subscribe(&mut self, observer: Box<dyn SceneChangeObserver>) {
        self.observers.push(observer);
    }

    // ---------------- Navigation ----------------

    pub fn next(&mut self, now: Instant) -> bool {
        self.nav.next();
        self.sync_scene(now)
    }

    pub fn prev(&mut self, now: Instant) -> bool {
        self.nav.prev();
        self.sync_scene(now)
    }

    /// Thumbnail selection. Out-of-range indices are rejected without any
    /// state change.
    pub fn jump_to_index(&mut self, index: usize, now: Instant) -> Result<bool, NavigationError> {
        self.nav.jump_to_index(index)?;
        Ok(self.sync_scene(now))
    }

    /// Unknown ids are ignored.
    pub fn jump_to_scene_id(&mut self, id: SceneId, now: Instant) -> bool {
        if self.nav.jump_to_scene_id(&self.graph, id).is_none() {
            return false;
        }
        self.sync_scene(now)
    }

    /// Follows a hotspot on the active scene.
    pub fn activate_hotspot(&mut self, hotspot_id: &str, now: Instant) -> bool {
        let active = self.transition.active().index;
        let Some(target) = self
            .graph
            .hotspot(active, hotspot_id)
            .map(|h| h.target_scene_id)
        else {
            log::debug!("[nav] no hotspot {:?} on the active scene", hotspot_id);
            return false;
        };
        self.jump_to_scene_id(target, now)
    }

    fn sync_scene(&mut self, now: Instant) -> bool {
        let index = self.nav.current_index();
        let requested = SceneRef {
            index,
            id: self.graph.scene_at(index).id,
        };
        let Some(change) = self.transition.request(requested, now) else {
            return false;
        };
        self.notify(&change);
        self.bump();
        true
    }

    fn notify(&mut self, change: &SceneChanged) {
        log::info!(
            "[nav] scene {} -> {} (index {})",
            change.from.id,
            change.to.id,
            change.to.index
        );
        self.transform.scene_changed(change);
        for observer in self.observers.iter_mut() {
            observer.scene_changed(change);
        }
    }

    // ---------------- Zoom / pan ----------------

    pub fn zoom_by(&mut self, factor: f32, anchor: Vec2, now: Instant) -> bool {
        let changed = self.transform.zoom_by(factor, anchor, now);
        self.bump_if(changed)
    }

    /// One wheel notch: negative `delta_y` (scroll up) zooms in.
    pub fn wheel(&mut self, delta_y: f32, anchor: Vec2, now: Instant) -> bool {
        if delta_y == 0.0 || !delta_y.is_finite() {
            return false;
        }
        let factor = if delta_y < 0.0 {
            self.config.wheel_zoom_factor
        } else {
            1.0 / self.config.wheel_zoom_factor
        };
        self.zoom_by(factor, anchor, now)
    }

    pub fn zoom_in(&mut self, now: Instant) -> bool {
        let target = self.transform.scale() * self.config.button_zoom_step;
        let changed = self.transform.zoom_to(target, now);
        self.bump_if(changed)
    }

    pub fn zoom_out(&mut self, now: Instant) -> bool {
        let target = self.transform.scale() / self.config.button_zoom_step;
        let changed = self.transform.zoom_to(target, now);
        self.bump_if(changed)
    }

    pub fn reset_zoom(&mut self) -> bool {
        let changed = self.transform.reset();
        self.bump_if(changed)
    }

    pub fn begin_drag(&mut self, pointer: Vec2) -> bool {
        let started = self.transform.begin_drag(pointer);
        self.bump_if(started)
    }

    pub fn drag_to(&mut self, pointer: Vec2, now: Instant) -> bool {
        let moved = self.transform.drag_to(pointer, now);
        self.bump_if(moved)
    }

    pub fn end_drag(&mut self, now: Instant) -> bool {
        let ended = self.transform.end_drag(now);
        self.bump_if(ended)
    }

    pub fn set_viewport_size(&mut self, size: Vec2, now: Instant) {
        self.transform.set_viewport_size(size, now);
    }

    // ---------------- Timers ----------------

    /// Fires due timers. Returns true when visible state changed.
    pub fn poll(&mut self, now: Instant) -> bool {
        let settled = self.transition.poll(now);
        let clamped = self.transform.poll(now);
        self.bump_if(settled || clamped)
    }

    /// Teardown: cancel both timers and any drag so nothing fires later
    /// against stale state.
    pub fn shutdown(&mut self) {
        self.transition.cancel();
        self.transform.cancel();
        self.bump();
    }

    pub fn snapshot(&self) -> RenderSnapshot<'_> {
        RenderSnapshot {
            revision: self.revision,
            current_index: self.nav.current_index(),
            scene_count: self.graph.scene_count(),
            active: self.active_scene(),
            outgoing: self.outgoing_scene(),
            hotspots_visible: !self.transition.is_transitioning(),
            scale: self.transform.scale(),
            translate: self.transform.translate(),
            dragging: self.transform.is_dragging(),
            pannable: self.transform.scale() > 1.0,
        }
    }

    fn bump(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }

    fn bump_if(&mut self, changed: bool) -> bool {
        if changed {
            self.bump();
        }
        changed
    }
}
