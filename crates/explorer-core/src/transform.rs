//! Bounded zoom/pan transform for the scene viewport.
//!
//! The transform is a uniform scale about the viewport centre followed by a
//! translation, i.e. a content point `p` (relative to the centre, unscaled)
//! lands on screen at `centre + translate + scale * p`. Pointer positions are
//! given relative to the viewport's top-left corner in CSS pixels.
//!
//! Pan bounds are not enforced on every drag frame. A settle timer is re-armed
//! by each change and the clamp runs once it fires, so an in-progress drag is
//! never fought. Scale changes clamp immediately as well.

use crate::config::ViewerConfig;
use crate::timer::OneShotTimer;
use crate::transition::{SceneChangeObserver, SceneChanged};
use glam::Vec2;
use instant::Instant;
use std::time::Duration;

const SCALE_EPSILON: f32 = 1e-6;

#[derive(Clone, Debug)]
pub struct ViewportTransform {
    scale: f32,
    translate: Vec2,
    drag_anchor: Option<Vec2>,
    viewport_size: Vec2,
    min_scale: f32,
    max_scale: f32,
    settle: OneShotTimer,
    settle_delay: Duration,
}

impl ViewportTransform {
    pub fn new(viewport_size: Vec2, config: &ViewerConfig) -> Self {
        Self {
            scale: 1.0,
            translate: Vec2::ZERO,
            drag_anchor: None,
            viewport_size: viewport_size.max(Vec2::ZERO),
            min_scale: config.min_scale,
            max_scale: config.max_scale,
            settle: OneShotTimer::default(),
            settle_delay: config.pan_settle_delay,
        }
    }

    #[inline]
    pub fn scale(&self) -> f32 {
        self.scale
    }

    #[inline]
    pub fn translate(&self) -> Vec2 {
        self.translate
    }

    #[inline]
    pub fn viewport_size(&self) -> Vec2 {
        self.viewport_size
    }

    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.drag_anchor.is_some()
    }

    pub fn drag_anchor(&self) -> Option<Vec2> {
        self.drag_anchor
    }

    pub fn settle_pending(&self) -> bool {
        self.settle.is_pending()
    }

    pub fn is_identity(&self) -> bool {
        (self.scale - 1.0).abs() < SCALE_EPSILON && self.translate == Vec2::ZERO
    }

    /// Largest allowed |translate| per axis at the current scale.
    pub fn max_offset(&self) -> Vec2 {
        ((self.scale - 1.0) * self.viewport_size * 0.5).max(Vec2::ZERO)
    }

    /// Maps a viewport point to the content point under it, relative to the
    /// content centre in unscaled pixels.
    pub fn content_point_at(&self, view_pos: Vec2) -> Vec2 {
        (view_pos - self.viewport_size * 0.5 - self.translate) / self.scale
    }

    /// Inverse of [`ViewportTransform::content_point_at`].
    pub fn view_point_of(&self, content: Vec2) -> Vec2 {
        self.viewport_size * 0.5 + self.translate + content * self.scale
    }

    pub fn set_viewport_size(&mut self, size: Vec2, now: Instant) {
        let size = size.max(Vec2::ZERO);
        if size == self.viewport_size {
            return;
        }
        self.viewport_size = size;
        self.settle.start(now, self.settle_delay);
    }

    /// Multiplies the scale by `factor`, keeping the content point under
    /// `anchor` (viewport-relative) fixed. Returns false when nothing changed.
    pub fn zoom_by(&mut self, factor: f32, anchor: Vec2, now: Instant) -> bool {
        if !(factor.is_finite() && factor > 0.0) {
            return false;
        }
        let old = self.scale;
        let new = (old * factor).clamp(self.min_scale, self.max_scale);
        if (new - old).abs() < SCALE_EPSILON {
            return false;
        }
        let offset = anchor - self.viewport_size * 0.5 - self.translate;
        self.translate -= offset * (new - old) / old;
        self.scale = new;
        self.clamp_translation();
        self.settle.start(now, self.settle_delay);
        true
    }

    /// Sets the scale directly (buttons). Translation is kept, then clamped.
    pub fn zoom_to(&mut self, scale: f32, now: Instant) -> bool {
        if !scale.is_finite() {
            return false;
        }
        let new = scale.clamp(self.min_scale, self.max_scale);
        if (new - self.scale).abs() < SCALE_EPSILON {
            return false;
        }
        self.scale = new;
        self.clamp_translation();
        self.settle.start(now, self.settle_delay);
        true
    }

    /// Back to identity. Ends any drag and drops the pending settle.
    pub fn reset(&mut self) -> bool {
        let changed = !self.is_identity() || self.is_dragging();
        self.scale = 1.0;
        self.translate = Vec2::ZERO;
        self.drag_anchor = None;
        self.settle.cancel();
        changed
    }

    /// Starts a pan. Rejected unless zoomed in past 1x.
    pub fn begin_drag(&mut self, pointer: Vec2) -> bool {
        if self.scale <= 1.0 {
            log::debug!("[zoom] drag rejected at scale {:.2}", self.scale);
            return false;
        }
        self.drag_anchor = Some(pointer - self.translate);
        true
    }

    pub fn drag_to(&mut self, pointer: Vec2, now: Instant) -> bool {
        let Some(anchor) = self.drag_anchor else {
            return false;
        };
        let next = pointer - anchor;
        if next == self.translate {
            return false;
        }
        self.translate = next;
        self.settle.start(now, self.settle_delay);
        true
    }

    pub fn end_drag(&mut self, now: Instant) -> bool {
        if self.drag_anchor.take().is_none() {
            return false;
        }
        self.settle.start(now, self.settle_delay);
        true
    }

    /// Applies the debounced bounds clamp once the settle delay elapsed.
    /// A settle that fires mid-drag is skipped; `end_drag` re-arms it.
    pub fn poll(&mut self, now: Instant) -> bool {
        if !self.settle.fire_if_due(now) || self.is_dragging() {
            return false;
        }
        self.clamp_translation()
    }

    /// Teardown: drops the settle timer and any drag in progress.
    pub fn cancel(&mut self) {
        self.settle.cancel();
        self.drag_anchor = None;
    }

    fn clamp_translation(&mut self) -> bool {
        let max = self.max_offset();
        let clamped = self.translate.clamp(-max, max);
        if clamped == self.translate {
            return false;
        }
        self.translate = clamped;
        true
    }
}

impl SceneChangeObserver for ViewportTransform {
    fn scene_changed(&mut self, change: &SceneChanged) {
        if self.reset() {
            log::debug!("[zoom] reset for scene {}", change.to.id);
        }
    }
}
