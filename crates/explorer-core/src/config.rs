use crate::constants::*;
use std::time::Duration;

/// Tunables for a `Viewer`. `Default` mirrors the constants module.
#[derive(Clone, Debug, PartialEq)]
pub struct ViewerConfig {
    pub transition_dwell: Duration,
    pub pan_settle_delay: Duration,
    pub min_scale: f32,
    pub max_scale: f32,
    pub wheel_zoom_factor: f32,
    pub button_zoom_step: f32,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            transition_dwell: TRANSITION_DWELL,
            pan_settle_delay: PAN_SETTLE_DELAY,
            min_scale: MIN_SCALE,
            max_scale: MAX_SCALE,
            wheel_zoom_factor: WHEEL_ZOOM_FACTOR,
            button_zoom_step: BUTTON_ZOOM_STEP,
        }
    }
}

impl ViewerConfig {
    /// Normalizes non-finite, inverted or non-positive limits and steps so
    /// the state machines never see an empty clamp range. The limits always
    /// bracket 1x, so a reset lands inside them.
    pub fn sanitized(mut self) -> Self {
        if !self.min_scale.is_finite() {
            self.min_scale = MIN_SCALE;
        }
        if !self.max_scale.is_finite() {
            self.max_scale = MAX_SCALE;
        }
        if self.min_scale > self.max_scale {
            std::mem::swap(&mut self.min_scale, &mut self.max_scale);
        }
        if !(self.min_scale > 0.0) {
            self.min_scale = MIN_SCALE;
        }
        self.min_scale = self.min_scale.min(1.0);
        self.max_scale = self.max_scale.max(1.0);
        if !(self.wheel_zoom_factor > 1.0) {
            self.wheel_zoom_factor = WHEEL_ZOOM_FACTOR;
        }
        if !(self.button_zoom_step > 1.0) {
            self.button_zoom_step = BUTTON_ZOOM_STEP;
        }
        self
    }
}
