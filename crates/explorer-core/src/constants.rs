//! Interaction timing and zoom tuning constants.
//!
//! These express intended behavior (dwell times, clamp limits, step factors)
//! and keep magic numbers out of the state machines.
use std::time::Duration;

// Crossfade: how long the outgoing scene stays rendered after a scene change.
// Matches the dissolve animation on the rendering surface.
pub const TRANSITION_DWELL: Duration = Duration::from_millis(500);

// Debounce before the pan translation is clamped back into bounds.
pub const PAN_SETTLE_DELAY: Duration = Duration::from_millis(120);

// Zoom limits
pub const MIN_SCALE: f32 = 0.5;
pub const MAX_SCALE: f32 = 3.0;

// Per-notch wheel factor (zoom in); zoom out uses the reciprocal.
pub const WHEEL_ZOOM_FACTOR: f32 = 1.1;

// Multiplicative step for the zoom in/out buttons and keys.
pub const BUTTON_ZOOM_STEP: f32 = 1.25;

// Digit shortcuts address scenes 1..=9.
pub const MAX_DIGIT_SHORTCUT: usize = 9;
