//! Keyboard and pointer routing, plus the fullscreen toggle.
//!
//! Keys are matched on `KeyboardEvent.key` strings. The fullscreen platform is
//! injected; the router never assumes a request succeeded and only changes
//! its mode when the platform reports a change.

use crate::constants::MAX_DIGIT_SHORTCUT;
use crate::scene::SceneId;
use crate::viewer::Viewer;
use glam::Vec2;
use instant::Instant;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Prev,
    Next,
    JumpToIndex(usize),
    JumpToScene(SceneId),
    ActivateHotspot(String),
    ZoomIn,
    ZoomOut,
    ResetZoom,
    ToggleFullscreen,
    ExitFullscreen,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerInput {
    Down(Vec2),
    Move(Vec2),
    Up,
    Wheel { delta_y: f32, at: Vec2 },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum FullscreenMode {
    #[default]
    Windowed,
    Fullscreen,
}

/// Platform fullscreen API. The platform is the source of truth for the mode.
pub trait FullscreenPlatform {
    fn is_fullscreen(&self) -> bool;
    fn request_fullscreen(&self) -> anyhow::Result<()>;
    fn exit_fullscreen(&self) -> anyhow::Result<()>;
}

/// Digit `1`..`9` selects scene `digit - 1` when it exists.
#[inline]
pub fn scene_index_for_digit(key: &str, scene_count: usize) -> Option<usize> {
    let mut chars = key.chars();
    let (Some(c), None) = (chars.next(), chars.next()) else {
        return None;
    };
    let digit = c.to_digit(10)? as usize;
    if digit == 0 || digit > MAX_DIGIT_SHORTCUT {
        return None;
    }
    let index = digit - 1;
    (index < scene_count).then_some(index)
}

#[inline]
pub fn command_for_key(key: &str, scene_count: usize) -> Option<Command> {
    if let Some(index) = scene_index_for_digit(key, scene_count) {
        return Some(Command::JumpToIndex(index));
    }
    match key {
        "ArrowLeft" => Some(Command::Prev),
        "ArrowRight" => Some(Command::Next),
        "f" | "F" => Some(Command::ToggleFullscreen),
        "Escape" => Some(Command::ExitFullscreen),
        "+" | "=" => Some(Command::ZoomIn),
        "-" | "_" => Some(Command::ZoomOut),
        "0" => Some(Command::ResetZoom),
        _ => None,
    }
}

pub struct InputRouter<P> {
    platform: P,
    mode: FullscreenMode,
}

impl<P: FullscreenPlatform> InputRouter<P> {
    pub fn new(platform: P) -> Self {
        let mut router = Self {
            platform,
            mode: FullscreenMode::Windowed,
        };
        router.on_fullscreen_change();
        router
    }

    pub fn platform(&self) -> &P {
        &self.platform
    }

    #[inline]
    pub fn fullscreen_mode(&self) -> FullscreenMode {
        self.mode
    }

    /// Returns false for keys that map to no command, so the caller can let
    /// the event through. Escape outside fullscreen is left to the page.
    pub fn handle_key(&mut self, viewer: &mut Viewer, key: &str, now: Instant) -> bool {
        match command_for_key(key, viewer.graph().scene_count()) {
            Some(Command::ExitFullscreen) if self.mode == FullscreenMode::Windowed => false,
            Some(cmd) => {
                self.execute(viewer, cmd, now);
                true
            }
            None => false,
        }
    }

    /// Runs a command. Returns true when viewer state changed.
    pub fn execute(&mut self, viewer: &mut Viewer, cmd: Command, now: Instant) -> bool {
        match cmd {
            Command::Prev => viewer.prev(now),
            Command::Next => viewer.next(now),
            Command::JumpToIndex(index) => match viewer.jump_to_index(index, now) {
                Ok(changed) => changed,
                Err(e) => {
                    log::warn!("[input] {}", e);
                    false
                }
            },
            Command::JumpToScene(id) => viewer.jump_to_scene_id(id, now),
            Command::ActivateHotspot(id) => viewer.activate_hotspot(&id, now),
            Command::ZoomIn => viewer.zoom_in(now),
            Command::ZoomOut => viewer.zoom_out(now),
            Command::ResetZoom => viewer.reset_zoom(),
            Command::ToggleFullscreen => {
                self.toggle_fullscreen();
                false
            }
            Command::ExitFullscreen => {
                if self.mode == FullscreenMode::Fullscreen {
                    self.exit_fullscreen();
                }
                false
            }
        }
    }

    /// Down begins a drag (only when zoomed in), Move pans, Up ends, Wheel
    /// zooms about the pointer. Returns true when viewer state changed; for
    /// `Down` that means a drag actually started.
    pub fn handle_pointer(
        &mut self,
        viewer: &mut Viewer,
        input: PointerInput,
        now: Instant,
    ) -> bool {
        match input {
            PointerInput::Down(at) => viewer.begin_drag(at),
            PointerInput::Move(at) => viewer.drag_to(at, now),
            PointerInput::Up => viewer.end_drag(now),
            PointerInput::Wheel { delta_y, at } => viewer.wheel(delta_y, at, now),
        }
    }

    /// Reconciles the mode with the platform after a change notification.
    pub fn on_fullscreen_change(&mut self) -> FullscreenMode {
        let mode = if self.platform.is_fullscreen() {
            FullscreenMode::Fullscreen
        } else {
            FullscreenMode::Windowed
        };
        if mode != self.mode {
            log::info!("[fullscreen] {:?} -> {:?}", self.mode, mode);
            self.mode = mode;
        }
        mode
    }

    fn toggle_fullscreen(&mut self) {
        match self.mode {
            FullscreenMode::Fullscreen => self.exit_fullscreen(),
            FullscreenMode::Windowed => {
                if let Err(e) = self.platform.request_fullscreen() {
                    log::warn!("[fullscreen] request failed: {:#}", e);
                }
            }
        }
    }

    fn exit_fullscreen(&mut self) {
        if let Err(e) = self.platform.exit_fullscreen() {
            log::warn!("[fullscreen] exit failed: {:#}", e);
        }
    }
}
