//! Crossfade bookkeeping between the outgoing and the newly active scene.
//!
//! `Idle` holds only the active scene. `Transitioning` also holds the outgoing
//! scene until the dwell timer fires. A change arriving mid-transition drops
//! the previous outgoing scene and restarts the dwell; there is no queue.

use crate::scene::SceneId;
use crate::timer::OneShotTimer;
use instant::Instant;
use std::time::Duration;

/// A scene as seen by the transition layer: its graph index and stable id.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SceneRef {
    pub index: usize,
    pub id: SceneId,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransitionPhase {
    Idle,
    Transitioning,
}

/// Emitted when the active scene actually changes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SceneChanged {
    pub from: SceneRef,
    pub to: SceneRef,
}

/// Subscriber for scene changes. Implementors reset per-scene state.
pub trait SceneChangeObserver {
    fn scene_changed(&mut self, change: &SceneChanged);
}

#[derive(Debug)]
pub struct TransitionMachine {
    active: SceneRef,
    outgoing: Option<SceneRef>,
    dwell: Duration,
    timer: OneShotTimer,
}

impl TransitionMachine {
    pub fn new(initial: SceneRef, dwell: Duration) -> Self {
        Self {
            active: initial,
            outgoing: None,
            dwell,
            timer: OneShotTimer::default(),
        }
    }

    #[inline]
    pub fn active(&self) -> SceneRef {
        self.active
    }

    #[inline]
    pub fn outgoing(&self) -> Option<SceneRef> {
        self.outgoing
    }

    pub fn phase(&self) -> TransitionPhase {
        if self.outgoing.is_some() {
            TransitionPhase::Transitioning
        } else {
            TransitionPhase::Idle
        }
    }

    #[inline]
    pub fn is_transitioning(&self) -> bool {
        self.phase() == TransitionPhase::Transitioning
    }

    /// Deadline of the pending dwell, if any.
    pub fn settles_at(&self) -> Option<Instant> {
        self.timer.deadline()
    }

    /// Makes `requested` the active scene. Same id as the active scene is a
    /// no-op and returns `None`.
    pub fn request(&mut self, requested: SceneRef, now: Instant) -> Option<SceneChanged> {
        if requested.id == self.active.id {
            return None;
        }
        let from = self.active;
        if let Some(dropped) = self.outgoing.replace(from) {
            log::debug!(
                "[transition] superseded; dropping outgoing scene {}",
                dropped.id
            );
        }
        self.active = requested;
        self.timer.start(now, self.dwell);
        log::debug!("[transition] {} -> {}", from.id, requested.id);
        Some(SceneChanged {
            from,
            to: requested,
        })
    }

    /// Clears the outgoing scene once the dwell has elapsed. Returns true on
    /// the poll that completes the transition.
    pub fn poll(&mut self, now: Instant) -> bool {
        if self.timer.fire_if_due(now) {
            self.outgoing = None;
            true
        } else {
            false
        }
    }

    /// Teardown: drop the pending dwell and any outgoing scene.
    pub fn cancel(&mut self) {
        self.timer.cancel();
        self.outgoing = None;
    }
}
