use instant::Instant;
use std::time::Duration;

/// Deadline-based one-shot timer.
///
/// Holds at most one pending deadline. Starting while pending replaces the old
/// deadline, which is how superseded transitions and debounces are cancelled.
/// Expiry is observed by polling with the current time from the event loop.
#[derive(Clone, Copy, Debug, Default)]
pub struct OneShotTimer {
    deadline: Option<Instant>,
}

impl OneShotTimer {
    pub fn start(&mut self, now: Instant, delay: Duration) {
        self.deadline = Some(now + delay);
    }

    /// Returns true if a pending deadline was dropped.
    pub fn cancel(&mut self) -> bool {
        self.deadline.take().is_some()
    }

    #[inline]
    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    #[inline]
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Fires (and disarms) when the deadline has been reached.
    pub fn fire_if_due(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}

