//! Fixed-rate frame pacing.

use std::thread;
use std::time::{Duration, Instant};

use glyphfall_core::config::frame_budget;

/// Holds the render loop to a steady frame rate.
///
/// An iteration that overruns its budget is followed immediately by the
/// next one. Lost time is never made up.
#[derive(Debug, Clone, Copy)]
pub struct FramePacer {
    budget: Duration,
}

impl Default for FramePacer {
    fn default() -> Self {
        Self::new(frame_budget())
    }
}

impl FramePacer {
    pub fn new(budget: Duration) -> Self {
        Self { budget }
    }

    /// Mark the start of an iteration.
    pub fn start(&self) -> Instant {
        Instant::now()
    }

    /// Time left in the budget after `elapsed`, if any.
    pub fn remaining(&self, elapsed: Duration) -> Option<Duration> {
        self.budget
            .checked_sub(elapsed)
            .filter(|rest| !rest.is_zero())
    }

    /// Sleep out whatever is left of the iteration begun at `frame_start`.
    pub fn wait(&self, frame_start: Instant) {
        if let Some(rest) = self.remaining(frame_start.elapsed()) {
            thread::sleep(rest);
        }
    }
}
