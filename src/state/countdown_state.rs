//! Countdown built on top of the elapsed-time tracker

use std::time::Duration;
use tracing::debug;

use crate::error::TimerError;

use super::TimerState;

/// Countdown toward a fixed target duration
#[derive(Debug, Clone)]
pub struct CountdownState {
    timer: TimerState,
    duration: Duration,
}

impl CountdownState {
    /// Create a countdown that has not started yet
    pub fn new(duration: Duration) -> Self {
        Self {
            timer: TimerState::new(),
            duration,
        }
    }

    /// Start counting down from the full duration
    pub fn start(&mut self) -> Result<(), TimerError> {
        debug!("Starting countdown of {:?}", self.duration);
        self.timer.start()
    }

    /// Stop counting down, keeping whatever time is left
    pub fn cancel(&mut self) {
        if self.timer.is_running() {
            if let Ok(elapsed) = self.timer.stop() {
                debug!("Countdown cancelled after {:?}", elapsed);
            }
        }
    }

    /// Target length of the countdown
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Time left before expiry, never below zero
    pub fn remaining(&self) -> Duration {
        self.duration.saturating_sub(self.timer.elapsed())
    }

    /// Remaining time rounded up to whole seconds.
    ///
    /// Rounds up so the display only reads `00:00` once the countdown has
    /// actually expired.
    pub fn remaining_whole_secs(&self) -> u64 {
        let remaining = self.remaining();
        remaining.as_secs() + u64::from(remaining.subsec_nanos() > 0)
    }

    /// Check if no time is left
    pub fn is_expired(&self) -> bool {
        self.remaining().is_zero()
    }

    /// Check if the countdown is currently ticking
    pub fn is_running(&self) -> bool {
        self.timer.is_running()
    }
}
