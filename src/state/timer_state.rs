//! Accumulating elapsed-time tracker

use std::time::Duration;
use tokio::time::Instant;
use tracing::debug;

use crate::error::TimerError;

/// Elapsed time across any number of start/stop cycles.
///
/// Closed run segments are folded into `accumulated` by `stop`; the open
/// segment lives only in `running_since`, so `elapsed` never mutates.
#[derive(Debug, Clone, Default)]
pub struct TimerState {
    running_since: Option<Instant>,
    accumulated: Duration,
}

impl TimerState {
    /// Create a stopped timer with nothing accumulated
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin a new run segment
    pub fn start(&mut self) -> Result<(), TimerError> {
        if self.running_since.is_some() {
            return Err(TimerError::AlreadyRunning);
        }
        self.running_since = Some(Instant::now());
        debug!("Timer started with {:?} accumulated", self.accumulated);
        Ok(())
    }

    /// Close the current run segment and return the new accumulated total
    pub fn stop(&mut self) -> Result<Duration, TimerError> {
        let since = self.running_since.take().ok_or(TimerError::NotRunning)?;
        self.accumulated += since.elapsed();
        debug!("Timer stopped at {:?}", self.accumulated);
        Ok(self.accumulated)
    }

    /// Total elapsed time, including the open segment if running
    pub fn elapsed(&self) -> Duration {
        match self.running_since {
            Some(since) => self.accumulated + since.elapsed(),
            None => self.accumulated,
        }
    }

    /// Total elapsed time in fractional seconds
    pub fn elapsed_secs(&self) -> f64 {
        self.elapsed().as_secs_f64()
    }

    /// Drop all accumulated time and stop, whatever the current state
    pub fn reset(&mut self) {
        self.running_since = None;
        self.accumulated = Duration::ZERO;
        debug!("Timer reset");
    }

    /// Check if a run segment is open
    pub fn is_running(&self) -> bool {
        self.running_since.is_some()
    }
}
