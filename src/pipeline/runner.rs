//! Simulated pipeline runner
//!
//! Nothing is executed: the runner only moves `WizardState::progress_percent`
//! from 0 to 100, one increment per timer tick. The timer is cooperative. The
//! caller's loop asks for the next deadline, waits for it however suits the
//! front end (event polling or sleeping), then calls `tick`.

use std::time::{Duration, Instant};

use log::info;

use super::error::Result;
use super::notice::Notice;
use super::state::{WizardState, PROGRESS_COMPLETE};

/// Default cadence between progress increments
pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_millis(100);

/// Percentage added on each tick
pub const PROGRESS_INCREMENT: u8 = 1;

/// What a single tick did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TickOutcome {
    /// Not running, or the deadline has not passed yet
    Idle,
    /// Progress moved to the given percentage
    Progress(u8),
    /// Progress reached 100; the run is over
    Completed(Notice),
}

#[derive(Debug, Clone)]
pub struct SimulatedRunner {
    interval: Duration,
    next_deadline: Option<Instant>,
}

impl Default for SimulatedRunner {
    fn default() -> Self {
        Self::new(DEFAULT_TICK_INTERVAL)
    }
}

impl SimulatedRunner {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            next_deadline: None,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn is_running(&self) -> bool {
        self.next_deadline.is_some()
    }

    /// Move the wizard to Processing with progress at 0 and arm the timer.
    ///
    /// Fails only when the wizard is not on the Review step.
    pub fn start(&mut self, state: &mut WizardState, now: Instant) -> Result<()> {
        state.start_run()?;
        self.next_deadline = Some(now + self.interval);
        Ok(())
    }

    /// Time left until the next tick is due, `None` when idle
    pub fn time_until_tick(&self, now: Instant) -> Option<Duration> {
        self.next_deadline
            .map(|deadline| deadline.saturating_duration_since(now))
    }

    /// Fire one tick if its deadline has passed.
    ///
    /// At most one increment is applied per call, so progress never skips a
    /// value even if the caller was late.
    pub fn tick(&mut self, state: &mut WizardState, now: Instant) -> TickOutcome {
        let deadline = match self.next_deadline {
            Some(d) if now >= d => d,
            _ => return TickOutcome::Idle,
        };

        state.progress_percent = state
            .progress_percent
            .saturating_add(PROGRESS_INCREMENT)
            .min(PROGRESS_COMPLETE);

        if state.progress_percent >= PROGRESS_COMPLETE {
            state.complete_run();
            self.next_deadline = None;
            info!("pipeline run complete");
            return TickOutcome::Completed(Notice::pipeline_complete());
        }

        self.next_deadline = Some(deadline + self.interval);
        TickOutcome::Progress(state.progress_percent)
    }
}
