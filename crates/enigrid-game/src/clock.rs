//! Play-time tracking for a game session.

use std::time::{Duration, Instant};

/// Elapsed play time, owned by the session that mutates it.
///
/// The clock accrues time only between [`start`](Self::start) and
/// [`pause`](Self::pause). Both are called inside the session's own state
/// transitions, so no time can be recorded once a game has left the playing
/// state — there is no background task to race against, elapsed time is
/// simply sampled on demand.
#[derive(Debug, Clone, Default)]
pub struct GameClock {
    started_at: Option<Instant>,
    accumulated: Duration,
}

impl GameClock {
    /// Creates a stopped clock at zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Restarts the clock from zero and begins accruing time.
    pub fn start(&mut self) {
        self.accumulated = Duration::ZERO;
        self.started_at = Some(Instant::now());
    }

    /// Stops accruing time, keeping the elapsed total.
    ///
    /// Pausing a stopped clock has no effect.
    pub fn pause(&mut self) {
        if let Some(started_at) = self.started_at.take() {
            self.accumulated += started_at.elapsed();
        }
    }

    /// Returns the total time accrued so far.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        match self.started_at {
            Some(started_at) => self.accumulated + started_at.elapsed(),
            None => self.accumulated,
        }
    }

    /// Returns `true` while the clock is accruing time.
    #[must_use]
    pub const fn is_running(&self) -> bool {
        self.started_at.is_some()
    }
}
