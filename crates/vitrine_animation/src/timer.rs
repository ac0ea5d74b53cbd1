//! Fixed-interval timers
//!
//! The host feeds elapsed frame time; the timer reports how many periods
//! completed, so a long frame still produces every fire it spanned.

use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntervalTimer {
    period: Duration,
    elapsed: Duration,
}

impl IntervalTimer {
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            elapsed: Duration::ZERO,
        }
    }

    pub fn from_millis(ms: u64) -> Self {
        Self::new(Duration::from_millis(ms))
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Advance by `dt` and return the number of completed periods
    pub fn advance(&mut self, dt: Duration) -> u32 {
        if self.period.is_zero() {
            return 0;
        }

        self.elapsed += dt;
        let mut fired = 0;
        while self.elapsed >= self.period {
            self.elapsed -= self.period;
            fired += 1;
        }
        fired
    }

    pub fn reset(&mut self) {
        self.elapsed = Duration::ZERO;
    }
}
