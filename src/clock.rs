use std::time::{Duration, Instant};

/// Fixed-rate tick scheduler.
///
/// Deadlines advance by whole intervals so the rate does not drift with
/// frame work. A loop that falls more than one interval behind re-anchors
/// on the current time instead of bursting to catch up.
#[derive(Debug, Clone, Copy)]
pub struct TickClock {
    interval: Duration,
    next_tick: Instant,
}

impl TickClock {
    /// Creates a clock whose first tick is due one interval after `now`.
    #[must_use]
    pub fn new(ticks_per_second: u32, now: Instant) -> Self {
        let interval = interval_for_rate(ticks_per_second);
        Self {
            interval,
            next_tick: now + interval,
        }
    }

    #[must_use]
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// How long the caller may block before the next tick is due.
    #[must_use]
    pub fn time_until_tick(&self, now: Instant) -> Duration {
        self.next_tick.saturating_duration_since(now)
    }

    #[must_use]
    pub fn is_due(&self, now: Instant) -> bool {
        now >= self.next_tick
    }

    /// Schedules the deadline after the one that just fired.
    pub fn advance(&mut self, now: Instant) {
        self.next_tick += self.interval;
        if self.next_tick <= now {
            self.next_tick = now + self.interval;
        }
    }
}

/// Converts a tick rate into a period. A zero rate is treated as one.
#[must_use]
pub fn interval_for_rate(ticks_per_second: u32) -> Duration {
    Duration::from_secs(1) / ticks_per_second.max(1)
}
