//! Periodic tick source for the game loop.

use std::time::Duration;
use tokio::time::{Instant, Interval, MissedTickBehavior, interval_at};

/// Fires once per period until stopped. The first tick lands one full period
/// after [`TickTimer::start`].
pub struct TickTimer {
    interval: Option<Interval>,
}

impl TickTimer {
    pub fn start(period: Duration) -> Self {
        let mut interval = interval_at(Instant::now() + period, period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        Self {
            interval: Some(interval),
        }
    }

    pub fn is_running(&self) -> bool {
        self.interval.is_some()
    }

    /// Stop firing; there is no way to restart
    pub fn stop(&mut self) {
        self.interval = None;
    }

    /// Wait for the next tick. Never completes once stopped.
    pub async fn tick(&mut self) -> Instant {
        match self.interval.as_mut() {
            Some(interval) => interval.tick().await,
            None => std::future::pending().await,
        }
    }
}
