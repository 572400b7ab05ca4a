use serde::{Deserialize, Serialize};

/// Cooperative rate limiter advanced once per tick.
///
/// The countdown is decremented by the tick duration and fires as soon as less
/// than one tick remains, then re-arms at the full interval. Compared with an
/// "interval elapsed" rule this fires up to one tick early.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Countdown {
    pub interval: f64,
    pub remaining: f64,
}

impl Countdown {
    /// Armed at the full interval.
    pub fn new(interval: f64) -> Self {
        Countdown {
            interval,
            remaining: interval,
        }
    }

    /// Advances by `dt` and reports whether the countdown fired this tick.
    pub fn advance(&mut self, dt: f64) -> bool {
        self.remaining -= dt;
        if self.remaining < dt {
            self.remaining = self.interval;
            true
        } else {
            false
        }
    }

    pub fn rearm(&mut self) {
        self.remaining = self.interval;
    }
}
