//! Scheduler time model.
//!
//! Each firing of the countdown scheduler is one `Tick`.  `SessionClock`
//! counts them and knows the wall-clock interval between firings, so elapsed
//! time can be reported without a datetime library.

use std::fmt;
use std::time::Duration;

/// An absolute scheduler tick counter.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);
}

impl std::ops::Add<u64> for Tick {
    type Output = Tick;
    #[inline]
    fn add(self, rhs: u64) -> Tick {
        Tick(self.0 + rhs)
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

// ── SessionClock ──────────────────────────────────────────────────────────────

/// Counts scheduler firings for one session.
#[derive(Clone, Debug)]
pub struct SessionClock {
    /// Real time between two firings.  Default: 1 s.
    pub interval: Duration,
    /// Number of ticks processed so far.
    pub current_tick: Tick,
}

impl SessionClock {
    pub fn new(interval: Duration) -> Self {
        Self { interval, current_tick: Tick::ZERO }
    }

    /// Advance the clock by one tick.
    #[inline]
    pub fn advance(&mut self) {
        self.current_tick = self.current_tick + 1;
    }

    /// Wall-clock time the session has simulated.
    pub fn elapsed(&self) -> Duration {
        let ticks = u32::try_from(self.current_tick.0).unwrap_or(u32::MAX);
        self.interval.saturating_mul(ticks)
    }
}

impl Default for SessionClock {
    fn default() -> Self {
        Self::new(Duration::from_secs(1))
    }
}

impl fmt::Display for SessionClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let secs = self.elapsed().as_secs();
        write!(f, "{} ({:02}:{:02})", self.current_tick, secs / 60, secs % 60)
    }
}
