//! Test clock — pins the seed of clock-seeded sources.

use chrono::{DateTime, Utc};
use genlab_core::clock::Clock;

/// A clock that always returns a fixed point in time, so
/// `Rng::from_clock` yields a reproducible source.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}
