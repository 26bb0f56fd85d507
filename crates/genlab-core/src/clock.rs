//! Clock abstraction used to seed non-deterministic sources.

use chrono::{DateTime, Utc};

/// Abstraction over system time so clock-seeded sources stay testable.
pub trait Clock: Send + Sync {
    /// Returns the current time.
    fn now(&self) -> DateTime<Utc>;

    /// Returns a high-resolution tick count for seeding.
    ///
    /// Nanoseconds since the Unix epoch, falling back to microseconds for
    /// instants outside the range `i64` nanoseconds can represent.
    fn ticks(&self) -> i64 {
        let now = self.now();
        now.timestamp_nanos_opt()
            .unwrap_or_else(|| now.timestamp_micros())
    }
}

/// Production clock that delegates to the system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
