//! Source variants and their construction entry points.
//!
//! - [`LinearCongruential`]: the 48-bit recurrence every regression fixture
//!   is recorded against.
//! - Clock-seeded: a linear-congruential source whose seed is read from a
//!   [`Clock`] at construction time.
//! - [`Secure`]: each draw comes straight from a CSPRNG; not reproducible.
//! - [`Incrementing`]: yields `1, 2, 3, ...` for exhaustive,
//!   order-sensitive tests.

use rand::Rng as _;
use tracing::debug;

use crate::clock::{Clock, SystemClock};
use crate::rng::{RandomSource, Rng};

const MULTIPLIER: u64 = 0x5_DEEC_E66D;
const INCREMENT: u64 = 0xB;
const SEED_MASK: u64 = (1 << 48) - 1;

/// Linear-congruential source over a 48-bit seed.
///
/// `seed' = (seed * 0x5DEECE66D + 0xB) mod 2^48`; the draw is bits 16..48
/// of `seed'` read as a signed 32-bit integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinearCongruential {
    seed: u64,
}

impl LinearCongruential {
    /// Creates a source from any 64-bit seed; only the low 48 bits are kept.
    #[allow(clippy::cast_sign_loss)]
    #[must_use]
    pub fn new(seed: i64) -> Self {
        Self {
            seed: seed as u64 & SEED_MASK,
        }
    }

    /// Returns the current 48-bit seed.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl RandomSource for LinearCongruential {
    #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
    fn next_int(&self) -> (Rng, i32) {
        let seed = self
            .seed
            .wrapping_mul(MULTIPLIER)
            .wrapping_add(INCREMENT)
            & SEED_MASK;
        (Rng::new(Self { seed }), (seed >> 16) as u32 as i32)
    }
}

/// Stateless source drawing every value from the thread-local CSPRNG.
///
/// The state that follows a draw is the source itself, so replaying a state
/// does not reproduce its value.
#[derive(Debug, Clone, Copy, Default)]
pub struct Secure;

impl RandomSource for Secure {
    fn next_int(&self) -> (Rng, i32) {
        (Rng::new(*self), rand::rng().random::<i32>())
    }
}

/// Counts upward from 1, one step per draw.
///
/// Not random at all; for tests that need to know exactly which value each
/// draw sees.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Incrementing {
    next: i32,
}

impl Default for Incrementing {
    fn default() -> Self {
        Self { next: 1 }
    }
}

impl RandomSource for Incrementing {
    fn next_int(&self) -> (Rng, i32) {
        let following = Self {
            next: self.next.wrapping_add(1),
        };
        (Rng::new(following), self.next)
    }
}

impl Rng {
    /// Linear-congruential source with an explicit seed.
    pub fn simple(seed: i64) -> Self {
        debug!(seed, "created linear-congruential source");
        Self::new(LinearCongruential::new(seed))
    }

    /// Linear-congruential source seeded from `clock`.
    pub fn from_clock(clock: &dyn Clock) -> Self {
        let seed = clock.ticks();
        debug!(seed, "seeded linear-congruential source from clock");
        Self::new(LinearCongruential::new(seed))
    }

    /// Linear-congruential source seeded from the system clock.
    ///
    /// Every call reads the clock afresh; there is no shared default source.
    pub fn from_system_clock() -> Self {
        Self::from_clock(&SystemClock)
    }

    /// Source backed by the operating system's CSPRNG.
    pub fn secure() -> Self {
        debug!("created secure source");
        Self::new(Secure)
    }

    /// Source yielding `1, 2, 3, ...`.
    pub fn incrementing() -> Self {
        Self::new(Incrementing::default())
    }
}
