//! Shared test doubles for the genlab generator engine.

mod clock;
mod source;

pub use clock::FixedClock;
pub use source::{SequenceSource, sequence};
