//! Genlab Core — pseudo-random source states.
//!
//! This crate defines the `RandomSource` capability, the immutable `Rng`
//! state handle every generator threads through, the concrete source
//! variants, and the error type shared by the generator crates.

pub mod clock;
pub mod error;
pub mod rng;
pub mod source;

pub use error::GenError;
pub use rng::{RandomSource, Rng};
