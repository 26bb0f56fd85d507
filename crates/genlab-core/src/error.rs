//! Generator construction errors.

use thiserror::Error;

/// Raised when a combinator is handed arguments it cannot build a generator
/// from. A generator that was constructed successfully never fails when run.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GenError {
    /// `choose` was given an empty or inverted range.
    #[error("invalid range: stop ({stop}) must be greater than start ({start})")]
    InvalidRange {
        /// Inclusive lower bound.
        start: i32,
        /// Exclusive upper bound.
        stop: i32,
    },

    /// A uniform choice was requested from an empty set of alternatives.
    #[error("cannot choose from an empty set of alternatives")]
    EmptyChoices,

    /// More alternatives than an `i32` index can address.
    #[error("too many alternatives to choose from: {0}")]
    TooManyChoices(usize),

    /// A weighted choice table cannot produce a selection.
    #[error("invalid weights: {0}")]
    InvalidWeights(String),
}
