//! Random source abstraction.
//!
//! A source state is an immutable token standing for "the next draw".
//! Drawing never mutates the token: it returns the next token alongside the
//! drawn value, so the same state always yields the same draw and two copies
//! of a state are interchangeable.

use std::fmt;
use std::sync::Arc;

/// Capability every source variant provides.
pub trait RandomSource: fmt::Debug + Send + Sync {
    /// Draws a signed 32-bit integer, returning the state that follows it.
    fn next_int(&self) -> (Rng, i32);
}

/// Handle to an immutable source state.
///
/// Cloning is cheap and yields a state that produces exactly the same draws
/// as the original.
#[derive(Debug, Clone)]
pub struct Rng(Arc<dyn RandomSource>);

impl Rng {
    /// Wraps a source variant.
    pub fn new(source: impl RandomSource + 'static) -> Self {
        Self(Arc::new(source))
    }

    /// Draws any `i32`.
    pub fn next_int(&self) -> (Rng, i32) {
        self.0.next_int()
    }

    /// Draws an `i32` in `[0, i32::MAX]`.
    ///
    /// Negative draws map to `-(n + 1)`, which keeps `i32::MIN` in range
    /// where plain negation would overflow.
    pub fn non_negative_int(&self) -> (Rng, i32) {
        let (rng, n) = self.next_int();
        (rng, if n < 0 { -(n + 1) } else { n })
    }

    /// Draws an `i32` in `[1, i32::MAX - 1]`.
    pub fn natural_int(&self) -> (Rng, i32) {
        let (rng, n) = self.non_negative_int();
        (rng, 1 + n % (i32::MAX - 1))
    }

    /// Draws an `f64` in `[0.0, 1.0)`.
    ///
    /// Computed as `n * (1 / i32::MAX)`, so the single draw `n == i32::MAX`
    /// lands on `1.0`. Recorded fixtures depend on this exact product.
    pub fn double(&self) -> (Rng, f64) {
        let (rng, n) = self.non_negative_int();
        (rng, f64::from(n) * (1.0 / f64::from(i32::MAX)))
    }

    /// Draws a fair boolean: `true` when the drawn integer is even.
    pub fn bool(&self) -> (Rng, bool) {
        let (rng, n) = self.next_int();
        (rng, n % 2 == 0)
    }

    /// Returns `true` if both handles point at the same state token.
    ///
    /// Distinct tokens may still produce identical draws; this only detects
    /// that no draw happened between the two handles.
    pub fn is_same_state(&self, other: &Rng) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Replays a fixed list of integers, one per draw.
    #[derive(Debug)]
    struct Replay(Arc<[i32]>, usize);

    impl RandomSource for Replay {
        fn next_int(&self) -> (Rng, i32) {
            (Rng::new(Replay(Arc::clone(&self.0), self.1 + 1)), self.0[self.1])
        }
    }

    fn replay(values: &[i32]) -> Rng {
        Rng::new(Replay(Arc::from(values), 0))
    }

    #[test]
    fn test_non_negative_int_keeps_non_negative_draws() {
        assert_eq!(replay(&[0]).non_negative_int().1, 0);
        assert_eq!(replay(&[17]).non_negative_int().1, 17);
        assert_eq!(replay(&[i32::MAX]).non_negative_int().1, i32::MAX);
    }

    #[test]
    fn test_non_negative_int_folds_negative_draws() {
        assert_eq!(replay(&[-1]).non_negative_int().1, 0);
        assert_eq!(replay(&[-18]).non_negative_int().1, 17);
        assert_eq!(replay(&[i32::MIN]).non_negative_int().1, i32::MAX);
    }

    #[test]
    fn test_natural_int_stays_within_bounds() {
        assert_eq!(replay(&[0]).natural_int().1, 1);
        assert_eq!(replay(&[i32::MAX - 2]).natural_int().1, i32::MAX - 1);
        assert_eq!(replay(&[i32::MAX - 1]).natural_int().1, 1);
        assert_eq!(replay(&[i32::MIN]).natural_int().1, 2);
    }

    #[test]
    fn test_double_scales_by_reciprocal_of_int_max() {
        assert!((replay(&[0]).double().1).abs() < f64::EPSILON);
        let d = replay(&[1_000_000]).double().1;
        assert_eq!(d.to_bits(), (1_000_000.0 * (1.0 / 2_147_483_647.0_f64)).to_bits());
        assert!((d - 4.656_612_875_245_797e-4).abs() < 1e-15);
    }

    #[test]
    fn test_double_top_draw_reaches_one() {
        let top = replay(&[i32::MAX]).double().1;
        assert!((top - 1.0).abs() < f64::EPSILON);
        // i32::MIN folds to i32::MAX
        assert_eq!(replay(&[i32::MIN]).double().1.to_bits(), top.to_bits());
        assert!(replay(&[i32::MAX - 1]).double().1 < 1.0);
    }

    #[test]
    fn test_bool_is_true_for_even_draws() {
        assert!(replay(&[4]).bool().1);
        assert!(replay(&[-2]).bool().1);
        assert!(!replay(&[7]).bool().1);
        assert!(!replay(&[-3]).bool().1);
    }

    #[test]
    fn test_derived_draws_consume_exactly_one_value() {
        let rng = replay(&[5, 6, 7, 8, 9]);
        let (rng, _) = rng.non_negative_int();
        let (rng, _) = rng.natural_int();
        let (rng, _) = rng.double();
        let (rng, _) = rng.bool();
        assert_eq!(rng.next_int().1, 9);
    }

    #[test]
    fn test_same_state_draws_identically_twice() {
        let rng = replay(&[11, 22]);
        let (first_next, first) = rng.next_int();
        let (second_next, second) = rng.next_int();
        assert_eq!(first, second);
        assert_eq!(first_next.next_int().1, second_next.next_int().1);
    }

    #[test]
    fn test_is_same_state_distinguishes_clones_from_advanced_states() {
        let rng = replay(&[1, 2]);
        let copy = rng.clone();
        let (advanced, _) = rng.next_int();
        assert!(rng.is_same_state(&copy));
        assert!(!rng.is_same_state(&advanced));
    }
}
