//! Scripted source — replays predetermined draws.

use std::sync::Arc;

use genlab_core::rng::{RandomSource, Rng};

/// A source that returns values from a predetermined sequence, one per
/// draw. Panics if a draw is requested past the end of the sequence.
///
/// Used in tests that need to steer a generator into a specific branch
/// (e.g. forcing a weighted pick-point or a union side).
#[derive(Debug, Clone)]
pub struct SequenceSource {
    values: Arc<[i32]>,
    index: usize,
}

impl SequenceSource {
    /// Create a new `SequenceSource` starting at the first value.
    #[must_use]
    pub fn new(values: Vec<i32>) -> Self {
        Self {
            values: values.into(),
            index: 0,
        }
    }

    /// Number of draws this state has already consumed.
    #[must_use]
    pub fn position(&self) -> usize {
        self.index
    }
}

impl RandomSource for SequenceSource {
    fn next_int(&self) -> (Rng, i32) {
        let value = *self.values.get(self.index).unwrap_or_else(|| {
            panic!(
                "SequenceSource exhausted after {} draws",
                self.values.len()
            )
        });
        let following = Self {
            values: Arc::clone(&self.values),
            index: self.index + 1,
        };
        (Rng::new(following), value)
    }
}

/// Shorthand for an `Rng` over a `SequenceSource`.
#[must_use]
pub fn sequence(values: &[i32]) -> Rng {
    Rng::new(SequenceSource::new(values.to_vec()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draw_advances_position_without_touching_original() {
        let source = SequenceSource::new(vec![7, 8]);
        let (_, first) = source.next_int();
        assert_eq!(first, 7);
        assert_eq!(source.position(), 0);
        assert_eq!(source.next_int().1, 7);
    }

    #[test]
    fn test_position_reports_consumed_draws() {
        let source = SequenceSource::new(vec![3, 4, 5]);
        let advanced = SequenceSource {
            values: Arc::clone(&source.values),
            index: source.position() + 2,
        };
        assert_eq!(advanced.position(), 2);
        assert_eq!(advanced.next_int().1, 5);
    }

    #[test]
    #[should_panic(expected = "SequenceSource exhausted after 1 draws")]
    fn test_exhausted_sequence_panics() {
        let (rng, _) = sequence(&[1]).next_int();
        let _ = rng.next_int();
    }
}
