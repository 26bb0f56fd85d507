//! Shared helpers for generator integration tests.
#![allow(dead_code)]

use std::fmt::Debug;

use genlab_gen::{Gen, Rng};

/// Seeds the law checks run against.
pub const SEEDS: [i64; 4] = [12_345, 42, 0, -987_654_321];

/// Asserts that two generators produce the same value from the same state,
/// for every seed in `SEEDS`.
///
/// Only values are compared: states are reproducible, not comparable.
pub fn assert_same_output<T>(left: &Gen<T>, right: &Gen<T>)
where
    T: PartialEq + Debug + 'static,
{
    for seed in SEEDS {
        let rng = Rng::simple(seed);
        assert_eq!(left.run(&rng), right.run(&rng), "diverged for seed {seed}");
    }
}

/// Draws `count` successive values, threading the state between runs.
pub fn successive<T: 'static>(g: &Gen<T>, rng: Rng, count: usize) -> Vec<T> {
    let mut rng = rng;
    let mut values = Vec::with_capacity(count);
    for _ in 0..count {
        let (next, value) = g.step(rng);
        values.push(value);
        rng = next;
    }
    values
}
