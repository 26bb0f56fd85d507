//! Derived generators: ranges, choices, weighting and collections.
//!
//! Combinators whose arguments can be invalid validate them up front and
//! return `Result<Gen<T>, GenError>`; a generator handed back here never
//! fails when run.

use genlab_core::GenError;

use crate::generator::{Gen, bool, double, natural_int, non_negative_int};

/// Uniform-ish integer in `[start, stop_exclusive)`.
///
/// Computed as `start + non_negative_int % (stop_exclusive - start)`, which
/// favours low values when the span does not divide `2^31`. Existing
/// fixtures depend on this exact sequence.
///
/// # Errors
///
/// Returns `GenError::InvalidRange` if `stop_exclusive <= start`.
pub fn choose(start: i32, stop_exclusive: i32) -> Result<Gen<i32>, GenError> {
    if stop_exclusive <= start {
        return Err(GenError::InvalidRange {
            start,
            stop: stop_exclusive,
        });
    }
    Ok(choose_unchecked(start, stop_exclusive))
}

#[allow(clippy::cast_possible_truncation)]
pub(crate) fn choose_unchecked(start: i32, stop_exclusive: i32) -> Gen<i32> {
    debug_assert!(start < stop_exclusive, "empty range {start}..{stop_exclusive}");
    let span = i64::from(stop_exclusive) - i64::from(start);
    non_negative_int().map(move |n| (i64::from(start) + i64::from(n) % span) as i32)
}

/// Uniform index into a non-empty slice of length `len`.
#[allow(clippy::cast_sign_loss)]
fn index_below(len: usize) -> Result<Gen<usize>, GenError> {
    if len == 0 {
        return Err(GenError::EmptyChoices);
    }
    let stop = i32::try_from(len).map_err(|_| GenError::TooManyChoices(len))?;
    Ok(choose_unchecked(0, stop).map(|i| i as usize))
}

/// Uniform pick from a fixed, non-empty table.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::cast_sign_loss
)]
pub(crate) fn pick<T: Copy + 'static>(table: &'static [T]) -> Gen<T> {
    debug_assert!(!table.is_empty(), "pick from an empty table");
    choose_unchecked(0, table.len() as i32).map(move |i| table[i as usize])
}

/// Flips a fair coin: `a` on heads, `b` on tails.
pub fn union<T: 'static>(a: Gen<T>, b: Gen<T>) -> Gen<T> {
    bool().flat_map(move |heads| if heads { a.clone() } else { b.clone() })
}

/// Two-way weighted choice.
///
/// Picks `first` when a `[0, 1)` draw falls below
/// `|w1| / (|w1| + |w2|)`, otherwise `second`.
///
/// # Errors
///
/// Returns `GenError::InvalidWeights` if either weight is not finite or
/// both are zero.
pub fn weighted<T: 'static>(
    first: (Gen<T>, f64),
    second: (Gen<T>, f64),
) -> Result<Gen<T>, GenError> {
    let (g1, w1) = first;
    let (g2, w2) = second;
    if !w1.is_finite() || !w2.is_finite() {
        return Err(GenError::InvalidWeights(format!(
            "weights must be finite, got {w1} and {w2}"
        )));
    }
    let total = w1.abs() + w2.abs();
    if total <= 0.0 {
        return Err(GenError::InvalidWeights("total weight is zero".to_owned()));
    }
    let threshold = w1.abs() / total;
    Ok(double().flat_map(move |d| if d < threshold { g1.clone() } else { g2.clone() }))
}

/// N-way weighted choice over integer weights.
///
/// A natural number reduced modulo the total weight gives a pick-point;
/// the first entry whose cumulative weight exceeds it wins. Zero-weight
/// entries are never selected.
///
/// # Errors
///
/// Returns `GenError::InvalidWeights` if `items` is empty or every weight
/// is zero.
pub fn weighted_n<T: 'static>(items: Vec<(Gen<T>, u32)>) -> Result<Gen<T>, GenError> {
    if items.is_empty() {
        return Err(GenError::InvalidWeights("no alternatives given".to_owned()));
    }
    let total: u64 = items.iter().map(|(_, weight)| u64::from(*weight)).sum();
    if total == 0 {
        return Err(GenError::InvalidWeights("total weight is zero".to_owned()));
    }
    Ok(weighted_table(items))
}

pub(crate) fn weighted_table<T: 'static>(items: Vec<(Gen<T>, u32)>) -> Gen<T> {
    let (gens, weights): (Vec<Gen<T>>, Vec<u32>) = items.into_iter().unzip();
    let total: u64 = weights.iter().copied().map(u64::from).sum();
    debug_assert!(total > 0, "weighted table with zero total");
    natural_int()
        .map(move |n| u64::from(n.unsigned_abs()) % total)
        .flat_map(move |pick| gens[bucket_for(&weights, pick)].clone())
}

/// Index of the first bucket whose cumulative weight is strictly greater
/// than `pick`.
fn bucket_for(weights: &[u32], pick: u64) -> usize {
    weights
        .iter()
        .scan(0_u64, |cumulative, weight| {
            *cumulative += u64::from(*weight);
            Some(*cumulative)
        })
        .position(|cumulative| cumulative > pick)
        .unwrap_or(weights.len() - 1)
}

/// Runs `g` exactly `n` times, collecting values in draw order.
///
/// With `n == 0` nothing is drawn and the state comes back unchanged.
pub fn list_of_n<T: 'static>(n: usize, g: Gen<T>) -> Gen<Vec<T>> {
    Gen::new(move |mut rng| {
        let mut items = Vec::with_capacity(n);
        for _ in 0..n {
            let (next, item) = g.step(rng);
            items.push(item);
            rng = next;
        }
        (rng, items)
    })
}

/// Draws a length from `size`, clamps it to at least 0, then runs `g` that
/// many times.
#[allow(clippy::cast_sign_loss)]
pub fn list_of_n_sized<T: 'static>(g: Gen<T>, size: Gen<i32>) -> Gen<Vec<T>> {
    size.flat_map(move |n| list_of_n(n.max(0) as usize, g.clone()))
}

/// A list of between 1 and 126 values.
#[allow(clippy::cast_sign_loss)]
pub fn non_empty_vec<T: 'static>(g: Gen<T>) -> Gen<Vec<T>> {
    choose_unchecked(1, 127).flat_map(move |n| list_of_n(n as usize, g.clone()))
}

/// Turns a list of generators into a generator of lists, running them in
/// order.
pub fn sequence<T: 'static>(gens: Vec<Gen<T>>) -> Gen<Vec<T>> {
    Gen::new(move |mut rng| {
        let mut items = Vec::with_capacity(gens.len());
        for g in &gens {
            let (next, item) = g.step(rng);
            items.push(item);
            rng = next;
        }
        (rng, items)
    })
}

/// Maps each input to a generator and sequences the results.
pub fn traverse<A, B: 'static>(
    inputs: impl IntoIterator<Item = A>,
    f: impl Fn(A) -> Gen<B>,
) -> Gen<Vec<B>> {
    sequence(inputs.into_iter().map(f).collect())
}

/// Uniform choice among values.
///
/// # Errors
///
/// Returns `GenError::EmptyChoices` if `choices` is empty.
pub fn one_of<T: Clone + 'static>(choices: Vec<T>) -> Result<Gen<T>, GenError> {
    Ok(index_below(choices.len())?.map(move |i| choices[i].clone()))
}

/// Uniform choice among generators; the chosen one is run on the state
/// left after the index draw.
///
/// # Errors
///
/// Returns `GenError::EmptyChoices` if `choices` is empty.
pub fn one_of_gen<T: 'static>(choices: Vec<Gen<T>>) -> Result<Gen<T>, GenError> {
    Ok(index_below(choices.len())?.flat_map(move |i| choices[i].clone()))
}

/// Uniform choice among the characters of `choices`.
///
/// # Errors
///
/// Returns `GenError::EmptyChoices` if `choices` is empty.
pub fn one_of_chars(choices: &str) -> Result<Gen<char>, GenError> {
    one_of(choices.chars().collect())
}
