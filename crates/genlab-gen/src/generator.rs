//! The generator type and its functor / applicative / monad operations.
//!
//! A `Gen<T>` is a blueprint: a pure function from a source state to the
//! next source state and a value. Composing generators never draws; only
//! [`Gen::step`] and [`Gen::run`] do, and both are pure with respect to the
//! state they are handed.

use std::fmt;
use std::rc::Rc;

use genlab_core::Rng;

use crate::combinators::{list_of_n, list_of_n_sized};
use crate::sized::SizedGen;

/// A composable pure function `Rng -> (Rng, T)`.
pub struct Gen<T> {
    sample: Rc<dyn Fn(Rng) -> (Rng, T)>,
}

impl<T> Clone for Gen<T> {
    fn clone(&self) -> Self {
        Self {
            sample: Rc::clone(&self.sample),
        }
    }
}

impl<T> fmt::Debug for Gen<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Gen").finish_non_exhaustive()
    }
}

impl<T: 'static> Gen<T> {
    /// Lifts a state transition into a generator.
    pub fn new(sample: impl Fn(Rng) -> (Rng, T) + 'static) -> Self {
        Self {
            sample: Rc::new(sample),
        }
    }

    /// A generator that leaves the state untouched and always yields `value`.
    pub fn pure(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(move |rng| (rng, value.clone()))
    }

    /// Runs the generator, returning the advanced state with the value.
    ///
    /// Thread the returned state into the next call to get a fresh value.
    pub fn step(&self, rng: Rng) -> (Rng, T) {
        (self.sample)(rng)
    }

    /// Runs the generator and discards the advanced state.
    pub fn run(&self, rng: &Rng) -> T {
        self.step(rng.clone()).1
    }

    /// Applies `f` to every generated value.
    pub fn map<U: 'static>(self, f: impl Fn(T) -> U + 'static) -> Gen<U> {
        Gen::new(move |rng| {
            let (rng, a) = self.step(rng);
            (rng, f(a))
        })
    }

    /// Feeds every generated value into `f` and runs the generator it
    /// returns against the advanced state.
    pub fn flat_map<U: 'static>(self, f: impl Fn(T) -> Gen<U> + 'static) -> Gen<U> {
        Gen::new(move |rng| {
            let (rng, a) = self.step(rng);
            f(a).step(rng)
        })
    }

    /// Runs `self`, then `other` on the state `self` returned, and combines
    /// both values.
    ///
    /// The evaluation order is part of the contract: swapping it changes
    /// the output for a given state.
    pub fn map2<U: 'static, V: 'static>(
        self,
        other: Gen<U>,
        f: impl Fn(T, U) -> V + 'static,
    ) -> Gen<V> {
        Gen::new(move |rng| {
            let (rng, a) = self.step(rng);
            let (rng, b) = other.step(rng);
            (rng, f(a, b))
        })
    }

    /// `map2` derived from `flat_map` and `map`; agrees with [`Gen::map2`]
    /// on every state.
    pub fn map2_monadic<U: 'static, V: 'static>(
        self,
        other: Gen<U>,
        f: impl Fn(T, U) -> V + 'static,
    ) -> Gen<V>
    where
        T: Clone,
    {
        let f = Rc::new(f);
        self.flat_map(move |a| {
            let f = Rc::clone(&f);
            other.clone().map(move |b| f(a.clone(), b))
        })
    }

    /// Pairs the values of `self` and `other`, drawn in that order.
    pub fn zip<U: 'static>(self, other: Gen<U>) -> Gen<(T, U)> {
        self.map2(other, |a, b| (a, b))
    }

    /// Picks `self` or `other` on a fair coin flip.
    pub fn union(self, other: Gen<T>) -> Gen<T> {
        crate::combinators::union(self, other)
    }

    /// Runs the generator exactly `n` times, collecting values in draw order.
    pub fn list_of_n(self, n: usize) -> Gen<Vec<T>> {
        list_of_n(n, self)
    }

    /// Draws a length from `size` (negative lengths clamp to 0), then
    /// behaves as [`Gen::list_of_n`].
    pub fn list_of_n_sized(self, size: Gen<i32>) -> Gen<Vec<T>> {
        list_of_n_sized(self, size)
    }

    /// A sized generator of lists whose length is the size hint.
    pub fn list(self) -> SizedGen<Vec<T>> {
        SizedGen::from_fn(move |n| list_of_n(n, self.clone()))
    }

    /// Like [`Gen::list`], but a size hint of 0 is raised to 1.
    pub fn non_empty_list(self) -> SizedGen<Vec<T>> {
        SizedGen::from_fn(move |n| list_of_n(n.max(1), self.clone()))
    }

    /// A sized generator that ignores the size hint.
    pub fn to_sized(self) -> SizedGen<T> {
        SizedGen::from_fn(move |_| self.clone())
    }
}

impl<F: 'static> Gen<F> {
    /// Applies a generated function to a generated argument, drawing the
    /// function first.
    pub fn apply<A: 'static, B: 'static>(self, arg: Gen<A>) -> Gen<B>
    where
        F: Fn(A) -> B,
    {
        self.map2(arg, |f, a| f(a))
    }

    /// Applies a generated two-argument function; draws run function,
    /// first argument, second argument.
    pub fn apply2<A: 'static, B: 'static, C: 'static>(
        self,
        first: Gen<A>,
        second: Gen<B>,
    ) -> Gen<C>
    where
        F: Fn(A, B) -> C,
    {
        self.zip(first).map2(second, |(f, a), b| f(a, b))
    }
}

/// Free-standing form of [`Gen::pure`].
pub fn pure<T: Clone + 'static>(value: T) -> Gen<T> {
    Gen::pure(value)
}

/// Free-standing form of [`Gen::map2`].
pub fn map2<A: 'static, B: 'static, C: 'static>(
    ga: Gen<A>,
    gb: Gen<B>,
    f: impl Fn(A, B) -> C + 'static,
) -> Gen<C> {
    ga.map2(gb, f)
}

/// Free-standing form of [`Gen::apply`].
pub fn apply<F, A, B>(gf: Gen<F>, ga: Gen<A>) -> Gen<B>
where
    F: Fn(A) -> B + 'static,
    A: 'static,
    B: 'static,
{
    gf.apply(ga)
}

/// Pairs two generators' values.
pub fn both<A: 'static, B: 'static>(ga: Gen<A>, gb: Gen<B>) -> Gen<(A, B)> {
    ga.zip(gb)
}

/// Any `i32`.
pub fn int() -> Gen<i32> {
    Gen::new(|rng| rng.next_int())
}

/// An `i32` in `[0, i32::MAX]`.
pub fn non_negative_int() -> Gen<i32> {
    Gen::new(|rng| rng.non_negative_int())
}

/// An `i32` in `[1, i32::MAX - 1]`.
pub fn natural_int() -> Gen<i32> {
    Gen::new(|rng| rng.natural_int())
}

/// An `f64` in `[0.0, 1.0)`; see [`Rng::double`] for the one draw that
/// reaches `1.0`.
pub fn double() -> Gen<f64> {
    Gen::new(|rng| rng.double())
}

/// A fair boolean.
pub fn bool() -> Gen<bool> {
    Gen::new(|rng| rng.bool())
}

#[cfg(test)]
mod tests {
    use super::*;
    use genlab_test_support::sequence;

    #[test]
    fn test_pure_does_not_advance_state() {
        let rng = Rng::incrementing();
        let (next, value) = pure("fixed").step(rng.clone());
        assert_eq!(value, "fixed");
        assert!(next.is_same_state(&rng));
    }

    #[test]
    fn test_primitives_lift_rng_draws() {
        let rng = sequence(&[-5, -5, -5, -5, 3]);
        assert_eq!(int().run(&rng), -5);
        assert_eq!(non_negative_int().run(&rng), 4);
        assert_eq!(natural_int().run(&rng), 5);
        assert!(!bool().run(&rng));
        assert!(double().run(&rng) > 0.0);
    }

    #[test]
    fn test_map_keeps_the_advanced_state() {
        let (rng, doubled) = int().map(|n| n * 2).step(Rng::incrementing());
        assert_eq!(doubled, 2);
        assert_eq!(rng.next_int().1, 2);
    }

    #[test]
    fn test_flat_map_runs_continuation_on_advanced_state() {
        let g = int().flat_map(|n| int().map(move |m| (n, m)));
        assert_eq!(g.run(&Rng::incrementing()), (1, 2));
    }

    #[test]
    fn test_map2_draws_left_then_right() {
        let g = map2(int(), int(), |a, b| (a, b));
        assert_eq!(g.run(&Rng::incrementing()), (1, 2));

        let swapped = map2(int(), int(), |a, b| (b, a));
        assert_eq!(swapped.run(&Rng::incrementing()), (2, 1));
    }

    #[test]
    fn test_map2_monadic_agrees_with_map2() {
        let rng = Rng::simple(987_654);
        let direct = int().map2(double(), |n, d| format!("{n}:{d}"));
        let monadic = int().map2_monadic(double(), |n, d| format!("{n}:{d}"));
        assert_eq!(direct.run(&rng), monadic.run(&rng));
    }

    #[test]
    fn test_apply_draws_function_before_argument() {
        let add_ten = pure(|n: i32| n + 10);
        assert_eq!(apply(add_ten, int()).run(&Rng::incrementing()), 11);

        let offset = int().map(|base| move |n: i32| base * 100 + n);
        assert_eq!(offset.apply(int()).run(&Rng::incrementing()), 102);
    }

    #[test]
    fn test_apply2_draws_function_then_arguments_in_order() {
        let combine = int().map(|tag| move |a: i32, b: i32| vec![tag, a, b]);
        let g = combine.apply2(int(), int());
        assert_eq!(g.run(&Rng::incrementing()), vec![1, 2, 3]);
    }

    #[test]
    fn test_both_pairs_values() {
        let g = both(int(), pure('x'));
        assert_eq!(g.run(&Rng::incrementing()), (1, 'x'));
    }

    #[test]
    fn test_step_threads_state_for_fresh_values() {
        let g = int();
        let (rng, first) = g.step(Rng::incrementing());
        let (_, second) = g.step(rng);
        assert_eq!((first, second), (1, 2));
    }

    #[test]
    fn test_to_sized_ignores_size_hint() {
        let sized = int().to_sized();
        let rng = Rng::simple(3);
        assert_eq!(sized.apply(0).run(&rng), sized.apply(500).run(&rng));
    }

    #[test]
    fn test_non_empty_list_raises_zero_to_one() {
        let sized = pure(7).non_empty_list();
        assert_eq!(sized.apply(0).run(&Rng::incrementing()), vec![7]);
        assert_eq!(sized.apply(3).run(&Rng::incrementing()), vec![7, 7, 7]);
    }

    #[test]
    fn test_list_uses_size_hint_as_length() {
        let sized = int().list();
        assert!(sized.apply(0).run(&Rng::incrementing()).is_empty());
        assert_eq!(sized.apply(4).run(&Rng::incrementing()), vec![1, 2, 3, 4]);
    }
}
