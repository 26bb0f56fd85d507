//! Genlab Gen — composable pseudo-random value generators.
//!
//! Generators are values. They are built by composition, which never
//! draws, and run against an explicit [`Rng`] state, which is the only
//! step that does:
//!
//! ```
//! use genlab_core::Rng;
//! use genlab_gen::{choose, text};
//!
//! let dice = choose(1, 7).unwrap().list_of_n(3);
//! let label = text::from_pattern("??-##");
//! let roll = dice.zip(label);
//!
//! let rng = Rng::simple(42);
//! assert_eq!(roll.run(&rng), roll.run(&rng));
//! ```

pub mod combinators;
pub mod generator;
pub mod sized;
pub mod text;

pub use combinators::{
    choose, list_of_n, list_of_n_sized, non_empty_vec, one_of, one_of_chars, one_of_gen,
    sequence, traverse, union, weighted, weighted_n,
};
pub use generator::{Gen, apply, both, map2, pure};
pub use genlab_core::{GenError, Rng};
pub use sized::SizedGen;
