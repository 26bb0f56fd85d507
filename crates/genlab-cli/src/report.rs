//! Demo report: one pass over the generator library.

use std::collections::BTreeMap;

use genlab_core::{GenError, Rng};
use genlab_gen::generator::double;
use genlab_gen::text::{
    alphanumeric_string_of_length, digit, letter, password_of_length, postcode, string,
};
use genlab_gen::{Gen, both, list_of_n, one_of_gen, pure, weighted, weighted_n};
use serde::Serialize;
use tracing::{info, instrument};

use crate::config::{Config, SourceKind};
use crate::error::AppError;

/// Everything one demo run produced, in draw order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DemoReport {
    /// Source variant the run drew from.
    pub source: SourceKind,
    /// A single postcode.
    pub postcode: String,
    /// `samples` digits.
    pub digits: String,
    /// `samples` doubles in `[0, 1)`.
    pub doubles: Vec<f64>,
    /// `samples` picks from a 0.25 / 0.75 `A` / `B` weighting.
    pub weighted_pair: Vec<&'static str>,
    /// How many of `weighted_pair` are `A`.
    pub weighted_pair_a_count: usize,
    /// Counts of `samples` picks from the 20 / 25 / 54 / 1 symbol table.
    pub weighted_symbols: BTreeMap<char, usize>,
    /// An alphanumeric string of length `samples`.
    pub alphanumeric: String,
    /// `samples` passwords.
    pub passwords: Vec<String>,
    /// A letter followed by a digit.
    pub letter_and_digit: String,
    /// Upper-case letters in a random letter string of length `samples`.
    pub uppercase_in_string: usize,
    /// `samples` postcodes passed through a randomly chosen transformer.
    pub tainted_postcodes: Vec<String>,
}

fn ess_before(s: String) -> String {
    format!("s-{s}")
}

fn que_after(s: String) -> String {
    format!("{s}-q")
}

fn ess_and_que(s: String) -> String {
    ess_before(que_after(s))
}

/// Postcodes run through one of three string transformers, itself chosen
/// at random.
pub fn tainted_postcode() -> Result<Gen<String>, GenError> {
    let transformers: Vec<fn(String) -> String> = vec![ess_before, que_after, ess_and_que];
    let taint = one_of_gen(transformers.into_iter().map(pure).collect())?;
    Ok(taint.apply(postcode()))
}

fn symbol_table() -> Result<Gen<char>, GenError> {
    weighted_n(vec![
        (pure('A'), 20),
        (pure('B'), 25),
        (pure('C'), 54),
        (pure('*'), 1),
    ])
}

/// Runs every demo section, threading the source state from one section
/// into the next.
///
/// # Errors
///
/// Returns `AppError::Generator` if a demo generator cannot be built.
#[instrument(skip(config, rng), fields(source = ?config.source, samples = config.samples))]
pub fn build_report(config: &Config, rng: Rng) -> Result<DemoReport, AppError> {
    let n = config.samples;

    let (rng, postcode) = postcode().step(rng);
    let (rng, digits) = list_of_n(n, digit()).map(String::from_iter).step(rng);
    let (rng, doubles) = list_of_n(n, double()).step(rng);

    let pair = weighted((pure("A"), 0.25), (pure("B"), 0.75))?;
    let (rng, weighted_pair) = pair.list().apply(n).step(rng);
    let weighted_pair_a_count = weighted_pair.iter().filter(|s| **s == "A").count();

    let (rng, symbols) = list_of_n(n, symbol_table()?).step(rng);
    let mut weighted_symbols = BTreeMap::new();
    for symbol in symbols {
        *weighted_symbols.entry(symbol).or_insert(0) += 1;
    }

    let (rng, alphanumeric) = alphanumeric_string_of_length(n).step(rng);
    let (rng, passwords) = list_of_n(n, password_of_length(config.password_length)).step(rng);
    let (rng, (l, d)) = both(letter(), digit()).step(rng);
    let (rng, uppercase_in_string) = string()
        .map(|s| s.chars().filter(char::is_ascii_uppercase).count())
        .apply(n)
        .step(rng);
    let (_, tainted_postcodes) = list_of_n(n, tainted_postcode()?).step(rng);

    info!(
        postcode = %postcode,
        weighted_pair_a_count,
        passwords = passwords.len(),
        "built demo report"
    );

    Ok(DemoReport {
        source: config.source,
        postcode,
        digits,
        doubles,
        weighted_pair,
        weighted_pair_a_count,
        weighted_symbols,
        alphanumeric,
        passwords,
        letter_and_digit: format!("{l}{d}"),
        uppercase_in_string,
        tainted_postcodes,
    })
}
