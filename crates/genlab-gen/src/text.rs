//! Character and string generators.

use crate::combinators::{choose_unchecked, list_of_n, pick, sequence, union, weighted_table};
use crate::generator::Gen;
use crate::sized::SizedGen;

/// Symbols drawn by [`special_character`].
pub const SPECIAL_CHARACTERS: &[char] = &[
    '!', '£', '$', '%', '^', '&', '*', '+', '-', '=', '@', '#', '~', '?',
];

const OUT_CODE_PATTERNS: &[&str] = &["??##", "??#", "?##", "?#", "?#?", "??#?"];
const IN_CODE_PATTERN: &str = "#??";

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn ascii(code: i32) -> char {
    char::from(code as u8)
}

/// An ASCII letter, `A-Z` or `a-z`; each case is picked on a coin flip.
pub fn letter() -> Gen<char> {
    union(choose_unchecked(65, 91), choose_unchecked(97, 123)).map(ascii)
}

/// An ASCII digit `0-9`.
pub fn digit() -> Gen<char> {
    choose_unchecked(48, 58).map(ascii)
}

/// A letter or a digit, picked on a coin flip.
pub fn alphanumeric() -> Gen<char> {
    union(letter(), digit())
}

/// One of [`SPECIAL_CHARACTERS`].
pub fn special_character() -> Gen<char> {
    pick(SPECIAL_CHARACTERS)
}

/// Builds a string from a pattern: `?` becomes a [`letter`], `#` a
/// [`digit`], and every other character is copied through without a draw.
///
/// ```
/// use genlab_core::Rng;
/// use genlab_gen::text::from_pattern;
///
/// let code = from_pattern("??-##").run(&Rng::simple(7));
/// assert_eq!(code.len(), 5);
/// assert_eq!(&code[2..3], "-");
/// ```
pub fn from_pattern(pattern: &str) -> Gen<String> {
    if pattern.is_empty() {
        return Gen::pure(String::new());
    }
    let parts = pattern
        .chars()
        .map(|c| match c {
            '?' => letter(),
            '#' => digit(),
            literal => Gen::pure(literal),
        })
        .collect();
    sequence(parts).map(String::from_iter)
}

/// `n` letters.
pub fn string_of_length(n: usize) -> Gen<String> {
    list_of_n(n, letter()).map(String::from_iter)
}

/// Letter strings whose length is the size hint.
pub fn string() -> SizedGen<String> {
    SizedGen::from_fn(string_of_length)
}

/// `n` letters or digits.
pub fn alphanumeric_string_of_length(n: usize) -> Gen<String> {
    list_of_n(n, alphanumeric()).map(String::from_iter)
}

/// `n` characters, each a special character, letter or digit weighted
/// 20 / 40 / 40.
pub fn password_of_length(n: usize) -> Gen<String> {
    let character = weighted_table(vec![
        (special_character(), 20),
        (letter(), 40),
        (digit(), 40),
    ]);
    list_of_n(n, character).map(String::from_iter)
}

/// An upper-case UK-style postcode such as `AB12 3CD`.
///
/// The out code follows one of six patterns; the in code is always
/// digit-letter-letter.
pub fn postcode() -> Gen<String> {
    pick(OUT_CODE_PATTERNS)
        .flat_map(from_pattern)
        .map2(from_pattern(IN_CODE_PATTERN), |out_code, in_code| {
            format!("{out_code} {in_code}").to_uppercase()
        })
}
