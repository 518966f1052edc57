//! The leaf parsers everything else is built from.
//!
//! Each primitive consumes at most one code point, except `string` which
//! matches a literal keyword. Failures carry the parser's label as the
//! expectation and a one-code-point snippet of the input as what was
//! actually found.

use crate::join::Join;
use crate::parser::Parser;
use crate::result::ParseResult;

/// Always succeeds with `value`, consuming nothing.
pub fn pure<T>(value: T) -> Parser<T>
where
    T: Clone + Send + Sync + 'static,
{
    Parser::new("<pure>", move |input| {
        ParseResult::success(value.clone(), input.clone())
    })
}

/// Always fails, reporting `label` as the expectation.
pub fn fail<T: 'static>(label: impl Into<String>) -> Parser<T> {
    let label = label.into();
    let expected = label.clone();
    Parser::new(label, move |input| {
        ParseResult::failure(expected.clone(), input.snippet(1), input.position())
    })
}

/// Always succeeds with the empty value, consuming nothing.
///
/// This is `pure` of the [`Join`] identity: the unit of alternation, and
/// what `optional` falls back to.
pub fn succeed<T: Join + 'static>() -> Parser<T> {
    Parser::new("<pure>", |input| {
        ParseResult::success(T::empty(), input.clone())
    })
}

/// Consumes one code point satisfying `predicate`; fails on a mismatch or
/// at end of input.
pub fn satisfy<F>(predicate: F, label: impl Into<String>) -> Parser<char>
where
    F: Fn(char) -> bool + Send + Sync + 'static,
{
    let label = label.into();
    let expected = label.clone();
    Parser::new(label, move |input| match input.take1() {
        Some((ch, remaining)) if predicate(ch) => ParseResult::success(ch, remaining),
        _ => ParseResult::failure(expected.clone(), input.snippet(1), input.position()),
    })
}

/// Consumes exactly the code point `expected`.
pub fn char(expected: char) -> Parser<char> {
    satisfy(move |ch| ch == expected, format!("'{expected}'"))
}

/// Consumes any single code point; fails only at end of input.
pub fn any_single() -> Parser<char> {
    satisfy(|_| true, "any character")
}

/// Succeeds with the empty value iff the stream is exhausted.
pub fn eof() -> Parser<String> {
    Parser::new("<EOF>", |input| {
        if input.is_eof() {
            ParseResult::success(String::new(), input.clone())
        } else {
            ParseResult::failure("<EOF>", input.snippet(1), input.position())
        }
    })
}

/// Consumes exactly the literal `expected`, code point by code point.
///
/// The failure points at the first mismatching code point, not at the
/// start of the keyword; alternation still backtracks to the original
/// stream on its own.
pub fn string(expected: &str) -> Parser<String> {
    let expected = expected.to_string();
    let label = format!("\"{expected}\"");
    Parser::new(label.clone(), move |input| {
        let mut current = input.clone();
        for ch in expected.chars() {
            match current.take1() {
                Some((found, remaining)) if found == ch => current = remaining,
                _ => {
                    return ParseResult::failure(
                        label.clone(),
                        current.snippet(1),
                        current.position(),
                    )
                }
            }
        }
        ParseResult::success(expected.clone(), current)
    })
}

/// Consumes one ASCII digit.
pub fn digit_char() -> Parser<char> {
    satisfy(|ch| ch.is_ascii_digit(), "digit")
}

/// Consumes one alphanumeric code point.
pub fn alpha_num_char() -> Parser<char> {
    satisfy(|ch| ch.is_alphanumeric(), "letter or digit")
}

/// Consumes one code point contained in `set`.
pub fn one_of(set: &str) -> Parser<char> {
    let set = set.to_string();
    let label = format!("one of \"{set}\"");
    satisfy(move |ch| set.contains(ch), label)
}

/// Consumes one code point *not* contained in `set`.
pub fn none_of(set: &str) -> Parser<char> {
    let set = set.to_string();
    let label = format!("none of \"{set}\"");
    satisfy(move |ch| !set.contains(ch), label)
}
