//! The combinator algebra: functions that take parsers and return parsers.
//!
//! Nothing here executes eagerly. Every function builds a new [`Parser`]
//! whose behaviour composes its inputs, and execution happens only when
//! the root parser is run against a stream. Repetition loops iterate
//! rather than recurse, so stack depth stays flat in the input length.

use crate::join::Join;
use crate::parser::Parser;
use crate::primitive::fail;
use crate::result::ParseResult;
use crate::stream::Stream;
use std::sync::Arc;

/// A parsed function value, as produced by a parser in applicative style.
pub type ApplyFn<A, B> = Arc<dyn Fn(A) -> B + Send + Sync>;

/// Runs `parser`; on success applies `f` to the value. Keeps `parser`'s
/// label, and fails exactly when `parser` fails.
pub fn map<T: 'static, U: 'static, F>(parser: Parser<T>, f: F) -> Parser<U>
where
    F: Fn(T) -> U + Send + Sync + 'static,
{
    let label = parser.label().to_string();
    Parser::new(label, move |input| parser.run(input).map(&f))
}

/// Monadic bind: runs `parser`, feeds the value to `k`, and runs the
/// parser `k` returns on the remainder. Failures from either stage
/// propagate unchanged.
pub fn bind<T: 'static, U: 'static, K>(parser: Parser<T>, k: K) -> Parser<U>
where
    K: Fn(T) -> Parser<U> + Send + Sync + 'static,
{
    let label = parser.label().to_string();
    Parser::new(label, move |input| match parser.run(input) {
        ParseResult::Success { value, remaining } => k(value).run(&remaining),
        ParseResult::Failure(error) => ParseResult::Failure(error),
    })
}

/// Applicative application: runs `function` to obtain a function value,
/// then `argument` on the remainder, and applies one to the other.
pub fn apply<A: 'static, B: 'static>(
    function: Parser<ApplyFn<A, B>>,
    argument: Parser<A>,
) -> Parser<B> {
    let label = function.label().to_string();
    Parser::new(label, move |input| match function.run(input) {
        ParseResult::Success { value: f, remaining } => {
            argument.run(&remaining).map(|x| f(x))
        }
        ParseResult::Failure(error) => ParseResult::Failure(error),
    })
}

/// Runs `first`, then `second`; keeps `second`'s value.
pub fn sequence<T: 'static, U: 'static>(first: Parser<T>, second: Parser<U>) -> Parser<U> {
    let label = first.label().to_string();
    Parser::new(label, move |input| first.run(input).continue_with(&second))
}

/// Runs `first`, then `second`; keeps `first`'s value.
pub fn keep_first<T: 'static, U: 'static>(first: Parser<T>, second: Parser<U>) -> Parser<T> {
    let label = first.label().to_string();
    Parser::new(label, move |input| match first.run(input) {
        ParseResult::Success { value, remaining } => match second.run(&remaining) {
            ParseResult::Success { remaining, .. } => ParseResult::success(value, remaining),
            ParseResult::Failure(error) => ParseResult::Failure(error),
        },
        ParseResult::Failure(error) => ParseResult::Failure(error),
    })
}

/// Alias for [`sequence`].
pub fn keep_second<T: 'static, U: 'static>(first: Parser<T>, second: Parser<U>) -> Parser<U> {
    sequence(first, second)
}

/// Tries `first`; on failure re-runs `second` from the *original* input.
/// Backtracking is total: whatever `first` consumed is discarded. When
/// both fail, the failure combines the two labels but reports what the
/// right branch found, since the right branch usually got furthest.
pub fn either<T: 'static>(first: Parser<T>, second: Parser<T>) -> Parser<T> {
    let label = format!("{} or {}", first.label(), second.label());
    let combined = label.clone();
    Parser::new(label, move |input| match first.run(input) {
        success @ ParseResult::Success { .. } => success,
        ParseResult::Failure(_) => match second.run(input) {
            success @ ParseResult::Success { .. } => success,
            ParseResult::Failure(error) => {
                ParseResult::failure(combined.clone(), error.got, error.position)
            }
        },
    })
}

/// Tries each parser in order from the same input; the first success wins.
/// Fails only when every branch fails, reporting all labels joined with
/// `" or "`. At least one parser is required.
pub fn any<T: 'static>(parsers: Vec<Parser<T>>) -> Parser<T> {
    assert!(!parsers.is_empty(), "`any` requires at least one parser");
    let label = parsers
        .iter()
        .map(Parser::label)
        .collect::<Vec<_>>()
        .as_slice()
        .join(" or ");
    let seed: Parser<T> = fail("");
    let folded = parsers
        .into_iter()
        .rev()
        .fold(seed, |rest, parser| either(parser, rest));
    with_label(folded, label)
}

/// Alias for [`any`].
pub fn choice<T: 'static>(parsers: Vec<Parser<T>>) -> Parser<T> {
    any(parsers)
}

/// Runs `first`, then `second` on the remainder, concatenating the values
/// via [`Join`]. Carries `second`'s label; the first failure wins.
pub fn append<T: Join + 'static>(first: Parser<T>, second: Parser<T>) -> Parser<T> {
    let label = second.label().to_string();
    Parser::new(label, move |input| match first.run(input) {
        failure @ ParseResult::Failure(_) => failure,
        left @ ParseResult::Success { .. } => {
            let remaining = left.remaining();
            left.append(second.run(&remaining))
        }
    })
}

/// Left fold of [`append`] over all parsers. At least one is required.
pub fn assemble<T: Join + 'static>(parsers: Vec<Parser<T>>) -> Parser<T> {
    parsers
        .into_iter()
        .reduce(append)
        .expect("`assemble` requires at least one parser")
}

/// Runs every parser in order, collecting each value into a sequence: the
/// result always has exactly one element per input parser.
pub fn collect<T: 'static>(parsers: Vec<Parser<T>>) -> Parser<Vec<T>> {
    assemble(
        parsers
            .into_iter()
            .map(|parser| map(parser, |value| vec![value]))
            .collect(),
    )
}

/// Tries `parser`; on failure succeeds with the empty value instead.
/// Never fails.
pub fn optional<T: Join + 'static>(parser: Parser<T>) -> Parser<T> {
    either(parser, crate::primitive::succeed())
}

/// Repeatedly runs `parser` from `current`, pushing values until it
/// fails. Returns the stream after the last success. Shared by the
/// repetition combinators; iterative so deep input does not grow the
/// call stack.
fn drain<T: 'static>(parser: &Parser<T>, mut current: Stream, values: &mut Vec<T>) -> Stream {
    loop {
        match parser.run(&current) {
            ParseResult::Success { value, remaining } => {
                if remaining.offset() == current.offset() {
                    panic!(
                        "`many` applied to a parser that succeeds without consuming \
                         input (label: {})",
                        parser.label()
                    );
                }
                values.push(value);
                current = remaining;
            }
            ParseResult::Failure(_) => return current,
        }
    }
}

/// Zero or more repetitions, collected into a sequence. Never fails.
///
/// The inner parser must consume input on success; applying `many` to a
/// zero-consumption parser is a grammar bug and panics rather than
/// looping forever.
pub fn many<T: 'static>(parser: Parser<T>) -> Parser<Vec<T>> {
    let label = parser.label().to_string();
    Parser::new(label, move |input| {
        let mut values = Vec::new();
        let remaining = drain(&parser, input.clone(), &mut values);
        ParseResult::success(values, remaining)
    })
}

/// One or more repetitions, collected into a sequence. Fails exactly when
/// the first repetition fails.
pub fn some<T: 'static>(parser: Parser<T>) -> Parser<Vec<T>> {
    let label = parser.label().to_string();
    Parser::new(label, move |input| match parser.run(input) {
        ParseResult::Failure(error) => ParseResult::Failure(error),
        ParseResult::Success { value, remaining } => {
            let mut values = vec![value];
            let remaining = drain(&parser, remaining, &mut values);
            ParseResult::success(values, remaining)
        }
    })
}

/// One or more repetitions, concatenated via [`Join`] instead of collected
/// into a sequence. Useful over strings.
pub fn at_least_one<T: Join + 'static>(parser: Parser<T>) -> Parser<T> {
    let label = parser.label().to_string();
    Parser::new(label, move |input| match parser.run(input) {
        ParseResult::Failure(error) => ParseResult::Failure(error),
        ParseResult::Success { value, remaining } => {
            let mut joined = value;
            let mut current = remaining;
            loop {
                match parser.run(&current) {
                    ParseResult::Success { value, remaining } => {
                        if remaining.offset() == current.offset() {
                            panic!(
                                "`at_least_one` applied to a parser that succeeds without \
                                 consuming input (label: {})",
                                parser.label()
                            );
                        }
                        joined = joined.join(value);
                        current = remaining;
                    }
                    ParseResult::Failure(_) => break,
                }
            }
            ParseResult::success(joined, current)
        }
    })
}

/// Exactly `count` repetitions, concatenated via [`Join`]. `count` must be
/// at least 1. The first failing repetition's failure propagates
/// unchanged.
pub fn repeat<T: Join + 'static>(count: usize, parser: Parser<T>) -> Parser<T> {
    assert!(count >= 1, "`repeat` requires at least one repetition");
    let label = format!("{} times {}", count, parser.label());
    Parser::new(label, move |input| {
        let mut joined = T::empty();
        let mut current = input.clone();
        for _ in 0..count {
            match parser.run(&current) {
                ParseResult::Success { value, remaining } => {
                    joined = joined.join(value);
                    current = remaining;
                }
                ParseResult::Failure(error) => return ParseResult::Failure(error),
            }
        }
        ParseResult::success(joined, current)
    })
}

/// Exactly `count` repetitions, collected into a sequence. `count` must be
/// at least 1.
pub fn repeat_list<T: 'static>(count: usize, parser: Parser<T>) -> Parser<Vec<T>> {
    assert!(count >= 1, "`repeat_list` requires at least one repetition");
    let label = format!("{} times {}", count, parser.label());
    Parser::new(label, move |input| {
        let mut values = Vec::with_capacity(count);
        let mut current = input.clone();
        for _ in 0..count {
            match parser.run(&current) {
                ParseResult::Success { value, remaining } => {
                    values.push(value);
                    current = remaining;
                }
                ParseResult::Failure(error) => return ParseResult::Failure(error),
            }
        }
        ParseResult::success(values, current)
    })
}

/// Runs `open`, then `content`, then `close`, keeping only `content`'s
/// value. Inner failures surface as-is so errors stay precise.
pub fn between<O: 'static, C: 'static, T: 'static>(
    open: Parser<O>,
    close: Parser<C>,
    content: Parser<T>,
) -> Parser<T> {
    keep_second(open, keep_first(content, close)).renamed("between")
}

/// One or more `parser` separated by `separator`: fails exactly when the
/// leading `parser` fails. A trailing separator with nothing after it is
/// left unconsumed.
pub fn sep_by1<S: 'static, T: 'static>(separator: Parser<S>, parser: Parser<T>) -> Parser<Vec<T>> {
    Parser::new("sepBy1", move |input| match parser.run(input) {
        ParseResult::Failure(error) => ParseResult::Failure(error),
        ParseResult::Success { value, remaining } => {
            let mut values = vec![value];
            let mut current = remaining;
            loop {
                let after_separator = match separator.run(&current) {
                    ParseResult::Success { remaining, .. } => remaining,
                    ParseResult::Failure(_) => break,
                };
                match parser.run(&after_separator) {
                    ParseResult::Success { value, remaining } => {
                        if remaining.offset() == current.offset() {
                            panic!(
                                "`sep_by1` applied to parsers that succeed without \
                                 consuming input (labels: {}, {})",
                                separator.label(),
                                parser.label()
                            );
                        }
                        values.push(value);
                        current = remaining;
                    }
                    // Separator without an element after it: give it back.
                    ParseResult::Failure(_) => break,
                }
            }
            ParseResult::success(values, current)
        }
    })
}

/// Zero or more `parser` separated by `separator`. Always succeeds; an
/// empty input yields an empty sequence.
pub fn sep_by<S: 'static, T: 'static>(separator: Parser<S>, parser: Parser<T>) -> Parser<Vec<T>> {
    let nonempty = sep_by1(separator, parser);
    Parser::new("sepBy", move |input| match nonempty.run(input) {
        success @ ParseResult::Success { .. } => success,
        ParseResult::Failure(_) => ParseResult::success(Vec::new(), input.clone()),
    })
}

/// Negative lookahead: succeeds with the empty value iff `parser` fails
/// here, and never consumes input either way.
pub fn not_followed_by<T: 'static>(parser: Parser<T>) -> Parser<String> {
    let label = format!("notFollowedBy({})", parser.label());
    let expected = label.clone();
    Parser::new(label, move |input| match parser.run(input) {
        ParseResult::Success { .. } => {
            ParseResult::failure(expected.clone(), input.snippet(1), input.position())
        }
        ParseResult::Failure(_) => ParseResult::success(String::new(), input.clone()),
    })
}

/// Relabels `parser`: failures report `label` as the expectation while
/// keeping what was found and where. Successes are untouched.
pub fn with_label<T: 'static>(parser: Parser<T>, label: impl Into<String>) -> Parser<T> {
    let label = label.into();
    let expected = label.clone();
    Parser::new(label, move |input| match parser.run(input) {
        success @ ParseResult::Success { .. } => success,
        ParseResult::Failure(error) => {
            ParseResult::failure(expected.clone(), error.got, error.position)
        }
    })
}
