use crate::join::Join;
use crate::parser::Parser;
use crate::stream::Stream;
use common_framework::Position;
use thiserror::Error;

/// The payload of a failed parse: what was expected, what was actually
/// there, and where. Returned as a value, never raised; recovery (via
/// alternation) and rendering are both the caller's choice.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Expected {expected}, got {got} at {position}")]
pub struct ParseError {
    /// Human label of the parser that failed, e.g. `"digit"` or `"'a' or 'b'"`.
    pub expected: String,
    /// Display snippet of the input at the failure point (`"<EOF>"` at end).
    pub got: String,
    /// Where the failure occurred.
    pub position: Position,
}

impl ParseError {
    /// Creates a new failure payload.
    pub fn new(expected: impl Into<String>, got: impl Into<String>, position: Position) -> Self {
        Self {
            expected: expected.into(),
            got: got.into(),
            position,
        }
    }
}

/// The outcome of running a parser against a stream.
///
/// A `Success` carries the parsed value and the stream positioned after
/// whatever was consumed; a `Failure` carries a [`ParseError`]. Reading the
/// value or remainder of a failure is a grammar bug, not an input error,
/// and panics with the underlying failure message.
#[derive(Debug, Clone, PartialEq)]
pub enum ParseResult<T> {
    Success { value: T, remaining: Stream },
    Failure(ParseError),
}

impl<T> ParseResult<T> {
    /// Creates a successful result.
    pub fn success(value: T, remaining: Stream) -> Self {
        ParseResult::Success { value, remaining }
    }

    /// Creates a failed result.
    pub fn failure(expected: impl Into<String>, got: impl Into<String>, position: Position) -> Self {
        ParseResult::Failure(ParseError::new(expected, got, position))
    }

    /// Returns true if the parse succeeded.
    pub fn is_success(&self) -> bool {
        matches!(self, ParseResult::Success { .. })
    }

    /// Returns true if the parse failed.
    pub fn is_failure(&self) -> bool {
        matches!(self, ParseResult::Failure(_))
    }

    /// Returns the parsed value.
    ///
    /// Panics on a failure: callers must check the discriminant (or use
    /// [`ParseResult::into_result`]) before unwrapping.
    pub fn value(self) -> T {
        match self {
            ParseResult::Success { value, .. } => value,
            ParseResult::Failure(error) => {
                panic!("reading the value of a failed parse: {error}")
            }
        }
    }

    /// Returns the stream positioned after the consumed input.
    ///
    /// Panics on a failure, like [`ParseResult::value`].
    pub fn remaining(&self) -> Stream {
        match self {
            ParseResult::Success { remaining, .. } => remaining.clone(),
            ParseResult::Failure(error) => {
                panic!("reading the remainder of a failed parse: {error}")
            }
        }
    }

    /// Returns the failure payload.
    ///
    /// Panics on a success; the mirror image of [`ParseResult::value`].
    pub fn error(&self) -> &ParseError {
        match self {
            ParseResult::Failure(error) => error,
            ParseResult::Success { .. } => {
                panic!("reading the error of a successful parse")
            }
        }
    }

    /// Converts into a plain `Result` for callers that want `?`.
    pub fn into_result(self) -> Result<(T, Stream), ParseError> {
        match self {
            ParseResult::Success { value, remaining } => Ok((value, remaining)),
            ParseResult::Failure(error) => Err(error),
        }
    }

    /// Applies `f` to the value of a success; a failure passes through
    /// untouched (only retagged to the new value type).
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> ParseResult<U> {
        match self {
            ParseResult::Success { value, remaining } => ParseResult::Success {
                value: f(value),
                remaining,
            },
            ParseResult::Failure(error) => ParseResult::Failure(error),
        }
    }

    /// Runs `next` against the remainder of a success; a failure passes
    /// through untouched with the same expected/got/position.
    pub fn continue_with<U: 'static>(self, next: &Parser<U>) -> ParseResult<U> {
        match self {
            ParseResult::Success { remaining, .. } => next.run(&remaining),
            ParseResult::Failure(error) => ParseResult::Failure(error),
        }
    }
}

impl<T: Join> ParseResult<T> {
    /// Concatenates two successes via [`Join`], keeping `other`'s
    /// remainder. If either side failed, the first failure wins.
    pub fn append(self, other: ParseResult<T>) -> ParseResult<T> {
        match (self, other) {
            (
                ParseResult::Success { value: left, .. },
                ParseResult::Success {
                    value: right,
                    remaining,
                },
            ) => ParseResult::Success {
                value: left.join(right),
                remaining,
            },
            (ParseResult::Failure(error), _) => ParseResult::Failure(error),
            (_, ParseResult::Failure(error)) => ParseResult::Failure(error),
        }
    }
}
