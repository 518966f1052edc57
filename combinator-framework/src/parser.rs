use crate::combinator::{self, ApplyFn};
use crate::join::Join;
use crate::result::ParseResult;
use crate::stream::Stream;
use std::sync::Arc;

/// The function a parser wraps: pure, shareable, re-runnable.
pub type RunFn<T> = dyn Fn(&Stream) -> ParseResult<T> + Send + Sync;

/// A first-class parser: a human-readable label plus a pure function from
/// stream to result.
///
/// Parsers are values. They are built once, composed freely, cloned
/// cheaply (the behaviour lives behind an `Arc`), shared across threads,
/// and only ever *do* anything when run against a stream. Running the same
/// parser on the same stream twice yields equal results.
///
/// The label travels into failures as the `expected` text and is composed
/// by combinators (`"'a' or 'b'"`, `"3 times digit"`). It never influences
/// what the parser accepts.
pub struct Parser<T> {
    label: String,
    run: Arc<RunFn<T>>,
}

impl<T> Clone for Parser<T> {
    fn clone(&self) -> Self {
        Parser {
            label: self.label.clone(),
            run: Arc::clone(&self.run),
        }
    }
}

impl<T> std::fmt::Debug for Parser<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Parser").field("label", &self.label).finish()
    }
}

impl<T: 'static> Parser<T> {
    /// Creates a parser from a label and a run function.
    pub fn new<F>(label: impl Into<String>, run: F) -> Self
    where
        F: Fn(&Stream) -> ParseResult<T> + Send + Sync + 'static,
    {
        Parser {
            label: label.into(),
            run: Arc::new(run),
        }
    }

    /// Runs the parser against a stream.
    pub fn run(&self, input: &Stream) -> ParseResult<T> {
        (self.run)(input)
    }

    /// Convenience: builds a stream over `input` and runs against it.
    pub fn parse(&self, input: &str) -> ParseResult<T> {
        self.run(&Stream::new(input))
    }

    /// Returns the human-readable label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Replaces this parser's label in the same behaviour, so failures
    /// report `label` as the expectation. See [`combinator::with_label`].
    pub fn with_label(self, label: impl Into<String>) -> Parser<T> {
        combinator::with_label(self, label)
    }

    /// Renames the parser without touching its failures. Used by composite
    /// combinators that want a descriptive label while still letting the
    /// deepest inner failure surface.
    pub(crate) fn renamed(self, label: impl Into<String>) -> Parser<T> {
        Parser {
            label: label.into(),
            run: self.run,
        }
    }

    // The methods below mirror the free combinators exactly; both
    // spellings produce identical parsers.

    /// Method form of [`combinator::map`].
    pub fn map<U: 'static, F>(self, f: F) -> Parser<U>
    where
        F: Fn(T) -> U + Send + Sync + 'static,
    {
        combinator::map(self, f)
    }

    /// Method form of [`combinator::bind`].
    pub fn bind<U: 'static, K>(self, k: K) -> Parser<U>
    where
        K: Fn(T) -> Parser<U> + Send + Sync + 'static,
    {
        combinator::bind(self, k)
    }

    /// Method form of [`combinator::sequence`]: this, then `next`,
    /// keeping `next`'s value.
    pub fn sequence<U: 'static>(self, next: Parser<U>) -> Parser<U> {
        combinator::sequence(self, next)
    }

    /// Method form of [`combinator::keep_first`]: this, then `next`,
    /// keeping this parser's value.
    pub fn keep_first<U: 'static>(self, next: Parser<U>) -> Parser<T> {
        combinator::keep_first(self, next)
    }

    /// Alias for [`Parser::keep_first`].
    pub fn then_ignore<U: 'static>(self, next: Parser<U>) -> Parser<T> {
        combinator::keep_first(self, next)
    }

    /// Method form of [`combinator::either`]: this, or on failure `other`
    /// from the original input.
    pub fn or(self, other: Parser<T>) -> Parser<T> {
        combinator::either(self, other)
    }

    /// Method form of [`combinator::not_followed_by`].
    pub fn not_followed_by(self) -> Parser<String> {
        combinator::not_followed_by(self)
    }
}

impl<T: Join + 'static> Parser<T> {
    /// Method form of [`combinator::append`]: this, then `next`, values
    /// concatenated.
    pub fn append(self, next: Parser<T>) -> Parser<T> {
        combinator::append(self, next)
    }
}

impl<A: 'static, B: 'static> Parser<ApplyFn<A, B>> {
    /// Method form of [`combinator::apply`]: runs this parser for a
    /// function, then `argument` for its input.
    pub fn apply(self, argument: Parser<A>) -> Parser<B> {
        combinator::apply(self, argument)
    }
}
