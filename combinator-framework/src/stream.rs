use common_framework::{Position, TextSlice};
use std::sync::Arc;

/// An immutable cursor over a shared input buffer.
///
/// A `Stream` never moves: consuming a code point via [`Stream::take1`]
/// produces a *new* stream past it while the original stays valid. Parsers
/// backtrack simply by holding on to an earlier stream value; there is no
/// checkpoint machinery to save or restore.
///
/// All streams derived from one input share the same `Arc<str>` buffer, so
/// cloning and advancing are cheap. Input is always well-formed UTF-8 by
/// construction (`str` cannot hold anything else); the stream iterates in
/// code points, never raw bytes.
#[derive(Debug, Clone)]
pub struct Stream {
    buffer: Arc<str>,
    current: usize,
    position: Position,
}

impl Stream {
    /// Creates a stream positioned at the start of the input.
    pub fn new<S: Into<String>>(input: S) -> Self {
        let owned = input.into();
        Self::with_arc(Arc::<str>::from(owned))
    }

    /// Creates a stream from an existing shared buffer.
    pub fn with_arc(buffer: Arc<str>) -> Self {
        Self {
            buffer,
            current: 0,
            position: Position::new(),
        }
    }

    /// Returns the current position in the source.
    pub fn position(&self) -> Position {
        self.position
    }

    /// Returns the current offset in bytes.
    pub fn offset(&self) -> usize {
        self.current
    }

    /// Returns true if no code points remain.
    pub fn is_eof(&self) -> bool {
        self.current >= self.buffer.len()
    }

    /// Returns the next code point without consuming it.
    pub fn peek(&self) -> Option<char> {
        self.buffer[self.current..].chars().next()
    }

    /// Returns the next code point and a stream advanced past it.
    ///
    /// Returns `None` at end of input. The receiver is untouched either
    /// way; advancing an old stream later yields the same successor it
    /// would have yielded earlier.
    pub fn take1(&self) -> Option<(char, Stream)> {
        let ch = self.peek()?;
        let next = Stream {
            buffer: Arc::clone(&self.buffer),
            current: self.current + ch.len_utf8(),
            position: self.position.advance(ch),
        };
        Some((ch, next))
    }

    /// Returns the unconsumed tail of the input.
    pub fn remaining(&self) -> TextSlice {
        TextSlice::new(Arc::clone(&self.buffer), self.current, self.buffer.len())
    }

    /// Renders up to `max_chars` upcoming code points for error messages.
    ///
    /// At end of input this returns `"<EOF>"` so failures always have
    /// something readable to show.
    pub fn snippet(&self, max_chars: usize) -> String {
        if self.is_eof() {
            return "<EOF>".to_string();
        }
        self.remaining().prefix_chars(max_chars).to_string()
    }
}

/// Streams are equal when they view the same buffer at the same offset.
/// Identity of the underlying text matters: equal text in two separate
/// buffers gives unequal streams.
impl PartialEq for Stream {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.buffer, &other.buffer) && self.current == other.current
    }
}

impl Eq for Stream {}
