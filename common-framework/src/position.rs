/// Represents a location in the source text.
///
/// Tracked by streams during parsing and carried into parse failures so
/// that errors can point at the exact line and column they occurred on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    /// Line number (1-indexed)
    pub line: usize,
    /// Column number (1-indexed, counted in code points)
    pub column: usize,
    /// Byte offset from the start of the input
    pub offset: usize,
}

impl Position {
    /// Creates a new position at the start of the input.
    pub fn new() -> Self {
        Self {
            line: 1,
            column: 1,
            offset: 0,
        }
    }

    /// Creates a position with the given values.
    pub fn at(line: usize, column: usize, offset: usize) -> Self {
        Self {
            line,
            column,
            offset,
        }
    }

    /// Returns the position one code point past this one.
    ///
    /// A line feed starts a new line and resets the column to 1; every
    /// other code point advances the column. The byte offset always grows
    /// by the UTF-8 width of the code point.
    pub fn advance(self, ch: char) -> Self {
        let (line, column) = if ch == '\n' {
            (self.line + 1, 1)
        } else {
            (self.line, self.column + 1)
        };
        Self {
            line,
            column,
            offset: self.offset + ch.len_utf8(),
        }
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "line {} column {}", self.line, self.column)
    }
}
